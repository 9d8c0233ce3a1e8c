use campus_preview::run;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("preview error: {err}");
        std::process::exit(1);
    }
}
