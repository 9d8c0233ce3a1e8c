//! Field and attachment helpers shared by the wizard and the preview harness.

use mime::Mime;

/// Fewest digits a phone number may carry; punctuation and spaces do not count.
pub const MIN_PHONE_DIGITS: usize = 10;

const MSWORD: &str = "application/msword";
const WORD_OOXML: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn phone_digit_count(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

pub fn phone_is_valid(phone: &str) -> bool {
    phone_digit_count(phone) >= MIN_PHONE_DIGITS
}

/// Parsed `type/subtype` of a declared content type, or `None` when it is blank or malformed.
pub fn canonical_content_type(raw: &str) -> Option<String> {
    raw.trim()
        .parse::<Mime>()
        .ok()
        .map(|parsed| parsed.essence_str().to_string())
}

/// Accepts PDF and Word documents. The extension decides only when no content type is declared
/// or it is `application/octet-stream`; a malformed declared type is rejected.
pub fn is_accepted_resume_type(content_type: Option<&str>, file_name: &str) -> bool {
    let declared = content_type.filter(|raw| !is_blank(raw));
    let Some(raw) = declared else {
        return has_resume_extension(file_name);
    };
    match canonical_content_type(raw) {
        Some(essence) if essence == mime::APPLICATION_OCTET_STREAM.essence_str() => {
            has_resume_extension(file_name)
        }
        Some(essence) => {
            essence == mime::APPLICATION_PDF.essence_str()
                || essence == MSWORD
                || essence == WORD_OOXML
        }
        None => false,
    }
}

fn has_resume_extension(file_name: &str) -> bool {
    let lowered = file_name.to_ascii_lowercase();
    match lowered.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => matches!(ext, "pdf" | "doc" | "docx"),
        _ => false,
    }
}

/// Human readable size for inline messages, e.g. `5 MB` or `730 KB`.
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;

    if bytes >= MIB {
        let whole = bytes / MIB;
        let tenths = (bytes % MIB) * 10 / MIB;
        if tenths == 0 {
            format!("{whole} MB")
        } else {
            format!("{whole}.{tenths} MB")
        }
    } else if bytes >= KIB {
        format!("{} KB", bytes / KIB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_counts_digits_only() {
        assert_eq!(phone_digit_count("+1 (555) 010-2030"), 11);
        assert!(phone_is_valid("555 010 2030"));
        assert!(!phone_is_valid("555-0102"));
        assert!(!phone_is_valid("phone number"));
    }

    #[test]
    fn resume_type_uses_content_type_then_extension() {
        assert!(is_accepted_resume_type(Some("application/pdf"), "cv"));
        assert!(is_accepted_resume_type(Some(WORD_OOXML), "cv.bin"));
        assert!(!is_accepted_resume_type(Some("image/png"), "cv.pdf"));
        assert!(is_accepted_resume_type(None, "Resume.DOCX"));
        assert!(is_accepted_resume_type(
            Some("application/octet-stream"),
            "resume.doc"
        ));
        assert!(!is_accepted_resume_type(None, ".pdf"));
        assert!(!is_accepted_resume_type(None, "notes.txt"));
        assert!(is_accepted_resume_type(Some("  "), "cv.pdf"));
    }

    #[test]
    fn malformed_content_type_is_rejected_even_with_a_good_extension() {
        assert!(!is_accepted_resume_type(Some("pdf"), "cv.pdf"));
        assert_eq!(canonical_content_type("pdf"), None);
        assert_eq!(
            canonical_content_type(" application/pdf; charset=binary "),
            Some("application/pdf".to_string())
        );
    }

    #[test]
    fn formats_sizes_for_messages() {
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
        assert_eq!(format_file_size(730 * 1024), "730 KB");
        assert_eq!(format_file_size(12), "12 B");
    }
}
