//! Content rotation engine: timed carousels, viewport-driven windows, and marquees.

mod carousel;
mod driver;
mod items;
mod marquee;
mod timer;
mod viewport;

pub use carousel::{Carousel, CarouselFrame, CarouselSettings, RotationState, VideoPlayback};
pub use driver::{RotationDriver, RotationSnapshot};
pub use items::{ItemList, ListIdentity, MediaKind, RotationItem};
pub use marquee::{Marquee, MarqueeDirection};
pub use timer::{ScheduledTask, TickControl, TimerError};
pub use viewport::{Breakpoints, ViewportClass};
