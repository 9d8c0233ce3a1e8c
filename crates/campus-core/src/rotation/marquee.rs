use std::time::Duration;

use super::items::{ItemList, RotationItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarqueeDirection {
    #[default]
    Forward,
    Reverse,
}

/// Continuous strip for logos and testimonials.
///
/// The sequence is laid out twice back to back; translating the track by half
/// its length lands on a frame identical to the start, which hides the loop.
#[derive(Debug, Clone)]
pub struct Marquee {
    list: ItemList,
    row_duration: Duration,
    direction: MarqueeDirection,
}

impl Marquee {
    pub fn new(list: ItemList, row_duration: Duration, direction: MarqueeDirection) -> Self {
        Self {
            list,
            row_duration,
            direction,
        }
    }

    pub fn is_rendered(&self) -> bool {
        !self.list.is_empty()
    }

    pub fn direction(&self) -> MarqueeDirection {
        self.direction
    }

    pub fn row_duration(&self) -> Duration {
        self.row_duration
    }

    pub fn track(&self) -> Vec<&RotationItem> {
        self.list
            .items()
            .iter()
            .chain(self.list.items().iter())
            .collect()
    }

    /// Leftward translation as a fraction of the track length, within `[0, 0.5]`.
    ///
    /// Forward runs 0 to 0.5 over one row duration; reverse runs 0.5 to 0.
    pub fn offset_at(&self, elapsed: Duration) -> Option<f64> {
        if !self.is_rendered() {
            return None;
        }
        let period = self.row_duration.as_nanos();
        if period == 0 {
            return Some(0.0);
        }
        let phase = (elapsed.as_nanos() % period) as f64 / period as f64;
        let offset = match self.direction {
            MarqueeDirection::Forward => phase * 0.5,
            MarqueeDirection::Reverse => (1.0 - phase) * 0.5,
        };
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logos() -> ItemList {
        ItemList::new(vec![
            RotationItem::image("acme", "/logos/acme.svg", 1),
            RotationItem::image("globex", "/logos/globex.svg", 2),
            RotationItem::image("initech", "/logos/initech.svg", 3),
        ])
    }

    #[test]
    fn track_repeats_sequence_twice() {
        let marquee = Marquee::new(logos(), Duration::from_secs(30), MarqueeDirection::Forward);
        let ids: Vec<&str> = marquee.track().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["acme", "globex", "initech", "acme", "globex", "initech"]
        );
    }

    #[test]
    fn forward_offset_loops_every_row_duration() {
        let marquee = Marquee::new(logos(), Duration::from_secs(20), MarqueeDirection::Forward);
        assert_eq!(marquee.offset_at(Duration::ZERO), Some(0.0));
        assert_eq!(marquee.offset_at(Duration::from_secs(10)), Some(0.25));
        assert_eq!(marquee.offset_at(Duration::from_secs(20)), Some(0.0));
        assert_eq!(marquee.offset_at(Duration::from_secs(25)), Some(0.125));
    }

    #[test]
    fn reverse_offset_runs_backwards() {
        let marquee = Marquee::new(logos(), Duration::from_secs(20), MarqueeDirection::Reverse);
        assert_eq!(marquee.offset_at(Duration::ZERO), Some(0.5));
        assert_eq!(marquee.offset_at(Duration::from_secs(10)), Some(0.25));
        assert_eq!(marquee.offset_at(Duration::from_secs(15)), Some(0.125));
    }

    #[test]
    fn empty_marquee_is_not_rendered() {
        let marquee = Marquee::new(
            ItemList::empty(),
            Duration::from_secs(20),
            MarqueeDirection::Forward,
        );
        assert!(!marquee.is_rendered());
        assert!(marquee.track().is_empty());
        assert_eq!(marquee.offset_at(Duration::from_secs(3)), None);
    }
}
