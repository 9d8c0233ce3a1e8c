use tracing::debug;

use super::domain::BannerRecord;
use crate::rotation::{MediaKind, RotationItem};

/// Inclusive `order` window that carves one presentation role out of the banner feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRange {
    start: i64,
    end: i64,
}

impl OrderRange {
    /// Reversed bounds are swapped rather than producing an empty window.
    pub fn new(start: i64, end: i64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Parses `START-END` (whitespace tolerated) or a single order value.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        match trimmed.split_once('-') {
            Some((start, end)) => {
                let start = start.trim().parse().ok()?;
                let end = end.trim().parse().ok()?;
                Some(Self::new(start, end))
            }
            None => trimmed.parse().ok().map(|value| Self::new(value, value)),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn contains(&self, order: i64) -> bool {
        self.start <= order && order <= self.end
    }
}

/// Presentation roles multiplexed onto `/api/banners`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerRole {
    Hero,
    Team,
}

impl BannerRole {
    pub const fn label(self) -> &'static str {
        match self {
            BannerRole::Hero => "hero",
            BannerRole::Team => "team",
        }
    }
}

/// Active records inside `range`, ordered by rank then id.
pub fn select_in_range(records: &[BannerRecord], range: OrderRange) -> Vec<RotationItem> {
    let mut selected: Vec<RotationItem> = records
        .iter()
        .filter(|record| record.is_active && range.contains(record.order))
        .filter(|record| {
            let supported = record.resource_type != MediaKind::Unsupported;
            if !supported {
                debug!(banner = %record.id, "skipping banner with unsupported media type");
            }
            supported
        })
        .map(BannerRecord::to_item)
        .collect();

    selected.sort_by(|left, right| {
        left.rank
            .cmp(&right.rank)
            .then_with(|| left.id.cmp(&right.id))
    });
    selected
}
