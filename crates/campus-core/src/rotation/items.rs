use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Media carried by a rotation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    #[serde(other)]
    Unsupported,
}

/// Externally supplied slide. The engine only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationItem {
    pub id: String,
    pub media_url: String,
    pub media_kind: MediaKind,
    pub rank: i64,
}

impl RotationItem {
    pub fn image(id: impl Into<String>, media_url: impl Into<String>, rank: i64) -> Self {
        Self {
            id: id.into(),
            media_url: media_url.into(),
            media_kind: MediaKind::Image,
            rank,
        }
    }

    pub fn video(id: impl Into<String>, media_url: impl Into<String>, rank: i64) -> Self {
        Self {
            id: id.into(),
            media_url: media_url.into(),
            media_kind: MediaKind::Video,
            rank,
        }
    }
}

/// Identity of one loaded list. Two lists with the same contents still differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListIdentity(u64);

static LIST_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_list_identity() -> ListIdentity {
    ListIdentity(LIST_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Immutable, shared item list as handed over by the content fetcher.
///
/// Cloning keeps the identity; building a new list from the same items does not.
#[derive(Debug, Clone)]
pub struct ItemList {
    identity: ListIdentity,
    items: Arc<[RotationItem]>,
}

impl ItemList {
    pub fn new(items: Vec<RotationItem>) -> Self {
        Self {
            identity: next_list_identity(),
            items: items.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn identity(&self) -> ListIdentity {
        self.identity
    }

    pub fn items(&self) -> &[RotationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RotationItem> {
        self.items.get(index)
    }
}

impl Default for ItemList {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_contents_get_distinct_identities() {
        let items = vec![RotationItem::image("a", "/a.jpg", 1)];
        let first = ItemList::new(items.clone());
        let second = ItemList::new(items);
        assert_ne!(first.identity(), second.identity());
        assert_eq!(first.clone().identity(), first.identity());
    }

    #[test]
    fn unknown_media_kind_deserializes_as_unsupported() {
        let kind: MediaKind = serde_json::from_str("\"audio\"").expect("kind parses");
        assert_eq!(kind, MediaKind::Unsupported);
        let kind: MediaKind = serde_json::from_str("\"video\"").expect("kind parses");
        assert_eq!(kind, MediaKind::Video);
    }
}
