use async_trait::async_trait;
use tracing::warn;

use super::defaults;
use super::domain::{course_items, BannerRecord, CourseRecord, JobPosting};
use super::roles::{select_in_range, BannerRole, OrderRange};
use crate::rotation::ItemList;

/// One-shot retrieval of the ordered lists the core presents.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_banners(&self) -> Result<Vec<BannerRecord>, FetchError>;
    async fn fetch_jobs(&self) -> Result<Vec<JobPosting>, FetchError>;
    async fn fetch_courses(&self) -> Result<Vec<CourseRecord>, FetchError>;
}

/// Content fetch failure. Callers absorb these by falling back to defaults.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("content transport failed: {0}")]
    Transport(String),
    #[error("content endpoint answered with status {0}")]
    Status(u16),
    #[error("content payload could not be decoded: {0}")]
    Decode(String),
}

fn role_defaults(role: BannerRole) -> ItemList {
    match role {
        BannerRole::Hero => defaults::hero_items(),
        BannerRole::Team => defaults::team_items(),
    }
}

/// Loads the items for `role`, or the built-in set when the feed fails or has nothing in range.
pub async fn load_role<S>(source: &S, role: BannerRole, range: OrderRange) -> ItemList
where
    S: ContentSource + ?Sized,
{
    match source.fetch_banners().await {
        Ok(records) => {
            let items = select_in_range(&records, range);
            if items.is_empty() {
                warn!(
                    role = role.label(),
                    start = range.start(),
                    end = range.end(),
                    "no active banners in range; using defaults"
                );
                role_defaults(role)
            } else {
                ItemList::new(items)
            }
        }
        Err(error) => {
            warn!(role = role.label(), %error, "banner fetch failed; using defaults");
            role_defaults(role)
        }
    }
}

/// Course slides. There is no built-in catalog, so a failure yields an empty (hidden) strip.
pub async fn load_courses<S>(source: &S) -> ItemList
where
    S: ContentSource + ?Sized,
{
    match source.fetch_courses().await {
        Ok(courses) => ItemList::new(course_items(&courses)),
        Err(error) => {
            warn!(%error, "course fetch failed; hiding course slides");
            ItemList::empty()
        }
    }
}

pub async fn load_jobs<S>(source: &S) -> Vec<JobPosting>
where
    S: ContentSource + ?Sized,
{
    match source.fetch_jobs().await {
        Ok(jobs) => jobs,
        Err(error) => {
            warn!(%error, "job fetch failed; careers board stays empty");
            Vec::new()
        }
    }
}
