//! Boundary with the backend's content feeds: wire models, role filtering, and fallbacks.

pub mod defaults;
pub mod domain;
mod roles;
mod source;

pub use domain::{course_items, find_job, BannerRecord, CourseRecord, JobPosting};
pub use roles::{select_in_range, BannerRole, OrderRange};
pub use source::{load_courses, load_jobs, load_role, ContentSource, FetchError};
