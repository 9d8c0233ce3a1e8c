use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rotation::{MediaKind, RotationItem};

/// Banner row as returned by `GET /api/banners`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "resourceType")]
    pub resource_type: MediaKind,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: i64,
}

impl BannerRecord {
    pub fn to_item(&self) -> RotationItem {
        RotationItem {
            id: self.id.clone(),
            media_url: self.file_url.clone(),
            media_kind: self.resource_type,
            rank: self.order,
        }
    }
}

/// Job opening from `GET /api/jobs`; the wizard's job context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "employmentType", default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl JobPosting {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: None,
            employment_type: None,
            description: None,
            created_at: None,
        }
    }
}

pub fn find_job<'a>(jobs: &'a [JobPosting], id: &str) -> Option<&'a JobPosting> {
    jobs.iter().find(|job| job.id == id)
}

/// Course entry from `GET /api/courses`, only what the slide strip needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "imageUrl", alias = "image", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// Courses keep their catalog order; the position becomes the rank.
pub fn course_items(courses: &[CourseRecord]) -> Vec<RotationItem> {
    courses
        .iter()
        .enumerate()
        .map(|(position, course)| RotationItem {
            id: course.id.clone(),
            media_url: course.image_url.clone().unwrap_or_default(),
            media_kind: MediaKind::Image,
            rank: position as i64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_record_reads_wire_names_and_ignores_extras() {
        let raw = r#"{"_id":"b1","fileUrl":"https://cdn/x.mp4","resourceType":"video","isActive":true,"order":3,"title":"ignored"}"#;
        let record: BannerRecord = serde_json::from_str(raw).expect("banner parses");
        assert_eq!(record.id, "b1");
        assert_eq!(record.resource_type, MediaKind::Video);
        assert!(record.is_active);
        assert_eq!(record.to_item().rank, 3);
    }

    #[test]
    fn job_posting_tolerates_missing_optional_fields() {
        let job: JobPosting = serde_json::from_str(r#"{"title":"Engineer"}"#).expect("job parses");
        assert_eq!(job.title, "Engineer");
        assert!(job.id.is_empty());
        assert!(job.created_at.is_none());

        let jobs = vec![JobPosting::new("j1", "Trainer"), JobPosting::new("j2", "Mentor")];
        assert_eq!(find_job(&jobs, "j2").map(|job| job.title.as_str()), Some("Mentor"));
        assert!(find_job(&jobs, "j3").is_none());
    }

    #[test]
    fn course_items_rank_by_position() {
        let courses: Vec<CourseRecord> = serde_json::from_str(
            r#"[{"_id":"c1","title":"Rust","image":"/rust.png"},{"_id":"c2","title":"Go"}]"#,
        )
        .expect("courses parse");
        let items = course_items(&courses);
        assert_eq!(items[0].media_url, "/rust.png");
        assert_eq!(items[1].rank, 1);
        assert_eq!(items[1].media_url, "");
    }
}
