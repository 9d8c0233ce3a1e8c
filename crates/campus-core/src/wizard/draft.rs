use std::fmt;

use crate::validation::{
    canonical_content_type, format_file_size, is_accepted_resume_type, is_blank,
    phone_digit_count, phone_is_valid, MIN_PHONE_DIGITS,
};

/// Text inputs on the Details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FullName,
    Phone,
    Email,
}

impl DraftField {
    /// Maps form control names (`fullName`, `phone`, `email`) onto fields.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fullName" | "full_name" | "name" => Some(Self::FullName),
            "phone" => Some(Self::Phone),
            "email" => Some(Self::Email),
            _ => None,
        }
    }
}

/// Resume picked by the applicant.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeAttachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ResumeAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl fmt::Debug for ResumeAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Local rejection of a resume. The draft is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    TooLarge { size: u64, limit: u64 },
    UnsupportedType { file_name: String },
    WizardClosed,
}

impl fmt::Display for AttachmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentError::TooLarge { limit, .. } => {
                write!(f, "File size must be less than {}", format_file_size(*limit))
            }
            AttachmentError::UnsupportedType { file_name } => {
                write!(f, "Only PDF or Word documents are accepted ({file_name})")
            }
            AttachmentError::WizardClosed => write!(f, "application form is not open"),
        }
    }
}

impl std::error::Error for AttachmentError {}

/// Inline problem with a Details input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    MissingFullName,
    MissingEmail,
    PhoneTooShort { digits: usize },
    MissingResume,
}

impl FieldIssue {
    pub fn message(&self) -> String {
        match self {
            FieldIssue::MissingFullName => "Full name is required".to_string(),
            FieldIssue::MissingEmail => "Email is required".to_string(),
            FieldIssue::PhoneTooShort { digits } => format!(
                "Phone number needs at least {MIN_PHONE_DIGITS} digits (found {digits})"
            ),
            FieldIssue::MissingResume => "Please attach your resume".to_string(),
        }
    }
}

/// In-progress applicant data for one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub resume: Option<ResumeAttachment>,
}

impl ApplicationDraft {
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::FullName => self.full_name = value,
            DraftField::Phone => self.phone = value,
            DraftField::Email => self.email = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FullName => &self.full_name,
            DraftField::Phone => &self.phone,
            DraftField::Email => &self.email,
        }
    }

    /// Checks size then type before replacing the current resume.
    ///
    /// The stored content type is the parsed essence, so the submission sends exactly what passed.
    pub fn attach(
        &mut self,
        mut resume: ResumeAttachment,
        max_bytes: u64,
    ) -> Result<(), AttachmentError> {
        let size = resume.size();
        if size > max_bytes {
            return Err(AttachmentError::TooLarge {
                size,
                limit: max_bytes,
            });
        }
        if !is_accepted_resume_type(resume.content_type.as_deref(), &resume.file_name) {
            return Err(AttachmentError::UnsupportedType {
                file_name: resume.file_name,
            });
        }
        resume.content_type = resume
            .content_type
            .as_deref()
            .and_then(canonical_content_type);
        self.resume = Some(resume);
        Ok(())
    }

    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if is_blank(&self.full_name) {
            issues.push(FieldIssue::MissingFullName);
        }
        if is_blank(&self.email) {
            issues.push(FieldIssue::MissingEmail);
        }
        if !phone_is_valid(&self.phone) {
            issues.push(FieldIssue::PhoneTooShort {
                digits: phone_digit_count(&self.phone),
            });
        }
        if self.resume.is_none() {
            issues.push(FieldIssue::MissingResume);
        }
        issues
    }

    pub fn is_valid(&self) -> bool {
        self.issues().is_empty()
    }
}
