use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Answer to a policy question. `Unanswered` is distinct from `No`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConsentAnswer {
    #[default]
    Unanswered,
    Yes,
    No,
}

impl ConsentAnswer {
    pub const fn as_wire(self) -> Option<&'static str> {
        match self {
            ConsentAnswer::Unanswered => None,
            ConsentAnswer::Yes => Some("yes"),
            ConsentAnswer::No => Some("no"),
        }
    }
}

impl Serialize for ConsentAnswer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_wire() {
            Some(value) => serializer.serialize_str(value),
            None => serializer.serialize_none(),
        }
    }
}

/// The four policy questions on the Consent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsentQuestion {
    BackgroundVerification,
    ReferenceCheck,
    WorkAuthorization,
    DataRetention,
}

impl ConsentQuestion {
    pub const ALL: [ConsentQuestion; 4] = [
        ConsentQuestion::BackgroundVerification,
        ConsentQuestion::ReferenceCheck,
        ConsentQuestion::WorkAuthorization,
        ConsentQuestion::DataRetention,
    ];

    const fn index(self) -> usize {
        match self {
            ConsentQuestion::BackgroundVerification => 0,
            ConsentQuestion::ReferenceCheck => 1,
            ConsentQuestion::WorkAuthorization => 2,
            ConsentQuestion::DataRetention => 3,
        }
    }

    /// Key used in the serialized consent object.
    pub const fn key(self) -> &'static str {
        match self {
            ConsentQuestion::BackgroundVerification => "backgroundVerification",
            ConsentQuestion::ReferenceCheck => "referenceCheck",
            ConsentQuestion::WorkAuthorization => "workAuthorization",
            ConsentQuestion::DataRetention => "dataRetention",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|question| question.key() == key)
    }

    pub const fn prompt(self) -> &'static str {
        match self {
            ConsentQuestion::BackgroundVerification => {
                "Do you consent to a background verification?"
            }
            ConsentQuestion::ReferenceCheck => "May we contact the references you provide?",
            ConsentQuestion::WorkAuthorization => {
                "Are you legally authorized to work in this location?"
            }
            ConsentQuestion::DataRetention => {
                "May we retain your application data for future openings?"
            }
        }
    }
}

/// Consent gate state: four answers and the terms checkbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsentRecord {
    answers: [ConsentAnswer; 4],
    terms_accepted: bool,
}

impl ConsentRecord {
    pub fn set(&mut self, question: ConsentQuestion, answer: ConsentAnswer) {
        self.answers[question.index()] = answer;
    }

    pub fn answer(&self, question: ConsentQuestion) -> ConsentAnswer {
        self.answers[question.index()]
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// Every question answered `Yes` and terms accepted.
    pub fn is_complete(&self) -> bool {
        self.terms_accepted
            && self
                .answers
                .iter()
                .all(|answer| *answer == ConsentAnswer::Yes)
    }

    /// Questions still blocking submission, in display order.
    pub fn pending(&self) -> Vec<ConsentQuestion> {
        ConsentQuestion::ALL
            .into_iter()
            .filter(|question| self.answer(*question) != ConsentAnswer::Yes)
            .collect()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for ConsentRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ConsentQuestion::ALL.len() + 1))?;
        for question in ConsentQuestion::ALL {
            map.serialize_entry(question.key(), &self.answer(question))?;
        }
        map.serialize_entry("termsAccepted", &self.terms_accepted)?;
        map.end()
    }
}
