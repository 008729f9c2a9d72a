use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type EntryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Internship,
    EntryLevel,
    Associate,
    #[default]
    MidSenior,
    Director,
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 6] = [
        ExperienceLevel::Internship,
        ExperienceLevel::EntryLevel,
        ExperienceLevel::Associate,
        ExperienceLevel::MidSenior,
        ExperienceLevel::Director,
        ExperienceLevel::Executive,
    ];

    /// Wire name, as sent in the payload.
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "internship",
            ExperienceLevel::EntryLevel => "entry_level",
            ExperienceLevel::Associate => "associate",
            ExperienceLevel::MidSenior => "mid_senior",
            ExperienceLevel::Director => "director",
            ExperienceLevel::Executive => "executive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "Internship",
            ExperienceLevel::EntryLevel => "Entry Level",
            ExperienceLevel::Associate => "Associate",
            ExperienceLevel::MidSenior => "Mid-Senior Level",
            ExperienceLevel::Director => "Director",
            ExperienceLevel::Executive => "Executive",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    Any,
    #[default]
    Day,
    Week,
    Month,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [DateRange::Any, DateRange::Day, DateRange::Week, DateRange::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            DateRange::Any => "any",
            DateRange::Day => "day",
            DateRange::Week => "week",
            DateRange::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Any => "Any Time",
            DateRange::Day => "Past 24 hours",
            DateRange::Week => "Past Week",
            DateRange::Month => "Past Month",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|range| range.as_str().eq_ignore_ascii_case(value))
    }
}

/// Editable fields of an [`Entry`], in payload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryField {
    JobRole,
    Location,
    ExperienceLevel,
    DateRange,
    LinkedinUrl,
}

impl EntryField {
    pub const ALL: [EntryField; 5] = [
        EntryField::JobRole,
        EntryField::Location,
        EntryField::ExperienceLevel,
        EntryField::DateRange,
        EntryField::LinkedinUrl,
    ];

    /// Free-text fields that must be non-blank, in reporting order.
    pub const REQUIRED: [EntryField; 3] =
        [EntryField::JobRole, EntryField::Location, EntryField::LinkedinUrl];

    pub fn as_str(self) -> &'static str {
        match self {
            EntryField::JobRole => "jobRole",
            EntryField::Location => "location",
            EntryField::ExperienceLevel => "experienceLevel",
            EntryField::DateRange => "dateRange",
            EntryField::LinkedinUrl => "linkedinUrl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryField::JobRole => "Job Role",
            EntryField::Location => "Location",
            EntryField::ExperienceLevel => "Experience Level",
            EntryField::DateRange => "Date Range",
            EntryField::LinkedinUrl => "LinkedIn URL",
        }
    }

    /// Accepts the wire name (`jobRole`) or its snake/kebab spelling (`job_role`, `job-role`).
    pub fn from_name(name: &str) -> Option<Self> {
        let squashed: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(&squashed))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("'{value}' is not a valid {field} (expected one of: {expected})")]
    UnknownChoice {
        field: &'static str,
        value: String,
        expected: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub job_role: String,
    pub location: String,
    pub experience_level: ExperienceLevel,
    pub date_range: DateRange,
    pub linkedin_url: String,
}

impl Entry {
    /// A freshly added entry.
    pub fn new(id: EntryId) -> Self {
        Self {
            job_role: "Technician".to_string(),
            ..Self::blank(id)
        }
    }

    /// The entry a collection resets to.
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            job_role: String::new(),
            location: String::new(),
            experience_level: ExperienceLevel::default(),
            date_range: DateRange::default(),
            linkedin_url: String::new(),
        }
    }

    /// The entry shown at startup.
    pub fn sample(id: EntryId) -> Self {
        Self {
            id,
            job_role: "Software Engineer".to_string(),
            location: "San Francisco, CA".to_string(),
            experience_level: ExperienceLevel::MidSenior,
            date_range: DateRange::Week,
            linkedin_url: "https://www.linkedin.com/jobs/search/?keywords=Software%20Engineer&location=San%20Francisco%2C%20CA".to_string(),
        }
    }

    pub fn value(&self, field: EntryField) -> &str {
        match field {
            EntryField::JobRole => &self.job_role,
            EntryField::Location => &self.location,
            EntryField::ExperienceLevel => self.experience_level.as_str(),
            EntryField::DateRange => self.date_range.as_str(),
            EntryField::LinkedinUrl => &self.linkedin_url,
        }
    }

    pub fn set(&mut self, field: EntryField, value: &str) -> Result<(), FieldError> {
        match field {
            EntryField::JobRole => self.job_role = value.to_string(),
            EntryField::Location => self.location = value.to_string(),
            EntryField::LinkedinUrl => self.linkedin_url = value.to_string(),
            EntryField::ExperienceLevel => {
                self.experience_level = ExperienceLevel::from_wire(value).ok_or_else(|| {
                    unknown_choice(field, value, ExperienceLevel::ALL.map(ExperienceLevel::as_str))
                })?;
            }
            EntryField::DateRange => {
                self.date_range = DateRange::from_wire(value)
                    .ok_or_else(|| unknown_choice(field, value, DateRange::ALL.map(DateRange::as_str)))?;
            }
        }
        Ok(())
    }

    /// Required fields that are empty after trimming.
    pub fn missing_fields(&self) -> Vec<EntryField> {
        EntryField::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    /// Same content, different identity.
    pub fn with_id(&self, id: EntryId) -> Self {
        Self { id, ..self.clone() }
    }
}

fn unknown_choice<const N: usize>(field: EntryField, value: &str, expected: [&str; N]) -> FieldError {
    FieldError::UnknownChoice {
        field: field.as_str(),
        value: value.to_string(),
        expected: expected.join(", "),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PayloadEntry<'a> {
    job_role: &'a str,
    location: &'a str,
    experience_level: ExperienceLevel,
    date_range: DateRange,
    linkedin_url: &'a str,
}

impl<'a> From<&'a Entry> for PayloadEntry<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            job_role: &entry.job_role,
            location: &entry.location,
            experience_level: entry.experience_level,
            date_range: entry.date_range,
            linkedin_url: &entry.linkedin_url,
        }
    }
}

/// Outbound request body: entries without `id`, pretty-printed with 2-space indentation.
pub fn build_payload(entries: &[Entry]) -> String {
    let payload: Vec<PayloadEntry<'_>> = entries.iter().map(PayloadEntry::from).collect();
    // Only strings and unit enums; serialization cannot fail.
    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "[]".to_string())
}
