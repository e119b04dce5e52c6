//! Submission Draft
//!
//! The in-memory record behind the waitlist form. Every field is a plain
//! string so a partially filled draft can always be serialized.

use std::fmt;

use serde::Serialize;

/// One of the seven form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    CompanyName,
    Role,
    Email,
    Website,
    TaskDescription,
    Timeline,
    Budget,
}

impl Field {
    /// All fields, in wire order
    pub const ALL: [Self; 7] = [
        Self::CompanyName,
        Self::Role,
        Self::Email,
        Self::Website,
        Self::TaskDescription,
        Self::Timeline,
        Self::Budget,
    ];

    /// JSON key, also used as the DOM `name`/`id`
    pub const fn key(self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::Role => "role",
            Self::Email => "email",
            Self::Website => "website",
            Self::TaskDescription => "taskDescription",
            Self::Timeline => "timeline",
            Self::Budget => "budget",
        }
    }

    /// Website is the only optional field
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Website)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// When the business wants to be matched with a student
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timeline {
    ThisWeek,
    ThisMonth,
    Later,
}

impl Timeline {
    pub const ALL: [Self; 3] = [Self::ThisWeek, Self::ThisMonth, Self::Later];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThisWeek => "this-week",
            Self::ThisMonth => "this-month",
            Self::Later => "later",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ThisWeek => "This week",
            Self::ThisMonth => "This month",
            Self::Later => "Later",
        }
    }
}

/// Budget bracket for a single task, in GBP
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Budget {
    From50To75,
    From75To150,
    Over150,
}

impl Budget {
    pub const ALL: [Self; 3] = [Self::From50To75, Self::From75To150, Self::Over150];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From50To75 => "50-75",
            Self::From75To150 => "75-150",
            Self::Over150 => "150+",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::From50To75 => "£50–£75",
            Self::From75To150 => "£75–£150",
            Self::Over150 => "£150+",
        }
    }
}

/// Form values as typed by the user.
///
/// Serializes to the `/api/submit` body: all seven keys, always present,
/// empty string when unfilled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    pub company_name: String,
    pub role: String,
    pub email: String,
    pub website: String,
    pub task_description: String,
    pub timeline: String,
    pub budget: String,
}

impl SubmissionDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CompanyName => &self.company_name,
            Field::Role => &self.role,
            Field::Email => &self.email,
            Field::Website => &self.website,
            Field::TaskDescription => &self.task_description,
            Field::Timeline => &self.timeline,
            Field::Budget => &self.budget,
        }
    }

    /// Replace one field, leaving the rest untouched
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::CompanyName => &mut self.company_name,
            Field::Role => &mut self.role,
            Field::Email => &mut self.email,
            Field::Website => &mut self.website,
            Field::TaskDescription => &mut self.task_description,
            Field::Timeline => &mut self.timeline,
            Field::Budget => &mut self.budget,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// Required fields that are still empty
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }
}
