use serde::{Deserialize, Serialize};

use crate::models::domain::ResumeEntry;

/// One rendered résumé card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryCard {
    pub badge: String,
    pub title: String,
    pub organization: String,
    pub location: String,
    /// Formatted span, e.g. `2019–2023`
    pub years: String,
    pub details: Vec<String>,
}

impl EntryCard {
    pub fn from_entry(entry: &ResumeEntry) -> Self {
        EntryCard {
            badge: entry.category.label().to_string(),
            title: entry.title.clone(),
            organization: entry.organization.clone(),
            location: entry.location.clone(),
            years: format!("{}–{}", entry.start_year, entry.end_year),
            details: entry.details.clone(),
        }
    }
}

/// Output of a résumé render pass: either cards or the no-match placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "cards", rename_all = "lowercase")]
pub enum ResumeView {
    Cards(Vec<EntryCard>),
    NoMatch,
}

impl ResumeView {
    pub const NO_MATCH_TEXT: &'static str = "No entries match the current filters.";

    pub fn cards(&self) -> &[EntryCard] {
        match self {
            ResumeView::Cards(cards) => cards,
            ResumeView::NoMatch => &[],
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, ResumeView::NoMatch)
    }

    /// Placeholder copy, present only for the no-match state
    pub fn placeholder_text(&self) -> Option<&'static str> {
        match self {
            ResumeView::NoMatch => Some(Self::NO_MATCH_TEXT),
            ResumeView::Cards(_) => None,
        }
    }
}

impl Default for ResumeView {
    fn default() -> Self {
        ResumeView::NoMatch
    }
}

/// Per-field contact form errors; `None` means the field passed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub consent: Option<String>,
}

impl FieldErrors {
    /// Logical AND of all five field checks
    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
            && self.consent.is_none()
    }
}
