use serde::{Deserialize, Serialize};
use validator::Validate;

/// Entry category for the résumé board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Education,
}

impl Category {
    /// Badge label shown on a rendered card
    pub fn label(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Education => "Education",
        }
    }
}

/// One résumé record, fixed at startup
///
/// Invariant: `start_year <= end_year`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeEntry {
    pub category: Category,
    pub title: String,
    pub organization: String,
    pub location: String,
    #[serde(rename = "startYear")]
    pub start_year: i32,
    #[serde(rename = "endYear")]
    pub end_year: i32,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Current filter selection, derived from the UI controls on every render
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(rename = "includeWork")]
    pub include_work: bool,
    #[serde(rename = "includeEducation")]
    pub include_education: bool,
    #[serde(rename = "fromYear")]
    pub from_year: i32,
    #[serde(rename = "toYear")]
    pub to_year: i32,
}

/// Minimum and maximum year across all entry spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

/// Persisted color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to the document attribute and the preference slot
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// Contact form fields as currently entered
///
/// The validation attributes assume trimmed values; callers go through
/// [`ContactForm::trimmed`] before validating.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1), email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
    #[serde(rename = "consentGiven")]
    pub consent: bool,
}

impl ContactForm {
    /// Copy of the form with surrounding whitespace stripped from every field
    pub fn trimmed(&self) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            consent: self.consent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_opposite_round_trip() {
        assert_eq!(Theme::Light.opposite(), Theme::Dark);
        assert_eq!(Theme::Dark.opposite().opposite(), Theme::Dark);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Work.label(), "Work");
        assert_eq!(Category::Education.label(), "Education");
    }

    #[test]
    fn test_trimmed_strips_all_fields() {
        let form = ContactForm {
            name: "  Ada  ".to_string(),
            email: " ada@example.com ".to_string(),
            subject: "\tHello".to_string(),
            message: "Hi\n".to_string(),
            consent: true,
        };

        let trimmed = form.trimmed();
        assert_eq!(trimmed.name, "Ada");
        assert_eq!(trimmed.email, "ada@example.com");
        assert_eq!(trimmed.subject, "Hello");
        assert_eq!(trimmed.message, "Hi");
        assert!(trimmed.consent);
    }
}
