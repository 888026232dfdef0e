use serde::{Deserialize, Serialize};

use crate::models::{ContactForm, FieldErrors, ResumeView, Theme};

/// Mobile navigation container state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavPanel {
    pub open: bool,
}

impl NavPanel {
    /// CSS state class reflected on the nav container
    pub fn state_class(&self) -> &'static str {
        if self.open {
            "is-open"
        } else {
            ""
        }
    }
}

/// Résumé list container plus its four filter controls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumePanel {
    #[serde(rename = "includeWork")]
    pub include_work: bool,
    #[serde(rename = "includeEducation")]
    pub include_education: bool,
    #[serde(rename = "fromYear")]
    pub from_year: i32,
    #[serde(rename = "toYear")]
    pub to_year: i32,
    pub view: ResumeView,
}

/// Contact form fields, error slots, and submission target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactPanel {
    pub form: ContactForm,
    pub errors: FieldErrors,
    /// Submission target exactly as authored in the markup
    #[serde(rename = "originalAction")]
    pub original_action: String,
    /// Current submission target, rewritten on every validation pass
    pub action: String,
}

impl ContactPanel {
    pub fn new(original_action: &str) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::default(),
            original_action: original_action.to_string(),
            action: original_action.to_string(),
        }
    }
}

/// The bound UI surface
///
/// Each field models a named element the engine binds to by identifier. Any
/// subset may be absent (`None`, or an empty label list); the matching
/// feature then no-ops instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Document-wide theme attribute consumed by styling; `None` until a
    /// theme has been applied
    #[serde(rename = "themeAttribute")]
    pub theme_attribute: Option<String>,
    /// Current label of every bound theme toggle control (zero, one, or two)
    #[serde(rename = "themeToggleLabels")]
    pub theme_toggle_labels: Vec<String>,
    /// Greeting display slot
    pub greeting: Option<String>,
    /// Calendar year display slot
    pub year: Option<String>,
    pub nav: Option<NavPanel>,
    pub resume: Option<ResumePanel>,
    pub contact: Option<ContactPanel>,
}

impl Page {
    /// A page with nothing bound; every feature no-ops
    pub fn unbound() -> Self {
        Self::default()
    }

    /// A page with every element bound, as the reference markup has it
    /// (two theme toggles: header and mobile menu)
    pub fn fully_bound(original_form_action: &str) -> Self {
        Page {
            theme_attribute: None,
            theme_toggle_labels: vec![String::new(), String::new()],
            greeting: Some(String::new()),
            year: Some(String::new()),
            nav: Some(NavPanel::default()),
            resume: Some(ResumePanel::default()),
            contact: Some(ContactPanel::new(original_form_action)),
        }
    }

    /// Theme currently applied to the document; Light when nothing is set
    pub fn applied_theme(&self) -> Theme {
        self.theme_attribute
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default()
    }
}
