// Model exports
pub mod domain;
pub mod view;

pub use domain::{Category, ContactForm, FilterState, ResumeEntry, Theme, YearBounds};
pub use view::{EntryCard, FieldErrors, ResumeView};
