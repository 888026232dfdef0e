// Core logic exports
pub mod board;
pub mod contact;
pub mod filters;
pub mod greeting;

pub use board::{sample_entries, Board};
pub use contact::{form_action, recipient_from_action, validate};
pub use filters::{category_selected, entry_matches, overlaps_range};
pub use greeting::{current_greeting, current_year, greeting};
