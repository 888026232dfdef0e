// Service exports
pub mod prefs;

pub use prefs::{PrefStore, PrefsError};
