use crate::models::{Category, FilterState, ResumeEntry};

/// Check if an entry's category is currently selected
#[inline]
pub fn category_selected(entry: &ResumeEntry, filter: &FilterState) -> bool {
    match entry.category {
        Category::Work => filter.include_work,
        Category::Education => filter.include_education,
    }
}

/// Inclusive overlap between an entry's span and the requested year range
///
/// An entry matches if its span intersects the range at all, not only when
/// it is fully contained.
#[inline]
pub fn overlaps_range(entry: &ResumeEntry, from_year: i32, to_year: i32) -> bool {
    entry.end_year >= from_year && entry.start_year <= to_year
}

/// Full filter predicate: category flag plus year-range overlap
#[inline]
pub fn entry_matches(entry: &ResumeEntry, filter: &FilterState) -> bool {
    category_selected(entry, filter) && overlaps_range(entry, filter.from_year, filter.to_year)
}
