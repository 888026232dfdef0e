use crate::core::filters::entry_matches;
use crate::core::greeting::current_year;
use crate::models::{Category, EntryCard, FilterState, ResumeEntry, ResumeView, YearBounds};

/// Résumé board - owns the static dataset and the render pipeline
///
/// # Pipeline stages
/// 1. Category + year-overlap filtering
/// 2. Sorting, newest first
/// 3. Card projection (or the no-match placeholder)
#[derive(Debug, Clone)]
pub struct Board {
    entries: Vec<ResumeEntry>,
    bounds: Option<YearBounds>,
}

impl Board {
    /// Create a board over a fixed set of entries
    ///
    /// Year bounds are computed once here; the dataset never changes
    /// afterwards.
    pub fn new(entries: Vec<ResumeEntry>) -> Self {
        debug_assert!(
            entries.iter().all(|e| e.start_year <= e.end_year),
            "entry span must not be inverted"
        );

        let bounds = compute_bounds(&entries);
        Self { entries, bounds }
    }

    /// Board over the site's reference dataset
    pub fn with_sample_entries() -> Self {
        Self::new(sample_entries())
    }

    pub fn entries(&self) -> &[ResumeEntry] {
        &self.entries
    }

    /// Year bounds over all entry spans; `None` for an empty dataset
    pub fn bounds(&self) -> Option<YearBounds> {
        self.bounds
    }

    /// Default filter controls: both categories on, full year range
    ///
    /// An empty dataset has no bounds, so both ends fall back to the
    /// current calendar year to keep reset total.
    pub fn default_filter(&self) -> FilterState {
        let bounds = self.bounds.unwrap_or_else(|| {
            let year = current_year();
            YearBounds {
                min: year,
                max: year,
            }
        });

        FilterState {
            include_work: true,
            include_education: true,
            from_year: bounds.min,
            to_year: bounds.max,
        }
    }

    /// Run the full render pipeline for the given filter state
    pub fn render(&self, filter: &FilterState) -> ResumeView {
        // Stage 1: keep entries whose category is selected and whose span
        // intersects the requested range
        let mut survivors: Vec<&ResumeEntry> = self
            .entries
            .iter()
            .filter(|entry| entry_matches(entry, filter))
            .collect();

        // Stage 2: descending by end year, ties descending by start year.
        // The sort is stable, so remaining ties keep dataset order.
        survivors.sort_by(|a, b| {
            b.end_year
                .cmp(&a.end_year)
                .then_with(|| b.start_year.cmp(&a.start_year))
        });

        if survivors.is_empty() {
            return ResumeView::NoMatch;
        }

        ResumeView::Cards(survivors.iter().map(|e| EntryCard::from_entry(e)).collect())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_sample_entries()
    }
}

fn compute_bounds(entries: &[ResumeEntry]) -> Option<YearBounds> {
    let first = entries.first()?;
    let mut bounds = YearBounds {
        min: first.start_year.min(first.end_year),
        max: first.start_year.max(first.end_year),
    };

    for entry in entries {
        bounds.min = bounds.min.min(entry.start_year).min(entry.end_year);
        bounds.max = bounds.max.max(entry.start_year).max(entry.end_year);
    }

    Some(bounds)
}

/// Reference dataset shown on the site
pub fn sample_entries() -> Vec<ResumeEntry> {
    fn entry(
        category: Category,
        title: &str,
        organization: &str,
        location: &str,
        start_year: i32,
        end_year: i32,
        details: &[&str],
    ) -> ResumeEntry {
        ResumeEntry {
            category,
            title: title.to_string(),
            organization: organization.to_string(),
            location: location.to_string(),
            start_year,
            end_year,
            details: details.iter().map(|d| d.to_string()).collect(),
        }
    }

    vec![
        entry(
            Category::Work,
            "Senior Frontend Engineer",
            "Nordlys Studio",
            "Oslo",
            2021,
            2025,
            &[
                "Led the design-system rebuild across three product teams",
                "Introduced performance budgets that cut median page load by 40%",
                "Mentored four junior engineers",
            ],
        ),
        entry(
            Category::Work,
            "Frontend Engineer",
            "Fjordware",
            "Bergen",
            2018,
            2021,
            &[
                "Shipped the customer portal used by 40k monthly visitors",
                "Owned the migration off a legacy jQuery stack",
            ],
        ),
        entry(
            Category::Work,
            "Web Developer",
            "Bright Harbor Agency",
            "Trondheim",
            2015,
            2018,
            &[
                "Built marketing sites for 30+ clients",
                "Ran accessibility audits against WCAG 2.1",
            ],
        ),
        entry(
            Category::Work,
            "Junior Developer",
            "Polar Bits",
            "Tromsø",
            2014,
            2015,
            &[
                "Maintained internal tooling",
                "Wrote end-to-end tests for the booking flow",
            ],
        ),
        entry(
            Category::Work,
            "Freelance Web Designer",
            "Self-employed",
            "Remote",
            2011,
            2014,
            &[
                "Designed and delivered small-business sites",
                "Handled hosting and maintenance contracts",
            ],
        ),
        entry(
            Category::Education,
            "MSc Informatics",
            "University of Oslo",
            "Oslo",
            2012,
            2014,
            &[
                "Thesis on declarative UI rendering",
                "Teaching assistant in web programming",
            ],
        ),
        entry(
            Category::Education,
            "Exchange Semester, Computer Science",
            "ETH Zürich",
            "Zürich",
            2011,
            2011,
            &["Coursework in distributed systems"],
        ),
        entry(
            Category::Education,
            "BSc Computer Science",
            "NTNU",
            "Trondheim",
            2009,
            2012,
            &["Specialized in human-computer interaction"],
        ),
        entry(
            Category::Education,
            "Certificate in Interaction Design",
            "Oslo School of Design",
            "Oslo",
            2016,
            2016,
            &["Evening program alongside full-time work"],
        ),
    ]
}
