use crate::core::Board;
use crate::models::FilterState;
use crate::ui::page::Page;

/// Résumé controller: seeds the filter controls and re-renders on changes
///
/// All operations no-op when the résumé panel is not bound.
#[derive(Debug, Clone)]
pub struct ResumeController {
    board: Board,
}

impl ResumeController {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seed the controls from the dataset bounds and render the first view
    pub fn init(&self, page: &mut Page) {
        let defaults = self.board.default_filter();

        if let Some(panel) = page.resume.as_mut() {
            panel.include_work = defaults.include_work;
            panel.include_education = defaults.include_education;
            panel.from_year = defaults.from_year;
            panel.to_year = defaults.to_year;
        }

        self.refresh(page);
    }

    /// Re-render from the current control values
    pub fn refresh(&self, page: &mut Page) {
        if let Some(panel) = page.resume.as_mut() {
            let filter = FilterState {
                include_work: panel.include_work,
                include_education: panel.include_education,
                from_year: panel.from_year,
                to_year: panel.to_year,
            };

            panel.view = self.board.render(&filter);
            tracing::debug!("Résumé rendered: {} cards", panel.view.cards().len());
        }
    }

    /// Restore the default controls and re-render
    pub fn reset(&self, page: &mut Page) {
        self.init(page);
    }
}
