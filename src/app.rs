use tracing::info;

use crate::config::Settings;
use crate::core::greeting::{current_greeting, current_year};
use crate::core::Board;
use crate::services::PrefStore;
use crate::ui::{nav, page::Page, FormController, ResumeController, ThemeController};

/// Work queued to run on the next tick, after the platform has finished
/// the current event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    RevalidateContact,
}

/// The assembled engine: the page plus the component controllers
///
/// [`App::bootstrap`] finishes all initialization before returning, so no
/// event entry point can observe a half-initialized page.
pub struct App {
    page: Page,
    theme: ThemeController,
    resume: ResumeController,
    form: FormController,
    deferred: Vec<Deferred>,
}

impl App {
    /// Initialize every component against the given page, in order: theme,
    /// greeting/year slots, résumé board, contact form
    pub fn bootstrap(
        settings: &Settings,
        page: Page,
        board: Board,
        system_prefers_dark: Option<bool>,
    ) -> App {
        let store = PrefStore::new(&settings.storage.path);
        let theme = ThemeController::new(store, system_prefers_dark);
        let resume = ResumeController::new(board);
        let form = FormController::new(settings.contact.fallback_recipient.clone());

        let mut app = App {
            page,
            theme,
            resume,
            form,
            deferred: Vec::new(),
        };

        app.theme.init(&mut app.page);
        fill_greeting_slots(&mut app.page);
        app.resume.init(&mut app.page);
        app.form.init(&mut app.page);

        info!("Page enhancements initialized");
        app
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Mutable access to the bound surface, for the host to write control
    /// and field values into before dispatching an event
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    // Event entry points, one per platform event the engine reacts to.

    pub fn toggle_theme(&mut self) {
        self.theme.toggle(&mut self.page);
    }

    pub fn toggle_nav(&mut self) {
        nav::toggle(&mut self.page);
    }

    pub fn nav_link_clicked(&mut self) {
        nav::close(&mut self.page);
    }

    pub fn filters_changed(&mut self) {
        self.resume.refresh(&mut self.page);
    }

    pub fn reset_filters(&mut self) {
        self.resume.reset(&mut self.page);
    }

    pub fn contact_input(&mut self) {
        self.form.revalidate(&mut self.page);
    }

    /// Returns whether the platform's default submit action may proceed;
    /// `false` means the submission is blocked
    pub fn submit_contact(&mut self) -> bool {
        self.form.submit(&mut self.page)
    }

    /// Platform form reset: fields clear now, re-validation is queued for
    /// the next tick so it never sees the stale values
    pub fn reset_contact(&mut self) {
        self.form.clear(&mut self.page);
        self.deferred.push(Deferred::RevalidateContact);
    }

    /// Drain next-tick work; the host calls this after each platform event
    pub fn flush_deferred(&mut self) {
        let queued: Vec<Deferred> = self.deferred.drain(..).collect();
        for task in queued {
            match task {
                Deferred::RevalidateContact => {
                    self.form.revalidate(&mut self.page);
                }
            }
        }
    }
}

/// Write the greeting and calendar year into their display slots
fn fill_greeting_slots(page: &mut Page) {
    if let Some(slot) = page.greeting.as_mut() {
        *slot = current_greeting().to_string();
    }
    if let Some(slot) = page.year.as_mut() {
        *slot = current_year().to_string();
    }
}
