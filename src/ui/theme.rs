use crate::models::Theme;
use crate::services::PrefStore;
use crate::ui::page::Page;

/// Theme controller: startup resolution, document application, toggling
#[derive(Debug, Clone)]
pub struct ThemeController {
    store: PrefStore,
    system_prefers_dark: Option<bool>,
}

impl ThemeController {
    /// `system_prefers_dark` is the host's color-scheme signal; `None`
    /// when the platform cannot answer
    pub fn new(store: PrefStore, system_prefers_dark: Option<bool>) -> Self {
        Self {
            store,
            system_prefers_dark,
        }
    }

    /// Resolve and apply the starting theme
    ///
    /// Order: stored preference, then the system color-scheme signal, then
    /// Light. Initialization never writes the preference back.
    pub fn init(&self, page: &mut Page) {
        let theme = self
            .store
            .theme()
            .or_else(|| {
                self.system_prefers_dark
                    .map(|dark| if dark { Theme::Dark } else { Theme::Light })
            })
            .unwrap_or_default();

        apply(page, theme);
        tracing::info!("Theme initialized: {}", theme.as_str());
    }

    /// Flip the theme and persist the result
    ///
    /// Reads the currently applied value from the document state, not from
    /// storage, so a stale preference file cannot desync the toggle.
    pub fn toggle(&self, page: &mut Page) {
        let next = page.applied_theme().opposite();
        apply(page, next);
        self.store.set_theme(next);
    }
}

/// Write the document attribute and refresh every bound toggle label
fn apply(page: &mut Page, theme: Theme) {
    page.theme_attribute = Some(theme.as_str().to_string());

    let label = toggle_label(theme);
    for slot in &mut page.theme_toggle_labels {
        *slot = label.to_string();
    }
}

/// A toggle control names the theme it switches to
pub fn toggle_label(applied: Theme) -> &'static str {
    match applied {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> PrefStore {
        PrefStore::new(dir.path().join("prefs.toml"))
    }

    #[test]
    fn test_init_prefers_stored_value() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.set_theme(Theme::Light);

        let controller = ThemeController::new(store, Some(true));
        let mut page = Page::fully_bound("mailto:post@folio.dev");
        controller.init(&mut page);

        // Stored Light wins over the dark system signal
        assert_eq!(page.applied_theme(), Theme::Light);
    }

    #[test]
    fn test_init_falls_back_to_system_signal() {
        let dir = tempdir().unwrap();
        let controller = ThemeController::new(store_in(&dir), Some(true));

        let mut page = Page::fully_bound("mailto:post@folio.dev");
        controller.init(&mut page);

        assert_eq!(page.applied_theme(), Theme::Dark);
    }

    #[test]
    fn test_init_defaults_to_light() {
        let dir = tempdir().unwrap();
        let controller = ThemeController::new(store_in(&dir), None);

        let mut page = Page::fully_bound("mailto:post@folio.dev");
        controller.init(&mut page);

        assert_eq!(page.applied_theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_returns_to_start() {
        let dir = tempdir().unwrap();
        let controller = ThemeController::new(store_in(&dir), None);

        let mut page = Page::fully_bound("mailto:post@folio.dev");
        controller.init(&mut page);
        let start = page.applied_theme();

        controller.toggle(&mut page);
        assert_eq!(page.applied_theme(), start.opposite());
        controller.toggle(&mut page);
        assert_eq!(page.applied_theme(), start);
    }

    #[test]
    fn test_toggle_persists_the_new_theme() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let controller = ThemeController::new(store.clone(), None);

        let mut page = Page::fully_bound("mailto:post@folio.dev");
        controller.init(&mut page);
        controller.toggle(&mut page);

        assert_eq!(store.theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_apply_updates_every_toggle_label() {
        let dir = tempdir().unwrap();
        let controller = ThemeController::new(store_in(&dir), Some(true));

        let mut page = Page::fully_bound("mailto:post@folio.dev");
        controller.init(&mut page);

        assert_eq!(page.theme_toggle_labels.len(), 2);
        for label in &page.theme_toggle_labels {
            assert_eq!(label, "Switch to light theme");
        }
    }

    #[test]
    fn test_absent_toggles_are_fine() {
        let dir = tempdir().unwrap();
        let controller = ThemeController::new(store_in(&dir), None);

        let mut page = Page::unbound();
        controller.init(&mut page);
        controller.toggle(&mut page);

        assert_eq!(page.applied_theme(), Theme::Dark);
        assert!(page.theme_toggle_labels.is_empty());
    }
}
