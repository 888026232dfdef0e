use crate::ui::page::Page;

/// Flip the mobile menu open/closed
///
/// No-op when the nav container is not bound.
pub fn toggle(page: &mut Page) {
    if let Some(nav) = page.nav.as_mut() {
        nav.open = !nav.open;
        tracing::debug!("Nav menu {}", if nav.open { "opened" } else { "closed" });
    }
}

/// A nav link was activated; force the menu closed
pub fn close(page: &mut Page) {
    if let Some(nav) = page.nav.as_mut() {
        nav.open = false;
    }
}
