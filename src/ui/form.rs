use crate::core::contact::{form_action, recipient_from_action, validate};
use crate::models::ContactForm;
use crate::ui::page::Page;

/// Contact form controller
///
/// Every pass runs the full rule set and rewrites the submission target,
/// valid or not. All operations no-op when the form is not bound.
#[derive(Debug, Clone)]
pub struct FormController {
    fallback_recipient: String,
}

impl FormController {
    pub fn new(fallback_recipient: impl Into<String>) -> Self {
        Self {
            fallback_recipient: fallback_recipient.into(),
        }
    }

    /// Initial pass at setup, establishing starting error and target state
    /// before any user interaction
    pub fn init(&self, page: &mut Page) {
        self.revalidate(page);
    }

    /// Validate the current field values, surface per-field errors, and
    /// rewrite the submission target; returns overall validity
    pub fn revalidate(&self, page: &mut Page) -> bool {
        let Some(panel) = page.contact.as_mut() else {
            return false;
        };

        let errors = validate(&panel.form);
        let recipient = recipient_from_action(&panel.original_action, &self.fallback_recipient);
        panel.action = form_action(&recipient, &panel.form, &errors);

        let valid = errors.is_valid();
        panel.errors = errors;
        valid
    }

    /// Submit attempt: re-validate and report whether the platform default
    /// may proceed
    pub fn submit(&self, page: &mut Page) -> bool {
        let valid = self.revalidate(page);
        if !valid {
            tracing::info!("Contact submit blocked by validation");
        }
        valid
    }

    /// Clear the fields, as the platform does on a form reset
    pub fn clear(&self, page: &mut Page) {
        if let Some(panel) = page.contact.as_mut() {
            panel.form = ContactForm::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::messages;

    fn controller() -> FormController {
        FormController::new("fallback@folio.dev")
    }

    fn fill_valid(page: &mut Page) {
        let panel = page.contact.as_mut().unwrap();
        panel.form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
            consent: true,
        };
    }

    #[test]
    fn test_init_surfaces_errors_without_interaction() {
        let mut page = Page::fully_bound("mailto:post@folio.dev");
        controller().init(&mut page);

        let panel = page.contact.as_ref().unwrap();
        assert!(!panel.errors.is_valid());
        assert_eq!(panel.action, "mailto:post@folio.dev");
    }

    #[test]
    fn test_valid_input_rewrites_the_target() {
        let mut page = Page::fully_bound("mailto:post@folio.dev");
        let form = controller();
        form.init(&mut page);

        fill_valid(&mut page);
        assert!(form.revalidate(&mut page));

        let panel = page.contact.as_ref().unwrap();
        assert_eq!(
            panel.action,
            "mailto:post@folio.dev?Subject=Hi&Name=Ada&Email=ada%40example.com&Message=Hello"
        );
    }

    #[test]
    fn test_invalidating_a_field_resets_the_target() {
        let mut page = Page::fully_bound("mailto:post@folio.dev");
        let form = controller();
        form.init(&mut page);
        fill_valid(&mut page);
        form.revalidate(&mut page);

        page.contact.as_mut().unwrap().form.email = "nope".to_string();
        assert!(!form.revalidate(&mut page));

        let panel = page.contact.as_ref().unwrap();
        assert_eq!(panel.action, "mailto:post@folio.dev");
        assert_eq!(panel.errors.email.as_deref(), Some(messages::EMAIL_INVALID));
    }

    #[test]
    fn test_recipient_falls_back_when_markup_is_malformed() {
        let mut page = Page::fully_bound("/contact-submit");
        let form = controller();
        form.init(&mut page);
        fill_valid(&mut page);
        form.revalidate(&mut page);

        let panel = page.contact.as_ref().unwrap();
        assert!(panel.action.starts_with("mailto:fallback@folio.dev?Subject="));
    }

    #[test]
    fn test_submit_blocks_invalid_input() {
        let mut page = Page::fully_bound("mailto:post@folio.dev");
        let form = controller();
        form.init(&mut page);

        assert!(!form.submit(&mut page));

        fill_valid(&mut page);
        assert!(form.submit(&mut page));
    }

    #[test]
    fn test_clear_resets_fields_and_consent() {
        let mut page = Page::fully_bound("mailto:post@folio.dev");
        let form = controller();
        fill_valid(&mut page);

        form.clear(&mut page);
        let panel = page.contact.as_ref().unwrap();
        assert!(panel.form.name.is_empty());
        assert!(!panel.form.consent);
    }

    #[test]
    fn test_absent_form_is_a_no_op() {
        let mut page = Page::unbound();
        let form = controller();
        form.init(&mut page);
        form.clear(&mut page);
        assert!(!form.submit(&mut page));
        assert!(page.contact.is_none());
    }
}
