//! The domain input field and its submit gate.
//!
//! An empty field silently disables submission; a non-empty invalid field
//! also disables it and shows the inline message.

use crate::domain::{self, Domain, DomainError};
use crate::fetch::{FetchController, Ticket};

/// Pre-filled example so the first lookup works without typing.
pub const DEFAULT_DOMAIN: &str = "openai.com";

/// Live value of the domain field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBinder {
    value: String,
}

impl Default for FormBinder {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN)
    }
}

impl FormBinder {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_valid(&self) -> bool {
        domain::validate(&self.value)
    }

    /// Submit is enabled only for a valid value and while no lookup is running.
    pub fn can_submit(&self, fetching: bool) -> bool {
        !fetching && self.is_valid()
    }

    /// Inline validation text; `None` for empty or valid input.
    pub fn inline_message(&self) -> Option<&'static str> {
        if self.value.is_empty() {
            return None;
        }
        Domain::parse(&self.value).err().map(|e| e.user_message())
    }

    /// Validate the current value for submission.
    pub fn submit(&self) -> Result<Domain, DomainError> {
        Domain::parse(&self.value)
    }

    /// Validate and hand the domain to the controller. Invalid input never
    /// reaches the controller.
    pub fn submit_to(&self, controller: &mut FetchController) -> Result<Ticket, DomainError> {
        let domain = self.submit().inspect_err(|e| {
            tracing::debug!(value = %self.value, "submission blocked: {}", e);
        })?;
        Ok(controller.submit(domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::RequestState;

    #[test]
    fn prefilled_with_working_example() {
        let form = FormBinder::default();
        assert_eq!(form.value(), "openai.com");
        assert!(form.can_submit(false));
        assert!(form.inline_message().is_none());
    }

    #[test]
    fn empty_field_disables_without_message() {
        let form = FormBinder::new("");
        assert!(!form.can_submit(false));
        assert!(form.inline_message().is_none());
    }

    #[test]
    fn invalid_field_disables_with_message() {
        let form = FormBinder::new("bad");
        assert!(!form.can_submit(false));
        assert_eq!(form.inline_message(), Some("Invalid domain name"));
    }

    #[test]
    fn enabling_follows_each_edit() {
        let mut form = FormBinder::new("");
        form.set_value("open");
        assert!(!form.can_submit(false));
        form.set_value("openai.com");
        assert!(form.can_submit(false));
        form.set_value("openai.c");
        assert!(!form.can_submit(false));
    }

    #[test]
    fn fetching_disables_submit() {
        let form = FormBinder::new("openai.com");
        assert!(!form.can_submit(true));
    }

    #[test]
    fn invalid_submission_never_reaches_controller() {
        let mut controller = FetchController::new();
        let form = FormBinder::new("bad");
        assert!(form.submit_to(&mut controller).is_err());
        assert_eq!(controller.state(), &RequestState::Idle);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn valid_submission_starts_lookup() {
        let mut controller = FetchController::new();
        let form = FormBinder::new("sub.example.co");
        let ticket = form.submit_to(&mut controller).unwrap();
        assert_eq!(ticket.domain.as_str(), "sub.example.co");
        assert!(controller.state().is_fetching());
    }
}
