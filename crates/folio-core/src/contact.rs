//! Contact form with a simulated, fixed-delay submission
//!
//! Nothing is sent anywhere: submission waits out the configured delay and
//! always succeeds.

use std::time::Duration;

use crate::notify::Notification;
use crate::{Error, Result};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

const SEND_LABEL: &str = "Send Message";
const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
    pub required: bool,
    pub multiline: bool,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, required: bool, multiline: bool) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            focused: false,
            required,
            multiline,
        }
    }

    /// Floating-label rule: the label lifts while focused or filled in
    pub fn is_floating(&self) -> bool {
        self.focused || !self.value.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

/// Snapshot of the form taken when a submission starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub fields: Vec<(&'static str, String)>,
}

impl Submission {
    /// Stand-in for the network round trip
    pub async fn send(self, delay: Duration) -> Notification {
        tracing::debug!(
            fields = self.fields.len(),
            delay_ms = delay.as_millis() as u64,
            "simulating contact submission"
        );
        tokio::time::sleep(delay).await;
        Notification::success(SUCCESS_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<FormField>,
    state: SubmitState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField::new("name", "Your Name", true, false),
                FormField::new("email", "Your Email", true, false),
                FormField::new("subject", "Subject", false, false),
                FormField::new("message", "Your Message", true, true),
            ],
            state: SubmitState::Idle,
        }
    }
}

impl ContactForm {
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut FormField> {
        self.fields
            .iter_mut()
            .find(|field| field.name == name)
            .ok_or_else(|| Error::InvalidForm(format!("no field named '{}'", name)))
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.field_mut(name)?.value = value.into();
        Ok(())
    }

    /// Focus one field; every other field loses focus
    pub fn focus(&mut self, name: &str) -> Result<()> {
        self.field_mut(name)?;
        for field in &mut self.fields {
            field.focused = field.name == name;
        }
        Ok(())
    }

    pub fn blur(&mut self) {
        for field in &mut self.fields {
            field.focused = false;
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            SubmitState::Idle => SEND_LABEL,
            SubmitState::Sending => SENDING_LABEL,
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.state == SubmitState::Sending
    }

    /// Validate, lock the button, and snapshot the values
    pub fn begin_submit(&mut self) -> Result<Submission> {
        if self.state == SubmitState::Sending {
            return Err(Error::InvalidForm("a submission is already in progress".to_string()));
        }

        let missing: Vec<&str> = self
            .fields
            .iter()
            .filter(|field| field.required && field.value.trim().is_empty())
            .map(|field| field.label)
            .collect();
        if !missing.is_empty() {
            return Err(Error::InvalidForm(format!("missing {}", missing.join(", "))));
        }

        self.state = SubmitState::Sending;
        Ok(Submission {
            fields: self
                .fields
                .iter()
                .map(|field| (field.name, field.value.clone()))
                .collect(),
        })
    }

    /// Clear every field and restore the button
    pub fn finish_submit(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.focused = false;
        }
        self.state = SubmitState::Idle;
    }

    /// Full round trip: validate, wait out the delay, reset
    pub async fn submit(&mut self, delay: Duration) -> Result<Notification> {
        let submission = self.begin_submit()?;
        let notification = submission.send(delay).await;
        self.finish_submit();
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_value("name", "Ada").unwrap();
        form.set_value("email", "ada@example.com").unwrap();
        form.set_value("message", "Hello there").unwrap();
        form
    }

    #[test]
    fn test_floating_labels() {
        let mut form = ContactForm::default();
        assert!(!form.field("name").unwrap().is_floating());

        form.focus("name").unwrap();
        assert!(form.field("name").unwrap().is_floating());

        form.blur();
        assert!(!form.field("name").unwrap().is_floating());

        form.set_value("name", "Ada").unwrap();
        assert!(form.field("name").unwrap().is_floating());
    }

    #[test]
    fn test_unknown_field() {
        let mut form = ContactForm::default();
        assert!(matches!(form.focus("phone"), Err(Error::InvalidForm(_))));
    }

    #[test]
    fn test_required_fields_validated() {
        let mut form = ContactForm::default();
        form.set_value("name", "Ada").unwrap();
        let err = form.begin_submit().unwrap_err();
        assert!(err.to_string().contains("Your Email"));
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn test_begin_submit_locks_button() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        assert_eq!(form.button_label(), "Sending...");
        assert!(form.is_submit_disabled());
        assert!(submission.fields.contains(&("name", "Ada".to_string())));
        assert!(form.begin_submit().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_then_resets() {
        let mut form = filled();
        let started = tokio::time::Instant::now();

        let notification = form.submit(Duration::from_millis(2_000)).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2_000));
        assert_eq!(notification.message, SUCCESS_MESSAGE);
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.button_label(), "Send Message");
        assert!(form.fields().iter().all(|field| field.value.is_empty()));
    }
}
