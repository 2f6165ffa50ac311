use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    foundation::error::{MarqueeError, MarqueeResult},
    shell::subscriptions::{EventBus, Subscription, UiEvent},
};

/// The interest chips offered on the contact page.
pub const INTEREST_OPTIONS: [&str; 4] = ["CODE", "NEXTGEN", "BRAND", "STORIES"];

/// Interest pre-selected on a fresh form.
const DEFAULT_INTEREST: &str = "NEXTGEN";

/// A submitted contact request.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Submission {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Project brief.
    pub message: String,
    /// Selected interests, in selection order.
    pub interests: Vec<String>,
}

/// Contact-form state: text fields plus a multi-select chip set.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    /// Sender name field.
    pub name: String,
    /// Sender email field.
    pub email: String,
    /// Project brief field.
    pub message: String,
    interests: Vec<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            interests: vec![DEFAULT_INTEREST.to_owned()],
        }
    }
}

impl ContactForm {
    /// Fresh form with the default interest selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected interests, in selection order.
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Toggle one interest chip: deselect it when selected, otherwise append
    /// it to the selection.
    pub fn toggle_interest(&mut self, interest: &str) {
        match self.interests.iter().position(|i| i == interest) {
            Some(idx) => {
                self.interests.remove(idx);
            }
            None => self.interests.push(interest.to_owned()),
        }
    }

    /// Validate and "send" the form.
    ///
    /// There is no backend: the submission is logged and returned to the
    /// caller, and the form resets to its defaults.
    pub fn submit(&mut self) -> MarqueeResult<Submission> {
        if self.name.trim().is_empty() {
            return Err(MarqueeError::validation("name is required"));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(MarqueeError::validation("a valid email is required"));
        }
        if self.message.trim().is_empty() {
            return Err(MarqueeError::validation("message is required"));
        }

        let submission = Submission {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            message: std::mem::take(&mut self.message),
            interests: std::mem::replace(
                &mut self.interests,
                vec![DEFAULT_INTEREST.to_owned()],
            ),
        };
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            interests = ?submission.interests,
            "contact form submitted"
        );
        Ok(submission)
    }
}

/// Custom dropdown state for the contact page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dropdown {
    options: Vec<String>,
    selected: Option<usize>,
    open: bool,
}

impl Dropdown {
    /// Dropdown over the given options, closed, nothing selected.
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: None,
            open: false,
        }
    }

    /// The selectable options.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Currently selected option, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    /// Return `true` while the option list is expanded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle the option list.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Collapse the option list.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Select an option by index and collapse. Out-of-range indices are
    /// ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
        }
        self.open = false;
    }

    /// Wire "a press outside the dropdown closes it" through the shell bus.
    /// The behavior lives exactly as long as the returned guard.
    pub fn attach_outside_close(dropdown: &Rc<RefCell<Dropdown>>, bus: &EventBus) -> Subscription {
        let weak = Rc::downgrade(dropdown);
        bus.subscribe(move |event| {
            if let UiEvent::PointerDown {
                over_dropdown: false,
            } = event
            {
                if let Some(dropdown) = weak.upgrade() {
                    dropdown.borrow_mut().close();
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/contact.rs"]
mod tests;
