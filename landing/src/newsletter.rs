use crate::validate::is_valid_email;

// how long the confirmation stays on screen
pub const CLEAR_AFTER_MS: u32 = 5000;

pub const ERROR_COLOR: &str = "#e74c3c";
pub const SUCCESS_COLOR: &str = "#2ebf91";

// the newsletter box only pretends to subscribe: nothing is sent or stored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewsletterOutcome {
    Invalid,
    Subscribed,
}

impl NewsletterOutcome {
    pub fn check(email: &str) -> Self {
        if is_valid_email(email) {
            NewsletterOutcome::Subscribed
        } else {
            NewsletterOutcome::Invalid
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            NewsletterOutcome::Invalid => "Please enter a valid email address.",
            NewsletterOutcome::Subscribed => {
                "Thank you for subscribing! Check your email for confirmation."
            }
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            NewsletterOutcome::Invalid => ERROR_COLOR,
            NewsletterOutcome::Subscribed => SUCCESS_COLOR,
        }
    }

    // the input is cleared and the message expires only on success
    pub fn is_success(self) -> bool {
        self == NewsletterOutcome::Subscribed
    }
}
