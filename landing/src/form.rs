use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    storage::{KeyValueStore, append_and_save},
    submission::{SUBMISSIONS_KEY, Submission},
    validate::{is_blank, is_valid_email},
};

// how long the inline success banner stays up
pub const BANNER_MS: u32 = 5000;

// what the page does once a submission has been saved
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuccessMode {
    Navigate,
    InlineBanner,
}

// per-page form variant
//
// the contact page and the contact section on the home page disagree on both the
// message length rule and what happens after a save, so each picks a preset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub on_success: SuccessMode,
    #[serde(default)]
    pub min_message_length: usize,
}

impl FormConfig {
    pub const CONTACT_PAGE: FormConfig = FormConfig {
        on_success: SuccessMode::Navigate,
        min_message_length: 0,
    };

    pub const HOME_SECTION: FormConfig = FormConfig {
        on_success: SuccessMode::InlineBanner,
        min_message_length: 10,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

// border indicator for a single input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldMark {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

// per-field error text; subject is optional and never carries one
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
            Field::Subject => None,
        }
    }

    fn set(&mut self, field: Field, error: String) {
        match field {
            Field::Name => self.name = Some(error),
            Field::Email => self.email = Some(error),
            Field::Message => self.message = Some(error),
            Field::Subject => {}
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct FieldMarks {
    name: FieldMark,
    email: FieldMark,
    message: FieldMark,
}

impl FieldMarks {
    fn get(&self, field: Field) -> FieldMark {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
            Field::Subject => FieldMark::Neutral,
        }
    }

    fn set(&mut self, field: Field, mark: FieldMark) {
        match field {
            Field::Name => self.name = mark,
            Field::Email => self.email = mark,
            Field::Message => self.message = mark,
            Field::Subject => {}
        }
    }

    fn any_invalid(&self) -> bool {
        Field::REQUIRED
            .iter()
            .any(|field| self.get(*field) == FieldMark::Invalid)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Untouched,
    FieldInvalid,
    Valid,
    Submitted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    // validation failed, nothing was written
    Rejected,
    Saved(SuccessMode),
    // validation passed but the write did not, the input is kept
    StorageFailed(String),
}

// the contact form
//
// blur() is feedback only and never blocks typing; submit() is the gate and the
// only place that touches storage
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    config: FormConfig,
    input: FormInput,
    marks: FieldMarks,
    errors: FieldErrors,
    state: FormState,
}

impl ContactForm {
    pub fn new(config: FormConfig) -> Self {
        ContactForm {
            config,
            input: FormInput::default(),
            marks: FieldMarks::default(),
            errors: FieldErrors::default(),
            state: FormState::Untouched,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn value(&self, field: Field) -> &str {
        self.input.get(field)
    }

    pub fn mark(&self, field: Field) -> FieldMark {
        self.marks.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.input.get_mut(field) = value;
        self.refresh_state();
    }

    pub fn blur(&mut self, field: Field) {
        if field == Field::Subject {
            return;
        }

        let value = self.input.get(field);
        let mark = if is_blank(value) {
            FieldMark::Neutral
        } else if self.check(field).is_ok() {
            FieldMark::Valid
        } else {
            FieldMark::Invalid
        };

        self.marks.set(field, mark);
        self.refresh_state();
    }

    pub fn submit<S>(&mut self, store: &S, now: DateTime<Utc>) -> SubmitOutcome
    where
        S: KeyValueStore + ?Sized,
    {
        self.errors = FieldErrors::default();
        self.marks = FieldMarks::default();

        for field in Field::REQUIRED {
            if let Err(error) = self.check(field) {
                self.errors.set(field, error);
                self.marks.set(field, FieldMark::Invalid);
            }
        }

        if !self.errors.is_empty() {
            debug!(errors = ?self.errors, "contact form rejected");
            self.state = FormState::FieldInvalid;
            return SubmitOutcome::Rejected;
        }

        let submission = Submission::new(
            &self.input.name,
            &self.input.email,
            &self.input.subject,
            &self.input.message,
            now,
        );

        if let Err(err) = append_and_save(store, SUBMISSIONS_KEY, &submission) {
            return SubmitOutcome::StorageFailed(err.to_string());
        }

        info!(created_at = %submission.created_at, "saved contact submission");

        self.input = FormInput::default();
        self.state = FormState::Submitted;

        SubmitOutcome::Saved(self.config.on_success)
    }

    fn check(&self, field: Field) -> Result<(), String> {
        let value = self.input.get(field).trim();

        match field {
            Field::Name if value.is_empty() => Err("Name is required".into()),
            Field::Email if value.is_empty() => Err("Email is required".into()),
            Field::Email if !is_valid_email(value) => {
                Err("Please enter a valid email address".into())
            }
            Field::Message if value.is_empty() => Err("Message is required".into()),
            Field::Message if message_length(value) < self.config.min_message_length => Err(
                format!(
                    "Message must be at least {} characters",
                    self.config.min_message_length
                ),
            ),
            _ => Ok(()),
        }
    }

    fn refresh_state(&mut self) {
        self.state = if Field::REQUIRED.iter().all(|field| self.check(*field).is_ok()) {
            FormState::Valid
        } else if self.marks.any_invalid() || !self.errors.is_empty() {
            FormState::FieldInvalid
        } else {
            FormState::Untouched
        };
    }
}

// counted in UTF-16 code units, the way a browser counts input length
fn message_length(value: &str) -> usize {
    value.encode_utf16().count()
}
