use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// storage key for the submission log
pub const SUBMISSIONS_KEY: &str = "contactSubmissions";

// a single contact form submission, as written to the log
//
// all of the text fields are trimmed before they get here, and created_at is an
// ISO-8601 timestamp in UTC with millisecond precision
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
}

impl Submission {
    pub fn new(name: &str, email: &str, subject: &str, message: &str, now: DateTime<Utc>) -> Self {
        Submission {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            subject: subject.trim().to_owned(),
            message: message.trim().to_owned(),
            created_at: timestamp(now),
        }
    }
}

pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// the read side of the log
//
// anything could be sitting in local storage under our key, so the renderer never
// trusts the shape of an element.  a field that is missing, empty or not a string
// is None, and an element that isn't an object is a record with nothing in it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub created_at: Option<String>,
}

impl From<&Value> for PartialSubmission {
    fn from(value: &Value) -> Self {
        let field = |key: &str| match value.get(key) {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        };

        PartialSubmission {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
            created_at: field("createdAt"),
        }
    }
}

impl From<Submission> for PartialSubmission {
    fn from(submission: Submission) -> Self {
        let non_empty = |text: String| (!text.is_empty()).then_some(text);

        PartialSubmission {
            name: non_empty(submission.name),
            email: non_empty(submission.email),
            subject: non_empty(submission.subject),
            message: non_empty(submission.message),
            created_at: non_empty(submission.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let submission = Submission::new(" Ann ", "ann@example.com ", "", " hi ", now);

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ann",
                "email": "ann@example.com",
                "subject": "",
                "message": "hi",
                "createdAt": "2024-05-01T12:00:00.000Z",
            })
        );
    }

    #[test]
    fn partial_treats_empty_and_non_string_fields_as_absent() {
        let partial = PartialSubmission::from(&json!({
            "name": "",
            "email": 42,
            "subject": null,
            "message": "still here",
        }));

        assert_eq!(partial.name, None);
        assert_eq!(partial.email, None);
        assert_eq!(partial.subject, None);
        assert_eq!(partial.message.as_deref(), Some("still here"));
        assert_eq!(partial.created_at, None);
    }

    #[test]
    fn partial_from_non_object_is_empty() {
        assert_eq!(PartialSubmission::from(&json!(7)), PartialSubmission::default());
        assert_eq!(PartialSubmission::from(&json!("text")), PartialSubmission::default());
    }
}
