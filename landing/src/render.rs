use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::{
    storage::{KeyValueStore, read_submissions},
    submission::PartialSubmission,
};

pub const ANONYMOUS: &str = "Anonymous";
pub const NO_EMAIL: &str = "No email provided";
pub const NO_MESSAGE: &str = "No message provided";
pub const UNKNOWN_TIME: &str = "Unknown time";

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.f";

// one card on the submissions page
//
// index counts from the oldest entry, so the newest card (shown first) carries
// the total number of submissions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionCard {
    pub index: usize,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message_lines: Vec<String>,
    pub submitted_at: String,
}

impl SubmissionCard {
    fn new(index: usize, submission: &PartialSubmission) -> Self {
        let message = submission.message.as_deref().unwrap_or(NO_MESSAGE);

        SubmissionCard {
            index,
            name: submission.name.clone().unwrap_or_else(|| ANONYMOUS.into()),
            email: submission.email.clone().unwrap_or_else(|| NO_EMAIL.into()),
            subject: submission.subject.clone(),
            message_lines: message
                .split('\n')
                .map(|line| line.trim_end_matches('\r').to_owned())
                .collect(),
            submitted_at: format_timestamp(submission.created_at.as_deref()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionsView {
    Empty,
    Cards(Vec<SubmissionCard>),
}

impl SubmissionsView {
    pub fn from_log(log: &[PartialSubmission]) -> Self {
        if log.is_empty() {
            return SubmissionsView::Empty;
        }

        let cards = log
            .iter()
            .enumerate()
            .rev()
            .map(|(position, submission)| SubmissionCard::new(position + 1, submission))
            .collect();

        SubmissionsView::Cards(cards)
    }

    pub fn load<S>(store: &S) -> Self
    where
        S: KeyValueStore + ?Sized,
    {
        Self::from_log(&read_submissions(store))
    }

    pub fn len(&self) -> usize {
        match self {
            SubmissionsView::Empty => 0,
            SubmissionsView::Cards(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// createdAt in the viewer's local time, or UNKNOWN_TIME if it can't be read
pub fn format_timestamp(raw: Option<&str>) -> String {
    raw.and_then(parse_created_at)
        .map(|dt| dt.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN_TIME.into())
}

// full RFC 3339 first, then a date-time without an offset (taken as local
// time), then a bare date (taken as UTC midnight)
fn parse_created_at(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, NAIVE_DATE_TIME) {
        return Local.from_local_datetime(&naive).earliest();
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> PartialSubmission {
        PartialSubmission {
            name: Some(name.into()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            message: Some("hello".into()),
            created_at: Some("2024-05-01T12:00:00.000Z".into()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_log_is_empty_view() {
        assert_eq!(SubmissionsView::from_log(&[]), SubmissionsView::Empty);
        assert!(SubmissionsView::Empty.is_empty());
    }

    #[test]
    fn cards_are_newest_first() {
        let view = SubmissionsView::from_log(&[named("Ann"), named("Bo"), named("Cy")]);
        let SubmissionsView::Cards(cards) = view else {
            panic!("expected cards");
        };

        let labels: Vec<(usize, &str)> = cards
            .iter()
            .map(|card| (card.index, card.name.as_str()))
            .collect();
        assert_eq!(labels, vec![(3, "Cy"), (2, "Bo"), (1, "Ann")]);
    }

    #[test]
    fn missing_fields_use_fallbacks() {
        let view = SubmissionsView::from_log(&[PartialSubmission::default()]);
        let SubmissionsView::Cards(cards) = view else {
            panic!("expected cards");
        };

        assert_eq!(
            cards[0],
            SubmissionCard {
                index: 1,
                name: ANONYMOUS.into(),
                email: NO_EMAIL.into(),
                subject: None,
                message_lines: vec![NO_MESSAGE.into()],
                submitted_at: UNKNOWN_TIME.into(),
            }
        );
    }

    #[test]
    fn message_keeps_line_breaks() {
        let submission = PartialSubmission {
            message: Some("first\r\nsecond\n\nfourth".into()),
            ..Default::default()
        };
        let card = SubmissionCard::new(1, &submission);

        assert_eq!(card.message_lines, vec!["first", "second", "", "fourth"]);
    }

    #[test]
    fn bad_timestamps_are_unknown() {
        assert_eq!(format_timestamp(None), UNKNOWN_TIME);
        assert_eq!(format_timestamp(Some("yesterday")), UNKNOWN_TIME);
        assert_eq!(format_timestamp(Some("2024-13-45T00:00:00Z")), UNKNOWN_TIME);
    }

    #[test]
    fn offsetless_timestamp_is_read_as_local() {
        assert_eq!(
            format_timestamp(Some("2024-05-01T12:00:00")),
            "2024-05-01 12:00:00"
        );
        assert_eq!(
            format_timestamp(Some("2024-05-01T08:30:15.250")),
            "2024-05-01 08:30:15"
        );
    }

    #[test]
    fn date_only_timestamp_is_utc_midnight() {
        let formatted = format_timestamp(Some("2024-05-01"));
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc().with_timezone(&Local).format(TIME_FORMAT).to_string());

        assert_eq!(Some(formatted), expected);
        assert_eq!(format_timestamp(Some("2024-02-30")), UNKNOWN_TIME);
    }

    #[test]
    fn good_timestamps_are_local_time() {
        let formatted = format_timestamp(Some("2024-05-01T12:00:00.000Z"));
        assert!(NaiveDateTime::parse_from_str(&formatted, TIME_FORMAT).is_ok());
    }
}
