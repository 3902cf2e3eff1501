// end-to-end flows through the form, the storage log and the renderer

use chrono::{NaiveDateTime, TimeZone, Utc};

use landing::{
    form::{ContactForm, Field, FormConfig, SubmitOutcome, SuccessMode},
    render::{SubmissionCard, SubmissionsView, TIME_FORMAT, UNKNOWN_TIME},
    storage::{KeyValueStore, MemoryStore, read_list, read_submissions},
    submission::SUBMISSIONS_KEY,
};

fn submit(store: &MemoryStore, name: &str, email: &str, message: &str) -> SubmitOutcome {
    let mut form = ContactForm::new(FormConfig::CONTACT_PAGE);
    form.set_field(Field::Name, name.into());
    form.set_field(Field::Email, email.into());
    form.set_field(Field::Message, message.into());

    form.submit(store, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
}

fn cards(store: &MemoryStore) -> Vec<SubmissionCard> {
    match SubmissionsView::load(store) {
        SubmissionsView::Cards(cards) => cards,
        SubmissionsView::Empty => Vec::new(),
    }
}

#[test]
fn single_submission_renders_one_card() {
    let store = MemoryStore::new();

    let outcome = submit(&store, "Ann", "ann@example.com", "Hello there, this works");
    assert_eq!(outcome, SubmitOutcome::Saved(SuccessMode::Navigate));
    assert_eq!(read_submissions(&store).len(), 1);

    let cards = cards(&store);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].index, 1);
    assert_eq!(cards[0].name, "Ann");
    assert!(cards[0].message_lines.join("\n").contains("Hello there, this works"));
    assert_ne!(cards[0].submitted_at, UNKNOWN_TIME);
    assert!(NaiveDateTime::parse_from_str(&cards[0].submitted_at, TIME_FORMAT).is_ok());
}

#[test]
fn bad_email_writes_nothing() {
    let store = MemoryStore::new();
    let mut form = ContactForm::new(FormConfig::CONTACT_PAGE);
    form.set_field(Field::Name, "Ann".into());
    form.set_field(Field::Email, "not-an-email".into());
    form.set_field(Field::Message, "Hello there, this works".into());

    let outcome = form.submit(&store, Utc::now());

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert!(form.error(Field::Email).is_some());
    assert!(read_list(&store, SUBMISSIONS_KEY).is_empty());
    assert_eq!(SubmissionsView::load(&store), SubmissionsView::Empty);
}

#[test]
fn two_submissions_render_newest_first() {
    let store = MemoryStore::new();
    submit(&store, "Ann", "ann@example.com", "first message");
    submit(&store, "Bo", "bo@example.com", "second message");

    let labels: Vec<(String, usize)> = cards(&store)
        .into_iter()
        .map(|card| (card.name, card.index))
        .collect();

    assert_eq!(labels, vec![("Bo".to_string(), 2), ("Ann".to_string(), 1)]);
}

#[test]
fn rendering_is_repeatable() {
    let store = MemoryStore::new();
    submit(&store, "Ann", "ann@example.com", "first message");

    assert_eq!(SubmissionsView::load(&store), SubmissionsView::load(&store));
}

#[test]
fn foreign_entries_render_with_fallbacks() {
    let store = MemoryStore::with_item(
        SUBMISSIONS_KEY,
        r#"[{"name": "Old", "createdAt": "garbage"}, "junk"]"#,
    );
    submit(&store, "Ann", "ann@example.com", "hello");

    let cards = cards(&store);
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].name, "Ann");
    assert_eq!(cards[1].name, "Anonymous");
    assert_eq!(cards[1].email, "No email provided");
    assert_eq!(cards[2].name, "Old");
    assert_eq!(cards[2].submitted_at, UNKNOWN_TIME);
}

#[test]
fn inline_banner_variant_saves_without_navigating() {
    let store = MemoryStore::new();
    let mut form = ContactForm::new(FormConfig::HOME_SECTION);
    form.set_field(Field::Name, "Ann".into());
    form.set_field(Field::Email, "ann@example.com".into());
    form.set_field(Field::Message, "Hello there, this works".into());

    assert_eq!(
        form.submit(&store, Utc::now()),
        SubmitOutcome::Saved(SuccessMode::InlineBanner)
    );
    assert!(store.get_item(SUBMISSIONS_KEY).is_some());
}
