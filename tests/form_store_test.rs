//! Form store tests: per-visit isolation, notice hand-off, idle purging and
//! the delayed completion task.

mod common;

use std::time::Duration;

use sirena::registration::{
    Field, FormStore, NoticeKind, SubmissionState, SubmitError, schedule_completion,
};
use common::*;

fn fill_valid(store: &FormStore, visit: &str) {
    store.with_form(visit, |form, _| *form = valid_form());
}

#[test]
fn test_visits_are_isolated() {
    let store = FormStore::new();
    store.with_form("a", |form, _| form.set_field(Field::FullName, "Alice"));
    store.with_form("b", |form, _| form.set_field(Field::FullName, "Bob"));

    assert_eq!(store.peek("a").full_name(), "Alice");
    assert_eq!(store.peek("b").full_name(), "Bob");
    assert_eq!(store.len(), 2);
}

#[test]
fn test_snapshot_consumes_notice() {
    let store = FormStore::new();
    store.with_form("a", |form, notice| {
        let err = form.submit().expect_err("empty form");
        let SubmitError::Invalid(errors) = err else { panic!("expected invalid") };
        *notice = Some(errors.to_notice());
    });

    let (_, first) = store.snapshot("a");
    assert!(first.is_some());
    let (_, second) = store.snapshot("a");
    assert!(second.is_none());
}

#[test]
fn test_discard_starts_fresh() {
    let store = FormStore::new();
    store.with_form("a", |form, _| form.set_field(Field::Email, VALID_EMAIL));
    store.discard("a");
    assert!(store.is_empty());
    assert_eq!(store.peek("a").email(), "");
}

#[test]
fn test_complete_requires_submitting() {
    let store = FormStore::new();
    assert!(!store.complete("missing"));

    fill_valid(&store, "a");
    assert!(!store.complete("a"));
    assert_eq!(store.peek("a").state(), SubmissionState::Editing);

    store.submit("a").expect("valid form");
    assert!(store.complete("a"));
    let (form, notice) = store.snapshot("a");
    assert_eq!(form.state(), SubmissionState::Succeeded);
    assert_eq!(notice.map(|n| n.kind), Some(NoticeKind::Success));
}

#[test]
fn test_idle_forms_purged_but_submitting_kept() {
    let ttl = Duration::from_millis(200);
    let store = FormStore::with_idle_ttl(ttl);
    store.with_form("idle", |form, _| form.set_field(Field::FullName, "Idle"));
    fill_valid(&store, "pending");
    store.submit("pending").expect("valid form");

    std::thread::sleep(ttl + Duration::from_millis(100));

    // Any access purges idle forms; the submitting one survives.
    store.with_form("other", |_, _| ());
    assert_eq!(store.len(), 2);
    assert_eq!(store.peek("idle").full_name(), "");
    assert_eq!(store.peek("pending").state(), SubmissionState::Submitting);
}

#[actix_rt::test]
async fn test_scheduled_completion_after_delay() {
    let store = FormStore::new();
    fill_valid(&store, "a");
    store.submit("a").expect("valid form");

    schedule_completion(store.clone(), "a".to_string(), Duration::from_millis(SUBMIT_DELAY_MS));
    assert_eq!(store.peek("a").state(), SubmissionState::Submitting);

    tokio::time::sleep(Duration::from_millis(SUBMIT_DELAY_MS * 6)).await;
    let (form, notice) = store.snapshot("a");
    assert_eq!(form.state(), SubmissionState::Succeeded);
    assert!(notice.is_some_and(|n| !n.is_error()));
}

#[actix_rt::test]
async fn test_completion_after_discard_is_harmless() {
    let store = FormStore::new();
    fill_valid(&store, "a");
    store.submit("a").expect("valid form");
    schedule_completion(store.clone(), "a".to_string(), Duration::from_millis(SUBMIT_DELAY_MS));
    store.discard("a");

    tokio::time::sleep(Duration::from_millis(SUBMIT_DELAY_MS * 6)).await;
    assert!(store.is_empty());
}
