//! Happy-path user flows over the in-process transport.

use std::sync::atomic::Ordering;

use roster_core::MemberId;

use crate::common::{counting_session, seeded_session};

#[tokio::test]
async fn test_refresh_loads_the_seeded_listing() {
    let (session, _store) = seeded_session().await;

    assert!(session.state().is_idle());
    let names: Vec<&str> = session.members().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
}

#[tokio::test]
async fn test_add_member_reconciles_view_and_store() {
    let (mut session, store) = seeded_session().await;

    session.set_name("Carol");
    session.set_role("Treasurer");
    let created = session.submit().await.unwrap();

    assert_eq!(created.id, MemberId::new(3));
    assert_eq!(session.members().len(), 3);
    assert_eq!(session.members()[2].name, "Carol");
    assert!(session.view().form().name.is_empty());
    assert_eq!(store.snapshot().len(), 3);
}

#[tokio::test]
async fn test_edit_prefills_and_submit_updates_in_place() {
    let (mut session, store) = seeded_session().await;

    session.edit(MemberId::new(2)).unwrap();
    assert!(session.state().is_editing());
    assert_eq!(session.view().form().name, "Bob");

    session.set_role("Visual Designer");
    let updated = session.submit().await.unwrap();

    assert_eq!(updated.role, "Visual Designer");
    assert!(session.state().is_idle());
    // still the second entry, same id
    assert_eq!(session.members()[1].id, MemberId::new(2));
    assert_eq!(session.members()[1].role, "Visual Designer");
    assert_eq!(store.snapshot()[1].role, "Visual Designer");
}

#[tokio::test]
async fn test_edit_and_cancel_stay_off_the_wire() {
    let (mut session, calls) = counting_session().await;
    let after_refresh = calls.load(Ordering::SeqCst);

    session.edit(MemberId::new(1)).unwrap();
    session.set_name("Alicia");
    session.cancel();

    assert!(session.state().is_idle());
    assert!(session.view().form().name.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), after_refresh);
}

#[tokio::test]
async fn test_edit_of_an_unlisted_id_fails_locally() {
    let (mut session, calls) = counting_session().await;
    let after_refresh = calls.load(Ordering::SeqCst);

    let err = session.edit(MemberId::new(99)).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(calls.load(Ordering::SeqCst), after_refresh);
}

#[tokio::test]
async fn test_remove_drops_the_record_everywhere() {
    let (mut session, store) = seeded_session().await;

    let removed = session.remove(MemberId::new(1)).await.unwrap();

    assert_eq!(removed.name, "Alice");
    assert_eq!(session.members().len(), 1);
    assert_eq!(session.members()[0].id, MemberId::new(2));
    assert_eq!(store.snapshot().len(), 1);
}

#[tokio::test]
async fn test_a_full_visit() {
    // load, add one, rename another, drop the first, end consistent
    let (mut session, store) = seeded_session().await;

    session.set_name("Carol");
    session.set_role("Treasurer");
    session.submit().await.unwrap();

    session.edit(MemberId::new(2)).unwrap();
    session.set_name("Robert");
    session.submit().await.unwrap();

    session.remove(MemberId::new(1)).await.unwrap();

    let summary: Vec<(i64, &str)> = session
        .members()
        .iter()
        .map(|m| (m.id.value(), m.name.as_str()))
        .collect();
    assert_eq!(summary, [(2, "Robert"), (3, "Carol")]);
    assert_eq!(store.snapshot(), session.members());
}
