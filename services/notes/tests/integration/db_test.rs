use notes_service::domain::repository::Repository;
use notes_service::domain::types::Role;
use notes_service::error::NotesServiceError;
use notes_service::infra::db::{DbNoteRepository, DbUserDetailsRepository, DbUserRepository};
use notes_service::state::AppState;
use notes_service::usecase::model::CrudService;

use crate::helpers::{test_details, test_note, test_state, test_user};

struct Repos {
    state: AppState,
    users: DbUserRepository,
    details: DbUserDetailsRepository,
    notes: DbNoteRepository,
}

async fn repos() -> Repos {
    let state = test_state().await;
    Repos {
        users: state.user_repo(),
        details: state.user_details_repo(),
        notes: state.note_repo(),
        state,
    }
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_round_trip_user_through_database() {
    let r = repos().await;
    let saved = r.users.save(test_user("ana01")).await.unwrap();

    let found = r.users.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found, saved);
    assert_eq!(found.role, Role::PublicUser);
    assert!(r.users.exists_by_id(saved.id.unwrap()).await.unwrap());
    assert!(!r.users.exists_by_id(999).await.unwrap());
}

#[tokio::test]
async fn should_list_users_by_ascending_id() {
    let r = repos().await;
    let saved = r
        .users
        .save_all(vec![test_user("ana01"), test_user("bruno"), test_user("carla")])
        .await
        .unwrap();

    let all = r.users.find_all().await.unwrap();
    assert_eq!(all, saved);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(r.users.count().await.unwrap(), 3);
}

#[tokio::test]
async fn should_reject_duplicate_username() {
    let r = repos().await;
    r.users.save(test_user("ana01")).await.unwrap();

    let mut dup = test_user("ana01");
    dup.email = "other@example.com".into();
    let result = r.users.save(dup).await;

    assert!(matches!(result, Err(NotesServiceError::Internal(_))));
    assert_eq!(r.users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let r = repos().await;
    r.users.save(test_user("ana01")).await.unwrap();

    let mut dup = test_user("ana02");
    dup.email = "ana01@example.com".into();

    assert!(r.users.save(dup).await.is_err());
}

#[tokio::test]
async fn should_roll_back_save_all_on_failure() {
    let r = repos().await;
    let result = r
        .users
        .save_all(vec![test_user("ana01"), test_user("ana01")])
        .await;

    assert!(result.is_err());
    assert_eq!(r.users.count().await.unwrap(), 0);
}

// ── Details ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_duplicate_phone_number() {
    let r = repos().await;
    let a = r.users.save(test_user("ana01")).await.unwrap();
    let b = r.users.save(test_user("bruno")).await.unwrap();

    let mut first = test_details("5551234567");
    first.user_id = a.id;
    r.details.save(first).await.unwrap();

    let mut second = test_details("5551234567");
    second.user_id = b.id;
    assert!(r.details.save(second).await.is_err());
}

#[tokio::test]
async fn should_cascade_user_delete_to_details_and_notes() {
    let r = repos().await;
    let user = r.users.save(test_user("ana01")).await.unwrap();
    let mut details = test_details("5551234567");
    details.user_id = user.id;
    r.details.save(details).await.unwrap();
    r.notes.save(test_note("groceries", user.id)).await.unwrap();

    r.users.delete_by_id(user.id.unwrap()).await.unwrap();

    assert_eq!(r.details.count().await.unwrap(), 0);
    assert_eq!(r.notes.count().await.unwrap(), 0);
}

// ── Notes ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_stamp_creation_date_on_insert() {
    let r = repos().await;
    let user = r.users.save(test_user("ana01")).await.unwrap();

    let note = r.notes.save(test_note("groceries", user.id)).await.unwrap();

    assert_eq!(note.creation_date, Some(chrono::Utc::now().date_naive()));
}

#[tokio::test]
async fn should_keep_creation_date_and_owner_on_note_update() {
    let r = repos().await;
    let owner = r.users.save(test_user("ana01")).await.unwrap();
    let other = r.users.save(test_user("bruno")).await.unwrap();
    let stored = r.notes.save(test_note("groceries", owner.id)).await.unwrap();

    let svc = r.state.note_service();
    let mut incoming = test_note("weekend groceries", other.id);
    incoming.content = "milk, eggs".into();
    let updated = svc.update(stored.id.unwrap(), incoming).await.unwrap().unwrap();

    assert_eq!(updated.title, "weekend groceries");
    assert_eq!(updated.content, "milk, eggs");
    assert_eq!(updated.creation_date, stored.creation_date);
    assert_eq!(updated.user_id, owner.id);
}

#[tokio::test]
async fn should_reject_note_without_owner() {
    let r = repos().await;
    assert!(r.notes.save(test_note("orphan", None)).await.is_err());
}

// ── Unit of work ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_commit_user_with_details_and_notes() {
    let r = repos().await;
    let saved = r
        .state
        .user_service()
        .save_with_details(
            test_user("ana01"),
            test_details("5551234567"),
            vec![test_note("first note", None), test_note("second note", None)],
        )
        .await
        .unwrap();

    let notes = r.notes.find_all().await.unwrap();
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|n| n.user_id == saved.id));
    let details = r.details.find_all().await.unwrap();
    assert_eq!(details[0].user_id, saved.id);
}

#[tokio::test]
async fn should_roll_back_everything_when_a_note_title_is_taken() {
    let r = repos().await;
    let owner = r.users.save(test_user("owner")).await.unwrap();
    r.notes.save(test_note("taken title", owner.id)).await.unwrap();

    let result = r
        .state
        .user_service()
        .save_with_details(
            test_user("ana01"),
            test_details("5551234567"),
            vec![test_note("fresh title", None), test_note("taken title", None)],
        )
        .await;

    assert!(result.is_err());
    assert_eq!(r.users.count().await.unwrap(), 1);
    assert_eq!(r.details.count().await.unwrap(), 0);
    assert_eq!(r.notes.count().await.unwrap(), 1);
}
