use notes_service::domain::repository::Repository;
use notes_service::domain::types::{Note, User};
use notes_service::usecase::model::{CrudService, ModelService};
use notes_service::usecase::note::note_service;

use crate::helpers::{MemoryRepository, test_note, test_user};

// ── Replace strategy ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_round_trip_saved_entity() {
    let svc = ModelService::<User, _>::replacing(MemoryRepository::empty());
    let saved = svc.save(test_user("ana01")).await.unwrap();

    let found = svc.find_by_id(saved.id.unwrap()).await.unwrap();
    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn should_list_in_ascending_id_order() {
    let svc = ModelService::<User, _>::replacing(MemoryRepository::empty());
    for name in ["carla", "bruno", "ana01"] {
        svc.save(test_user(name)).await.unwrap();
    }

    let ids: Vec<_> = svc
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id.unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn should_return_none_when_updating_absent_id() {
    let repo = MemoryRepository::empty();
    let svc = ModelService::<User, _>::replacing(repo.clone());

    let result = svc.update(99, test_user("ghost")).await.unwrap();

    assert!(result.is_none());
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn should_replace_whole_entity_under_path_id() {
    let svc = ModelService::<User, _>::replacing(MemoryRepository::empty());
    let saved = svc.save(test_user("ana01")).await.unwrap();
    let id = saved.id.unwrap();

    let mut replacement = test_user("ana02");
    replacement.id = Some(id + 100);
    let updated = svc.update(id, replacement).await.unwrap().unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.username, "ana02");
    assert_eq!(svc.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_delete_exactly_once() {
    let svc = ModelService::<User, _>::replacing(MemoryRepository::empty());
    let id = svc.save(test_user("ana01")).await.unwrap().id.unwrap();

    assert!(svc.delete_by_id(id).await.unwrap());
    assert!(!svc.delete_by_id(id).await.unwrap());
    assert!(svc.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn should_count_rows() {
    let svc = ModelService::<User, _>::replacing(MemoryRepository::empty());
    assert_eq!(svc.count().await.unwrap(), 0);
    svc.save(test_user("ana01")).await.unwrap();
    assert_eq!(svc.count().await.unwrap(), 1);
}

// ── Note merge strategy ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_merge_only_title_and_content_into_note() {
    let repo = MemoryRepository::<Note>::empty();
    let mut stored = test_note("original title", Some(7));
    stored.creation_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15);
    let stored = repo.save(stored).await.unwrap();
    let id = stored.id.unwrap();

    let svc = note_service(repo);
    let mut incoming = test_note("new title", Some(8));
    incoming.content = "new content".into();
    let updated = svc.update(id, incoming).await.unwrap().unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.title, "new title");
    assert_eq!(updated.content, "new content");
    assert_eq!(updated.creation_date, stored.creation_date);
    assert_eq!(updated.user_id, Some(7));
}

#[tokio::test]
async fn should_not_create_note_when_merging_into_absent_id() {
    let repo = MemoryRepository::<Note>::empty();
    let svc = note_service(repo.clone());

    assert!(svc.update(5, test_note("title", Some(1))).await.unwrap().is_none());
    assert_eq!(repo.len(), 0);
}
