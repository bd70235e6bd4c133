use crate::domain::repository::Repository;
use crate::domain::types::Note;
use crate::usecase::model::{ModelService, UpdateStrategy};

/// Note CRUD. Updates merge title and content into the stored note, so the
/// creation date and owning user never change.
pub type NoteService<R> = ModelService<Note, R>;

pub fn note_service<R: Repository<Note>>(repo: R) -> NoteService<R> {
    ModelService::new(repo, UpdateStrategy::Merge(Note::merge))
}
