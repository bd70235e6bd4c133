use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::infra::db::{DbNoteRepository, DbUnitOfWork, DbUserDetailsRepository, DbUserRepository};
use crate::usecase::note::{NoteService, note_service};
use crate::usecase::password::PasswordHashing;
use crate::usecase::user::UserService;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub passwords: PasswordHashing,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            passwords: PasswordHashing::default(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_details_repo(&self) -> DbUserDetailsRepository {
        DbUserDetailsRepository {
            db: self.db.clone(),
        }
    }

    pub fn note_repo(&self) -> DbNoteRepository {
        DbNoteRepository {
            db: self.db.clone(),
        }
    }

    pub fn unit_of_work(&self) -> DbUnitOfWork {
        DbUnitOfWork {
            db: self.db.clone(),
        }
    }

    pub fn user_service(&self) -> UserService<DbUserRepository, DbUnitOfWork> {
        UserService::new(self.user_repo(), self.unit_of_work(), self.passwords.clone())
    }

    pub fn note_service(&self) -> NoteService<DbNoteRepository> {
        note_service(self.note_repo())
    }
}

impl FromRef<AppState> for UserService<DbUserRepository, DbUnitOfWork> {
    fn from_ref(state: &AppState) -> Self {
        state.user_service()
    }
}

impl FromRef<AppState> for NoteService<DbNoteRepository> {
    fn from_ref(state: &AppState) -> Self {
        state.note_service()
    }
}
