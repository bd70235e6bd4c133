use anyhow::anyhow;

use crate::domain::repository::{Repository, UnitOfWork, WriteTransaction};
use crate::domain::types::{Note, User, UserDetails};
use crate::error::NotesServiceError;
use crate::usecase::model::{CrudService, ModelService};
use crate::usecase::password::PasswordHashing;

/// User CRUD with full-replace updates, password hashing, and the composite
/// user + details + notes save.
#[derive(Clone)]
pub struct UserService<R, U> {
    base: ModelService<User, R>,
    uow: U,
    passwords: PasswordHashing,
}

impl<R, U> UserService<R, U>
where
    R: Repository<User>,
    U: UnitOfWork,
{
    pub fn new(repo: R, uow: U, passwords: PasswordHashing) -> Self {
        Self {
            base: ModelService::replacing(repo),
            uow,
            passwords,
        }
    }

    pub async fn count(&self) -> Result<u64, NotesServiceError> {
        self.base.count().await
    }

    fn with_hashed_password(&self, mut user: User) -> Result<User, NotesServiceError> {
        user.password = self.passwords.hash(&user.password)?;
        Ok(user)
    }

    /// Saves `user`, then `details` and `notes` owned by it, in one
    /// transaction. Nothing is persisted unless every write succeeds.
    pub async fn save_with_details(
        &self,
        user: User,
        mut details: UserDetails,
        notes: Vec<Note>,
    ) -> Result<User, NotesServiceError> {
        let user = self.with_hashed_password(user)?;

        let tx = self.uow.begin().await?;
        let saved = tx.save_user(user).await?;
        let user_id = saved
            .id
            .ok_or_else(|| anyhow!("saved user has no id"))?;

        details.user_id = Some(user_id);
        tx.save_details(details).await?;

        let note_count = notes.len();
        if !notes.is_empty() {
            let owned = notes
                .into_iter()
                .map(|note| Note {
                    user_id: Some(user_id),
                    ..note
                })
                .collect();
            tx.save_notes(owned).await?;
        }

        tx.commit().await?;
        tracing::info!(user_id, notes = note_count, "created user with details");
        Ok(saved)
    }
}

impl<R, U> CrudService<User> for UserService<R, U>
where
    R: Repository<User> + Clone + 'static,
    U: UnitOfWork + Clone + 'static,
{
    async fn find_all(&self) -> Result<Vec<User>, NotesServiceError> {
        self.base.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, NotesServiceError> {
        self.base.find_by_id(id).await
    }

    async fn save(&self, user: User) -> Result<User, NotesServiceError> {
        let user = self.with_hashed_password(user)?;
        self.base.save(user).await
    }

    async fn update(&self, id: i64, user: User) -> Result<Option<User>, NotesServiceError> {
        let user = self.with_hashed_password(user)?;
        self.base.update(id, user).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, NotesServiceError> {
        self.base.delete_by_id(id).await
    }
}
