use std::sync::{Arc, Mutex};

use argon2::Params;
use chrono::Utc;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use notes_migration::Migrator;
use notes_service::domain::model::Model;
use notes_service::domain::repository::{Repository, UnitOfWork, WriteTransaction};
use notes_service::domain::types::{Note, Role, User, UserDetails};
use notes_service::error::NotesServiceError;
use notes_service::state::AppState;
use notes_service::usecase::password::PasswordHashing;

// ── MemoryRepository ─────────────────────────────────────────────────────────

/// In-memory [`Repository`] assigning sequential ids from 1.
pub struct MemoryRepository<M> {
    pub rows: Arc<Mutex<Vec<M>>>,
    next_id: Arc<Mutex<i64>>,
}

impl<M> Clone for MemoryRepository<M> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl<M> MemoryRepository<M> {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Empty row set drawing ids from the same sequence as `self`.
    fn staging(&self) -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
            next_id: Arc::clone(&self.next_id),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl<M: Model<Id = i64>> Repository<M> for MemoryRepository<M> {
    async fn exists_by_id(&self, id: i64) -> Result<bool, NotesServiceError> {
        Ok(self.rows.lock().unwrap().iter().any(|r| r.id() == Some(id)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<M>, NotesServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == Some(id))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<M>, NotesServiceError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|r| r.id());
        Ok(rows)
    }

    async fn save(&self, mut entity: M) -> Result<M, NotesServiceError> {
        let mut rows = self.rows.lock().unwrap();
        match entity.id() {
            Some(id) => rows.retain(|r| r.id() != Some(id)),
            None => {
                let mut next = self.next_id.lock().unwrap();
                entity.set_id(*next);
                *next += 1;
            }
        }
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn save_all(&self, entities: Vec<M>) -> Result<Vec<M>, NotesServiceError> {
        let mut saved = Vec::with_capacity(entities.len());
        for entity in entities {
            saved.push(self.save(entity).await?);
        }
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), NotesServiceError> {
        self.rows.lock().unwrap().retain(|r| r.id() != Some(id));
        Ok(())
    }

    async fn count(&self) -> Result<u64, NotesServiceError> {
        Ok(self.len() as u64)
    }
}

// ── MemoryUnitOfWork ─────────────────────────────────────────────────────────

/// Stages writes and copies them into the shared repositories on commit.
#[derive(Clone)]
pub struct MemoryUnitOfWork {
    pub users: MemoryRepository<User>,
    pub details: MemoryRepository<UserDetails>,
    pub notes: MemoryRepository<Note>,
    pub fail_notes: bool,
}

impl MemoryUnitOfWork {
    pub fn new() -> Self {
        Self {
            users: MemoryRepository::empty(),
            details: MemoryRepository::empty(),
            notes: MemoryRepository::empty(),
            fail_notes: false,
        }
    }

    pub fn failing_notes() -> Self {
        Self {
            fail_notes: true,
            ..Self::new()
        }
    }
}

pub struct MemoryTransaction {
    uow: MemoryUnitOfWork,
    staged_users: MemoryRepository<User>,
    staged_details: MemoryRepository<UserDetails>,
    staged_notes: MemoryRepository<Note>,
}

impl UnitOfWork for MemoryUnitOfWork {
    type Tx = MemoryTransaction;

    async fn begin(&self) -> Result<MemoryTransaction, NotesServiceError> {
        Ok(MemoryTransaction {
            uow: self.clone(),
            staged_users: self.users.staging(),
            staged_details: self.details.staging(),
            staged_notes: self.notes.staging(),
        })
    }
}

impl WriteTransaction for MemoryTransaction {
    async fn save_user(&self, user: User) -> Result<User, NotesServiceError> {
        self.staged_users.save(user).await
    }

    async fn save_details(&self, details: UserDetails) -> Result<UserDetails, NotesServiceError> {
        self.staged_details.save(details).await
    }

    async fn save_notes(&self, notes: Vec<Note>) -> Result<Vec<Note>, NotesServiceError> {
        if self.uow.fail_notes {
            return Err(anyhow::anyhow!("save notes").into());
        }
        self.staged_notes.save_all(notes).await
    }

    async fn commit(self) -> Result<(), NotesServiceError> {
        let users = self.staged_users.rows.lock().unwrap().clone();
        let details = self.staged_details.rows.lock().unwrap().clone();
        let notes = self.staged_notes.rows.lock().unwrap().clone();
        self.uow.users.rows.lock().unwrap().extend(users);
        self.uow.details.rows.lock().unwrap().extend(details);
        self.uow.notes.rows.lock().unwrap().extend(notes);
        Ok(())
    }
}

// ── SQLite-backed store ──────────────────────────────────────────────────────

/// Fresh in-memory SQLite database migrated to the current schema. One
/// connection keeps every query on the same in-memory database.
pub async fn sqlite_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn cheap_passwords() -> PasswordHashing {
    PasswordHashing::with_params(Params::new(1024, 1, 1, None).unwrap())
}

pub async fn test_state() -> AppState {
    AppState {
        db: sqlite_db().await,
        passwords: cheap_passwords(),
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user(username: &str) -> User {
    User {
        id: None,
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        password: "p@ssword1".to_owned(),
        role: Role::PublicUser,
        first_name: "Ana".to_owned(),
        last_name: "Lopez".to_owned(),
    }
}

pub fn test_details(phone_number: &str) -> UserDetails {
    UserDetails {
        id: None,
        phone_number: phone_number.to_owned(),
        birth_date: Some(Utc::now().date_naive() - chrono::Days::new(30 * 365)),
        address: Some("742 Evergreen Terrace".to_owned()),
        user_id: None,
    }
}

pub fn test_note(title: &str, user_id: Option<i64>) -> Note {
    Note {
        id: None,
        title: title.to_owned(),
        content: format!("content of {title}"),
        creation_date: None,
        user_id,
    }
}
