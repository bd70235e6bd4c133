use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, TransactionTrait,
};

use notes_schema::{users, users_details, users_notes};

use crate::domain::repository::{Repository, UnitOfWork, WriteTransaction};
use crate::domain::types::{Note, User, UserDetails};
use crate::error::NotesServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl Repository<User> for DbUserRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, NotesServiceError> {
        let count = users::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check user exists")?;
        Ok(count > 0)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, NotesServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, NotesServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("find all users")?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn save(&self, user: User) -> Result<User, NotesServiceError> {
        let model = save_user(&self.db, user).await.context("save user")?;
        user_from_model(model)
    }

    async fn save_all(&self, users: Vec<User>) -> Result<Vec<User>, NotesServiceError> {
        let txn = self.db.begin().await.context("begin save all users")?;
        let mut models = Vec::with_capacity(users.len());
        for user in users {
            models.push(save_user(&txn, user).await.context("save user")?);
        }
        txn.commit().await.context("commit save all users")?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), NotesServiceError> {
        users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, NotesServiceError> {
        let count = users::Entity::find()
            .count(&self.db)
            .await
            .context("count users")?;
        Ok(count)
    }
}

async fn save_user<C: ConnectionTrait>(conn: &C, user: User) -> Result<users::Model, DbErr> {
    let am = users::ActiveModel {
        id: user.id.map_or(NotSet, Set),
        username: Set(user.username),
        email: Set(user.email),
        password: Set(user.password),
        role: Set(user.role.as_str().to_owned()),
        first_name: Set(user.first_name),
        last_name: Set(user.last_name),
    };
    match user.id {
        Some(_) => am.update(conn).await,
        None => am.insert(conn).await,
    }
}

fn user_from_model(model: users::Model) -> Result<User, NotesServiceError> {
    Ok(User {
        id: Some(model.id),
        username: model.username,
        email: model.email,
        password: model.password,
        role: model.role.parse()?,
        first_name: model.first_name,
        last_name: model.last_name,
    })
}

// ── User details repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserDetailsRepository {
    pub db: DatabaseConnection,
}

impl Repository<UserDetails> for DbUserDetailsRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, NotesServiceError> {
        let count = users_details::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check user details exist")?;
        Ok(count > 0)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserDetails>, NotesServiceError> {
        let model = users_details::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user details by id")?;
        Ok(model.map(details_from_model))
    }

    async fn find_all(&self) -> Result<Vec<UserDetails>, NotesServiceError> {
        let models = users_details::Entity::find()
            .order_by_asc(users_details::Column::Id)
            .all(&self.db)
            .await
            .context("find all user details")?;
        Ok(models.into_iter().map(details_from_model).collect())
    }

    async fn save(&self, details: UserDetails) -> Result<UserDetails, NotesServiceError> {
        let model = save_details(&self.db, details)
            .await
            .context("save user details")?;
        Ok(details_from_model(model))
    }

    async fn save_all(
        &self,
        details: Vec<UserDetails>,
    ) -> Result<Vec<UserDetails>, NotesServiceError> {
        let txn = self
            .db
            .begin()
            .await
            .context("begin save all user details")?;
        let mut saved = Vec::with_capacity(details.len());
        for row in details {
            let model = save_details(&txn, row)
                .await
                .context("save user details")?;
            saved.push(details_from_model(model));
        }
        txn.commit()
            .await
            .context("commit save all user details")?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), NotesServiceError> {
        users_details::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user details")?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, NotesServiceError> {
        let count = users_details::Entity::find()
            .count(&self.db)
            .await
            .context("count user details")?;
        Ok(count)
    }
}

async fn save_details<C: ConnectionTrait>(
    conn: &C,
    details: UserDetails,
) -> Result<users_details::Model, DbErr> {
    let user_id = details
        .user_id
        .ok_or_else(|| DbErr::Custom("user details have no owning user".to_owned()))?;
    let am = users_details::ActiveModel {
        id: details.id.map_or(NotSet, Set),
        phone_number: Set(details.phone_number),
        birth_date: Set(details.birth_date),
        address: Set(details.address),
        user_id: Set(user_id),
    };
    match details.id {
        Some(_) => am.update(conn).await,
        None => am.insert(conn).await,
    }
}

fn details_from_model(model: users_details::Model) -> UserDetails {
    UserDetails {
        id: Some(model.id),
        phone_number: model.phone_number,
        birth_date: model.birth_date,
        address: model.address,
        user_id: Some(model.user_id),
    }
}

// ── Note repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNoteRepository {
    pub db: DatabaseConnection,
}

impl Repository<Note> for DbNoteRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, NotesServiceError> {
        let count = users_notes::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check note exists")?;
        Ok(count > 0)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, NotesServiceError> {
        let model = users_notes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find note by id")?;
        Ok(model.map(note_from_model))
    }

    async fn find_all(&self) -> Result<Vec<Note>, NotesServiceError> {
        let models = users_notes::Entity::find()
            .order_by_asc(users_notes::Column::Id)
            .all(&self.db)
            .await
            .context("find all notes")?;
        Ok(models.into_iter().map(note_from_model).collect())
    }

    async fn save(&self, note: Note) -> Result<Note, NotesServiceError> {
        let model = save_note(&self.db, note).await.context("save note")?;
        Ok(note_from_model(model))
    }

    async fn save_all(&self, notes: Vec<Note>) -> Result<Vec<Note>, NotesServiceError> {
        let txn = self.db.begin().await.context("begin save all notes")?;
        let saved = save_notes(&txn, notes).await.context("save notes")?;
        txn.commit().await.context("commit save all notes")?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), NotesServiceError> {
        users_notes::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete note")?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, NotesServiceError> {
        let count = users_notes::Entity::find()
            .count(&self.db)
            .await
            .context("count notes")?;
        Ok(count)
    }
}

async fn save_note<C: ConnectionTrait>(conn: &C, note: Note) -> Result<users_notes::Model, DbErr> {
    let user_id = note
        .user_id
        .ok_or_else(|| DbErr::Custom("note has no owning user".to_owned()))?;
    match note.id {
        // creation_date stays NotSet so a replace never touches it
        Some(id) => {
            users_notes::ActiveModel {
                id: Set(id),
                title: Set(note.title),
                content: Set(note.content),
                creation_date: NotSet,
                user_id: Set(user_id),
            }
            .update(conn)
            .await
        }
        None => {
            users_notes::ActiveModel {
                id: NotSet,
                title: Set(note.title),
                content: Set(note.content),
                creation_date: Set(Utc::now().date_naive()),
                user_id: Set(user_id),
            }
            .insert(conn)
            .await
        }
    }
}

async fn save_notes<C: ConnectionTrait>(conn: &C, notes: Vec<Note>) -> Result<Vec<Note>, DbErr> {
    let mut saved = Vec::with_capacity(notes.len());
    for note in notes {
        saved.push(note_from_model(save_note(conn, note).await?));
    }
    Ok(saved)
}

fn note_from_model(model: users_notes::Model) -> Note {
    Note {
        id: Some(model.id),
        title: model.title,
        content: model.content,
        creation_date: Some(model.creation_date),
        user_id: Some(model.user_id),
    }
}

// ── Unit of work ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUnitOfWork {
    pub db: DatabaseConnection,
}

impl UnitOfWork for DbUnitOfWork {
    type Tx = DbWriteTransaction;

    async fn begin(&self) -> Result<DbWriteTransaction, NotesServiceError> {
        let txn = self.db.begin().await.context("begin unit of work")?;
        Ok(DbWriteTransaction { txn })
    }
}

/// Rolls back when dropped uncommitted.
pub struct DbWriteTransaction {
    txn: DatabaseTransaction,
}

impl WriteTransaction for DbWriteTransaction {
    async fn save_user(&self, user: User) -> Result<User, NotesServiceError> {
        let model = save_user(&self.txn, user).await.context("save user")?;
        user_from_model(model)
    }

    async fn save_details(&self, details: UserDetails) -> Result<UserDetails, NotesServiceError> {
        let model = save_details(&self.txn, details)
            .await
            .context("save user details")?;
        Ok(details_from_model(model))
    }

    async fn save_notes(&self, notes: Vec<Note>) -> Result<Vec<Note>, NotesServiceError> {
        let saved = save_notes(&self.txn, notes).await.context("save notes")?;
        Ok(saved)
    }

    async fn commit(self) -> Result<(), NotesServiceError> {
        self.txn.commit().await.context("commit unit of work")?;
        Ok(())
    }
}
