use std::future::Future;

use crate::domain::model::Model;
use crate::domain::types::{Note, User, UserDetails};
use crate::error::NotesServiceError;

/// Persistence gateway for one entity type.
///
/// Futures are `Send` so generic services can run inside axum handlers.
pub trait Repository<M: Model>: Send + Sync {
    fn exists_by_id(&self, id: M::Id) -> impl Future<Output = Result<bool, NotesServiceError>> + Send;

    fn find_by_id(
        &self,
        id: M::Id,
    ) -> impl Future<Output = Result<Option<M>, NotesServiceError>> + Send;

    /// All rows in ascending id order.
    fn find_all(&self) -> impl Future<Output = Result<Vec<M>, NotesServiceError>> + Send;

    /// Insert when `entity` has no id, full replace otherwise.
    fn save(&self, entity: M) -> impl Future<Output = Result<M, NotesServiceError>> + Send;

    /// Saves every entity or none of them.
    fn save_all(
        &self,
        entities: Vec<M>,
    ) -> impl Future<Output = Result<Vec<M>, NotesServiceError>> + Send;

    fn delete_by_id(&self, id: M::Id) -> impl Future<Output = Result<(), NotesServiceError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, NotesServiceError>> + Send;
}

/// Opens the transaction used by the composite user save.
pub trait UnitOfWork: Send + Sync {
    type Tx: WriteTransaction;

    fn begin(&self) -> impl Future<Output = Result<Self::Tx, NotesServiceError>> + Send;
}

/// Writes staged inside one transaction. Dropping it without
/// [`commit`](WriteTransaction::commit) discards every write.
pub trait WriteTransaction: Send + Sync {
    fn save_user(&self, user: User) -> impl Future<Output = Result<User, NotesServiceError>> + Send;

    fn save_details(
        &self,
        details: UserDetails,
    ) -> impl Future<Output = Result<UserDetails, NotesServiceError>> + Send;

    fn save_notes(
        &self,
        notes: Vec<Note>,
    ) -> impl Future<Output = Result<Vec<Note>, NotesServiceError>> + Send;

    fn commit(self) -> impl Future<Output = Result<(), NotesServiceError>> + Send;
}
