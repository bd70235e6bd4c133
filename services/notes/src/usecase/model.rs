use std::future::Future;

use crate::domain::model::Model;
use crate::domain::repository::Repository;
use crate::error::NotesServiceError;

/// CRUD contract served by the generic controller.
pub trait CrudService<M: Model>: Clone + Send + Sync + 'static {
    fn find_all(&self) -> impl Future<Output = Result<Vec<M>, NotesServiceError>> + Send;

    fn find_by_id(
        &self,
        id: M::Id,
    ) -> impl Future<Output = Result<Option<M>, NotesServiceError>> + Send;

    fn save(&self, entity: M) -> impl Future<Output = Result<M, NotesServiceError>> + Send;

    /// `None` when no entity exists under `id`.
    fn update(
        &self,
        id: M::Id,
        entity: M,
    ) -> impl Future<Output = Result<Option<M>, NotesServiceError>> + Send;

    /// `true` if the entity existed and was deleted.
    fn delete_by_id(&self, id: M::Id) -> impl Future<Output = Result<bool, NotesServiceError>> + Send;
}

/// How `update` turns the stored entity and the payload into the new state.
pub enum UpdateStrategy<M> {
    /// The payload is the full new state; the path id wins over any payload id.
    Replace,
    /// Combine the stored entity with the payload.
    Merge(fn(existing: M, incoming: M) -> M),
}

impl<M> Clone for UpdateStrategy<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for UpdateStrategy<M> {}

/// Entity-agnostic CRUD over a [`Repository`].
#[derive(Clone)]
pub struct ModelService<M, R> {
    repo: R,
    strategy: UpdateStrategy<M>,
}

impl<M: Model, R: Repository<M>> ModelService<M, R> {
    pub fn new(repo: R, strategy: UpdateStrategy<M>) -> Self {
        Self { repo, strategy }
    }

    pub fn replacing(repo: R) -> Self {
        Self::new(repo, UpdateStrategy::Replace)
    }

    pub async fn count(&self) -> Result<u64, NotesServiceError> {
        self.repo.count().await
    }
}

impl<M, R> CrudService<M> for ModelService<M, R>
where
    M: Model,
    R: Repository<M> + Clone + 'static,
{
    async fn find_all(&self) -> Result<Vec<M>, NotesServiceError> {
        self.repo.find_all().await
    }

    async fn find_by_id(&self, id: M::Id) -> Result<Option<M>, NotesServiceError> {
        self.repo.find_by_id(id).await
    }

    async fn save(&self, entity: M) -> Result<M, NotesServiceError> {
        let saved = self.repo.save(entity).await?;
        tracing::debug!(entity = M::NAME, id = ?saved.id(), "saved");
        Ok(saved)
    }

    async fn update(&self, id: M::Id, mut entity: M) -> Result<Option<M>, NotesServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Ok(None);
        }
        let next = match self.strategy {
            UpdateStrategy::Replace => {
                entity.set_id(id);
                entity
            }
            UpdateStrategy::Merge(merge) => match self.repo.find_by_id(id).await? {
                Some(existing) => merge(existing, entity),
                None => return Ok(None),
            },
        };
        let saved = self.repo.save(next).await?;
        tracing::debug!(entity = M::NAME, %id, "updated");
        Ok(Some(saved))
    }

    async fn delete_by_id(&self, id: M::Id) -> Result<bool, NotesServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repo.delete_by_id(id).await?;
        tracing::debug!(entity = M::NAME, %id, "deleted");
        Ok(true)
    }
}
