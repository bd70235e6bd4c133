use axum::{
    Json, Router,
    extract::{FromRef, State},
    http::StatusCode,
    routing::get,
};

use notes_core::error::AppError;
use notes_core::extract::{IdPath, ValidatedJson};

use crate::domain::model::Model;
use crate::usecase::model::CrudService;

// ── GET /{coll} ──────────────────────────────────────────────────────────────

pub async fn list<M, S>(State(service): State<S>) -> Result<Json<Vec<M>>, AppError>
where
    M: Model,
    S: CrudService<M>,
{
    Ok(Json(service.find_all().await?))
}

// ── GET /{coll}/{id} ─────────────────────────────────────────────────────────

pub async fn get_by_id<M, S>(
    State(service): State<S>,
    IdPath(id): IdPath<M::Id>,
) -> Result<Json<M>, AppError>
where
    M: Model,
    S: CrudService<M>,
{
    service
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

// ── POST /{coll} ─────────────────────────────────────────────────────────────

pub async fn create<M, S>(
    State(service): State<S>,
    ValidatedJson(entity): ValidatedJson<M>,
) -> Result<(StatusCode, Json<M>), AppError>
where
    M: Model,
    S: CrudService<M>,
{
    let saved = service.save(entity).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

// ── PUT /{coll}/{id} ─────────────────────────────────────────────────────────

pub async fn update<M, S>(
    State(service): State<S>,
    IdPath(id): IdPath<M::Id>,
    ValidatedJson(entity): ValidatedJson<M>,
) -> Result<Json<M>, AppError>
where
    M: Model,
    S: CrudService<M>,
{
    service
        .update(id, entity)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

// ── DELETE /{coll}/{id} ──────────────────────────────────────────────────────

pub async fn delete<M, S>(
    State(service): State<S>,
    IdPath(id): IdPath<M::Id>,
) -> Result<StatusCode, AppError>
where
    M: Model,
    S: CrudService<M>,
{
    if service.delete_by_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

/// Mounts the five CRUD routes for `M` under `path`, served by the `S`
/// extracted from the router state.
pub fn crud_routes<M, S, T>(router: Router<T>, path: &str) -> Router<T>
where
    M: Model,
    S: CrudService<M> + FromRef<T>,
    T: Clone + Send + Sync + 'static,
{
    router
        .route(path, get(list::<M, S>).post(create::<M, S>))
        .route(
            &format!("{path}/{{id}}"),
            get(get_by_id::<M, S>)
                .put(update::<M, S>)
                .delete(delete::<M, S>),
        )
}
