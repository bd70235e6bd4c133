use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use notes_core::health::healthz;
use notes_core::middleware::{cors_layer, propagate_request_id_layer, request_id_layer};

use crate::domain::types::{Note, User};
use crate::handlers::{crud::crud_routes, health::readyz, user::create_with_details};
use crate::infra::db::{DbNoteRepository, DbUnitOfWork, DbUserRepository};
use crate::state::AppState;
use crate::usecase::note::NoteService;
use crate::usecase::user::UserService;

pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/api/users/full", post(create_with_details));

    let router = crud_routes::<User, UserService<DbUserRepository, DbUnitOfWork>, _>(
        router,
        "/api/users",
    );
    let router = crud_routes::<Note, NoteService<DbNoteRepository>, _>(router, "/api/notes");

    router.with_state(state).layer(
        ServiceBuilder::new()
            .layer(request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(propagate_request_id_layer())
            .layer(cors_layer(allowed_origin)),
    )
}
