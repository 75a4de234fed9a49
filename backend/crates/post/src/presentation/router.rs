//! Post Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::presentation::middleware::{AuthMiddlewareState, require_auth};

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostAppState};

/// Create the Post router with PostgreSQL repository
pub fn post_router(repo: PgPostRepository, config: Arc<AuthConfig>) -> Router {
    post_router_generic(repo, config)
}

/// Create a generic Post router for any repository implementation
///
/// Listing is public; every mutation requires a verified token.
pub fn post_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: PostRepository + Send + Sync + 'static,
{
    let state = PostAppState {
        repo: Arc::new(repo),
    };

    let protected = Router::new()
        .route("/create", post(handlers::create_post::<R>))
        .route("/update", put(handlers::update_post::<R>))
        .route("/delete", post(handlers::delete_post::<R>))
        .route_layer(middleware::from_fn_with_state(
            AuthMiddlewareState { config },
            require_auth,
        ));

    Router::new()
        .route("/", get(handlers::list_posts::<R>))
        .merge(protected)
        .with_state(state)
}
