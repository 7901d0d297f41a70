use axum::{middleware, routing::post, Router};

use crate::state::AppState;

pub mod claims;
mod dto;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod repo;
pub mod seed;

pub use policy::AuthPolicy;

/// `/signup` is admin-gated (or merely authenticated when no admin email is
/// configured); `/login` is open.
pub fn router(state: &AppState) -> Router<AppState> {
    let signup_gate = middleware::from_fn_with_state(
        (
            state.clone(),
            AuthPolicy::admin_only(state.config.auth.admin_email.clone()),
        ),
        policy::enforce,
    );

    Router::new()
        .route("/signup", post(handlers::signup))
        .route_layer(signup_gate)
        .merge(Router::new().route("/login", post(handlers::login)))
}
