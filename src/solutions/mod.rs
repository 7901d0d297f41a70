use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::auth::{policy, AuthPolicy};
use crate::state::AppState;

mod dto;
pub mod handlers;
mod repo;

/// Listing is public; creating and deleting showcases requires a valid
/// token.
pub fn router(state: &AppState) -> Router<AppState> {
    let write_gate = middleware::from_fn_with_state(
        (state.clone(), AuthPolicy::AuthenticatedOnly),
        policy::enforce,
    );

    Router::new()
        .route("/solutions", post(handlers::create_solution))
        .route("/solutions/:id", delete(handlers::delete_solution))
        .route_layer(write_gate)
        .merge(Router::new().route("/solutions", get(handlers::list_solutions)))
}
