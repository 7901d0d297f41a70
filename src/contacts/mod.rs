use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth::{policy, AuthPolicy};
use crate::state::AppState;

mod dto;
pub mod handlers;
mod repo;

/// Anyone may leave a contact request; reading them back is for
/// authenticated staff only.
pub fn router(state: &AppState) -> Router<AppState> {
    let read_gate = middleware::from_fn_with_state(
        (state.clone(), AuthPolicy::AuthenticatedOnly),
        policy::enforce,
    );

    Router::new()
        .route("/contacts", get(handlers::list_contacts))
        .route_layer(read_gate)
        .merge(Router::new().route("/contacts", post(handlers::create_contact)))
}
