use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument, warn};

use crate::{error::ApiError, state::AppState};

use super::{dto::CreateContactRequest, repo::Contact};

const MAX_FIELD_LEN: usize = 64;

fn validate_contact(name: &str, number: &str) -> Result<(), ApiError> {
    if name.len() > MAX_FIELD_LEN || number.len() > MAX_FIELD_LEN {
        return Err(ApiError::Validation("name or number too long".into()));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    if let Err(e) = validate_contact(&payload.name, &payload.number) {
        warn!("contact request rejected");
        return Err(e);
    }

    let contact = Contact::create(&state.db, &payload.name, &payload.number).await?;

    info!(contact_id = %contact.id, "contact request stored");
    Ok((StatusCode::CREATED, Json(contact)))
}

#[instrument(skip(state))]
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = Contact::list_newest_first(&state.db).await?;
    Ok(Json(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_fields_up_to_64_chars() {
        let name = "n".repeat(64);
        let number = "7".repeat(64);
        assert!(validate_contact(&name, &number).is_ok());
    }

    #[test]
    fn rejects_oversized_fields() {
        let long = "x".repeat(65);
        assert!(validate_contact(&long, "123").is_err());
        assert!(validate_contact("bob", &long).is_err());
    }
}
