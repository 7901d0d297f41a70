use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub number: String,
}
