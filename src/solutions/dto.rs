use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSolutionRequest {
    pub image_url: String,
    pub location: String,
    pub power: f64,
    pub annual_saving: String,
}
