use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewReviewRequest {
    pub rating: u8,
    pub comment: String,
}
