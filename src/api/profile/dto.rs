use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::models::UserRow;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: UserRow,
}
