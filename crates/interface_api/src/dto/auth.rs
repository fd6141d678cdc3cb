//! Authentication DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::UserId;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone_number: Option<String>,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub activated: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in_secs: u64,
}
