use std::collections::BTreeMap;

use poem_openapi::{ApiResponse, Object, payload::Json};
use uuid::Uuid;

use crate::domain::errors::ValidationErrors;

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: String,
    #[oai(skip_serializing_if_is_none)]
    pub updated_at: Option<String>,
}

#[derive(Object, Debug)]
pub struct ValidationProblemDto {
    pub title: String,
    pub status: u16,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<ValidationErrors> for ValidationProblemDto {
    fn from(value: ValidationErrors) -> Self {
        ValidationProblemDto {
            title: "One or more validation errors occurred.".to_string(),
            status: 400,
            errors: value.into_map(),
        }
    }
}

#[derive(Object, Debug)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn email_taken() -> Self {
        MessageDto {
            message: "Email already exists.".to_string(),
        }
    }
}

#[derive(ApiResponse)]
pub enum GetUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 404)]
    NotFound,
}

#[derive(ApiResponse)]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ValidationProblemDto>),
    #[oai(status = 409)]
    Conflict(Json<MessageDto>),
}

#[derive(ApiResponse)]
pub enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationProblemDto>),
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 409)]
    Conflict(Json<MessageDto>),
}

#[derive(ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound,
}
