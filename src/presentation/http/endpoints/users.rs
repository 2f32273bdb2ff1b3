use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use crate::{
    application::usecases::update_user::UpdateUserRequest,
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{map_user, user_location},
        requests::UserRequestDto,
        responses::{
            CreateUserResponse, DeleteUserResponse, GetUserResponse, MessageDto,
            UpdateUserResponse, UserDto, ValidationProblemDto,
        },
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> PoemResult<Json<Vec<UserDto>>> {
        let users = self
            .state
            .list_users_usecase
            .execute()
            .await
            .map_err(internal_error)?;

        Ok(Json(users.iter().map(map_user).collect()))
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<String>) -> PoemResult<GetUserResponse> {
        let Some(id) = parse_id(&id) else {
            return Ok(GetUserResponse::NotFound);
        };

        match self.state.get_user_usecase.execute(id).await {
            Ok(user) => Ok(GetUserResponse::Ok(Json(map_user(&user)))),
            Err(DomainError::NotFound(_)) => Ok(GetUserResponse::NotFound),
            Err(err) => Err(internal_error(err)),
        }
    }

    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(
        &self,
        request: Json<UserRequestDto>,
    ) -> PoemResult<CreateUserResponse> {
        match self.state.create_user_usecase.execute(request.0.into()).await {
            Ok(user) => Ok(CreateUserResponse::Created(
                Json(map_user(&user)),
                user_location(&user),
            )),
            Err(DomainError::Validation(errors)) => Ok(CreateUserResponse::BadRequest(Json(
                ValidationProblemDto::from(errors),
            ))),
            Err(DomainError::EmailTaken(_)) => {
                Ok(CreateUserResponse::Conflict(Json(MessageDto::email_taken())))
            }
            Err(err) => Err(internal_error(err)),
        }
    }

    #[oai(path = "/users/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<String>,
        request: Json<UserRequestDto>,
    ) -> PoemResult<UpdateUserResponse> {
        let Some(id) = parse_id(&id) else {
            return Ok(UpdateUserResponse::NotFound);
        };

        let payload = UpdateUserRequest {
            id,
            payload: request.0.into(),
        };

        match self.state.update_user_usecase.execute(payload).await {
            Ok(user) => Ok(UpdateUserResponse::Ok(Json(map_user(&user)))),
            Err(DomainError::Validation(errors)) => Ok(UpdateUserResponse::BadRequest(Json(
                ValidationProblemDto::from(errors),
            ))),
            Err(DomainError::NotFound(_)) => Ok(UpdateUserResponse::NotFound),
            Err(DomainError::EmailTaken(_)) => {
                Ok(UpdateUserResponse::Conflict(Json(MessageDto::email_taken())))
            }
            Err(err) => Err(internal_error(err)),
        }
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<String>) -> PoemResult<DeleteUserResponse> {
        let Some(id) = parse_id(&id) else {
            return Ok(DeleteUserResponse::NotFound);
        };

        match self.state.delete_user_usecase.execute(id).await {
            Ok(()) => Ok(DeleteUserResponse::NoContent),
            Err(DomainError::NotFound(_)) => Ok(DeleteUserResponse::NotFound),
            Err(err) => Err(internal_error(err)),
        }
    }
}

/// Identifiers that are not UUIDs can never match a user.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

fn internal_error(err: DomainError) -> poem::Error {
    poem::Error::from_string(
        err.to_string(),
        poem::http::StatusCode::INTERNAL_SERVER_ERROR,
    )
}
