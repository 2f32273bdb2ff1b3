use poem_openapi::Object;

use crate::application::services::validation::UserPayload;

/// Body of create and update. Constraints are checked by the validation
/// service so that every violation is reported together.
#[derive(Object, Debug)]
pub struct UserRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

impl From<UserRequestDto> for UserPayload {
    fn from(value: UserRequestDto) -> Self {
        UserPayload {
            name: value.name,
            email: value.email,
            age: value.age,
        }
    }
}
