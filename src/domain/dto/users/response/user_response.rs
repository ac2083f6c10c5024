use serde::Serialize;
use serde_json::{Map, Value};
use crate::domain::entities::users::user::User;

/// JSON API로 내보내는 사용자 응답 DTO
///
/// `password` 속성은 응답에서 제외됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    /// `id`의 프로바이더 부분 (편의 필드)
    pub provider: String,
    pub attributes: Map<String, Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let provider = user.provider().to_string();
        let User { id, name, mut attributes } = user;
        attributes.remove("password");

        Self {
            id,
            name,
            provider,
            attributes,
        }
    }
}
