//! # 사용자 신원 레지스트리
//!
//! 프로바이더 한정 식별자(`"<provider>:<localId>"`)를 사용자 레코드로 매핑하는
//! 프로세스 메모리 저장소입니다. 모든 로그인 전략과 세션 복원이 이 레지스트리를
//! 단일 진실 공급원으로 사용합니다.
//!
//! ## 불변식
//!
//! - 하나의 `id`는 최대 하나의 사용자에 대응합니다.
//! - `name`은 프로바이더와 무관하게 레지스트리 전체에서 유일합니다.
//! - 한 번 등록된 `id`와 `name`의 결합은 바뀌지 않습니다.
//!
//! ## 동시성
//!
//! actix-web 워커 스레드들이 `web::Data<Users>`로 같은 인스턴스를 공유합니다.
//! `register`는 존재 확인, 이름 충돌 확인, 삽입을 하나의 쓰기 잠금 안에서
//! 수행하므로 같은 신원의 동시 등록이 유일성 검사를 함께 통과할 수 없습니다.
//! 잠금을 잡은 상태에서 `.await` 하는 코드는 없습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::repositories::users::user_registry::Users;
//!
//! let users = Users::new();
//! let robin = users.register("github", "42", "robin")?;
//! assert_eq!(robin.id, "github:42");
//!
//! // 같은 신원으로 재로그인하면 같은 레코드
//! assert_eq!(users.register("github", "42", "robin")?, robin);
//!
//! // 같은 신원이 다른 이름으로 나타나면 충돌
//! assert!(users.register("github", "42", "nightwing").is_err());
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::{Map, Value};
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};

/// 사용자 신원 레지스트리
///
/// `main`에서 한 번 생성되어 `web::Data`로 모든 핸들러와 미들웨어에 공유됩니다.
#[derive(Debug, Default)]
pub struct Users {
    users: RwLock<HashMap<String, User>>,
}

impl Users {
    /// 비어 있는 레지스트리를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// `id`로 사용자를 조회합니다.
    ///
    /// 세션 복원과 내부 충돌 검사에 사용됩니다. 부작용이 없습니다.
    pub fn lookup_by_id(&self, id: &str) -> Option<User> {
        self.read().get(id).cloned()
    }

    /// `name`으로 사용자를 조회합니다.
    ///
    /// 이름 유일성 불변식 때문에 일치하는 레코드는 많아야 하나입니다.
    pub fn lookup_by_name(&self, name: &str) -> Option<User> {
        Self::find_by_name(&self.read(), name).cloned()
    }

    /// 프로바이더 신원을 등록하거나, 이미 등록된 신원이면 그대로 돌려줍니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 새로 생성된 레코드, 또는 이름이 같은 기존 레코드
    /// * `Err(AppError::ConflictError)` - 이름이 다른 신원에 이미 쓰이고 있거나,
    ///   기존 신원이 다른 이름으로 나타난 경우
    ///
    /// 새 레코드에는 부가 속성이 없습니다. 속성은 호출자가 [`Users::attach`]로 붙입니다.
    pub fn register(&self, provider: &str, provider_local_id: &str, name: &str) -> AppResult<User> {
        let id = User::qualified_id(provider, provider_local_id);
        let mut users = self.write();

        if let Some(existing) = users.get(&id) {
            if existing.name != name {
                log::warn!("신원 이름 충돌: {} ({} != {})", id, name, existing.name);
                return Err(AppError::ConflictError(format!(
                    "name conflict {} != {}",
                    name, existing.name
                )));
            }
            return Ok(existing.clone());
        }

        if let Some(owner) = Self::find_by_name(&users, name) {
            log::warn!("이미 사용 중인 이름: {} (소유자 {}, 요청 {})", name, owner.id, id);
            return Err(AppError::ConflictError(format!(
                "the name {} is already taken",
                name
            )));
        }

        let user = User::new(id.clone(), name.to_string());
        users.insert(id, user.clone());
        log::info!("새 사용자 등록: {} ({})", user.id, user.name);

        Ok(user)
    }

    /// 기존 레코드에 불투명한 부가 속성을 병합합니다.
    ///
    /// `id`와 `name`은 불변이므로 해당 키는 거부됩니다.
    pub fn attach(&self, id: &str, attributes: Map<String, Value>) -> AppResult<User> {
        if let Some(key) = attributes.keys().find(|k| *k == "id" || *k == "name") {
            return Err(AppError::ValidationError(format!(
                "attribute {} cannot be changed",
                key
            )));
        }

        let mut users = self.write();
        let user = users
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", id)))?;
        user.attributes.extend(attributes);

        Ok(user.clone())
    }

    /// 등록된 사용자 수
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn find_by_name<'a>(users: &'a HashMap<String, User>, name: &str) -> Option<&'a User> {
        users.values().find(|user| user.name == name)
    }

    // 잠금을 잡은 스레드가 패닉해도 맵 자체는 항상 일관된 상태다.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use serde_json::json;

    #[test]
    fn test_register_is_idempotent() {
        let users = Users::new();

        let first = users.register("github", "42", "robin").unwrap();
        let second = users.register("github", "42", "robin").unwrap();

        assert_eq!(first, second);
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_same_identity_different_name_conflicts() {
        let users = Users::new();
        users.register("github", "42", "robin").unwrap();

        let err = users.register("github", "42", "nightwing").unwrap_err();

        match err {
            AppError::ConflictError(msg) => assert_eq!(msg, "name conflict nightwing != robin"),
            other => panic!("Expected ConflictError, got {:?}", other),
        }
        assert_eq!(users.lookup_by_id("github:42").unwrap().name, "robin");
    }

    #[test]
    fn test_same_name_different_identity_conflicts() {
        let users = Users::new();
        users.register("github", "42", "robin").unwrap();

        let err = users.register("google", "7", "robin").unwrap_err();

        match err {
            AppError::ConflictError(msg) => assert_eq!(msg, "the name robin is already taken"),
            other => panic!("Expected ConflictError, got {:?}", other),
        }
        assert!(users.lookup_by_id("google:7").is_none());
    }

    #[test]
    fn test_name_uniqueness_spans_providers_in_either_order() {
        let users = Users::new();
        users.register("local", "abc", "alfred").unwrap();

        assert!(users.register("github", "1", "alfred").is_err());
        assert!(users.register("local", "def", "alfred").is_err());
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_lookup_by_name_after_register() {
        let users = Users::new();
        users.register("github", "42", "robin").unwrap();

        let user = users.lookup_by_name("robin").unwrap();

        assert_eq!(user.id, "github:42");
        assert_eq!(user.name, "robin");
        assert!(user.attributes.is_empty());
    }

    #[test]
    fn test_unknown_lookups_are_absent() {
        let users = Users::new();

        assert!(users.lookup_by_id("github:42").is_none());
        assert!(users.lookup_by_name("robin").is_none());
        assert!(users.is_empty());
    }

    #[test]
    fn test_attach_merges_attributes_without_touching_identity() {
        let users = Users::new();
        users.register("local", "VntFCHMBWIvLahm", "barbara.gordon").unwrap();

        let mut attributes = Map::new();
        attributes.insert("password".to_string(), json!("IAmBatgirl"));
        attributes.insert("age".to_string(), json!(37));
        let user = users.attach("local:VntFCHMBWIvLahm", attributes).unwrap();

        assert_eq!(user.password(), Some("IAmBatgirl"));
        assert_eq!(users.lookup_by_name("barbara.gordon").unwrap(), user);

        // 재로그인은 속성이 붙은 기존 레코드를 그대로 돌려준다
        let again = users.register("local", "VntFCHMBWIvLahm", "barbara.gordon").unwrap();
        assert_eq!(again.attribute("age"), Some(&json!(37)));
    }

    #[test]
    fn test_attach_rejects_identity_keys_and_unknown_ids() {
        let users = Users::new();
        users.register("github", "42", "robin").unwrap();

        let mut rename = Map::new();
        rename.insert("name".to_string(), json!("nightwing"));
        assert!(matches!(
            users.attach("github:42", rename),
            Err(AppError::ValidationError(_))
        ));

        assert!(matches!(
            users.attach("github:43", Map::new()),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(users.lookup_by_id("github:42").unwrap().name, "robin");
    }

    #[test]
    fn test_concurrent_registration_of_same_name_admits_one_identity() {
        let users = Arc::new(Users::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let users = Arc::clone(&users);
                thread::spawn(move || users.register("github", &i.to_string(), "robin").is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(users.len(), 1);
    }
}
