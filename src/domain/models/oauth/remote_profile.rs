//! 프로바이더 공통 원격 프로필
//!
//! 각 프로바이더의 사용자 정보 응답은 형태가 제각각이므로,
//! 레지스트리에 넘기기 전에 이 구조체로 정규화합니다.

use serde::{Deserialize, Serialize};

/// 외부 프로바이더가 검증한 사용자 프로필
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteProfile {
    /// 프로바이더 내부 사용자 ID
    pub id: String,
    /// 프로바이더가 알려준 사용자명 (레지스트리의 `name`이 됨)
    pub username: String,
}

impl RemoteProfile {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}
