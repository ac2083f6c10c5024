//! User Entity Implementation
//!
//! 인증된 주체 한 명을 표현하는 엔티티입니다.
//! 로컬 인증과 모든 외부 프로바이더 인증이 같은 모델을 공유합니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 사용자 엔티티
///
/// `id`는 `"<provider>:<providerLocalId>"` 형식의 프로바이더 한정 식별자이며
/// 세션에 저장되는 값입니다. `name`은 프로바이더와 무관하게 레지스트리 전체에서
/// 유일한 표시 이름입니다. 두 필드 모두 최초 등록 이후 변경되지 않습니다.
///
/// `password`, `age` 같은 부가 속성은 생성 후에 붙는 불투명한 값이며
/// 레지스트리는 이를 해석하지 않습니다. JSON으로 직렬화할 때는
/// 최상위 필드로 평탄화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 프로바이더 한정 식별자 (primary key)
    pub id: String,
    /// 전역 유일 표시 이름
    pub name: String,
    /// 부가 속성
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl User {
    /// 부가 속성이 없는 새 레코드를 생성합니다.
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            attributes: Map::new(),
        }
    }

    /// `provider`와 프로바이더 내부 식별자로 레지스트리 키를 만듭니다.
    pub fn qualified_id(provider: &str, provider_local_id: &str) -> String {
        format!("{}:{}", provider, provider_local_id)
    }

    /// `id`의 프로바이더 부분
    pub fn provider(&self) -> &str {
        self.id.split_once(':').map(|(p, _)| p).unwrap_or(&self.id)
    }

    /// 로컬 자격 증명 어댑터가 비교하는 `password` 속성
    pub fn password(&self) -> Option<&str> {
        self.attributes.get("password").and_then(Value::as_str)
    }

    /// 임의 부가 속성 조회
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}
