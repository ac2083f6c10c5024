//! OAuth 2.0 토큰 교환 응답
//!
//! GitHub와 Google 모두 `access_token`과 `token_type`을 돌려줍니다.
//! GitHub는 `Accept: application/json` 헤더를 보내야 JSON으로 응답합니다.

use serde::Deserialize;

/// 토큰 엔드포인트 응답
#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    /// 토큰 만료 시간 (초 단위, GitHub는 보내지 않음)
    pub expires_in: Option<i64>,
}
