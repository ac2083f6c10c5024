//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 바인딩 주소와 활성화된 로그인 방식을 박스 형태로 출력합니다.

use crate::config::auth_config::AuthProvider;

pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 로그인 방식 요약 한 줄
pub fn sign_in_methods(providers: &[AuthProvider]) -> String {
    std::iter::once(AuthProvider::Local)
        .chain(providers.iter().copied())
        .map(|p| p.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_startup_summary(bind_address: &str, users: usize, providers: &[AuthProvider]) {
    println!();
    print_boxed_title("TEST PASSPORT");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   👤 Seeded users: {}", users);
    println!("   🔑 Sign-in: {}", sign_in_methods(providers));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_methods_always_starts_with_local() {
        assert_eq!(sign_in_methods(&[]), "Local");
        assert_eq!(
            sign_in_methods(&[AuthProvider::GitHub, AuthProvider::Google]),
            "Local, GitHub, Google"
        );
    }
}
