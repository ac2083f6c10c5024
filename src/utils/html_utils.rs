//! # HTML 렌더링 유틸리티
//!
//! 로그인 화면과 메인 화면을 문자열로 조립합니다.
//! 화면에 다시 출력되는 모든 사용자 입력은 [`escape_html`]을 거칩니다.

use crate::config::auth_config::AuthProvider;

/// HTML 특수문자를 엔티티로 바꿉니다.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n  <body>\n{}\n  </body>\n</html>\n",
        body
    )
}

/// 로그인 화면
///
/// `flash`가 있으면 폼 위에 한 번 표시하고, 설정된 외부 프로바이더마다 링크를 만듭니다.
pub fn signin_page(flash: Option<&str>, providers: &[AuthProvider]) -> String {
    let mut body = String::new();

    if let Some(message) = flash {
        body.push_str(&format!(
            "    <p class=\"error\">{}</p>\n",
            escape_html(message)
        ));
    }

    body.push_str(concat!(
        "    <form method=\"post\" action=\"/signin/local\">\n",
        "      <input type=\"text\" name=\"username\">\n",
        "      <input type=\"password\" name=\"password\">\n",
        "      <input type=\"submit\">\n",
        "    </form>\n",
    ));

    if !providers.is_empty() {
        body.push_str("    <ul>\n");
        for provider in providers {
            body.push_str(&format!(
                "      <li><a href=\"/signin/{}\">Sign in with {}</a></li>\n",
                provider.as_str(),
                provider.display_name()
            ));
        }
        body.push_str("    </ul>");
    }

    page(&body)
}

/// 메인 화면: 현재 사용자 레코드와 로그아웃 버튼
pub fn home_page(user_json: &str) -> String {
    page(&format!(
        "    <pre>{}</pre>\n    <a href=\"/signout\"><button>Sign out</button></a>",
        escape_html(user_json)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("barbara.gordon"), "barbara.gordon");
    }

    #[test]
    fn test_signin_page_escapes_flash_and_lists_providers() {
        let html = signin_page(
            Some("the name <b>robin</b> is already taken"),
            &[AuthProvider::GitHub, AuthProvider::Saml],
        );

        assert!(html.contains("the name &lt;b&gt;robin&lt;/b&gt; is already taken"));
        assert!(html.contains("<a href=\"/signin/github\">Sign in with GitHub</a>"));
        assert!(html.contains("<a href=\"/signin/saml\">Sign in with SAML</a>"));
        assert!(!html.contains("/signin/google"));
        assert!(html.contains("action=\"/signin/local\""));
    }

    #[test]
    fn test_signin_page_without_flash_or_providers() {
        let html = signin_page(None, &[]);

        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_home_page_wraps_json_in_pre() {
        let html = home_page("{\n  \"name\": \"<robin>\"\n}");

        assert!(html.contains("<pre>{\n  &quot;name&quot;: &quot;&lt;robin&gt;&quot;\n}</pre>"));
        assert!(html.contains("href=\"/signout\""));
    }
}
