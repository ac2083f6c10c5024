//! 계층형 서버 설정
//!
//! `config` 크레이트로 기본값, TOML 파일, 환경 변수를 합친 뒤
//! `clap`으로 받은 커맨드라인 플래그를 마지막에 덮어씁니다.

use std::path::PathBuf;
use actix_web::cookie::Key;
use clap::Parser;
use ::config::{Config, Environment, File, FileFormat, Map};
use serde::Deserialize;
use sha2::{Digest, Sha512};
use crate::config::auth_config::AuthProviders;
use crate::errors::errors::{AppError, AppResult};

/// 기본 설정 파일 이름 (작업 디렉터리 기준, 없어도 됨)
pub const DEFAULT_CONFIG_FILE: &str = "test-passport.toml";

/// 환경 변수 접두사. 중첩 구분자도 `__`입니다.
pub const ENV_PREFIX: &str = "TEST_PASSPORT";

/// 커맨드라인 인자
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "test-passport")]
#[command(about = "Demo server wiring local, OAuth and SAML sign-in into cookie sessions")]
#[command(version)]
pub struct CliArgs {
    /// TOML 설정 파일 경로
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 바인딩할 호스트
    #[arg(long)]
    pub host: Option<String>,

    /// HTTP 포트
    #[arg(long)]
    pub http_port: Option<u16>,

    /// 세션 쿠키 서명/암호화에 쓰이는 비밀값
    #[arg(long)]
    pub session_secret: Option<String>,

    /// 로그인 사용자에게 제공할 정적 파일 디렉터리
    #[arg(long)]
    pub static_files_dir: Option<PathBuf>,
}

/// 서버 설정
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub http_port: u16,
    #[serde(default)]
    pub session_secret: String,
    #[serde(default)]
    pub static_files_dir: Option<PathBuf>,
    #[serde(default)]
    pub auth_providers: AuthProviders,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            http_port: 8080,
            session_secret: String::new(),
            static_files_dir: None,
            auth_providers: AuthProviders::default(),
        }
    }
}

impl Settings {
    /// 프로세스 환경 변수를 사용해 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 파일/환경 변수 파싱 실패, 또는 `session_secret` 누락
    pub fn load(cli: &CliArgs) -> AppResult<Self> {
        Self::from_sources(cli, None)
    }

    /// `env`가 주어지면 프로세스 환경 대신 그 맵을 환경 변수 계층으로 사용합니다.
    pub fn from_sources(cli: &CliArgs, env: Option<Map<String, String>>) -> AppResult<Self> {
        let file = match &cli.config {
            Some(path) => File::from(path.as_path()).format(FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let config = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("http_port", 8080)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .source(env),
            )
            .set_override_option("host", cli.host.clone())?
            .set_override_option("http_port", cli.http_port.map(i64::from))?
            .set_override_option("session_secret", cli.session_secret.clone())?
            .set_override_option(
                "static_files_dir",
                cli.static_files_dir
                    .as_ref()
                    .map(|dir| dir.to_string_lossy().into_owned()),
            )?
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()
    }

    fn validate(self) -> AppResult<Self> {
        if self.session_secret.trim().is_empty() {
            return Err(AppError::ConfigError(
                "session_secret is required (--session-secret or TEST_PASSPORT__SESSION_SECRET)"
                    .to_string(),
            ));
        }
        Ok(self)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// 세션 쿠키 키
    ///
    /// 비밀값의 SHA-512 다이제스트(64바이트)를 키 재료로 사용하므로
    /// 비밀값 길이에 제약이 없습니다.
    pub fn session_key(&self) -> Key {
        let digest = Sha512::digest(self.session_secret.as_bytes());
        Key::from(digest.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_with_secret_from_env() {
        let settings = Settings::from_sources(
            &CliArgs::default(),
            Some(env(&[("TEST_PASSPORT__SESSION_SECRET", "keyboard cat")])),
        )
        .unwrap();

        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.http_port, 8080);
        assert_eq!(settings.session_secret, "keyboard cat");
        assert!(settings.static_files_dir.is_none());
        assert!(settings.auth_providers.github.is_none());
        assert!(settings.auth_providers.saml.is_none());
    }

    #[test]
    fn test_missing_session_secret_is_config_error() {
        let result = Settings::from_sources(&CliArgs::default(), Some(Map::new()));

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_nested_provider_settings_from_env() {
        let settings = Settings::from_sources(
            &CliArgs::default(),
            Some(env(&[
                ("TEST_PASSPORT__SESSION_SECRET", "s"),
                ("TEST_PASSPORT__AUTH_PROVIDERS__GITHUB__CLIENT_ID", "gh-client"),
                ("TEST_PASSPORT__AUTH_PROVIDERS__GITHUB__CLIENT_SECRET", "gh-secret"),
                (
                    "TEST_PASSPORT__AUTH_PROVIDERS__GITHUB__CALLBACK_URL",
                    "http://localhost:8080/signin/github/callback",
                ),
            ])),
        )
        .unwrap();

        let github = settings.auth_providers.github.unwrap();
        assert_eq!(github.client_id, "gh-client");
        assert_eq!(github.callback_url, "http://localhost:8080/signin/github/callback");
        assert!(github.token_url.is_none());
        assert!(settings.auth_providers.google.is_none());
    }

    #[test]
    fn test_numeric_looking_credentials_keep_their_text() {
        let settings = Settings::from_sources(
            &CliArgs::default(),
            Some(env(&[
                ("TEST_PASSPORT__SESSION_SECRET", "007"),
                ("TEST_PASSPORT__AUTH_PROVIDERS__GITHUB__CLIENT_ID", "0012345"),
                ("TEST_PASSPORT__AUTH_PROVIDERS__GITHUB__CLIENT_SECRET", "1.50"),
                ("TEST_PASSPORT__AUTH_PROVIDERS__GITHUB__CALLBACK_URL", "http://localhost/cb"),
            ])),
        )
        .unwrap();

        assert_eq!(settings.session_secret, "007");
        let github = settings.auth_providers.github.unwrap();
        assert_eq!(github.client_id, "0012345");
        assert_eq!(github.client_secret, "1.50");
    }

    #[test]
    fn test_cli_flags_override_env() {
        let cli = CliArgs {
            host: Some("127.0.0.1".to_string()),
            http_port: Some(3000),
            session_secret: Some("from-cli".to_string()),
            static_files_dir: Some(PathBuf::from("public")),
            ..CliArgs::default()
        };

        let settings = Settings::from_sources(
            &cli,
            Some(env(&[
                ("TEST_PASSPORT__HTTP_PORT", "9000"),
                ("TEST_PASSPORT__SESSION_SECRET", "from-env"),
            ])),
        )
        .unwrap();

        assert_eq!(settings.bind_address(), "127.0.0.1:3000");
        assert_eq!(settings.session_secret, "from-cli");
        assert_eq!(settings.static_files_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn test_env_overrides_default_port() {
        let settings = Settings::from_sources(
            &CliArgs::default(),
            Some(env(&[
                ("TEST_PASSPORT__HTTP_PORT", "9000"),
                ("TEST_PASSPORT__SESSION_SECRET", "s"),
            ])),
        )
        .unwrap();

        assert_eq!(settings.http_port, 9000);
    }

    #[test]
    fn test_missing_explicit_config_file_fails() {
        let cli = CliArgs {
            config: Some(PathBuf::from("does-not-exist/test-passport.toml")),
            session_secret: Some("s".to_string()),
            ..CliArgs::default()
        };

        assert!(matches!(
            Settings::from_sources(&cli, Some(Map::new())),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_session_key_is_stable_for_any_secret_length() {
        let short = Settings {
            session_secret: "x".to_string(),
            ..Settings::default()
        };

        assert_eq!(short.session_key().master(), short.session_key().master());
        assert_eq!(short.session_key().master().len(), 64);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = CliArgs::try_parse_from([
            "test-passport",
            "--http-port",
            "3000",
            "--session-secret",
            "keyboard cat",
        ])
        .unwrap();

        assert_eq!(cli.http_port, Some(3000));
        assert_eq!(cli.session_secret.as_deref(), Some("keyboard cat"));
        assert!(cli.config.is_none());
    }
}
