//! 의존성 프로바이더 설정 모듈
//!
//! 프로바이더 이름(로그 식별용), 해석 추적 여부, 기본 로그 필터를 관리합니다.

use std::env;

use super::environment::Environment;

/// 기본 프로바이더 이름
pub const DEFAULT_REGISTRY_NAME: &str = "default";

/// 의존성 프로바이더 설정
///
/// # Environment Variables
///
/// - `REGISTRY_NAME`: 로그에 표시될 프로바이더 이름 (기본값: `default`)
/// - `REGISTRY_TRACE`: `resolve` 호출마다 debug 로그 출력 여부
///   (`true`/`1`/`yes`/`on`, 기본값: 개발 환경에서만 활성화)
/// - `ENVIRONMENT` / `NODE_ENV`: 실행 환경
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub name: String,
    pub trace_resolutions: bool,
    pub environment: Environment,
}

impl RegistryConfig {
    /// 프로세스 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 구성합니다.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = Environment::from_lookup(&lookup);

        let name = lookup("REGISTRY_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_REGISTRY_NAME.to_string());

        let trace_resolutions = match lookup("REGISTRY_TRACE") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                log::warn!("REGISTRY_TRACE 값 '{}' 을(를) 해석할 수 없어 기본값을 사용합니다", raw);
                environment == Environment::Development
            }),
            None => environment == Environment::Development,
        };

        Self {
            name,
            trace_resolutions,
            environment,
        }
    }

    /// `RUST_LOG` 가 없을 때 사용할 기본 로그 필터
    pub fn log_filter(&self) -> &'static str {
        self.environment.default_log_filter()
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_REGISTRY_NAME.to_string(),
            trace_resolutions: false,
            environment: Environment::Production,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
