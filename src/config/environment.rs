//! 실행 환경 감지 모듈

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 해석 과정 추적 로그 활성화
    Development,
    /// 테스트 환경 - 경고 이상만 출력
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 실행 환경을 결정합니다.
    ///
    /// 프로세스 환경 변수를 건드리지 않고 테스트할 수 있도록 분리된 진입점입니다.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let name = lookup("ENVIRONMENT")
            .or_else(|| lookup("NODE_ENV"))
            .unwrap_or_else(|| "production".to_string());
        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값은 `Production`으로 처리합니다.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// 환경별 기본 로그 필터
    ///
    /// `RUST_LOG` 가 설정되지 않았을 때 `env_logger` 에 전달됩니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_lookup_order() {
        let vars = HashMap::from([("NODE_ENV", "test"), ("ENVIRONMENT", "staging")]);
        let env = Environment::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(env, Environment::Staging);

        let vars = HashMap::from([("NODE_ENV", "development")]);
        let env = Environment::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(env, Environment::Development);

        let env = Environment::from_lookup(|_| None);
        assert_eq!(env, Environment::Production);
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(Environment::Development.default_log_filter(), "debug");
        assert_eq!(Environment::Test.default_log_filter(), "warn");
        assert_eq!(Environment::Production.default_log_filter(), "info");
    }
}
