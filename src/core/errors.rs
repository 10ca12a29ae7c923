//! # Core Error Handling System
//!
//! 의존성 프로바이더와 함수형 컨테이너(`Either`, `Optional`)가 공유하는
//! 통합 에러 타입입니다.
//!
//! ## 에러 분류 원칙
//!
//! 이 모듈의 에러는 모두 **프로그래머 계약 위반**을 표현합니다.
//! 잘못된 키, 잘못된 생성, 잘못된 접근자 사용 등이 여기에 해당합니다.
//! 예상 가능한 비즈니스 실패(사용자 없음, 입력값 오류 등)는 에러로 반환하지 않고
//! [`Either`](crate::fp::Either)의 left 값([`Failure`](crate::domain::failure::Failure))으로
//! 전달해야 합니다.
//!
//! | 에러 | 발생 지점 |
//! |------|-----------|
//! | `DuplicateKey` | 이미 등록된 키로 `register_*` 호출 |
//! | `UnknownKey` | 등록되지 않은 키로 `resolve` / `reset_*` 호출 |
//! | `MissingFactory` | 인스턴스도 팩토리도 없는 엔트리 해석 (내부 불변식 위반) |
//! | `ConstructionInvariant` | `Either::from_parts` 에 0개 또는 2개의 값 전달 |
//! | `IllegalAccess` | 폴백 없이 반대쪽 값에 `get_left` / `get_right` / `get_some` 호출 |
//! | `TypeMismatch` | 저장된 타입과 다른 타입으로 해석 |
//! | `CircularDependency` | 팩토리가 자기 자신의 키를 다시 해석 |
//! | `Serialization` | DTO JSON 변환 실패 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use app_foundation::core::errors::{CoreError, CoreResult};
//!
//! fn load(provider: &DependencyProvider) -> CoreResult<Arc<Database>> {
//!     provider.resolve::<Database>("db")
//! }
//!
//! match load(&provider) {
//!     Err(CoreError::UnknownKey(key)) => log::error!("{} 가 등록되지 않았습니다", key),
//!     other => { /* ... */ }
//! }
//! ```

use thiserror::Error;

/// 코어 계층 전역 에러 타입
#[derive(Error, Debug)]
pub enum CoreError {
    /// 이미 등록된 키를 다시 등록하려는 경우
    ///
    /// 등록은 한 번만 가능한 연산입니다. 테스트 등에서 값을 교체해야 한다면
    /// `reset_singleton` / `reset_lazy_singleton` 을 사용하세요.
    #[error("Instance with key {0} has already been registered")]
    DuplicateKey(String),

    /// 등록되지 않은 키에 접근한 경우
    #[error("No instance registered under key {0}")]
    UnknownKey(String),

    /// 인스턴스와 팩토리가 모두 없는 엔트리 (정상 경로에서는 도달 불가)
    #[error("Unable to create instance {0}. Missing factory")]
    MissingFactory(String),

    /// `Either` 생성 시 정확히 한쪽만 채워져야 한다는 불변식 위반
    #[error("Construction invariant violated: {0}")]
    ConstructionInvariant(String),

    /// 폴백 핸들러 없이 부분 접근자를 잘못된 쪽에 호출한 경우
    #[error("Illegal access: {0}")]
    IllegalAccess(String),

    /// 키에 저장된 값의 타입이 요청한 타입과 다른 경우
    #[error("Type mismatch for key {key}: expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
    },

    /// 팩토리 실행 중 같은 스레드에서 동일한 키를 다시 해석하려는 경우
    #[error("Circular dependency detected: {0} is already being initialized")]
    CircularDependency(String),

    /// DTO 직렬화/역직렬화 에러
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// 레지스트리 키와 관련된 에러라면 해당 키를 반환합니다.
    pub fn key(&self) -> Option<&str> {
        match self {
            CoreError::DuplicateKey(key)
            | CoreError::UnknownKey(key)
            | CoreError::MissingFactory(key)
            | CoreError::CircularDependency(key)
            | CoreError::TypeMismatch { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// 코어 계층 결과 타입
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message() {
        let error = CoreError::DuplicateKey("db".to_string());

        assert_eq!(error.to_string(), "Instance with key db has already been registered");
        assert_eq!(error.key(), Some("db"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = CoreError::TypeMismatch {
            key: "config".to_string(),
            expected: "u32",
        };

        assert!(error.to_string().contains("config"));
        assert!(error.to_string().contains("u32"));
        assert_eq!(error.key(), Some("config"));
    }

    #[test]
    fn test_access_errors_have_no_key() {
        let error = CoreError::IllegalAccess("value is left".to_string());
        assert_eq!(error.key(), None);

        let error = CoreError::ConstructionInvariant("both sides".to_string());
        assert_eq!(error.key(), None);
    }

    #[test]
    fn test_serialization_error_conversion() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let error: CoreError = result.unwrap_err().into();

        assert!(matches!(error, CoreError::Serialization(_)));
    }
}
