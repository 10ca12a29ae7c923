//! # Failure - 도메인 실패 값
//!
//! 예상 가능한 비즈니스 실패를 표현하는 값 타입입니다.
//! 도메인 연산은 실패 시 에러를 반환하는 대신 `Either<F, T>` 의 left 값으로
//! `Failure` 를 전달합니다.
//!
//! | 타입 | 용도 |
//! |------|------|
//! | [`SimpleFailure`] | 메시지 하나로 충분한 일반 실패 |
//! | [`ValueObjectFailure`] | 값 객체 생성 실패 (다국어 메시지 키) |
//! | [`TextFieldFailure`] | 텍스트 필드 검증 실패 (실패한 입력값 포함) |
//! | [`HttpRequestFailure`] | 외부 HTTP 호출 실패 |

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP 요청 실패의 메시지 키
pub const HTTP_REQUEST_FAILURE_KEY: &str = "failure.http_request";

/// 모든 도메인 실패 값의 공통 인터페이스
pub trait Failure: fmt::Debug + fmt::Display + Send + Sync {
    /// 다국어 메시지 조회에 사용할 키
    fn message_locale_key(&self) -> &str;

    /// 서로 다른 실패 타입을 하나의 left 타입으로 다룰 때 사용합니다.
    fn boxed(self) -> BoxedFailure
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// 타입이 지워진 실패 값
pub type BoxedFailure = Box<dyn Failure>;

/// 메시지 하나로 표현되는 실패
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleFailure {
    pub message: String,
}

impl SimpleFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Failure for SimpleFailure {
    fn message_locale_key(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SimpleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// 값 객체 생성 실패
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueObjectFailure {
    pub message_locale_key: String,
}

impl ValueObjectFailure {
    pub fn new(message_locale_key: impl Into<String>) -> Self {
        Self {
            message_locale_key: message_locale_key.into(),
        }
    }
}

impl Failure for ValueObjectFailure {
    fn message_locale_key(&self) -> &str {
        &self.message_locale_key
    }
}

impl fmt::Display for ValueObjectFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueObjectFailure: {}", self.message_locale_key)
    }
}

/// 텍스트 필드 검증 실패
///
/// 어떤 입력이 거부되었는지 `failed_value` 로 함께 전달합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFieldFailure {
    pub message_locale_key: String,
    pub failed_value: String,
}

impl TextFieldFailure {
    pub fn new(message_locale_key: impl Into<String>, failed_value: impl Into<String>) -> Self {
        Self {
            message_locale_key: message_locale_key.into(),
            failed_value: failed_value.into(),
        }
    }
}

impl Failure for TextFieldFailure {
    fn message_locale_key(&self) -> &str {
        &self.message_locale_key
    }
}

impl fmt::Display for TextFieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextFieldFailure: {} (value: {:?})", self.message_locale_key, self.failed_value)
    }
}

/// 텍스트 필드 실패는 값 객체 실패의 한 종류입니다.
impl From<TextFieldFailure> for ValueObjectFailure {
    fn from(failure: TextFieldFailure) -> Self {
        ValueObjectFailure::new(failure.message_locale_key)
    }
}

/// 외부 HTTP 호출 실패
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpRequestFailure {
    pub status_code: u16,
    pub status_message: String,
    pub error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl HttpRequestFailure {
    pub fn new(status_code: u16, status_message: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            status_code,
            status_message: status_message.into(),
            error_message: error_message.into(),
            extra: None,
        }
    }

    pub fn with_extra(mut self, extra: serde_json::Value) -> Self {
        self.extra = Some(extra);
        self
    }
}

impl Failure for HttpRequestFailure {
    fn message_locale_key(&self) -> &str {
        HTTP_REQUEST_FAILURE_KEY
    }
}

impl fmt::Display for HttpRequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HttpRequestError: {} {}\nMessage: {}",
            self.status_code, self.status_message, self.error_message
        )?;
        if let Some(extra) = &self.extra {
            write!(f, "\nextra: {}", extra)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fp::Either;

    #[test]
    fn test_simple_failure_fold() {
        let result: Either<SimpleFailure, u32> = Either::left(SimpleFailure::new("not_found"));

        let key = result.fold(|f| f.message_locale_key().to_string(), |_| "ok".to_string());
        assert_eq!(key, "not_found");
    }

    #[test]
    fn test_text_field_failure_as_value_object_failure() {
        let failure = TextFieldFailure::new("text_field.required", "  ");
        assert_eq!(failure.message_locale_key(), "text_field.required");

        let general: ValueObjectFailure = failure.into();
        assert_eq!(general.message_locale_key(), "text_field.required");
    }

    #[test]
    fn test_http_request_failure_display() {
        let failure = HttpRequestFailure::new(404, "Not Found", "user missing");
        assert_eq!(failure.to_string(), "HttpRequestError: 404 Not Found\nMessage: user missing");

        let failure = failure.with_extra(serde_json::json!({ "id": 7 }));
        assert_eq!(
            failure.to_string(),
            "HttpRequestError: 404 Not Found\nMessage: user missing\nextra: {\"id\":7}"
        );
        assert_eq!(failure.message_locale_key(), HTTP_REQUEST_FAILURE_KEY);
    }

    #[test]
    fn test_boxed_failures_share_left_type() {
        let failures: Vec<Either<BoxedFailure, u8>> = vec![
            Either::left(SimpleFailure::new("timeout").boxed()),
            Either::left(ValueObjectFailure::new("value.invalid").boxed()),
            Either::right(1),
        ];

        let keys: Vec<String> = failures
            .into_iter()
            .map(|result| result.fold(|f| f.message_locale_key().to_string(), |v| v.to_string()))
            .collect();

        assert_eq!(keys, vec!["timeout", "value.invalid", "1"]);
    }

    #[test]
    fn test_failure_serialization() {
        let failure = HttpRequestFailure::new(500, "Internal Server Error", "boom");
        let json = serde_json::to_value(&failure).unwrap();

        assert!(json.get("extra").is_none());
        let back: HttpRequestFailure = serde_json::from_value(json).unwrap();
        assert_eq!(back, failure);
    }
}
