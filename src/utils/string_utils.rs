//! # 문자열 유틸리티
//!
//! 값 객체 검증에서 사용하는 문자열 정리 함수들입니다.
//! 실패는 에러가 아닌 `Either` 의 left 값([`TextFieldFailure`])으로 반환합니다.

use serde::Deserialize;

use crate::domain::failure::TextFieldFailure;
use crate::fp::{Either, Optional};

/// 필수 입력이 비어 있을 때의 메시지 키
pub const REQUIRED_KEY: &str = "text_field.required";
/// 최대 길이를 초과했을 때의 메시지 키
pub const TOO_LONG_KEY: &str = "text_field.too_long";

/// 필수 문자열 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 `text_field.required` 실패를,
/// 정리된 문자열이 `max_chars` 글자를 넘으면 `text_field.too_long` 실패를 반환합니다.
/// 길이는 바이트가 아닌 문자 수로 계산합니다.
///
/// # 예제
/// ```rust,ignore
/// use app_foundation::utils::string_utils::validate_required_text;
///
/// assert_eq!(validate_required_text("  Hello  ", 10).get_right().unwrap(), "Hello");
/// assert!(validate_required_text("   ", 10).is_left());
/// ```
pub fn validate_required_text(value: &str, max_chars: usize) -> Either<TextFieldFailure, String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Either::left(TextFieldFailure::new(REQUIRED_KEY, value));
    }
    if trimmed.chars().count() > max_chars {
        return Either::left(TextFieldFailure::new(TOO_LONG_KEY, value));
    }

    Either::right(trimmed.to_string())
}

/// 선택적 문자열 정리
///
/// 값이 없거나 공백뿐이면 `Optional::none()`, 그 외에는 앞뒤 공백을 제거한 값을 반환합니다.
pub fn clean_optional_text(value: Option<String>) -> Optional<String> {
    Optional::from(value).and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Optional::none()
        } else {
            Optional::some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `null`, 빈 문자열, 공백만 있는 문자열을 모두 `Optional::none()` 으로 변환합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Profile {
///     #[serde(default, deserialize_with = "deserialize_optional_text")]
///     nickname: Optional<String>,
/// }
/// ```
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Optional<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_text(raw))
}
