//! 공백이 아닌 필수 텍스트 값 객체

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ValueObject, ValueObjectCollection};
use crate::domain::failure::TextFieldFailure;
use crate::fp::Either;
use crate::utils::string_utils::validate_required_text;

/// 역직렬화 시 적용되는 기본 최대 글자 수
pub const DEFAULT_MAX_CHARS: usize = 255;

/// 앞뒤 공백이 제거된, 비어 있지 않은 텍스트
///
/// JSON 에서 역직렬화할 때도 [`DEFAULT_MAX_CHARS`] 기준으로 검증합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RequiredText(String);

impl RequiredText {
    /// 입력을 정리하고 검증하여 값 객체를 생성합니다.
    ///
    /// # Returns
    ///
    /// * `Right(RequiredText)` - 정리된 유효한 텍스트
    /// * `Left(TextFieldFailure)` - 비어 있거나 (`text_field.required`)
    ///   `max_chars` 를 초과한 경우 (`text_field.too_long`)
    pub fn create(raw: &str, max_chars: usize) -> Either<TextFieldFailure, Self> {
        validate_required_text(raw, max_chars).map(RequiredText)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for RequiredText {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RequiredText {
    type Error = TextFieldFailure;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::create(&raw, DEFAULT_MAX_CHARS).into_result()
    }
}

impl From<RequiredText> for String {
    fn from(text: RequiredText) -> Self {
        text.0
    }
}

/// [`RequiredText`] 목록 (예: 태그)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredTextList(Vec<RequiredText>);

impl RequiredTextList {
    /// 모든 항목을 검증합니다. 첫 번째 실패에서 중단합니다.
    pub fn create<'a>(
        raws: impl IntoIterator<Item = &'a str>,
        max_chars: usize,
    ) -> Either<TextFieldFailure, Self> {
        raws.into_iter()
            .map(|raw| RequiredText::create(raw, max_chars).into_result())
            .collect::<Result<Vec<_>, _>>()
            .map(RequiredTextList)
            .into()
    }
}

impl ValueObjectCollection for RequiredTextList {
    type Item = RequiredText;

    fn items(&self) -> &[RequiredText] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::failure::Failure;
    use crate::utils::string_utils::{REQUIRED_KEY, TOO_LONG_KEY};

    #[test]
    fn test_create_trims_input() {
        let text = RequiredText::create("  Alice  ", 10).get_right().unwrap();

        assert_eq!(text.value(), "Alice");
        assert_eq!(text.to_string(), "Alice");
    }

    #[test]
    fn test_create_rejects_blank_and_long_input() {
        let blank = RequiredText::create("   ", 10).get_left().unwrap();
        assert_eq!(blank.message_locale_key(), REQUIRED_KEY);

        let long = RequiredText::create("abcdefghijk", 10).get_left().unwrap();
        assert_eq!(long.message_locale_key(), TOO_LONG_KEY);
        assert_eq!(long.failed_value, "abcdefghijk");
    }

    #[test]
    fn test_json_is_validated() {
        let text: RequiredText = serde_json::from_str(r#""  Bob ""#).unwrap();
        assert_eq!(text.as_str(), "Bob");
        assert_eq!(serde_json::to_string(&text).unwrap(), r#""Bob""#);

        let invalid: Result<RequiredText, _> = serde_json::from_str(r#""   ""#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_list_stops_at_first_failure() {
        let tags = RequiredTextList::create(["rust", " di "], 10).get_right().unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.items()[1].as_str(), "di");

        let failure = RequiredTextList::create(["ok", "", "way too long text"], 10)
            .get_left()
            .unwrap();
        assert_eq!(failure.message_locale_key(), REQUIRED_KEY);

        assert!(RequiredTextList::default().is_empty());
    }
}
