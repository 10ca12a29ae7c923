//! # Data Transfer Objects
//!
//! 계층 경계에서 데이터를 전달하기 위한 객체의 공통 인터페이스입니다.
//!
//! `to_plain_data()` 는 필드 단위의 얕은 JSON 투영을 만듭니다. 함수 포인터처럼
//! JSON 으로 표현할 수 없는 필드는 `#[serde(skip)]` 으로 제외합니다.
//!
//! ```rust,ignore
//! #[derive(Serialize, Deserialize)]
//! pub struct UserResponse {
//!     pub id: String,
//!     pub name: String,
//!     #[serde(skip)]
//!     pub on_change: Option<fn(&str)>,
//! }
//!
//! impl Dto for UserResponse {}
//!
//! let data = response.to_plain_data()?;   // {"id": "...", "name": "..."}
//! let back = UserResponse::from_plain_data(data)?;
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::errors::CoreResult;

/// DTO 공통 인터페이스
pub trait Dto: Serialize + DeserializeOwned {
    /// 필드 단위의 JSON 값으로 변환합니다.
    fn to_plain_data(&self) -> CoreResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// JSON 값에서 DTO 를 복원합니다.
    fn from_plain_data(value: Value) -> CoreResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn from_json(raw: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    use crate::core::errors::CoreError;
    use crate::domain::value_objects::RequiredText;
    use crate::fp::Optional;

    #[derive(Serialize, Deserialize)]
    struct ProfileDto {
        id: String,
        display_name: RequiredText,
        #[serde(default)]
        nickname: Optional<String>,
        #[serde(skip)]
        on_change: Option<fn(&str) -> usize>,
    }

    impl Dto for ProfileDto {}

    fn sample() -> ProfileDto {
        ProfileDto {
            id: "u-1".to_string(),
            display_name: RequiredText::create("Alice", 20).get_right().unwrap(),
            nickname: Optional::none(),
            on_change: Some(str::len),
        }
    }

    #[test]
    fn test_plain_data_drops_function_fields() {
        let data = sample().to_plain_data().unwrap();

        assert_eq!(data["id"], "u-1");
        assert_eq!(data["display_name"], "Alice");
        assert!(data.get("on_change").is_none());
    }

    #[test]
    fn test_plain_data_restore() {
        let data = sample().to_plain_data().unwrap();
        let restored = ProfileDto::from_plain_data(data).unwrap();

        assert_eq!(restored.id, "u-1");
        assert_eq!(restored.display_name.as_str(), "Alice");
        assert!(restored.nickname.is_none());
        assert!(restored.on_change.is_none());
    }

    #[test]
    fn test_json_string() {
        let raw = sample().to_json().unwrap();
        assert!(raw.contains("\"display_name\":\"Alice\""));

        let restored = ProfileDto::from_json(&raw).unwrap();
        assert_eq!(restored.id, "u-1");
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let result = ProfileDto::from_json(r#"{"id": "u-2", "display_name": "   "}"#);
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }
}
