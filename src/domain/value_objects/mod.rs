//! # Value Objects
//!
//! 식별자 없이 값 자체로 동등성이 결정되는 도메인 객체입니다.
//! 생성은 검증을 거치며, 실패는 `Either` 의 left 값으로 반환됩니다.
//!
//! ```rust,ignore
//! use app_foundation::domain::value_objects::{RequiredText, ValueObject};
//!
//! let name = RequiredText::create("  Alice ", 50);
//! assert_eq!(name.get_right().unwrap().value(), "Alice");
//! ```

pub mod required_text;

pub use required_text::*;

/// 값 객체 공통 인터페이스
pub trait ValueObject {
    type Value;

    fn value(&self) -> &Self::Value;
}

/// 값 객체 컬렉션 공통 인터페이스
pub trait ValueObjectCollection {
    type Item: ValueObject;

    fn items(&self) -> &[Self::Item];

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}
