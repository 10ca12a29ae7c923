//! # Optional - 0개 또는 1개의 값을 담는 컨테이너
//!
//! 값의 부재를 센티널(빈 문자열, 0 등)이 아닌 별도의 변형으로 표현합니다.
//! 따라서 `Optional::some(String::new())` 처럼 "비어 보이는" 값도
//! `Optional::none()` 과 명확히 구분됩니다.
//!
//! `std::option::Option` 과 이름이 겹치지 않도록 `Optional` 로 명명했으며,
//! 양방향 `From` 변환을 제공합니다.

use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};
use crate::fp::either::Either;

/// 값이 없거나(`None`) 정확히 하나 있는(`Some`) 컨테이너
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Optional<S> {
    None,
    Some(S),
}

impl<S> Optional<S> {
    pub fn none() -> Self {
        Optional::None
    }

    pub fn some(value: S) -> Self {
        Optional::Some(value)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Optional::None)
    }

    pub fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// 값 유무에 따라 두 핸들러 중 하나만 호출합니다.
    pub fn fold<T>(self, if_none: impl FnOnce() -> T, if_some: impl FnOnce(S) -> T) -> T {
        match self {
            Optional::None => if_none(),
            Optional::Some(value) => if_some(value),
        }
    }

    /// 값을 반환하거나, 비어 있으면 폴백을 계산합니다.
    pub fn get_or_else(self, if_none: impl FnOnce() -> S) -> S {
        match self {
            Optional::None => if_none(),
            Optional::Some(value) => value,
        }
    }

    /// 값을 꺼냅니다.
    ///
    /// # Errors
    ///
    /// 비어 있는 경우 `CoreError::IllegalAccess`
    pub fn get_some(self) -> CoreResult<S> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => Err(CoreError::IllegalAccess(
                "get_some called on an empty value without a fallback".to_string(),
            )),
        }
    }

    /// 값을 꺼내거나, 비어 있으면 `if_none` 의 결과를 반환합니다.
    pub fn get_some_or_else(self, if_none: impl FnOnce() -> S) -> S {
        self.get_or_else(if_none)
    }

    pub fn as_ref(&self) -> Optional<&S> {
        match self {
            Optional::None => Optional::None,
            Optional::Some(value) => Optional::Some(value),
        }
    }

    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Optional<T> {
        match self {
            Optional::None => Optional::None,
            Optional::Some(value) => Optional::Some(f(value)),
        }
    }

    pub fn and_then<T>(self, f: impl FnOnce(S) -> Optional<T>) -> Optional<T> {
        match self {
            Optional::None => Optional::None,
            Optional::Some(value) => f(value),
        }
    }

    /// 비어 있으면 `if_none` 이 만든 실패를 left 로 갖는 `Either` 로 변환합니다.
    pub fn ok_or_else<L>(self, if_none: impl FnOnce() -> L) -> Either<L, S> {
        match self {
            Optional::None => Either::left(if_none()),
            Optional::Some(value) => Either::right(value),
        }
    }

    pub fn into_option(self) -> Option<S> {
        match self {
            Optional::None => None,
            Optional::Some(value) => Some(value),
        }
    }
}

impl<S> Default for Optional<S> {
    fn default() -> Self {
        Optional::None
    }
}

impl<S> From<Option<S>> for Optional<S> {
    fn from(value: Option<S>) -> Self {
        match value {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }
}

impl<S> From<Optional<S>> for Option<S> {
    fn from(value: Optional<S>) -> Self {
        value.into_option()
    }
}
