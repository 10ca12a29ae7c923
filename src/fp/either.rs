//! # Either - 두 값 중 정확히 하나를 담는 컨테이너
//!
//! 성공/실패를 예외 없이 표현하기 위한 합 타입입니다.
//! 관례적으로 `Left`에는 실패([`Failure`](crate::domain::failure::Failure)),
//! `Right`에는 성공 값을 담습니다.
//!
//! 열거형이므로 "양쪽 모두 비어 있음" 이나 "양쪽 모두 채워짐" 상태는
//! 타입 수준에서 표현할 수 없습니다. 외부에서 두 개의 선택적 슬롯을 받아
//! 조립해야 하는 경우에만 [`Either::from_parts`] 가 런타임 검증을 수행합니다.
//!
//! ## 소비 방법
//!
//! | 메서드 | 성격 | 반대쪽 값일 때 |
//! |--------|------|----------------|
//! | [`fold`](Either::fold) | 전체 함수 | 해당 핸들러 호출 |
//! | [`get_or_else`](Either::get_or_else) | 전체 함수 | 폴백 값 계산 |
//! | [`get_left`](Either::get_left) / [`get_right`](Either::get_right) | 부분 함수 | `CoreError::IllegalAccess` |
//! | [`get_left_or_else`](Either::get_left_or_else) / [`get_right_or_else`](Either::get_right_or_else) | 전체 함수 | 폴백 핸들러 호출 |
//!
//! ```rust,ignore
//! use app_foundation::fp::Either;
//! use app_foundation::domain::failure::{Failure, SimpleFailure};
//!
//! let result: Either<SimpleFailure, u32> = Either::left(SimpleFailure::new("not_found"));
//! let message = result.fold(|f| f.message_locale_key().to_string(), |_| "ok".to_string());
//! assert_eq!(message, "not_found");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};
use crate::fp::optional::Optional;

/// 정확히 하나의 left 값 또는 right 값
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// left 값으로 생성합니다.
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// right 값으로 생성합니다.
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// 두 개의 선택적 슬롯에서 `Either` 를 조립합니다.
    ///
    /// # Errors
    ///
    /// 두 슬롯이 모두 비었거나 모두 채워진 경우 `CoreError::ConstructionInvariant`
    pub fn from_parts(left: Option<L>, right: Option<R>) -> CoreResult<Self> {
        match (left, right) {
            (Some(l), None) => Ok(Either::Left(l)),
            (None, Some(r)) => Ok(Either::Right(r)),
            (None, None) => Err(CoreError::ConstructionInvariant(
                "Either must be constructed with a left value or a right value, got neither".to_string(),
            )),
            (Some(_), Some(_)) => Err(CoreError::ConstructionInvariant(
                "Either must be constructed with a left value or a right value, not both".to_string(),
            )),
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// 채워진 쪽의 핸들러 하나만 호출하여 결과를 반환합니다.
    pub fn fold<T>(self, if_left: impl FnOnce(L) -> T, if_right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(l) => if_left(l),
            Either::Right(r) => if_right(r),
        }
    }

    /// right 값을 반환하거나, left 값으로부터 폴백을 계산합니다.
    pub fn get_or_else(self, if_left: impl FnOnce(L) -> R) -> R {
        match self {
            Either::Left(l) => if_left(l),
            Either::Right(r) => r,
        }
    }

    /// left 값을 꺼냅니다.
    ///
    /// 값이 left 라고 확신할 수 있을 때만 사용하세요.
    ///
    /// # Errors
    ///
    /// 값이 right 인 경우 `CoreError::IllegalAccess`
    pub fn get_left(self) -> CoreResult<L> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(CoreError::IllegalAccess(
                "get_left called on a right value without a fallback".to_string(),
            )),
        }
    }

    /// left 값을 꺼내거나, right 값이면 `if_right` 의 결과를 반환합니다.
    pub fn get_left_or_else(self, if_right: impl FnOnce(R) -> L) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(r) => if_right(r),
        }
    }

    /// right 값을 꺼냅니다.
    ///
    /// # Errors
    ///
    /// 값이 left 인 경우 `CoreError::IllegalAccess`
    pub fn get_right(self) -> CoreResult<R> {
        match self {
            Either::Right(r) => Ok(r),
            Either::Left(_) => Err(CoreError::IllegalAccess(
                "get_right called on a left value without a fallback".to_string(),
            )),
        }
    }

    /// right 값을 꺼내거나, left 값이면 `if_left` 의 결과를 반환합니다.
    pub fn get_right_or_else(self, if_left: impl FnOnce(L) -> R) -> R {
        self.get_or_else(if_left)
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// right 값을 변환합니다. left 값은 그대로 전달됩니다.
    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// left 값을 변환합니다. 실패 타입을 상위 계층 타입으로 감쌀 때 사용합니다.
    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// right 값에 대해 다음 단계를 연결합니다. 첫 left 에서 중단됩니다.
    pub fn and_then<T>(self, f: impl FnOnce(R) -> Either<L, T>) -> Either<L, T> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// left 값을 `Optional` 로 투영합니다.
    pub fn left_value(self) -> Optional<L> {
        match self {
            Either::Left(l) => Optional::some(l),
            Either::Right(_) => Optional::none(),
        }
    }

    /// right 값을 `Optional` 로 투영합니다.
    pub fn right_value(self) -> Optional<R> {
        match self {
            Either::Left(_) => Optional::none(),
            Either::Right(r) => Optional::some(r),
        }
    }

    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<T> Either<T, T> {
    /// 양쪽 타입이 같을 때 어느 쪽이든 담긴 값을 반환합니다.
    pub fn value(self) -> T {
        match self {
            Either::Left(v) | Either::Right(v) => v,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_left_accessors() {
        let value: Either<&str, i32> = Either::left("boom");

        assert!(value.is_left());
        assert!(!value.is_right());
        assert_eq!(value.get_left().unwrap(), "boom");
    }

    #[test]
    fn test_right_accessors() {
        let value: Either<&str, i32> = Either::right(42);

        assert!(value.is_right());
        assert!(!value.is_left());
        assert_eq!(value.get_right().unwrap(), 42);
    }

    #[test]
    fn test_get_right_on_left_without_fallback() {
        let value: Either<&str, i32> = Either::left("boom");

        let error = value.get_right().unwrap_err();
        assert!(matches!(error, CoreError::IllegalAccess(_)));
    }

    #[test]
    fn test_get_left_on_right_without_fallback() {
        let value: Either<&str, i32> = Either::right(7);

        let error = value.get_left().unwrap_err();
        assert!(matches!(error, CoreError::IllegalAccess(_)));
    }

    #[test]
    fn test_partial_accessors_with_fallback() {
        let left: Either<String, usize> = Either::left("four".to_string());
        assert_eq!(left.get_right_or_else(|l| l.len()), 4);

        let right: Either<String, usize> = Either::right(3);
        assert_eq!(right.get_left_or_else(|r| "x".repeat(r)), "xxx");
    }

    #[test]
    fn test_fold_invokes_exactly_one_branch() {
        let left_calls = Cell::new(0);
        let right_calls = Cell::new(0);

        let left: Either<i32, i32> = Either::left(1);
        left.fold(|_| left_calls.set(left_calls.get() + 1), |_| right_calls.set(right_calls.get() + 1));
        assert_eq!((left_calls.get(), right_calls.get()), (1, 0));

        let right: Either<i32, i32> = Either::right(1);
        right.fold(|_| left_calls.set(left_calls.get() + 1), |_| right_calls.set(right_calls.get() + 1));
        assert_eq!((left_calls.get(), right_calls.get()), (1, 1));
    }

    #[test]
    fn test_get_or_else() {
        let left: Either<&str, i32> = Either::left("missing");
        assert_eq!(left.get_or_else(|l| l.len() as i32), 7);

        let right: Either<&str, i32> = Either::right(10);
        assert_eq!(right.get_or_else(|_| panic!("fallback must not run")), 10);
    }

    #[test]
    fn test_from_parts_invariant() {
        let ok: CoreResult<Either<i32, &str>> = Either::from_parts(Some(1), None);
        assert_eq!(ok.unwrap(), Either::Left(1));

        let ok: CoreResult<Either<i32, &str>> = Either::from_parts(None, Some("r"));
        assert_eq!(ok.unwrap(), Either::Right("r"));

        let neither: CoreResult<Either<i32, &str>> = Either::from_parts(None, None);
        assert!(matches!(neither, Err(CoreError::ConstructionInvariant(_))));

        let both: CoreResult<Either<i32, &str>> = Either::from_parts(Some(1), Some("r"));
        assert!(matches!(both, Err(CoreError::ConstructionInvariant(_))));
    }

    #[test]
    fn test_chaining_stops_at_first_left() {
        let parsed: Either<String, i32> = Either::right("21")
            .and_then(|s: &str| Either::from(s.parse::<i32>().map_err(|e| e.to_string())))
            .map(|n| n * 2);
        assert_eq!(parsed, Either::Right(42));

        let failed: Either<String, i32> = Either::right("abc")
            .and_then(|s: &str| Either::from(s.parse::<i32>().map_err(|e| e.to_string())))
            .map(|n| n * 2);
        assert!(failed.is_left());
    }

    #[test]
    fn test_swap_and_projections() {
        let value: Either<&str, i32> = Either::right(5);

        assert_eq!(value.swap(), Either::Left(5));
        assert!(value.right_value().is_some());
        assert!(value.left_value().is_none());
        assert_eq!(value.as_ref().map(|n| n + 1), Either::Right(6));
    }

    #[test]
    fn test_value_of_homogeneous_either() {
        let left: Either<u8, u8> = Either::left(1);
        let right: Either<u8, u8> = Either::right(2);

        assert_eq!(left.value(), 1);
        assert_eq!(right.value(), 2);
    }

    #[test]
    fn test_result_conversion() {
        let either: Either<String, u32> = Ok::<u32, String>(3).into();
        assert_eq!(either, Either::Right(3));

        let result: Result<u32, String> = Either::<String, u32>::left("e".to_string()).into();
        assert_eq!(result, Err("e".to_string()));
    }

    #[test]
    fn test_json_shape() {
        let value: Either<String, u32> = Either::right(1);
        let json = serde_json::to_value(&value).unwrap();

        assert_eq!(json, serde_json::json!({ "Right": 1 }));
    }
}
