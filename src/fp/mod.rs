//! # Functional Containers
//!
//! 예외 대신 값으로 결과를 표현하기 위한 두 가지 컨테이너를 제공합니다.
//!
//! - [`Either`] - 실패(left) 또는 성공(right) 중 정확히 하나
//! - [`Optional`] - 값이 없거나 하나 있음
//!
//! 두 타입 모두 불변 값 객체이며, 페이로드가 `Send + Sync` 라면
//! 스레드 간에 자유롭게 공유할 수 있습니다.

pub mod either;
pub mod optional;

pub use either::Either;
pub use optional::Optional;
