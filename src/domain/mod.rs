//! # Domain Layer Module
//!
//! 도메인 계층의 기반 타입들을 제공합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── failure        - 예상 가능한 실패 값 (Either 의 left)
//! ├── value_objects  - 검증된 값 객체 (RequiredText 등)
//! ├── entities       - 식별자를 가진 도메인 객체
//! └── dto            - 계층 경계의 JSON 데이터 전송 객체
//! ```
//!
//! ## 실패 처리 규칙
//!
//! 도메인 연산은 예상 가능한 실패를 `Either<F: Failure, T>` 로 반환합니다.
//! `CoreError` 는 잘못된 키, 잘못된 접근자 사용 등 프로그래머 계약 위반에만 사용합니다.
//!
//! ```rust,ignore
//! use app_foundation::domain::failure::{Failure, TextFieldFailure};
//! use app_foundation::domain::value_objects::RequiredText;
//!
//! let message = RequiredText::create(input, 50).fold(
//!     |failure| translate(failure.message_locale_key()),
//!     |name| format!("Hello, {}", name),
//! );
//! ```

pub mod dto;
pub mod entities;
pub mod failure;
pub mod value_objects;
