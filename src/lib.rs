//! 애플리케이션 기반 계층
//!
//! 애플리케이션 코드 전반에서 사용하는 세 가지 기반 요소를 제공합니다.
//!
//! # Features
//!
//! - **의존성 프로바이더**: 문자열 키 기반 즉시/지연 싱글톤 레지스트리
//! - **함수형 컨테이너**: 예외 없이 성공/실패를 표현하는 `Either`, 값 유무를 표현하는 `Optional`
//! - **도메인 기반 타입**: `Failure`, `ValueObject`, `Entity`, `Dto`
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │   Application Code   │ ← 서비스 등록 / 해석, 도메인 연산
//! └──────────────────────┘
//!      │            │
//!      ▼            ▼
//! ┌──────────┐ ┌──────────────────┐
//! │   core   │ │      domain      │ ← Failure, ValueObject, Entity, Dto
//! │ registry │ └──────────────────┘
//! └──────────┘          │
//!      │                ▼
//!      │       ┌──────────────────┐
//!      └─────▶ │        fp        │ ← Either, Optional
//!              └──────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use app_foundation::core::DependencyProvider;
//! use app_foundation::domain::failure::{Failure, SimpleFailure};
//! use app_foundation::fp::Either;
//!
//! let provider = DependencyProvider::new();
//! provider.register_lazy_singleton("greeting", || "hello".to_string())?;
//!
//! let greeting: Arc<String> = provider.resolve("greeting")?;
//!
//! let outcome: Either<SimpleFailure, Arc<String>> = Either::right(greeting);
//! let text = outcome.fold(|f| f.message_locale_key().to_string(), |g| g.to_string());
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod fp;
pub mod utils;
