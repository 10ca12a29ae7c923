//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 텍스트 정리 및 검증 (실패는 `Either` 로 반환)
//! - [`display_terminal`] - 부트스트랩 과정의 터미널 출력 포맷팅

pub mod string_utils;
pub mod display_terminal;
