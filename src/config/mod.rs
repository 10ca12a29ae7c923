//! # Configuration Module
//!
//! 환경 변수 기반의 설정값을 중앙에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`environment`] - 실행 환경(개발/테스트/스테이징/프로덕션) 감지
//! - [`registry_config`] - 의존성 프로바이더 이름, 해석 추적, 기본 로그 필터
//!
//! 모든 설정 타입은 `from_env()` 외에 `from_lookup()` 을 제공하므로
//! 프로세스 환경을 변경하지 않고도 테스트할 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use app_foundation::config::RegistryConfig;
//! use app_foundation::core::DependencyProvider;
//!
//! let config = RegistryConfig::from_env();
//! env_logger::init_from_env(env_logger::Env::default().default_filter_or(config.log_filter()));
//!
//! let provider = DependencyProvider::with_config(config);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="development"  # development, test, staging, production
//! export REGISTRY_NAME="app"
//! export REGISTRY_TRACE="true"
//! ```

pub mod environment;
pub mod registry_config;

pub use environment::*;
pub use registry_config::*;
