//! # Core Framework Module
//!
//! 애플리케이션 전반에서 사용하는 의존성 주입 컨테이너와 통합 에러 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 프로바이더
//! - **DependencyProvider**: 문자열 키 기반 서비스 로케이터
//! - **싱글톤 관리**: 즉시 싱글톤과 지연 싱글톤, 테스트용 초기화 연산
//! - **정적 레지스트리**: `inventory` 기반 컴파일 타임 등록 수집
//! - **Thread-safe**: 키별 생성은 최대 한 번만 수행
//!
//! ### [`errors`] - 통합 에러 처리
//! - **CoreError**: 레지스트리와 함수형 컨테이너의 계약 위반 에러
//! - **CoreResult**: 코어 계층 결과 타입 별칭
//!
//! ## 사용 패턴
//!
//! ### 애플리케이션 초기화
//!
//! ```rust,ignore
//! use app_foundation::config::RegistryConfig;
//! use app_foundation::core::{DependencyProvider, CoreResult};
//!
//! fn bootstrap() -> CoreResult<DependencyProvider> {
//!     let provider = DependencyProvider::with_config(RegistryConfig::from_env());
//!
//!     // 1. 이미 준비된 인프라 컴포넌트는 즉시 등록
//!     provider.register_singleton("config", AppConfig::default())?;
//!
//!     // 2. 생성 비용이 큰 컴포넌트는 지연 등록
//!     provider.register_lazy_singleton("db", || Database::connect("memory://"))?;
//!
//!     // 3. 컴파일 타임에 제출된 등록 정보 설치
//!     provider.register_collected()?;
//!
//!     Ok(provider)
//! }
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for key: user_service
//! ```
//! **해결**: 팩토리 간 의존 관계를 단방향으로 재설계
//!
//! ### 미등록 키
//! ```text
//! No instance registered under key mailer
//! ```
//! **해결**: `register_*` 호출 순서를 확인하거나 `inventory::submit!` 등록 여부 확인

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
