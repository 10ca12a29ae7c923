//! 기반 계층 데모 애플리케이션
//!
//! 의존성 프로바이더에 서비스를 등록하고 해석한 뒤,
//! 도메인 연산 결과를 `Either` / `Optional` 로 소비하는 흐름을 보여줍니다.

use std::any::Any;
use std::collections::HashMap;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use serde::{Deserialize, Serialize};

use app_foundation::config::RegistryConfig;
use app_foundation::core::registry::{
    DependencyProvider, LazySingletonRegistration, SingletonRegistration, StaticRegistration,
};
use app_foundation::core::errors::CoreResult;
use app_foundation::domain::dto::Dto;
use app_foundation::domain::entities::Entity;
use app_foundation::domain::failure::{Failure, SimpleFailure};
use app_foundation::domain::value_objects::RequiredText;
use app_foundation::fp::{Either, Optional};
use app_foundation::utils::display_terminal::{print_boxed_title, print_registry_summary, print_step_start, print_sub_task};

/// 빌드 정보 (컴파일 타임 등록)
#[derive(Debug)]
struct BuildInfo {
    version: &'static str,
}

fn build_info() -> Box<dyn Any + Send + Sync> {
    Box::new(BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
    })
}

inventory::submit! {
    StaticRegistration { key: "build_info", constructor: build_info }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: RequiredText,
}

impl Entity for User {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Dto for User {}

/// 메모리 기반 사용자 디렉터리
struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    fn seeded() -> Self {
        info!("📡 사용자 디렉터리 초기화 중...");

        let users = [("1", "Alice"), ("2", "Bob")]
            .into_iter()
            .filter_map(|(id, name)| {
                RequiredText::create(name, 50)
                    .map(|name| User {
                        id: Some(id.to_string()),
                        name,
                    })
                    .right_value()
                    .map(|user| (id.to_string(), user))
                    .into_option()
            })
            .collect();

        Self { users }
    }

    fn find(&self, id: &str) -> Optional<User> {
        self.users.get(id).cloned().into()
    }
}

fn main() -> CoreResult<()> {
    load_env_file();

    let config = RegistryConfig::from_env();
    env_logger::init_from_env(Env::default().default_filter_or(config.log_filter()));

    info!("🚀 기반 계층 데모 시작중... (environment: {})", config.environment.as_str());

    let provider = DependencyProvider::with_config(config);
    bootstrap(&provider)?;

    print_boxed_title("👤 USER LOOKUP");
    let directory = provider.resolve::<UserDirectory>("user_directory")?;
    let prefix = provider.resolve::<String>("greeting_prefix")?;
    for id in ["1", "2", "404"] {
        let message = lookup_user(&directory, id).fold(
            |failure| {
                report_failure(&failure);
                format!("실패 ({})", failure.message_locale_key())
            },
            |user| {
                let state = if user.is_transient() { "transient" } else { "persisted" };
                format!(
                    "{}, {}! [{}] → {}",
                    prefix,
                    user.name,
                    state,
                    user.to_json().unwrap_or_default()
                )
            },
        );
        print_sub_task(id, &message);
    }

    print_boxed_title("✏️ NAME VALIDATION");
    for raw in ["  Carol  ", "   "] {
        let outcome = RequiredText::create(raw, 50);
        let message = outcome.fold(
            |failure| format!("거부됨: {}", failure),
            |name| format!("허용됨: {}", name),
        );
        print_sub_task(raw, &message);
    }

    let build = provider.resolve::<BuildInfo>("build_info")?;
    info!("✅ 버전 {} 데모 완료", build.version);

    print_registry_summary(provider.name(), &provider.stats());
    Ok(())
}

/// 모든 서비스를 프로바이더에 등록합니다
///
/// 1. 즉시 싱글톤 (설정 값)
/// 2. 지연 싱글톤 (사용자 디렉터리)
/// 3. 컴파일 타임 등록 (빌드 정보)
fn bootstrap(provider: &DependencyProvider) -> CoreResult<()> {
    print_boxed_title("🔄 INITIALIZING PROVIDER");

    print_step_start(1, "Registering singletons");
    let singletons = vec![SingletonRegistration::new("greeting_prefix", "Hello".to_string())];
    for registration in &singletons {
        print_sub_task(registration.key(), "✓ eager");
    }
    provider.register_singletons(singletons)?;

    print_step_start(2, "Registering lazy singletons");
    let lazy_singletons = vec![LazySingletonRegistration::new("user_directory", UserDirectory::seeded)];
    for registration in &lazy_singletons {
        print_sub_task(registration.key(), "✓ lazy");
    }
    provider.register_lazy_singletons(lazy_singletons)?;

    print_step_start(3, "Installing collected registrations");
    let collected = provider.register_collected()?;
    print_sub_task("inventory", &format!("✓ {} collected", collected));

    Ok(())
}

fn lookup_user(directory: &UserDirectory, id: &str) -> Either<SimpleFailure, User> {
    directory
        .find(id)
        .ok_or_else(|| SimpleFailure::new("user.not_found"))
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전이므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("{} 파일 로드 됨 (profile: {})", file, profile),
        Err(e) => eprintln!("환경 파일 로드 생략 (profile: {}): {}", profile, e),
    }
}

fn report_failure(failure: &dyn Failure) {
    error!("❌ {}", failure);
}
