//! # Dependency Provider - 문자열 키 기반 싱글톤 레지스트리
//!
//! 애플리케이션 시작 시 서비스를 등록하고, 이후 어디서든 키로 해석(resolve)하는
//! 서비스 로케이터입니다. 즉시 생성되는 싱글톤과 첫 해석 시점에 생성되는
//! 지연 싱글톤을 모두 지원합니다.
//!
//! ## 주요 구성 요소
//!
//! ### DependencyProvider
//! - **명시적 객체**: `DependencyProvider::new()` 로 만들어 필요한 컴포넌트에 주입
//! - **전역 인스턴스**: [`DependencyProvider::global()`] 로 프로세스 전역 프로바이더 접근
//! - **Thread-safe**: 키 맵은 `RwLock`, 엔트리별 생성은 `Mutex` 로 직렬화
//! - **순환 참조 감지**: 팩토리가 자기 키를 다시 해석하면 데드락 대신 에러 반환
//!
//! ### 정적 레지스트리
//! - **inventory 기반**: [`StaticRegistration`] 을 `inventory::submit!` 으로 컴파일 타임에 제출
//! - **일괄 설치**: [`DependencyProvider::register_collected`] 가 지연 싱글톤으로 등록
//!
//! ## 엔트리 생명주기
//!
//! ```text
//! register_singleton          register_lazy_singleton
//!   instance = Some(v)          factory = Some(f), instance = None
//!   factory  = None                     │
//!         │                             │ resolve (최초 1회 f 호출)
//!         │                             ▼
//!         │                     factory = Some(f), instance = Some(v)
//!         │                             │
//!         │                             │ reset_lazy_singleton
//!         │                             ▼
//!         │                     factory = Some(f), instance = None
//!         ▼
//!  reset_singleton(v2) → instance = Some(v2) (팩토리 유무는 변하지 않음)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use app_foundation::core::DependencyProvider;
//!
//! let provider = DependencyProvider::new();
//!
//! provider.register_singleton("config", AppConfig::load())?;
//! provider.register_lazy_singleton("db", || Database::connect("postgres://localhost"))?;
//!
//! // 최초 해석 시 팩토리가 한 번만 호출되고 이후에는 캐시된 인스턴스 반환
//! let db: Arc<Database> = provider.resolve("db")?;
//! let same: Arc<Database> = provider.resolve("db")?;
//! assert!(Arc::ptr_eq(&db, &same));
//!
//! // 테스트 격리를 위한 명시적 초기화
//! provider.reset_lazy_singleton("db")?;
//! ```
//!
//! ## 등록 규칙
//!
//! 등록은 **한 번만** 가능합니다. 같은 키로 다시 등록하면 조용히 덮어쓰지 않고
//! `CoreError::DuplicateKey` 를 반환하여 중복 등록 버그를 조기에 드러냅니다.
//! 값 교체가 필요한 경우(주로 테스트) `reset_singleton` / `reset_lazy_singleton` 을 사용합니다.

use std::any::{Any, type_name};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use once_cell::sync::Lazy;

use crate::config::RegistryConfig;
use crate::core::errors::{CoreError, CoreResult};
use crate::fp::optional::Optional;

type Instance = Arc<dyn Any + Send + Sync>;
type Factory = Arc<dyn Fn() -> Instance + Send + Sync>;

/// 정적 등록 정보
///
/// `inventory` 크레이트를 통해 컴파일 타임에 수집되며,
/// [`DependencyProvider::register_collected`] 호출 시 지연 싱글톤으로 설치됩니다.
///
/// ```rust,ignore
/// fn build_mailer() -> Box<dyn Any + Send + Sync> {
///     Box::new(Mailer::default())
/// }
///
/// inventory::submit! {
///     StaticRegistration { key: "mailer", constructor: build_mailer }
/// }
/// ```
pub struct StaticRegistration {
    /// 레지스트리 키
    pub key: &'static str,
    /// 인스턴스 생성 함수 (지연 초기화에 사용)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(StaticRegistration);

/// 즉시 생성된 싱글톤 등록 요청 (`register_singletons` 일괄 등록용)
pub struct SingletonRegistration {
    key: String,
    instance: Instance,
    type_name: &'static str,
}

impl SingletonRegistration {
    pub fn new<T: Any + Send + Sync>(key: impl Into<String>, instance: T) -> Self {
        Self {
            key: key.into(),
            instance: Arc::new(instance),
            type_name: type_name::<T>(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// 지연 싱글톤 등록 요청 (`register_lazy_singletons` 일괄 등록용)
pub struct LazySingletonRegistration {
    key: String,
    factory: Factory,
    type_name: &'static str,
}

impl LazySingletonRegistration {
    pub fn new<T, F>(key: impl Into<String>, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            factory: Arc::new(move || Arc::new(factory()) as Instance),
            type_name: type_name::<T>(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// 레지스트리 통계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryStats {
    /// 등록된 전체 키 수
    pub total: usize,
    /// 팩토리를 가진 (지연 등록된) 키 수
    pub lazy: usize,
    /// 현재 인스턴스가 생성되어 있는 키 수
    pub materialized: usize,
}

/// 하나의 키에 대한 레지스트리 엔트리
///
/// 등록 이후에는 `factory` 와 `instance` 중 최소 하나가 항상 존재합니다.
struct RegistryEntry {
    factory: Option<Factory>,
    instance: Mutex<Option<Instance>>,
}

impl RegistryEntry {
    fn eager(instance: Instance) -> Self {
        Self {
            factory: None,
            instance: Mutex::new(Some(instance)),
        }
    }

    fn lazy(factory: Factory) -> Self {
        Self {
            factory: Some(factory),
            instance: Mutex::new(None),
        }
    }

    /// 팩토리 패닉으로 락이 오염되어도 슬롯 상태는 항상 일관적이므로 내부 값을 그대로 사용
    fn slot(&self) -> MutexGuard<'_, Option<Instance>> {
        self.instance.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 현재 스레드가 이 엔트리를 생성하는 중이라면 (팩토리 내부 호출) 락을 잡지 않고 `false`
    fn is_materialized(entry: &Arc<Self>) -> bool {
        if ResolutionGuard::is_active(entry) {
            return false;
        }
        entry.slot().is_some()
    }
}

thread_local! {
    /// 현재 스레드에서 생성 중인 엔트리 주소 목록 (순환 참조 감지용)
    static RESOLUTION_STACK: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// 엔트리 해석 구간을 표시하는 가드. drop 시 스택에서 제거됩니다.
struct ResolutionGuard {
    entry_id: usize,
}

impl ResolutionGuard {
    fn enter(entry: &Arc<RegistryEntry>, key: &str) -> CoreResult<Self> {
        let entry_id = Arc::as_ptr(entry) as usize;

        RESOLUTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.contains(&entry_id) {
                warn!("❌ Circular dependency detected for key: {}", key);
                return Err(CoreError::CircularDependency(key.to_string()));
            }
            stack.push(entry_id);
            Ok(Self { entry_id })
        })
    }

    fn is_active(entry: &Arc<RegistryEntry>) -> bool {
        let entry_id = Arc::as_ptr(entry) as usize;
        RESOLUTION_STACK.with(|stack| stack.borrow().contains(&entry_id))
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLUTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|id| *id == self.entry_id) {
                stack.remove(pos);
            }
        });
    }
}

/// 문자열 키 기반 싱글톤 의존성 컨테이너
///
/// 모든 엔트리를 독점 소유하며, 호출자에게는 해석된 값(`Arc<T>`)만 전달합니다.
///
/// # 동시성
///
/// - 등록/초기화 연산은 키 맵의 쓰기 락 안에서 검사와 삽입을 함께 수행
/// - 지연 생성은 엔트리별 `Mutex` 로 직렬화되어 동시 첫 접근에서도 팩토리는 한 번만 호출
/// - 팩토리 실행 중에는 키 맵 락을 잡지 않으므로 팩토리 안에서 다른 키를 해석할 수 있음
pub struct DependencyProvider {
    name: String,
    trace_resolutions: bool,
    registry: RwLock<HashMap<String, Arc<RegistryEntry>>>,
}

/// 전역 의존성 프로바이더
///
/// 첫 접근 시 환경 변수 설정으로 생성되며 프로세스 종료까지 유지됩니다.
static GLOBAL_PROVIDER: Lazy<DependencyProvider> =
    Lazy::new(|| DependencyProvider::with_config(RegistryConfig::from_env()));

impl DependencyProvider {
    /// 기본 설정으로 비어 있는 프로바이더를 생성합니다.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        debug!(
            "Creating dependency provider '{}' (environment: {}, trace: {})",
            config.name,
            config.environment.as_str(),
            config.trace_resolutions
        );

        Self {
            name: config.name,
            trace_resolutions: config.trace_resolutions,
            registry: RwLock::new(HashMap::new()),
        }
    }

    /// 프로세스 전역 프로바이더를 반환합니다.
    ///
    /// 가능하면 명시적으로 생성한 프로바이더를 주입하여 사용하고,
    /// 주입 경로가 없는 진입점에서만 전역 인스턴스를 사용하세요.
    pub fn global() -> &'static DependencyProvider {
        &GLOBAL_PROVIDER
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 인스턴스를 즉시 싱글톤으로 등록합니다.
    ///
    /// 클로저나 함수 포인터를 값으로 등록하면 팩토리를 잘못 등록한 것일 가능성이 높으므로
    /// 경고 로그를 남기지만 등록은 계속 진행합니다. 팩토리는
    /// [`register_lazy_singleton`](Self::register_lazy_singleton) 으로 등록하세요.
    ///
    /// 감지는 타입 이름 기반입니다. 이름 있는 함수 아이템(`register_singleton("db", make_db)`)은
    /// 타입 이름이 경로뿐이라 경고 없이 등록됩니다.
    ///
    /// # Errors
    ///
    /// 키가 이미 (즉시/지연 여부와 관계없이) 등록되어 있으면 `CoreError::DuplicateKey`
    pub fn register_singleton<T: Any + Send + Sync>(&self, key: impl Into<String>, instance: T) -> CoreResult<()> {
        self.install_singleton(SingletonRegistration::new(key, instance))
    }

    /// 팩토리를 지연 싱글톤으로 등록합니다. 팩토리는 이 시점에 호출되지 않습니다.
    ///
    /// # Errors
    ///
    /// 키가 이미 등록되어 있으면 `CoreError::DuplicateKey`
    pub fn register_lazy_singleton<T, F>(&self, key: impl Into<String>, factory: F) -> CoreResult<()>
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.install_lazy_singleton(LazySingletonRegistration::new(key, factory))
    }

    /// 여러 싱글톤을 순서대로 등록합니다.
    ///
    /// 원자적이지 않습니다. 첫 실패에서 중단되며, 그 이전에 성공한 등록은 유지됩니다.
    pub fn register_singletons(
        &self,
        registrations: impl IntoIterator<Item = SingletonRegistration>,
    ) -> CoreResult<()> {
        registrations
            .into_iter()
            .try_for_each(|registration| self.install_singleton(registration))
    }

    /// 여러 지연 싱글톤을 순서대로 등록합니다. 부분 적용 규칙은 `register_singletons` 와 같습니다.
    pub fn register_lazy_singletons(
        &self,
        registrations: impl IntoIterator<Item = LazySingletonRegistration>,
    ) -> CoreResult<()> {
        registrations
            .into_iter()
            .try_for_each(|registration| self.install_lazy_singleton(registration))
    }

    /// `inventory` 로 제출된 모든 [`StaticRegistration`] 을 지연 싱글톤으로 등록합니다.
    ///
    /// # Returns
    ///
    /// 등록된 엔트리 수
    pub fn register_collected(&self) -> CoreResult<usize> {
        let mut count = 0;

        for registration in inventory::iter::<StaticRegistration>() {
            let constructor = registration.constructor;
            let factory: Factory = Arc::new(move || Instance::from(constructor()));
            self.insert_entry(registration.key.to_string(), RegistryEntry::lazy(factory))?;
            debug!("📦 Registering collected lazy singleton: {}", registration.key);
            count += 1;
        }

        info!("Provider '{}' collected {} static registrations", self.name, count);
        Ok(count)
    }

    /// 키에 해당하는 인스턴스를 해석합니다.
    ///
    /// 아직 생성되지 않은 지연 싱글톤이라면 팩토리를 정확히 한 번 호출하여 결과를 캐시하고,
    /// 이후 호출에서는 캐시된 인스턴스를 반환합니다.
    ///
    /// # Errors
    ///
    /// - `CoreError::UnknownKey` - 등록되지 않은 키
    /// - `CoreError::MissingFactory` - 인스턴스도 팩토리도 없는 엔트리
    /// - `CoreError::TypeMismatch` - 저장된 값이 `T` 가 아님
    /// - `CoreError::CircularDependency` - 팩토리가 같은 스레드에서 자기 키를 다시 해석
    pub fn resolve<T: Any + Send + Sync>(&self, key: &str) -> CoreResult<Arc<T>> {
        let entry = self.entry(key)?;

        if self.trace_resolutions {
            debug!("[{}] resolving '{}' as {}", self.name, key, type_name::<T>());
        }

        let instance = self.materialize(key, &entry)?;

        instance.downcast::<T>().map_err(|_| CoreError::TypeMismatch {
            key: key.to_string(),
            expected: type_name::<T>(),
        })
    }

    /// `resolve` 와 같지만, 등록되지 않은 키는 에러 대신 `Optional::none()` 을 반환합니다.
    pub fn find<T: Any + Send + Sync>(&self, key: &str) -> CoreResult<Optional<Arc<T>>> {
        if !self.contains(key) {
            return Ok(Optional::none());
        }

        match self.resolve::<T>(key) {
            Ok(instance) => Ok(Optional::some(instance)),
            // 확인과 해석 사이에 다른 스레드가 키를 제거할 수는 없지만 방어적으로 처리
            Err(CoreError::UnknownKey(_)) => Ok(Optional::none()),
            Err(error) => Err(error),
        }
    }

    /// 등록된 엔트리의 인스턴스를 교체합니다.
    ///
    /// 엔트리가 즉시/지연 중 어느 쪽으로 등록되었는지는 변하지 않습니다.
    /// 지연 엔트리라면 이후 `reset_lazy_singleton` 으로 다시 팩토리 경로를 탈 수 있습니다.
    ///
    /// # Errors
    ///
    /// - `CoreError::UnknownKey` - 등록되지 않은 키
    /// - `CoreError::CircularDependency` - 해당 키의 팩토리 실행 중에 호출
    pub fn reset_singleton<T: Any + Send + Sync>(&self, key: &str, instance: T) -> CoreResult<()> {
        let entry = self.entry(key).inspect_err(|_| {
            warn!("Unable to reset singleton. No singleton with name {} found.", key);
        })?;
        Self::ensure_not_resolving(key, &entry)?;

        *entry.slot() = Some(Arc::new(instance));
        info!("🔁 Reset singleton: {}", key);
        Ok(())
    }

    /// 생성된 인스턴스를 제거하여 다음 해석 시 팩토리가 다시 실행되도록 합니다.
    ///
    /// # Errors
    ///
    /// - `CoreError::UnknownKey` - 등록되지 않은 키이거나 팩토리가 없는 (즉시 등록된) 엔트리
    /// - `CoreError::CircularDependency` - 해당 키의 팩토리 실행 중에 호출
    pub fn reset_lazy_singleton(&self, key: &str) -> CoreResult<()> {
        let entry = self.entry(key)?;
        Self::ensure_not_resolving(key, &entry)?;

        if entry.factory.is_none() {
            warn!("Unable to reset lazy singleton. {} was registered without a factory.", key);
            return Err(CoreError::UnknownKey(key.to_string()));
        }

        entry.slot().take();
        info!("🔁 Reset lazy singleton: {}", key);
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read_registry().contains_key(key)
    }

    /// 키가 등록되어 있고 인스턴스가 생성된 상태인지 확인합니다.
    pub fn is_materialized(&self, key: &str) -> bool {
        match self.entry(key) {
            Ok(entry) => RegistryEntry::is_materialized(&entry),
            Err(_) => false,
        }
    }

    /// 등록된 모든 키 (정렬됨)
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read_registry().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.read_registry().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_registry().is_empty()
    }

    pub fn stats(&self) -> RegistryStats {
        let entries: Vec<Arc<RegistryEntry>> = self.read_registry().values().cloned().collect();

        entries.iter().fold(
            RegistryStats {
                total: entries.len(),
                ..RegistryStats::default()
            },
            |mut stats, entry| {
                if entry.factory.is_some() {
                    stats.lazy += 1;
                }
                if RegistryEntry::is_materialized(entry) {
                    stats.materialized += 1;
                }
                stats
            },
        )
    }

    fn install_singleton(&self, registration: SingletonRegistration) -> CoreResult<()> {
        let SingletonRegistration { key, instance, type_name } = registration;

        if looks_like_factory(type_name) {
            warn!(
                "Instance of name {} is not expected to be a function in 'register_singleton'. \
                 Please make sure this is intentional.",
                key
            );
        }

        debug!("📦 Registering singleton: {} ({})", key, type_name);
        self.insert_entry(key, RegistryEntry::eager(instance))
    }

    fn install_lazy_singleton(&self, registration: LazySingletonRegistration) -> CoreResult<()> {
        let LazySingletonRegistration { key, factory, type_name } = registration;

        debug!("📦 Registering lazy singleton: {} ({})", key, type_name);
        self.insert_entry(key, RegistryEntry::lazy(factory))
    }

    fn insert_entry(&self, key: String, entry: RegistryEntry) -> CoreResult<()> {
        let mut registry = self.write_registry();

        if registry.contains_key(&key) {
            warn!("Instance with key {} has already been registered", key);
            return Err(CoreError::DuplicateKey(key));
        }

        registry.insert(key, Arc::new(entry));
        Ok(())
    }

    /// 현재 스레드가 이 엔트리를 생성 중이라면 슬롯 락을 이미 잡고 있으므로 거부합니다.
    fn ensure_not_resolving(key: &str, entry: &Arc<RegistryEntry>) -> CoreResult<()> {
        if ResolutionGuard::is_active(entry) {
            warn!("❌ Unable to reset {} while its factory is running", key);
            return Err(CoreError::CircularDependency(key.to_string()));
        }
        Ok(())
    }

    /// 키 맵 락은 엔트리를 복제하는 동안만 유지됩니다.
    fn entry(&self, key: &str) -> CoreResult<Arc<RegistryEntry>> {
        self.read_registry()
            .get(key)
            .cloned()
            .ok_or_else(|| CoreError::UnknownKey(key.to_string()))
    }

    fn materialize(&self, key: &str, entry: &Arc<RegistryEntry>) -> CoreResult<Instance> {
        let _guard = ResolutionGuard::enter(entry, key)?;
        let mut slot = entry.slot();

        if let Some(instance) = slot.as_ref() {
            return Ok(Arc::clone(instance));
        }

        let factory = entry
            .factory
            .as_ref()
            .ok_or_else(|| CoreError::MissingFactory(key.to_string()))?;

        debug!("🔧 Creating lazy singleton: {}", key);
        let instance = factory();
        *slot = Some(Arc::clone(&instance));

        Ok(instance)
    }

    fn read_registry(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<RegistryEntry>>> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_registry(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<RegistryEntry>>> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DependencyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DependencyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyProvider")
            .field("name", &self.name)
            .field("keys", &self.keys())
            .finish()
    }
}

/// 타입 이름으로 클로저/함수 포인터 여부를 추정합니다.
///
/// 이름 있는 함수 아이템(`fn make_db() {}` 를 그대로 넘긴 경우)은 경로만 남으므로 감지되지 않습니다.
fn looks_like_factory(type_name: &str) -> bool {
    type_name.contains("{{closure}}")
        || type_name.starts_with("fn(")
        || type_name.contains(" fn(")
        || type_name.contains("core::ops::function::Fn")
}
