//! # Service Registry
//!
//! 리포지토리와 서비스 싱글톤을 관리하는 전역 컨테이너입니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ inventory::submit! → RepositoryRegistration / ServiceRegistration 등록
//!    └─ inventory::collect! → 전역 레지스트리에 수집
//!
//! 2. 런타임 초기화
//!    ├─ Database 등 인프라 컴포넌트 직접 등록 (ServiceLocator::set)
//!    ├─ 리포지토리 생성 + 인덱스 초기화 (Repository::init)
//!    └─ 서비스 생성
//!
//! 3. 조회
//!    └─ ServiceLocator::get::<T>() → 캐시된 Arc<T> 반환, 없으면 등록된 생성자 호출
//! ```
//!
//! 타입 이름이 `PostRepository`이면 `post_repository`로 등록된 생성자를,
//! `PostService`이면 `post_service`로 등록된 생성자를 찾습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(Database::new().await?));
//! ServiceLocator::initialize_all().await?;
//!
//! let posts = ServiceLocator::get::<PostRepository>();
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use once_cell::sync::Lazy;
use crate::core::errors::AppError;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// MongoDB 컬렉션을 소유하는 리포지토리의 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    /// 컬렉션 인덱스 등 기동 시 필요한 준비 작업
    async fn init(&self) -> Result<(), AppError>;
}

pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
    pub initializer: fn() -> BoxFuture<'static, Result<(), AppError>>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<ServiceRegistration>() {
        let clean_name = extract_clean_name_static(registration.name);
        cache.insert(clean_name, registration);
    }

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<RepositoryRegistration>() {
        let clean_name = extract_clean_name_static(registration.name);
        cache.insert(clean_name, registration);
    }

    print_cache_initialized("Repository", cache.len());
    cache
});

fn extract_clean_name_static(name: &str) -> String {
    if let Some(stripped) = name.strip_suffix("_service") {
        stripped.to_string()
    } else if let Some(stripped) = name.strip_suffix("_repository") {
        stripped.to_string()
    } else {
        name.to_string()
    }
}

pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 등록된 인스턴스를 반환하거나, 등록된 생성자로 새로 만들어 캐시합니다.
    ///
    /// # Panics
    ///
    /// * 순환 의존성이 감지된 경우
    /// * 등록된 생성자를 찾지 못한 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        {
            let instances = LOCATOR.instances.read().unwrap();
            if let Some(instance) = instances.get(&type_id) {
                return instance.clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }
        }

        {
            let initializing = LOCATOR.initializing.read().unwrap();
            if initializing.contains(&type_id) {
                log::error!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }
        LOCATOR.initializing.write().unwrap().insert(type_id);

        // 생성자 안에서 다른 컴포넌트를 get 할 수 있으므로 instances 락을 잡지 않고 생성합니다.
        let created = Self::construct::<T>(type_name);

        LOCATOR.initializing.write().unwrap().remove(&type_id);

        let mut instances = LOCATOR.instances.write().unwrap();
        let instance = instances
            .entry(type_id)
            .or_insert_with(|| created as Arc<dyn Any + Send + Sync>)
            .clone();

        instance
            .downcast::<T>()
            .expect("Type mismatch in ServiceLocator")
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let clean_type_name = Self::extract_clean_type_name(type_name);

        let boxed_instance = if let Some(entity) = clean_type_name.strip_suffix("Repository") {
            let entity_name = entity.to_lowercase();
            match REPOSITORY_NAME_CACHE.get(&entity_name) {
                Some(registration) => (registration.constructor)(),
                None => panic!("No repository found for entity: {}", entity_name),
            }
        } else if let Some(entity) = clean_type_name.strip_suffix("Service") {
            let entity_name = entity.to_lowercase();
            match SERVICE_NAME_CACHE.get(&entity_name) {
                Some(registration) => (registration.constructor)(),
                None => panic!("No service found for entity: {}", entity_name),
            }
        } else {
            panic!("Service not found: {}. Make sure it's registered with inventory::submit! or manually registered with ServiceLocator::set()", type_name);
        };

        match boxed_instance.downcast::<Arc<T>>() {
            Ok(arc_instance) => *arc_instance,
            Err(_) => panic!("Type mismatch for component: {}", type_name),
        }
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리(인덱스 포함)와 서비스를 생성합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                (registration.initializer)().await?;
                print_sub_task(registration.name, "✓ Created (indexes ready)");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
