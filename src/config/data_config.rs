//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 저장소 백엔드, 서버 바인딩, 비밀번호 해싱 비용을 관리합니다.

use std::env;

/// 실행 환경
///
/// `ENVIRONMENT`를 우선 읽고, 없으면 `NODE_ENV`를 읽습니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_str(&raw)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// 문서 저장소 백엔드
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// MongoDB (`MONGODB_URI`, `DATABASE_NAME`)
    Mongo,
    /// 프로세스 메모리 (재시작 시 데이터 소실, 로컬 개발용)
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Mongo => "mongodb",
            StorageBackend::Memory => "memory",
        }
    }
}

pub struct DataConfig;

impl DataConfig {
    /// `STORAGE_BACKEND` = `mongo` (기본값) | `memory`
    pub fn storage_backend() -> StorageBackend {
        Self::storage_backend_from(&env::var("STORAGE_BACKEND").unwrap_or_default())
    }

    pub fn storage_backend_from(raw: &str) -> StorageBackend {
        match raw.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "post_service_dev".to_string())
    }
}

pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST`가 4-15 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(DataConfig::storage_backend_from("memory"), StorageBackend::Memory);
        assert_eq!(DataConfig::storage_backend_from(" In-Memory "), StorageBackend::Memory);
        assert_eq!(DataConfig::storage_backend_from("mongo"), StorageBackend::Mongo);
        assert_eq!(DataConfig::storage_backend_from(""), StorageBackend::Mongo);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 5000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}
