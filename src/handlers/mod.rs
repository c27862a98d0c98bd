//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로 변환하는 핸들러입니다. 핸들러는 요청 파싱과 응답
//! 구성만 담당하며, 검증과 소유권 확인은 서비스 계층에서 수행합니다.
//!
//! ```text
//! Client
//!   │ HTTP Request/Response
//!   ▼
//! Handlers (이 모듈)      ← Web Layer
//!   ▼
//! Services                ← 비즈니스 로직
//!   ▼
//! Repositories / Store    ← 데이터 접근
//! ```
//!
//! - **`posts`**: 게시글/댓글
//! - **`auth`**: 회원가입, 로그인, 비밀번호 재설정
//! - **`profile`**: 프로필 조회/수정
//!
//! 인증이 필요한 핸들러는 라우트 매크로의 `wrap = "AuthMiddleware::required()"`로
//! 미들웨어를 붙이고, [`CallerIdentity`](crate::domain::models::auth::caller_identity::CallerIdentity)
//! 추출자로 호출자를 받습니다.

pub mod auth;
pub mod posts;
pub mod profile;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use mongodb::bson::oid::ObjectId;
    use once_cell::sync::Lazy;
    use crate::domain::dto::users::request::{SigninRequest, SignupRequest};
    use crate::repositories::memory::MemoryStore;
    use crate::services::{install_memory_backend_with_cost, users::UserService};

    /// 핸들러 테스트가 공유하는 저장소. 싱글톤은 프로세스당 한 번만 설치됩니다.
    static TEST_STORE: Lazy<Arc<MemoryStore>> = Lazy::new(|| {
        let store = Arc::new(MemoryStore::new());
        install_memory_backend_with_cost(store.clone(), 4);
        store
    });

    pub fn install_test_services() -> Arc<MemoryStore> {
        TEST_STORE.clone()
    }

    /// 고유한 이메일로 가입 후 로그인합니다. `(user id, token)`
    pub async fn signed_up_user(name: &str) -> (String, String) {
        let email = format!("{}-{}@example.com", name, ObjectId::new().to_hex());
        let service = UserService::instance();

        service
            .signup(SignupRequest {
                name: Some(name.to_string()),
                email: Some(email.clone()),
                password: Some("secret1".to_string()),
            })
            .await
            .unwrap();

        let (token, user) = service
            .signin(SigninRequest {
                email: Some(email),
                password: Some("secret1".to_string()),
            })
            .await
            .unwrap();

        (user.id_string().unwrap(), token)
    }

    pub fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token))
    }
}
