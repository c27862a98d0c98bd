//! 계정 서비스 구현
//!
//! 회원가입, 로그인, 비밀번호 재설정을 담당합니다.
//!
//! ## 비밀번호 재설정 흐름
//!
//! ```text
//! PUT /api/forgot-password {email}
//!   → 재설정 토큰 발급 (JWT_RESET_PASSWORD_SECRET, 기본 10분)
//!   → users.resetPasswordLink 에 저장
//!   → CLIENT_URL/auth/password/reset/{token} 링크를 ResetLinkSender에 전달
//!     (기본 구현은 토큰을 가리고 로그만 남김, 메일 발송은 외부)
//!
//! PUT /api/reset-password {resetPasswordLink, newPassword}
//!   → 토큰 서명/만료 검증
//!   → 같은 링크를 가진 사용자 조회
//!   → 새 해시 저장 + 링크 비움 (같은 링크 재사용 불가)
//! ```

use std::sync::Arc;
use bcrypt::{hash, verify};
use once_cell::sync::OnceCell;
use crate::{
    config::{CorsConfig, PasswordConfig},
    core::errors::{AppError, ErrorContext},
    core::registry::ServiceLocator,
    domain::dto::users::request::{ForgotPasswordRequest, ResetPasswordRequest, SigninRequest, SignupRequest},
    domain::dto::validation::ValidatedRequest,
    domain::entities::users::{user::User, user_profile::UserProfile},
    repositories::{
        profiles::ProfileRepository,
        store::{ProfileStore, UserStore},
        users::UserRepository,
    },
    services::auth::token_service::TokenService,
    services::users::reset_link::{LoggingResetLinkSender, ResetLinkSender},
};

pub const INVALID_CREDENTIALS: &str = "Email or password is incorrect";
pub const UNKNOWN_EMAIL: &str = "User with that email does not exist";
pub const INVALID_RESET_LINK: &str = "Invalid reset link";
pub const SIGNUP_SUCCESS: &str = "Signup success! Please signin.";
pub const RESET_PASSWORD_SUCCESS: &str = "Great! Now you can login with your new password";

static USER_SERVICE_INSTANCE: OnceCell<Arc<UserService>> = OnceCell::new();

pub struct UserService {
    users: Arc<dyn UserStore>,
    profiles: Arc<dyn ProfileStore>,
    tokens: Arc<TokenService>,
    reset_links: Arc<dyn ResetLinkSender>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn instance() -> Arc<Self> {
        USER_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::from_registry()))
            .clone()
    }

    pub fn install(service: Arc<Self>) -> Arc<Self> {
        USER_SERVICE_INSTANCE.get_or_init(|| service).clone()
    }

    pub fn new(
        users: Arc<dyn UserStore>,
        profiles: Arc<dyn ProfileStore>,
        tokens: Arc<TokenService>,
        reset_links: Arc<dyn ResetLinkSender>,
        bcrypt_cost: u32,
    ) -> Self {
        Self { users, profiles, tokens, reset_links, bcrypt_cost }
    }

    fn from_registry() -> Self {
        Self::new(
            ServiceLocator::get::<UserRepository>(),
            ServiceLocator::get::<ProfileRepository>(),
            TokenService::instance(),
            Arc::new(LoggingResetLinkSender),
            PasswordConfig::bcrypt_cost(),
        )
    }

    /// 사용자와 프로필을 함께 생성합니다.
    pub async fn signup(&self, request: SignupRequest) -> Result<User, AppError> {
        request.check()?;
        let (Some(name), Some(email), Some(password)) = (request.name, request.email, request.password) else {
            return Err(AppError::ValidationError("\"name\" is required".to_string()));
        };

        let password_hash = hash(&password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;

        let user = self.users.insert_user(User::new(name.clone(), email, password_hash)).await?;
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        self.profiles.insert_profile(UserProfile::new(user_id, name)).await?;

        log::info!("👤 회원가입: {} ({})", user.email, user_id);
        Ok(user)
    }

    /// 로그인 토큰과 사용자를 반환합니다.
    ///
    /// 이메일이 없거나 비밀번호가 틀리면 같은 메시지로 실패합니다.
    pub async fn signin(&self, request: SigninRequest) -> Result<(String, User), AppError> {
        request.check()?;
        let (Some(email), Some(password)) = (request.email, request.password) else {
            return Err(AppError::ValidationError("\"email\" is required".to_string()));
        };

        let Some(user) = self.users.find_user_by_email(&email).await? else {
            log::warn!("⚠️ 로그인 실패 (없는 이메일): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        let is_valid = verify(&password, &user.password_hash).context("비밀번호 검증 실패")?;

        if !is_valid {
            log::warn!("⚠️ 로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.generate_access_token(&user)?;
        log::info!("🔑 로그인: {}", user.email);

        Ok((token, user))
    }

    /// 재설정 토큰을 저장하고, 링크를 [`ResetLinkSender`]에 넘깁니다.
    pub async fn request_password_reset(&self, request: ForgotPasswordRequest) -> Result<(), AppError> {
        request.check()?;
        let Some(email) = request.email else {
            return Err(AppError::ValidationError("\"email\" is required".to_string()));
        };

        let user = self.users
            .find_user_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(UNKNOWN_EMAIL.to_string()))?;
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let token = self.tokens.generate_reset_token(&user)?;
        self.users.set_reset_link(&user_id, &token).await?;

        let link = CorsConfig::reset_password_url(&token);
        self.reset_links.send(&user.email, &link).await?;

        log::info!("📧 비밀번호 재설정 요청: {} ({})", user.email, user_id);
        Ok(())
    }

    pub async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), AppError> {
        request.check()?;
        let (Some(link), Some(new_password)) = (request.reset_password_link, request.new_password) else {
            return Err(AppError::ValidationError("\"resetPasswordLink\" is required".to_string()));
        };

        self.tokens.verify_reset_token(&link)?;

        let user = self.users
            .find_user_by_reset_link(&link)
            .await?
            .ok_or_else(|| AppError::NotFound(INVALID_RESET_LINK.to_string()))?;
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let password_hash = hash(&new_password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;

        if !self.users.set_password(&user_id, &password_hash).await? {
            return Err(AppError::NotFound(INVALID_RESET_LINK.to_string()));
        }

        log::info!("🔒 비밀번호 재설정 완료: {}", user.email);
        Ok(())
    }
}

fn user_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(UserService::instance())
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "user_service",
        constructor: user_service_constructor,
    }
}
