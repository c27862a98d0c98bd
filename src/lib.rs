//! 게시글 서비스 백엔드
//!
//! 게시글/댓글 REST API와 그 작성자 계정(회원가입, 로그인, 비밀번호 재설정,
//! 프로필)을 제공하는 actix-web 서비스입니다.
//!
//! # Features
//!
//! - **게시글**: 조회, 작성, 수정, 삭제 (작성자 본인만 수정/삭제)
//! - **댓글**: 게시글에 내장된 댓글 작성/삭제
//! - **작성자 치환**: `postedBy` 프로필 id를 프로필 문서로 채워 응답
//! - **JWT 인증**: HS256 Bearer 토큰
//! - **MongoDB**: 기본 저장소, `STORAGE_BACKEND=memory`로 메모리 저장소 사용 가능
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 소유권 확인, 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Store traits   │ ← PostStore / UserStore / ProfileStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB│Memory  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use post_service_backend::services::posts::PostService;
//!
//! let post_service = PostService::instance();
//! let post = post_service.create(&caller, request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
