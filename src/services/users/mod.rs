pub mod reset_link;
pub mod user_service;

pub use reset_link::{LoggingResetLinkSender, ResetLinkSender};
pub use user_service::UserService;
