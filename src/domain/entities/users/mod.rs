pub mod user;
pub mod user_profile;

pub use user::User;
pub use user_profile::{ProfileChanges, UserProfile};
