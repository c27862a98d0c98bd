pub mod caller_identity;

pub use caller_identity::CallerIdentity;
