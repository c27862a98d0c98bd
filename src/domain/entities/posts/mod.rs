pub mod post;

pub use post::{Comment, PopulatedComment, PopulatedPost, Post};
