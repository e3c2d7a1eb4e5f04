//! API 处理器

pub mod cache;
pub mod languages;
pub mod speech;
pub mod translation;

pub use cache::*;
pub use languages::*;
pub use speech::*;
pub use translation::*;
