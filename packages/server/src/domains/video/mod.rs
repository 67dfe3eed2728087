// Video domain: resolve direct media URLs through the extractor
pub mod actions;
pub mod errors;
pub mod models;

pub use actions::*;
pub use errors::VideoError;
pub use models::*;
