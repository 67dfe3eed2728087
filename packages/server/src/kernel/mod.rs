//! Kernel module - server infrastructure and dependencies.

pub mod credentials;
pub mod deps;

pub use credentials::CredentialFile;
pub use deps::ServerDeps;
