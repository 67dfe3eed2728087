// Business domains
pub mod video;
