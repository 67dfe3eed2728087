//! Data types shared between extractors and their callers.

pub mod format;
pub mod media;
pub mod video_id;
