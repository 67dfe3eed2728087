//! Core trait abstractions for the media extractor library.

pub mod extractor;
