//! Pure helpers with no I/O: URL extraction and identifier generation.

pub mod code_generator;
pub mod url_extractor;
