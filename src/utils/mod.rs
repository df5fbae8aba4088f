//! Shared helpers: token generation, URL normalization, color validation.

pub mod hex_color;
pub mod token;
pub mod url_normalizer;
