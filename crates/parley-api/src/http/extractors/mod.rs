//! Request extractors whose rejections use the `{"error": ...}` shape.

pub mod json;
pub mod path;
