pub mod patterns;
pub mod wire_format;
