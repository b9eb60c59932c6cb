//! Shared helpers used across the validation strategies.

pub mod json_ext;
