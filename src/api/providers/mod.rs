//! Provider implementations for external services
//!
//! Only text-generation (AI) providers are needed here.

pub mod ai;

pub use ai::AiProvider;
