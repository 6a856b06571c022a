//! Type-safe tool argument modules.
//!
//! Each struct here implements `ToolArgs` and maps Rust fields to the exact
//! flags the corresponding Python tool expects.

pub mod pip;
pub mod pyinstaller;
