//! hdlpad library - terminal Verilog editor with inline AI completions
//!
//! This library exposes the core functionality of hdlpad for testing purposes.

pub mod app;
pub mod completion;
pub mod config;
pub mod editor;
pub mod error;
pub mod notification;
pub mod syntax_highlight;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
