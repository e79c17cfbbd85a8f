// Rust guideline compliant 2026-10-13

//! Ticketview CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod menu;
pub mod output;
pub mod prompt;
pub mod terminal;

pub use menu::MenuDriver;
pub use output::{create_formatter, OutputFormatter};
pub use prompt::{prompt_subdomain, resolve_base_url, PromptCredentials};
pub use terminal::should_use_color;
