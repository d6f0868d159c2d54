//! StorySmith Engine library.
//!
//! Turns a character description into a story via a hosted language model.
//!
//! ## Structure
//!
//! - `use_cases/` - Story generation orchestration
//! - `infrastructure/` - Config, logging, the provider port and its Groq adapter
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod prompt_templates;
pub mod use_cases;

pub use app::App;
