//! Rollcall Engine library.
//!
//! ## Structure
//!
//! - `infrastructure/` - `rand`-backed random sources and environment configuration
//! - `use_cases/` - rolling dice and comparing starships
//! - `app` - Application composition and the demo sequence

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::{App, DemoReport};
pub use infrastructure::{ConfigError, EngineConfig, GeneratorKind};
