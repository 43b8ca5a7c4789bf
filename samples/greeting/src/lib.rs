//! Greeting Sample Application
//!
//! Builds a three-step pipeline out of closures with `andthen` and runs it:
//!
//! ```text
//! square -> greet -> print_result
//! ```
//!
//! Invoked with `5`, the pipeline writes:
//!
//! ```text
//! Hello 25
//! Result: 25
//! ```
//!
//! # andthen Features Used
//!
//! - `AndThen` to attach the greeting step to `square`
//! - `try_tap` for the greeting, a pass-through step whose write can fail
//! - `TryAndThen` to stop before `print_result` when the greeting fails

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{DEFAULT_LOG_FILTER, GreetingConfig};
pub use error::GreetingError;
pub use pipeline::{build_pipeline, run, square};
