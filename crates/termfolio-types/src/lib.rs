//! Foundation types for the termfolio terminal.
//!
//! Everything the other crates agree on lives here: the error taxonomy,
//! the result record a command hands back to the rendering surface, the
//! effect signals a result may carry, and the terminal configuration.

pub mod config;
pub mod error;
pub mod result;

pub use config::TermConfig;
pub use error::{Result, TermError};
pub use result::{CommandResult, Effect};
