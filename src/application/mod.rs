// Application layer - use cases and orchestration.
// The CLI and the tests both drive the session through these entry points,
// supplying their own input and output collaborators.

pub mod console;
pub mod error;
pub mod menu;
pub mod service;

pub use console::*;
pub use error::*;
pub use menu::*;
pub use service::*;
