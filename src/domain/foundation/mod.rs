//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the jump list domain.

mod errors;
mod session_name;
mod state_machine;

pub use errors::ValidationError;
pub use session_name::SessionName;
pub use state_machine::StateMachine;
