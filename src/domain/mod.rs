//! Domain layer containing the jump list vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (session names, errors, state machines)
//! - `jumplist` - Shortcut descriptors, the bounded commit, and sync cycle phases

pub mod foundation;
pub mod jumplist;
