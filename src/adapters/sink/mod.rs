//! Jump List Sink Adapters
//!
//! Reference implementations of the JumpListSink port. The shell binding
//! that drives the real taskbar lives with the host application.
//!
//! - **FileJumpListSink** - Replace-only YAML mirror of the list
//! - **InMemoryJumpListSink** - In memory with fault injection (testing/development)

mod file_jump_list_sink;
mod in_memory_jump_list_sink;
mod recorded_shortcut;

pub use file_jump_list_sink::{FileJumpListSink, JumpListSnapshot};
pub use in_memory_jump_list_sink::{InMemoryJumpListSink, SinkFaults, DEFAULT_MAX_SLOTS};
