//! Jumplist Sync - recent sessions on the taskbar jump list
//!
//! The platform jump list is write-only and replace-only, so the authoritative
//! list of recent sessions lives in a separate store and the visible list is
//! always rebuilt from it in one atomic replace.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
