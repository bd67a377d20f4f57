//! Application-level utilities for the Cryptnote CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Password acquisition from the environment or a prompt

mod context;
mod password;

pub use context::AppContext;
pub use password::{env_password, prompt_new_password, prompt_password};
