//! Completion module
//!
//! This module provides:
//! - `client`: the `Client` that sends prompts to `/complete`
//! - `types`: request and response bodies

mod client;
mod types;

pub use client::Client;
pub use types::{CompletionResponse, PromptRequest};
