//! Configuration module for claude_client
//!
//! This module contains:
//! - `client_config`: endpoint, credential and transport settings

mod client_config;

pub use client_config::{ClientConfig, ClientOption, DEFAULT_BASE_URL, DEFAULT_HTTP_CLIENT};
