//! claude_client: minimal client for the Claude text-completion API
//!
//! A prompt is sent as `{"prompt": "..."}` to `{base_url}/complete` with
//! bearer authentication, and the `result` string of the JSON reply is
//! returned. There are no retries, no streaming and no conversation state.
//!
//! # Example
//!
//! ```no_run
//! use claude_client::{Client, ClientOption};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::with_options(
//!         "sk-...",
//!         [ClientOption::BaseUrl("http://localhost:9999".to_string())],
//!     );
//!
//!     match client.send_prompt("Say hello").await {
//!         Ok(completion) => println!("{}", completion),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

pub mod completion;
pub mod config;
pub mod error;

pub use completion::{Client, CompletionResponse, PromptRequest};
pub use config::{ClientConfig, ClientOption, DEFAULT_BASE_URL, DEFAULT_HTTP_CLIENT};
pub use error::{ClientError, DecodeError, Result};
