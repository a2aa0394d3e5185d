//! Claude CLI - send prompts to the completion API from the terminal
//!
//! Usage:
//!     claude [OPTIONS] [PROMPT]
//!
//! Environment Variables:
//!     CLAUDE_API_KEY: Bearer token for the API (required)
//!     CLAUDE_BASE_URL: API root the /complete path is appended to
//!     CLAUDE_TIMEOUT: Request timeout in seconds (default: none)
//!     RUST_LOG: Log filter, overrides --verbose

use anyhow::{Context, Result};
use claude_client::{Client, ClientOption, DEFAULT_BASE_URL};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Claude - send a prompt, print the completion
#[derive(Parser, Debug)]
#[command(name = "claude")]
#[command(about = "Send prompts to the Claude completion API")]
#[command(after_help = r#"Examples:
    # One-shot prompt
    claude "Write a haiku about borrow checking"

    # Point at a local server
    claude --base-url http://localhost:9999 "ping"

    # Interactive mode
    claude
"#)]
struct Cli {
    /// API key sent as a bearer token
    #[arg(long, env = "CLAUDE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// API base URL
    #[arg(long, env = "CLAUDE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "CLAUDE_TIMEOUT", value_name = "SECS")]
    timeout: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Prompt to send (interactive mode if not provided)
    prompt: Option<String>,
}

impl Cli {
    /// Translate arguments into client options
    fn client_options(&self) -> Result<Vec<ClientOption>> {
        let mut options = vec![ClientOption::BaseUrl(self.base_url.clone())];

        if let Some(secs) = self.timeout {
            let http_client = reqwest::Client::builder()
                .timeout(Duration::from_secs(secs))
                .build()
                .context("Failed to build HTTP client")?;
            options.push(ClientOption::HttpClient(http_client));
        }

        Ok(options)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run interactive mode
async fn run_interactive_mode(client: &Client) -> Result<()> {
    println!("Entering interactive mode. Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                debug!("stdin read failed: {}", e);
                break;
            }
        }

        let prompt = input.trim();

        if is_exit_command(prompt) {
            break;
        }

        if prompt.is_empty() {
            continue;
        }

        match client.send_prompt(prompt).await {
            Ok(completion) => println!("{}\n", completion),
            Err(e) => eprintln!("Error: {}\n", e),
        }
    }

    Ok(())
}

fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit")
        || input.eq_ignore_ascii_case("exit")
        || input.eq_ignore_ascii_case("q")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let client = Client::with_options(&args.api_key, args.client_options()?);
    debug!("Using {:?}", client.config());

    if let Some(prompt) = &args.prompt {
        let completion = client.send_prompt(prompt).await?;
        println!("{}", completion);
    } else {
        run_interactive_mode(&client).await?;
    }

    Ok(())
}
