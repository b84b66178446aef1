//! # Language-model client
//!
//! Client for the OpenAI chat-completions API, used by the weather report
//! pipeline to extract city names and compose reports.
//!
//! ## Example
//!
//! ```no_run
//! use weather_report_llm::{ChatRequest, OpenAiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Key from OPENAI_API_KEY; calls fail with MissingApiKey if unset
//!     let client = OpenAiClient::from_env();
//!
//!     let request = ChatRequest::prompt("Name one city in Canada.")
//!         .with_temperature(Some(0.7));
//!
//!     let text = client.complete(&request).await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod messages;
pub mod types;

// Re-export main types for convenience
pub use client::{OpenAiClient, API_KEY_ENV, DEFAULT_API_URL};
pub use error::LlmError;
pub use messages::{ChatRequest, ChatResponse, Choice, ResponseMessage, DEFAULT_MODEL};
pub use types::{FinishReason, Message, Role, Usage};
