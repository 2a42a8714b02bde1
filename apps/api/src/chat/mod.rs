//! Chat relay: the assistant persona in front of a hosted LLM.
//!
//! All calls to the LLM provider go through `ChatClient`; handlers only build
//! the conversation history and persist the user's API key.

pub mod client;
pub mod handlers;
pub mod prompts;

pub use client::{ChatClient, ChatError, ChatMessage, ChatRole};
