//! Codetionary: a Discord bot that answers computer science questions by
//! relaying slash commands to an OpenRouter-hosted language model.

pub mod commands;
pub mod config;
pub mod utils;

use utils::openrouter::OpenRouterClient;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type CommandResult = Result<(), Error>;

/// Framework data shared by every command invocation.
pub struct Data {
    /// Client for the chat-completion endpoint.
    pub completions: OpenRouterClient,
}
