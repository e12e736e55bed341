//! This module aggregates the building blocks behind the LLM-backed commands.

/// Client for the OpenRouter chat-completion API.
pub mod openrouter;
/// Prompt templates for each command.
pub mod prompts;
/// Presentation of completion results as Discord replies.
pub mod render;
