//! This module aggregates all the command modules for the bot.

/// General purpose commands (e.g., ping).
pub mod general;
/// Commands answered by the language model (roadmap, learn, code).
pub mod learning;
