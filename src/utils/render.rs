//! Turns a completion result into the single reply sent back to Discord.

use poise::CreateReply;
use serenity::all::CreateEmbed;
use tracing::debug;

use super::openrouter::CompletionResult;
use super::prompts::CommandKind;

/// The maximum character length allowed for a single Discord message.
pub const MAX_MESSAGE_LENGTH: usize = 2000;
/// Character length of each embed section when a reply is too long to send directly.
pub const FRAGMENT_LENGTH: usize = 1500;

impl CommandKind {
    /// Title of the embed used for oversized replies.
    pub fn embed_title(self) -> &'static str {
        match self {
            CommandKind::Roadmap => "Your Learning Roadmap",
            CommandKind::Learn => "Topic Explanation",
            CommandKind::Code => "Code Examples",
        }
    }

    pub fn embed_description(self) -> &'static str {
        match self {
            CommandKind::Roadmap => "Here's your personalized learning roadmap:",
            CommandKind::Learn => "Here's an explanation of the topic:",
            CommandKind::Code => "Here are some code examples for the topic:",
        }
    }

    /// Message sent when no completion could be obtained.
    pub fn apology(self) -> &'static str {
        match self {
            CommandKind::Roadmap => "Sorry, I couldn't generate a roadmap. Please try again later!",
            CommandKind::Learn => "Sorry, I couldn't fetch an explanation. Please try again later!",
            CommandKind::Code => "Sorry, I couldn't fetch code examples. Please try again later!",
        }
    }
}

/// A reply ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain message content.
    Text(String),
    /// One embed with a field per fragment.
    Sections {
        title: &'static str,
        description: &'static str,
        parts: Vec<String>,
    },
}

/// Decides how a completion result is presented for `kind`.
pub fn render(kind: CommandKind, result: CompletionResult) -> Reply {
    match result {
        Ok(text) if text.chars().count() <= MAX_MESSAGE_LENGTH => Reply::Text(text),
        Ok(text) => {
            let parts: Vec<String> = split_fragments(&text, FRAGMENT_LENGTH)
                .into_iter()
                .map(str::to_owned)
                .collect();
            debug!("Splitting {} reply into {} parts", kind, parts.len());

            Reply::Sections {
                title: kind.embed_title(),
                description: kind.embed_description(),
                parts,
            }
        }
        Err(_) => Reply::Text(kind.apology().to_owned()),
    }
}

/// Splits `text` into consecutive slices of at most `size` characters.
///
/// Slices always end on a character boundary and concatenate back to `text`.
pub fn split_fragments(text: &str, size: usize) -> Vec<&str> {
    assert!(size > 0, "fragment size must be positive");

    let mut fragments = Vec::with_capacity(text.len().div_ceil(size));
    let mut iter = text.chars();
    let mut pos = 0;
    while pos < text.len() {
        let mut len = 0;
        for ch in iter.by_ref().take(size) {
            len += ch.len_utf8();
        }
        fragments.push(&text[pos..pos + len]);
        pos += len;
    }

    fragments
}

/// Builds the embed for an oversized reply, one `Part N` field per fragment.
pub fn sections_embed<S: AsRef<str>>(title: &str, description: &str, parts: &[S]) -> CreateEmbed {
    parts.iter().enumerate().fold(
        CreateEmbed::new().title(title).description(description),
        |embed, (i, part)| embed.field(format!("Part {}", i + 1), part.as_ref(), false),
    )
}

impl From<Reply> for CreateReply {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::Text(text) => CreateReply::default().content(text).ephemeral(false),
            Reply::Sections {
                title,
                description,
                parts,
            } => CreateReply::default()
                .embed(sections_embed(title, description, &parts))
                .ephemeral(false),
        }
    }
}
