//! Prompt templates for the LLM-backed commands.
//!
//! User text is interpolated verbatim; Discord's typed arguments guarantee
//! every field is present.

use std::fmt;

/// Name the model is told to introduce itself with.
pub const PERSONA: &str = "Codetionary";

/// The LLM-backed slash commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Roadmap,
    Learn,
    Code,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommandKind::Roadmap => "roadmap",
            CommandKind::Learn => "learn",
            CommandKind::Code => "code",
        })
    }
}

/// Arguments of the `/roadmap` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapRequest {
    pub name: String,
    pub career_path: String,
    pub school: String,
    pub year: String,
    pub location: String,
    pub interests: String,
}

/// One user's command call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Roadmap(RoadmapRequest),
    Learn { topic: String },
    Code { topic: String, language: String },
}

impl Invocation {
    pub fn kind(&self) -> CommandKind {
        match self {
            Invocation::Roadmap(_) => CommandKind::Roadmap,
            Invocation::Learn { .. } => CommandKind::Learn,
            Invocation::Code { .. } => CommandKind::Code,
        }
    }

    /// Builds the instruction sent to the model.
    pub fn prompt(&self) -> String {
        match self {
            Invocation::Roadmap(request) => format!(
                "Introduce yourself to the user as {PERSONA} and generate a personalized \
                 roadmap/timeline for {} who is interested in {} at {} in {}, located in {}, \
                 with interests in {}. Outline steps the user should take to achieve their \
                 goals, in bullet points, making it as personal as possible.",
                request.name,
                request.career_path,
                request.school,
                request.year,
                request.location,
                request.interests,
            ),
            Invocation::Learn { topic } => format!(
                "Introduce yourself to the user as {PERSONA} and, for the following Computer \
                 Science topic, explain it to the user in the most concise way possible, in a \
                 way that they would understand the best: {topic}."
            ),
            Invocation::Code { topic, language } => format!(
                "Introduce yourself to the user as {PERSONA} and provide code examples for the \
                 following Computer Science topic and language, being as specific and precise \
                 as possible to assist the user in learning how to code and their understanding \
                 of it: {topic} in {language}."
            ),
        }
    }
}
