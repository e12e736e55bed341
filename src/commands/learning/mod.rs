//! Commands answered by the language model.
//!
//! Each command only builds its [`Invocation`]; the prompt, completion and
//! reply steps are shared through [`relay`].

/// Submodule defining the `/code` command.
pub mod code;
/// Submodule defining the `/learn` command.
pub mod learn;
/// Submodule defining the `/roadmap` command.
pub mod roadmap;

use tracing::{debug, info};

use crate::utils::openrouter::{Completer, MODEL};
use crate::utils::prompts::{Invocation, RoadmapRequest};
use crate::utils::render::{Reply, render};
use crate::{CommandResult, Context};

/// Builds the prompt for `invocation`, asks `completer` once and renders the outcome.
pub async fn respond<C>(completer: &C, invocation: &Invocation) -> Reply
where
    C: Completer + ?Sized,
{
    let kind = invocation.kind();
    let prompt = invocation.prompt();
    debug!("Built {} prompt of {} characters", kind, prompt.chars().count());

    let result = completer.complete(MODEL, &prompt).await;

    render(kind, result)
}

/// Defers the interaction, then sends exactly one followup with the model's answer.
pub async fn relay(ctx: Context<'_>, invocation: Invocation) -> CommandResult {
    // The completion round-trip can outlast Discord's three second response window.
    ctx.defer().await?;

    let reply = respond(&ctx.data().completions, &invocation).await;

    info!("Sending {} reply to {}", invocation.kind(), ctx.author().name);
    ctx.send(reply.into()).await?;

    Ok(())
}
