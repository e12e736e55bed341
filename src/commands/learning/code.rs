use super::*;

/// Get code examples for a specific topic
#[poise::command(slash_command, category = "Learning")]
pub async fn code(
    ctx: Context<'_>,
    #[description = "The computer science topic to show code for"] topic: String,
    #[description = "The programming language to use"] language: String,
) -> CommandResult {
    debug!(
        "Code request for '{}' in {} from user {}",
        topic,
        language,
        ctx.author().name
    );

    relay(ctx, Invocation::Code { topic, language }).await
}
