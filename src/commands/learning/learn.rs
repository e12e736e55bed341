use super::*;

/// Learn about a specific topic
#[poise::command(slash_command, category = "Learning")]
pub async fn learn(
    ctx: Context<'_>,
    #[description = "The computer science topic to explain"] topic: String,
) -> CommandResult {
    debug!("Learn request for '{}' from user {}", topic, ctx.author().name);

    relay(ctx, Invocation::Learn { topic }).await
}
