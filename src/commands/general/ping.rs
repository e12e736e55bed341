use poise::{CreateReply, serenity_prelude as serenity};
use std::time::Duration;
use tracing::debug;

use crate::{CommandResult, Context};

/// Check the bot's latency
#[poise::command(slash_command, category = "General")]
pub async fn ping(ctx: Context<'_>) -> CommandResult {
    let latency = get_shard_latency(&ctx).await.unwrap_or_default();
    debug!("Gateway latency for {} is {:?}", ctx.author().name, latency);

    let reply = CreateReply::default()
        .content(format_latency(latency))
        .ephemeral(true);

    ctx.send(reply).await?;

    Ok(())
}

/// Formats a latency as whole milliseconds, rounded to the nearest one.
pub fn format_latency(latency: Duration) -> String {
    let millis = (latency.as_secs_f64() * 1000.0).round() as u64;
    format!("Pong! {millis}ms")
}

async fn get_shard_latency(ctx: &Context<'_>) -> Option<Duration> {
    let shard_manager = ctx.framework().shard_manager();
    let runners = shard_manager.runners.lock().await;

    // Latency is measured per shard runner; use the one this command arrived on.
    let runner = runners.get(&serenity::ShardId(ctx.serenity_context().shard_id.0))?;

    runner.latency
}
