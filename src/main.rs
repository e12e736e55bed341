use dotenv::dotenv;
use poise::serenity_prelude as serenity;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use codetionary::commands::{
    general::ping::*,
    learning::{code::*, learn::*, roadmap::*},
};
use codetionary::config::Config;
use codetionary::utils::openrouter::OpenRouterClient;
use codetionary::{Data, Error};

/// Presence shown under the bot's name.
const ACTIVITY: &str = "Learning Computer Science!";

#[tokio::main]
async fn main() -> Result<(), Error> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("codetionary=debug,warn")),
        )
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_target(true)
        .with_ansi(true)
        .pretty()
        .init();

    dotenv().ok();

    let config = Config::from_env()?;
    debug!(?config, "Loaded configuration");

    if config.openrouter_api_key.is_none() {
        error!("OPENROUTER_API_KEY is not set; every model-backed command will apologise");
    }

    let completions = OpenRouterClient::from_config(&config);
    let intents = serenity::GatewayIntents::non_privileged();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![ping(), roadmap(), learn(), code()],
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                ctx.set_activity(Some(serenity::ActivityData::playing(ACTIVITY)));

                match poise::builtins::register_globally(ctx, &framework.options().commands).await
                {
                    Ok(()) => info!(
                        "Registered {} slash commands",
                        framework.options().commands.len()
                    ),
                    Err(e) => error!("Failed to register slash commands: {}", e),
                }

                info!("{} is ready to learn!", ready.user.name);
                Ok(Data { completions })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await?;

    client.start().await.map_err(Into::into)
}
