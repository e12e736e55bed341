use super::*;

/// Generate a personalized learning roadmap based on user's career path, school, year, etc.
#[poise::command(slash_command, category = "Learning")]
pub async fn roadmap(
    ctx: Context<'_>,
    #[description = "Your name"] name: String,
    #[description = "The career path you are working towards"] career_path: String,
    #[description = "The school you attend"] school: String,
    #[description = "Your current year of study"] year: String,
    #[description = "Where you are located"] location: String,
    #[description = "Topics you are interested in"] interests: String,
) -> CommandResult {
    debug!("Roadmap request received from user {}", ctx.author().name);

    let request = RoadmapRequest {
        name,
        career_path,
        school,
        year,
        location,
        interests,
    };

    relay(ctx, Invocation::Roadmap(request)).await
}
