use crate::{Context, Error};

/// Report whether message logging to the search backend is active.
#[poise::command(slash_command, prefix_command)]
pub async fn status(ctx: Context<'_>) -> Result<(), Error> {
    let reply = if ctx.data().connected {
        format!("✅ Logging messages to {}", ctx.data().config.search_url)
    } else {
        "⚠️ Search backend unreachable; messages are not being logged".to_string()
    };
    ctx.say(reply).await?;
    Ok(())
}
