//! `recap render`: one review, printed to stdout.

use crate::config::Config;
use crate::error::Error;
use crate::posts::create_post_source;
use crate::service::ReviewService;

pub async fn run_render_command(config: &Config, profile: &str, json: bool) -> Result<(), Error> {
    let reviewer =
        ReviewService::new(create_post_source(&config.source)).with_timeout(config.source.timeout);
    let bundle = reviewer.review(Some(profile)).await?;

    if json {
        let out = serde_json::to_string_pretty(&bundle)
            .map_err(|e| crate::error::ReviewError::Unexpected(e.to_string()))?;
        println!("{out}");
    } else {
        println!("{}", bundle.story);
    }
    Ok(())
}
