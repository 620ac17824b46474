use anyhow::Result;
use clap::Parser;
use ghfeed::github::{ActivityClient, EventFetcher};
use ghfeed::utils::render_event;
use ghfeed::{Cli, logging};
use ghfeed_github::GitHubClient;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = cli.settings()?;

    info!("Looking for events.");

    let http = GitHubClient::connect(
        Some(settings.api_token.clone()),
        &settings.api_base,
        settings.rate_limit_policy(),
    )
    .await?;
    let client = ActivityClient::new(http, &settings.user).with_per_page(settings.per_page);
    let mut fetcher = EventFetcher::new(client);

    let mut events = fetcher.fetch(Some(settings.from_date));
    let mut count = 0usize;
    while let Some(event) = events.next_event().await? {
        println!("{}", render_event(&event)?);
        count += 1;
    }

    info!("Events fetched: {}.", count);

    Ok(())
}
