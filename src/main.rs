use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};

use breaking_news::config::Config;
use breaking_news::data::{Article, NewsApiClient};
use breaking_news::logging::init_tracing;
use breaking_news::navigation::{bind_navigation, BackStack, Navigator, Route};
use breaking_news::store::{StateStream, Store};
use breaking_news::ui::about::{about_entries, AboutAction, AboutReducer};
use breaking_news::ui::details::{DetailsAction, DetailsArgs, DetailsReducer, DetailsState};
use breaking_news::ui::home::{HomeAction, HomeReducer, HomeState};

#[derive(Parser, Debug)]
#[command(name = "breaking-news", version, about = "Top headlines in your terminal")]
struct Cli {
    /// Path to config file (default: ~/.config/breaking-news/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the current top headlines
    Headlines {
        /// Two-letter country code, overrides the config file
        #[arg(long)]
        country: Option<String>,

        /// Open the N-th article (1-based) after listing
        #[arg(long, value_name = "N")]
        open: Option<usize>,
    },
    /// Show platform information
    About,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?
    .with_env_overrides();

    let navigator = Arc::new(BackStack::new());
    match cli.command {
        Command::Headlines { country, open } => headlines(config, country, open, navigator).await,
        Command::About => about(navigator).await,
    }
}

async fn headlines(
    mut config: Config,
    country: Option<String>,
    open: Option<usize>,
    navigator: Arc<BackStack>,
) -> anyhow::Result<()> {
    if let Some(country) = country {
        config.api.country = country.to_lowercase();
        config.validate()?;
    }

    let client = NewsApiClient::new(config.api.clone())?;
    let mut home = Store::mount(HomeReducer::new(Arc::new(client)));
    let binding = bind_navigation(home.handle(), navigator.clone());
    let mut states = home.observe();

    home.submit(HomeAction::RequestBreakingNews);
    let articles = tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            home.teardown();
            bail!("Interrupted");
        }
        outcome = wait_for_headlines(&mut states) => outcome?,
    };
    print_headlines(&articles);

    if let Some(index) = open {
        let article = index
            .checked_sub(1)
            .and_then(|i| articles.get(i))
            .ok_or_else(|| anyhow!("No article #{index}, {} listed", articles.len()))?;

        let mut routes = navigator.subscribe();
        home.submit(HomeAction::open_article(article));
        let args = loop {
            routes.changed().await.context("Navigation closed")?;
            if let Route::Details(args) = navigator.current() {
                break args;
            }
        };
        details(args, navigator.clone()).await?;
    }

    home.shutdown().await;
    binding.await.context("Navigation binding failed")?;
    Ok(())
}

async fn wait_for_headlines(states: &mut StateStream<HomeState>) -> anyhow::Result<Vec<Article>> {
    while let Some(state) = states.next().await {
        match state {
            HomeState::ShowData(articles) => return Ok(articles),
            HomeState::Error(reason) => bail!("Failed to load headlines: {reason}"),
            HomeState::Loading
            | HomeState::Idle
            | HomeState::NavigateToDetails(_)
            | HomeState::NavigateToAbout => {}
        }
    }
    bail!("Headlines screen closed before data arrived")
}

fn print_headlines(articles: &[Article]) {
    println!("Breaking News");
    if articles.is_empty() {
        println!("  (no headlines)");
    }
    for (i, article) in articles.iter().enumerate() {
        let title = article.title.as_deref().unwrap_or("(untitled)");
        let author = article.author.as_deref().unwrap_or("unknown");
        let published = article.published_at.as_deref().unwrap_or("");
        println!("{:>3}. {title}", i + 1);
        println!("     {author}  {published}");
    }
}

async fn details(args: DetailsArgs, navigator: Arc<BackStack>) -> anyhow::Result<()> {
    let details = Store::mount(DetailsReducer::new(args));
    let binding = bind_navigation(details.handle(), navigator.clone());
    let mut states = details.observe();

    details.submit(DetailsAction::RequestUpdateView);
    while let Some(state) = states.next().await {
        if let DetailsState::ShowArticle(article) = state {
            println!();
            if !article.url_to_image.is_empty() {
                println!("Image: {}", article.url_to_image);
            }
            println!("{}", article.description);
            break;
        }
    }

    leave_screen(&navigator, || details.submit(DetailsAction::OnBackPressed)).await?;
    details.shutdown().await;
    binding.await.context("Navigation binding failed")?;
    Ok(())
}

async fn about(navigator: Arc<BackStack>) -> anyhow::Result<()> {
    navigator.navigate(Route::About);
    let about = Store::mount(AboutReducer);
    let binding = bind_navigation(about.handle(), navigator.clone());

    println!("About");
    for entry in about_entries() {
        println!("  {:<18}{}", entry.title, entry.value);
    }

    leave_screen(&navigator, || about.submit(AboutAction::OnBackPressed)).await?;
    about.shutdown().await;
    binding.await.context("Navigation binding failed")?;
    Ok(())
}

/// Press back and wait until the navigator has popped the current route.
async fn leave_screen(
    navigator: &BackStack,
    press_back: impl FnOnce() -> bool,
) -> anyhow::Result<()> {
    let depth = navigator.depth();
    let mut routes = navigator.subscribe();
    if !press_back() {
        bail!("Screen closed before back was handled");
    }
    while navigator.depth() >= depth {
        routes.changed().await.context("Navigation closed")?;
    }
    Ok(())
}
