//! `reelviewctl`: browse the catalog from the terminal.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use reelview_config::{ConfigLoad, ConfigLoader};
use reelview_core::catalog::{CatalogClient, TmdbSource};
use reelview_core::page::{PageEvent, PageView};
use reelview_core::routing::{Navigator, Route};
use reelview_model::{Category, ContentId, ImagePathResolver};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod render;
mod settings;

use cli::{BrowseArgs, Cli, Command, ImageArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,reelview_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Browse(ref args) => browse(&cli, args).await,
        Command::Image(ref args) => {
            image(args);
            Ok(())
        }
        Command::Categories => {
            categories();
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<ConfigLoad> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let load = loader.load().context("failed to load configuration")?;

    if load.config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    for warning in load.warnings.iter() {
        match &warning.hint {
            Some(hint) => warn!(
                message = %warning.message,
                hint = %hint,
                "configuration warning"
            ),
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
    Ok(load)
}

async fn browse(cli: &Cli, args: &BrowseArgs) -> Result<()> {
    let ConfigLoad { config, .. } = load_config(cli)?;

    let route = Route::parse(&args.path);
    let Some(mut page) =
        PageView::for_route(&route, settings::page_settings(&config))
    else {
        bail!("no page is served at {}", args.path);
    };

    let source = TmdbSource::new(settings::tmdb_settings(&config))
        .context("failed to build catalog client")?;
    let client = CatalogClient::new(Arc::new(source));
    page.load(&client).await;

    let mut navigator = Navigator::new(route);
    let steps = args
        .previous
        .iter()
        .map(|&slider| PageEvent::Previous(slider))
        .chain(args.next.iter().map(|&slider| PageEvent::Next(slider)));
    for step in steps {
        let slider = match step {
            PageEvent::Previous(slider) | PageEvent::Next(slider) => slider,
            _ => continue,
        };
        if page.update(step, &mut navigator) {
            page.update(PageEvent::TransitionFinished(slider), &mut navigator);
        }
    }

    if let Some(raw) = args.open {
        let id = ContentId::new(raw);
        let owner = page.sliders().iter().position(|slider| {
            slider.list().is_some_and(|list| list.find_by_id(id).is_some())
        });
        match owner {
            Some(slider) => {
                let click = PageEvent::CardClicked { slider, id };
                page.update(click, &mut navigator);
            }
            None => warn!(%id, "item is not on this page"),
        }
    }

    if args.detail {
        let current = navigator.current().clone();
        page.load_detail(&client, &current).await;
    }

    let snapshot = page.snapshot(navigator.current());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render::render(&snapshot));
    }
    Ok(())
}

fn image(args: &ImageArgs) {
    let resolver = ImagePathResolver::new(args.base.as_str());
    println!("{}", resolver.resolve_tag(&args.id, args.size.as_deref()));
}

fn categories() {
    for category in Category::ALL {
        println!(
            "{:<14} {:<20} {}",
            category.slug(),
            category.api_path(),
            category.label()
        );
    }
}
