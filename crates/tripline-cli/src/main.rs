//! Tripline CLI Application
//!
//! Command-line interface for the tripline itinerary editor.

mod args;
mod cli;
mod renderer;

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tripline_core::{geocode::NominatimGeocoder, TripPlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let renderer = TerminalRenderer::new(!args.no_color);

    // Link parsing needs no storage.
    if let Some(Link(link)) = &args.command {
        Cli::link(&renderer, link)?;
        return Ok(ExitCode::SUCCESS);
    }

    let storage = args.storage()?;
    let geocoder = NominatimGeocoder::new(&args.geocoder_url, args.network_timeout())
        .context("Invalid geocoder URL")?;

    let planner = TripPlannerBuilder::new()
        .with_storage(storage)
        .with_geocoder(Arc::new(geocoder))
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Tripline started with {} backend", planner.backend_kind());

    let mut cli = Cli::new(planner, renderer);
    let outcome = match args.command {
        None | Some(Days) => cli.days(),
        Some(Show(day)) => cli.show(day.day),
        Some(Add(add)) => cli.add(add).await,
        Some(Move(mv)) => cli.move_point(mv).await,
        Some(Remove(rm)) => cli.remove(rm).await,
        Some(Clear(day)) => cli.clear(day.day).await,
        Some(Route(route)) => cli.route(route),
        Some(Export(path)) => cli.export(&path.path).await,
        Some(Import(path)) => cli.import(&path.path).await,
        Some(Link(_)) => Ok(()),
    };
    outcome?;
    Ok(cli.exit_code())
}
