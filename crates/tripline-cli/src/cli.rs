//! Command handlers.
//!
//! [`Cli`] owns the planner session for one invocation and renders each
//! result as markdown through the [`TerminalRenderer`]. Rejected input is
//! reported inline; only backend and runtime faults propagate as errors.

use std::{fs, path::Path, process::ExitCode};

use anyhow::{Context, Result};
use log::debug;
use tripline_core::{
    display::{AddResult, DayOverview, DayPoints, DeleteResult, OperationStatus, StatusLevel},
    extract_coordinates,
    params::AddPoint,
    route::{geojson::to_geojson, html::to_html},
    Change, DayKey, Direction, SaveOutcome, TripError, TripPlanner,
};

use crate::{
    args::{AddArgs, LinkArgs, MoveArgs, RemoveArgs, RouteArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
    rejected: bool,
}

impl Cli {
    pub fn new(planner: TripPlanner, renderer: TerminalRenderer) -> Self {
        Self {
            planner,
            renderer,
            rejected: false,
        }
    }

    /// Failure when an input was rejected; warnings still exit cleanly.
    pub fn exit_code(&self) -> ExitCode {
        if self.rejected {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    pub fn days(&self) -> Result<()> {
        self.renderer
            .render(&DayOverview(self.planner.itinerary()).to_string())
    }

    pub fn show(&self, day: DayKey) -> Result<()> {
        self.renderer
            .render(&DayPoints::new(day, self.planner.day(day)).to_string())
    }

    pub async fn add(&mut self, args: AddArgs) -> Result<()> {
        let params: AddPoint = args.into();
        let change = match self.planner.add_point(&params).await {
            Ok(change) => change,
            Err(e) => return self.reject(e, "Failed to add point"),
        };

        self.renderer.render(
            &AddResult {
                day: params.day,
                point: &change.value,
            }
            .to_string(),
        )?;
        self.finish(&change, params.day)
    }

    pub async fn move_point(&mut self, args: MoveArgs) -> Result<()> {
        let (day, position, direction) = (args.day, args.position, args.direction);
        let change = match self.planner.move_point(&args.into()).await {
            Ok(change) => change,
            Err(e) => return self.reject(e, "Failed to move point"),
        };

        let (verb, edge) = match direction {
            Direction::Previous => ("up", "start"),
            Direction::Next => ("down", "end"),
        };
        let status = if change.value {
            OperationStatus::success(format!("Moved {day} #{position} {verb}"))
        } else {
            OperationStatus::warning(format!("{day} #{position} is already at the {edge} of the day"))
        };
        self.renderer.render(&status.to_string())?;
        self.finish(&change, day)
    }

    pub async fn remove(&mut self, args: RemoveArgs) -> Result<()> {
        let day = args.day;
        let change = match self.planner.remove_point(&args.into()).await {
            Ok(change) => change,
            Err(e) => return self.reject(e, "Failed to remove point"),
        };

        self.renderer
            .render(&DeleteResult { point: &change.value }.to_string())?;
        self.finish(&change, day)
    }

    pub async fn clear(&mut self, day: DayKey) -> Result<()> {
        let change = self
            .planner
            .clear_day(day)
            .await
            .context("Failed to clear day")?;

        let status = if change.value == 0 {
            OperationStatus::warning(format!("{day} has no points to remove"))
        } else {
            OperationStatus::success(format!("Removed {} points from {day}", change.value))
        };
        self.renderer.render(&status.to_string())?;
        self.finish(&change, day)
    }

    pub fn route(&self, args: RouteArgs) -> Result<()> {
        let view = self.planner.render_day(args.day, &args.options());

        if args.html.is_none() && args.geojson.is_none() {
            let markdown = format!("# {} route\n\n{view}", args.day);
            return self.renderer.render(&markdown);
        }

        if let Some(path) = &args.html {
            let page = to_html(&view, &args.day.label())?;
            write_file(path, &page)?;
            self.renderer.render(
                &OperationStatus::success(format!("Wrote map to {}", path.display())).to_string(),
            )?;
        }
        if let Some(path) = &args.geojson {
            let collection = format!("{:#}", to_geojson(&view));
            write_file(path, &collection)?;
            self.renderer.render(
                &OperationStatus::success(format!("Wrote GeoJSON to {}", path.display()))
                    .to_string(),
            )?;
        }
        Ok(())
    }

    pub async fn export(&self, path: &Path) -> Result<()> {
        let rows = self
            .planner
            .export_csv(path)
            .await
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        let message = format!("Exported {rows} points to {}", path.display());
        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }

    pub async fn import(&mut self, path: &Path) -> Result<()> {
        let change = match self.planner.import_csv(path).await {
            Ok(change) => change,
            Err(e) => return self.reject(e, &format!("Failed to import {}", path.display())),
        };
        self.renderer.render(&change.value.to_string())?;
        self.render_persistence(&change.persistence)
    }

    pub fn link(renderer: &TerminalRenderer, args: &LinkArgs) -> Result<()> {
        let status = match extract_coordinates(&args.url) {
            Some(coordinates) => OperationStatus::success(format!("Coordinates: {coordinates}")),
            None => OperationStatus::warning(
                "No coordinates found in the link; enter latitude and longitude manually"
                    .to_string(),
            ),
        };
        renderer.render(&status.to_string())
    }

    /// Shows rejected input inline and passes every other error on.
    fn reject(&mut self, error: TripError, context: &str) -> Result<()> {
        let Some(status) = OperationStatus::rejected(&error) else {
            return Err(anyhow::Error::new(error).context(context.to_string()));
        };
        if status.level == StatusLevel::Error {
            self.rejected = true;
        }
        self.renderer.render_warning(&status.to_string())
    }

    /// Reports the save and shows the day again when the change asks for it.
    fn finish<T>(&self, change: &Change<T>, day: DayKey) -> Result<()> {
        self.render_persistence(&change.persistence)?;
        if change.redraw {
            debug!("redrawing {day}");
            self.renderer.render("\n")?;
            self.show(day)?;
        }
        Ok(())
    }

    fn render_persistence(&self, outcome: &SaveOutcome) -> Result<()> {
        match outcome {
            SaveOutcome::Saved(_) => self.renderer.render(&outcome.to_string()),
            SaveOutcome::Failed { .. } => self.renderer.render_warning(&outcome.to_string()),
            SaveOutcome::Skipped => Ok(()),
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
