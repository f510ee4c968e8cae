use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::info;

use crate::line::{Line, LineCode};

mod error;
mod feed;
mod fetch;
mod line;
mod rank;
mod render;
mod resolve;
mod train;

/// command line tracker for Link light rail trains
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    op: Operation,
}

#[derive(Subcommand)]
enum Operation {
    /// show the trains currently running on a line
    Track {
        /// line to track
        #[arg(short, long, value_enum, default_value_t = LineCode::One)]
        line: LineCode,
        /// refresh every this many seconds instead of exiting
        #[arg(long)]
        interval: Option<u64>,
        /// emit the ranked trains as JSON instead of colored text
        #[arg(long)]
        json: bool,
    },
    /// list the station names the feed reports for a line
    Stops {
        #[arg(short, long, value_enum, default_value_t = LineCode::One)]
        line: LineCode,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.op {
        Operation::Track {
            line,
            interval,
            json,
        } => track(line, interval, json),
        Operation::Stops { line } => stops(line),
    }
}

fn track(code: LineCode, interval: Option<u64>, json: bool) -> Result<()> {
    let line = Line::from(code);

    loop {
        run_cycle(&line, json)?;
        match interval {
            Some(secs) => thread::sleep(Duration::from_secs(secs)),
            None => return Ok(()),
        }
    }
}

/// One fetch-then-process cycle: everything derived from the snapshot is
/// rebuilt here and dropped at the end.
fn run_cycle(line: &Line, json: bool) -> Result<()> {
    let body = fetch::trips_for_route(line.route_id)?;
    let document: feed::TripsForRoute =
        serde_json::from_str(&body).context("Malformed trips-for-route document")?;

    let now = Utc::now().timestamp_millis() as f64 / 1000.0;
    let trains = rank::rank(train::process_snapshot(line, &document.data, now));
    info!("tracking {} trains on line {}", trains.len(), line.code);

    if json {
        render::print_json(&trains)
    } else {
        render::print_board(&trains);
        Ok(())
    }
}

fn stops(code: LineCode) -> Result<()> {
    let line = Line::from(code);
    let body = fetch::stops_for_route(line.route_id)?;
    let document: feed::StopsForRoute =
        serde_json::from_str(&body).context("Malformed stops-for-route document")?;

    // feed order, first occurrence of each name
    let names = document
        .data
        .references
        .stops
        .iter()
        .map(|stop| stop.name.as_str())
        .unique()
        .collect::<Vec<_>>();

    println!("{} stops found", names.len());
    for name in names {
        println!("{name}");
    }
    Ok(())
}
