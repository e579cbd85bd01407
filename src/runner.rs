// src/runner.rs

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::warn;
use reqwest::blocking::Client;

use crate::config::consts::REQUEST_PAUSE_MS;
use crate::config::venues::{self, Venue};
use crate::core::{net, seatmap};
use crate::error::Result;
use crate::params::Params;
use crate::progress::Progress;
use crate::report::{self, Summary};

/// What a run produced. The error count covers per-venue failures that were
/// reported and skipped, not failures that abort the run.
pub struct RunReport {
    pub ok: usize,
    pub failed: usize,
}

/// Resolve the venue list for a run: TOML file if given, else built-ins,
/// then the optional --only label filter.
pub fn resolve_venues(params: &Params) -> Result<Vec<Venue>> {
    let mut list = match &params.venues_file {
        Some(path) => venues::load(path)?,
        None => venues::defaults(),
    };
    if let Some(needle) = &params.only {
        let needle = needle.to_lowercase();
        list.retain(|v| v.label.to_lowercase().contains(&needle));
    }
    Ok(list)
}

/// Top-level runner: resolve venues and scrape them, printing to stdout.
pub fn run(params: &Params, progress: Option<&mut dyn Progress>) -> Result<RunReport> {
    let venues = resolve_venues(params)?;
    let stdout = io::stdout();
    run_venues(&venues, &mut stdout.lock(), progress)
}

/// Scrape the given venues strictly in order, one blocking fetch at a time.
/// A venue that fails gets an error line and the loop moves on.
pub fn run_venues(
    venues: &[Venue],
    out: &mut dyn Write,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunReport> {
    let client = net::client()?;
    let mut run_report = RunReport { ok: 0, failed: 0 };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(venues.len());
    }
    writeln!(out, "Fetching seat data for {} venues...", venues.len())?;

    for (i, venue) in venues.iter().enumerate() {
        match fetch_and_summarize(&client, venue) {
            Ok(summary) => {
                out.write_all(summary.render(&venue.label).as_bytes())?;
                run_report.ok += 1;
            }
            Err(e) => {
                warn!("{}: {e}", venue.label);
                out.write_all(report::render_error(&venue.label, &e).as_bytes())?;
                run_report.failed += 1;
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.venue_done(i, &venue.label);
        }
        if i + 1 < venues.len() {
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(run_report)
}

fn fetch_and_summarize(client: &Client, venue: &Venue) -> Result<Summary> {
    let html = net::http_get(client, &venue.url)?;
    let tally = seatmap::classify(&html);
    Ok(Summary::from_tally(&tally))
}
