// src/report.rs
// Fixed-order plain-text output, one stanza per venue.

use crate::core::blocks::largest_contiguous_block;
use crate::core::seatmap::SeatTally;
use crate::error::ScrapeError;

/// Occupancy stats for one venue page.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub sold: usize,
    pub available: usize,
    pub pct_sold: f64,
    pub largest_block: usize,
}

impl Summary {
    pub fn from_tally(tally: &SeatTally) -> Self {
        let total = tally.total();
        let pct_sold = if total == 0 {
            0.0
        } else {
            tally.sold as f64 / total as f64 * 100.0
        };
        Self {
            total,
            sold: tally.sold,
            available: tally.available,
            pct_sold,
            largest_block: largest_contiguous_block(&tally.rows),
        }
    }

    /// Stanza: label, dash underline, five stat lines. Percent to 2 d.p.
    pub fn render(&self, label: &str) -> String {
        format!(
            "\n{label}\n{underline}\n\
             Total Seats: {total}\n\
             Sold Seats: {sold}\n\
             Available Seats: {available}\n\
             % Sold: {pct:.2}%\n\
             Largest Contiguous Block: {block}\n",
            underline = "-".repeat(label.chars().count()),
            total = self.total,
            sold = self.sold,
            available = self.available,
            pct = self.pct_sold,
            block = self.largest_block,
        )
    }
}

/// Error line for a venue that failed to fetch or parse.
pub fn render_error(label: &str, err: &ScrapeError) -> String {
    format!("\n{label} - ERROR fetching seats: {err}\n")
}
