// src/core/seatmap.rs
// Seat classifier. Seat elements are whatever carries an id of the form
// `seat-<digits>`; the site marks state with `sold` / `available` classes.
// Row and seat-number markup is inconsistent across blocks, hence the
// ordered attribute probes with class/text fallbacks.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static SEAT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^seat-\d+$").expect("seat id regex"));
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("digits regex"));

// Cheap pre-filter; SEAT_ID_RE makes the final call.
static SEAT_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"[id^="seat-"]"#).expect("seat selector"));

// Probe order matters: first present attribute wins.
const ROW_ATTRS: [&str; 3] = ["data-row", "data-rowname", "data-row-id"];
const SEAT_ATTRS: [&str; 3] = ["data-seat", "data-seatnumber", "data-seat-id"];

/// Per-page tally: seat counts plus available seat numbers grouped by row.
/// Seats with no recoverable number are counted but absent from `rows`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeatTally {
    pub sold: usize,
    pub available: usize,
    pub rows: BTreeMap<String, Vec<i64>>,
}

impl SeatTally {
    pub fn total(&self) -> usize {
        self.sold + self.available
    }
}

/// Scan one seat-map page. Pure function of the HTML text.
pub fn classify(html: &str) -> SeatTally {
    let doc = Html::parse_document(html);
    let mut tally = SeatTally::default();

    for el in doc.select(&SEAT_SEL) {
        let Some(id) = el.value().id() else { continue };
        if !SEAT_ID_RE.is_match(id) {
            continue;
        }

        if el.value().classes().any(|c| c == "sold") {
            tally.sold += 1;
        } else if el.value().classes().any(|c| c == "available") {
            tally.available += 1;
            let row = extract_row(&el);
            if let Some(n) = extract_seat_number(&el) {
                tally.rows.entry(row).or_default().push(n);
            }
        }
        // Any other state (reserved, aisle, ...) is ignored.
    }

    debug!(
        "classified {} seats: {} sold, {} available, {} rows",
        tally.total(),
        tally.sold,
        tally.available,
        tally.rows.len()
    );
    tally
}

/// Row name: attribute probes, then `row-<name>` class, then "UNKNOWN".
fn extract_row(el: &ElementRef) -> String {
    for key in ROW_ATTRS {
        if let Some(v) = el.value().attr(key) {
            return v.to_string();
        }
    }
    for c in el.value().classes() {
        if let Some(name) = c.strip_prefix("row-") {
            return name.to_string();
        }
    }
    String::from("UNKNOWN")
}

/// Seat number: attribute probes (unparseable value falls through to the
/// next probe), then first digit run in the element text, else None.
/// A digit run past i64 range fails the parse and drops the seat from the
/// row aggregate; it still counts as available.
fn extract_seat_number(el: &ElementRef) -> Option<i64> {
    for key in SEAT_ATTRS {
        if let Some(v) = el.value().attr(key) {
            if let Ok(n) = v.trim().parse::<i64>() {
                return Some(n);
            }
        }
    }
    let text: String = el.text().collect();
    DIGITS_RE
        .find(&text)
        .and_then(|m| m.as_str().parse().ok())
}
