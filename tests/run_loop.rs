// tests/run_loop.rs
//
// End-to-end loop against a local mock server: a failing venue is reported
// and does not stop the venues after it.
//
use seat_scrape::config::consts::USER_AGENT;
use seat_scrape::config::venues::Venue;
use seat_scrape::progress::Progress;
use seat_scrape::runner::run_venues;

const GOOD_PAGE: &str = r#"
<html><body>
  <div id="seat-1" class="seat sold"></div>
  <div id="seat-2" class="seat available" data-row="A" data-seat="2"></div>
  <div id="seat-3" class="seat available" data-row="A" data-seat="3"></div>
</body></html>
"#;

#[derive(Default)]
struct Recorder {
    begun: Option<usize>,
    done: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.begun = Some(total);
    }
    fn venue_done(&mut self, _index: usize, label: &str) {
        self.done.push(label.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn failing_venue_does_not_stop_the_run() {
    let mut server = mockito::Server::new();
    let bad = server
        .mock("GET", "/bad")
        .with_status(503)
        .create();
    let good = server
        .mock("GET", "/good")
        .match_header("user-agent", USER_AGENT)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(GOOD_PAGE)
        .create();

    // Failing venue first, to prove the loop continues past it.
    let venues = vec![
        Venue {
            label: "Broken Rink (Block 2)".into(),
            url: format!("{}/bad", server.url()),
        },
        Venue {
            label: "Good Rink (Block 1)".into(),
            url: format!("{}/good", server.url()),
        },
    ];

    let mut out = Vec::new();
    let mut rec = Recorder::default();
    let run_report = run_venues(&venues, &mut out, Some(&mut rec)).unwrap();

    bad.assert();
    good.assert();
    assert_eq!(run_report.ok, 1);
    assert_eq!(run_report.failed, 1);

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Fetching seat data for 2 venues..."));
    assert!(
        text.contains("Broken Rink (Block 2) - ERROR fetching seats:"),
        "missing error line:\n{text}"
    );
    assert!(text.contains("503"), "status not reported:\n{text}");

    // The good venue still got its full stanza, after the error line.
    let err_at = text.find("ERROR fetching seats").unwrap();
    let good_at = text.find("Good Rink (Block 1)").unwrap();
    assert!(good_at > err_at);
    assert!(text.contains("Total Seats: 3"));
    assert!(text.contains("Sold Seats: 1"));
    assert!(text.contains("Available Seats: 2"));
    assert!(text.contains("% Sold: 33.33%"));
    assert!(text.contains("Largest Contiguous Block: 2"));

    assert_eq!(rec.begun, Some(2));
    assert_eq!(rec.done.len(), 2);
    assert!(rec.finished);
}

#[test]
fn empty_venue_list_prints_only_the_header() {
    let mut out = Vec::new();
    let run_report = run_venues(&[], &mut out, None).unwrap();
    assert_eq!(run_report.ok, 0);
    assert_eq!(run_report.failed, 0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Fetching seat data for 0 venues...\n"
    );
}
