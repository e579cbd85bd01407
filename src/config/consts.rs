// src/config/consts.rs

// Net config
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X) AppleWebKit/537.36 Chrome/120 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Built-in venue list: playoff-weekend seating blocks, one page per block.
// Overridable with --venues <file>; see config::venues.
pub const DEFAULT_VENUES: [(&str, &str); 12] = [
    ("Telford Tigers (Block 5)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=977&stage=2&Reference=tigers-7PR75"),
    ("Bristol Pitbulls (Block 6)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=978&stage=2&Reference=pitbulls-V285C"),
    ("Sheffield Steeldogs (Block 13)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=984&stage=2&Reference=steeldogs-9WQ39"),
    ("Hull Seahawks (Block 4)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=976&stage=2&Reference=seahawks-H1524"),
    ("Bees (Block 10)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=982&stage=2&Reference=bees-91MT1"),
    ("Swindon Wildcats (Block 11)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=999&stage=2&Reference=wildcats-73V4F"),
    ("Swindon Wildcats (Block 12)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=983&stage=2&Reference=wildcats-73V4F"),
    ("Basingstoke Bison (Block 15)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=986&stage=2&Reference=bison-9NN48"),
    ("Peterborough Phantoms (Block 9)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=981&stage=2&Reference=phantoms-76EC2"),
    ("Solway Sharks (Block 1)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=973&stage=2&Reference=sharks-65A4G"),
    ("Leeds Knights (Block 7)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=979&stage=2&Reference=knights-9V7Y8"),
    ("Leeds Knights (Block 8)", "https://iceaccount.co.uk/nihl-play-off-weekend/event-tickets/?event_id=8367&blocks_id=980&stage=2&Reference=knights-9V7Y8"),
];
