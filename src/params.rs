// src/params.rs

use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub venues_file: Option<PathBuf>, // TOML venue list; None = built-ins
    pub only: Option<String>,         // case-insensitive label substring filter
    pub list_venues: bool,            // list venues then exit
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }
}
