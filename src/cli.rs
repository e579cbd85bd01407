// src/cli.rs

use std::env;
use std::path::PathBuf;

use crate::error::{Result, ScrapeError};
use crate::params::Params;
use crate::runner;

pub fn run() -> Result<()> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_venues {
        for v in runner::resolve_venues(&params)? {
            println!("{}\t{}", v.label, v.url);
        }
        return Ok(());
    }

    runner::run(&params, None).map(|_| ())
}

fn parse_cli(params: &mut Params) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--venues" => {
                let v = args
                    .next()
                    .ok_or_else(|| usage("Missing value for --venues"))?;
                params.venues_file = Some(PathBuf::from(v));
            }
            "--only" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --only"))?;
                params.only = Some(v);
            }
            "--list-venues" => params.list_venues = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(usage(&format!("Unknown arg: {}", a))),
        }
    }
    Ok(())
}

fn usage(msg: &str) -> ScrapeError {
    ScrapeError::Usage(msg.to_string())
}
