//! Reads one snapshot page from stdin and prints its report as JSON.

use babynames::extract_bytes;
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let mut html = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {e}");
        std::process::exit(1);
    }

    match extract_bytes(&html) {
        Ok(report) => match serde_json::to_string(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
