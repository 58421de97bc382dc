// Reads card swipes from stdin, one per line, and prints the decoded
// track 1 fields. Keyboard-wedge readers emit exactly this format.
//
//   cargo run --example parse_swipe < swipes.txt
//   RUST_LOG=debug cargo run --example parse_swipe

use magtrack::prelude::*;
use std::io::{self, BufRead};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let track = TrackOne::parse(&line);
        if !track.has_raw_track_data() {
            println!("no track 1 data");
            continue;
        }

        println!("Format code : {}", track.format_code());
        if let Some(masked) = track.primary_account_number().masked() {
            println!("Account     : {}", masked);
        }
        if track.has_name() {
            println!("Name        : {}", track.name().full_name());
        }
        match (track.expiration_date().year(), track.expiration_date().month()) {
            (Some(y), Some(m)) => println!("Expires     : {:04}-{:02}", y, m),
            _ => println!("Expires     : (none)"),
        }
        let sc = track.service_code();
        if let (Some(i), Some(a), Some(s)) = (
            sc.interchange(),
            sc.authorization_processing(),
            sc.allowed_services(),
        ) {
            println!("Service code: {}", sc);
            println!("  {}", i.description());
            println!("  {}", a.description());
            println!("  {}", s.description());
        }
        if track.exceeds_maximum_length() {
            println!("warning: record exceeds {} characters", TrackOne::MAX_LENGTH);
        }
        println!();
    }
    Ok(())
}
