//! CLI entry point.
//!
//! # Responsibility
//! - Load a profile document and print the normalized career timeline.
//! - Double as a smoke probe for `vitae_core` linkage when run bare.

use chrono::Local;
use log::info;
use vitae_core::{default_log_level, init_logging, normalize, Profile, TimelineInterval};

fn main() {
    // Logging is opt-in for a print-and-exit tool.
    if let Ok(log_dir) = std::env::var("VITAE_LOG_DIR") {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => println!("vitae_core version={}", vitae_core::core_version()),
        [path] => {
            if let Err(message) = run(path) {
                eprintln!("error: {message}");
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("usage: vitae_cli [profile.json]");
            std::process::exit(2);
        }
    }
}

fn run(path: &str) -> Result<(), String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read `{path}`: {err}"))?;
    let profile: Profile = serde_json::from_str(&raw)
        .map_err(|err| format!("failed to decode `{path}`: {err}"))?;
    profile.validate().map_err(|err| err.to_string())?;

    let now = Local::now().date_naive();
    let intervals = normalize(&profile.experiences, now).map_err(|err| err.to_string())?;
    info!(
        "event=timeline_rendered module=cli status=ok records={} now={now}",
        intervals.len()
    );

    println!("{} — {}", profile.identity.name, profile.identity.headline);
    for interval in &intervals {
        println!("{}", format_row(interval));
    }
    Ok(())
}

fn format_row(interval: &TimelineInterval) -> String {
    let end = if interval.ongoing {
        "ongoing".to_string()
    } else {
        interval.resolved_end.format("%Y-%m").to_string()
    };
    format!(
        "{} → {}  {} — {} ({})",
        interval.resolved_start.format("%Y-%m"),
        end,
        interval.label,
        interval.subtype,
        interval.duration_label
    )
}
