// Countdown Studio
// Console front end: stands in for the rendering collaborator

use std::sync::mpsc;

use anyhow::{Context, Result};

use countdown_studio::services::config::AppConfig;
use countdown_studio::services::countdown::RefreshScheduler;
use countdown_studio::services::event::{sample_events, EventRegistry};
use countdown_studio::services::style::StyleService;
use countdown_studio::utils::date::format_in_zone;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Countdown Studio");

    let config = AppConfig::load();
    let presets_path = config
        .presets_path()
        .context("no user data directory available")?;
    let style = StyleService::load(presets_path);

    let registry = EventRegistry::with_events(sample_events());
    let event = registry
        .active_event()
        .context("no events to count down to")?
        .clone();

    println!("Counting down to: {}", event.title);
    if let Some(description) = &event.description {
        println!("  {description}");
    }
    if let Some(zone) = event.timezone {
        println!("  target: {} ({})", format_in_zone(event.date, zone), zone);
    }
    println!("  gradient: {}", event.gradient());
    println!(
        "  presets available: {}",
        style.presets().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
    );

    let (tx, rx) = mpsc::channel();
    let mut scheduler = RefreshScheduler::with_interval(config.tick_interval());
    scheduler.start(event.date, move |breakdown| {
        let _ = tx.send(breakdown);
    });

    for breakdown in rx {
        println!("  {breakdown}");
        if breakdown.expired {
            println!("{} has arrived!", event.title);
            break;
        }
    }

    scheduler.stop();
    Ok(())
}
