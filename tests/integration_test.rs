// Integration tests for preset persistence and the countdown flow
use std::sync::mpsc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use tempfile::tempdir;

use countdown_studio::models::style::{NumberStyle, StyleUpdate};
use countdown_studio::services::countdown::RefreshScheduler;
use countdown_studio::services::event::{sample_events, EventRegistry};
use countdown_studio::services::style::{StyleService, PRESETS_FILE};

#[test]
fn test_preset_lifecycle_across_restarts() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(PRESETS_FILE);

    // Simulate first app launch: tweak the style and save it as a preset
    let saved_id = {
        let mut style = StyleService::load(path.clone());
        style.update(StyleUpdate::ParticleCount(44));
        style.update(StyleUpdate::NumberStyle(NumberStyle::Neon));
        style
            .save_preset("Evening Look")
            .expect("Failed to save preset")
            .expect("Blank name rejected unexpectedly")
    };

    // Second launch: the preset is listed after the built-ins and applies
    {
        let mut style = StyleService::load(path.clone());
        let names: Vec<&str> = style.presets().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 11, "10 built-ins plus the saved preset");
        assert_eq!(*names.last().unwrap(), "Evening Look");

        assert!(style.apply_preset(&saved_id));
        assert_eq!(style.active().particle_count, 44);
        assert_eq!(style.active().number_style, NumberStyle::Neon);

        // Delete it and rewrite the stored subset
        assert!(style.delete_preset(&saved_id).expect("Failed to delete"));
    }

    // Third launch: the deletion persisted, built-ins are untouched
    {
        let style = StyleService::load(path);
        assert_eq!(style.presets().count(), 10);
        assert!(style.find_preset(&saved_id).is_none());
        assert!(style.find_preset("cyberpunk").is_some());
    }
}

#[test]
fn test_corrupt_preset_file_recovers_to_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(PRESETS_FILE);
    std::fs::write(&path, "]] nonsense [[").expect("Failed to write file");

    let mut style = StyleService::load(path.clone());
    assert_eq!(style.presets().count(), 10, "built-ins only");

    // The next save overwrites the corrupt payload with a valid one
    style.save_preset("Fresh").expect("Failed to save preset");
    let reloaded = StyleService::load(path);
    assert_eq!(reloaded.user_presets().len(), 1);
}

#[test]
fn test_registry_drives_scheduler_through_selection_change() {
    let mut registry = EventRegistry::with_events(sample_events());
    let mut scheduler = RefreshScheduler::with_interval(Duration::from_millis(10));

    // Count down to the initially selected event
    let first_target = registry.active_event().expect("no selection").date;
    let (tx, rx) = mpsc::channel();
    scheduler.start(first_target, move |breakdown| {
        let _ = tx.send(breakdown);
    });
    rx.recv_timeout(Duration::from_secs(1))
        .expect("no immediate tick");

    // User picks a different event: restarting the scheduler retargets it
    let second = registry.events()[1].id;
    assert!(registry.select_event(second));
    let second_target = registry.active_event().expect("no selection").date;

    let (tx2, rx2) = mpsc::channel();
    scheduler.start(second_target, move |breakdown| {
        let _ = tx2.send(breakdown);
    });
    rx2.recv_timeout(Duration::from_secs(1))
        .expect("no tick after retarget");

    // Old observer is torn down with the old timer
    while rx.try_recv().is_ok() {}
    std::thread::sleep(Duration::from_millis(50));
    assert!(rx.try_recv().is_err(), "old timer still ticking");

    scheduler.stop();
}

#[test]
fn test_live_countdown_against_wall_clock() {
    let target = Utc::now() + ChronoDuration::seconds(30);
    let mut scheduler = RefreshScheduler::with_interval(Duration::from_millis(10));

    let (tx, rx) = mpsc::channel();
    scheduler.start(target, move |breakdown| {
        let _ = tx.send(breakdown);
    });

    let breakdown = rx
        .recv_timeout(Duration::from_secs(1))
        .expect("no immediate tick");
    assert!(!breakdown.expired);
    assert_eq!(breakdown.days, 0);
    assert_eq!(breakdown.hours, 0);
    assert_eq!(breakdown.minutes, 0);
    assert!(breakdown.seconds <= 30);

    scheduler.stop();
}

#[test]
fn test_add_edit_delete_flow_keeps_selection_consistent() {
    let mut registry = EventRegistry::new();
    let now = Utc::now();

    let first = registry.add_event(now);
    let second = registry.add_event(now);

    // Newest addition is selected; rename it in place
    let mut updated = registry
        .active_event()
        .expect("no selection after add")
        .clone();
    assert_eq!(updated.id, second);
    updated.title = "Product Launch".to_string();
    updated.date = now + ChronoDuration::days(14);
    assert!(registry.edit_event(updated));
    assert_eq!(
        registry.active_event().expect("lost selection").title,
        "Product Launch"
    );

    // Deleting the selected event falls back to the first remaining one
    assert!(registry.delete_event(second));
    assert_eq!(registry.active_event().map(|e| e.id), Some(first));

    // Deleting the last event clears the selection entirely
    assert!(registry.delete_event(first));
    assert!(registry.active_event().is_none());
    assert!(registry.is_empty());
}
