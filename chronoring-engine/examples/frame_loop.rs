use chronoring_engine::{StyleTable, TemporalPositionEngine, ViewMode};
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();

    // --- Engine setup ---
    // The engine detects the system timezone, degrading to UTC if detection
    // or lookup fails. A renderer would hold these for the life of the app.

    let engine = TemporalPositionEngine::with_local_timezone();
    let style = StyleTable::default();

    println!("display timezone: {}", engine.timezone_name());
    println!();

    // --- Frame loop ---
    // One sample per frame; every output below derives from that sample.

    for frame in 0..5 {
        let instant = engine.now();
        let progress = engine.ring_progress(instant, ViewMode::Year);

        if !progress.is_valid() {
            // NaN angles mean the instant was unrepresentable; skip the frame
            continue;
        }

        println!("frame {frame}:");
        for (ring, angle) in progress.visible() {
            let thickness = style.get(ring).map(|s| s.thickness).unwrap_or(1.0);
            println!("  {ring:<12} {angle:8.3} deg  (stroke {thickness:.1})");
        }

        if let Ok(code) = engine.temporal_code(instant) {
            println!("  code: {code}");
        }
        if let Ok(conventional) = engine.conventional_time(instant) {
            println!("  {conventional}");
        }
        println!();

        thread::sleep(Duration::from_millis(200));
    }

    // --- Day view ---
    // The same sample feeds the traditional clock face; the 12-hour ring
    // stands in for the 24-hour one.

    let instant = engine.now();
    let progress = engine.ring_progress(instant, ViewMode::Day);
    println!("day view:");
    for (ring, angle) in progress.visible() {
        let radius = style.day_radius(ring);
        println!("  {ring:<12} {angle:8.3} deg  (radius x{radius:.2})");
    }
}
