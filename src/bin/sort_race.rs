//! Terminal front end: races all algorithms and redraws every instance after each tick.
//!
//! Configured through `SORT_RACE_LEN`, `SORT_RACE_INTERVAL_MS` and `OVERRIDE_SEED`, log level
//! through `RUST_LOG`.

use std::io::{self, Write};

use sort_race::{Config, Scheduler, Snapshot};

// Lowest key first.
const RAMP: &[u8] = b" .:-=+*#%@";

fn ramp(value: i32, len: usize) -> char {
    let idx = (value.max(0) as usize * RAMP.len()) / len.max(1);
    RAMP[idx.min(RAMP.len() - 1)] as char
}

fn draw(snapshot: &Snapshot<'_>, len: usize, out: &mut impl Write) -> io::Result<()> {
    // Cursor home and clear, so frames overwrite each other.
    write!(out, "\x1b[H\x1b[2J")?;
    writeln!(out, "step {}", snapshot.step_count)?;

    for lane in &snapshot.lanes {
        let state = if lane.finished { "done" } else { "...." };
        let row = lane
            .values
            .iter()
            .map(|&value| ramp(value, len))
            .collect::<String>();

        writeln!(out, "{:<15} {state} |{row}|", lane.name)?;
    }

    out.flush()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut scheduler = Scheduler::new(Config::from_env());
    let len = scheduler.element_count();
    let stdout = io::stdout();

    if let Err(err) = draw(&scheduler.snapshot(), len, &mut stdout.lock()) {
        log::error!("failed to draw frame: {err}");
        return;
    }

    let interval_ms = scheduler.interval().as_millis() as u64;
    scheduler.start(interval_ms);
    scheduler.run(|scheduler| {
        if let Err(err) = draw(&scheduler.snapshot(), len, &mut stdout.lock()) {
            log::error!("failed to draw frame: {err}");
            scheduler.stop();
        }
    });
}
