#![forbid(unsafe_code)]

//! Horizontal collapse story harness.
//!
//! Renders the reference story (ten `ChildN` segments, `...` placeholder)
//! as a single row sized to the terminal, the way the story's resizable box
//! shows it.
//!
//! # Running
//!
//! ```sh
//! cargo run -p hcollapse-harness
//! ```
//!
//! # Environment
//!
//! | Variable                      | Effect                                        |
//! |-------------------------------|-----------------------------------------------|
//! | `HCOLLAPSE_DEMO_ITEMS`        | number of segments (default 10)               |
//! | `HCOLLAPSE_DEMO_KEEP_INITIAL` | leading segments kept (default 1)             |
//! | `HCOLLAPSE_DEMO_KEEP_LAST`    | trailing segments kept (default 1)            |
//! | `HCOLLAPSE_DEMO_PLACEHOLDER`  | placeholder text, `none` to disable           |
//! | `HCOLLAPSE_DEMO_SWEEP`        | render every width from the terminal down to 1 and back |
//! | `HCOLLAPSE_STORM_SEED`        | replay a burst resize storm with this seed    |
//! | `HCOLLAPSE_STORM_LOG`         | write the storm JSONL log to this path        |
//! | `HCOLLAPSE_LOG`               | log filter (with `--features tracing-json`)   |

use std::io::{self, Write};
use std::path::Path;

use hcollapse_harness::resize_storm::{ResizeStorm, StormConfig, StormPattern, replay};
use hcollapse_harness::story::{STORY_PLACEHOLDER, STORY_START_WIDTH, Story};
use hcollapse_widgets::CollapseState;

fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let enabled = matches!(
        trimmed,
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON"
    );
    Some(enabled)
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_usize(name: &str, default: usize) -> usize {
    env_u64(name)
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(default)
}

fn story_from_env() -> Story {
    let items = env_usize("HCOLLAPSE_DEMO_ITEMS", 10);
    let placeholder = match env_string("HCOLLAPSE_DEMO_PLACEHOLDER") {
        Some(text) if text.eq_ignore_ascii_case("none") => None,
        Some(text) => Some(text),
        None => Some(STORY_PLACEHOLDER.to_string()),
    };
    Story::with_items(items)
        .with_placeholder(placeholder)
        .with_keep(
            env_usize("HCOLLAPSE_DEMO_KEEP_INITIAL", 1),
            env_usize("HCOLLAPSE_DEMO_KEEP_LAST", 1),
        )
}

/// Terminal width, falling back to the story's starting width when stdout
/// is not a terminal.
fn terminal_width() -> u16 {
    crossterm::terminal::size()
        .map(|(width, _)| width)
        .unwrap_or(STORY_START_WIDTH)
}

fn print_row(out: &mut impl Write, story: &Story, width: u16, state: &mut CollapseState) -> io::Result<()> {
    let row = story.render(width, state).row_text(0);
    writeln!(
        out,
        "{width:>4} | {row:<pad$} | hidden {}",
        state.skipped(),
        pad = usize::from(width)
    )
}

fn run_sweep(out: &mut impl Write, story: &Story, max_width: u16) -> io::Result<()> {
    let mut state = CollapseState::new();
    for width in (1..=max_width).rev().chain(2..=max_width) {
        print_row(out, story, width, &mut state)?;
    }
    let stats = state.stats();
    writeln!(
        out,
        "solves {} growth {} overflow {}",
        stats.solves, stats.growth_triggers, stats.overflow_triggers
    )
}

fn run_storm(out: &mut impl Write, story: &Story, seed: u64) -> io::Result<bool> {
    let storm = ResizeStorm::new(
        StormConfig::default()
            .with_seed(seed)
            .with_case_name(format!("burst_seed_{seed}"))
            .with_pattern(StormPattern::Burst { count: 200 })
            .with_width_bounds(1, terminal_width().max(STORY_START_WIDTH)),
    );
    let result = replay(&storm, story);

    if let Some(path) = env_string("HCOLLAPSE_STORM_LOG") {
        let mut log = result.jsonl.clone();
        log.push('\n');
        std::fs::write(Path::new(&path), log)?;
    }

    writeln!(
        out,
        "storm seed {seed}: {} resizes, {} solves, {} violations, checksum {}",
        result.total_resizes,
        result.solves,
        result.violations.len(),
        result.output_checksum
    )?;
    for violation in &result.violations {
        writeln!(
            out,
            "  [{}] step {}: {}",
            violation.check, violation.index, violation.message
        )?;
    }
    Ok(result.passed)
}

fn main() -> io::Result<()> {
    #[cfg(feature = "tracing-json")]
    hcollapse_core::logging::init_json();

    let story = story_from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(seed) = env_u64("HCOLLAPSE_STORM_SEED") {
        let passed = run_storm(&mut out, &story, seed)?;
        out.flush()?;
        if !passed {
            std::process::exit(1);
        }
        return Ok(());
    }

    let width = terminal_width();
    if env_flag("HCOLLAPSE_DEMO_SWEEP").unwrap_or(false) {
        run_sweep(&mut out, &story, width)?;
    } else {
        let mut state = CollapseState::new();
        print_row(&mut out, &story, STORY_START_WIDTH, &mut state)?;
        print_row(&mut out, &story, width, &mut state)?;
    }
    out.flush()
}
