//! Resize storm generator and replay harness.
//!
//! Generates deterministic width sequences and replays them through a
//! [`CollapseState`], checking after every step that:
//!
//! | Check    | Statement                                                        |
//! |----------|------------------------------------------------------------------|
//! | `fit`    | the visible row is no wider than the area whenever it can fit    |
//! | `bounds` | the skip count never exceeds the interior                        |
//! | `settled`| after growth over hidden items, or while the row overflows, a fresh solve agrees with the retained decision |
//! | `stable` | rendering again at the same width draws the same row             |
//!
//! # JSONL Schema
//!
//! ```json
//! {"event":"storm_start","run_id":"...","case":"burst_50","seed":42,"pattern":"burst","event_count":50,"items":10}
//! {"event":"storm_resize","idx":0,"width":23,"skipped":7,"content":22,"solves":1,"row":"Child1...Child9Child10"}
//! {"event":"storm_violation","idx":3,"check":"fit","message":"..."}
//! {"event":"storm_complete","outcome":"pass","total_resizes":50,"solves":31,"checksum":"..."}
//! ```
//!
//! # Usage
//!
//! ```
//! use hcollapse_harness::resize_storm::{ResizeStorm, StormConfig, StormPattern, replay};
//! use hcollapse_harness::story::Story;
//!
//! let config = StormConfig::default()
//!     .with_seed(42)
//!     .with_pattern(StormPattern::Burst { count: 50 });
//!
//! let storm = ResizeStorm::new(config);
//! let result = replay(&storm, &Story::default());
//! result.assert_passed();
//! ```

use std::collections::hash_map::DefaultHasher;
use std::fmt::Write as FmtWrite;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use hcollapse_layout::{Projection, solve_snapshot};
use hcollapse_widgets::CollapseState;
use serde_json::json;

use crate::story::Story;

// ============================================================================
// Configuration
// ============================================================================

/// Pattern type for resize storm generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StormPattern {
    /// Rapid random steps around the current width.
    Burst {
        /// Number of resize events.
        count: usize,
    },
    /// Linear sweep from one width to another.
    Sweep {
        /// Starting width.
        start_width: u16,
        /// Ending width.
        end_width: u16,
        /// Number of steps.
        steps: usize,
    },
    /// Alternate between two widths.
    Oscillate {
        /// First width.
        width_a: u16,
        /// Second width.
        width_b: u16,
        /// Number of oscillations.
        cycles: usize,
    },
    /// Edge cases: zero, one, extremes, single-cell jitter.
    Pathological {
        /// Number of events.
        count: usize,
    },
    /// Custom width sequence.
    Custom {
        /// Widths in order.
        widths: Vec<u16>,
    },
}

impl StormPattern {
    /// Get the pattern name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Burst { .. } => "burst",
            Self::Sweep { .. } => "sweep",
            Self::Oscillate { .. } => "oscillate",
            Self::Pathological { .. } => "pathological",
            Self::Custom { .. } => "custom",
        }
    }

    /// Get the total number of events this pattern will generate.
    pub fn event_count(&self) -> usize {
        match self {
            Self::Burst { count } => *count,
            Self::Sweep { steps, .. } => *steps,
            Self::Oscillate { cycles, .. } => cycles * 2,
            Self::Pathological { count } => *count,
            Self::Custom { widths } => widths.len(),
        }
    }
}

impl Default for StormPattern {
    fn default() -> Self {
        Self::Burst { count: 50 }
    }
}

/// Configuration for resize storm generation.
#[derive(Debug, Clone)]
pub struct StormConfig {
    /// Random seed for deterministic generation.
    pub seed: u64,
    /// Storm pattern to generate.
    pub pattern: StormPattern,
    /// Width before the storm begins.
    pub initial_width: u16,
    /// Minimum generated width.
    pub min_width: u16,
    /// Maximum generated width.
    pub max_width: u16,
    /// Test case name for logging.
    pub case_name: String,
}

impl Default for StormConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            pattern: StormPattern::default(),
            initial_width: crate::story::STORY_START_WIDTH,
            min_width: 1,
            max_width: 120,
            case_name: "default".into(),
        }
    }
}

impl StormConfig {
    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the storm pattern.
    pub fn with_pattern(mut self, pattern: StormPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Set width bounds.
    pub fn with_width_bounds(mut self, min_width: u16, max_width: u16) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }

    /// Set the test case name.
    pub fn with_case_name(mut self, name: impl Into<String>) -> Self {
        self.case_name = name.into();
        self
    }
}

// ============================================================================
// Seeded RNG
// ============================================================================

/// Simple LCG PRNG for deterministic generation.
#[derive(Debug, Clone)]
struct SeededRng {
    state: u64,
}

impl SeededRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        min + (self.next_u64() % (max - min))
    }

    fn next_u16_range(&mut self, min: u16, max: u16) -> u16 {
        self.next_range(u64::from(min), u64::from(max)) as u16
    }

    fn chance(&mut self, p: f64) -> bool {
        (self.next_u64() as f64) / (u64::MAX as f64) < p
    }
}

// ============================================================================
// Storm Generator
// ============================================================================

/// A single width change in a storm sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeEvent {
    /// Target width.
    pub width: u16,
    /// Index in the sequence.
    pub index: usize,
}

/// Resize storm generator.
#[derive(Debug, Clone)]
pub struct ResizeStorm {
    config: StormConfig,
    events: Vec<ResizeEvent>,
    run_id: String,
}

impl ResizeStorm {
    /// Create a new storm generator with the given configuration.
    pub fn new(config: StormConfig) -> Self {
        let run_id = format!(
            "{:016x}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64 ^ config.seed)
                .unwrap_or(config.seed)
        );

        let mut storm = Self {
            config,
            events: Vec::new(),
            run_id,
        };
        storm.generate_events();
        storm
    }

    /// Get the run ID.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Get the generated events.
    pub fn events(&self) -> &[ResizeEvent] {
        &self.events
    }

    /// Get the configuration.
    pub fn config(&self) -> &StormConfig {
        &self.config
    }

    fn generate_events(&mut self) {
        let mut rng = SeededRng::new(self.config.seed);

        let widths = match &self.config.pattern {
            StormPattern::Burst { count } => self.generate_burst(&mut rng, *count),
            StormPattern::Sweep {
                start_width,
                end_width,
                steps,
            } => Self::generate_sweep(*start_width, *end_width, *steps),
            StormPattern::Oscillate {
                width_a,
                width_b,
                cycles,
            } => (0..*cycles).flat_map(|_| [*width_a, *width_b]).collect(),
            StormPattern::Pathological { count } => self.generate_pathological(&mut rng, *count),
            StormPattern::Custom { widths } => widths.clone(),
        };

        self.events = widths
            .into_iter()
            .enumerate()
            .map(|(index, width)| ResizeEvent { width, index })
            .collect();
    }

    fn generate_burst(&self, rng: &mut SeededRng, count: usize) -> Vec<u16> {
        let (min, max) = (self.config.min_width, self.config.max_width.max(self.config.min_width));
        let mut width = self.config.initial_width.clamp(min, max);
        let mut widths = Vec::with_capacity(count);

        for _ in 0..count {
            if rng.chance(0.7) {
                let delta = rng.next_u16_range(1, 12);
                width = if rng.chance(0.5) {
                    width.saturating_add(delta)
                } else {
                    width.saturating_sub(delta)
                }
                .clamp(min, max);
            }
            widths.push(width);
        }
        widths
    }

    fn generate_sweep(start: u16, end: u16, steps: usize) -> Vec<u16> {
        (0..steps)
            .map(|i| {
                let t = if steps > 1 {
                    i as f64 / (steps - 1) as f64
                } else {
                    1.0
                };
                (f64::from(start) + (f64::from(end) - f64::from(start)) * t).round() as u16
            })
            .collect()
    }

    fn generate_pathological(&self, rng: &mut SeededRng, count: usize) -> Vec<u16> {
        let mut widths = Vec::with_capacity(count);
        let mut last = self.config.initial_width;

        for i in 0..count {
            let width = match i % 6 {
                0 => 0,
                1 => 1,
                2 => self.config.max_width,
                3 => last.saturating_add(1),
                4 => last.saturating_sub(1),
                _ => rng.next_u16_range(self.config.min_width, self.config.max_width),
            };
            widths.push(width);
            last = width;
        }
        widths
    }

    /// Compute a deterministic checksum of the event sequence.
    pub fn sequence_checksum(&self) -> String {
        let mut hasher = DefaultHasher::new();
        for event in &self.events {
            event.hash(&mut hasher);
        }
        format!("{:016x}", hasher.finish())
    }
}

// ============================================================================
// JSONL Logger
// ============================================================================

/// JSONL logger for storm replay.
#[derive(Debug, Default)]
pub struct StormLogger {
    lines: Vec<String>,
}

impl StormLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, value: serde_json::Value) {
        self.lines.push(value.to_string());
    }

    /// Log storm start.
    pub fn log_start(&mut self, storm: &ResizeStorm, story: &Story) {
        self.push(json!({
            "event": "storm_start",
            "run_id": storm.run_id(),
            "case": storm.config.case_name,
            "seed": storm.config.seed,
            "pattern": storm.config.pattern.name(),
            "event_count": storm.events.len(),
            "items": story.items.len(),
        }));
    }

    /// Log one replayed step.
    pub fn log_step(&mut self, step: &StepRecord) {
        self.push(json!({
            "event": "storm_resize",
            "idx": step.index,
            "width": step.width,
            "skipped": step.skipped,
            "content": step.content,
            "solves": step.solves,
            "row": step.row,
        }));
    }

    /// Log a failed check.
    pub fn log_violation(&mut self, violation: &Violation) {
        self.push(json!({
            "event": "storm_violation",
            "idx": violation.index,
            "check": violation.check,
            "message": violation.message,
        }));
    }

    /// Log storm completion.
    pub fn log_complete(&mut self, outcome: &str, total_resizes: usize, solves: u64, checksum: &str) {
        self.push(json!({
            "event": "storm_complete",
            "outcome": outcome,
            "total_resizes": total_resizes,
            "solves": solves,
            "checksum": checksum,
        }));
    }

    /// Get all log lines as JSONL.
    pub fn to_jsonl(&self) -> String {
        self.lines.join("\n")
    }
}

// ============================================================================
// Replay
// ============================================================================

/// What one replayed step produced.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    /// Index in the sequence.
    pub index: usize,
    /// Row width.
    pub width: u16,
    /// Retained skip count after rendering.
    pub skipped: usize,
    /// Measured width of the visible row.
    pub content: f32,
    /// Cumulative solver runs.
    pub solves: u64,
    /// Rendered row text.
    pub row: String,
}

/// A failed per-step check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Index in the sequence.
    pub index: usize,
    /// Check name (`fit`, `bounds`, `settled`, `stable`).
    pub check: &'static str,
    /// Human-readable detail.
    pub message: String,
}

/// Result of replaying a resize storm.
#[derive(Debug)]
pub struct StormResult {
    /// Whether every step passed every check.
    pub passed: bool,
    /// Total resize events replayed.
    pub total_resizes: usize,
    /// Solver runs during the replay.
    pub solves: u64,
    /// Per-step records.
    pub steps: Vec<StepRecord>,
    /// Failed checks.
    pub violations: Vec<Violation>,
    /// Sequence checksum for replay verification.
    pub sequence_checksum: String,
    /// Checksum over every rendered row.
    pub output_checksum: String,
    /// JSONL log.
    pub jsonl: String,
}

impl StormResult {
    /// Panic with a readable report if any check failed.
    pub fn assert_passed(&self) {
        if self.passed {
            return;
        }
        let mut msg = String::new();
        msg.push_str("\n=== Resize Storm Failed ===\n\n");
        let _ = writeln!(msg, "Resizes: {}", self.total_resizes);
        let _ = writeln!(msg, "Solves: {}", self.solves);
        msg.push_str("\nViolations:\n");
        for violation in &self.violations {
            let _ = writeln!(
                msg,
                "  - [{}] step {}: {}",
                violation.check, violation.index, violation.message
            );
        }
        msg.push_str("\nJSONL Log:\n");
        msg.push_str(&self.jsonl);
        panic!("{msg}");
    }
}

/// Replay `storm` against `story` with a fresh [`CollapseState`].
pub fn replay(storm: &ResizeStorm, story: &Story) -> StormResult {
    let mut state = CollapseState::new();
    replay_with_state(storm, story, &mut state)
}

/// Replay `storm` against `story`, continuing from `state`.
pub fn replay_with_state(storm: &ResizeStorm, story: &Story, state: &mut CollapseState) -> StormResult {
    let mut logger = StormLogger::new();
    logger.log_start(storm, story);

    let config = story.config();
    let len = story.items.len();
    let interior = config.interior(len);
    let solves_before = state.stats().solves;

    let mut steps = Vec::with_capacity(storm.events().len());
    let mut violations = Vec::new();
    let mut output_hasher = DefaultHasher::new();
    let mut previous: Option<(u16, usize)> = None;

    for event in storm.events() {
        let grew = previous.is_some_and(|(width, hidden)| event.width > width && hidden > 0);
        let buf = story.render(event.width, state);
        let row = buf.row_text(0);
        row.hash(&mut output_hasher);

        let mut fail = |check: &'static str, message: String| {
            let violation = Violation {
                index: event.index,
                check,
                message,
            };
            logger.log_violation(&violation);
            violations.push(violation);
        };

        let skipped = state.skipped();
        if skipped > interior {
            fail("bounds", format!("skipped {skipped} exceeds interior {interior}"));
        }

        let content = match story.measure(event.width) {
            Some(snapshot) => {
                let width = f32::from(event.width);
                let content = snapshot.projected_width(&state.projection(len));
                let floor = snapshot.projected_width(&Projection::new(len, &config, usize::MAX));
                if content > width && floor < width {
                    fail("fit", format!("row {content} wider than {width} (floor {floor})"));
                }

                // A shrink that still fits keeps the old decision.
                let fresh = solve_snapshot(&snapshot, &config).skipped;
                if fresh != skipped && (grew || content > width) {
                    fail("settled", format!("retained {skipped}, fresh solve {fresh}"));
                }
                content
            }
            None => 0.0,
        };

        let again = story.render(event.width, state).row_text(0);
        if again != row {
            fail("stable", format!("{row:?} then {again:?}"));
        }

        let step = StepRecord {
            index: event.index,
            width: event.width,
            skipped,
            content,
            solves: state.stats().solves - solves_before,
            row,
        };
        logger.log_step(&step);
        steps.push(step);
        previous = Some((event.width, skipped));
    }

    let passed = violations.is_empty();
    let solves = state.stats().solves - solves_before;
    let sequence_checksum = storm.sequence_checksum();
    logger.log_complete(
        if passed { "pass" } else { "fail" },
        steps.len(),
        solves,
        &sequence_checksum,
    );

    StormResult {
        passed,
        total_resizes: steps.len(),
        solves,
        steps,
        violations,
        sequence_checksum,
        output_checksum: format!("{:016x}", output_hasher.finish()),
        jsonl: logger.to_jsonl(),
    }
}
