//! Resize storm replays over the reference story.
//!
//! ```sh
//! cargo test -p hcollapse-harness --test storm_replay
//! ```

use hcollapse_harness::buffer_to_text;
use hcollapse_harness::resize_storm::{
    ResizeStorm, StormConfig, StormPattern, replay, replay_with_state,
};
use hcollapse_harness::story::{STORY_START_WIDTH, Story};
use hcollapse_widgets::CollapseState;

fn storm(seed: u64, pattern: StormPattern) -> ResizeStorm {
    ResizeStorm::new(
        StormConfig::default()
            .with_seed(seed)
            .with_case_name(format!("{}_{seed}", pattern.name()))
            .with_pattern(pattern),
    )
}

#[test]
fn burst_storms_pass() {
    for seed in 0..16 {
        replay(&storm(seed, StormPattern::Burst { count: 120 }), &Story::default())
            .assert_passed();
    }
}

#[test]
fn pathological_storm_passes() {
    for seed in [0, 42, 1337] {
        replay(
            &storm(seed, StormPattern::Pathological { count: 60 }),
            &Story::default(),
        )
        .assert_passed();
    }
}

#[test]
fn storms_pass_without_placeholder_and_with_wide_keeps() {
    let stories = [
        Story::default().with_placeholder(None),
        Story::default().with_keep(3, 2),
        Story::with_items(2),
        Story::with_items(0),
        Story::with_items(40).with_keep(0, 0),
    ];
    for story in &stories {
        replay(&storm(9, StormPattern::Burst { count: 80 }), story).assert_passed();
        replay(
            &storm(9, StormPattern::Pathological { count: 30 }),
            story,
        )
        .assert_passed();
    }
}

#[test]
fn sweep_down_then_up_restores_everything() {
    let story = Story::default();
    let mut state = CollapseState::new();

    let down = replay_with_state(
        &storm(
            0,
            StormPattern::Sweep {
                start_width: 80,
                end_width: 1,
                steps: 80,
            },
        ),
        &story,
        &mut state,
    );
    down.assert_passed();
    let hidden: Vec<usize> = down.steps.iter().map(|s| s.skipped).collect();
    assert!(hidden.windows(2).all(|w| w[0] <= w[1]), "{hidden:?}");
    assert_eq!(hidden.last(), Some(&8));

    let up = replay_with_state(
        &storm(
            0,
            StormPattern::Sweep {
                start_width: 1,
                end_width: 80,
                steps: 80,
            },
        ),
        &story,
        &mut state,
    );
    up.assert_passed();
    let hidden: Vec<usize> = up.steps.iter().map(|s| s.skipped).collect();
    assert!(hidden.windows(2).all(|w| w[0] >= w[1]), "{hidden:?}");
    assert_eq!(hidden.last(), Some(&0));
}

#[test]
fn shrink_that_still_fits_keeps_decision() {
    // A fresh solve at 12 would hide "b" and "c" behind the wide marker.
    let story = Story {
        items: ["aaaa", "b", "c", "dddd"].map(String::from).to_vec(),
        placeholder: Some("......".to_string()),
        ..Story::default()
    };
    let result = replay(
        &storm(0, StormPattern::Custom { widths: vec![20, 12] }),
        &story,
    );
    result.assert_passed();
    let rows: Vec<(usize, &str)> = result
        .steps
        .iter()
        .map(|s| (s.skipped, s.row.as_str()))
        .collect();
    assert_eq!(rows, [(0, "aaaabcdddd"), (0, "aaaabcdddd")]);
}

#[test]
fn oscillation_is_deterministic() {
    let pattern = StormPattern::Oscillate {
        width_a: STORY_START_WIDTH,
        width_b: 70,
        cycles: 10,
    };
    let a = replay(&storm(5, pattern.clone()), &Story::default());
    let b = replay(&storm(5, pattern), &Story::default());
    a.assert_passed();
    assert_eq!(a.output_checksum, b.output_checksum);
    assert_eq!(a.sequence_checksum, b.sequence_checksum);

    let rows: Vec<&str> = a.steps.iter().take(2).map(|s| s.row.as_str()).collect();
    assert_eq!(
        rows,
        [
            "Child1...Child9Child10",
            "Child1Child2Child3Child4Child5Child6Child7Child8Child9Child10"
        ]
    );
}

#[test]
fn story_snapshot_at_start_width() {
    let story = Story::default();
    let mut state = CollapseState::new();
    let buf = story.render(STORY_START_WIDTH, &mut state);
    assert_eq!(buffer_to_text(&buf), "Child1...Child9Child10   ");
}
