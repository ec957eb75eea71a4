//! End-to-end game loop test: config line in, action stacks out.

use rampart_bot::{AppConfig, Application};
use serde_json::json;
use std::io::Cursor;

fn config_line() -> String {
    json!({
        "unitInformation": [
            {"shorthand": "FF", "cost1": 1.0},
            {"shorthand": "EF", "cost1": 1.0},
            {"shorthand": "DF", "cost1": 1.0, "attackDamageWalker": 5.0, "attackRange": 3.5},
            {"shorthand": "PI", "cost2": 1.0},
            {"shorthand": "EI", "cost2": 3.0},
            {"shorthand": "SI", "cost2": 1.0}
        ]
    })
    .to_string()
}

fn deploy_frame(turn: u32, structure: f64, mobile: f64) -> String {
    json!({
        "turnInfo": [0, turn, -1],
        "p1Stats": [30.0, structure, mobile, 0.0],
        "p2Stats": [30.0, 0.0, 0.0, 0.0],
        "p1Units": [[], [], [], [], [], [], [], []],
        "p2Units": [[], [], [], [], [], [], [], []]
    })
    .to_string()
}

fn breach_frame(turn: u32, hits: &[(i32, i32)]) -> String {
    let rows: Vec<serde_json::Value> = hits
        .iter()
        .map(|&(x, y)| json!([[x, y], 1.0, 3, "7", 2]))
        .collect();
    json!({
        "turnInfo": [1, turn, 3],
        "p1Stats": [30.0, 0.0, 0.0, 0.0],
        "events": { "breach": rows }
    })
    .to_string()
}

fn end_frame() -> String {
    json!({ "turnInfo": [2, 2, -1] }).to_string()
}

fn run_game(lines: &[String]) -> Vec<String> {
    let input = lines.join("\n");
    let mut out = Vec::new();
    let mut app = Application::new(AppConfig::default());
    app.run_on(Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn each_turn_submits_build_then_deploy_stack() {
    let lines = run_game(&[
        config_line(),
        deploy_frame(0, 20.0, 5.0),
        end_frame(),
    ]);
    assert_eq!(lines.len(), 2);

    // Baseline defense puts walls and turrets on the build stack.
    assert!(lines[0].contains("\"FF\""));
    assert!(lines[0].contains("\"DF\""));

    // Below the rush threshold only the saturating wave fires: five scouts
    // at the left launch candidate (both lanes tie at zero exposure).
    let deploy: Vec<(String, i32, i32)> = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(deploy.len(), 5);
    assert!(deploy.iter().all(|o| o == &("PI".to_string(), 10, 3)));
}

#[test]
fn rush_wave_joins_the_deploy_stack_at_threshold() {
    let lines = run_game(&[
        config_line(),
        deploy_frame(0, 0.0, 15.0),
        end_frame(),
    ]);
    let deploy: Vec<(String, i32, i32)> = serde_json::from_str(&lines[1]).unwrap();
    // Ten scouts at the lane spawn, then the remaining five at the launch cell.
    assert_eq!(deploy.len(), 15);
    assert_eq!(deploy[0], ("PI".to_string(), 13, 0));
    assert_eq!(deploy[14], ("PI".to_string(), 10, 3));
}

#[test]
fn breaches_steer_the_next_turn_toward_the_hit_sector() {
    let lines = run_game(&[
        config_line(),
        deploy_frame(0, 0.0, 0.0),
        breach_frame(0, &[(20, 2), (22, 4)]),
        deploy_frame(1, 30.0, 0.0),
        end_frame(),
    ]);
    assert_eq!(lines.len(), 4);
    // Turn 1's repair pass walks the bottom-right plan well past the
    // baseline entries.
    assert!(lines[2].contains("[\"DF\",16,6]"));
}

#[test]
fn malformed_lines_are_skipped_without_aborting() {
    let lines = run_game(&[
        config_line(),
        "{not json".to_string(),
        deploy_frame(0, 5.0, 0.0),
        end_frame(),
    ]);
    assert_eq!(lines.len(), 2);
}
