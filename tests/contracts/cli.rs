//! CLI contracts: exit codes and machine-readable output.

use crate::common::*;

/// CONTRACT: a rejected entry exits non-zero and leaves nothing on disk.
#[test]
fn contract_rejected_entry_fails() {
    let env = TestEnv::new();
    let result = env.run(&["set", "1", "ones", "7", "--json"]);
    assert_eq!(result.exit_code, 1, "{}", result.combined_output());

    let json = result.json();
    assert_eq!(json["event"], "entry");
    assert_eq!(json["entry"]["accepted"], false);
    assert_eq!(json["entry"]["reason"], "exceeds the maximum of 6");
    assert!(json["board"]["entries"]["ones"].is_null());
    assert!(!env.state_path().exists());
}

/// CONTRACT: errors in --json mode are a single error event on stdout.
#[test]
fn contract_json_errors_are_events() {
    let env = TestEnv::new();
    let result = env.run(&["set", "Nobody", "ones", "3", "--json"]);
    assert!(!result.success);
    let json = result.json();
    assert_eq!(json["event"], "error");
    assert_eq!(json["message"], "unknown board 'Nobody'");
}

/// CONTRACT: bulk destruction without a terminal needs --yes.
#[test]
fn contract_bulk_actions_require_confirmation() {
    let env = TestEnv::new();
    assert!(env.run(&["set", "1", "chance", "20"]).success);

    for args in [
        &["reset", "--all"][..],
        &["clear-boards"][..],
        &["preset", "three"][..],
    ] {
        let result = env.run(args);
        assert!(!result.success, "{:?} should be refused", args);
        assert!(result.stderr.contains("--yes"), "{}", result.stderr);
    }

    let show = env.run(&["show", "--json"]).json();
    assert_eq!(show["boards"].as_array().unwrap().len(), 4);
    assert_eq!(show["sessionTotal"], 20);
}

/// CONTRACT: `show` is the default command and is read-only.
#[test]
fn contract_show_is_default_and_read_only() {
    let env = TestEnv::new();
    let result = env.run(&["--json"]);
    assert!(result.success, "{}", result.stderr);
    let json = result.json();
    assert_eq!(json["mode"], "multipiste");
    let names: Vec<&str> = json["boards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Descente", "Montée", "Libre", "Premier"]);
    assert!(!env.state_path().exists());
}
