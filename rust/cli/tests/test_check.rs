use serde_json::Value;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["crib"];
    argv.extend_from_slice(args);
    let code = crib_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn check_run_success() {
    let (code, out, _) = run(&["check", "run", "AC", "2H", "3S"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Run: 3 ["));
}

#[test]
fn check_run_with_gap_fails() {
    let (code, out, err) = run(&["check", "run", "AC", "2H", "3S", "9C"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("sequential"), "stderr: {err}");
}

#[test]
fn check_fifteen_reports_total() {
    let (code, out, _) = run(&["check", "fifteen", "--format", "json", "10C", "4H"]);
    assert_eq!(code, 2);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["check"], "fifteen");
    assert_eq!(json["category"], "handrank");
}

#[test]
fn check_nobs() {
    let (code, out, _) = run(&["check", "nobs", "JD", "7D"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Nobs: 1"));

    let (code, _, _) = run(&["check", "nobs", "JD", "JH"]);
    assert_eq!(code, 2);
}

#[test]
fn check_kinds_four_of_a_kind() {
    let (code, out, _) = run(&["check", "kinds", "QC", "QD", "QH", "QS"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Four of a Kind: 12"));
}

#[test]
fn check_flush_too_many_cards() {
    let (code, out, _) = run(&[
        "check", "flush", "--format", "json", "AH", "2H", "3H", "4H", "5H", "6H",
    ]);
    assert_eq!(code, 2);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["category"], "elements");
}

#[test]
fn unknown_detector_is_usage_error() {
    let (code, out, err) = run(&["check", "straight", "AC", "2C"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: crib"));
}
