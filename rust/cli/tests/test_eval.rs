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
fn eval_double_run_text() {
    let (code, out, err) = run(&["eval", "4H", "5H", "5S", "6H"]);
    assert_eq!(code, 0, "stderr: {err}");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Double Run: 8 ["));
    assert_eq!(lines[1], "Total: 8");
}

#[test]
fn eval_accepts_symbols_and_commas() {
    let (code, out, _) = run(&["eval", "--format", "json", "J♣,5♣"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["cards"], serde_json::json!(["JC", "5C"]));
}

#[test]
fn eval_royal_flush_json() {
    let (code, out, _) = run(&["eval", "--format", "json", "10S", "JS", "QS", "KS", "AS"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    let titles: Vec<&str> = json["ranks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Royal Flush"]);
    assert_eq!(json["total"], 5);
}

#[test]
fn eval_kinds_only_when_not_a_run() {
    let (code, out, _) = run(&["eval", "9C", "9H", "9S", "KC", "KH"]);
    assert_eq!(code, 0);
    assert!(out.contains("Three of a Kind: 6"));
    assert!(out.contains("Pair: 2"));
    assert!(out.ends_with("Total: 8\n"));
}

#[test]
fn eval_rejects_unparseable_card() {
    let (code, out, err) = run(&["eval", "AS", "1X"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Invalid input"));
}

#[test]
fn sequences_print_one_per_line() {
    let (code, out, _) = run(&["sequences", "AS", "2H", "2C", "3D", "3S"]);
    assert_eq!(code, 0);
    assert_eq!(out.lines().count(), 4);
}
