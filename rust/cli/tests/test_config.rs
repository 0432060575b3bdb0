use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const KEYS: [&str; 4] = ["CRIB_CONFIG", "CRIB_FORMAT", "CRIB_UNICODE", "CRIB_LOG"];

struct EnvGuard;

impl EnvGuard {
    fn clean() -> Self {
        for key in KEYS {
            unsafe {
                std::env::remove_var(key);
            }
        }
        EnvGuard
    }

    fn set(&self, key: &str, value: &str) {
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in KEYS {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }
}

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

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    let _env = EnvGuard::clean();
    let (code, out, _) = run(&["cfg"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["format"]["value"], "text");
    assert_eq!(json["format"]["source"], "default");
    assert_eq!(json["log_level"]["value"], "warn,crib_engine=info");
    assert_eq!(json["unicode"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    let env = EnvGuard::clean();
    let file = config_file("format = \"json\"\nunicode = false\nlog_level = \"debug\"\n");
    env.set("CRIB_CONFIG", file.path().to_str().unwrap());
    env.set("CRIB_UNICODE", "yes");

    let (code, out, _) = run(&["cfg"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["format"]["value"], "json");
    assert_eq!(json["format"]["source"], "file");
    assert_eq!(json["unicode"]["value"], true);
    assert_eq!(json["unicode"]["source"], "env");
    assert_eq!(json["log_level"]["value"], "debug");
    assert_eq!(json["log_level"]["source"], "file");
}

#[test]
#[serial]
fn configured_format_applies_to_eval() {
    let env = EnvGuard::clean();
    env.set("CRIB_FORMAT", "json");
    env.set("CRIB_UNICODE", "false");

    let (code, out, _) = run(&["eval", "KS", "5H"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["total"], 2);

    let (code, out, _) = run(&["eval", "--format", "text", "KS", "5H"]);
    assert_eq!(code, 0);
    assert_eq!(out, "Fifteen: 2 [KS 5H]\nTotal: 2\n");
}

#[test]
#[serial]
fn ascii_suits_when_unicode_disabled() {
    let env = EnvGuard::clean();
    env.set("CRIB_UNICODE", "off");
    let (code, out, _) = run(&["sequences", "AS", "2H", "3D"]);
    assert_eq!(code, 0);
    assert_eq!(out, "[AS 2H 3D]\n");

    env.set("CRIB_UNICODE", "on");
    let (_, out, _) = run(&["sequences", "AS", "2H", "3D"]);
    assert_eq!(out, "[A♠ 2♥ 3♦]\n");
}

#[test]
#[serial]
fn invalid_env_value_fails() {
    let env = EnvGuard::clean();
    env.set("CRIB_UNICODE", "sometimes");
    let (code, out, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Invalid unicode"));

    let (code, _, err) = run(&["eval", "AS"]);
    assert_eq!(code, 2);
    assert!(err.starts_with("Error: Configuration error"));
}

#[test]
#[serial]
fn unknown_file_key_fails() {
    let env = EnvGuard::clean();
    let file = config_file("colour = \"red\"\n");
    env.set("CRIB_CONFIG", file.path().to_str().unwrap());
    let (code, _, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}

#[test]
#[serial]
fn missing_file_fails() {
    let env = EnvGuard::clean();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    env.set("CRIB_CONFIG", path.to_str().unwrap());
    let (code, _, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"));
}
