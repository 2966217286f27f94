//! Integration tests for the respgen CLI

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_generate_command() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("generated/requestTypes.ts");
    let mut cmd = Command::cargo_bin("respgen").unwrap();

    cmd.arg("generate")
        .arg("--operations")
        .arg(fixture("operations.json"))
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("export type GetThingT"));
    assert!(content.contains("export function getThingDecoder"));
}

#[test]
fn test_generate_command_no_decoders() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("requestTypes.ts");
    let mut cmd = Command::cargo_bin("respgen").unwrap();

    cmd.arg("generate")
        .arg("--operations")
        .arg(fixture("operations.json"))
        .arg("--out")
        .arg(&out)
        .arg("--no-decoders")
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("export type GetThingT"));
    assert!(!content.contains("getThingDecoder"));
}

#[test]
fn test_generate_command_with_config_and_template() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("respgen.toml");
    std::fs::write(
        &config,
        "definitions_path = \"./definitions\"\nexclude_operations = [\"dropThing\"]\n",
    )
    .unwrap();
    let template = temp_dir.path().join("layout.ts.tera");
    std::fs::write(
        &template,
        "// custom layout\n{% for line in imports %}{{ line }}\n{% endfor %}{% for operation in operations %}{{ operation }}\n{% endfor %}",
    )
    .unwrap();
    let out = temp_dir.path().join("requestTypes.ts");

    let mut cmd = Command::cargo_bin("respgen").unwrap();
    cmd.arg("generate")
        .arg("--operations")
        .arg(fixture("operations.json"))
        .arg("--out")
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .arg("--template")
        .arg(&template)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("// custom layout\n"));
    assert!(content.contains("import { Thing } from \"./definitions/Thing\";"));
    assert!(!content.contains("DropThingT"));
}

#[cfg(unix)]
#[test]
fn test_generate_command_with_formatter() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("requestTypes.ts");
    let mut cmd = Command::cargo_bin("respgen").unwrap();

    cmd.arg("generate")
        .arg("--operations")
        .arg(fixture("operations.json"))
        .arg("--out")
        .arg(&out)
        .arg("--format-command")
        .arg("tr a-z A-Z")
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("EXPORT TYPE GETTHINGT"));
}

#[cfg(unix)]
#[test]
fn test_generate_command_failing_formatter() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("requestTypes.ts");
    let mut cmd = Command::cargo_bin("respgen").unwrap();

    cmd.arg("generate")
        .arg("--operations")
        .arg(fixture("operations.json"))
        .arg("--out")
        .arg(&out)
        .arg("--format-command")
        .arg("echo 'SyntaxError' >&2; exit 2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SyntaxError"));

    assert!(!out.exists());
}

#[test]
fn test_generate_command_missing_operations() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("respgen").unwrap();

    cmd.arg("generate")
        .arg("--operations")
        .arg(temp_dir.path().join("missing.json"))
        .arg("--out")
        .arg(temp_dir.path().join("requestTypes.ts"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to generate request types"));
}

#[test]
fn test_inspect_command() {
    let mut cmd = Command::cargo_bin("respgen").unwrap();

    cmd.arg("inspect")
        .arg("--operations")
        .arg(fixture("operations.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("getThing GET [200, 404] decoder on 200"))
        .stdout(predicate::str::contains("createThing POST [201, 500] decoder on 201"))
        .stdout(predicate::str::contains("dropThing DELETE [500] no decoder block"))
        .stdout(predicate::str::contains("(1 absent operation(s) skipped)"));
}
