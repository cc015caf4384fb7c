use std::io::Write;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_thumbview"))
        .args(args)
        .output()
        .expect("Failed to execute thumbview")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "thumbview failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_overflow_resolution() {
    let stdout = stdout_of(&["--natural", "1000x500", "--bounds", "100,200,100,100"]);

    assert!(stdout.contains("target: 200x100"), "unexpected output: {}", stdout);
    assert!(stdout.contains("measure: 200x100 (unspecified, unspecified)"));
    assert!(stdout.contains("load: override 200x100"));
}

#[test]
fn test_padding_and_modes() {
    let stdout = stdout_of(&[
        "--natural",
        "100x50",
        "--bounds",
        "200,400,100,200",
        "--padding",
        "1,2,3,4",
        "--width-mode",
        "at-most",
        "--width",
        "720",
        "--height-mode",
        "exactly",
        "--height",
        "300",
    ]);

    assert!(stdout.contains("target: 200x100"));
    assert!(stdout.contains("measure: 204x106 (at-most, exactly)"));
}

#[test]
fn test_unknown_size_uses_default_measurement() {
    let stdout = stdout_of(&["--natural", "0x0", "--bounds", "10,20,10,20"]);

    assert!(stdout.contains("target: 0x0"));
    assert!(stdout.contains("measure: default"));
    assert!(stdout.contains("load: center-crop"));
}

#[test]
fn test_no_bounds_is_unconstrained() {
    let stdout = stdout_of(&["--natural", "640x480"]);
    assert!(stdout.contains("target: 0x0"));
    assert!(stdout.contains("measure: default"));
}

#[test]
fn test_partial_natural_size_fails() {
    let output = run(&["--natural", "300x0", "--bounds", "10,20,10,20"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Partially specified natural size"), "stderr: {}", stderr);
}

#[test]
fn test_partial_bounds_fail() {
    let output = run(&["--natural", "300x200", "--bounds", "10,0,10,20"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Partially specified bounds"), "stderr: {}", stderr);
}

#[test]
fn test_attributes_file_with_density() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(
        file,
        r#"
min_width = "50dp"
max_width = "100dp"
min_height = "50dp"
max_height = "100dp"
"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let stdout = stdout_of(&["--natural", "1920x1080", "--attributes", path, "--density", "2"]);

    assert!(stdout.contains("target: 200x112"), "unexpected output: {}", stdout);
}

#[test]
fn test_bad_attributes_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "min_width = \"wide\"").unwrap();

    let output = run(&["--natural", "10x10", "--attributes", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load attributes"));
}

#[test]
fn test_rust_log_enables_resolver_tracing() {
    let args = ["--natural", "1000x500", "--bounds", "100,200,100,100"];

    let quiet = Command::new(env!("CARGO_BIN_EXE_thumbview"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute thumbview");
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("overflow, scaling down by"));

    let traced = Command::new(env!("CARGO_BIN_EXE_thumbview"))
        .args(args)
        .env("RUST_LOG", "thumbview_layout=trace")
        .output()
        .expect("Failed to execute thumbview");
    assert!(traced.status.success());
    assert!(String::from_utf8_lossy(&traced.stderr).contains("overflow, scaling down by"));
    assert!(String::from_utf8_lossy(&traced.stdout).contains("target: 200x100"));
}
