#![cfg(feature = "cli")]

use std::process::{Command, Stdio};

fn play(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_seabattle"))
        .arg("play")
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run seabattle binary")
}

#[test]
fn board_size_out_of_range_is_rejected() {
    for args in [
        ["--width", "0"],
        ["--height", "0"],
        ["--width", "100"],
        ["--width", "300"],
    ] {
        let output = play(&args);
        assert!(!output.status.success(), "{args:?} accepted");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--"), "{stderr}");
    }
}

#[test]
fn capped_placement_on_small_board_fails_instead_of_hanging() {
    let output = play(&["--width", "5", "--height", "5", "--placement-attempts", "50"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unable to place"), "{stderr}");
}

#[test]
fn wide_board_plays_until_input_ends() {
    let output = play(&["--width", "30", "--seed", "4"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" AD"));
}
