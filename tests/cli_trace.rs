use std::process::Command;

fn run_call(int_param: &str, float_param: &str) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_cmult"))
        .args(["call", "--int", int_param, "--float", float_param])
        .output()
        .expect("failed to run cmult binary");

    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn test_trace_line_is_exact() {
    let stdout = run_call("3", "4.0");

    assert_eq!(
        stdout,
        "    In cmult: int: 3 float 4.0 returning  12.0\n    In Rust: int: 3 float 4.0 return val 12.0\n\n"
    );
}

#[test]
fn test_negative_operand() {
    let stdout = run_call("-2", "5.5");

    assert_eq!(stdout.lines().next(), Some("    In cmult: int: -2 float 5.5 returning  -11.0"));
}

#[test]
fn test_special_values_are_traced_not_rejected() {
    let stdout = run_call("-2", "inf");

    assert_eq!(stdout.lines().next(), Some("    In cmult: int: -2 float inf returning  -inf"));
}

#[test]
fn test_library_call_returns_product() {
    assert_eq!(cmult::cmult(6, 2.3), cmult::multiply(6, 2.3));
    assert_eq!(cmult::cmult(3, 4.0), 12.0);
}
