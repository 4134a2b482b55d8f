#![allow(dead_code)]
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

pub fn devx_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_devx"));
    cmd.env_remove("DEVX_LANGUAGE").env_remove("RUST_LOG");
    cmd
}

pub fn run_devx(args: &[&str]) -> Output {
    devx_cmd()
        .args(args)
        .output()
        .expect("Failed to execute devx")
}

pub fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => {
            for (k, v) in exp_map {
                match act_map.get(k) {
                    Some(act_v) if json_subset(v, act_v) => {}
                    _ => return false,
                }
            }
            true
        }
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            exp_arr.len() == act_arr.len()
                && exp_arr.iter().zip(act_arr).all(|(e, a)| json_subset(e, a))
        }
        (Value::String(s), _) if s == "{{*}}" => true,
        (Value::String(s), Value::String(a)) if s.starts_with("{{regex:") && s.ends_with("}}") => {
            let pattern = &s[8..s.len() - 2];
            regex::Regex::new(pattern).is_ok_and(|re| re.is_match(a))
        }
        _ => expected == actual,
    }
}

pub fn validate_json_output(stdout: &str, expected_path: &Path) -> Result<(), String> {
    let expected_content = fs::read_to_string(expected_path)
        .map_err(|e| format!("Failed to read expected file: {e}"))?;
    let expected_json: Value = serde_json::from_str(&expected_content)
        .map_err(|e| format!("Failed to parse expected JSON: {e}"))?;
    let actual_json: Value = serde_json::from_str(stdout)
        .map_err(|e| format!("Failed to parse output as JSON: {e}\n{stdout}"))?;

    if json_subset(&expected_json, &actual_json) {
        Ok(())
    } else {
        Err(format!(
            "JSON mismatch!\nExpected (subset):\n{}\n\nActual:\n{}",
            serde_json::to_string_pretty(&expected_json).unwrap_or_default(),
            serde_json::to_string_pretty(&actual_json).unwrap_or_default()
        ))
    }
}
