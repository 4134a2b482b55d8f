// Fixture tests for `devx highlight`
use libtest_mimic::{run, Arguments, Failed, Trial};
use std::fs;
use std::path::Path;

mod common;
use common::{devx_cmd, validate_json_output};

const INPUT_ROOT: &str = "tests/highlight/input";
const EXPECTED_ROOT: &str = "tests/highlight/expected";

fn main() {
    let args = Arguments::from_args();

    let mut trials = Vec::new();
    collect_tests(Path::new(INPUT_ROOT), Path::new(""), &mut trials);

    run(&args, trials).exit();
}

fn collect_tests(base_dir: &Path, relative_dir: &Path, trials: &mut Vec<Trial>) {
    let current_dir = base_dir.join(relative_dir);
    let Ok(entries) = fs::read_dir(&current_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if path.is_dir() {
            collect_tests(base_dir, &relative_dir.join(file_name), trials);
            continue;
        }

        let file_stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        let dir_str = relative_dir.to_string_lossy().to_string();
        let test_name = if dir_str.is_empty() {
            file_stem.clone()
        } else {
            let safe_dir = dir_str.replace(std::path::MAIN_SEPARATOR, "_");
            format!("{safe_dir}_{file_stem}")
        };
        let input_file = path.to_string_lossy().to_string();

        trials.push(Trial::test(test_name, move || {
            run_fixture(&input_file, &dir_str, &file_stem)
        }));
    }
}

fn run_fixture(input_file: &str, dir_name: &str, file_stem: &str) -> Result<(), Failed> {
    let expected_base = Path::new(EXPECTED_ROOT).join(dir_name).join(file_stem);
    let expected_json = expected_base.with_extension("json");
    let expected_text = expected_base.with_extension("txt");

    let mut cmd = devx_cmd();
    cmd.args(["highlight", "--source", input_file, "--output", "json"]);
    if let Some(language) = extract_marker(file_stem, "__lang_") {
        cmd.args(["--language", &language]);
    }

    let output = cmd
        .output()
        .map_err(|e| format!("Failed to execute command: {e}"))?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let expected_code =
        extract_marker(file_stem, "__code_").and_then(|code| code.parse::<i32>().ok());
    let actual_code = output.status.code().unwrap_or(-1);
    if actual_code != expected_code.unwrap_or(0) {
        return Err(format!(
            "Exit code mismatch! Expected: {}, Actual: {actual_code}\nstderr: {stderr}",
            expected_code.unwrap_or(0)
        )
        .into());
    }

    if expected_json.exists() {
        validate_json_output(&stdout, &expected_json).map_err(Failed::from)?;
    } else if expected_text.exists() {
        let expected_content = fs::read_to_string(&expected_text)
            .map_err(|e| format!("Failed to read expected file {expected_text:?}: {e}"))?;
        let actual_output = if stderr.is_empty() { &stdout } else { &stderr };
        if actual_output.trim() != expected_content.trim() {
            return Err(format!(
                "Output mismatch!\nExpected:\n{}\n\nActual:\n{}",
                expected_content.trim(),
                actual_output.trim()
            )
            .into());
        }
    } else {
        return Err(format!("No expected output for {input_file}").into());
    }

    Ok(())
}

/// Value between `marker` and the next `__` in a fixture name, e.g.
/// `header__lang_cpp__` gives `cpp` for `__lang_`.
fn extract_marker(name: &str, marker: &str) -> Option<String> {
    let pos = name.find(marker)?;
    let after = &name[pos + marker.len()..];
    let end = after.find("__").unwrap_or(after.len());
    Some(after[..end].to_string())
}
