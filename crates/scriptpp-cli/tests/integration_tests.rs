use std::fs;

use pretty_assertions::assert_eq;
use scriptpp_cli::{command, run, write_output, CliOptions, OutputFormat};
use scriptpp_core::LineEnding;
use tempfile::TempDir;

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("main.csx"),
        "#r \"My.dll\"\n#load \"util.csx\"\nusing System;\nConsole.WriteLine(Util.Name);\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("util.csx"),
        concat!(
            "#r \"My2.dll\"\n",
            "using System;\n",
            "using System.IO;\n",
            "static class Util { public const string Name = \"util\"; }\n",
        ),
    )
    .unwrap();
    temp_dir
}

fn options(temp_dir: &TempDir) -> CliOptions {
    let mut options = CliOptions::new("main.csx");
    options.config.base_dir = temp_dir.path().to_path_buf();
    options.config.line_ending = LineEnding::Lf;
    options
}

#[test]
fn test_text_output() {
    let temp_dir = project();

    let output = run(&options(&temp_dir)).unwrap();

    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec![
            "#r \"My.dll\"",
            "#r \"My2.dll\"",
            "using System;",
            "using System.IO;",
            "static class Util { public const string Name = \"util\"; }",
            "Console.WriteLine(Util.Name);",
        ]
    );
}

#[test]
fn test_json_output() {
    let temp_dir = project();
    let mut options = options(&temp_dir);
    options.format = OutputFormat::Json;

    let output = run(&options).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["references"].as_array().unwrap().len(), 2);
    assert_eq!(json["imports"][1], "using System.IO;");
    assert_eq!(json["loaded_files"][0], "main.csx");
    assert_eq!(json["loaded_files"][1], "util.csx");
}

#[test]
fn test_crlf_output() {
    let temp_dir = project();
    let mut options = options(&temp_dir);
    options.config.line_ending = LineEnding::CrLf;

    let output = run(&options).unwrap();

    assert!(output.starts_with("#r \"My.dll\"\r\n#r \"My2.dll\"\r\n"));
    assert_eq!(output.matches("\r\n").count(), 5);
}

#[test]
fn test_missing_entry_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let mut options = options(&temp_dir);
    options.file = "absent.csx".to_string();

    let err = run(&options).unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("Failed to preprocess absent.csx"));
    assert!(message.contains("Source not found: absent.csx"));
}

#[test]
fn test_options_from_command_line() {
    let temp_dir = project();
    let base_dir = temp_dir.path().to_str().unwrap();

    let matches = command()
        .try_get_matches_from([
            "scriptpp",
            "main.csx",
            "--base-dir",
            base_dir,
            "--line-ending",
            "lf",
        ])
        .unwrap();
    let options = CliOptions::from_matches(&matches).unwrap();
    let output = run(&options).unwrap();

    assert!(output.starts_with("#r \"My.dll\"\n"));
    assert!(output.ends_with("Console.WriteLine(Util.Name);"));
}

#[test]
fn test_writes_output_file_with_line_ending() {
    let temp_dir = project();
    let out_path = temp_dir.path().join("out").join("flat.csx");
    fs::create_dir(temp_dir.path().join("out")).unwrap();

    let mut options = options(&temp_dir);
    options.config.line_ending = LineEnding::CrLf;
    options.output = Some(out_path.clone());

    let output = run(&options).unwrap();
    write_output(&options, &output).unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, format!("{output}\r\n"));
    assert!(written.ends_with("Console.WriteLine(Util.Name);\r\n"));
    assert_eq!(written.matches("\r\n").count(), 6);
}

#[test]
fn test_output_to_unwritable_path_fails() {
    let temp_dir = project();
    let mut options = options(&temp_dir);
    options.output = Some(temp_dir.path().join("missing").join("flat.csx"));

    let err = write_output(&options, "Main();").unwrap_err();

    assert!(format!("{err:#}").contains("Failed to write"));
}
