mod utils;

use envbuilder::cli::{Args, RunOutcome, Runner};
use envbuilder::error::Error;
use envbuilder::prompt::StreamChannel;
use clap::Parser;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use utils::write_manifest;

const MANIFEST: &str = r#"{
    "loadEnv": true,
    "questions": [
        {"name": "name", "prompt": "What is your name?", "required": true},
        {"name": "age", "prompt": "How old are you?", "default": "18"}
    ]
}"#;

fn args(project: &Path, extra: &[&str]) -> Args {
    let project = project.to_str().unwrap();
    Args::parse_from(["envbuilder", project].into_iter().chain(extra.iter().copied()))
}

fn run_piped(args: Args, input: &str) -> (envbuilder::error::Result<RunOutcome>, String) {
    let mut output = Vec::new();
    let result = Runner::new(args).run_with(StreamChannel::new(Cursor::new(input), &mut output));
    (result, String::from_utf8(output).unwrap())
}

#[test_log::test]
fn piped_answers_build_env_file() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), MANIFEST);

    let (result, output) = run_piped(args(dir.path(), &[]), "bill\n\n");

    let env_file = dir.path().join(".env");
    assert_eq!(result.unwrap(), RunOutcome::Written { env_file: env_file.clone(), saved: true });
    assert_eq!(fs::read_to_string(&env_file).unwrap(), "name=bill\nage=18\n");
    assert_eq!(
        output,
        format!(
            "What is your name? (): How old are you? (18): Answers saved to {}\n",
            env_file.display()
        )
    );
}

#[test_log::test]
fn existing_env_file_is_left_alone_without_force() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), MANIFEST);
    fs::write(dir.path().join(".env"), "name=jack\nage=44\n").unwrap();

    let (result, output) = run_piped(args(dir.path(), &[]), "bill\n\n");

    let env_file = dir.path().join(".env");
    assert_eq!(result.unwrap(), RunOutcome::Skipped { env_file: env_file.clone() });
    assert_eq!(output, format!("Env file `{}` already exists, skipping...\n", env_file.display()));
    assert_eq!(fs::read_to_string(&env_file).unwrap(), "name=jack\nage=44\n");
}

#[test_log::test]
fn force_merges_existing_values() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), MANIFEST);
    fs::write(dir.path().join(".env"), "name=jack\nage=44\nunrelated=x\n").unwrap();

    let (result, output) = run_piped(args(dir.path(), &["--force"]), "\nbill\n");

    assert!(matches!(result.unwrap(), RunOutcome::Written { saved: true, .. }));
    assert!(output.starts_with("What is your name? (jack): How old are you? (44): "));
    assert_eq!(fs::read_to_string(dir.path().join(".env")).unwrap(), "name=jack\nage=bill\n");
}

#[test_log::test]
fn closed_input_exhausts_required_question() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), MANIFEST);

    let (result, output) = run_piped(args(dir.path(), &[]), "");

    assert!(matches!(result, Err(Error::AskFailed { ref name, attempts: 3 }) if name == "name"));
    assert_eq!(output.matches("A response is required...").count(), 3);
    assert!(!dir.path().join(".env").exists());
}

#[test_log::test]
fn invalid_question_fails_before_prompting() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(
        dir.path(),
        r#"{"questions": [{"name": "name", "prompt": "Name?"}, {"name": "age"}]}"#,
    );

    let (result, output) = run_piped(args(dir.path(), &["--force"]), "bill\n44\n");

    assert!(matches!(
        result,
        Err(Error::MissingQuestionField { index: 1, ref field }) if field == "prompt"
    ));
    assert!(output.is_empty());
}

#[test_log::test]
fn unknown_option_fails_before_prompting() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), r#"{"verbose": "yes", "questions": []}"#);

    let (result, output) = run_piped(args(dir.path(), &[]), "");

    assert!(matches!(result, Err(Error::ConfigurationError { ref key, .. }) if key == "verbose"));
    assert!(output.is_empty());
}

#[test_log::test]
fn explicit_manifest_and_env_file_paths() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("setup.yml");
    fs::write(
        &manifest,
        concat!(
            "uppercaseKeys: true\nquestions:\n",
            "  - name: db_host\n    prompt: Database host?\n    default: localhost\n",
        ),
    )
    .unwrap();
    let env_file = dir.path().join("app.env");

    let (result, output) = run_piped(
        args(
            dir.path(),
            &["--manifest", manifest.to_str().unwrap(), "--env-file", env_file.to_str().unwrap()],
        ),
        "\n",
    );

    assert!(matches!(result.unwrap(), RunOutcome::Written { saved: true, .. }));
    assert!(output.starts_with("Database host? (localhost): "));
    assert_eq!(fs::read_to_string(&env_file).unwrap(), "DB_HOST=localhost\n");
}

#[test_log::test]
fn unwritable_env_file_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), MANIFEST);
    let env_file = dir.path().join("missing").join(".env");

    let (result, output) =
        run_piped(args(dir.path(), &["--env-file", env_file.to_str().unwrap()]), "bill\n\n");

    assert_eq!(result.unwrap(), RunOutcome::Written { env_file, saved: false });
    assert!(output.contains("is not writeable!"));
}

#[test_log::test]
fn verbose_flag_reports_missing_env_file() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), MANIFEST);

    let (_, output) = run_piped(args(dir.path(), &["-v"]), "bill\n\n");

    assert!(output.starts_with(&format!(
        "The env file `{}` doesn't exist yet.\n",
        dir.path().join(".env").display()
    )));
}
