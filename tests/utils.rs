use envbuilder::builder::Builder;
use envbuilder::config::BuilderConfig;
use envbuilder::prompt::ScriptedChannel;
use std::path::Path;

/// Builder with the `name`/`age` questions used across the tests.
#[allow(dead_code)]
pub fn name_age_builder(
    env_file: &Path,
    config: BuilderConfig,
    responses: &[&str],
) -> Builder<ScriptedChannel> {
    let channel = ScriptedChannel::new().with_responses(responses.iter().copied());
    let mut builder = Builder::new(env_file, config, channel);
    builder.ask("name", "What is your name?", "", true).unwrap();
    builder.ask("age", "How old are you?", "18", false).unwrap();
    builder
}

/// Writes a JSON manifest into `dir`.
#[allow(dead_code)]
pub fn write_manifest(dir: &Path, content: &str) {
    std::fs::write(dir.join("envbuilder.json"), content).unwrap();
}
