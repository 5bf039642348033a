use crate::{
    builder::Builder,
    cli::{Args, IoBackend},
    config::Manifest,
    error::Result,
    prompt::{DialoguerChannel, PromptChannel, StreamChannel},
};
use std::path::PathBuf;

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The env file already existed and clobbering was off.
    Skipped { env_file: PathBuf },
    /// Every question was answered; `saved` tells whether the file was written.
    Written { env_file: PathBuf, saved: bool },
}

/// Main CLI runner that orchestrates one build of the env file
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the workflow, prompting through `channel`
    pub fn run_with<C: PromptChannel>(self, mut channel: C) -> Result<RunOutcome> {
        let manifest = self.load_manifest()?;

        if manifest.should_skip() {
            let notice =
                format!("Env file `{}` already exists, skipping...", manifest.env_file.display());
            log::warn!("{notice}");
            channel.write(&notice);
            return Ok(RunOutcome::Skipped { env_file: manifest.env_file });
        }

        let mut builder = Builder::new(&manifest.env_file, manifest.config, channel);
        builder.register_all(manifest.questions)?;
        log::debug!(
            "Asking {} questions for {}",
            builder.questions().len(),
            manifest.env_file.display()
        );

        let written = builder.run()?.write()?;

        Ok(RunOutcome::Written { env_file: manifest.env_file, saved: written.saved() })
    }

    /// Loads the manifest and applies command line overrides
    fn load_manifest(&self) -> Result<Manifest> {
        let mut manifest = match &self.args.manifest {
            Some(path) => Manifest::from_path(path)?,
            None => Manifest::discover(&self.args.project_dir)?,
        };

        if let Some(env_file) = &self.args.env_file {
            manifest.env_file = env_file.clone();
        }
        if self.args.force {
            manifest.clobber = true;
        }
        if self.args.verbose > 0 {
            manifest.config.verbose = true;
        }

        Ok(manifest)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<RunOutcome> {
    let backend = args.io;
    let runner = Runner::new(args);
    match backend {
        IoBackend::Terminal => runner.run_with(DialoguerChannel::new()),
        IoBackend::Stdio => runner.run_with(StreamChannel::stdio()),
    }
}
