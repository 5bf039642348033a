//! Question/answer orchestration
//!
//! A [`Builder`] moves through `Idle -> Loaded -> Asked -> Written`. Each
//! state is its own type and each transition consumes the previous one, so
//! answers cannot be written before every question has been asked.
//!
//! ```no_run
//! use envbuilder::builder::Builder;
//! use envbuilder::config::BuilderConfig;
//!
//! let mut builder = Builder::interactive(".env", BuilderConfig::default());
//! builder.ask("name", "What is your name?", "", true)?;
//! builder.ask("age", "How old are you?", "18", false)?;
//!
//! let written = builder.run()?.write()?;
//! assert!(written.saved());
//! # Ok::<(), envbuilder::error::Error>(())
//! ```

use crate::{
    config::{BuilderConfig, Question, QuestionRegistry},
    env::{self, EnvMap},
    error::{Error, Result},
    prompt::{DialoguerChannel, Prompt, PromptChannel},
};
use std::path::{Path, PathBuf};

/// Builder states.
pub mod state {
    use crate::env::EnvMap;

    /// Questions are being registered.
    #[derive(Debug, Default)]
    pub struct Idle;

    /// The current values have been read from the env file.
    #[derive(Debug)]
    pub struct Loaded {
        pub(crate) current: EnvMap,
    }

    /// Every question has an answer.
    #[derive(Debug)]
    pub struct Asked {
        pub(crate) answers: EnvMap,
    }

    /// Answers were handed to the env file store.
    #[derive(Debug)]
    pub struct Written {
        pub(crate) answers: EnvMap,
        pub(crate) saved: bool,
    }
}

use state::{Asked, Idle, Loaded, Written};

/// Asks the registered questions and persists the answers to an env file.
pub struct Builder<C, S = Idle> {
    env_file: PathBuf,
    config: BuilderConfig,
    questions: QuestionRegistry,
    io: Prompt<C>,
    state: S,
}

impl Builder<DialoguerChannel> {
    /// Builder prompting on the terminal.
    pub fn interactive<P: Into<PathBuf>>(env_file: P, config: BuilderConfig) -> Self {
        Self::new(env_file, config, DialoguerChannel::new())
    }
}

impl<C: PromptChannel, S> Builder<C, S> {
    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn questions(&self) -> &QuestionRegistry {
        &self.questions
    }

    pub fn channel(&self) -> &C {
        self.io.channel()
    }

    pub fn into_channel(self) -> C {
        self.io.into_channel()
    }

    fn transition<T>(self, state: T) -> Builder<C, T> {
        Builder {
            env_file: self.env_file,
            config: self.config,
            questions: self.questions,
            io: self.io,
            state,
        }
    }

    /// Reports `message` to the operator when running verbosely.
    fn notify(&mut self, message: &str) {
        log::debug!("{message}");
        if self.config.verbose {
            self.io.out(message);
        }
    }
}

impl<C: PromptChannel> Builder<C, Idle> {
    pub fn new<P: Into<PathBuf>>(env_file: P, config: BuilderConfig, channel: C) -> Self {
        Self {
            env_file: env_file.into(),
            config,
            questions: QuestionRegistry::new(),
            io: Prompt::new(channel),
            state: Idle,
        }
    }

    /// Registers a question to ask during [`Builder::run`].
    ///
    /// A second question with the same name replaces the first.
    pub fn ask(&mut self, name: &str, prompt: &str, default: &str, required: bool) -> Result<()> {
        self.register(Question::new(name, prompt).with_default(default).required(required))
    }

    pub fn register(&mut self, mut question: Question) -> Result<()> {
        question.name = self.config.normalize_key(&question.name);
        self.questions.register(question)
    }

    pub fn register_all<I>(&mut self, questions: I) -> Result<()>
    where
        I: IntoIterator<Item = Question>,
    {
        questions.into_iter().try_for_each(|question| self.register(question))
    }

    /// Reads the current values, unless loading is disabled.
    ///
    /// A missing or unreadable env file loads as empty.
    pub fn load(mut self) -> Builder<C, Loaded> {
        let current = if self.config.load_env {
            self.load_current()
        } else {
            log::debug!("Loading of {} is disabled", self.env_file.display());
            EnvMap::new()
        };

        self.transition(Loaded { current })
    }

    /// Loads the current values, then asks every question.
    pub fn run(self) -> Result<Builder<C, Asked>> {
        self.load().ask_all()
    }

    fn load_current(&mut self) -> EnvMap {
        if !self.env_file.exists() {
            let message = format!("The env file `{}` doesn't exist yet.", self.env_file.display());
            self.notify(&message);
            return EnvMap::new();
        }

        let config = self.config;
        let current: EnvMap = env::load(&self.env_file)
            .into_iter()
            .map(|(key, value)| (config.normalize_key(&key), value))
            .collect();

        let message =
            format!("Loaded {} values from `{}`.", current.len(), self.env_file.display());
        self.notify(&message);
        current
    }
}

impl<C: PromptChannel> Builder<C, Loaded> {
    pub fn current(&self) -> &EnvMap {
        &self.state.current
    }

    /// Asks every question in registration order.
    ///
    /// A loaded value takes precedence over the question's own default. The
    /// first question that fails aborts the run and no later question is
    /// asked.
    pub fn ask_all(mut self) -> Result<Builder<C, Asked>> {
        let mut answers = EnvMap::with_capacity(self.questions.len());

        for question in self.questions.iter() {
            let default = self.state.current.get(&question.name).unwrap_or(&question.default);
            let answer =
                self.io.ask(&question.name, &question.prompt, default, question.required)?;
            answers.insert(question.name.clone(), answer);
        }

        Ok(self.transition(Asked { answers }))
    }
}

impl<C: PromptChannel> Builder<C, Asked> {
    pub fn answers(&self) -> &EnvMap {
        &self.state.answers
    }

    /// Saves the answers to the env file.
    ///
    /// A target that cannot be written is reported to the operator and
    /// recorded as [`Builder::saved`] being false, since re-running fixes it.
    /// Other failures are returned.
    pub fn write(mut self) -> Result<Builder<C, Written>> {
        let saved = match env::save(&self.env_file, &self.state.answers) {
            Ok(()) => {
                let message = format!("Answers saved to {}", self.env_file.display());
                self.io.out(&message);
                true
            }
            Err(err @ Error::NotWritable(_)) => {
                log::warn!("{err}");
                self.io.out(&err.to_string());
                false
            }
            Err(err) => return Err(err),
        };

        let answers = std::mem::take(&mut self.state.answers);
        Ok(self.transition(Written { answers, saved }))
    }
}

impl<C: PromptChannel> Builder<C, Written> {
    pub fn answers(&self) -> &EnvMap {
        &self.state.answers
    }

    /// Whether the env file was written.
    pub fn saved(&self) -> bool {
        self.state.saved
    }
}
