//! Ordered cipher pipeline.
//!
//! A pipeline is a user-ordered list of cipher stages. Encrypting applies the
//! enabled stages in configured order; decrypting walks the same enabled list
//! in reverse, so each stage undoes its own encryption. Every run records the
//! intermediate output of each stage in processing order.
//!
//! One caveat carried over deliberately: stage representations are not
//! validated against each other. Feeding the hex output of the block cipher
//! into a letter cipher strips the digits 0-9, so such a chain does not
//! round-trip; the pipeline applies exactly what it is told.

use crate::aes::{self, KeyFormat};
use crate::classical::{autokey, vigenere};
use crate::error::Result;

/// Direction a pipeline run operates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Encrypt => Mode::Decrypt,
            Mode::Decrypt => Mode::Encrypt,
        }
    }
}

/// The closed set of cipher stage types with their parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CipherKind {
    /// 128-bit block cipher; emits and consumes lowercase hex.
    Aes { key: String, format: KeyFormat },
    /// Self-synchronizing running-key cipher over A-Z.
    Autokey { key: String },
    /// Fixed repeating-key cipher over A-Z.
    Vigenere { key: String },
}

impl CipherKind {
    /// Applies this cipher to `text` in the given direction.
    pub fn apply(&self, text: &str, mode: Mode) -> Result<String> {
        match (self, mode) {
            (CipherKind::Aes { key, format }, Mode::Encrypt) => aes::encrypt(text, key, *format),
            (CipherKind::Aes { key, format }, Mode::Decrypt) => aes::decrypt(text, key, *format),
            (CipherKind::Autokey { key }, Mode::Encrypt) => autokey::encrypt(text, key),
            (CipherKind::Autokey { key }, Mode::Decrypt) => autokey::decrypt(text, key),
            (CipherKind::Vigenere { key }, Mode::Encrypt) => vigenere::encrypt(text, key),
            (CipherKind::Vigenere { key }, Mode::Decrypt) => vigenere::decrypt(text, key),
        }
    }
}

/// One configured stage of the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    /// Stable identity, unique within a pipeline.
    pub id: String,
    pub cipher: CipherKind,
    pub enabled: bool,
}

impl Stage {
    pub fn new(id: impl Into<String>, cipher: CipherKind, enabled: bool) -> Self {
        Stage {
            id: id.into(),
            cipher,
            enabled,
        }
    }
}

/// Output of one stage, recorded in processing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageResult {
    pub id: String,
    pub output: String,
}

/// Result of a full pipeline run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineRun {
    /// Per-stage outputs in processing order. When decrypting, the stage that
    /// sits last in the configuration appears first here.
    pub steps: Vec<StageResult>,
    pub output: String,
}

/// Runs the enabled stages over `input` and returns all intermediate outputs
/// plus the final one.
///
/// Empty input short-circuits to an empty result; with no enabled stage the
/// input passes through unchanged. The first failing stage aborts the run.
pub fn run_pipeline(input: &str, stages: &[Stage], mode: Mode) -> Result<PipelineRun> {
    if input.is_empty() {
        return Ok(PipelineRun::default());
    }

    let enabled: Vec<&Stage> = stages.iter().filter(|s| s.enabled).collect();
    if enabled.is_empty() {
        return Ok(PipelineRun {
            steps: Vec::new(),
            output: input.to_string(),
        });
    }

    let ordered: Vec<&Stage> = match mode {
        Mode::Encrypt => enabled,
        Mode::Decrypt => enabled.into_iter().rev().collect(),
    };

    let mut current = input.to_string();
    let mut steps = Vec::with_capacity(ordered.len());
    for stage in ordered {
        current = stage.cipher.apply(&current, mode)?;
        steps.push(StageResult {
            id: stage.id.clone(),
            output: current.clone(),
        });
    }

    Ok(PipelineRun {
        steps,
        output: current,
    })
}

/// Stateful orchestrator around [`run_pipeline`].
///
/// Owns the stage list and the latest results. Every mutation of input or
/// configuration recomputes from scratch; a failing recomputation records the
/// error message and leaves the previously computed results in place, so a
/// caller can still show the last good output next to the error.
#[derive(Clone, Debug)]
pub struct Pipeline {
    stages: Vec<Stage>,
    input: String,
    mode: Mode,
    run: PipelineRun,
    error: Option<String>,
}

impl Default for Pipeline {
    /// The stock three-stage configuration: block cipher enabled, the two
    /// classical stages present but switched off.
    fn default() -> Self {
        Pipeline::new(vec![
            Stage::new(
                "aes1",
                CipherKind::Aes {
                    key: "mysecretkey12345".into(),
                    format: KeyFormat::Text,
                },
                true,
            ),
            Stage::new(
                "autokey1",
                CipherKind::Autokey {
                    key: "SECRET".into(),
                },
                false,
            ),
            Stage::new(
                "vigenere1",
                CipherKind::Vigenere {
                    key: "CIPHER".into(),
                },
                false,
            ),
        ])
    }
}

impl Pipeline {
    pub fn new(stages: Vec<Stage>) -> Self {
        Pipeline {
            stages,
            input: String::new(),
            mode: Mode::Encrypt,
            run: PipelineRun::default(),
            error: None,
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.recompute();
    }

    /// Switches a stage on or off. Unknown ids are ignored.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(stage) = self.stages.iter_mut().find(|s| s.id == id) {
            stage.enabled = enabled;
        }
        self.recompute();
    }

    /// Replaces a stage's cipher parameters in place.
    pub fn set_cipher(&mut self, id: &str, cipher: CipherKind) {
        if let Some(stage) = self.stages.iter_mut().find(|s| s.id == id) {
            stage.cipher = cipher;
        }
        self.recompute();
    }

    /// Moves the stage at `from` to position `to`. Out-of-range indices are
    /// ignored.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from < self.stages.len() && to < self.stages.len() {
            let stage = self.stages.remove(from);
            self.stages.insert(to, stage);
            self.recompute();
        }
    }

    /// Flips the direction and carries the previous output over as the new
    /// input (the old input becomes the displayed output). Intermediate steps
    /// are cleared; no recomputation happens until the next mutation or an
    /// explicit [`Pipeline::recompute`].
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        std::mem::swap(&mut self.input, &mut self.run.output);
        self.run.steps.clear();
    }

    /// Recomputes results from the current input and configuration.
    ///
    /// On success the previous results are replaced and any error cleared; on
    /// failure only the error message changes.
    pub fn recompute(&mut self) {
        match run_pipeline(&self.input, &self.stages, self.mode) {
            Ok(run) => {
                self.run = run;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Per-stage outputs of the last successful run.
    pub fn steps(&self) -> &[StageResult] {
        &self.run.steps
    }

    /// Final output of the last successful run.
    pub fn output(&self) -> &str {
        &self.run.output
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
