//! Driver configuration.

use lam_eval::EvalMode;

const MAX_DEPTH_VAR: &str = "LAM_MAX_DEPTH";
const VALIDATE_VAR: &str = "LAM_VALIDATE";

/// Settings shared by every program a driver call runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Evaluation mode passed to the evaluator.
    pub mode: EvalMode,
    /// Run the post-resolution validator before evaluating.
    pub validate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: EvalMode::Interpret,
            validate: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `with_mode(EvalMode::Bounded { max_depth })`.
    #[must_use]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        self.with_mode(EvalMode::Bounded { max_depth })
    }

    #[must_use]
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Read `LAM_MAX_DEPTH` and `LAM_VALIDATE` from the process environment.
    ///
    /// Unset variables keep their defaults. Values that do not parse are
    /// ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_DEPTH_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(max_depth) => config.mode = EvalMode::Bounded { max_depth },
                Err(err) => {
                    tracing::warn!(var = MAX_DEPTH_VAR, value = %raw, %err, "ignoring malformed value");
                }
            }
        }

        if let Some(raw) = lookup(VALIDATE_VAR) {
            match parse_flag(&raw) {
                Some(validate) => config.validate = validate,
                None => tracing::warn!(var = VALIDATE_VAR, value = %raw, "ignoring malformed value"),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
