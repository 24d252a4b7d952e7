//! Evaluation modes.
//!
//! The evaluator is parameterized by an `EvalMode` value rather than a
//! generic policy type so that drivers can build it from configuration at
//! runtime.

/// Determines how deep evaluation may nest before it is aborted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Unbounded nesting. Native builds grow the stack on demand.
    #[default]
    Interpret,
    /// Abort with `EvalError::RecursionLimit` once `max_depth` nested
    /// evaluations are active.
    Bounded {
        /// Maximum number of simultaneously active `eval` frames.
        max_depth: usize,
    },
}

impl EvalMode {
    /// Maximum nesting depth, or `None` for unlimited.
    ///
    /// On wasm there is no stack growth, so `Interpret` is capped.
    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        match self {
            Self::Interpret => {
                #[cfg(target_arch = "wasm32")]
                {
                    Some(WASM_MAX_DEPTH)
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    None
                }
            }
            Self::Bounded { max_depth } => Some(*max_depth),
        }
    }

    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.max_depth().is_some()
    }
}

#[cfg(target_arch = "wasm32")]
const WASM_MAX_DEPTH: usize = 200;
