use std::sync::{Mutex, PoisonError};

use rand::RngCore;

use crate::errors::FakerError;
use crate::generators::{GeneratedValue, RandomData};

/// Descriptor for a [`SequenceGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceSpec {
    /// Unbounded counter: `start`, `start + step`, `start + 2 * step`, ...
    Plain { start: i64, step: i64 },
    /// Round-robin over `values`, emitting each one `repeat` times in a row.
    Cycle {
        values: Vec<GeneratedValue>,
        repeat: u32,
    },
}

impl SequenceSpec {
    pub fn starting_at(start: i64) -> Self {
        SequenceSpec::Plain { start, step: 1 }
    }

    pub fn cycle<T, I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<GeneratedValue>,
    {
        SequenceSpec::Cycle {
            values: values.into_iter().map(Into::into).collect(),
            repeat: 1,
        }
    }

    /// Sets the increment of a plain sequence; cyclic specs are unchanged.
    pub fn step(self, step: i64) -> Self {
        match self {
            SequenceSpec::Plain { start, .. } => SequenceSpec::Plain { start, step },
            other => other,
        }
    }

    /// Sets how many times each element of a cyclic sequence is emitted
    /// before advancing; plain specs are unchanged.
    pub fn repeat_count(self, repeat: u32) -> Self {
        match self {
            SequenceSpec::Cycle { values, .. } => SequenceSpec::Cycle { values, repeat },
            other => other,
        }
    }
}

#[derive(Debug)]
enum SequenceState {
    Plain {
        next: i64,
        step: i64,
    },
    Cycle {
        values: Vec<GeneratedValue>,
        cursor: usize,
        repeat: u32,
        remaining: u32,
    },
}

/// Stateful generator whose cursor survives across calls and sessions.
///
/// The cursor is only advanced by [`RandomData::next`], under one lock, so
/// concurrent callers never observe the same position twice.
#[derive(Debug)]
pub struct SequenceGenerator {
    state: Mutex<SequenceState>,
}

impl SequenceGenerator {
    pub fn new(spec: SequenceSpec) -> Result<Self, FakerError> {
        let state = match spec {
            SequenceSpec::Plain { start, step } => {
                if step == 0 {
                    return Err(FakerError::config("sequence step must be non-zero"));
                }
                SequenceState::Plain { next: start, step }
            }
            SequenceSpec::Cycle { values, repeat } => {
                if values.is_empty() {
                    return Err(FakerError::config("cyclic sequence list must not be empty"));
                }
                if let Some(value) = values.iter().find(|value| !value.is_finite()) {
                    return Err(FakerError::config(format!(
                        "cyclic sequence value {value} has no SQL literal"
                    )));
                }
                if repeat == 0 {
                    return Err(FakerError::config("cyclic sequence repeat count must be >= 1"));
                }
                SequenceState::Cycle {
                    values,
                    cursor: 0,
                    repeat,
                    remaining: repeat,
                }
            }
        };
        Ok(Self {
            state: Mutex::new(state),
        })
    }

    /// Current cursor of a cyclic sequence, or the next value of a plain one.
    pub fn position(&self) -> i64 {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match &*state {
            SequenceState::Plain { next, .. } => *next,
            SequenceState::Cycle { cursor, .. } => *cursor as i64,
        }
    }
}

impl RandomData for SequenceGenerator {
    fn next(&self, _rng: &mut dyn RngCore) -> GeneratedValue {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *state {
            SequenceState::Plain { next, step } => {
                let value = *next;
                *next = next.saturating_add(*step);
                GeneratedValue::Long(value)
            }
            SequenceState::Cycle {
                values,
                cursor,
                repeat,
                remaining,
            } => {
                let value = values[*cursor].clone();
                *remaining -= 1;
                if *remaining == 0 {
                    *cursor = (*cursor + 1) % values.len();
                    *remaining = *repeat;
                }
                value
            }
        }
    }
}
