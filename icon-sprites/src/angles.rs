//! Angle sequence of a sprite set

use crate::error::{Result, RotatorError};

/// Angles a sprite set is rendered at, in whole degrees clockwise.
///
/// The sequence is `0, step, 2*step, ...` up to but excluding 360.
/// With `include_full_turn`, 360 is appended as a duplicate of 0 so
/// consumers that index by `round(heading / step) * step` never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleSequence {
    step: u32,
    include_full_turn: bool,
}

impl AngleSequence {
    pub fn new(step: u32, include_full_turn: bool) -> Result<Self> {
        if step == 0 || step > 360 {
            return Err(RotatorError::InvalidStep(step));
        }
        Ok(Self {
            step,
            include_full_turn,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> {
        let full_turn = self.include_full_turn.then_some(360);
        (0..360).step_by(self.step as usize).chain(full_turn)
    }

    /// Number of sprites this sequence produces.
    pub fn len(&self) -> usize {
        let base = 360usize.div_ceil(self.step as usize);
        base + usize::from(self.include_full_turn)
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for AngleSequence {
    fn default() -> Self {
        Self {
            step: 5,
            include_full_turn: false,
        }
    }
}
