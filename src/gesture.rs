// Finger-state vector -> interaction mode for the current frame.

use crate::landmarks::FingerState;

/// What the hand pose asks for this frame. Stateless per frame; the session
/// adds the temporal context (anchors, debouncing, toggle edges).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Drawing,
    ColorCycling,
    EraserToggling,
}

impl Mode {
    /// The four patterns partition the finger-state space: Drawing and
    /// ColorCycling differ only in the middle bit, EraserToggling needs the
    /// index folded, and Idle catches the rest. The thumb never matters for
    /// Drawing/ColorCycling.
    pub fn classify(fs: FingerState) -> Mode {
        let FingerState { thumb, index, middle, ring, pinky } = fs;
        if index && !middle && !ring && !pinky {
            Mode::Drawing
        } else if index && middle && !ring && !pinky {
            Mode::ColorCycling
        } else if !thumb && !index && !middle && !ring && !pinky {
            Mode::EraserToggling
        } else {
            Mode::Idle
        }
    }
}
