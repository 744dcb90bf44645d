// The gesture-to-canvas state machine. One `PaintSession` per tracked hand;
// it owns the canvas, the palette cursor, the eraser flag, and every
// "previous frame" cursor the debouncing needs. `process_frame` is the only
// entry point: hands in, composited frame out, all mutation inside.

use std::time::Duration;

use log::{debug, warn};

use crate::canvas::{CanvasBuffer, BACKGROUND};
use crate::clock::Clock;
use crate::compositor::{composite, Swatch};
use crate::gesture::Mode;
use crate::landmarks::{finger_states, Hand};
use crate::palette::{default_colors, Palette};
use crate::types::FrameBuffer;

/// Everything tunable, fixed at session start.
pub struct SessionConfig {
    pub width: usize,
    pub height: usize,
    pub brush_thickness: u32,
    pub eraser_thickness: u32,
    /// Horizontal swipe distance that confirms a color step.
    pub swipe_threshold: i32,
    /// Minimum gap between confirmed color steps (exclusive comparison).
    pub color_debounce: Duration,
    /// How long the swatch stays visible after a confirmed step.
    pub swatch_duration: Duration,
    pub swatch_center: (i32, i32),
    pub swatch_radius: i32,
    pub palette: Vec<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            width: 640,
            height: 480,
            brush_thickness: 5,
            eraser_thickness: 50,
            swipe_threshold: 40,
            color_debounce: Duration::from_secs(1),
            swatch_duration: Duration::from_secs(1),
            swatch_center: (30, 30),
            swatch_radius: 20,
            palette: default_colors(),
        }
    }
}

pub struct PaintSession {
    cfg: SessionConfig,
    canvas: CanvasBuffer,
    palette: Palette,
    eraser_active: bool,
    /// Last drawn point; Some only while the previous frame was Drawing.
    stroke_anchor: Option<(i32, i32)>,
    /// Fingertip x of the previous ColorCycling frame.
    prev_swipe_x: Option<i32>,
    last_color_change: Option<Duration>,
    swatch_until: Option<Duration>,
    prev_mode: Mode,
    clock: Box<dyn Clock>,
}

impl PaintSession {
    pub fn new(cfg: SessionConfig, clock: Box<dyn Clock>) -> Self {
        let canvas = CanvasBuffer::new(cfg.width, cfg.height);
        let palette = Palette::new(cfg.palette.clone());
        PaintSession {
            cfg,
            canvas,
            palette,
            eraser_active: false,
            stroke_anchor: None,
            prev_swipe_x: None,
            last_color_change: None,
            swatch_until: None,
            prev_mode: Mode::Idle,
            clock,
        }
    }

    /// Process one frame: classify the hand (if any), mutate the canvas and
    /// cursors, and return the composited output.
    ///
    /// A hand that violates the landmark contract aborts gesture processing
    /// for the frame; the live frame passes through untouched and the canvas
    /// keeps its previous content. No hand at all is ordinary Idle.
    pub fn process_frame(&mut self, live: &FrameBuffer, hands: &[Hand]) -> FrameBuffer {
        // Only one hand is tracked; extras are ignored.
        let hand = hands.first();

        if let Some(h) = hand {
            if let Err(e) = h.validate() {
                warn!("skipping frame: {e}");
                // The skipped frame still breaks any in-progress stroke or
                // swipe; only the persistent state survives.
                self.stroke_anchor = None;
                self.prev_swipe_x = None;
                self.prev_mode = Mode::Idle;
                return live.clone();
            }
        }

        let (mode, tip) = match hand {
            Some(h) => (
                Mode::classify(finger_states(h)),
                h.index_tip_pixel(self.cfg.width, self.cfg.height),
            ),
            None => (Mode::Idle, (0, 0)),
        };
        self.apply(mode, tip);

        match composite(live, self.canvas.frame(), self.swatch()) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("compositing skipped: {e}");
                live.clone()
            }
        }
    }

    /// Advance the state machine by one classified frame.
    fn apply(&mut self, mode: Mode, tip: (i32, i32)) {
        if mode != self.prev_mode {
            debug!("mode {:?} -> {:?}", self.prev_mode, mode);
        }
        let now = self.clock.now();

        // ── Drawing ──────────────────────────────────────────────────────
        // First Drawing frame only seeds the anchor; every later one stamps
        // a segment from the anchor to the tip. Any other mode breaks the
        // stroke so it can never jump a gap.
        if mode == Mode::Drawing {
            if let Some(anchor) = self.stroke_anchor {
                let (color, thickness) = if self.eraser_active {
                    (BACKGROUND, self.cfg.eraser_thickness)
                } else {
                    (self.palette.active(), self.cfg.brush_thickness)
                };
                self.canvas.stroke(anchor, tip, color, thickness);
            }
            self.stroke_anchor = Some(tip);
        } else {
            self.stroke_anchor = None;
        }

        // ── Color cycling ────────────────────────────────────────────────
        // dx is measured between consecutive ColorCycling frames. A step is
        // confirmed only past the swipe threshold and strictly past the
        // debounce window, so a sustained swipe advances at most one color
        // per window.
        if mode == Mode::ColorCycling {
            if let Some(prev_x) = self.prev_swipe_x {
                let dx = tip.0 - prev_x;
                let debounced = match self.last_color_change {
                    Some(t) => now.saturating_sub(t) > self.cfg.color_debounce,
                    None => true,
                };
                if dx.abs() > self.cfg.swipe_threshold && debounced {
                    self.palette.step(dx.signum());
                    self.last_color_change = Some(now);
                    self.swatch_until = Some(now + self.cfg.swatch_duration);
                    debug!("palette cursor -> {}", self.palette.cursor());
                }
            }
            self.prev_swipe_x = Some(tip.0);
        } else {
            self.prev_swipe_x = None;
        }

        // ── Eraser toggle ────────────────────────────────────────────────
        // Fires once per edge into the all-folded pose; holding the fist
        // keeps the current setting. Leaving and re-entering re-arms it.
        if mode == Mode::EraserToggling && self.prev_mode != Mode::EraserToggling {
            self.eraser_active = !self.eraser_active;
            debug!("eraser {}", if self.eraser_active { "on" } else { "off" });
        }

        self.prev_mode = mode;
    }

    /// Swatch to overlay this frame, if the last color change is recent.
    fn swatch(&self) -> Option<Swatch> {
        let until = self.swatch_until?;
        if self.clock.now() < until {
            Some(Swatch {
                center: self.cfg.swatch_center,
                radius: self.cfg.swatch_radius,
                color: self.palette.active(),
            })
        } else {
            None
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn canvas(&self) -> &CanvasBuffer {
        &self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn eraser_active(&self) -> bool {
        self.eraser_active
    }

    pub fn stroke_anchor(&self) -> Option<(i32, i32)> {
        self.stroke_anchor
    }
}
