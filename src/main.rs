// Gesture Paint.
// • Live camera is always the base image; your strokes are ghosted over it.
// • Index finger only: draw (or erase, when the eraser is armed).
// • Index + middle: swipe horizontally to cycle the brush color.
// • Fist (all fingers folded): toggle the eraser.
// • ESC quits.

use gesture_paint::camera::CameraCapture;
use gesture_paint::clock::MonotonicClock;
use gesture_paint::display::Drawer;
use gesture_paint::error::Error;
use gesture_paint::session::{PaintSession, SessionConfig};
use gesture_paint::tracker::HandTracker;

fn main() -> Result<(), Error> {
    env_logger::init();

    /* --- Camera + detector + window setup ---
       Visual: window opens with the mirrored live camera feed. */
    let mut cam = CameraCapture::new(0, 640, 480)?;
    let (w, h) = cam.resolution();
    let mut tracker = HandTracker::new()?;
    let mut drawer = Drawer::new("Gesture Paint", w as usize, h as usize)?;

    /* --- The session owns all gesture/canvas state ---
       Canvas dimensions follow whatever the camera actually delivers. */
    let cfg = SessionConfig {
        width: w as usize,
        height: h as usize,
        ..SessionConfig::default()
    };
    let mut session = PaintSession::new(cfg, Box::new(MonotonicClock::new()));

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Grab a fresh live frame (mirrored selfie view). */
        let live = cam.next_frame()?;

        /* 2) Ask the detector for hands. A detector hiccup is not fatal:
           the frame just runs with no hand, which the session treats as
           Idle, and the video keeps playing. */
        let hands = match tracker.detect(&live) {
            Ok(hands) => hands,
            Err(e) => {
                log::warn!("hand detection failed: {e}");
                Vec::new()
            }
        };

        /* 3) One pipeline step: classify, mutate canvas, composite. */
        let out = session.process_frame(&live, &hands);

        /* 4) Present to the window. */
        drawer.present(&out)?;
    }

    log::info!(
        "session ended (palette index {}, eraser {})",
        session.palette().cursor(),
        if session.eraser_active() { "on" } else { "off" }
    );
    Ok(())
}
