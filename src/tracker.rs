//! Hand landmark source using MediaPipe via a Python subprocess.
//!
//! The detector model runs out of process; we ship raw frames over stdin and
//! read one JSON line of hands per frame from stdout. The rest of the program
//! only ever sees validated `Hand` values.
//!
//! # Setup
//!
//! Create the helper environment next to the binary:
//! python3 -m venv .venv && .venv/bin/pip install mediapipe numpy

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};

use serde::Deserialize;

use crate::error::Error;
use crate::landmarks::{Hand, Landmark, LANDMARKS_PER_HAND};
use crate::types::{channels, FrameBuffer};

/// Hands scoring below this are dropped before they reach the session.
pub const DETECTION_CONFIDENCE: f32 = 0.7;

/// Only one hand drives the canvas.
pub const MAX_HANDS: usize = 1;

/// JSON structures for parsing the subprocess output.
#[derive(Deserialize, Debug)]
struct LandmarkJson {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Deserialize, Debug)]
struct HandJson {
    score: f32,
    landmarks: Vec<LandmarkJson>,
}

#[derive(Deserialize, Debug)]
struct DetectionResult {
    hands: Vec<HandJson>,
    #[serde(default)]
    error: Option<String>,
}

pub struct HandTracker {
    process: Child,
    stdout_reader: BufReader<std::process::ChildStdout>,
    confidence_threshold: f32,
}

impl HandTracker {
    /// Start the detector subprocess and wait for its READY handshake.
    pub fn new() -> Result<Self, Error> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::TrackerInit(format!("resolve cwd: {e}")))?;
        let script_path = cwd.join("hand_detect.py");
        let venv_python = cwd.join(".venv/bin/python");

        if !script_path.exists() {
            return Err(Error::TrackerInit(format!(
                "hand detection script not found at {script_path:?}"
            )));
        }
        if !venv_python.exists() {
            return Err(Error::TrackerInit(
                "python venv not found; run: python3 -m venv .venv && \
                 .venv/bin/pip install mediapipe numpy"
                    .into(),
            ));
        }

        log::info!("starting hand detector subprocess");

        let mut process = Command::new(&venv_python)
            .arg(&script_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::TrackerInit(format!("spawn detector: {e}")))?;

        let stdout = process
            .stdout
            .take()
            .ok_or_else(|| Error::TrackerInit("detector stdout unavailable".into()))?;
        let mut stdout_reader = BufReader::new(stdout);

        // The detector prints READY once the model is loaded.
        let mut ready_line = String::new();
        stdout_reader
            .read_line(&mut ready_line)
            .map_err(|e| Error::TrackerInit(format!("read READY: {e}")))?;
        if ready_line.trim() != "READY" {
            return Err(Error::TrackerInit(format!(
                "detector did not signal ready, got: {ready_line}"
            )));
        }

        log::info!("hand detector ready");

        Ok(Self { process, stdout_reader, confidence_threshold: DETECTION_CONFIDENCE })
    }

    /// Detect hands in one frame. Returns at most `MAX_HANDS` hands that pass
    /// the confidence threshold and carry the full landmark set.
    pub fn detect(&mut self, frame: &FrameBuffer) -> Result<Vec<Hand>, Error> {
        let width = frame.width as u32;
        let height = frame.height as u32;

        // Unpack the u32 pixels into the raw RGB bytes the detector expects.
        let mut data = Vec::with_capacity(frame.pixels.len() * 3);
        for &px in &frame.pixels {
            let (r, g, b) = channels(px);
            data.push(r as u8);
            data.push(g as u8);
            data.push(b as u8);
        }

        // Header (width, height, channels) + raw data, then one JSON line back.
        let stdin = self
            .process
            .stdin
            .as_mut()
            .ok_or_else(|| Error::TrackerFrame("detector stdin unavailable".into()))?;
        let mut send = || -> std::io::Result<()> {
            stdin.write_all(&width.to_le_bytes())?;
            stdin.write_all(&height.to_le_bytes())?;
            stdin.write_all(&3u32.to_le_bytes())?;
            stdin.write_all(&data)?;
            stdin.flush()
        };
        send().map_err(|e| Error::TrackerFrame(format!("send frame: {e}")))?;

        let mut response = String::new();
        self.stdout_reader
            .read_line(&mut response)
            .map_err(|e| Error::TrackerFrame(format!("read response: {e}")))?;

        let result: DetectionResult = serde_json::from_str(&response)
            .map_err(|e| Error::TrackerFrame(format!("parse response: {e} ({response})")))?;

        if let Some(error) = result.error {
            log::warn!("detector error: {error}");
            return Ok(Vec::new());
        }

        let mut hands = Vec::new();
        for hand in result.hands {
            if hand.score < self.confidence_threshold {
                continue;
            }
            if hand.landmarks.len() != LANDMARKS_PER_HAND {
                log::warn!(
                    "expected {} landmarks, got {}",
                    LANDMARKS_PER_HAND,
                    hand.landmarks.len()
                );
                continue;
            }
            let landmarks = hand
                .landmarks
                .iter()
                .map(|lm| Landmark { x: lm.x, y: lm.y, z: lm.z })
                .collect();
            log::debug!("hand detected (confidence={:.2})", hand.score);
            hands.push(Hand { landmarks, confidence: hand.score });
            if hands.len() == MAX_HANDS {
                break;
            }
        }

        Ok(hands)
    }
}

impl Drop for HandTracker {
    fn drop(&mut self) {
        // Kill the subprocess when the tracker is dropped.
        let _ = self.process.kill();
    }
}
