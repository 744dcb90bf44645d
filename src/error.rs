// A tiny error type; every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Updating the window buffer failed
    CameraInit(String),   // Opening/starting the camera failed
    CameraFrame(String),  // Grabbing/decoding a frame failed
    TrackerInit(String),  // Starting the hand-landmark subprocess failed
    TrackerFrame(String), // Exchanging a frame with the subprocess failed
    Landmarks(String),    // A hand violated the 21-landmark input contract
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::CameraInit(s) => write!(f, "Camera init error: {s}"),
            Error::CameraFrame(s) => write!(f, "Camera frame error: {s}"),
            Error::TrackerInit(s) => write!(f, "Tracker init error: {s}"),
            Error::TrackerFrame(s) => write!(f, "Tracker frame error: {s}"),
            Error::Landmarks(s) => write!(f, "Landmark contract error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
