// Opens the default camera and converts frames into a buffer suitable for the
// window. Frames come out mirrored (selfie view), so moving your hand left
// moves it left on screen; the whole pipeline, landmark detection included,
// sees the mirrored image.

use crate::error::Error;
use crate::types::FrameBuffer;

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

// A small wrapper around nokhwa::Camera so our main loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
}

impl CameraCapture {
    /// Try to open a camera at a target resolution (falls back if not exact).
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self, Error> {
        // 1) Choose the device (0 = default webcam)
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,                // target FPS
        );

        // 2) Ask for RGB frames near the requested format.
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        // 3) Create the camera (this might fail if no device exists).
        let mut cam =
            Camera::new(idx, req).map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        // 4) Start streaming frames from the camera.
        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // 5) The actual stream might choose a slightly different resolution.
        let actual = cam.resolution();
        log::info!("camera streaming at {}x{}", actual.width(), actual.height());

        Ok(Self { cam, width: actual.width(), height: actual.height() })
    }

    /// Grab one frame, convert to 0x00RRGGBB pixels, and mirror it
    /// horizontally.
    pub fn next_frame(&mut self) -> Result<FrameBuffer, Error> {
        // 1) Pull a frame from the camera (blocks until a new frame is ready).
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        // 2) Decode to an RGB image buffer (handles various raw formats).
        let rgb_img = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        // 3) Pack as u32 pixels, writing each row right-to-left so the
        //    result is the selfie mirror of the sensor image.
        let (w, h) = rgb_img.dimensions();
        let mut out = vec![0u32; (w as usize) * (h as usize)];
        for (x, y, pixel) in rgb_img.enumerate_pixels() {
            let r = pixel[0] as u32;
            let g = pixel[1] as u32;
            let b = pixel[2] as u32;
            let idx = (y as usize) * (w as usize) + (w - 1 - x) as usize;
            out[idx] = (r << 16) | (g << 8) | b;
        }

        Ok(FrameBuffer { width: w as usize, height: h as usize, pixels: out })
    }

    /// Report the actual resolution the camera is delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
