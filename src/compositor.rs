// Blend the live camera frame with the stroke canvas and overlay the
// transient color swatch. Pure function of its inputs; the session decides
// whether a swatch is due.

use crate::canvas::fill_disc;
use crate::error::Error;
use crate::types::{channels, FrameBuffer};

/// Transient indicator for the active brush color.
#[derive(Clone, Copy, Debug)]
pub struct Swatch {
    pub center: (i32, i32),
    pub radius: i32,
    pub color: u32,
}

/// 0.5/0.5 per-channel blend of live and canvas, then the swatch circle on
/// top when one is due. Visual: the camera image at half brightness with the
/// strokes ghosted over it.
pub fn composite(
    live: &FrameBuffer,
    canvas: &FrameBuffer,
    swatch: Option<Swatch>,
) -> Result<FrameBuffer, Error> {
    if live.width != canvas.width || live.height != canvas.height {
        return Err(Error::CameraFrame(format!(
            "composite: {}x{} frame vs {}x{} canvas",
            live.width, live.height, canvas.width, canvas.height
        )));
    }

    let mut out = FrameBuffer::new(live.width, live.height);
    for (i, px) in out.pixels.iter_mut().enumerate() {
        let (lr, lg, lb) = channels(live.pixels[i]);
        let (cr, cg, cb) = channels(canvas.pixels[i]);
        *px = (((lr + cr) / 2) << 16) | (((lg + cg) / 2) << 8) | ((lb + cb) / 2);
    }

    if let Some(s) = swatch {
        fill_disc(&mut out, s.center.0, s.center.1, s.radius, s.color);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(width: usize, height: usize, px: u32) -> FrameBuffer {
        FrameBuffer { width, height, pixels: vec![px; width * height] }
    }

    #[test]
    fn blend_averages_channels() {
        let live = flat(4, 4, 0x0080_4020);
        let canvas = flat(4, 4, 0x0000_0000);
        let out = composite(&live, &canvas, None).unwrap();
        assert_eq!(out.pixels[0], 0x0040_2010);
    }

    #[test]
    fn is_idempotent_for_identical_inputs() {
        let live = flat(8, 8, 0x00AB_CDEF);
        let mut canvas = flat(8, 8, 0x0000_0000);
        canvas.pixels[10] = 0x00FF_0000;
        let s = Some(Swatch { center: (2, 2), radius: 1, color: 0x0000_FF00 });
        let a = composite(&live, &canvas, s).unwrap();
        let b = composite(&live, &canvas, s).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn swatch_is_drawn_opaque_on_top() {
        let live = flat(8, 8, 0x00FF_FFFF);
        let canvas = flat(8, 8, 0x0000_0000);
        let s = Swatch { center: (4, 4), radius: 2, color: 0x0000_00FF };
        let out = composite(&live, &canvas, Some(s)).unwrap();
        assert_eq!(out.pixels[4 * 8 + 4], 0x0000_00FF);
        // Outside the disc it is the plain blend.
        assert_eq!(out.pixels[0], 0x007F_7F7F);
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let live = flat(4, 4, 0);
        let canvas = flat(8, 8, 0);
        assert!(composite(&live, &canvas, None).is_err());
    }
}
