// Fixed cyclic color palette with a cursor.

use crate::types::rgb;

/// The seven brush colors, in cycle order.
pub fn default_colors() -> Vec<u32> {
    vec![
        rgb(255, 0, 0),     // red
        rgb(0, 255, 0),     // green
        rgb(0, 0, 255),     // blue
        rgb(0, 255, 255),   // cyan
        rgb(255, 255, 0),   // yellow
        rgb(255, 0, 255),   // magenta
        rgb(255, 255, 255), // white
    ]
}

pub struct Palette {
    colors: Vec<u32>,
    cursor: usize,
}

impl Palette {
    /// Cursor starts at the first color. `colors` must be non-empty.
    pub fn new(colors: Vec<u32>) -> Self {
        assert!(!colors.is_empty(), "palette needs at least one color");
        Self { colors, cursor: 0 }
    }

    pub fn active(&self) -> u32 {
        self.colors[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Move the cursor one step forward (positive `dir`) or backward,
    /// wrapping at both ends.
    pub fn step(&mut self, dir: i32) {
        let n = self.colors.len();
        self.cursor = if dir > 0 { (self.cursor + 1) % n } else { (self.cursor + n - 1) % n };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_forward_and_wraps() {
        let mut p = Palette::new(default_colors());
        for _ in 0..p.len() {
            p.step(1);
        }
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn steps_backward_from_start() {
        let mut p = Palette::new(default_colors());
        p.step(-1);
        assert_eq!(p.cursor(), p.len() - 1);
        p.step(1);
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn active_follows_cursor() {
        let mut p = Palette::new(default_colors());
        assert_eq!(p.active(), rgb(255, 0, 0));
        p.step(1);
        assert_eq!(p.active(), rgb(0, 255, 0));
    }
}
