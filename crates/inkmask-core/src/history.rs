//! Stroke-level undo via full raster snapshots.

use image::RgbaImage;

/// An ordered stack of full raster copies, one per stroke.
///
/// A snapshot is pushed once per stroke, before the stroke's first pixel is
/// written, so popping it restores a state strictly prior to that stroke.
/// Entries are independent deep copies and never alias the live raster.
/// There is no redo: a popped snapshot is gone. The stack is unbounded; the
/// memory cost is strokes × canvas area by design.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<RgbaImage>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-copy the given raster and append it to the stack.
    pub fn push(&mut self, raster: &RgbaImage) {
        self.snapshots.push(raster.clone());
    }

    /// Pop the most recent snapshot and overwrite `raster` with it,
    /// discarding every pixel change made since that snapshot.
    ///
    /// Returns `false` (leaving `raster` untouched) when the stack is empty.
    pub fn undo_into(&mut self, raster: &mut RgbaImage) -> bool {
        match self.snapshots.pop() {
            Some(snapshot) => {
                *raster = snapshot;
                true
            }
            None => false,
        }
    }

    /// Drop all snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const INK: Rgba<u8> = Rgba([255, 70, 70, 255]);

    #[test]
    fn test_push_and_undo_restores_pixels() {
        let mut history = History::new();
        let mut raster = RgbaImage::new(4, 4);

        history.push(&raster);
        raster.put_pixel(1, 1, INK);
        assert_eq!(*raster.get_pixel(1, 1), INK);

        assert!(history.undo_into(&mut raster));
        assert_eq!(*raster.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
        assert!(history.is_empty());
    }

    #[test]
    fn test_undo_on_empty_stack_is_noop() {
        let mut history = History::new();
        let mut raster = RgbaImage::new(4, 4);
        raster.put_pixel(2, 2, INK);
        let before = raster.clone();

        assert!(!history.undo_into(&mut raster));
        assert_eq!(raster.as_raw(), before.as_raw());
    }

    #[test]
    fn test_snapshots_do_not_alias_live_raster() {
        let mut history = History::new();
        let mut raster = RgbaImage::new(4, 4);

        history.push(&raster);
        // Mutating the live raster after the snapshot must not leak into it.
        for y in 0..4 {
            for x in 0..4 {
                raster.put_pixel(x, y, INK);
            }
        }
        assert!(history.undo_into(&mut raster));
        assert!(raster.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_undo_pops_exactly_one() {
        let mut history = History::new();
        let raster = RgbaImage::new(4, 4);
        history.push(&raster);
        history.push(&raster);
        history.push(&raster);

        let mut live = raster.clone();
        history.undo_into(&mut live);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_clear_empties_stack() {
        let mut history = History::new();
        let raster = RgbaImage::new(4, 4);
        history.push(&raster);
        history.clear();
        assert!(history.is_empty());
    }
}
