/// Horizontal drag gesture tracking for panning.
///
/// `release` always ends the gesture, whatever happened before it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragPan {
    dragging: bool,
    last_x: f64,
}

impl DragPan {
    pub fn press(&mut self, x: f64) {
        self.dragging = true;
        self.last_x = x;
    }

    /// Returns the pointer travel in pixels since the previous event, or `None` when idle.
    pub fn move_to(&mut self, x: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }

        let dx = x - self.last_x;
        self.last_x = x;

        Some(dx)
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
