use crate::controllers::interactive::WeierstrassControl;

/// Zoom factor per mouse-wheel line.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Cursor position in frame pixels. `inside` is false when the cursor is over the
/// window but outside the drawn frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FramePosition {
    pub x: f64,
    pub y: f64,
    pub inside: bool,
}

/// Turns raw pointer input into drag-pan and wheel-zoom controls.
///
/// Presses only start a drag over the frame, but moves and releases are taken from
/// anywhere in the window so a drag always ends.
#[derive(Debug, Default)]
pub struct PointerInput {
    cursor: Option<FramePosition>,
    dragging: bool,
}

impl PointerInput {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn cursor_moved(&mut self, position: FramePosition) -> Option<WeierstrassControl> {
        self.cursor = Some(position);

        self.dragging
            .then_some(WeierstrassControl::PointerMoved { x: position.x })
    }

    /// `over_ui` is true when the control panel owns the pointer; `pannable` is false when
    /// the selected plot has no drag.
    pub fn pressed(&mut self, over_ui: bool, pannable: bool) -> Option<WeierstrassControl> {
        let position = self.cursor?;

        if over_ui || !pannable || !position.inside {
            return None;
        }

        self.dragging = true;
        Some(WeierstrassControl::PointerPressed { x: position.x })
    }

    pub fn released(&mut self) -> Option<WeierstrassControl> {
        self.dragging = false;
        Some(WeierstrassControl::PointerReleased)
    }

    pub fn focus_lost(&mut self) -> Option<WeierstrassControl> {
        self.released()
    }

    /// Positive `lines` zoom in.
    pub fn wheel(&self, lines: f64) -> Option<WeierstrassControl> {
        if lines == 0.0 || !lines.is_finite() {
            return None;
        }

        Some(WeierstrassControl::ZoomBy(WHEEL_ZOOM_STEP.powf(lines)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, inside: bool) -> FramePosition {
        FramePosition { x, y: 10.0, inside }
    }

    #[test]
    fn test_press_over_frame_starts_drag() {
        let mut pointer = PointerInput::default();
        assert_eq!(pointer.cursor_moved(at(40.0, true)), None);

        assert_eq!(
            pointer.pressed(false, true),
            Some(WeierstrassControl::PointerPressed { x: 40.0 })
        );
        assert_eq!(
            pointer.cursor_moved(at(-25.0, false)),
            Some(WeierstrassControl::PointerMoved { x: -25.0 })
        );
    }

    #[test]
    fn test_press_outside_frame_or_on_panel_is_ignored() {
        let mut pointer = PointerInput::default();
        assert_eq!(pointer.pressed(false, true), None);

        pointer.cursor_moved(at(5.0, false));
        assert_eq!(pointer.pressed(false, true), None);

        pointer.cursor_moved(at(5.0, true));
        assert_eq!(pointer.pressed(true, true), None);
        assert!(!pointer.is_dragging());
    }

    #[test]
    fn test_press_without_pannable_plot_does_not_drag() {
        let mut pointer = PointerInput::default();
        pointer.cursor_moved(at(5.0, true));

        assert_eq!(pointer.pressed(false, false), None);
        assert!(!pointer.is_dragging());
        assert_eq!(pointer.cursor_moved(at(30.0, true)), None);
    }

    #[test]
    fn test_release_and_focus_loss_end_drag() {
        let mut pointer = PointerInput::default();
        pointer.cursor_moved(at(5.0, true));
        pointer.pressed(false, true);

        assert_eq!(pointer.focus_lost(), Some(WeierstrassControl::PointerReleased));
        assert!(!pointer.is_dragging());
        assert_eq!(pointer.cursor_moved(at(9.0, true)), None);
    }

    #[test]
    fn test_wheel_zoom_factor() {
        let pointer = PointerInput::default();

        assert_eq!(pointer.wheel(1.0), Some(WeierstrassControl::ZoomBy(1.1)));
        assert_eq!(pointer.wheel(0.0), None);
        assert!(matches!(pointer.wheel(-2.0), Some(WeierstrassControl::ZoomBy(f)) if f < 1.0));
    }
}
