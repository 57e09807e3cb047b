use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::pointer::FramePosition;

pub trait GuiPresenterPort {
    /// Shows `frame` with the egui output drawn over it.
    fn render(
        &mut self,
        frame: &PixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32);

    /// Maps a physical window position onto frame pixels.
    fn window_to_frame(&self, position: (f32, f32)) -> FramePosition;
}
