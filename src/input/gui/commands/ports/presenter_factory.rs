use winit::window::Window;

use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, frame_width: u32, frame_height: u32) -> T;
}
