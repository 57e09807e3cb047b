use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::interactive::{ControlEvent, VisualizerSession};
use crate::core::drawing::pixel_canvas::PixelCanvas;
use crate::core::visualizers::visualizer_kinds::VisualizerKinds;
use crate::input::gui::app::controls::show_controls;
use crate::input::gui::app::pointer::PointerInput;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

/// Pixels of touchpad scroll treated as one wheel line.
const PIXELS_PER_SCROLL_LINE: f64 = 40.0;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    session: VisualizerSession<PixelCanvas>,
    pointer: PointerInput,
    last_error_message: Option<String>,
    needs_redraw: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        session: VisualizerSession<PixelCanvas>,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            session,
            pointer: PointerInput::default(),
            last_error_message: None,
            needs_redraw: true,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        let frame = self.session.selected_surface().buffer();

        self.presenter.render(frame, egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    /// Returns and clears the flag set whenever the session redrew something.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn apply(&mut self, event: ControlEvent) {
        if let ControlEvent::Select(_) = event {
            self.pointer.released();
        }

        match self.session.handle(event) {
            Ok(redrawn) => {
                if redrawn {
                    self.last_error_message = None;
                    self.needs_redraw = true;
                }
            }
            Err(err) => {
                log::warn!("rejected {:?}: {}", event, err);
                self.last_error_message = Some(err.to_string());
                self.needs_redraw = true;
            }
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut events = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Controls")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 240.0])
                .show(ctx, |ui| {
                    ui.heading("Analysis Visualizer");
                    ui.separator();

                    events = show_controls(ui, &self.session);

                    if let Some(message) = &self.last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        for event in events {
            self.apply(event);
        }

        output
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Feeds drag and wheel input to the Weierstrass plot.
    pub fn handle_pointer_event(&mut self, event: &WindowEvent, egui_consumed: bool) {
        let control = match event {
            WindowEvent::CursorMoved { position, .. } => {
                let position = self
                    .presenter
                    .window_to_frame((position.x as f32, position.y as f32));
                self.pointer.cursor_moved(position)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let over_ui = egui_consumed || self.egui_ctx.wants_pointer_input();
                    let pannable = self.session.selected() == VisualizerKinds::Weierstrass;
                    self.pointer.pressed(over_ui, pannable)
                }
                ElementState::Released => self.pointer.released(),
            },
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64,
                    MouseScrollDelta::PixelDelta(offset) => offset.y / PIXELS_PER_SCROLL_LINE,
                };
                self.pointer.wheel(lines)
            }
            WindowEvent::Focused(false) => self.pointer.focus_lost(),
            _ => None,
        };

        let Some(control) = control else {
            return;
        };

        if self.session.selected() == VisualizerKinds::Weierstrass {
            self.apply(control.into());
        }
    }
}
