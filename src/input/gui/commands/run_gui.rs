use std::marker::PhantomData;

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::VisualizerSession;
use crate::core::drawing::pixel_canvas::PixelCanvas;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

/// Size of every visualizer's canvas. The window scales it to fit.
pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 400;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Analysis Visualizer")
                .with_inner_size(LogicalSize::new(900.0, 600.0))
                .with_min_inner_size(LogicalSize::new(320.0, 240.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let presenter: P = self
            .presenter_factory
            .build(window, CANVAS_WIDTH, CANVAS_HEIGHT);
        let mut session =
            VisualizerSession::try_new(|_| PixelCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT))
                .expect("Failed to allocate canvases");

        if let Err(err) = session.render_all() {
            log::error!("initial render failed: {}", err);
        }
        log::info!("starting with {}", session.selected());

        let mut app = GuiApp::new(window, &event_loop, presenter, session);
        let mut redraw_pending = true;

        event_loop
            .run(|event, elwt| {
                match event {
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => {
                        // egui sees every event first
                        let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                        if egui_repaint {
                            redraw_pending = true;
                        }

                        match event {
                            WindowEvent::CloseRequested => {
                                log::info!("window closed");
                                elwt.exit();
                            }
                            WindowEvent::RedrawRequested => {
                                redraw_pending = false;

                                let egui_output = app.update_ui(window);

                                app.egui_state.handle_platform_output(
                                    window,
                                    egui_output.platform_output.clone(),
                                );

                                if egui_output
                                    .viewport_output
                                    .values()
                                    .any(|v| v.repaint_delay.is_zero())
                                {
                                    redraw_pending = true;
                                }

                                if let Err(e) = app.render(egui_output) {
                                    log::error!("render error: {e}");
                                    elwt.exit();
                                }
                            }
                            WindowEvent::Resized(size) => {
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                                app.scale_factor = *scale_factor;
                                app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                                let size = window.inner_size();
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            _ => app.handle_pointer_event(event, egui_consumed),
                        }

                        if app.take_needs_redraw() {
                            redraw_pending = true;
                        }
                    }
                    Event::AboutToWait => {
                        if redraw_pending {
                            window.request_redraw();
                        }
                    }
                    _ => {}
                }
            })
            .expect("Event loop error");
    }
}
