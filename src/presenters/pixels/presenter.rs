use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::window::Window;

use crate::adapters::pixel_format::copy_frame_to_rgba;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::pointer::FramePosition;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

/// Shows canvas frames through a `pixels` framebuffer, with egui drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
    frame_width: u32,
    frame_height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, frame_width: u32, frame_height: u32) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(frame_width, frame_height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
            frame_width,
            frame_height,
        }
    }

    fn copy_frame(&mut self, frame: &PixelBuffer) {
        let rect = frame.pixel_rect();

        if rect.width() != self.frame_width || rect.height() != self.frame_height {
            if let Err(err) = self.pixels.resize_buffer(rect.width(), rect.height()) {
                log::error!("cannot resize framebuffer to {}x{}: {}", rect.width(), rect.height(), err);
                return;
            }
            self.frame_width = rect.width();
            self.frame_height = rect.height();
        }

        if let Err(err) = copy_frame_to_rgba(frame, self.pixels.frame_mut()) {
            log::error!("frame copy failed: {}", err);
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        frame: &PixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.copy_frame(frame);

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.width, self.height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;

        self.pixels.render_with(|encoder, render_target, context| {
            // the scaled canvas first, egui over it
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("cannot resize surface to {}x{}: {}", width, height, err);
            return;
        }

        self.width = width;
        self.height = height;
    }

    fn window_to_frame(&self, position: (f32, f32)) -> FramePosition {
        match self.pixels.window_pos_to_pixel(position) {
            Ok((x, y)) => FramePosition {
                x: x as f64,
                y: y as f64,
                inside: true,
            },
            Err((x, y)) => FramePosition {
                x: x as f64,
                y: y as f64,
                inside: false,
            },
        }
    }
}
