// File: crates/cvrp-charts/src/window.rs
// Summary: Window backend: rasterizes the figure with chart-core and blits it via winit + softbuffer.

use std::num::NonZeroU32;

use chart_core::error::Result;
use chart_core::{ChartError, Figure, FigureBackend, RenderOptions, SkiaRaster};
use log::{debug, error};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

const TITLE: &str = "CVRP Algorithm Benchmarks";

/// Shows a figure in a window and blocks until the window is closed.
pub struct WindowPresenter {
    raster: SkiaRaster,
}

impl WindowPresenter {
    pub fn new(opts: &RenderOptions) -> Self {
        Self { raster: SkiaRaster::new(opts) }
    }
}

fn backend_err(what: &str, e: impl std::fmt::Display) -> ChartError {
    ChartError::Backend(format!("{what}: {e}"))
}

impl FigureBackend for WindowPresenter {
    fn draw(&mut self, figure: &Figure) -> Result<()> {
        let mut event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(PhysicalSize::new(figure.width.max(1) as u32, figure.height.max(1) as u32))
            .build(&event_loop)
            .map_err(|e| backend_err("build window", e))?;

        let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| backend_err("softbuffer context", e))?;
        let mut surface =
            unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| backend_err("softbuffer surface", e))?;

        let raster = &self.raster;
        let mut failure: Option<ChartError> = None;
        let mut size = window.inner_size();

        let mut present = |size: PhysicalSize<u32>| -> Result<()> {
            let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                return Ok(()); // minimized
            };
            surface.resize(w, h).map_err(|e| backend_err("resize surface", e))?;
            let frame = raster.rasterize_sized(figure, size.width as i32, size.height as i32)?;

            let mut buffer = surface.buffer_mut().map_err(|e| backend_err("acquire frame", e))?;
            // softbuffer expects 0RGB
            for (dst, px) in buffer.iter_mut().zip(frame.pixels.chunks_exact(4)) {
                *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
            }
            buffer.present().map_err(|e| backend_err("present frame", e))
        };

        window.request_redraw();
        event_loop.run_return(|event, _, cf| {
            *cf = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                    WindowEvent::Resized(new_size) => {
                        debug!("resized to {}x{}", new_size.width, new_size.height);
                        size = new_size;
                        window.request_redraw();
                    }
                    _ => {}
                },
                Event::RedrawRequested(id) if id == window.id() => {
                    if let Err(e) = present(size) {
                        error!("{e}");
                        failure = Some(e);
                        *cf = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
