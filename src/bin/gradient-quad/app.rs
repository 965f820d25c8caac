use std::ffi::CString;
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentContext, PossiblyCurrentContext, Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use gl_wrapper::buffer::BufferError;
use gl_wrapper::program::{PBError, Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

use gradient_quad::shaders::{FRAGMENT_SHADER, VERTEX_SHADER};
use gradient_quad::{build_frame, ProgramInfo, ProgramInfoError, QuadBuffers};

use crate::args::Args;

const DEPTH_BITS: u8 = 24;

pub struct App {
    event_loop: EventLoop<()>,
    state: GlState,
}

/// Everything tied to the GL context.
///
/// Fields drop in declaration order, so GL objects go before the context and surface.
struct GlState {
    buffers: QuadBuffers,
    program: Program,
    program_info: ProgramInfo,
    gl_renderer: GlRenderer,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
}

impl App {
    pub fn new(args: &Args) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(args.width, args.height)))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title(&args.title);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new().with_depth_size(DEPTH_BITS);

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| {
                configs.next().expect("display offered no configs")
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or(AppError::NoWindow)?;
        let gl_context = create_context(&gl_config, &window)?;
        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = gl_context
            .make_current(&gl_window.surface)
            .map_err(AppError::Context)?;

        let gl_display = gl_config.display();

        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(name) => gl_display.get_proc_address(name.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        log::info!(
            "acquired GL context ({} depth bits)",
            gl_config.depth_size()
        );

        let program = ProgramBuilder::new(VERTEX_SHADER, FRAGMENT_SHADER).build()?;
        let program_info = ProgramInfo::from_program(&program)?;
        log::debug!("{program_info:?}");

        let buffers = QuadBuffers::new()?;

        let state = GlState {
            buffers,
            program,
            program_info,
            gl_renderer: GlRenderer::new(),
            gl_context,
            gl_window,
        };

        Ok(Self { event_loop, state })
    }

    pub fn run(self) -> ! {
        let App { event_loop, state } = self;
        let mut state = Some(state);

        event_loop.run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::RedrawRequested(_) => {
                    if let Some(state) = &mut state {
                        state.draw();
                    }
                }
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    if let Some(state) = state.take() {
                        log::debug!(
                            "releasing program {} and quad buffers",
                            state.program.get_id()
                        );
                    }
                    control_flow.set_exit();
                }
                _ => (),
            }
        })
    }
}

impl GlState {
    fn draw(&mut self) {
        let viewport = self.gl_renderer.viewport();
        let frame = build_frame(&self.program_info, self.buffers.bindings(), viewport);

        self.gl_renderer.execute(&frame);

        if let Err(e) = self.gl_window.surface.swap_buffers(&self.gl_context) {
            log::error!("Could not present frame: {e}");
        }
    }
}

fn create_context(gl_config: &Config, window: &Window) -> Result<NotCurrentContext, AppError> {
    let handle = Some(window.raw_window_handle());
    let gl_display = gl_config.display();

    let gles_attr = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::Gles(Some(Version::new(3, 0))))
        .build(handle);

    // 4.3 accepts GLSL ES 3.00 sources
    let gl_attr = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 3))))
        .build(handle);

    unsafe {
        match gl_display.create_context(gl_config, &gles_attr) {
            Ok(context) => Ok(context),
            Err(e) => {
                log::warn!("OpenGL ES 3.0 unavailable ({e}), falling back to OpenGL 4.3");
                gl_display
                    .create_context(gl_config, &gl_attr)
                    .map_err(AppError::Context)
            }
        }
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::ZeroSized)?,
            NonZeroU32::new(height).ok_or(AppError::ZeroSized)?,
        );

        let surface = unsafe {
            config
                .display()
                .create_window_surface(config, &attrs)
                .map_err(AppError::Surface)?
        };

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create display: {0}")]
    Display(String),
    #[error("display did not create a window")]
    NoWindow,
    #[error("GL context unavailable: {0}")]
    Context(#[source] glutin::error::Error),
    #[error("could not create window surface: {0}")]
    Surface(#[source] glutin::error::Error),
    #[error("window has zero size")]
    ZeroSized,
    #[error(transparent)]
    Shader(#[from] PBError),
    #[error(transparent)]
    Interface(#[from] ProgramInfoError),
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
