//! Standalone window backed by winit.
//!
//! ```no_run
//! # use rubik::Viewer;
//! Viewer::builder()
//!     .with_title("rubik")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::RubikEngine, error::RubikError, input::InputEvent,
    options::Options,
};

/// Default window size in physical pixels.
pub const DEFAULT_SIZE: (u32, u32) = (1080, 720);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    shader_dir: PathBuf,
    title: String,
    size: (u32, u32),
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "rubik", 1080×720, shaders
    /// from `assets/shaders`, default options).
    fn new() -> Self {
        Self {
            options: None,
            shader_dir: PathBuf::from("assets/shaders"),
            title: "rubik".into(),
            size: DEFAULT_SIZE,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Directory holding `rubik_vertex.wgsl`, `rubik_fragment.wgsl` and
    /// `modules/camera.wgsl`.
    #[must_use]
    pub fn with_shader_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.shader_dir = dir.into();
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            shader_dir: self.shader_dir,
            title: self.title,
            size: self.size,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the cube.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    shader_dir: PathBuf,
    title: String,
    size: (u32, u32),
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::Viewer`] if the event loop or window cannot be
    /// created, or the engine's error if GPU or shader setup fails.
    pub fn run(self) -> Result<(), RubikError> {
        let event_loop =
            EventLoop::new().map_err(|e| RubikError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            init_error: None,
            viewer: self,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| RubikError::Viewer(e.to_string()))?;

        match app.init_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<RubikEngine>,
    init_error: Option<RubikError>,
    viewer: Viewer,
}

impl ViewerApp {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RubikError> {
        let (width, height) = self.viewer.size;
        let attrs = Window::default_attributes()
            .with_title(self.viewer.title.clone())
            .with_inner_size(PhysicalSize::new(width, height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| RubikError::Viewer(e.to_string()))?,
        );

        let size = window.inner_size();
        let engine = pollster::block_on(RubikEngine::new(
            Arc::clone(&window),
            (size.width, size.height),
            self.viewer.options.clone(),
            &self.viewer.shader_dir,
        ))?;

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };

        let _ = engine.update();
        match engine.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let inner = window.inner_size();
                engine.resize(inner.width, inner.height);
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
        engine.end_frame();

        if engine.exit_requested() {
            event_loop.exit();
        } else {
            window.request_redraw();
        }
    }

    fn forward(&mut self, event: InputEvent, event_loop: &ActiveEventLoop) {
        if let Some(engine) = &mut self.engine {
            engine.handle_event(event);
            if engine.exit_requested() {
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("failed to start viewer: {e}");
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = InputEvent::from_winit_key(&event) {
                    self.forward(input, event_loop);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.forward(InputEvent::from_winit_scroll(delta), event_loop);
            }

            WindowEvent::Focused(false) => {
                self.forward(InputEvent::FocusLost, event_loop);
            }

            _ => (),
        }
    }
}
