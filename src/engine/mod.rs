//! The engine owns the GPU context, the cube model, the input processor and
//! frame pacing. A host drives it with one [`RubikEngine::update`] and one
//! [`RubikEngine::render`] per frame and forwards window events to
//! [`RubikEngine::handle_event`].

pub mod command;

use std::path::Path;

use self::command::CubeCommand;
use crate::cube::{RubikCube, StepOutcome};
use crate::error::RubikError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposer, ShaderSources};
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::renderer::CubeRenderer;
use crate::util::frame_timing::FrameTiming;

/// Whether the host should keep running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Apply one command to the model.
fn apply(
    cube: &mut RubikCube,
    options: &Options,
    command: CubeCommand,
) -> Flow {
    match command {
        CubeCommand::RotateView { axis, degrees } => {
            cube.rotate_view(axis, degrees);
        }
        CubeCommand::Zoom { delta } => cube.zoom(delta),
        CubeCommand::Turn(layer) => {
            let _ = cube.request_turn(layer);
        }
        CubeCommand::ToggleDirection => {
            let _ = cube.toggle_direction();
        }
        CubeCommand::Scramble => {
            if !cube.is_turning() && cube.pending_turns() == 0 {
                let moves = options.animation.scramble_moves;
                cube.scramble(&mut rand::rng(), moves);
            }
        }
        CubeCommand::Scale { factor } => {
            if !cube.scale(factor) {
                log::debug!("scale by {factor} refused");
            }
        }
        CubeCommand::Quit => return Flow::Exit,
    }
    Flow::Continue
}

/// Owns everything needed to run and draw the cube.
pub struct RubikEngine {
    context: RenderContext,
    renderer: CubeRenderer,
    cube: RubikCube,
    input: InputProcessor,
    options: Options,
    frame_timing: FrameTiming,
    exit_requested: bool,
}

impl RubikEngine {
    /// Set up the GPU, load shaders from `shader_dir` (or the built-in
    /// copies) and build a solved cube.
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::Gpu`] if the device or surface cannot be
    /// created and [`RubikError::Shader`] if the shaders fail to load or
    /// compose.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
        shader_dir: &Path,
    ) -> Result<Self, RubikError> {
        let context = RenderContext::new(window, size).await?;
        let sources = ShaderSources::load_or_embedded(shader_dir)?;
        let mut composer = ShaderComposer::new(&sources)?;

        let mut cube = RubikCube::new(&options);
        cube.set_aspect(context.aspect());
        let renderer = CubeRenderer::new(
            &context,
            &mut composer,
            &sources,
            cube.atoms().len(),
        )?;

        log::info!(
            "engine ready: {}x{}, {} fps cap, {} frames per turn",
            context.config.width,
            context.config.height,
            options.animation.target_fps,
            options.animation.turn_frames
        );

        Ok(Self {
            context,
            renderer,
            cube,
            input: InputProcessor::new(&options),
            frame_timing: FrameTiming::new(options.animation.target_fps),
            options,
            exit_requested: false,
        })
    }

    /// The cube model.
    #[must_use]
    pub fn cube(&self) -> &RubikCube {
        &self.cube
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Frame pacing state.
    #[must_use]
    pub fn frame_timing(&self) -> &FrameTiming {
        &self.frame_timing
    }

    /// Whether a quit command was executed.
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Resize the surface and update every atom's projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.cube.set_aspect(self.context.aspect());
    }

    /// Reconfigure the surface at its current size.
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Feed one window event through the input processor.
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            self.execute(command);
        }
    }

    /// Run one command.
    pub fn execute(&mut self, command: CubeCommand) {
        if apply(&mut self.cube, &self.options, command) == Flow::Exit {
            log::info!("quit requested");
            self.exit_requested = true;
        }
    }

    /// Poll held keys and advance the turn animation by one frame.
    pub fn update(&mut self) -> StepOutcome {
        for command in self.input.poll(self.cube.is_turning()) {
            self.execute(command);
        }
        self.cube.step()
    }

    /// Draw the current frame and present it.
    ///
    /// # Errors
    ///
    /// Returns the surface error if no frame could be acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.renderer.prepare(&self.context.queue, &self.cube);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();
        {
            let mut render_pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Cube Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(
                                    self.options.colors.clear_color(),
                                ),
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: self.context.depth_view(),
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            self.renderer.draw(&mut render_pass);
        }
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    /// Mark the end of a frame and sleep out the rest of its budget.
    pub fn end_frame(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        self.frame_timing.sleep_remaining();
        self.frame_timing.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::cube::Layer;

    #[test]
    fn quit_exits() {
        let options = Options::default();
        let mut cube = RubikCube::new(&options);
        assert_eq!(apply(&mut cube, &options, CubeCommand::Quit), Flow::Exit);
        assert_eq!(
            apply(&mut cube, &options, CubeCommand::Turn(Layer::Top)),
            Flow::Continue
        );
        assert!(cube.is_turning());
    }

    #[test]
    fn scramble_queues_configured_moves_once() {
        let mut options = Options::default();
        options.animation.scramble_moves = 5;
        let mut cube = RubikCube::new(&options);
        let _ = apply(&mut cube, &options, CubeCommand::Scramble);
        assert_eq!(cube.pending_turns(), 5);
        let _ = apply(&mut cube, &options, CubeCommand::Scramble);
        assert_eq!(cube.pending_turns(), 5);
    }

    #[test]
    fn view_commands_reach_every_atom() {
        let options = Options::default();
        let mut cube = RubikCube::new(&options);
        let before = cube.atoms()[7].camera().model();
        let _ = apply(
            &mut cube,
            &options,
            CubeCommand::RotateView {
                axis: Vec3::X,
                degrees: 1.0,
            },
        );
        assert_ne!(cube.atoms()[7].camera().model(), before);
        let _ = apply(&mut cube, &options, CubeCommand::Zoom { delta: 2.0 });
        assert_eq!(cube.eye_distance(), 9.0);
        let _ = apply(&mut cube, &options, CubeCommand::Scale { factor: 1.1 });
        assert!((cube.spacing() - 1.155).abs() < 1e-5);
    }
}
