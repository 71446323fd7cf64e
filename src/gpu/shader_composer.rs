use std::borrow::Cow;
use std::path::Path;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage,
    ShaderType,
};

use crate::error::RubikError;

/// The three WGSL sources the cube pipeline is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    /// Vertex stage (`rubik_vertex.wgsl`).
    pub vertex: String,
    /// Fragment stage (`rubik_fragment.wgsl`).
    pub fragment: String,
    /// Shared `rubik::camera` import module (`modules/camera.wgsl`).
    pub camera_module: String,
}

impl ShaderSources {
    /// Vertex stage file name inside the shader directory.
    pub const VERTEX_FILE: &'static str = "rubik_vertex.wgsl";
    /// Fragment stage file name inside the shader directory.
    pub const FRAGMENT_FILE: &'static str = "rubik_fragment.wgsl";
    /// Camera module path inside the shader directory.
    pub const CAMERA_MODULE_FILE: &'static str = "modules/camera.wgsl";

    /// The copies compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            vertex: include_str!("../../assets/shaders/rubik_vertex.wgsl")
                .to_owned(),
            fragment: include_str!("../../assets/shaders/rubik_fragment.wgsl")
                .to_owned(),
            camera_module: include_str!(
                "../../assets/shaders/modules/camera.wgsl"
            )
            .to_owned(),
        }
    }

    /// Read all three sources from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::Shader`] naming the first file that cannot be
    /// read.
    pub fn load(dir: &Path) -> Result<Self, RubikError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|e| {
                RubikError::Shader(format!("{}: {e}", path.display()))
            })
        };
        Ok(Self {
            vertex: read(Self::VERTEX_FILE)?,
            fragment: read(Self::FRAGMENT_FILE)?,
            camera_module: read(Self::CAMERA_MODULE_FILE)?,
        })
    }

    /// Read from `dir` when it exists, otherwise fall back to the embedded
    /// copies.
    ///
    /// # Errors
    ///
    /// Fails like [`ShaderSources::load`] when `dir` exists.
    pub fn load_or_embedded(dir: &Path) -> Result<Self, RubikError> {
        if dir.is_dir() {
            log::info!("loading shaders from {}", dir.display());
            Self::load(dir)
        } else {
            log::warn!(
                "shader directory {} not found, using built-in shaders",
                dir.display()
            );
            Ok(Self::embedded())
        }
    }
}

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` support.
///
/// The shared camera module is registered at construction time. Stage
/// shaders use `#import rubik::camera::{...}` to pull it in. The composer
/// produces `naga::Module` IR directly, skipping WGSL re-parse at runtime.
pub struct ShaderComposer {
    composer: Composer,
}

impl ShaderComposer {
    /// Create a composer with the camera module from `sources` registered.
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::Shader`] if the camera module does not parse.
    pub fn new(sources: &ShaderSources) -> Result<Self, RubikError> {
        let mut composer = Composer::default();
        let registered = composer
            .add_composable_module(ComposableModuleDescriptor {
                source: &sources.camera_module,
                file_path: ShaderSources::CAMERA_MODULE_FILE,
                language: ShaderLanguage::Wgsl,
                ..Default::default()
            })
            .map(|_| ());
        if let Err(e) = registered {
            return Err(RubikError::Shader(format!(
                "failed to register {}: {}",
                ShaderSources::CAMERA_MODULE_FILE,
                e.emit_to_string(&composer)
            )));
        }
        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import`
    /// directives) into a `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::Shader`] with the composer's diagnostics.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, RubikError> {
        let naga_module = self.compose_naga(source, file_path)?;
        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose a shader source into a `naga::Module` without creating a
    /// wgpu shader module. Works without a GPU device.
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::Shader`] with the composer's diagnostics.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, RubikError> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| {
                RubikError::Shader(format!(
                    "failed to compose {file_path}: {}",
                    e.emit_to_string(&self.composer)
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_shaders_compose() {
        let sources = ShaderSources::embedded();
        let mut composer = ShaderComposer::new(&sources).unwrap();
        let vertex = composer
            .compose_naga(&sources.vertex, ShaderSources::VERTEX_FILE)
            .unwrap();
        assert!(vertex.entry_points.iter().any(|e| e.name == "vs_main"));
        let fragment = composer
            .compose_naga(&sources.fragment, ShaderSources::FRAGMENT_FILE)
            .unwrap();
        assert!(fragment.entry_points.iter().any(|e| e.name == "fs_main"));
    }

    #[test]
    fn on_disk_shaders_match_embedded() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/shaders");
        let loaded = ShaderSources::load_or_embedded(&dir).unwrap();
        assert_eq!(loaded, ShaderSources::embedded());
    }

    #[test]
    fn missing_directory_falls_back() {
        let dir = Path::new("/nonexistent/rubik/shaders");
        assert!(matches!(
            ShaderSources::load(dir),
            Err(RubikError::Shader(_))
        ));
        assert_eq!(
            ShaderSources::load_or_embedded(dir).unwrap(),
            ShaderSources::embedded()
        );
    }

    #[test]
    fn broken_source_is_a_shader_error() {
        let sources = ShaderSources::embedded();
        let mut composer = ShaderComposer::new(&sources).unwrap();
        let err = composer
            .compose_naga("fn broken( {", "broken.wgsl")
            .unwrap_err();
        assert!(matches!(
            err,
            RubikError::Shader(msg) if msg.contains("broken.wgsl")
        ));
    }
}
