/*!
# Railview Render

Render core for an interactive 3-D train-scene viewer.

This crate owns everything between window events and presented pixels:
the per-frame pass sequence over offscreen targets, the traveling-wave
water simulation, the shared camera uniform block, the shader program
registry, and control-point picking. The GPU itself sits behind a
trait-based device abstraction; backend implementations are loaded at
runtime via the plugin system.

## Architecture

- **RenderOrchestrator**: drives the fixed multi-pass frame sequence
- **WaveField**: eight-slot traveling sine wave table for the water
- **TransformBroadcast**: projection/view block shared by all programs
- **OffscreenTarget / PingPongTargets**: offscreen pass plumbing
- **ShaderLibrary**: explicit registry of the built-in programs
- **GraphicsDevice**: backend factory trait (mocked for tests)

The application supplies the pieces the renderer deliberately does not
own: the camera rig, the track data, and the audio listener.
*/

// Internal modules
pub mod error;
pub mod log;
pub mod gfx;
pub mod waves;
pub mod transforms;
pub mod targets;
pub mod shaders;
pub mod camera;
pub mod input;
pub mod audio;
pub mod scene;
pub mod orchestrator;

// Main railview namespace module
pub mod railview {
    // Error types
    pub use crate::error::{Error, Result};

    // Frame orchestration
    pub use crate::orchestrator::{FrameClock, FrameInput, LightRig, RenderOrchestrator};

    // Water simulation
    pub use crate::waves::{Wave, WaveField, WavePayload, WAVE_CAPACITY};

    // Camera
    pub use crate::camera::{CameraMode, CameraRig, FrameCamera, MovementFlags};

    // Input translation
    pub use crate::input::{InputTranslator, Modifiers, PointerButton, ViewEvent};

    // Audio seam
    pub use crate::audio::{AudioListener, NullAudio, DEFAULT_SOURCE_POSITION};

    // Track data
    pub use crate::scene::TrackData;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Graphics abstraction sub-module
    pub mod gfx {
        pub use crate::gfx::*;
        pub use crate::targets::{OffscreenTarget, PingPongTargets};
        pub use crate::transforms::{TransformBroadcast, TransformData, TRANSFORM_BINDING_SLOT};
    }

    // Shader registry sub-module
    pub mod shaders {
        pub use crate::shaders::*;
    }

    // Scene content sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
