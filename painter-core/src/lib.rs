//! Painter Core - a flat-shaded software renderer for a single rotating solid
//!
//! Holds the vector math, mesh model, mesh builders and loaders, the camera
//! projection and the painter's-algorithm renderer. Front ends provide a
//! [`Surface`] to draw on and feed key states into a [`Scene`].

pub mod builder;
pub mod error;
pub mod geometry;
pub mod input;
pub mod loader;
pub mod obj;
pub mod projection;
pub mod renderer;
pub mod scene;
pub mod scheduler;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use builder::{build_from_data, build_pyramid};
pub use error::{LoadError, MeshError};
pub use geometry::{Face, Mesh, Triangle};
pub use input::{InputState, KeyState};
pub use loader::{load_model_data, ModelData};
pub use projection::Camera;
pub use renderer::{brightness, DepthKey, Renderer, Surface};
pub use scene::{Controls, Scene};
pub use scheduler::{FrameScheduler, StopHandle, DEFAULT_FRAME_INTERVAL};
pub use transform::{rotate, Rotation};
pub use vector::{unit, Vec2, Vec3};
