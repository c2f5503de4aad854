/// One rotating solid, its renderer, and the per-frame update step
use std::f64::consts::PI;

use crate::geometry::Mesh;
use crate::input::KeyState;
use crate::renderer::{Renderer, Surface};
use crate::transform::Rotation;

/// Per-frame step sizes for keyboard control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    /// Eye movement along X per frame while `w`/`s` is held
    pub camera_speed: f64,
    /// Radians per frame while an arrow key is held
    pub rotate_speed: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            camera_speed: 5.0,
            rotate_speed: PI * 0.01,
        }
    }
}

pub struct Scene {
    mesh: Mesh,
    renderer: Renderer,
    controls: Controls,
}

impl Scene {
    pub fn new(mesh: Mesh, renderer: Renderer) -> Self {
        Self {
            mesh,
            renderer,
            controls: Controls::default(),
        }
    }

    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Swap in a different solid, keeping the camera where it is
    pub fn set_mesh(&mut self, mesh: Mesh) {
        self.mesh = mesh;
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// Apply one frame of held keys to the camera and the mesh rotation.
    ///
    /// `w`/`s` move the eye toward/away from the origin. Left/Right turn
    /// about Z, Down/Up about Y.
    pub fn advance<K: KeyState + ?Sized>(&mut self, keys: &K) {
        let Controls {
            camera_speed,
            rotate_speed,
        } = self.controls;

        let camera = self.renderer.camera_mut();
        if keys.is_down("w") {
            camera.eye.x -= camera_speed;
        }
        if keys.is_down("s") {
            camera.eye.x += camera_speed;
        }

        let mut rotation = Rotation::from(self.mesh.rotation());
        if keys.is_down("ArrowLeft") {
            rotation.rotate(0.0, 0.0, -rotate_speed);
        }
        if keys.is_down("ArrowRight") {
            rotation.rotate(0.0, 0.0, rotate_speed);
        }
        if keys.is_down("ArrowDown") {
            rotation.rotate(0.0, -rotate_speed, 0.0);
        }
        if keys.is_down("ArrowUp") {
            rotation.rotate(0.0, rotate_speed, 0.0);
        }
        self.mesh.set_rotation(rotation.into());
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.renderer.render_mesh(&self.mesh, surface);
    }

    /// Advance, then draw
    pub fn tick<K: KeyState + ?Sized, S: Surface + ?Sized>(&mut self, keys: &K, surface: &mut S) {
        self.advance(keys);
        self.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_pyramid;
    use crate::input::InputState;
    use crate::vector::Vec3;
    use float_eq::assert_float_eq;

    fn scene() -> Scene {
        Scene::new(build_pyramid(4, 10.0, 20.0), Renderer::new(800, 600))
    }

    #[test]
    fn test_idle_frame_changes_nothing() {
        let mut scene = scene();
        scene.advance(&InputState::new());
        assert_eq!(scene.mesh().rotation(), Vec3::zeros());
        assert_eq!(scene.renderer().camera().eye.x, 300.0);
    }

    #[test]
    fn test_keys_move_camera_and_rotate() {
        let mut scene = scene();
        let mut input = InputState::new();
        input.press("w");
        input.press("ArrowRight");
        input.press("ArrowDown");

        scene.advance(&input);
        scene.advance(&input);

        assert_eq!(scene.renderer().camera().eye.x, 290.0);
        let rotation = scene.mesh().rotation();
        assert_float_eq!(rotation.z, 2.0 * PI * 0.01, abs <= 1e-12);
        assert_float_eq!(rotation.y, -2.0 * PI * 0.01, abs <= 1e-12);
        assert!(scene
            .mesh()
            .triangles()
            .iter()
            .all(|t| t.rotation() == rotation));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut scene = scene().with_controls(Controls {
            camera_speed: 1.0,
            rotate_speed: 0.5,
        });
        let mut input = InputState::new();
        for key in ["w", "s", "ArrowUp", "ArrowDown"] {
            input.press(key);
        }
        scene.advance(&input);
        assert_eq!(scene.renderer().camera().eye.x, 300.0);
        assert_eq!(scene.mesh().rotation().y, 0.0);
    }
}
