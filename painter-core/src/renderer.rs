//! Flat-shaded painter's-algorithm renderer.
//!
//! Each frame clears the surface, orders triangles by an X-axis depth proxy
//! and fills them back to front. The proxy only works because the camera
//! looks straight down -X; a camera that could turn would need real depth.

use crate::geometry::{Face, Mesh};
use crate::projection::Camera;
use crate::vector::Vec2;

/// The 2D canvas a frame is painted onto.
///
/// Coordinates are in pixels with the origin at the top-left corner.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn set_fill_color(&mut self, r: u8, g: u8, b: u8);
    fn fill(&mut self);
}

/// How a triangle's depth proxy is computed from its rotated vertices.
///
/// Triangles are drawn in ascending key order. With the eye on +X, a low
/// X is far away, so near triangles paint last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthKey {
    /// Smallest X of the three vertices
    MinX,
    /// Sum of the three X coordinates
    #[default]
    SumX,
}

impl DepthKey {
    pub fn key(&self, face: &Face<'_>) -> f64 {
        let [a, b, c] = face.vertices();
        match self {
            DepthKey::MinX => a.x.min(b.x).min(c.x),
            DepthKey::SumX => a.x + b.x + c.x,
        }
    }
}

/// Absolute cosine between the camera direction and the face normal.
///
/// Back faces shade the same as front faces; nothing is culled.
pub fn brightness(camera: &Camera, face: &Face<'_>) -> f64 {
    camera.normal().dot(&face.normal()).abs()
}

/// Paints meshes through a [`Camera`] onto a [`Surface`]
pub struct Renderer {
    camera: Camera,
    width: u32,
    height: u32,
    depth_key: DepthKey,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            camera: Camera::new(width, height),
            width,
            height,
            depth_key: DepthKey::default(),
        }
    }

    pub fn with_depth_key(mut self, depth_key: DepthKey) -> Self {
        self.depth_key = depth_key;
        self
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn depth_key(&self) -> DepthKey {
        self.depth_key
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Faces of `mesh` in paint order
    pub fn paint_order<'m>(&self, mesh: &'m Mesh) -> Vec<Face<'m>> {
        let mut keyed: Vec<(Face<'m>, f64)> = mesh
            .faces()
            .map(|face| (face, self.depth_key.key(&face)))
            .collect();
        // Stable, so equal keys keep mesh order
        keyed.sort_by(|a, b| a.1.total_cmp(&b.1));
        keyed.into_iter().map(|(face, _)| face).collect()
    }

    /// Draw one full frame of `mesh`.
    pub fn render_mesh<S: Surface + ?Sized>(&self, mesh: &Mesh, surface: &mut S) {
        surface.clear(self.width as f64, self.height as f64);

        let ordered = self.paint_order(mesh);
        tracing::trace!("Rendering {} triangles", ordered.len());
        for face in &ordered {
            self.render_face(face, surface);
        }
    }

    fn render_face<S: Surface + ?Sized>(&self, face: &Face<'_>, surface: &mut S) {
        let [p1, p2, p3] = face.vertices().map(|v| self.to_screen(self.camera.project(&v)));

        surface.begin_path();
        surface.move_to(p1.x, p1.y);
        surface.line_to(p2.x, p2.y);
        surface.line_to(p3.x, p3.y);
        surface.close_path();

        let level = (brightness(&self.camera, face) * 255.0) as u8;
        surface.set_fill_color(level, level, level);
        surface.fill();
    }

    fn to_screen(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x + self.width as f64 / 2.0,
            point.y + self.height as f64 / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec3;
    use float_eq::assert_float_eq;

    fn wall(normal_axis: usize) -> Mesh {
        // Unit triangle whose normal lies along `normal_axis`
        let mut points = [Vec3::zeros(), Vec3::zeros(), Vec3::zeros()];
        let (u, v) = ((normal_axis + 1) % 3, (normal_axis + 2) % 3);
        points[1][u] = 1.0;
        points[2][v] = 1.0;
        Mesh::new(points.to_vec(), vec![[0, 1, 2]]).unwrap()
    }

    #[test]
    fn test_brightness_facing_camera() {
        let camera = Camera::default();
        let mesh = wall(0);
        assert_float_eq!(brightness(&camera, &mesh.face(0).unwrap()), 1.0, abs <= 1e-12);
    }

    #[test]
    fn test_brightness_edge_on() {
        let camera = Camera::default();
        for axis in [1, 2] {
            let mesh = wall(axis);
            assert_float_eq!(brightness(&camera, &mesh.face(0).unwrap()), 0.0, abs <= 1e-12);
        }
    }

    #[test]
    fn test_depth_keys() {
        let mesh = Mesh::new(
            vec![
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(-2.0, 1.0, 0.0),
                Vec3::new(4.0, 0.0, 1.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let face = mesh.face(0).unwrap();
        assert_eq!(DepthKey::MinX.key(&face), -2.0);
        assert_eq!(DepthKey::SumX.key(&face), 3.0);
    }

    #[test]
    fn test_equal_keys_keep_mesh_order() {
        let mesh = Mesh::new(vec![Vec3::zeros(); 3], vec![[0, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap();
        let renderer = Renderer::new(100, 100);
        let order: Vec<[usize; 3]> = renderer
            .paint_order(&mesh)
            .iter()
            .map(|f| f.triangle().indices())
            .collect();
        assert_eq!(order, vec![[0, 1, 2], [1, 2, 0], [2, 0, 1]]);
    }
}
