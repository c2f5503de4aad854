/// Euler rotation state and the intrinsic X -> Y -> Z rotation
use nalgebra::Matrix3;

use crate::vector::Vec3;

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    pub fn as_vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for Rotation {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Rotation> for Vec3 {
    fn from(r: Rotation) -> Self {
        r.as_vector()
    }
}

/// Rotate `point` about `origin`.
///
/// The X rotation runs first, the Y rotation reads the already rotated
/// coordinates, and the Z rotation reads those in turn. Swapping the order
/// gives a different orientation.
pub fn rotate(point: &Vec3, rotation: &Vec3, origin: &Vec3) -> Vec3 {
    let mut p = point - origin;

    // x-axis
    let (sin, cos) = rotation.x.sin_cos();
    let (y, z) = (cos * p.y - sin * p.z, sin * p.y + cos * p.z);
    p.y = y;
    p.z = z;

    // y-axis
    let (sin, cos) = rotation.y.sin_cos();
    let (x, z) = (cos * p.x - sin * p.z, sin * p.x + cos * p.z);
    p.x = x;
    p.z = z;

    // z-axis
    let (sin, cos) = rotation.z.sin_cos();
    let (x, y) = (cos * p.x - sin * p.y, sin * p.x + cos * p.y);
    p.x = x;
    p.y = y;

    p + origin
}

/// Rotate `point` about the coordinate origin.
pub fn rotate_about_origin(point: &Vec3, rotation: &Vec3) -> Vec3 {
    rotate(point, rotation, &Vec3::zeros())
}

/// The single matrix equivalent to [`rotate`] about the origin.
pub fn rotation_matrix(rotation: &Vec3) -> Matrix3<f64> {
    let (sx, cx) = rotation.x.sin_cos();
    let (sy, cy) = rotation.y.sin_cos();
    let (sz, cz) = rotation.z.sin_cos();

    #[rustfmt::skip]
    let rx = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, cx, -sx,
        0.0, sx, cx,
    );
    #[rustfmt::skip]
    let ry = Matrix3::new(
        cy, 0.0, -sy,
        0.0, 1.0, 0.0,
        sy, 0.0, cy,
    );
    #[rustfmt::skip]
    let rz = Matrix3::new(
        cz, -sz, 0.0,
        sz, cz, 0.0,
        0.0, 0.0, 1.0,
    );

    // Applied to column vectors: X first, then Y, then Z
    rz * ry * rx
}
