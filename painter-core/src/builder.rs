/// Procedural and data-driven mesh construction
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::MeshError;
use crate::geometry::Mesh;
use crate::loader::ModelData;
use crate::vector::Vec3;

/// Rotation applied to every mesh built from external data, turning the
/// data's up axis into this renderer's +Z.
pub const DATA_UP_CORRECTION: Vec3 = Vec3::new(FRAC_PI_2, 0.0, 0.0);

/// Build an `n`-sided pyramid: a triangle fan for the base in the XY plane
/// and one side face per base edge meeting at the apex `(0, 0, height)`.
///
/// Produces `2 * n` triangles. `n` below 3 gives a degenerate solid.
pub fn build_pyramid(n: usize, radius: f64, height: f64) -> Mesh {
    const ORIGIN: usize = 0;
    const APEX: usize = 1;

    let mut vertices = Vec::with_capacity(n + 2);
    vertices.push(Vec3::zeros());
    vertices.push(Vec3::new(0.0, 0.0, height));
    for i in 0..n {
        let angle = i as f64 / n as f64 * PI * 2.0;
        vertices.push(Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0));
    }

    let ring = |i: usize| 2 + i % n;
    let mut faces = Vec::with_capacity(2 * n);
    for i in 0..n {
        let (inner, outer) = (ring(i), ring(i + 1));
        faces.push([ORIGIN, inner, outer]);
        faces.push([APEX, inner, outer]);
    }

    tracing::debug!("Built {}-sided pyramid with {} triangles", n, faces.len());
    Mesh::from_indexed(vertices, faces)
}

/// Build a mesh from an external vertex/face table.
///
/// Face indices are 1-based. Every point is shifted down by one unit in Y
/// and the finished mesh carries [`DATA_UP_CORRECTION`] as its rotation.
pub fn build_from_data(data: &ModelData) -> Result<Mesh, MeshError> {
    let vertices: Vec<Vec3> = data
        .points
        .iter()
        .map(|&[x, y, z]| Vec3::new(x, y - 1.0, z))
        .collect();

    let len = vertices.len();
    let mut faces = Vec::with_capacity(data.triangles.len());
    for (face, triple) in data.triangles.iter().enumerate() {
        let mut indices = [0usize; 3];
        for (slot, &index) in indices.iter_mut().zip(triple) {
            if index == 0 || index > len {
                return Err(MeshError::IndexOutOfBounds { face, index, len });
            }
            *slot = index - 1;
        }
        faces.push(indices);
    }

    tracing::debug!(
        "Built mesh from data: {} vertices, {} triangles",
        len,
        faces.len()
    );

    let mut mesh = Mesh::from_indexed(vertices, faces);
    mesh.set_rotation(DATA_UP_CORRECTION);
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::rotate_about_origin;
    use float_eq::assert_float_eq;

    #[test]
    fn test_pyramid_triangle_count() {
        assert_eq!(build_pyramid(3, 1.0, 1.0).triangle_count(), 6);
        assert_eq!(build_pyramid(10, 100.0, 200.0).triangle_count(), 20);
    }

    #[test]
    fn test_pyramid_ring_points_on_radius() {
        let radius = 2.5;
        let mesh = build_pyramid(7, radius, 4.0);
        for face in mesh.faces() {
            let [first, a, b] = face.vertices();
            assert!(first == Vec3::zeros() || first == Vec3::new(0.0, 0.0, 4.0));
            for p in [a, b] {
                assert_float_eq!(p.x * p.x + p.y * p.y, radius * radius, abs <= 1e-9);
                assert_eq!(p.z, 0.0);
            }
        }
    }

    #[test]
    fn test_pyramid_faces_alternate_base_and_side() {
        let mesh = build_pyramid(4, 1.0, 3.0);
        let apexes: Vec<f64> = mesh.faces().map(|f| f.vertex(0).z).collect();
        assert_eq!(apexes, vec![0.0, 3.0, 0.0, 3.0, 0.0, 3.0, 0.0, 3.0]);
    }

    #[test]
    fn test_pyramid_closes_ring() {
        let mesh = build_pyramid(5, 1.0, 1.0);
        let last = mesh.face(9).unwrap();
        let first = mesh.face(0).unwrap();
        assert_eq!(last.vertex(2), first.vertex(1));
    }

    #[test]
    fn test_build_from_data_single_face() {
        let data = ModelData {
            points: vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]],
            triangles: vec![[1, 2, 3]],
        };
        let mesh = build_from_data(&data).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.rotation(), DATA_UP_CORRECTION);

        let face = mesh.face(0).unwrap();
        for (i, [x, y, z]) in data.points.iter().enumerate() {
            let expected = rotate_about_origin(&Vec3::new(*x, y - 1.0, *z), &DATA_UP_CORRECTION);
            assert_eq!(face.vertex(i), expected);
        }
    }

    #[test]
    fn test_build_from_data_shares_vertices() {
        let data = ModelData {
            points: vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
            triangles: vec![[1, 2, 3], [2, 4, 3]],
        };
        let mesh = build_from_data(&data).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangles()[1].indices(), [1, 3, 2]);
    }

    #[test]
    fn test_build_from_data_rejects_bad_indices() {
        let mut data = ModelData {
            points: vec![[0.0; 3]; 3],
            triangles: vec![[1, 2, 4]],
        };
        assert_eq!(
            build_from_data(&data).unwrap_err(),
            MeshError::IndexOutOfBounds {
                face: 0,
                index: 4,
                len: 3
            }
        );

        data.triangles = vec![[1, 2, 3], [0, 1, 2]];
        assert_eq!(
            build_from_data(&data).unwrap_err(),
            MeshError::IndexOutOfBounds {
                face: 1,
                index: 0,
                len: 3
            }
        );
    }
}
