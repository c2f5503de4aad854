/// Mesh model: a vertex arena plus triangles that index into it
use crate::error::MeshError;
use crate::transform::rotate_about_origin;
use crate::vector::{unit, Vec3};

/// A triangle face defined by three indices into its mesh's vertex pool
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    indices: [usize; 3],
    rotation: Vec3,
}

impl Triangle {
    fn new(indices: [usize; 3]) -> Self {
        Self {
            indices,
            rotation: Vec3::zeros(),
        }
    }

    pub fn indices(&self) -> [usize; 3] {
        self.indices
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }
}

/// A borrowed view of one triangle together with the vertex pool it indexes
#[derive(Debug, Clone, Copy)]
pub struct Face<'a> {
    pool: &'a [Vec3],
    triangle: &'a Triangle,
}

impl<'a> Face<'a> {
    /// Vertex `i` (0, 1 or 2) rotated by the triangle's current rotation.
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn vertex(&self, i: usize) -> Vec3 {
        let point = &self.pool[self.triangle.indices[i]];
        rotate_about_origin(point, &self.triangle.rotation)
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.vertex(0), self.vertex(1), self.vertex(2)]
    }

    /// Unit face normal of the rotated triangle, or zero when degenerate
    pub fn normal(&self) -> Vec3 {
        let [p1, p2, p3] = self.vertices();
        unit(&(p1 - p2).cross(&(p1 - p3)))
    }

    pub fn triangle(&self) -> &'a Triangle {
        self.triangle
    }
}

/// A solid composed of triangles that all share one rotation
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    rotation: Vec3,
    location: Vec3,
}

impl Mesh {
    /// Build a mesh from a vertex pool and 0-based vertex index triples.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[usize; 3]>) -> Result<Self, MeshError> {
        let len = vertices.len();
        for (face, indices) in faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&index| index >= len) {
                return Err(MeshError::IndexOutOfBounds { face, index, len });
            }
        }

        Ok(Self::from_indexed(vertices, faces))
    }

    /// Build a mesh whose indices the caller has already checked.
    pub(crate) fn from_indexed(vertices: Vec<Vec3>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            triangles: faces.into_iter().map(Triangle::new).collect(),
            rotation: Vec3::zeros(),
            location: Vec3::zeros(),
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn face(&self, i: usize) -> Option<Face<'_>> {
        self.triangles.get(i).map(|triangle| Face {
            pool: &self.vertices,
            triangle,
        })
    }

    pub fn faces(&self) -> impl ExactSizeIterator<Item = Face<'_>> + '_ {
        self.triangles.iter().map(|triangle| Face {
            pool: &self.vertices,
            triangle,
        })
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Store `rotation` and copy it onto every triangle.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
        for triangle in &mut self.triangles {
            triangle.rotation = rotation;
        }
    }

    /// Position of the mesh. Not used by projection.
    pub fn location(&self) -> Vec3 {
        self.location
    }

    pub fn set_location(&mut self, location: Vec3) {
        self.location = location;
    }
}
