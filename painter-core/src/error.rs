//! Error types for mesh construction and mesh-data loading.
//!
//! Rendering itself never fails once a [`Mesh`](crate::Mesh) exists; every
//! fallible step happens while turning external data into geometry.

use thiserror::Error;

/// Failure while assembling a mesh from vertex and face tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A face referenced a vertex that does not exist.
    #[error("face {face} references vertex {index}, but only {len} vertices exist")]
    IndexOutOfBounds {
        /// Position of the offending face in the face list
        face: usize,
        /// The invalid index, as it appeared in the input
        index: usize,
        /// Number of vertices available
        len: usize,
    },
}

/// Failure while reading an external mesh-data record.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid mesh JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid OBJ data at line {line}: {message}")]
    Obj { line: usize, message: String },

    #[error("unsupported mesh format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}
