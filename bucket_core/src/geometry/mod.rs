//! Geometry for the rectangle and cube views
//!
//! Each bucket becomes one side length `1 + percent/100`, so the area of the
//! rectangle (or volume of the box) is exactly the combined multiplier.
//!
//! Box corner layout (x = base, y = elemental, z = multishot):
//!
//! ```text
//!   z = 0        z = depth
//!   1 ── 2       5 ── 6
//!   │    │       │    │
//!   0 ── 3       4 ── 7
//! ```
//!
//! Corner `i` and corner `i + 4` share x/y. The triangle list below closes
//! all six faces with two triangles each.

use crate::engine::{box_volume, percent_factor};
use serde::{Deserialize, Serialize};

/// A point in 3D space
pub type Point3 = [f64; 3];

/// Triangle corners, as indices into [`BoxMesh::vertices`]
pub const FACE_I: [usize; 12] = [7, 0, 0, 0, 4, 4, 6, 6, 4, 0, 3, 2];
pub const FACE_J: [usize; 12] = [3, 4, 1, 2, 5, 6, 5, 2, 0, 1, 6, 3];
pub const FACE_K: [usize; 12] = [0, 7, 2, 3, 6, 7, 1, 1, 5, 5, 7, 6];

/// The 12 edges of the box, for wireframe rendering
pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Closed triangle mesh of an axis-aligned box anchored at the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxMesh {
    /// Side lengths (base, elemental, multishot)
    pub dims: [f64; 3],
    pub vertices: [Point3; 8],
    pub triangles: [[usize; 3]; 12],
}

impl BoxMesh {
    /// Build the mesh for the given side lengths
    pub fn from_dims(dims: [f64; 3]) -> Self {
        let [x, y, z] = dims;
        let vertices = [
            [0.0, 0.0, 0.0],
            [0.0, y, 0.0],
            [x, y, 0.0],
            [x, 0.0, 0.0],
            [0.0, 0.0, z],
            [0.0, y, z],
            [x, y, z],
            [x, 0.0, z],
        ];

        let mut triangles = [[0usize; 3]; 12];
        for (n, tri) in triangles.iter_mut().enumerate() {
            *tri = [FACE_I[n], FACE_J[n], FACE_K[n]];
        }

        BoxMesh {
            dims,
            vertices,
            triangles,
        }
    }

    pub fn volume(&self) -> f64 {
        box_volume(self.dims)
    }

    /// Start and end points of every box edge
    pub fn edge_segments(&self) -> Vec<(Point3, Point3)> {
        EDGES
            .iter()
            .map(|&(a, b)| (self.vertices[a], self.vertices[b]))
            .collect()
    }
}

/// Box for the three allocated percentages
pub fn box_mesh(s_base: f64, s_elem: f64, s_ms: f64) -> BoxMesh {
    BoxMesh::from_dims([
        percent_factor(s_base),
        percent_factor(s_elem),
        percent_factor(s_ms),
    ])
}

/// Rectangle for the two-bucket view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Length along the base axis
    pub length: f64,
    /// Width along the elemental axis
    pub width: f64,
    /// Counter-clockwise from the origin
    pub corners: [[f64; 2]; 4],
}

impl Rectangle {
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

/// Rectangle for base and elemental percentages
pub fn rectangle(s_base: f64, s_elem: f64) -> Rectangle {
    let length = percent_factor(s_base);
    let width = percent_factor(s_elem);
    Rectangle {
        length,
        width,
        corners: [[0.0, 0.0], [length, 0.0], [length, width], [0.0, width]],
    }
}
