// Procedural meshes for the demo shapes

use std::f32::consts::{PI, TAU};

use crate::math::Vector3;
use crate::uniform::UniformSink;

/// Fewest sectors a circle or sphere is built with.
pub const MIN_SECTORS: u32 = 3;
/// Fewest stacks a sphere is built with.
pub const MIN_STACKS: u32 = 2;

/// CPU-side triangle list: positions plus indices into them.
///
/// Both buffers are plain `Pod` data, ready for a vertex and an index buffer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub positions: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// A triangle in the XY plane, 1 unit across.
    #[must_use]
    pub fn triangle() -> Self {
        Self {
            positions: vec![
                Vector3::new(-0.5, -0.5, 0.0),
                Vector3::new(0.5, -0.5, 0.0),
                Vector3::new(0.0, 0.5, 0.0),
            ],
            indices: vec![0, 1, 2],
        }
    }

    /// A unit square in the XY plane made of two triangles.
    #[must_use]
    pub fn rectangle() -> Self {
        Self {
            positions: vec![
                Vector3::new(0.5, 0.5, 0.0),
                Vector3::new(0.5, -0.5, 0.0),
                Vector3::new(-0.5, -0.5, 0.0),
                Vector3::new(-0.5, 0.5, 0.0),
            ],
            indices: vec![0, 1, 3, 1, 2, 3],
        }
    }

    /// A disc in the XY plane as a triangle fan around the origin.
    ///
    /// The first perimeter vertex is repeated at the end to close the fan.
    #[must_use]
    pub fn circle(radius: f32, sectors: u32) -> Self {
        let sectors = sectors.max(MIN_SECTORS);
        let mut positions = Vec::with_capacity(sectors as usize + 2);
        positions.push(Vector3::ZERO);
        for i in 0..=sectors {
            let theta = i as f32 / sectors as f32 * TAU;
            positions.push(Vector3::new(radius * theta.cos(), radius * theta.sin(), 0.0));
        }

        let indices = (1..=sectors).flat_map(|i| [0, i, i + 1]).collect();
        Self { positions, indices }
    }

    /// A unit cube centred on the origin, 8 shared corners.
    #[must_use]
    pub fn cube() -> Self {
        Self {
            positions: vec![
                Vector3::new(-0.5, -0.5, 0.5),
                Vector3::new(0.5, -0.5, 0.5),
                Vector3::new(0.5, 0.5, 0.5),
                Vector3::new(-0.5, 0.5, 0.5),
                Vector3::new(-0.5, -0.5, -0.5),
                Vector3::new(0.5, -0.5, -0.5),
                Vector3::new(0.5, 0.5, -0.5),
                Vector3::new(-0.5, 0.5, -0.5),
            ],
            indices: vec![
                0, 1, 2, 2, 3, 0, // front
                1, 5, 6, 6, 2, 1, // right
                5, 4, 7, 7, 6, 5, // back
                4, 0, 3, 3, 7, 4, // left
                3, 2, 6, 6, 7, 3, // top
                4, 5, 1, 1, 0, 4, // bottom
            ],
        }
    }

    /// A UV sphere centred on the origin.
    ///
    /// `stacks` bands run from the +Y pole to the -Y pole and `sectors`
    /// slices go around Y. Each ring repeats its first vertex at the seam.
    #[must_use]
    pub fn sphere(radius: f32, stacks: u32, sectors: u32) -> Self {
        let stacks = stacks.max(MIN_STACKS);
        let sectors = sectors.max(MIN_SECTORS);
        let ring = sectors + 1;

        let mut positions = Vec::with_capacity(((stacks + 1) * ring) as usize);
        for i in 0..=stacks {
            let phi = i as f32 / stacks as f32 * PI;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for j in 0..=sectors {
                let theta = j as f32 / sectors as f32 * TAU;
                let (sin_theta, cos_theta) = theta.sin_cos();
                positions.push(Vector3::new(
                    radius * cos_theta * sin_phi,
                    radius * cos_phi,
                    radius * sin_theta * sin_phi,
                ));
            }
        }

        let mut indices = Vec::with_capacity((stacks * sectors * 6) as usize);
        for i in 0..stacks {
            for j in 0..sectors {
                let a = i * ring + j;
                let b = a + ring;
                let c = b + 1;
                let d = a + 1;
                indices.extend_from_slice(&[a, b, d, d, b, c]);
            }
        }
        Self { positions, indices }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions as tightly packed `f32` triples.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// How a mesh's triangles are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    Fill,
    Wireframe,
}

/// A uniform sink that can also issue draw calls.
pub trait MeshRenderer: UniformSink {
    /// Draws `mesh` with the uniforms set so far.
    fn draw_mesh(&mut self, mesh: &Mesh, mode: PolygonMode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn indices_in_bounds(mesh: &Mesh) -> bool {
        mesh.indices
            .iter()
            .all(|&i| (i as usize) < mesh.vertex_count())
    }

    #[test]
    fn fixed_shapes_have_expected_counts() {
        let cases = [
            (Mesh::triangle(), 3, 1),
            (Mesh::rectangle(), 4, 2),
            (Mesh::cube(), 8, 12),
        ];
        for (mesh, vertices, triangles) in cases {
            assert_eq!(mesh.vertex_count(), vertices);
            assert_eq!(mesh.triangle_count(), triangles);
            assert!(indices_in_bounds(&mesh));
        }
    }

    #[test]
    fn circle_perimeter_sits_at_radius() {
        let mesh = Mesh::circle(2.5, 48);
        assert_eq!(mesh.vertex_count(), 50);
        assert_eq!(mesh.triangle_count(), 48);
        assert_eq!(mesh.positions[0], Vector3::ZERO);
        assert!(indices_in_bounds(&mesh));

        for p in &mesh.positions[1..] {
            assert_relative_eq!(p.length(), 2.5, max_relative = 1e-5);
            assert_eq!(p.z, 0.0);
        }
        // every fan triangle starts at the centre
        assert!(mesh.indices.chunks(3).all(|t| t[0] == 0));
    }

    #[test]
    fn sphere_vertices_sit_at_radius() {
        let mesh = Mesh::sphere(1.5, 24, 48);
        assert_eq!(mesh.vertex_count(), 25 * 49);
        assert_eq!(mesh.triangle_count(), 2 * 24 * 48);
        assert!(indices_in_bounds(&mesh));

        for p in &mesh.positions {
            assert_relative_eq!(p.length(), 1.5, max_relative = 1e-5);
        }
        assert_relative_eq!(mesh.positions[0].y, 1.5);
        assert_relative_eq!(mesh.positions[mesh.vertex_count() - 1].y, -1.5);
    }

    #[test]
    fn too_few_segments_are_raised_to_the_minimum() {
        let circle = Mesh::circle(1.0, 0);
        assert_eq!(circle.triangle_count(), MIN_SECTORS as usize);
        assert!(circle.positions.iter().all(|p| !p.x.is_nan()));

        let sphere = Mesh::sphere(1.0, 0, 1);
        assert_eq!(
            sphere.vertex_count(),
            ((MIN_STACKS + 1) * (MIN_SECTORS + 1)) as usize
        );
        assert!(indices_in_bounds(&sphere));
    }

    #[test]
    fn byte_views_match_buffer_sizes() {
        let mesh = Mesh::cube();
        assert_eq!(mesh.vertex_bytes().len(), 8 * 3 * 4);
        assert_eq!(mesh.index_bytes().len(), 36 * 4);
    }
}
