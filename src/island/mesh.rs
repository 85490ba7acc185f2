use std::f32::consts::TAU;
use std::path::Path;

use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

use crate::error::IslandError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Triangle mesh of the island, Y up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IslandMesh {
    pub name: String,
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

const WATER_COLOR: [f32; 3] = [0.18, 0.45, 0.62];
const SAND_COLOR: [f32; 3] = [0.86, 0.78, 0.55];
const GRASS_COLOR: [f32; 3] = [0.36, 0.62, 0.31];
const FOREST_COLOR: [f32; 3] = [0.22, 0.45, 0.24];
const ROCK_COLOR: [f32; 3] = [0.52, 0.49, 0.46];

const RINGS: u32 = 32;
const SEGMENTS: u32 = 96;
const ISLAND_RADIUS: f32 = 20.0;
const SKIRT_RADIUS: f32 = 27.0;
const PEAK_HEIGHT: f32 = 6.0;
const WATER_LEVEL: f32 = -0.6;

impl IslandMesh {
    /// Parse a JSON mesh document and validate it.
    pub fn from_json(text: &str) -> Result<Self, IslandError> {
        let mesh: IslandMesh = serde_json::from_str(text)?;
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn load(path: &Path) -> Result<Self, IslandError> {
        let text = std::fs::read_to_string(path)?;
        let mut mesh = Self::from_json(&text)?;
        if mesh.name.is_empty() {
            mesh.name = path.display().to_string();
        }
        Ok(mesh)
    }

    pub fn validate(&self) -> Result<(), IslandError> {
        if self.indices.is_empty() {
            return Err(IslandError::invalid_mesh(&self.name, "no triangles"));
        }
        if self.indices.len() % 3 != 0 {
            return Err(IslandError::invalid_mesh(
                &self.name,
                format!("index count {} is not a multiple of 3", self.indices.len()),
            ));
        }
        let vertex_count = self.vertices.len() as u32;
        if let Some(bad) = self.indices.iter().find(|&&i| i >= vertex_count) {
            return Err(IslandError::invalid_mesh(
                &self.name,
                format!("index {bad} out of range for {vertex_count} vertices"),
            ));
        }
        Ok(())
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as (min, max). None for an empty mesh.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.vertices.first()?.position;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v.position[i]);
                max[i] = max[i].max(v.position[i]);
            }
        }
        Some((min, max))
    }

    /// Build the default island: a hilly disc with a beach ring and a water
    /// skirt around it. The same seed always produces the same mesh.
    pub fn generate(seed: u32) -> Self {
        let phase = seed as f32 * 0.618_034;
        let mut vertices = Vec::with_capacity((1 + RINGS * SEGMENTS) as usize);
        let mut indices = Vec::with_capacity((SEGMENTS * 3 + (RINGS - 1) * SEGMENTS * 6) as usize);

        let peak = terrain_height(0.0, 0.0, phase);
        vertices.push(MeshVertex {
            position: [0.0, peak, 0.0],
            normal: [0.0, 1.0, 0.0],
            color: terrain_color(peak),
        });

        for ring in 1..=RINGS {
            let radius = ring as f32 / RINGS as f32 * SKIRT_RADIUS;
            for segment in 0..SEGMENTS {
                let theta = segment as f32 / SEGMENTS as f32 * TAU;
                let height = terrain_height(radius, theta, phase);
                vertices.push(MeshVertex {
                    position: [radius * theta.cos(), height, radius * theta.sin()],
                    normal: [0.0, 0.0, 0.0],
                    color: terrain_color(height),
                });
            }
        }

        let ring_index = |ring: u32, segment: u32| 1 + (ring - 1) * SEGMENTS + segment % SEGMENTS;

        for segment in 0..SEGMENTS {
            indices.extend_from_slice(&[0, ring_index(1, segment + 1), ring_index(1, segment)]);
        }
        for ring in 1..RINGS {
            for segment in 0..SEGMENTS {
                let a = ring_index(ring, segment);
                let b = ring_index(ring, segment + 1);
                let c = ring_index(ring + 1, segment);
                let d = ring_index(ring + 1, segment + 1);
                indices.extend_from_slice(&[a, b, c, b, d, c]);
            }
        }

        let mut mesh = Self {
            name: format!("procedural island #{seed}"),
            vertices,
            indices,
        };
        mesh.recompute_normals();
        mesh
    }

    /// Smooth normals from accumulated face normals.
    pub fn recompute_normals(&mut self) {
        let mut accumulated = vec![glm::Vec3::zeros(); self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let p0 = glm::make_vec3(&self.vertices[tri[0] as usize].position);
            let p1 = glm::make_vec3(&self.vertices[tri[1] as usize].position);
            let p2 = glm::make_vec3(&self.vertices[tri[2] as usize].position);
            let n = glm::cross(&(p1 - p0), &(p2 - p0));
            for &i in tri {
                accumulated[i as usize] += n;
            }
        }
        for (vertex, n) in self.vertices.iter_mut().zip(accumulated) {
            vertex.normal = if glm::length(&n) > f32::EPSILON {
                glm::normalize(&n).into()
            } else {
                [0.0, 1.0, 0.0]
            };
        }
    }
}

fn terrain_height(radius: f32, theta: f32, phase: f32) -> f32 {
    if radius >= ISLAND_RADIUS {
        // skirt slopes gently under the water line
        let t = (radius - ISLAND_RADIUS) / (SKIRT_RADIUS - ISLAND_RADIUS);
        return WATER_LEVEL - 0.4 * t;
    }
    let r = radius / ISLAND_RADIUS;
    let falloff = 1.0 - r * r;
    let ridges = 0.25 * (3.0 * theta + phase).sin() * r
        + 0.15 * (5.0 * theta - 2.0 * phase).cos() * r
        + 0.1 * (radius * 0.7 + phase).sin();
    let hills = PEAK_HEIGHT * falloff * falloff * (1.0 + ridges);
    hills + WATER_LEVEL * r.powi(4)
}

fn terrain_color(height: f32) -> [f32; 3] {
    match height {
        h if h < WATER_LEVEL + 0.05 => WATER_COLOR,
        h if h < 0.4 => SAND_COLOR,
        h if h < 2.5 => GRASS_COLOR,
        h if h < 4.5 => FOREST_COLOR,
        _ => ROCK_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(position: [f32; 3]) -> MeshVertex {
        MeshVertex {
            position,
            normal: [0.0; 3],
            color: [1.0; 3],
        }
    }

    #[test]
    fn test_recompute_normals_flat_triangle() {
        let mut mesh = IslandMesh {
            name: "flat".into(),
            vertices: vec![
                vertex([0.0, 0.0, 0.0]),
                vertex([0.0, 0.0, 2.0]),
                vertex([2.0, 0.0, 0.0]),
                vertex([5.0, 5.0, 5.0]),
            ],
            indices: vec![0, 1, 2],
        };
        mesh.recompute_normals();
        for v in &mesh.vertices[..3] {
            assert_eq!(v.normal, [0.0, 1.0, 0.0]);
        }
        // unreferenced vertex gets the fallback
        assert_eq!(mesh.vertices[3].normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_generated_mesh_is_well_formed() {
        let mesh = IslandMesh::generate(7);
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.vertices.len() as u32, 1 + RINGS * SEGMENTS);
        assert_eq!(mesh.triangle_count() as u32, SEGMENTS + (RINGS - 1) * SEGMENTS * 2);
    }

    #[test]
    fn test_generated_normals_point_up() {
        let mesh = IslandMesh::generate(3);
        for v in &mesh.vertices {
            assert!(v.normal[1] > 0.0, "normal {:?} at {:?}", v.normal, v.position);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = IslandMesh::generate(42);
        let b = IslandMesh::generate(42);
        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn test_edge_sits_below_water() {
        let mesh = IslandMesh::generate(1);
        let (min, max) = mesh.bounds().unwrap();
        assert!(min[1] < WATER_LEVEL);
        assert!(max[1] > 1.0);
        assert!((max[0] - SKIRT_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn test_json_document() {
        let text = r#"{
            "name": "tri",
            "vertices": [
                {"position": [0, 0, 0], "normal": [0, 1, 0], "color": [1, 1, 1]},
                {"position": [1, 0, 0], "normal": [0, 1, 0], "color": [1, 1, 1]},
                {"position": [0, 0, 1], "normal": [0, 1, 0], "color": [1, 1, 1]}
            ],
            "indices": [0, 2, 1]
        }"#;
        let mesh = IslandMesh::from_json(text).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_json_rejects_bad_indices() {
        let text = r#"{
            "name": "broken",
            "vertices": [
                {"position": [0, 0, 0], "normal": [0, 1, 0], "color": [1, 1, 1]}
            ],
            "indices": [0, 1, 2]
        }"#;
        assert!(matches!(
            IslandMesh::from_json(text),
            Err(IslandError::InvalidMesh { .. })
        ));
    }

    #[test]
    fn test_json_rejects_partial_triangle() {
        let text = r#"{"name": "short", "vertices": [], "indices": [0, 1]}"#;
        assert!(IslandMesh::from_json(text).is_err());
    }
}
