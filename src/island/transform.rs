use nalgebra_glm as glm;

/// Windows narrower than this (logical pixels) get a smaller island.
pub const NARROW_SCREEN_WIDTH: f32 = 768.0;

const BASE_POSITION: [f32; 3] = [0.0, -6.5, -43.4];
const BASE_ROTATION: [f32; 3] = [0.1, 4.7077, 0.0];

/// Placement of the island node. Position, scale and focus point come from
/// the host, the controller owns only `rotation[1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IslandTransform {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    /// Where the camera looks. Carried for the renderer, never read by the
    /// rotation logic.
    pub focus_point: [f32; 3],
}

impl Default for IslandTransform {
    fn default() -> Self {
        Self {
            position: BASE_POSITION,
            rotation: BASE_ROTATION,
            scale: [1.0, 1.0, 1.0],
            focus_point: [0.0, 0.0, 0.0],
        }
    }
}

impl IslandTransform {
    /// Base transform adjusted for the window's logical width.
    pub fn for_screen(logical_width: f32) -> Self {
        let scale = if logical_width < NARROW_SCREEN_WIDTH { 0.9 } else { 1.0 };
        Self {
            scale: [scale; 3],
            ..Self::default()
        }
    }

    /// Model matrix, Euler rotation applied in X, Y, Z order.
    pub fn matrix(&self) -> glm::Mat4 {
        let mut m = glm::translation(&glm::vec3(
            self.position[0],
            self.position[1],
            self.position[2],
        ));
        m = glm::rotate_x(&m, self.rotation[0]);
        m = glm::rotate_y(&m, self.rotation[1]);
        m = glm::rotate_z(&m, self.rotation[2]);
        glm::scale(&m, &glm::vec3(self.scale[0], self.scale[1], self.scale[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_screen_shrinks_island() {
        assert_eq!(IslandTransform::for_screen(500.0).scale, [0.9; 3]);
        assert_eq!(IslandTransform::for_screen(1200.0).scale, [1.0; 3]);
        assert_eq!(
            IslandTransform::for_screen(500.0).position,
            IslandTransform::default().position
        );
    }

    #[test]
    fn test_matrix_translates_origin_to_position() {
        let t = IslandTransform::default();
        let origin = t.matrix() * glm::vec4(0.0, 0.0, 0.0, 1.0);
        assert!((origin.x - t.position[0]).abs() < 1e-5);
        assert!((origin.y - t.position[1]).abs() < 1e-5);
        assert!((origin.z - t.position[2]).abs() < 1e-5);
    }
}
