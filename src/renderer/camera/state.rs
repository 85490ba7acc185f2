use nalgebra_glm as glm;

/// Fixed scene camera looking at the focus point, Y up.
#[derive(Debug, Clone)]
pub struct CameraState {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraState {
    pub fn new(eye: [f32; 3], target: [f32; 3], fov_y: f32) -> Self {
        Self {
            eye,
            target,
            fov_y,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn distance(&self) -> f32 {
        glm::distance(&glm::make_vec3(&self.eye), &glm::make_vec3(&self.target))
    }

    /// Width in world units of the visible plane through the target.
    pub fn viewport_width(&self, aspect: f32) -> f32 {
        2.0 * self.distance() * (self.fov_y * 0.5).tan() * aspect
    }

    pub fn view_proj(&self, aspect: f32) -> glm::Mat4 {
        let proj = glm::perspective_rh_zo(aspect, self.fov_y, self.near, self.far);
        let view = glm::look_at(
            &glm::make_vec3(&self.eye),
            &glm::make_vec3(&self.target),
            &glm::vec3(0.0, 1.0, 0.0),
        );
        proj * view
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new([0.0, 0.0, 5.0], [0.0, 0.0, 0.0], 75.0_f32.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_width_scales_with_aspect() {
        let camera = CameraState::default();
        let square = camera.viewport_width(1.0);
        let expected = 2.0 * 5.0 * (75.0_f32.to_radians() * 0.5).tan();
        assert!((square - expected).abs() < 1e-4);
        assert!((camera.viewport_width(2.0) - 2.0 * square).abs() < 1e-4);
    }

    #[test]
    fn test_distance_follows_target() {
        let mut camera = CameraState::default();
        assert!((camera.distance() - 5.0).abs() < 1e-6);
        camera.target = [3.0, 0.0, 1.0];
        assert!((camera.distance() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_target_projects_to_center() {
        let camera = CameraState::default();
        let clip = camera.view_proj(1.5) * glm::vec4(0.0, 0.0, 0.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-5);
        assert!((clip.y / clip.w).abs() < 1e-5);
        let depth = clip.z / clip.w;
        assert!((0.0..=1.0).contains(&depth));
    }
}
