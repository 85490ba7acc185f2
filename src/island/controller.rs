use std::f32::consts::PI;

use log::info;

use super::angle::normalize_angle;
use super::host::IslandHost;
use super::stage::stage_for_angle;
use super::transform::IslandTransform;

/// Idle speed decay applied every frame.
pub const DAMPING_FACTOR: f32 = 0.95;
/// Idle speed never drops below this, so the island keeps drifting.
pub const MIN_DRIFT_SPEED: f32 = 0.01;
/// Radians per unit of viewport-relative pointer travel.
pub const POINTER_SCALE: f32 = 0.01 * PI;
/// Radians applied per arrow key event.
pub const KEY_STEP: f32 = 0.005 * PI;
/// Speed left behind by an arrow key event.
pub const KEY_SPEED: f32 = 0.007;

// Past this the angle is folded back into [0, 2π) to keep f32 precision.
const ANGLE_FOLD_LIMIT: f32 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationKey {
    Left,
    Right,
}

impl RotationKey {
    fn sign(self) -> f32 {
        match self {
            RotationKey::Left => 1.0,
            RotationKey::Right => -1.0,
        }
    }
}

/// Input events the controller understands. Mouse and touch both map onto
/// `Press`/`Move`/`Release` with the horizontal coordinate of the first contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IslandInput {
    Press { x: f32 },
    Release,
    Move { x: f32 },
    KeyDown(RotationKey),
    KeyUp(RotationKey),
}

/// Turns pointer, touch and keyboard input into the island's y rotation and
/// derives the current stage from it.
#[derive(Debug, Clone)]
pub struct RotationController {
    angle: f32,
    speed: f32,
    last_x: f32,
    viewport_width: f32,
    attached: bool,
    transform: IslandTransform,
}

impl RotationController {
    pub fn new(transform: IslandTransform) -> Self {
        Self {
            angle: transform.rotation[1],
            speed: 0.0,
            last_x: 0.0,
            viewport_width: 0.0,
            attached: false,
            transform,
        }
    }

    /// Start receiving input. Called once the render surface is ready.
    pub fn attach(&mut self) {
        if !self.attached {
            info!("Island controller attached");
            self.attached = true;
        }
    }

    /// Stop receiving input. Events and frames after this change nothing.
    pub fn detach(&mut self) {
        if self.attached {
            info!("Island controller detached");
            self.attached = false;
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Width of the visible scene, used to scale pointer travel.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn normalized_angle(&self) -> f32 {
        normalize_angle(self.angle)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn transform(&self) -> &IslandTransform {
        &self.transform
    }

    /// Replace the host-provided parts of the transform (position, scale,
    /// focus point), keeping the rotation the controller owns.
    pub fn set_placement(&mut self, placement: IslandTransform) {
        self.transform = IslandTransform {
            rotation: [
                placement.rotation[0],
                self.angle,
                placement.rotation[2],
            ],
            ..placement
        };
    }

    /// Handle one input event. Returns true if the event changed anything.
    pub fn handle_input(&mut self, input: IslandInput, host: &mut impl IslandHost) -> bool {
        if !self.attached {
            return false;
        }

        match input {
            IslandInput::Press { x } => {
                if !x.is_finite() {
                    return false;
                }
                host.set_is_rotating(true);
                self.last_x = x;
                true
            }
            IslandInput::Release => {
                host.set_is_rotating(false);
                true
            }
            IslandInput::Move { x } => {
                if !host.is_rotating() {
                    return false;
                }
                if !self.viewport_width.is_finite() || self.viewport_width <= 0.0 {
                    return false;
                }

                let delta = (x - self.last_x) / self.viewport_width;
                if !delta.is_finite() {
                    return false;
                }
                let step = delta * POINTER_SCALE;
                self.angle += step;
                self.apply_transform();
                self.last_x = x;
                self.speed = step;
                true
            }
            IslandInput::KeyDown(key) => {
                if !host.is_rotating() {
                    host.set_is_rotating(true);
                }
                self.angle += key.sign() * KEY_STEP;
                self.apply_transform();
                self.speed = key.sign() * KEY_SPEED;
                true
            }
            IslandInput::KeyUp(_) => {
                host.set_is_rotating(false);
                true
            }
        }
    }

    /// Per-frame step: idle damping and drift, or stage reporting while the
    /// user is rotating.
    pub fn update_frame(&mut self, host: &mut impl IslandHost) {
        if !self.attached {
            return;
        }

        if !host.is_rotating() {
            self.speed *= DAMPING_FACTOR;
            if self.speed.abs() < MIN_DRIFT_SPEED {
                self.speed = MIN_DRIFT_SPEED;
            }
            self.angle += self.speed;
            self.apply_transform();
        } else {
            host.set_current_stage(stage_for_angle(self.angle));
        }
    }

    fn apply_transform(&mut self) {
        if self.angle.abs() > ANGLE_FOLD_LIMIT {
            self.angle = normalize_angle(self.angle);
        }
        self.transform.rotation[1] = self.angle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::island::host::HomeState;
    use crate::island::stage::Stage;

    fn attached_controller(angle: f32) -> RotationController {
        let mut transform = IslandTransform::default();
        transform.rotation[1] = angle;
        let mut controller = RotationController::new(transform);
        controller.set_viewport_width(500.0);
        controller.attach();
        controller
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn test_pointer_drag_scales_by_viewport_width() {
        let mut controller = attached_controller(0.0);
        let mut host = HomeState::new();

        controller.handle_input(IslandInput::Press { x: 100.0 }, &mut host);
        assert!(host.is_rotating());

        controller.handle_input(IslandInput::Move { x: 150.0 }, &mut host);
        assert_close(controller.angle(), 0.1 * 0.01 * PI);
        assert_close(controller.speed(), 0.1 * 0.01 * PI);
        assert_close(controller.transform().rotation[1], controller.angle());

        controller.handle_input(IslandInput::Release, &mut host);
        assert!(!host.is_rotating());
    }

    #[test]
    fn test_move_uses_last_sample() {
        let mut controller = attached_controller(0.0);
        let mut host = HomeState::new();

        controller.handle_input(IslandInput::Press { x: 100.0 }, &mut host);
        controller.handle_input(IslandInput::Move { x: 150.0 }, &mut host);
        controller.handle_input(IslandInput::Move { x: 100.0 }, &mut host);
        assert_close(controller.angle(), 0.0);
        assert_close(controller.speed(), -0.1 * 0.01 * PI);
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut controller = attached_controller(1.0);
        let mut host = HomeState::new();

        assert!(!controller.handle_input(IslandInput::Move { x: 400.0 }, &mut host));
        assert_eq!(controller.angle(), 1.0);
    }

    #[test]
    fn test_zero_viewport_width_is_ignored() {
        let mut controller = attached_controller(1.0);
        controller.set_viewport_width(0.0);
        let mut host = HomeState::new();

        controller.handle_input(IslandInput::Press { x: 0.0 }, &mut host);
        controller.handle_input(IslandInput::Move { x: 50.0 }, &mut host);
        assert_eq!(controller.angle(), 1.0);
        assert!(controller.angle().is_finite());
    }

    #[test]
    fn test_left_key_starts_rotation() {
        let mut controller = attached_controller(0.0);
        let mut host = HomeState::new();

        controller.handle_input(IslandInput::KeyDown(RotationKey::Left), &mut host);
        assert!(host.is_rotating());
        assert_close(controller.angle(), 0.005 * PI);
        assert_close(controller.speed(), KEY_SPEED);

        controller.handle_input(IslandInput::KeyUp(RotationKey::Left), &mut host);
        assert!(!host.is_rotating());
    }

    #[test]
    fn test_right_key_repeats() {
        let mut controller = attached_controller(0.0);
        let mut host = HomeState::new();

        for _ in 0..3 {
            controller.handle_input(IslandInput::KeyDown(RotationKey::Right), &mut host);
        }
        assert_close(controller.angle(), -3.0 * 0.005 * PI);
        assert_close(controller.speed(), -KEY_SPEED);
    }

    #[test]
    fn test_idle_damping_step() {
        let mut controller = attached_controller(0.0);
        let mut host = HomeState::new();
        controller.speed = 0.05;

        controller.update_frame(&mut host);
        assert_close(controller.speed(), 0.0475);
        assert_close(controller.angle(), 0.0475);
    }

    #[test]
    fn test_idle_speed_floors_at_drift() {
        let mut controller = attached_controller(0.0);
        let mut host = HomeState::new();
        controller.speed = 0.05;

        for _ in 0..200 {
            controller.update_frame(&mut host);
            assert!(controller.speed() >= MIN_DRIFT_SPEED);
        }
        assert_eq!(controller.speed(), MIN_DRIFT_SPEED);
    }

    #[test]
    fn test_slow_negative_speed_flips_to_drift() {
        let mut controller = attached_controller(0.0);
        let mut host = HomeState::new();
        controller.speed = -0.005;

        controller.update_frame(&mut host);
        assert_eq!(controller.speed(), MIN_DRIFT_SPEED);
    }

    #[test]
    fn test_no_damping_while_rotating() {
        let mut controller = attached_controller(1.0);
        let mut host = HomeState::new();
        controller.speed = 0.05;
        host.set_is_rotating(true);

        controller.update_frame(&mut host);
        assert_eq!(controller.speed(), 0.05);
        assert_eq!(controller.angle(), 1.0);
    }

    #[test]
    fn test_stage_reported_while_rotating() {
        let mut controller = attached_controller(5.6);
        let mut host = HomeState::new();

        controller.handle_input(IslandInput::Press { x: 0.0 }, &mut host);
        controller.update_frame(&mut host);
        assert_eq!(host.current_stage(), Some(Stage::Four));

        let mut controller = attached_controller(3.0);
        controller.update_frame(&mut host);
        assert_eq!(host.current_stage(), None);
    }

    #[test]
    fn test_stage_not_reported_when_idle() {
        let mut controller = attached_controller(1.0);
        let mut host = HomeState::new();

        controller.update_frame(&mut host);
        assert_eq!(host.current_stage(), None);
        assert_eq!(host.stage_changes(), 0);
    }

    #[test]
    fn test_detached_controller_ignores_everything() {
        let mut controller = attached_controller(2.0);
        let mut host = HomeState::new();
        controller.detach();

        assert!(!controller.handle_input(IslandInput::Press { x: 10.0 }, &mut host));
        assert!(!controller.handle_input(IslandInput::KeyDown(RotationKey::Left), &mut host));
        controller.update_frame(&mut host);

        assert!(!host.is_rotating());
        assert_eq!(controller.angle(), 2.0);
        assert_eq!(controller.speed(), 0.0);
    }

    #[test]
    fn test_placement_keeps_owned_rotation() {
        let mut controller = attached_controller(1.5);
        controller.set_placement(IslandTransform::for_screen(400.0));
        assert_eq!(controller.transform().scale, [0.9; 3]);
        assert_eq!(controller.transform().rotation[1], 1.5);
    }

    #[test]
    fn test_placement_carries_focus_point() {
        let mut controller = attached_controller(1.5);
        let mut host = HomeState::new();
        let placement = IslandTransform {
            focus_point: [1.0, -2.0, 3.0],
            ..IslandTransform::default()
        };

        controller.set_placement(placement);
        assert_eq!(controller.transform().focus_point, [1.0, -2.0, 3.0]);

        controller.handle_input(IslandInput::Press { x: 0.0 }, &mut host);
        controller.handle_input(IslandInput::Move { x: 250.0 }, &mut host);
        assert_eq!(controller.transform().focus_point, [1.0, -2.0, 3.0]);
        assert_close(controller.angle(), 1.5 + 0.5 * 0.01 * PI);
    }

    #[test]
    fn test_non_finite_pointer_is_ignored() {
        let mut controller = attached_controller(1.0);
        let mut host = HomeState::new();

        assert!(!controller.handle_input(IslandInput::Press { x: f32::NAN }, &mut host));
        assert!(!host.is_rotating());

        controller.handle_input(IslandInput::Press { x: 0.0 }, &mut host);
        assert!(!controller.handle_input(IslandInput::Move { x: f32::NAN }, &mut host));
        assert!(!controller.handle_input(IslandInput::Move { x: f32::INFINITY }, &mut host));
        assert_eq!(controller.angle(), 1.0);

        controller.handle_input(IslandInput::Move { x: 50.0 }, &mut host);
        assert_close(controller.angle(), 1.0 + 0.1 * 0.01 * PI);

        controller.handle_input(IslandInput::Release, &mut host);
        controller.update_frame(&mut host);
        assert!(controller.angle().is_finite());
        assert!(controller.transform().rotation[1].is_finite());
    }

    #[test]
    fn test_large_angle_is_folded() {
        let mut controller = attached_controller(ANGLE_FOLD_LIMIT + 0.5);
        let mut host = HomeState::new();

        controller.handle_input(IslandInput::KeyDown(RotationKey::Left), &mut host);
        assert!(controller.angle() < std::f32::consts::TAU);
    }
}
