use glam::{Mat4, Vec3};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;
pub const INITIAL_POSITION: Vec3 = Vec3::new(10.0, 5.0, 10.0);

const ROTATE_SPEED: f32 = 0.005;
const ZOOM_SPEED: f32 = 0.5;
const DAMPING: f32 = 0.1;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 60.0;
// Keep pitch off the poles so the view basis stays well defined
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Damped orbit camera around the origin
///
/// Dragging with the left mouse button sets target yaw/pitch, the wheel sets
/// target distance, and `update` eases the actual angles toward the targets
/// each tick, giving the usual orbit-controls feel.
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target_yaw: f32,
    target_pitch: f32,
    target_distance: f32,
    aspect: f32,
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        let distance = INITIAL_POSITION.length();
        let yaw = INITIAL_POSITION.x.atan2(INITIAL_POSITION.z);
        let pitch = (INITIAL_POSITION.y / distance).asin();

        Self {
            yaw,
            pitch,
            distance,
            target_yaw: yaw,
            target_pitch: pitch,
            target_distance: distance,
            aspect,
            dragging: false,
            last_cursor: None,
        }
    }

    /// Ease the actual orbit toward the most recent input targets
    pub fn update(&mut self) {
        self.yaw += (self.target_yaw - self.yaw) * DAMPING;
        self.pitch += (self.target_pitch - self.pitch) * DAMPING;
        self.distance += (self.target_distance - self.distance) * DAMPING;
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.pitch.cos() * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            self.distance * self.pitch.cos() * self.yaw.cos(),
        )
    }

    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(
            FOV_Y_DEGREES.to_radians(),
            self.aspect,
            NEAR_PLANE,
            FAR_PLANE,
        );
        let view = Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y);
        proj * view
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state.is_pressed();
            if !self.dragging {
                self.last_cursor = None;
            }
        }
    }

    pub fn process_cursor(&mut self, x: f64, y: f64) {
        if self.dragging {
            if let Some((last_x, last_y)) = self.last_cursor {
                let dx = (x - last_x) as f32;
                let dy = (y - last_y) as f32;
                self.target_yaw -= dx * ROTATE_SPEED;
                self.target_pitch =
                    (self.target_pitch + dy * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            }
        }
        self.last_cursor = Some((x, y));
    }

    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 20.0,
        };
        self.target_distance =
            (self.target_distance - amount * ZOOM_SPEED).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}
