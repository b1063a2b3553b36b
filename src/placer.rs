use glam::{Mat3, Quat, Vec3};
use std::f32::consts::TAU;

use crate::scene::Sphere;

/// Recompute every cube transform from the current sphere state
///
/// Full stateless recompute each frame: for a line at elevation e the polar
/// angle is `phi = acos(e)`, and the line's cubes divide the azimuth evenly,
/// `theta = TAU / cube_count * i`. Each cube gets the line's uniform scale
/// and is rotated to face the origin. Doing this from scratch every tick
/// means live panel edits can never leave stale transforms behind.
pub fn place(sphere: &mut Sphere) {
    let radius = sphere.radius();

    for line in sphere.lines_mut() {
        let phi = line.elevation.clamp(-1.0, 1.0).acos();
        let count = line.cube_count();
        let scale = line.scale;

        for (i, cube) in line.cubes_mut().iter_mut().enumerate() {
            let theta = TAU / count as f32 * i as f32;

            cube.position = spherical_to_cartesian(radius, phi, theta);
            cube.scale = Vec3::splat(scale);
            cube.rotation = look_at_origin(cube.position);
        }
    }
}

/// Physics-convention spherical coordinates with y as the vertical axis
pub fn spherical_to_cartesian(radius: f32, phi: f32, theta: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Rotation that points the local +Z axis from `position` toward the origin
///
/// Falls back to the world Z axis as "up" when the view direction is nearly
/// vertical, which happens for lines at elevation ±1 where a whole line
/// collapses onto the pole.
pub fn look_at_origin(position: Vec3) -> Quat {
    if position.length_squared() < 1e-12 {
        return Quat::IDENTITY;
    }

    let forward = (-position).normalize();
    let up = if forward.y.abs() > 0.999 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let right = up.cross(forward).normalize();
    let up = forward.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}
