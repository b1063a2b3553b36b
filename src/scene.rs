use anyhow::{bail, Result};
use glam::{Mat4, Quat, Vec3};

/// Resting radius the sphere collapses back to
pub const COLLAPSED_RADIUS: f32 = 1.5;
/// Radius the sphere expands to when toggled
pub const EXPANDED_RADIUS: f32 = 10.0;

/// Configuration for one latitude line of cubes
#[derive(Debug, Clone, Copy)]
pub struct LineSpec {
    pub cube_count: usize,
    pub elevation: f32,
    pub scale: f32,
}

impl LineSpec {
    pub const fn new(cube_count: usize, elevation: f32, scale: f32) -> Self {
        Self {
            cube_count,
            elevation,
            scale,
        }
    }
}

/// Transform slot for a single cube instance
///
/// Allocated once when the scene is built and rewritten in place by the
/// placer every frame; the i-th slot of a line always corresponds to
/// angular index i.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl CubeTransform {
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Model matrix for instanced rendering
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// One latitude line: a band of cubes at fixed elevation around the sphere
#[derive(Debug, Clone)]
pub struct Line {
    cube_count: usize,
    /// Cosine of the polar angle from the vertical axis, in [-1, 1]
    pub elevation: f32,
    /// Uniform scale applied to every cube in the line, in [0.1, 5.0]
    pub scale: f32,
    cubes: Vec<CubeTransform>,
}

impl Line {
    fn new(spec: LineSpec) -> Self {
        Self {
            cube_count: spec.cube_count,
            elevation: spec.elevation,
            scale: spec.scale,
            cubes: vec![CubeTransform::identity(); spec.cube_count],
        }
    }

    /// Number of cubes in this line, fixed at construction
    pub fn cube_count(&self) -> usize {
        self.cube_count
    }

    pub fn cubes(&self) -> &[CubeTransform] {
        &self.cubes
    }

    pub fn cubes_mut(&mut self) -> &mut [CubeTransform] {
        &mut self.cubes
    }
}

/// Owning handle for the sphere scene: radius plus an ordered set of lines
///
/// Mutators are plain assignments; cube positions are recomputed lazily by
/// the placer on the next frame, so panel edits take effect without any
/// eager bookkeeping here.
#[derive(Debug, Clone)]
pub struct Sphere {
    radius: f32,
    lines: Vec<Line>,
}

impl Sphere {
    pub fn new(radius: f32, specs: &[LineSpec]) -> Result<Self> {
        if radius <= 0.0 {
            bail!("sphere radius must be positive, got {radius}");
        }
        for (i, spec) in specs.iter().enumerate() {
            if spec.cube_count == 0 {
                bail!("line {i} declares zero cubes");
            }
        }

        Ok(Self {
            radius,
            lines: specs.iter().copied().map(Line::new).collect(),
        })
    }

    /// The scene this demo ships with: five lines in the classic
    /// 7/14/14/14/7 arrangement
    pub fn default_scene() -> Self {
        let specs = [
            LineSpec::new(7, 0.9, 1.0),
            LineSpec::new(14, 0.5, 1.0),
            LineSpec::new(14, 0.0, 1.0),
            LineSpec::new(14, -0.5, 1.0),
            LineSpec::new(7, -0.9, 1.0),
        ];
        match Self::new(COLLAPSED_RADIUS, &specs) {
            Ok(sphere) => sphere,
            Err(_) => unreachable!("default scene specs are valid"),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    pub fn set_elevation(&mut self, line: usize, elevation: f32) {
        if let Some(line) = self.lines.get_mut(line) {
            line.elevation = elevation;
        }
    }

    pub fn set_scale(&mut self, line: usize, scale: f32) {
        if let Some(line) = self.lines.get_mut(line) {
            line.scale = scale;
        }
    }

    /// Total number of cube instances across all lines
    pub fn cube_count(&self) -> usize {
        self.lines.iter().map(Line::cube_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_allocates_all_cubes() {
        let sphere = Sphere::default_scene();

        assert_eq!(sphere.lines().len(), 5);
        assert_eq!(sphere.cube_count(), 7 + 14 + 14 + 14 + 7);
        for line in sphere.lines() {
            assert_eq!(line.cubes().len(), line.cube_count());
        }
    }

    #[test]
    fn rejects_zero_cube_line() {
        let specs = [LineSpec::new(4, 0.0, 1.0), LineSpec::new(0, 0.5, 1.0)];
        let result = Sphere::new(1.5, &specs);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_positive_radius() {
        let specs = [LineSpec::new(4, 0.0, 1.0)];
        assert!(Sphere::new(0.0, &specs).is_err());
        assert!(Sphere::new(-1.5, &specs).is_err());
    }

    #[test]
    fn mutators_are_plain_assignment() {
        let mut sphere = Sphere::default_scene();

        sphere.set_radius(4.2);
        assert_eq!(sphere.radius(), 4.2);

        sphere.set_elevation(1, -0.25);
        assert_eq!(sphere.lines()[1].elevation, -0.25);

        sphere.set_scale(2, 3.0);
        assert_eq!(sphere.lines()[2].scale, 3.0);

        // Cube slots are untouched until the placer runs
        assert_eq!(sphere.lines()[1].cubes()[0], CubeTransform::identity());
    }

    #[test]
    fn out_of_range_line_index_is_ignored() {
        let mut sphere = Sphere::default_scene();
        sphere.set_elevation(99, 0.5);
        sphere.set_scale(99, 0.5);
        assert_eq!(sphere.lines().len(), 5);
    }
}
