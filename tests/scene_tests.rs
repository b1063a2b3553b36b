use cube_sphere::animation::{RadiusTween, TOGGLE_DURATION};
use cube_sphere::scene::{COLLAPSED_RADIUS, EXPANDED_RADIUS};
use cube_sphere::{place, LineSpec, Sphere};

#[cfg(test)]
mod scene_invariant_tests {
    use super::*;

    #[test]
    fn test_cube_slots_never_resize() {
        let mut sphere = Sphere::default_scene();
        let counts: Vec<usize> = sphere.lines().iter().map(|l| l.cube_count()).collect();

        // Hammer the mutators and the placer; slot counts must not move
        for i in 0..sphere.lines().len() {
            sphere.set_elevation(i, -1.0);
            sphere.set_scale(i, 5.0);
        }
        sphere.set_radius(10.0);
        place(&mut sphere);
        sphere.set_radius(1.5);
        place(&mut sphere);

        for (line, count) in sphere.lines().iter().zip(counts) {
            assert_eq!(line.cube_count(), count);
            assert_eq!(line.cubes().len(), count);
        }
    }

    #[test]
    fn test_construction_rejects_bad_config() {
        assert!(Sphere::new(1.5, &[LineSpec::new(0, 0.0, 1.0)]).is_err());
        assert!(Sphere::new(-1.0, &[LineSpec::new(4, 0.0, 1.0)]).is_err());
        assert!(Sphere::new(1.5, &[LineSpec::new(4, 0.0, 1.0)]).is_ok());
    }

    #[test]
    fn test_line_order_is_stable() {
        let sphere = Sphere::default_scene();
        let elevations: Vec<f32> = sphere.lines().iter().map(|l| l.elevation).collect();
        assert_eq!(elevations, vec![0.9, 0.5, 0.0, -0.5, -0.9]);
    }
}

#[cfg(test)]
mod toggle_scenario_tests {
    use super::*;

    /// Run a tween against the sphere the way the frame driver does:
    /// fixed 30 Hz deltas until the tween reports finished
    fn run_to_completion(sphere: &mut Sphere, mut tween: RadiusTween) {
        let delta = 1.0 / 30.0;
        for _ in 0..1000 {
            sphere.set_radius(tween.advance(delta));
            if tween.finished() {
                return;
            }
        }
        panic!("tween never finished");
    }

    #[test]
    fn test_toggle_expands_then_collapses_exactly() {
        let mut sphere = Sphere::default_scene();
        assert_eq!(sphere.radius(), COLLAPSED_RADIUS);

        let tween = RadiusTween::toggle(sphere.radius());
        run_to_completion(&mut sphere, tween);
        assert_eq!(sphere.radius(), EXPANDED_RADIUS);

        let tween = RadiusTween::toggle(sphere.radius());
        run_to_completion(&mut sphere, tween);
        assert_eq!(sphere.radius(), COLLAPSED_RADIUS);
    }

    #[test]
    fn test_radius_moves_smoothly_during_toggle() {
        let mut sphere = Sphere::default_scene();
        let mut tween = RadiusTween::toggle(sphere.radius());

        let delta = TOGGLE_DURATION / 8.0;
        let mut last = sphere.radius();
        for _ in 0..10 {
            let value = tween.advance(delta);
            assert!(value >= last - 1e-6, "radius went backwards");
            assert!(value <= EXPANDED_RADIUS + 1e-6);
            last = value;
        }
        assert_eq!(last, EXPANDED_RADIUS);
    }

    #[test]
    fn test_second_toggle_supersedes_first() {
        let mut sphere = Sphere::default_scene();

        let mut first = RadiusTween::toggle(sphere.radius());
        sphere.set_radius(first.advance(TOGGLE_DURATION * 0.3));
        let midway = sphere.radius();
        assert!(midway > COLLAPSED_RADIUS && midway < EXPANDED_RADIUS);

        // Driver drops the first tween and starts a fresh one from the
        // current radius; only the new tween writes from here on
        let second = RadiusTween::toggle(sphere.radius());
        run_to_completion(&mut sphere, second);
        assert_eq!(sphere.radius(), EXPANDED_RADIUS);
    }

    #[test]
    fn test_placer_tracks_radius_mid_toggle() {
        let mut sphere = Sphere::default_scene();
        let mut tween = RadiusTween::toggle(sphere.radius());

        sphere.set_radius(tween.advance(TOGGLE_DURATION * 0.5));
        place(&mut sphere);

        let radius = sphere.radius();
        for line in sphere.lines() {
            for cube in line.cubes() {
                assert!((cube.position.length() - radius).abs() < 1e-4);
            }
        }
    }
}
