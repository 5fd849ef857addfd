//! Unit tests for boids-agent.

#[cfg(test)]
mod helpers {
    use boids_core::Vec2;

    use crate::{Boid, Params};

    pub const EPS: f32 = 1e-5;

    pub fn boid_at(x: f32, y: f32, vx: f32, vy: f32) -> Boid {
        Boid::with_velocity(Vec2::new(x, y), Vec2::new(vx, vy), 100, 100)
    }

    /// Only the named weight enabled.
    pub fn only(alignment: f32, cohesion: f32, separation: f32) -> Params {
        Params {
            alignment_weight: alignment,
            cohesion_weight: cohesion,
            separation_weight: separation,
            edge_avoidance_weight: 0.0,
            max_distance: 50.0,
            ..Params::default()
        }
    }

    pub fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).magnitude() < EPS
    }
}

// ── Params ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod params {
    use crate::{MIN_APPLIED_WEIGHT, Params};

    #[test]
    fn defaults() {
        let p = Params::default();
        assert_eq!(p.max_speed, 4.0);
        assert_eq!(p.max_distance, 200.0);
        assert_eq!(p.max_edge_distance, 20.0);
        assert_eq!(p.max_force, 1.0);
        assert_eq!(p.edge_avoidance_weight, 0.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn weight_threshold() {
        assert!(!Params::applies(0.0));
        assert!(!Params::applies(0.009));
        assert!(Params::applies(MIN_APPLIED_WEIGHT));
        assert!(Params::applies(2.5));
    }

    #[test]
    fn validate_rejects_negative_and_non_finite() {
        let bad = [
            Params { max_speed: -1.0, ..Params::default() },
            Params { max_force: f32::NAN, ..Params::default() },
            Params { cohesion_weight: f32::INFINITY, ..Params::default() },
        ];
        for p in bad {
            assert!(p.validate().is_err(), "{p:?}");
        }
    }
}

// ── Kinematics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kinematics {
    use boids_core::Vec2;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::helpers::{EPS, boid_at};
    use crate::boid::{MAX_INITIAL_SPEED, MIN_INITIAL_SPEED};
    use crate::{Boid, Params};

    #[test]
    fn new_draws_speed_in_range() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..500 {
            let b = Boid::new(10.0, 20.0, 100, 100, &mut rng);
            let speed = b.velocity.magnitude();
            assert!(speed >= MIN_INITIAL_SPEED - EPS && speed <= MAX_INITIAL_SPEED + EPS);
            assert_eq!(b.position, Vec2::new(10.0, 20.0));
            assert_eq!(b.acceleration, Vec2::ZERO);
        }
    }

    #[test]
    fn update_integrates_then_forces_speed() {
        let params = Params::default();
        let mut b = boid_at(10.0, 10.0, 1.0, 0.0);
        b.acceleration = Vec2::new(0.0, 1.0);
        b.update(&params);

        // Position moves by the old velocity.
        assert_eq!(b.position, Vec2::new(11.0, 10.0));
        // New heading is (1, 1) at exactly max_speed.
        assert!((b.velocity.magnitude() - params.max_speed).abs() < EPS);
        assert!((b.velocity.x - b.velocity.y).abs() < EPS);
        assert_eq!(b.acceleration, Vec2::ZERO);
    }

    #[test]
    fn update_speeds_up_slow_boids() {
        let params = Params { max_speed: 3.0, ..Params::default() };
        let mut b = boid_at(0.0, 0.0, 0.1, 0.0);
        b.update(&params);
        assert!((b.velocity.magnitude() - 3.0).abs() < EPS);
    }

    #[test]
    fn update_keeps_zero_velocity_zero() {
        let mut b = boid_at(5.0, 5.0, 0.0, 0.0);
        b.update(&Params::default());
        assert_eq!(b.velocity, Vec2::ZERO);
        assert_eq!(b.position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn wraps_past_far_edge_to_zero() {
        let mut b = boid_at(100.0 + 0.25, 100.5, 0.0, 0.0);
        b.check_bounds();
        assert_eq!(b.position, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn wraps_past_zero_to_far_edge() {
        let mut b = boid_at(-0.25, -3.0, 0.0, 0.0);
        b.check_bounds();
        assert_eq!(b.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn in_bounds_is_untouched() {
        for (x, y) in [(0.0, 0.0), (100.0, 100.0), (42.0, 7.5)] {
            let mut b = boid_at(x, y, 0.0, 0.0);
            b.check_bounds();
            assert_eq!(b.position, Vec2::new(x, y));
        }
    }

    #[test]
    fn limit_force_bounds_magnitude() {
        let params = Params { max_force: 0.5, ..Params::default() };
        let small = Vec2::new(0.1, -0.2);
        assert_eq!(Boid::limit_force(small, &params), small);

        for v in [Vec2::new(3.0, 4.0), Vec2::new(-100.0, 0.1), Vec2::new(0.4, 0.4)] {
            let limited = Boid::limit_force(v, &params);
            assert!(limited.magnitude() <= params.max_force + EPS);
        }
    }
}

// ── Steering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod steering {
    use boids_core::Vec2;

    use super::helpers::{EPS, approx, boid_at, only};
    use crate::{Boid, Params};

    #[test]
    fn no_neighbors_means_no_steering() {
        let params = Params { max_distance: 50.0, ..Params::default() };
        let mut b = boid_at(50.0, 50.0, 1.0, 1.0);
        b.acceleration = Vec2::new(9.0, 9.0);
        b.flock(&[], &params).unwrap();
        assert_eq!(b.acceleration, Vec2::ZERO);
    }

    #[test]
    fn self_and_out_of_range_do_not_qualify() {
        let params = only(1.0, 1.0, 1.0);
        let me = boid_at(50.0, 50.0, 1.0, 0.0);
        let twin = boid_at(50.0, 50.0, -1.0, 0.0);
        let far = boid_at(50.0, 100.0, 0.0, 1.0); // exactly max_distance away
        let neighbors = [&me, &twin, &far];
        assert_eq!(me.steering(&neighbors, &params).unwrap(), Vec2::ZERO);
    }

    #[test]
    fn alignment_steers_toward_average_heading() {
        let params = only(1.0, 0.0, 0.0);
        let me = boid_at(50.0, 50.0, 0.0, 0.0);
        let a = boid_at(60.0, 50.0, 0.0, 2.0);
        let b = boid_at(40.0, 50.0, 0.0, 4.0);
        let force = me.alignment(&[&a, &b], &params).unwrap();
        // Desired (0, max_speed) minus zero velocity, clamped to max_force.
        assert!(approx(force, Vec2::new(0.0, params.max_force)), "{force}");
    }

    #[test]
    fn cohesion_steers_toward_center() {
        let params = only(0.0, 1.0, 0.0);
        let me = boid_at(50.0, 50.0, 0.0, 0.0);
        let a = boid_at(60.0, 40.0, 0.0, 0.0);
        let b = boid_at(60.0, 60.0, 0.0, 0.0);
        let force = me.cohesion(&[&a, &b], &params).unwrap();
        assert!(approx(force, Vec2::new(params.max_force, 0.0)), "{force}");
    }

    #[test]
    fn cohesion_subtracts_own_velocity() {
        let params = Params { max_force: 100.0, ..only(0.0, 1.0, 0.0) };
        let me = boid_at(50.0, 50.0, 1.0, 0.0);
        let a = boid_at(50.0, 60.0, 0.0, 0.0);
        let force = me.cohesion(&[&a], &params).unwrap();
        assert!(approx(force, Vec2::new(-1.0, params.max_speed)), "{force}");
    }

    #[test]
    fn separation_prefers_closer_neighbors() {
        let params = Params { max_force: 100.0, ..only(0.0, 0.0, 1.0) };
        let me = boid_at(50.0, 50.0, 0.0, 0.0);
        // Close neighbor on the left pushes right, far neighbor on the right pushes left.
        let close = boid_at(48.0, 50.0, 0.0, 0.0);
        let far = boid_at(60.0, 50.0, 0.0, 0.0);
        let force = me.separation(&[&close, &far], &params).unwrap();
        assert!(force.x > 0.0 && force.y.abs() < EPS, "{force}");
        assert!((force.magnitude() - params.max_speed).abs() < 1e-4);
    }

    #[test]
    fn weights_below_threshold_are_skipped() {
        let me = boid_at(50.0, 50.0, 0.0, 0.0);
        let other = boid_at(52.0, 50.0, 0.0, 3.0);
        let off = only(0.005, 0.0, 0.009);
        assert_eq!(me.steering(&[&other], &off).unwrap(), Vec2::ZERO);
    }

    #[test]
    fn weights_scale_each_behavior() {
        let me = boid_at(50.0, 50.0, 0.0, 0.0);
        let other = boid_at(50.0, 55.0, 0.0, 0.0);
        let unit = me.steering(&[&other], &only(0.0, 1.0, 0.0)).unwrap();
        let double = me.steering(&[&other], &only(0.0, 2.0, 0.0)).unwrap();
        assert!(approx(double, unit * 2.0));
    }

    #[test]
    fn every_behavior_is_clamped() {
        let params = Params { max_force: 0.3, max_speed: 10.0, ..only(1.0, 1.0, 1.0) };
        let me = boid_at(50.0, 50.0, -3.0, 2.0);
        let others = [boid_at(51.0, 50.0, 5.0, 0.0), boid_at(50.0, 70.0, 0.0, -5.0)];
        let refs: Vec<&Boid> = others.iter().collect();
        for force in [
            me.alignment(&refs, &params).unwrap(),
            me.cohesion(&refs, &params).unwrap(),
            me.separation(&refs, &params).unwrap(),
        ] {
            assert!(force.magnitude() <= params.max_force + EPS, "{force}");
        }
    }

    #[test]
    fn edge_avoidance_pushes_inward() {
        let params = Params {
            max_force: 100.0,
            max_edge_distance: 20.0,
            edge_avoidance_weight: 1.0,
            ..Params::default()
        };
        let near_left = boid_at(5.0, 50.0, 0.0, 0.0);
        let force = near_left.avoid_edges(&params).unwrap();
        assert!(approx(force, Vec2::new(params.max_speed, 0.0)), "{force}");

        let near_bottom_right = boid_at(95.0, 95.0, 0.0, 0.0);
        let force = near_bottom_right.avoid_edges(&params).unwrap();
        assert!(force.x < 0.0 && force.y < 0.0);
        assert!((force.x - force.y).abs() < EPS);

        let middle = boid_at(50.0, 50.0, 1.0, 1.0);
        assert_eq!(middle.avoid_edges(&params).unwrap(), Vec2::ZERO);
    }

    #[test]
    fn edge_avoidance_is_off_by_default() {
        let b = boid_at(1.0, 1.0, 0.0, 0.0);
        assert_eq!(b.steering(&[], &Params::default()).unwrap(), Vec2::ZERO);

        let on = Params { edge_avoidance_weight: 1.0, ..Params::default() };
        assert_ne!(b.steering(&[], &on).unwrap(), Vec2::ZERO);
    }

    #[test]
    fn pair_separates_directly_apart() {
        let params = only(0.0, 0.0, 1.0);
        let mut a = boid_at(50.0, 50.0, 0.0, 0.0);
        let mut b = boid_at(51.0, 50.0, 0.0, 0.0);
        let (a_snapshot, b_snapshot) = (a.clone(), b.clone());
        a.flock(&[&a_snapshot, &b_snapshot], &params).unwrap();
        b.flock(&[&a_snapshot, &b_snapshot], &params).unwrap();

        assert!(a.acceleration.x < 0.0 && a.acceleration.y == 0.0);
        assert!(b.acceleration.x > 0.0 && b.acceleration.y == 0.0);
        assert!(a.acceleration.magnitude() <= params.max_force + EPS);
        assert!(b.acceleration.magnitude() <= params.max_force + EPS);
    }
}

// ── PopulationBuilder ─────────────────────────────────────────────────────────

#[cfg(test)]
mod population {
    use crate::PopulationBuilder;

    #[test]
    fn same_seed_same_population() {
        let a = PopulationBuilder::new(64, 300, 200, 9).build();
        let b = PopulationBuilder::new(64, 300, 200, 9).build();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_population() {
        let a = PopulationBuilder::new(16, 300, 200, 9).build();
        let b = PopulationBuilder::new(16, 300, 200, 10).build();
        assert_ne!(a, b);
    }

    #[test]
    fn positions_inside_world() {
        let boids = PopulationBuilder::new(2_000, 300, 200, 3).build();
        assert_eq!(boids.len(), 2_000);
        for b in &boids {
            assert!((0.0..=300.0).contains(&b.position.x));
            assert!((0.0..=200.0).contains(&b.position.y));
            assert_eq!((b.world_width, b.world_height), (300, 200));
        }
    }

    #[test]
    fn empty_population() {
        assert!(PopulationBuilder::new(0, 10, 10, 0).build().is_empty());
    }
}
