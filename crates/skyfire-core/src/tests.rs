#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use glam::Vec3;

    use crate::config::{ConfigError, SimConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::input::InputSnapshot;
    use crate::state::SimSnapshot;
    use crate::types::*;

    // ---- Angles ----

    #[test]
    fn test_normalize_angle_range() {
        let samples = [
            0.0, PI, -PI, 3.0 * PI, -3.0 * PI, 7.5, -7.5, 1000.0, -1000.0, 1e-7, -1e-7,
        ];
        for a in samples {
            let n = normalize_angle(a);
            assert!(n > -PI && n <= PI, "normalize({a}) = {n} out of (-π, π]");
        }
        assert_eq!(normalize_angle(-PI), PI, "-π maps onto the closed end");
        assert_eq!(normalize_angle(f32::NAN), 0.0);
        assert_eq!(normalize_angle(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_normalize_angle_idempotent() {
        for i in -500..500 {
            let a = i as f32 * 0.037;
            let once = normalize_angle(a);
            assert_eq!(once, normalize_angle(once), "not idempotent at {a}");
        }
    }

    #[test]
    fn test_clamp_dt() {
        assert_eq!(clamp_dt(0.016), 0.016);
        assert_eq!(clamp_dt(5.0), MAX_DT);
        assert_eq!(clamp_dt(-1.0), 0.0);
        assert_eq!(clamp_dt(f64::NAN), 0.0);
    }

    // ---- Orientation ----

    #[test]
    fn test_orientation_identity_faces_neg_z() {
        let q = orientation_from_euler(0.0, 0.0, 0.0);
        let fwd = q * Vec3::NEG_Z;
        assert!((fwd - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_orientation_pitch_up_raises_nose() {
        let q = orientation_from_euler(0.3, 0.0, 0.0);
        let fwd = q * Vec3::NEG_Z;
        assert!(fwd.y > 0.0, "positive pitch should point the nose up, got {fwd}");
    }

    #[test]
    fn test_orientation_yaw_then_pitch_order() {
        // Yaw a quarter turn left, then pitch up: nose points left and up.
        let q = orientation_from_euler(0.4, FRAC_PI_2, 0.0);
        let fwd = q * Vec3::NEG_Z;
        assert!(fwd.x < -0.8, "yaw +90° turns the nose to -X, got {fwd}");
        assert!(fwd.y > 0.3, "pitch stays relative to the yawed frame, got {fwd}");
        assert!(fwd.z.abs() < 1e-5);
    }

    #[test]
    fn test_orientation_positive_roll_lowers_right_wing() {
        let q = orientation_from_euler(0.0, 0.0, 0.5);
        let right = q * Vec3::X;
        assert!(right.y < 0.0, "positive roll banks right, got {right}");
        // Roll about the nose never moves the nose.
        assert!(((q * Vec3::NEG_Z) - Vec3::NEG_Z).length() < 1e-6);
    }

    // ---- Shapes ----

    #[test]
    fn test_aabb_sphere_intersection() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(5.0, 10.0, 5.0));
        assert!(b.intersects_sphere(Vec3::new(0.0, 0.0, 0.0), 1.0), "inside");
        assert!(b.intersects_sphere(Vec3::new(6.0, 0.0, 0.0), 1.5), "overlapping face");
        assert!(!b.intersects_sphere(Vec3::new(7.0, 0.0, 0.0), 1.5), "clear of face");
        assert!(!b.intersects_sphere(Vec3::new(6.0, 0.0, 0.0), 1.0), "touching is not overlap");
        // Corner case: sphere near the corner diagonal but outside.
        assert!(!b.intersects_sphere(Vec3::new(6.0, 11.0, 6.0), 1.5));
    }

    #[test]
    fn test_aabb_negative_extents_are_normalised() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(-2.0, -2.0, -2.0));
        assert_eq!(b.half_extents, Vec3::splat(2.0));
        assert!(b.intersects_sphere(Vec3::new(2.5, 0.0, 0.0), 1.0));
    }

    #[test]
    fn test_sphere_intersection() {
        let s = Sphere::new(Vec3::ZERO, 3.0);
        assert!(s.intersects_sphere(Vec3::new(3.4, 0.0, 0.0), 0.5));
        assert!(!s.intersects_sphere(Vec3::new(3.6, 0.0, 0.0), 0.5));
    }

    // ---- Aircraft ----

    #[test]
    fn test_aircraft_default_is_spawn() {
        let a = AircraftState::default();
        assert_eq!(a.position, Vec3::from_array(SPAWN_POSITION));
        assert_eq!(a.speed, SPAWN_SPEED);
        assert!(!a.recovering);
        assert!(a.last_collision_secs.is_none());
        assert!((a.forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    // ---- Input ----

    #[test]
    fn test_input_axes() {
        let input = InputSnapshot {
            pitch_up: true,
            roll_left: true,
            throttle_up: true,
            throttle_down: true,
            ..Default::default()
        };
        let axes = input.axes();
        assert_eq!(axes.pitch, 1.0);
        assert_eq!(axes.roll, -1.0);
        assert_eq!(axes.throttle, 0.0, "opposing keys cancel");
    }

    // ---- Config ----

    #[test]
    fn test_config_partial_json_keeps_defaults() {
        let config = SimConfig::from_json_str(r#"{ "seed": 7, "weapons": { "fire_cooldown_secs": 0.5 } }"#)
            .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.weapons.fire_cooldown_secs, 0.5);
        assert_eq!(config.weapons.projectile_speed, PROJECTILE_SPEED);
        assert_eq!(config.adversaries.population_floor, POPULATION_FLOOR);
    }

    #[test]
    fn test_config_rejects_inverted_speed_band() {
        let err = SimConfig::from_json_str(r#"{ "flight": { "min_speed": 90.0, "max_speed": 20.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");
    }

    #[test]
    fn test_config_parse_error() {
        let err = SimConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_missing_file() {
        let err = SimConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_config_sanitize_clamps() {
        let mut config = SimConfig::default();
        config.time_scale = 10.0;
        config.flight.max_pitch = 3.0;
        config.flight.collision_speed_factor = 2.0;
        config.adversaries.wander_weight = -0.2;
        config.weapons.projectile_lifetime_secs = -1.0;
        let config = config.sanitized();
        assert_eq!(config.time_scale, 4.0);
        assert!(config.flight.max_pitch < FRAC_PI_2);
        assert_eq!(config.flight.collision_speed_factor, 1.0);
        assert_eq!(config.adversaries.wander_weight, 0.0);
        assert_eq!(config.weapons.projectile_lifetime_secs, 0.0);
    }

    // ---- Serde ----

    #[test]
    fn test_sim_event_is_tagged() {
        let event = SimEvent::Collision {
            kind: CollisionKind::Building,
            position: Vec3::new(1.0, 2.0, 3.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"Collision""#), "got {json}");
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = SimSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"status\":\"Playing\""));
    }

    #[test]
    fn test_status_terminal() {
        assert!(GameStatus::Victory.is_terminal());
        assert!(GameStatus::Defeat.is_terminal());
        assert!(!GameStatus::Paused.is_terminal());
        assert_eq!(CameraMode::Chase.toggled(), CameraMode::Free);
    }
}
