//! Projectile lifecycle: launch, ballistic advance, expiry.

use skyfire_core::components::Projectile;
use skyfire_core::config::WeaponConfig;
use skyfire_core::types::AircraftState;

/// Build the two rounds of one trigger pull, one under each wing root.
///
/// Both inherit the aircraft's forward direction at launch; it is never
/// re-evaluated afterwards.
pub fn launch_pair(aircraft: &AircraftState, config: &WeaponConfig, first_id: u32) -> [Projectile; 2] {
    let direction = aircraft.forward().normalize();
    let right = aircraft.right().normalize();
    let nose = aircraft.position + direction * config.gun_forward_offset;

    let round = |id: u32, side: f32| Projectile {
        id,
        position: nose + right * side * config.gun_lateral_offset,
        direction,
        age: 0.0,
        max_lifetime: config.projectile_lifetime_secs,
    };

    [round(first_id, -1.0), round(first_id + 1, 1.0)]
}

/// Move along the frozen direction and age by `dt`.
pub fn advance(projectile: &mut Projectile, speed: f32, dt: f32) {
    projectile.position += projectile.direction * speed * dt;
    projectile.age += dt;
}

/// A projectile expires once it is older than its lifetime.
pub fn is_expired(projectile: &Projectile) -> bool {
    projectile.age > projectile.max_lifetime
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::Vec3;
    use skyfire_core::types::orientation_from_euler;

    #[test]
    fn test_pair_is_laterally_offset_along_forward() {
        let mut aircraft = AircraftState::spawn(Vec3::new(0.0, 50.0, 0.0), 25.0);
        aircraft.yaw = 0.7;
        aircraft.orientation = orientation_from_euler(0.0, 0.7, 0.0);
        let config = WeaponConfig::default();

        let [left, right] = launch_pair(&aircraft, &config, 10);
        assert_eq!((left.id, right.id), (10, 11));
        assert!((left.direction - aircraft.forward()).length() < 1e-6);
        assert_eq!(left.direction, right.direction);
        let spread = right.position - left.position;
        assert!((spread.length() - 2.0 * config.gun_lateral_offset).abs() < 1e-4);
        assert!(spread.dot(aircraft.forward()).abs() < 1e-4, "offset is lateral");
    }

    #[test]
    fn test_direction_frozen_at_launch() {
        let mut aircraft = AircraftState::spawn(Vec3::ZERO, 25.0);
        let [mut p, _] = launch_pair(&aircraft, &WeaponConfig::default(), 0);
        let launched = p.direction;

        aircraft.orientation = orientation_from_euler(0.4, 1.0, 0.2);
        advance(&mut p, 100.0, 0.1);
        assert_eq!(p.direction, launched);
    }

    #[test]
    fn test_expiry_after_lifetime() {
        let mut p = launch_pair(&AircraftState::default(), &WeaponConfig::default(), 0)[0].clone();
        for _ in 0..29 {
            advance(&mut p, 100.0, 0.1);
        }
        assert!(!is_expired(&p), "2.9s old is still live");
        advance(&mut p, 100.0, 0.2);
        assert!(is_expired(&p), "3.1s old has expired");
    }
}
