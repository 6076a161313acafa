//! Explosion effects: a fixed-lifetime visual with a linear decay.
//!
//! An effect reports its own completion exactly once through the callback
//! passed to [`advance`]; that is the only channel back to its owner.

use glam::Vec3;

use skyfire_core::components::ExplosionEffect;

pub fn new_explosion(position: Vec3, lifetime: f32) -> ExplosionEffect {
    ExplosionEffect {
        position,
        age: 0.0,
        lifetime: lifetime.max(f32::EPSILON),
        completed: false,
    }
}

/// 1.0 at birth, falling linearly to 0.0 at the end of the lifetime.
pub fn intensity(effect: &ExplosionEffect) -> f32 {
    (1.0 - effect.age / effect.lifetime).clamp(0.0, 1.0)
}

/// Age the effect and fire `on_complete` on the tick it runs out.
pub fn advance(effect: &mut ExplosionEffect, dt: f32, on_complete: impl FnOnce(&ExplosionEffect)) {
    if effect.completed {
        return;
    }
    effect.age += dt.max(0.0);
    if effect.age >= effect.lifetime {
        effect.completed = true;
        on_complete(effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use skyfire_core::constants::EXPLOSION_LIFETIME_SECS;

    #[test]
    fn test_intensity_decays_linearly() {
        let mut e = new_explosion(Vec3::ZERO, EXPLOSION_LIFETIME_SECS);
        assert_eq!(intensity(&e), 1.0);
        advance(&mut e, 0.3, |_| {});
        assert!((intensity(&e) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_completion_reported_once() {
        let mut e = new_explosion(Vec3::ONE, EXPLOSION_LIFETIME_SECS);
        let mut reports = 0;
        for _ in 0..20 {
            advance(&mut e, 0.1, |_| reports += 1);
        }
        assert_eq!(reports, 1);
        assert!(e.completed);
        assert_eq!(intensity(&e), 0.0);
    }

    #[test]
    fn test_not_complete_before_lifetime() {
        let mut e = new_explosion(Vec3::ZERO, EXPLOSION_LIFETIME_SECS);
        let mut done = false;
        advance(&mut e, 0.5, |_| done = true);
        assert!(!done);
    }
}
