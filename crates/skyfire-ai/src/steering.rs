//! Pursuit steering with a random wander component.
//!
//! Each adversary heads toward the player horizontally, blended with a
//! wander direction it resamples periodically. Altitude follows a slowly
//! drifting target through a first-order filter, and neighbours that come
//! too close push each other apart over several ticks.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use skyfire_core::constants::TIME_EPSILON;

/// Input to the steering step for a single adversary.
pub struct SteeringContext {
    pub position: Vec3,
    /// Position being pursued (the player).
    pub target: Vec3,
    /// Current wander direction (horizontal unit vector).
    pub wander: Vec3,
    /// Weight of the wander direction, in [0, 1].
    pub wander_weight: f32,
    pub follow_speed: f32,
    /// Altitude the filter is pulling toward this tick.
    pub altitude_target: f32,
    pub altitude_follow_rate: f32,
    pub min_altitude: f32,
    pub dt: f32,
}

/// Output of the steering step, before separation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringUpdate {
    /// Unit horizontal movement direction (zero if there is nowhere to go).
    pub direction: Vec3,
    pub tentative_position: Vec3,
}

/// Compute the tentative next position of one adversary.
pub fn steer(ctx: &SteeringContext) -> SteeringUpdate {
    let pursue = pursuit_direction(ctx.position, ctx.target);
    let direction = blend_direction(pursue, ctx.wander, ctx.wander_weight);

    let mut tentative_position = ctx.position + direction * ctx.follow_speed * ctx.dt;
    tentative_position.y = altitude_step(
        ctx.position.y,
        ctx.altitude_target,
        ctx.altitude_follow_rate,
        ctx.dt,
        ctx.min_altitude,
    );

    SteeringUpdate {
        direction,
        tentative_position,
    }
}

/// Horizontal unit vector from `position` toward `target`, or zero when
/// they share a column.
pub fn pursuit_direction(position: Vec3, target: Vec3) -> Vec3 {
    let mut delta = target - position;
    delta.y = 0.0;
    delta.normalize_or_zero()
}

/// Weighted blend `pursue·(1−w) + wander·w`, renormalised.
pub fn blend_direction(pursue: Vec3, wander: Vec3, wander_weight: f32) -> Vec3 {
    let w = wander_weight.clamp(0.0, 1.0);
    (pursue * (1.0 - w) + wander * w).normalize_or_zero()
}

/// A uniformly random horizontal unit vector.
pub fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let angle: f32 = rng.gen_range(0.0..TAU);
    Vec3::new(angle.cos(), 0.0, angle.sin())
}

/// Whether the wander direction is due for a resample.
pub fn should_resample(now_secs: f64, last_resample_secs: f64, period_secs: f64) -> bool {
    now_secs - last_resample_secs >= period_secs - TIME_EPSILON
}

/// Slowly oscillating altitude target around an adversary's cruise altitude.
pub fn altitude_target(
    cruise_altitude: f32,
    variation: f32,
    frequency: f32,
    phase: f32,
    now_secs: f64,
) -> f32 {
    let t = (now_secs as f32) * frequency + phase;
    cruise_altitude + 0.5 * variation * t.sin()
}

/// First-order filter toward `target`, floored at `min_altitude`.
pub fn altitude_step(current: f32, target: f32, rate: f32, dt: f32, min_altitude: f32) -> f32 {
    let alpha = 1.0 - (-rate * dt).exp();
    let next = current + (target - current) * alpha;
    next.max(min_altitude)
}

/// Soft separation push for an adversary at `position`.
///
/// Sums unit vectors pointing away from every neighbour closer than
/// `min_separation`, normalises the sum and scales it by `strength·dt`.
/// Neighbours at (almost) the same point contribute nothing.
pub fn separation_offset(
    position: Vec3,
    neighbors: impl IntoIterator<Item = Vec3>,
    min_separation: f32,
    strength: f32,
    dt: f32,
) -> Vec3 {
    let mut push = Vec3::ZERO;
    for other in neighbors {
        let away = position - other;
        let distance = away.length();
        if distance < min_separation && distance > 1e-4 {
            push += away / distance;
        }
    }
    push.normalize_or_zero() * strength * dt
}
