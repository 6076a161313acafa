//! Simulation constants and tuning parameters.
//!
//! Distances are in world units (meters), angles in radians, durations in
//! seconds. The world is right-handed with +Y up; the aircraft nose points
//! along local -Z.

use std::f32::consts::PI;

/// Nominal tick rate the game loop targets (Hz).
pub const TICK_RATE: u32 = 60;

/// Nominal seconds per tick.
pub const NOMINAL_DT: f64 = 1.0 / TICK_RATE as f64;

/// Upper bound applied to every incoming frame delta.
pub const MAX_DT: f64 = 0.1;

/// Slack applied when comparing elapsed times against cooldowns, so that
/// accumulated float error never drops a request that is exactly on time.
pub const TIME_EPSILON: f64 = 1e-9;

// --- Flight envelope ---

/// Maximum pitch magnitude (45°).
pub const MAX_PITCH: f32 = PI / 4.0;

/// Maximum roll magnitude (60°).
pub const MAX_ROLL: f32 = PI / 3.0;

/// Minimum airspeed (m/s).
pub const MIN_SPEED: f32 = 10.0;

/// Maximum airspeed (m/s).
pub const MAX_SPEED: f32 = 60.0;

/// Airspeed at spawn (m/s).
pub const SPAWN_SPEED: f32 = 25.0;

/// Pitch rate per unit input (rad/s).
pub const PITCH_SENSITIVITY: f32 = 1.2;

/// Roll rate per unit input (rad/s).
pub const ROLL_SENSITIVITY: f32 = 1.8;

/// Throttle acceleration per unit input (m/s²).
pub const THROTTLE_SENSITIVITY: f32 = 15.0;

/// Yaw rate per radian of roll (1/s). Banking produces turning.
pub const TURN_SENSITIVITY: f32 = 0.9;

/// Idle pitch/roll decay rate toward level (1/s).
pub const AUTO_LEVEL_RATE: f32 = 2.0;

// --- Collision ---

/// Bounding-sphere radius of the aircraft (m).
pub const AIRCRAFT_COLLISION_RADIUS: f32 = 2.0;

/// World ground plane height (m).
pub const GROUND_LEVEL: f32 = 0.0;

/// Minimum time between two accepted collisions (s).
pub const COLLISION_COOLDOWN_SECS: f64 = 1.0;

/// Time input stays frozen after an accepted collision (s).
pub const RECOVERY_DURATION_SECS: f64 = 0.5;

/// Fraction of airspeed kept after a collision.
pub const COLLISION_SPEED_FACTOR: f32 = 0.3;

/// Climb rate while recovering (m/s).
pub const RECOVERY_CLIMB_RATE: f32 = 6.0;

/// Spawn position of the aircraft.
pub const SPAWN_POSITION: [f32; 3] = [0.0, 60.0, 0.0];

// --- Chase camera ---

/// Camera offset in the yaw-only frame of the aircraft: behind and above.
pub const CAMERA_OFFSET: [f32; 3] = [0.0, 4.0, 14.0];

/// Look target offset in the yaw-only frame: slightly ahead and above.
pub const CAMERA_LOOK_AHEAD: [f32; 3] = [0.0, 1.5, -8.0];

/// Positional damping rate (1/s). Equivalent to a per-frame factor of 0.1 at 60 Hz.
pub const CAMERA_POSITION_DAMPING: f32 = 6.32;

/// Rotational damping rate (1/s), slower than the positional one.
pub const CAMERA_ROTATION_DAMPING: f32 = 3.04;

// --- Weapons ---

/// Minimum time between two accepted fire requests (s).
pub const FIRE_COOLDOWN_SECS: f64 = 0.2;

/// Projectile speed (m/s).
pub const PROJECTILE_SPEED: f32 = 180.0;

/// Projectile lifetime before silent expiry (s).
pub const PROJECTILE_LIFETIME_SECS: f32 = 3.0;

/// Projectile hit radius (m).
pub const PROJECTILE_RADIUS: f32 = 0.5;

/// Lateral offset of each gun from the aircraft centreline (m).
pub const GUN_LATERAL_OFFSET: f32 = 1.2;

/// Distance ahead of the aircraft centre where projectiles appear (m).
pub const GUN_FORWARD_OFFSET: f32 = 2.5;

// --- Adversaries ---

/// Live adversary count the manager keeps topped up.
pub const POPULATION_FLOOR: usize = 5;

/// Minimum time between two spawns (s).
pub const SPAWN_COOLDOWN_SECS: f64 = 2.0;

/// Horizontal distance from the player at which adversaries appear (m).
pub const SPAWN_RADIUS: f32 = 250.0;

/// Lowest altitude an adversary may fly at (m).
pub const ADVERSARY_MIN_ALTITUDE: f32 = 20.0;

/// Altitude band above the minimum used for spawning and drift (m).
pub const ADVERSARY_ALTITUDE_VARIATION: f32 = 40.0;

/// Base hit radius of an adversary at scale 1.0 (m).
pub const ADVERSARY_RADIUS: f32 = 3.0;

/// Range of per-adversary scale factors.
pub const ADVERSARY_SCALE_RANGE: (f32, f32) = (0.8, 1.4);

/// Adversary cruise speed (m/s).
pub const ADVERSARY_FOLLOW_SPEED: f32 = 14.0;

/// Weight of the random wander direction in the steering blend.
pub const WANDER_WEIGHT: f32 = 0.4;

/// Period at which each adversary resamples its wander direction (s).
pub const WANDER_RESAMPLE_SECS: f64 = 0.3;

/// Altitude filter rate toward the drifting target (1/s).
pub const ALTITUDE_FOLLOW_RATE: f32 = 0.8;

/// Angular frequency of the altitude target drift (rad/s).
pub const ALTITUDE_DRIFT_FREQUENCY: f32 = 0.25;

/// Minimum distance adversaries try to keep between each other (m).
pub const MIN_SEPARATION: f32 = 12.0;

/// Repulsion speed applied while crowded (m/s).
pub const SEPARATION_STRENGTH: f32 = 10.0;

/// Score awarded per destroyed adversary.
pub const HIT_SCORE: i64 = 100;

// --- Effects ---

/// Explosion lifetime (s).
pub const EXPLOSION_LIFETIME_SECS: f32 = 0.6;

// --- Game rules ---

/// Player health at session start.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Health lost per accepted collision.
pub const COLLISION_DAMAGE: i32 = 20;

/// Score that ends the session in victory.
pub const VICTORY_SCORE: i64 = 3000;
