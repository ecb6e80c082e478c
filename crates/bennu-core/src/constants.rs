//! Mission constants and tuning parameters.

use std::time::Duration;

// --- Trajectory ---

/// Kilometres of miss distance gained per (cm/s of deflection × year of lead time).
pub const CONVERSION_CONSTANT: f64 = 31.536;

/// Minimum miss distance (km) for the asteroid to clear Earth safely.
pub const SAFE_DISTANCE_KM: f64 = 2000.0;

/// Miss distance (km) with no deflection applied. Negative is a collision course.
pub const INITIAL_MISS_KM: f64 = -500.0;

/// Lower edge of the "dangerous" band (km). Anything below is catastrophic.
pub const DANGER_FLOOR_KM: f64 = -1000.0;

// --- Countdown ---

/// Length of the countdown in simulated years.
pub const TOTAL_YEARS: f64 = 10.0;

/// Simulated years consumed per clock tick at 1x speed.
pub const BASE_DECREMENT_YEARS: f64 = 0.1;

/// Remaining time below this is treated as zero, absorbing float drift
/// from repeated decrements.
pub const CLOCK_EPSILON_YEARS: f64 = 1e-9;

/// Real-time period of one clock tick. Independent of the speed multiplier.
pub const CLOCK_TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Allowed time speed multipliers.
pub const SPEED_MULTIPLIERS: [u32; 4] = [1, 2, 5, 10];

// --- Deflection ---

/// Minimum deflection force (cm/s).
pub const FORCE_MIN: f64 = 0.1;

/// Maximum deflection force (cm/s).
pub const FORCE_MAX: f64 = 5.0;

/// Force preselected when a mission is created (cm/s).
pub const FORCE_DEFAULT: f64 = 2.5;

// --- Explosion sequence ---

/// Terminal explosion frame. Frames run 1..=EXPLOSION_FRAMES once triggered.
pub const EXPLOSION_FRAMES: u32 = 30;

/// Real-time period between explosion frames.
pub const EXPLOSION_FRAME_PERIOD: Duration = Duration::from_millis(50);

/// Delay after the terminal explosion frame before the mission resolves.
pub const EXPLOSION_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Delay after a safe expiry before the mission resolves.
pub const SUCCESS_SETTLE_DELAY: Duration = Duration::from_millis(1000);

// --- Results ---

/// World population credited as protected on a successful mission.
pub const WORLD_POPULATION: u64 = 8_000_000_000;
