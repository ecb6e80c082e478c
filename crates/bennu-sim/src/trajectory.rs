//! Trajectory model: deflection force and lead time to miss distance.
//!
//! Pure functions. Inputs are clamped by the controller before they get here.

use bennu_core::types::MissionConfig;

/// Miss distance (km) after applying `force` (cm/s) for `elapsed_years`.
pub fn miss_distance(config: &MissionConfig, force: f64, elapsed_years: f64) -> f64 {
    config.initial_miss_km + force * elapsed_years * config.conversion_constant
}

/// Simulated years consumed by the countdown so far.
pub fn elapsed_years(config: &MissionConfig, time_remaining_years: f64) -> f64 {
    (config.total_years - time_remaining_years).max(0.0)
}

/// Miss distance for the time elapsed so far. No lead time is credited
/// before launch.
pub fn current_miss(
    config: &MissionConfig,
    force: f64,
    launched: bool,
    time_remaining_years: f64,
) -> f64 {
    if !launched {
        return config.initial_miss_km;
    }
    miss_distance(config, force, elapsed_years(config, time_remaining_years))
}

/// Miss distance if `force` is applied for the full countdown.
pub fn predicted_miss(config: &MissionConfig, force: f64) -> f64 {
    miss_distance(config, force, config.total_years)
}
