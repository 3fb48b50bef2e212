//! Conversion from astronomical units into scene units and simulated time.
//!
//! Sizes are exaggerated far more than distances so that planets stay visible
//! next to a star hundreds of times larger. That is a visualization choice and
//! the two scales are tuned independently.

/// Scene units per AU. Shared by orbit paths and body positions.
pub const SCENE_UNITS_PER_AU: f64 = 6_000.0;

/// Scene units per kilometer of physical radius.
pub const SIZE_SCALE: f64 = 1.0 / 1000.0;

/// Display radius multipliers applied on top of `SIZE_SCALE`.
pub const STAR_SIZE_EXAGGERATION: f64 = 1.5;
pub const PLANET_SIZE_EXAGGERATION: f64 = 3.0;
pub const MOON_SIZE_EXAGGERATION: f64 = 6.0;

// Moon tuning. Distances are pushed outward so that moons clear their
// exaggerated planet, and moon orbits are sped up so they visibly move at 1x.
pub const MOON_DISTANCE_SCALE: f64 = 0.002;
pub const MOON_ORBIT_RATE_BOOST: f64 = 10.0;

/// Simulated Earth days per real second at a 1x speed multiplier.
pub const SIM_DAYS_PER_REAL_SECOND: f64 = 0.01;

/// Axial spin is sped up relative to the orbital clock.
pub const SPIN_RATE_BOOST: f64 = 2.5;

/// The star's own spin, in radians per simulated day.
pub const STAR_SPIN_RAD_PER_DAY: f64 = 6.0;

/// Which display exaggeration a body gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    Star,
    Planet,
    Moon,
}

/// Convert a distance in AU to scene units.
pub fn astronomical_to_scene_distance(au: f64) -> f64 {
    au * SCENE_UNITS_PER_AU
}

/// Convert a moon's distance from its planet (km) to scene units.
pub fn moon_to_scene_distance(km: f64) -> f64 {
    km * MOON_DISTANCE_SCALE
}

/// Convert a physical radius (km) to scene units, without exaggeration.
pub fn physical_to_scene_size(km: f64) -> f64 {
    km * SIZE_SCALE
}

/// Radius a body is actually drawn with.
pub fn display_radius(class: SizeClass, km: f64) -> f64 {
    let exaggeration = match class {
        SizeClass::Star => STAR_SIZE_EXAGGERATION,
        SizeClass::Planet => PLANET_SIZE_EXAGGERATION,
        SizeClass::Moon => MOON_SIZE_EXAGGERATION,
    };
    physical_to_scene_size(km) * exaggeration
}

/// Advance the simulated clock (days) by a frame of real time.
///
/// Negative or non-finite inputs leave the clock where it is, so the result
/// never decreases. A speed of 0 pauses the clock.
pub fn advance_simulated_time(
    elapsed_real_seconds: f64,
    speed_multiplier: f64,
    previous_simulated_days: f64,
) -> f64 {
    if !elapsed_real_seconds.is_finite() || elapsed_real_seconds <= 0.0 {
        return previous_simulated_days;
    }
    if !speed_multiplier.is_finite() || speed_multiplier <= 0.0 {
        return previous_simulated_days;
    }
    previous_simulated_days + elapsed_real_seconds * speed_multiplier * SIM_DAYS_PER_REAL_SECOND
}
