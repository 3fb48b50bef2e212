//! Celestial catalog
//!
//! Static description of the star, its planets and their moons. The catalog
//! is validated once when it is built and is read-only afterwards; it is
//! inserted into the app as a plain `Resource` and shared by every system.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use bevy::color::Srgba;
use bevy::prelude::*;

use crate::core::CoreError;
use crate::core::scale::SizeClass;

pub mod bodies;

/// Stable, flat identifier shared by the star, planets and moons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(&'static str);

impl BodyId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Borrow<str> for BodyId {
    fn borrow(&self) -> &str {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Planetary ring, drawn as an annulus around the globe.
#[derive(Clone, Debug, PartialEq)]
pub struct RingDescriptor {
    pub inner_radius_km: f64,
    pub outer_radius_km: f64,
    pub texture: &'static str,
}

/// Translucent shell drawn just outside the globe.
#[derive(Clone, Debug, PartialEq)]
pub struct AtmosphereDescriptor {
    /// Hex sRGB color, e.g. `#88B0DC`.
    pub color: &'static str,
}

/// A moon, always nested under exactly one planet.
#[derive(Clone, Debug, PartialEq)]
pub struct MoonData {
    pub id: BodyId,
    pub name: &'static str,
    pub radius_km: f64,
    pub distance_from_planet_km: f64,
    pub orbital_period_days: f64,
    pub texture: &'static str,
}

/// The star or a planet.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub id: BodyId,
    pub name: &'static str,
    pub radius_km: f64,
    /// Radius relative to Earth.
    pub relative_size: f64,
    /// 0 only for the star.
    pub distance_from_sun_au: f64,
    /// 0 only for the star, which does not orbit.
    pub orbital_period_days: f64,
    /// Negative is retrograde spin, 0 means no spin update.
    pub rotation_period_days: f64,
    pub axial_tilt_deg: f64,
    /// Hex sRGB color used when no texture is loaded.
    pub color: &'static str,
    pub texture: &'static str,
    pub rings: Option<RingDescriptor>,
    pub atmosphere: Option<AtmosphereDescriptor>,
    pub description: &'static str,
    pub moons: Vec<MoonData>,
    /// Canonical order from the star outward.
    pub order: u32,
}

impl CelestialBody {
    pub fn is_star(&self) -> bool {
        self.orbital_period_days == 0.0
    }

    pub fn has_rings(&self) -> bool {
        self.rings.is_some()
    }

    pub fn is_retrograde(&self) -> bool {
        self.rotation_period_days < 0.0
    }
}

/// Borrowed view of any catalog entry, found by identifier.
#[derive(Clone, Copy, Debug)]
pub enum BodyRef<'a> {
    Star(&'a CelestialBody),
    Planet(&'a CelestialBody),
    Moon {
        moon: &'a MoonData,
        parent: &'a CelestialBody,
    },
}

impl BodyRef<'_> {
    pub fn id(&self) -> BodyId {
        match self {
            BodyRef::Star(body) | BodyRef::Planet(body) => body.id,
            BodyRef::Moon { moon, .. } => moon.id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BodyRef::Star(body) | BodyRef::Planet(body) => body.name,
            BodyRef::Moon { moon, .. } => moon.name,
        }
    }

    pub fn radius_km(&self) -> f64 {
        match self {
            BodyRef::Star(body) | BodyRef::Planet(body) => body.radius_km,
            BodyRef::Moon { moon, .. } => moon.radius_km,
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self, BodyRef::Star(_))
    }

    pub fn size_class(&self) -> SizeClass {
        match self {
            BodyRef::Star(_) => SizeClass::Star,
            BodyRef::Planet(_) => SizeClass::Planet,
            BodyRef::Moon { .. } => SizeClass::Moon,
        }
    }
}

/// Validated, immutable dataset.
#[derive(Resource, Clone, Debug)]
pub struct CelestialCatalog {
    sun: CelestialBody,
    planets: Vec<CelestialBody>,
}

impl CelestialCatalog {
    /// Build a catalog, checking every invariant the motion engine relies on.
    ///
    /// Planets are stored sorted by `order`.
    pub fn new(sun: CelestialBody, mut planets: Vec<CelestialBody>) -> Result<Self, CoreError> {
        planets.sort_by_key(|p| p.order);
        let catalog = Self { sun, planets };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The Sun, eight planets and their major moons.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::new(bodies::sun(), bodies::planets())
    }

    pub fn sun(&self) -> &CelestialBody {
        &self.sun
    }

    /// Planets in canonical order from the star outward.
    pub fn planets(&self) -> &[CelestialBody] {
        &self.planets
    }

    /// Sun followed by planets. Moons are reached through each planet.
    pub fn bodies(&self) -> impl Iterator<Item = &CelestialBody> + '_ {
        std::iter::once(&self.sun).chain(self.planets.iter())
    }

    /// Every entry including moons: star, then each planet followed by its moons.
    pub fn all(&self) -> impl Iterator<Item = BodyRef<'_>> + '_ {
        std::iter::once(BodyRef::Star(&self.sun)).chain(self.planets.iter().flat_map(|planet| {
            std::iter::once(BodyRef::Planet(planet)).chain(
                planet
                    .moons
                    .iter()
                    .map(move |moon| BodyRef::Moon { moon, parent: planet }),
            )
        }))
    }

    /// Find any entry by identifier.
    pub fn find(&self, id: &str) -> Option<BodyRef<'_>> {
        self.all().find(|body| body.id().as_str() == id)
    }

    /// Same as `find`, but a miss is reported as a lookup failure.
    pub fn resolve(&self, id: &str) -> Result<BodyRef<'_>, CoreError> {
        self.find(id).ok_or_else(|| CoreError::UnknownBody(id.to_string()))
    }

    /// Star or planet with the given `order`.
    pub fn by_order(&self, order: u32) -> Option<&CelestialBody> {
        self.bodies().find(|body| body.order == order)
    }

    /// Entry following `id` in flattened order, wrapping around.
    pub fn next_after(&self, id: BodyId) -> BodyId {
        let ids: Vec<BodyId> = self.all().map(|b| b.id()).collect();
        match ids.iter().position(|candidate| *candidate == id) {
            Some(index) => ids[(index + 1) % ids.len()],
            None => self.sun.id,
        }
    }

    /// Total number of entries including moons.
    pub fn len(&self) -> usize {
        self.all().count()
    }

    fn validate(&self) -> Result<(), CoreError> {
        let sun = &self.sun;
        if sun.distance_from_sun_au != 0.0 || sun.orbital_period_days != 0.0 {
            return Err(violation(format!(
                "star '{}' must have zero distance and orbital period",
                sun.id
            )));
        }
        if !sun.moons.is_empty() {
            return Err(violation(format!("star '{}' cannot carry moons", sun.id)));
        }
        validate_common(sun)?;

        let mut previous: Option<&CelestialBody> = None;
        for planet in &self.planets {
            validate_common(planet)?;
            if !is_positive(planet.distance_from_sun_au) {
                return Err(violation(format!(
                    "'{}' needs a positive distance from the sun",
                    planet.id
                )));
            }
            if !is_positive(planet.orbital_period_days) {
                return Err(violation(format!(
                    "'{}' needs a positive orbital period",
                    planet.id
                )));
            }
            if planet.order <= sun.order {
                return Err(violation(format!(
                    "'{}' must come after the star in display order",
                    planet.id
                )));
            }
            if let Some(prev) = previous {
                if planet.order == prev.order {
                    return Err(violation(format!(
                        "'{}' and '{}' share order {}",
                        prev.id, planet.id, planet.order
                    )));
                }
                if planet.distance_from_sun_au <= prev.distance_from_sun_au {
                    return Err(violation(format!(
                        "order of '{}' is inconsistent with its distance from the sun",
                        planet.id
                    )));
                }
            }
            for moon in &planet.moons {
                if !is_positive(moon.radius_km)
                    || !is_positive(moon.distance_from_planet_km)
                    || !is_positive(moon.orbital_period_days)
                {
                    return Err(violation(format!(
                        "moon '{}' of '{}' needs positive radius, distance and period",
                        moon.id, planet.id
                    )));
                }
            }
            previous = Some(planet);
        }

        let mut seen = HashSet::new();
        for body in self.all() {
            if !seen.insert(body.id()) {
                return Err(violation(format!("duplicate identifier '{}'", body.id())));
            }
        }
        Ok(())
    }
}

fn validate_common(body: &CelestialBody) -> Result<(), CoreError> {
    if !is_positive(body.radius_km) {
        return Err(violation(format!("'{}' needs a positive radius", body.id)));
    }
    if !body.rotation_period_days.is_finite() || !body.axial_tilt_deg.is_finite() {
        return Err(violation(format!(
            "'{}' has a non-finite rotation period or tilt",
            body.id
        )));
    }
    parse_color(body.color).map_err(|_| {
        violation(format!("'{}' has invalid color '{}'", body.id, body.color))
    })?;
    if let Some(rings) = &body.rings
        && !(rings.inner_radius_km > 0.0 && rings.inner_radius_km < rings.outer_radius_km)
    {
        return Err(violation(format!(
            "'{}' ring radii must satisfy 0 < inner < outer",
            body.id
        )));
    }
    if let Some(atmosphere) = &body.atmosphere {
        parse_color(atmosphere.color).map_err(|_| {
            violation(format!(
                "'{}' has invalid atmosphere color '{}'",
                body.id, atmosphere.color
            ))
        })?;
    }
    Ok(())
}

/// Parse a catalog hex color. Colors are checked at load so this only fails
/// on hand-built data.
pub fn parse_color(hex: &str) -> Result<Color, CoreError> {
    Srgba::hex(hex)
        .map(Color::from)
        .map_err(|e| CoreError::InvariantViolation(format!("color '{}': {}", hex, e)))
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn violation(msg: String) -> CoreError {
    CoreError::InvariantViolation(msg)
}
