//! Built-in Solar System data (NASA fact sheet values).
//!
//! Radii in km, planet distances in AU, moon distances in km, periods in
//! Earth days. Negative rotation periods are retrograde.

use super::{AtmosphereDescriptor, BodyId, CelestialBody, MoonData, RingDescriptor};

pub fn sun() -> CelestialBody {
    CelestialBody {
        id: BodyId::new("sun"),
        name: "Sun",
        radius_km: 696_340.0,
        relative_size: 109.2,
        distance_from_sun_au: 0.0,
        orbital_period_days: 0.0,
        // Equatorial.
        rotation_period_days: 27.0,
        axial_tilt_deg: 7.25,
        color: "#FDB813",
        texture: "textures/sun.jpg",
        rings: None,
        atmosphere: None,
        description: "The Sun is the star at the center of the Solar System. It is a nearly \
            perfect sphere of hot plasma, heated to incandescence by nuclear fusion reactions \
            in its core.",
        moons: Vec::new(),
        order: 0,
    }
}

pub fn planets() -> Vec<CelestialBody> {
    vec![
        CelestialBody {
            id: BodyId::new("mercury"),
            name: "Mercury",
            radius_km: 2439.7,
            relative_size: 0.383,
            distance_from_sun_au: 0.387,
            orbital_period_days: 87.97,
            rotation_period_days: 58.646,
            axial_tilt_deg: 0.034,
            color: "#B5B5B5",
            texture: "textures/mercury.jpg",
            rings: None,
            atmosphere: None,
            description: "Mercury is the smallest and innermost planet in the Solar System. It \
                has no natural satellites and no substantial atmosphere.",
            moons: Vec::new(),
            order: 1,
        },
        CelestialBody {
            id: BodyId::new("venus"),
            name: "Venus",
            radius_km: 6051.8,
            relative_size: 0.949,
            distance_from_sun_au: 0.723,
            orbital_period_days: 224.7,
            rotation_period_days: -243.0,
            axial_tilt_deg: 177.4,
            color: "#E6E6FA",
            texture: "textures/venus.jpg",
            rings: None,
            atmosphere: Some(AtmosphereDescriptor { color: "#FFFBE6" }),
            description: "Venus is the second planet from the Sun. It has the densest \
                atmosphere of all terrestrial planets, consisting mostly of carbon dioxide.",
            moons: Vec::new(),
            order: 2,
        },
        CelestialBody {
            id: BodyId::new("earth"),
            name: "Earth",
            radius_km: 6371.0,
            relative_size: 1.0,
            distance_from_sun_au: 1.0,
            orbital_period_days: 365.25,
            rotation_period_days: 1.0,
            axial_tilt_deg: 23.44,
            color: "#2E76CF",
            texture: "textures/earth.jpg",
            rings: None,
            atmosphere: Some(AtmosphereDescriptor { color: "#88B0DC" }),
            description: "Earth is the third planet from the Sun and the only astronomical \
                object known to harbor life. About 71% of Earth's surface is water-covered.",
            moons: vec![MoonData {
                id: BodyId::new("moon"),
                name: "Moon",
                radius_km: 1737.4,
                distance_from_planet_km: 384_400.0,
                orbital_period_days: 27.3,
                texture: "textures/moon.jpg",
            }],
            order: 3,
        },
        CelestialBody {
            id: BodyId::new("mars"),
            name: "Mars",
            radius_km: 3389.5,
            relative_size: 0.532,
            distance_from_sun_au: 1.524,
            orbital_period_days: 686.98,
            rotation_period_days: 1.03,
            axial_tilt_deg: 25.19,
            color: "#E27B58",
            texture: "textures/mars.jpg",
            rings: None,
            atmosphere: Some(AtmosphereDescriptor { color: "#FFD1BA" }),
            description: "Mars is the fourth planet from the Sun and the second-smallest \
                planet in the Solar System, being larger than only Mercury.",
            moons: vec![
                MoonData {
                    id: BodyId::new("phobos"),
                    name: "Phobos",
                    radius_km: 11.267,
                    distance_from_planet_km: 9376.0,
                    orbital_period_days: 0.32,
                    texture: "textures/phobos.jpg",
                },
                MoonData {
                    id: BodyId::new("deimos"),
                    name: "Deimos",
                    radius_km: 6.2,
                    distance_from_planet_km: 23_463.2,
                    orbital_period_days: 1.26,
                    texture: "textures/deimos.jpg",
                },
            ],
            order: 4,
        },
        CelestialBody {
            id: BodyId::new("jupiter"),
            name: "Jupiter",
            radius_km: 69_911.0,
            relative_size: 10.97,
            distance_from_sun_au: 5.203,
            orbital_period_days: 4332.59,
            rotation_period_days: 0.41,
            axial_tilt_deg: 3.13,
            color: "#E8CAA4",
            texture: "textures/jupiter.jpg",
            rings: Some(RingDescriptor {
                inner_radius_km: 92_000.0,
                outer_radius_km: 225_000.0,
                texture: "textures/jupiter_ring.png",
            }),
            atmosphere: Some(AtmosphereDescriptor { color: "#F0E2C4" }),
            description: "Jupiter is the fifth planet from the Sun and the largest in the \
                Solar System. It is a gas giant with a mass more than two and a half times \
                that of all the other planets combined.",
            moons: Vec::new(),
            order: 5,
        },
        CelestialBody {
            id: BodyId::new("saturn"),
            name: "Saturn",
            radius_km: 58_232.0,
            relative_size: 9.14,
            distance_from_sun_au: 9.537,
            orbital_period_days: 10_759.22,
            rotation_period_days: 0.44,
            axial_tilt_deg: 26.73,
            color: "#F4D798",
            texture: "textures/saturn.jpg",
            rings: Some(RingDescriptor {
                inner_radius_km: 74_500.0,
                outer_radius_km: 136_800.0,
                texture: "textures/saturn_rings.png",
            }),
            atmosphere: Some(AtmosphereDescriptor { color: "#FFF0D8" }),
            description: "Saturn is the sixth planet from the Sun and the second-largest in \
                the Solar System, after Jupiter. It is a gas giant with an average radius \
                about nine times that of Earth.",
            moons: Vec::new(),
            order: 6,
        },
        CelestialBody {
            id: BodyId::new("uranus"),
            name: "Uranus",
            radius_km: 25_362.0,
            relative_size: 3.98,
            distance_from_sun_au: 19.191,
            orbital_period_days: 30_688.5,
            rotation_period_days: -0.72,
            // Rotates on its side.
            axial_tilt_deg: 97.77,
            color: "#D1E7E7",
            texture: "textures/uranus.jpg",
            rings: Some(RingDescriptor {
                inner_radius_km: 38_000.0,
                outer_radius_km: 98_000.0,
                texture: "textures/uranus_rings.png",
            }),
            atmosphere: Some(AtmosphereDescriptor { color: "#D1E7E7" }),
            description: "Uranus is the seventh planet from the Sun. It has the third-largest \
                planetary radius and fourth-largest planetary mass in the Solar System.",
            moons: Vec::new(),
            order: 7,
        },
        CelestialBody {
            id: BodyId::new("neptune"),
            name: "Neptune",
            radius_km: 24_622.0,
            relative_size: 3.86,
            distance_from_sun_au: 30.069,
            orbital_period_days: 60_182.0,
            rotation_period_days: 0.67,
            axial_tilt_deg: 28.32,
            color: "#3E66F9",
            texture: "textures/neptune.jpg",
            rings: Some(RingDescriptor {
                inner_radius_km: 40_900.0,
                outer_radius_km: 62_900.0,
                texture: "textures/neptune_rings.png",
            }),
            atmosphere: Some(AtmosphereDescriptor { color: "#A8D0F9" }),
            description: "Neptune is the eighth and farthest known Solar planet from the Sun. \
                It is the fourth-largest planet by diameter and the third-most-massive planet.",
            moons: Vec::new(),
            order: 8,
        },
    ]
}
