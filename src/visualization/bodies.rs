//! Spawning of the star, planets and moons.
//!
//! Each body gets an anchor entity (position) and a globe child (mesh, tilt
//! and spin). Rings and atmospheres hang off the anchor so they do not spin
//! with the surface texture. Moons are children of their planet's anchor.

use std::f32::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;

use crate::catalog::{BodyId, CelestialBody, CelestialCatalog, MoonData, parse_color};
use crate::config::Settings;
use crate::core::scale::{
    PLANET_SIZE_EXAGGERATION, SizeClass, display_radius, physical_to_scene_size,
};
use crate::core::space::scene_rotation_to_render;
use crate::orbital::motion::globe_orientation;
use crate::orbital::{BodyHandle, BodyRegistry};

/// Asset folder under Bevy's base path (`AssetPlugin::file_path` default).
const ASSET_DIR: &str = "assets";

/// Corona and atmosphere shells, relative to the globe radius.
pub const CORONA_SCALE: f32 = 1.2;
pub const ATMOSPHERE_SCALE: f32 = 1.05;

const SPHERE_SECTORS: u32 = 64;
const SPHERE_STACKS: u32 = 32;

/// Anchor of a body: carries its position.
#[derive(Component)]
pub struct BodyAnchor;

/// Globe of a body: carries its mesh, tilt and spin.
#[derive(Component)]
pub struct BodyGlobe;

#[derive(Component)]
pub struct Corona;

#[derive(Component)]
pub struct Rings;

#[derive(Component)]
pub struct Atmosphere;

/// Spawn every catalog body and register its handle.
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    catalog: Res<CelestialCatalog>,
    settings: Res<Settings>,
    mut registry: ResMut<BodyRegistry>,
) {
    let mut textures = TextureLoader {
        asset_server: &asset_server,
        root: asset_root(),
        enabled: settings.load_textures,
        missing: 0,
    };

    let sun = catalog.sun();
    let sun_handle = spawn_star(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut textures,
        sun,
    );
    register(&mut registry, &catalog, sun.id, sun_handle);

    for planet in catalog.planets() {
        let handle = spawn_planet(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut textures,
            planet,
        );
        register(&mut registry, &catalog, planet.id, handle);

        for moon in &planet.moons {
            let moon_handle = spawn_moon(
                &mut commands,
                &mut meshes,
                &mut materials,
                &mut textures,
                moon,
                handle.anchor,
            );
            register(&mut registry, &catalog, moon.id, moon_handle);
        }
    }

    if textures.missing > 0 {
        info!(
            "{} textures not found under {}; using flat colors for those bodies",
            textures.missing,
            textures.root.display()
        );
    }
    if registry.is_empty() {
        warn!("No bodies were registered; nothing will move");
    } else {
        info!("Spawned {} bodies", registry.len());
    }
}

fn register(
    registry: &mut BodyRegistry,
    catalog: &CelestialCatalog,
    id: BodyId,
    handle: BodyHandle,
) {
    if let Err(e) = registry.register(catalog, id.as_str(), handle) {
        error!("Body registration failed: {}", e);
    }
}

/// Loads a texture only when the file is actually there, since a material
/// waiting on a missing image is never drawn.
struct TextureLoader<'a> {
    asset_server: &'a AssetServer,
    root: PathBuf,
    enabled: bool,
    missing: usize,
}

/// Folder the asset server reads from. Bevy resolves its base path from
/// `BEVY_ASSET_ROOT`, then `CARGO_MANIFEST_DIR`, then the executable's
/// directory, so this does not depend on the working directory.
pub fn asset_root() -> PathBuf {
    FileAssetReader::get_base_path().join(ASSET_DIR)
}

fn texture_available(root: &Path, path: &str) -> bool {
    root.join(path).is_file()
}

impl TextureLoader<'_> {
    fn load(&mut self, path: &'static str) -> Option<Handle<Image>> {
        if !self.enabled {
            return None;
        }
        if texture_available(&self.root, path) {
            Some(self.asset_server.load(path))
        } else {
            debug!("Texture {} not found", path);
            self.missing += 1;
            None
        }
    }
}

fn catalog_color(hex: &str) -> Color {
    // Colors are checked when the catalog is built.
    parse_color(hex).unwrap_or(Color::WHITE)
}

fn uv_sphere(meshes: &mut Assets<Mesh>, radius: f32) -> Handle<Mesh> {
    meshes.add(Sphere::new(radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS))
}

fn spawn_star(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &mut TextureLoader,
    sun: &CelestialBody,
) -> BodyHandle {
    let radius = display_radius(SizeClass::Star, sun.radius_km) as f32;
    let color = catalog_color(sun.color);
    let texture = textures.load(sun.texture);

    let globe_material = materials.add(StandardMaterial {
        base_color: if texture.is_some() { Color::WHITE } else { color },
        base_color_texture: texture,
        emissive: LinearRgba::from(color) * 4.0,
        unlit: true,
        ..default()
    });
    let corona_material = materials.add(StandardMaterial {
        base_color: color.with_alpha(0.15),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let anchor = commands
        .spawn((
            Transform::default(),
            Visibility::Visible,
            BodyAnchor,
            Name::new(sun.name),
        ))
        .id();
    let globe = commands
        .spawn((
            Mesh3d(uv_sphere(meshes, radius)),
            MeshMaterial3d(globe_material),
            Transform::from_rotation(scene_rotation_to_render(globe_orientation(
                sun.axial_tilt_deg,
                0.0,
            ))),
            BodyGlobe,
            ChildOf(anchor),
        ))
        .id();
    commands.spawn((
        Mesh3d(uv_sphere(meshes, radius * CORONA_SCALE)),
        MeshMaterial3d(corona_material),
        Transform::default(),
        Corona,
        ChildOf(anchor),
    ));
    commands.spawn((super::lighting::sun_light(), ChildOf(anchor)));

    BodyHandle { anchor, globe }
}

fn spawn_planet(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &mut TextureLoader,
    planet: &CelestialBody,
) -> BodyHandle {
    let radius = display_radius(SizeClass::Planet, planet.radius_km) as f32;
    let color = catalog_color(planet.color);
    let texture = textures.load(planet.texture);

    let material = materials.add(StandardMaterial {
        base_color: if texture.is_some() { Color::WHITE } else { color },
        base_color_texture: texture,
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    });

    let anchor = commands
        .spawn((
            Transform::default(),
            Visibility::Visible,
            BodyAnchor,
            Name::new(planet.name),
        ))
        .id();
    let globe = commands
        .spawn((
            Mesh3d(uv_sphere(meshes, radius)),
            MeshMaterial3d(material),
            Transform::from_rotation(scene_rotation_to_render(globe_orientation(
                planet.axial_tilt_deg,
                0.0,
            ))),
            BodyGlobe,
            ChildOf(anchor),
        ))
        .id();

    if let Some(rings) = &planet.rings {
        let inner = ring_radius(rings.inner_radius_km);
        let outer = ring_radius(rings.outer_radius_km);
        let texture = textures.load(rings.texture);
        let ring_material = materials.add(StandardMaterial {
            base_color: if texture.is_some() {
                Color::WHITE
            } else {
                color.with_alpha(0.6)
            },
            base_color_texture: texture,
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        // The annulus is built in the XY plane; lay it flat, then tilt it
        // with the equator.
        let rotation = Quat::from_rotation_x(planet.axial_tilt_deg.to_radians() as f32)
            * Quat::from_rotation_x(-FRAC_PI_2);
        commands.spawn((
            Mesh3d(meshes.add(Annulus::new(inner, outer).mesh().resolution(128))),
            MeshMaterial3d(ring_material),
            Transform::from_rotation(rotation),
            Rings,
            ChildOf(anchor),
        ));
    }

    if let Some(atmosphere) = &planet.atmosphere {
        let shell_material = materials.add(StandardMaterial {
            base_color: catalog_color(atmosphere.color).with_alpha(0.2),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        commands.spawn((
            Mesh3d(uv_sphere(meshes, radius * ATMOSPHERE_SCALE)),
            MeshMaterial3d(shell_material),
            Transform::default(),
            Atmosphere,
            ChildOf(anchor),
        ));
    }

    BodyHandle { anchor, globe }
}

fn ring_radius(radius_km: f64) -> f32 {
    (physical_to_scene_size(radius_km) * PLANET_SIZE_EXAGGERATION) as f32
}

fn spawn_moon(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &mut TextureLoader,
    moon: &MoonData,
    planet_anchor: Entity,
) -> BodyHandle {
    let radius = display_radius(SizeClass::Moon, moon.radius_km) as f32;
    let texture = textures.load(moon.texture);
    let material = materials.add(StandardMaterial {
        base_color: if texture.is_some() {
            Color::WHITE
        } else {
            Color::srgb(0.6, 0.6, 0.6)
        },
        base_color_texture: texture,
        perceptual_roughness: 1.0,
        ..default()
    });

    let anchor = commands
        .spawn((
            Transform::default(),
            Visibility::Inherited,
            BodyAnchor,
            Name::new(moon.name),
            ChildOf(planet_anchor),
        ))
        .id();
    let globe = commands
        .spawn((
            Mesh3d(uv_sphere(meshes, radius)),
            MeshMaterial3d(material),
            Transform::default(),
            BodyGlobe,
            ChildOf(anchor),
        ))
        .id();

    BodyHandle { anchor, globe }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scale::moon_to_scene_distance;

    #[test]
    fn test_rings_clear_their_planet() {
        let catalog = CelestialCatalog::builtin().unwrap();
        for planet in catalog.planets().iter().filter(|p| p.has_rings()) {
            let globe = display_radius(SizeClass::Planet, planet.radius_km);
            let rings = planet.rings.as_ref().unwrap();
            let inner = ring_radius(rings.inner_radius_km) as f64;
            assert!(inner > globe, "{} rings cut through the globe", planet.id);
        }
    }

    #[test]
    fn test_moons_outside_atmosphere() {
        let catalog = CelestialCatalog::builtin().unwrap();
        for planet in catalog.planets() {
            let globe = display_radius(SizeClass::Planet, planet.radius_km);
            let shell = globe * ATMOSPHERE_SCALE as f64;
            for moon in &planet.moons {
                let orbit = moon_to_scene_distance(moon.distance_from_planet_km);
                assert!(orbit > shell, "{} orbits inside {}", moon.id, planet.id);
            }
        }
    }

    #[test]
    fn test_catalog_colors_parse() {
        let catalog = CelestialCatalog::builtin().unwrap();
        for body in catalog.bodies() {
            assert!(parse_color(body.color).is_ok());
        }
    }

    #[test]
    fn test_texture_lookup_uses_given_root() {
        let root = std::env::temp_dir().join(format!("bevysolar-assets-{}", std::process::id()));
        std::fs::create_dir_all(root.join("textures")).unwrap();
        std::fs::write(root.join("textures/earth.jpg"), b"").unwrap();

        assert!(texture_available(&root, "textures/earth.jpg"));
        assert!(!texture_available(&root, "textures/mars.jpg"));
        // The lookup is anchored at the root, not the working directory.
        assert!(!texture_available(Path::new(ASSET_DIR), "textures/earth.jpg"));
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn test_asset_root_follows_bevy_base_path() {
        let root = asset_root();
        assert!(root.starts_with(FileAssetReader::get_base_path()));
        assert!(root.ends_with(ASSET_DIR));
    }
}
