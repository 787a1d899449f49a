//! Shared setup helpers for rein-contact benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench contact
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench contact -- compose
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench contact -- archive

use std::sync::Arc;

use rein_contact::{MaterialNsc, SharedMaterial, SurfaceMaterial};

/// A small palette of distinct NSC materials, the way a scene reuses a few
/// surface definitions across many bodies.
pub fn material_palette() -> Vec<MaterialNsc> {
    (0..8)
        .map(|i| {
            let t = i as f32 / 8.0;
            let mut m = MaterialNsc::new();
            m.set_static_friction(0.3 + 0.6 * t);
            m.set_sliding_friction(0.2 + 0.6 * t);
            m.set_rolling_friction(0.01 * t);
            m.set_restitution(0.5 * (1.0 - t));
            m.set_cohesion(t);
            m.set_compliance(1e-6 * (i + 1) as f32);
            m.set_compliance_t(2e-6 * (i + 1) as f32);
            m
        })
        .collect()
}

/// `n` contact pairs drawn from the palette.
pub fn setup_material_pairs(n: usize) -> Vec<(MaterialNsc, MaterialNsc)> {
    let palette = material_palette();
    (0..n)
        .map(|i| {
            let a = palette[i % palette.len()].clone();
            let b = palette[(i * 5 + 3) % palette.len()].clone();
            (a, b)
        })
        .collect()
}

/// World with `n` bodies sharing the palette materials, plus `n` adjacent pairs.
pub fn setup_material_world(n: usize) -> (hecs::World, Vec<(hecs::Entity, hecs::Entity)>) {
    let palette: Vec<SharedMaterial> = material_palette()
        .into_iter()
        .map(|m| Arc::new(m) as SharedMaterial)
        .collect();

    let mut world = hecs::World::new();
    let entities: Vec<hecs::Entity> = (0..n.max(2))
        .map(|i| world.spawn((SurfaceMaterial(palette[i % palette.len()].clone()),)))
        .collect();

    let pairs = (0..n)
        .map(|i| (entities[i % entities.len()], entities[(i + 1) % entities.len()]))
        .collect();
    (world, pairs)
}
