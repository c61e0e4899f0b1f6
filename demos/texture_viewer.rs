//! `texture_viewer` — shows one albedo map per archetype from the built-in
//! catalog, side-by-side in a window.
//!
//! Run with:
//!   cargo run --example texture_viewer --features bevy

use bevy::prelude::*;
use pbr_texture_synth::{
    Catalog, PbrTexturePlugin, TextureType,
    async_gen::{PendingTexture, SharedTextureCache, TextureReady},
};

const TEX_SIZE: f32 = 256.0;
const SPACING: f32 = TEX_SIZE + 20.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "pbr_texture_synth — viewer".into(),
                resolution: ((SPACING * 6.0 + 40.0) as u32, (TEX_SIZE + 80.0) as u32).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PbrTexturePlugin)
        .add_systems(Startup, spawn_tasks)
        .add_systems(Update, show_ready_textures)
        .run();
}

/// Slot index and label for a finished texture.
#[derive(Component)]
struct TextureSlot(usize, String);

fn spawn_tasks(mut commands: Commands, cache: Res<SharedTextureCache>) {
    commands.spawn(Camera2d);

    let catalog = Catalog::builtin();
    let firsts = TextureType::ALL
        .iter()
        .filter_map(|&kind| catalog.of_type(kind).next());
    for (slot, material) in firsts.enumerate() {
        commands.spawn((
            PendingTexture::new(&cache, material.request()),
            TextureSlot(slot, material.name.clone()),
        ));
    }
}

fn show_ready_textures(
    mut commands: Commands,
    ready: Query<(Entity, &TextureReady, &TextureSlot)>,
    mut shown: Local<Vec<Entity>>,
) {
    for (entity, ready_tex, slot) in &ready {
        if shown.contains(&entity) {
            continue;
        }
        shown.push(entity);

        let x = (slot.0 as f32 - 2.5) * SPACING;

        commands.spawn((
            Sprite {
                image: ready_tex.0.albedo.clone(),
                custom_size: Some(Vec2::splat(TEX_SIZE)),
                ..default()
            },
            Transform::from_translation(Vec3::new(x, 0.0, 0.0)),
        ));
        commands.spawn((
            Text2d::new(slot.1.clone()),
            Transform::from_translation(Vec3::new(x, -(TEX_SIZE * 0.5 + 18.0), 0.0)),
        ));
    }
}
