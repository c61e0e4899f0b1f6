//! Background texture generation for Bevy apps.
//!
//! Generation runs on a private, bounded [`rayon`] pool so a cold catalog
//! does not stall the frame.  The pool is limited to
//! [`MAX_GENERATION_THREADS`] concurrent tasks; excess requests queue.  When a
//! task finishes, [`poll_texture_tasks`] uploads the bundle into
//! [`Assets<Image>`] and gives the entity a [`TextureReady`] component.
//!
//! # Usage
//! ```rust,ignore
//! fn spawn(mut commands: Commands, cache: Res<SharedTextureCache>) {
//!     let request = MaterialTextureRequest::parse("wood", "#8b6e4e", "wood-walnut-light")?;
//!     commands.spawn(PendingTexture::new(&cache, request));
//! }
//! // Later, query for TextureReady to consume the handles.
//! ```

/// Maximum number of texture generation tasks that run concurrently.
const MAX_GENERATION_THREADS: usize = 4;

/// Returns the library-private rayon thread pool used for texture generation.
///
/// Isolated from the application's global rayon pool so texture work does not
/// starve unrelated parallel workloads.
fn gen_pool() -> &'static rayon::ThreadPool {
    static POOL: OnceLock<rayon::ThreadPool> = OnceLock::new();
    POOL.get_or_init(|| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(MAX_GENERATION_THREADS)
            .thread_name(|i| format!("texture-gen-{i}"))
            .build()
            .expect("failed to build texture generation thread pool")
    })
}

use std::sync::{
    Arc, Mutex, OnceLock,
    atomic::{AtomicBool, Ordering},
    mpsc,
};

use bevy::{
    asset::Assets,
    ecs::{
        component::Component,
        entity::Entity,
        system::{Commands, Query, ResMut},
    },
    image::Image,
    prelude::Resource,
};

use crate::{
    cache::TextureCache,
    synth::{MaterialTextureRequest, PbrTextures, generate_request},
    upload::{GeneratedHandles, bundle_to_images},
};

/// The app-wide texture cache, inserted by
/// [`PbrTexturePlugin`](crate::PbrTexturePlugin).
#[derive(Resource, Clone, Default)]
pub struct SharedTextureCache(pub Arc<TextureCache>);

/// Spawned onto an entity to request background generation of one material.
///
/// Dropping it (e.g. when the entity is despawned) sets a cancellation flag;
/// a task that has not started yet exits without generating.
#[derive(Component)]
pub struct PendingTexture {
    // Mutex makes the receiver Sync, which Component requires.
    rx: Mutex<mpsc::Receiver<PbrTextures>>,
    cancelled: Arc<AtomicBool>,
}

impl Drop for PendingTexture {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl PendingTexture {
    /// Queue generation of `request` against the shared cache, using the
    /// cache's config.
    pub fn new(cache: &SharedTextureCache, request: MaterialTextureRequest) -> Self {
        let cache = Arc::clone(&cache.0);
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let (tx, rx) = mpsc::sync_channel(1);
        gen_pool().spawn(move || {
            if !flag.load(Ordering::Relaxed) {
                tx.send(generate_request(&cache, &request)).ok();
            }
        });
        Self {
            rx: Mutex::new(rx),
            cancelled,
        }
    }
}

/// Added to the entity by [`poll_texture_tasks`] when generation is complete.
#[derive(Component)]
pub struct TextureReady(pub GeneratedHandles);

/// Bevy system — polls pending generation tasks and uploads finished bundles.
pub fn poll_texture_tasks(
    mut commands: Commands,
    tasks: Query<(Entity, &PendingTexture)>,
    mut images: ResMut<Assets<Image>>,
) {
    for (entity, pending) in &tasks {
        let poll = pending
            .rx
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .try_recv();
        match poll {
            Ok(bundle) => {
                let handles = bundle_to_images(&bundle, &mut images);
                commands
                    .entity(entity)
                    .remove::<PendingTexture>()
                    .insert(TextureReady(handles));
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                bevy::log::error!("Texture generation thread panicked");
                commands.entity(entity).remove::<PendingTexture>();
            }
            Err(mpsc::TryRecvError::Empty) => {}
        }
    }
}
