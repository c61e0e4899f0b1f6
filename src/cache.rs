//! Get-or-create memo table for generated rasters.
//!
//! The cache is an ordinary value: construct one, then hand it (by reference
//! or behind an `Arc`) to every call site that generates textures.  Separate
//! instances never share entries.
//!
//! A cache also owns the [`SynthConfig`] its rasters were generated with,
//! validated on construction.  Keys only name the material, so settings that
//! change the output must not vary between requests sharing one cache.
//!
//! Entries live as long as the cache.  There is no eviction; the material
//! catalog is small and fixed, so the table stays bounded in practice.
//!
//! # Concurrency
//! Generation runs outside the lock.  Two threads that miss on the same key
//! at the same time may both generate, but the first insert wins and every
//! caller gets that same `Arc`.  Generation is pure, so the discarded copy is
//! identical anyway.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use crate::{color::Rgb, config::SynthConfig, error::TextureError, generator::Raster};

/// Which map of a bundle a cache entry holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Albedo,
    Roughness,
    Normal,
}

/// Composite identity of one cached raster.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub channel: Channel,
    pub material_id: String,
    pub base_color: Rgb,
}

impl CacheKey {
    pub fn new(channel: Channel, material_id: impl Into<String>, base_color: Rgb) -> Self {
        Self {
            channel,
            material_id: material_id.into(),
            base_color,
        }
    }
}

#[derive(Default)]
pub struct TextureCache {
    config: SynthConfig,
    entries: RwLock<HashMap<CacheKey, Arc<Raster>>>,
}

impl TextureCache {
    /// An empty cache using the default [`SynthConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty cache generating with `config`.
    ///
    /// Fails with [`TextureError::InvalidConfig`] if `config` does not
    /// validate.
    pub fn with_config(config: SynthConfig) -> Result<Self, TextureError> {
        config.validate()?;
        Ok(Self {
            config,
            entries: RwLock::default(),
        })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Return the raster stored under `key`, generating and storing it first
    /// if absent.
    pub fn get_or_create<F>(&self, key: CacheKey, generate: F) -> Arc<Raster>
    where
        F: FnOnce() -> Raster,
    {
        if let Some(hit) = self.get(&key) {
            return hit;
        }

        tracing::debug!(
            channel = ?key.channel,
            material_id = %key.material_id,
            base_color = %key.base_color,
            "texture cache miss"
        );
        let raster = Arc::new(generate());

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(key).or_insert(raster))
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<Raster>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.  Bundles already handed out stay valid.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
