use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{debug, warn};

/// Resolves the image identifiers used by steps and decorations to
/// loaded textures. Every image file in the asset directory is loaded
/// once at startup and keyed by its file stem, so a step authored with
/// `"orangecharacter"` finds `orangecharacter.png`.
pub struct TextureLibrary {
    textures: HashMap<String, Texture2D>,
    missing: HashSet<String>,
}

/// Collect image files from `dir`, sorted by file name.
pub fn image_paths_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read asset directory {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            match ext.to_lowercase().as_str() {
                "png" | "jpg" | "jpeg" | "bmp" | "gif" => paths.push(path),
                _ => {}
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

impl TextureLibrary {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Result<Self> {
        let mut textures = HashMap::new();

        for path in image_paths_in(dir)? {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match rl.load_texture(thread, path.to_str().unwrap_or_default()) {
                Ok(texture) => {
                    debug!(name = stem, "loaded texture");
                    textures.insert(stem.to_string(), texture);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load texture");
                }
            }
        }

        if textures.is_empty() {
            warn!(dir = %dir.display(), "no textures loaded; images will render as nothing");
        }

        Ok(Self { textures, missing: HashSet::new() })
    }

    /// Look up a texture by identifier. Unknown identifiers degrade to
    /// `None` (the renderer skips them) and are warned about once.
    pub fn get(&mut self, name: &str) -> Option<&Texture2D> {
        if self.textures.contains_key(name) {
            return self.textures.get(name);
        }
        if self.missing.insert(name.to_string()) {
            warn!(name, "step references an image the asset library does not contain");
        }
        None
    }
}
