//! Art asset loading with graceful fallback
//!
//! Missing art is never fatal: every texture is optional and the renderer
//! substitutes solid-color placeholder shapes. Lookup tries a couple of
//! conventional paths before giving up.

use macroquad::texture::{load_texture, FilterMode, Texture2D};

use crate::error::GameError;

/// Optional textures; None means "draw the placeholder"
pub struct Assets {
    pub hunter: Option<Texture2D>,
    pub ghost: Option<Texture2D>,
    pub background: Option<Texture2D>,
}

impl Assets {
    pub async fn load() -> Self {
        Self {
            hunter: try_load(&["hunter.png", "assets/hunter.png"], "hunter").await,
            ghost: try_load(&["ghost.png", "assets/ghost.png"], "ghost").await,
            background: try_load(
                &["background.png", "assets/background.png"],
                "background",
            )
            .await,
        }
    }

    /// No textures at all; placeholders everywhere (used by tests)
    pub fn placeholders() -> Self {
        Self {
            hunter: None,
            ghost: None,
            background: None,
        }
    }
}

async fn try_load(paths: &[&str], name: &str) -> Option<Texture2D> {
    for path in paths {
        if let Ok(texture) = load_texture(path).await {
            texture.set_filter(FilterMode::Nearest);
            log::info!("loaded texture '{name}' from {path}");
            return Some(texture);
        }
    }
    log::warn!("{}", GameError::AssetMissing(name.to_string()));
    None
}
