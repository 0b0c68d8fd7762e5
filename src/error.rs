// error.rs - Crate error type
//
// Everything that can go wrong outside of image loading itself.
// Image load failures are not errors: they count as settled.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scene table is empty")]
    EmptyTable,

    #[error("scene {scene}: {reason}")]
    InvalidScene { scene: usize, reason: String },

    #[error("preview {index} out of range ({len} scenes)")]
    PreviewOutOfRange { index: usize, len: usize },

    #[error("dom: {0}")]
    Dom(String),
}

impl GalleryError {
    pub(crate) fn scene(scene: usize, reason: impl Into<String>) -> Self {
        Self::InvalidScene { scene, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;

#[cfg(target_arch = "wasm32")]
impl From<GalleryError> for wasm_bindgen::JsValue {
    fn from(err: GalleryError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
