// carousel-gallery - Scroll-driven 3D carousel gallery page
//
// Library layout:
//   scene/    typed, validated content table (+ shipped data)
//   gate/     preload gate: settle all images, grace delay, cancel
//   state     "page is masked" flag with subscribers
//   render    page markup from the scene table
//   preview   open/close state for the grid overlays
//   web/      wasm32 only: DOM discovery, timers, Gallery entry point

pub mod config;
pub mod css;
pub mod error;
pub mod gate;
pub mod preview;
pub mod render;
pub mod scene;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{BrowserTimer, Gallery};

pub use config::GalleryConfig;
pub use error::GalleryError;
pub use gate::{GateHandle, GateOutcome, ImageOutcome, PreloadGate, Preloader, SettleReport, Timer};
pub use scene::{GridItem, Scene, SceneTable, ValidationWarning};
pub use state::{LoadingState, Subscription};

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Built-in scene table as JSON, for pages that render their own markup.
#[wasm_bindgen]
pub fn builtin_scenes_json() -> Result<String, JsValue> {
    let table = SceneTable::builtin().map_err(|e| JsValue::from_str(&e.to_string()))?;
    table.to_json().map_err(|e| JsValue::from_str(&e.to_string()))
}
