// config.rs - Gallery configuration
//
// Parsed from JSON handed over by the page. Every field has a default,
// so "{}" is a valid config.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gate::DEFAULT_GRACE;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Delay between "all images settled" and the reveal.
    pub grace_ms: u32,
    /// Class on the root container while the page is masked.
    pub mask_class: String,
    pub frame: Frame,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Frame {
    pub title: String,
    pub links: Vec<Link>,
    pub tags: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    fn new(label: &str, href: &str) -> Self {
        Self { label: label.into(), href: href.into() }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            grace_ms: DEFAULT_GRACE.as_millis() as u32,
            mask_class: "loading".into(),
            frame: Frame::default(),
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            title: "On-Scroll 3D Carousel".into(),
            links: vec![
                Link::new("Article", "https://tympanus.net/codrops/?p=93330"),
                Link::new("Code", "https://github.com/codrops/3DCarousel/"),
                Link::new("All demos", "https://tympanus.net/codrops/demos/"),
            ],
            tags: vec![
                Link::new("#3d", "https://tympanus.net/codrops/demos/?tag=3d"),
                Link::new("#carousel", "https://tympanus.net/codrops/demos/?tag=carousel"),
                Link::new("#page-transition", "https://tympanus.net/codrops/demos/?tag=page-transition"),
            ],
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms as u64)
    }
}
