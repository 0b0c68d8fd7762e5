// validate.rs - Load-time checks on the scene table
//
// Missing content is an error. Suspicious content (reused image paths,
// unusual counts) is a warning and is never rewritten.

use std::fmt;

use super::{site_relative, Scene};
use crate::error::{GalleryError, Result};

pub const CAROUSEL_FACES: usize = 4;
pub const GRID_ITEMS: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationWarning {
    /// One image path shown under more than one grid caption.
    DuplicateImage { scene: usize, image: String, captions: Vec<String> },
    CarouselSize { scene: usize, count: usize },
    GridSize { scene: usize, count: usize },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateImage { scene, image, captions } => write!(
                f,
                "scene {}: {} used for {} captions ({})",
                scene,
                image,
                captions.len(),
                captions.join(", ")
            ),
            Self::CarouselSize { scene, count } => write!(
                f,
                "scene {}: {} carousel images, expected {}",
                scene, count, CAROUSEL_FACES
            ),
            Self::GridSize { scene, count } => {
                write!(f, "scene {}: {} grid items, expected {}", scene, count, GRID_ITEMS)
            }
        }
    }
}

pub(super) fn check(scenes: &[Scene]) -> Result<Vec<ValidationWarning>> {
    if scenes.is_empty() {
        return Err(GalleryError::EmptyTable);
    }

    let mut warnings = Vec::new();
    for (i, scene) in scenes.iter().enumerate() {
        check_scene(i, scene)?;

        if scene.images.len() != CAROUSEL_FACES {
            warnings.push(ValidationWarning::CarouselSize { scene: i, count: scene.images.len() });
        }
        if scene.grid_items.len() != GRID_ITEMS {
            warnings.push(ValidationWarning::GridSize { scene: i, count: scene.grid_items.len() });
        }
        warnings.extend(duplicates(i, scene));
    }
    Ok(warnings)
}

fn check_scene(i: usize, scene: &Scene) -> Result<()> {
    if scene.title.trim().is_empty() {
        return Err(GalleryError::scene(i, "empty title"));
    }
    if scene.images.is_empty() {
        return Err(GalleryError::scene(i, "no carousel images"));
    }
    if scene.grid_items.is_empty() {
        return Err(GalleryError::scene(i, "no grid items"));
    }
    if let Some(j) = scene.images.iter().position(|p| p.trim().is_empty()) {
        return Err(GalleryError::scene(i, format!("carousel image {j} has no path")));
    }
    for (j, item) in scene.grid_items.iter().enumerate() {
        if item.image.trim().is_empty() {
            return Err(GalleryError::scene(i, format!("grid item {j} has no image")));
        }
        if item.caption.trim().is_empty() {
            return Err(GalleryError::scene(i, format!("grid item {j} has no caption")));
        }
    }
    Ok(())
}

fn duplicates(i: usize, scene: &Scene) -> Vec<ValidationWarning> {
    // First-seen order keeps warnings stable.
    let mut seen: Vec<(&str, Vec<&str>)> = Vec::new();
    for item in &scene.grid_items {
        let path = site_relative(&item.image);
        match seen.iter_mut().find(|(p, _)| *p == path) {
            Some((_, captions)) => captions.push(item.caption.as_str()),
            None => seen.push((path, vec![item.caption.as_str()])),
        }
    }

    seen.into_iter()
        .filter(|(_, captions)| captions.len() > 1)
        .map(|(path, captions)| ValidationWarning::DuplicateImage {
            scene: i,
            image: path.to_string(),
            captions: captions.into_iter().map(str::to_string).collect(),
        })
        .collect()
}
