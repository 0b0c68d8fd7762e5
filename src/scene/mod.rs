// scene/ - Gallery content table
//
// Read-only, ordered list of scenes. Position is identity: scene i is
// previewed at #preview-{i+1}. Validated once when loaded.

mod data;
mod validate;

pub use validate::{ValidationWarning, CAROUSEL_FACES, GRID_ITEMS};

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scene {
    pub title: String,
    /// Carousel faces, relative to the stylesheet.
    pub images: Vec<String>,
    pub grid_items: Vec<GridItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridItem {
    #[serde(alias = "img")]
    pub image: String,
    pub caption: String,
}

impl Scene {
    fn from_raw((title, images, grid): &data::RawScene) -> Self {
        Self {
            title: title.to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
            grid_items: grid
                .iter()
                .map(|(image, caption)| GridItem {
                    image: image.to_string(),
                    caption: caption.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneTable {
    scenes: Vec<Scene>,
    warnings: Vec<ValidationWarning>,
}

impl SceneTable {
    /// Validate and wrap. Hard errors reject the table; warnings are logged and kept.
    pub fn load(scenes: Vec<Scene>) -> Result<Self> {
        let warnings = validate::check(&scenes)?;
        for w in &warnings {
            log::warn!("{w}");
        }
        Ok(Self { scenes, warnings })
    }

    pub fn builtin() -> Result<Self> {
        Self::load(data::SCENES.iter().map(Scene::from_raw).collect())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let scenes: Vec<Scene> = serde_json::from_str(json)?;
        Self::load(scenes)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.scenes)?)
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn get(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Every referenced asset, site-relative, deduplicated in first-seen order.
    pub fn asset_paths(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        let all = self.scenes.iter().flat_map(|s| {
            s.images
                .iter()
                .map(String::as_str)
                .chain(s.grid_items.iter().map(|g| g.image.as_str()))
        });
        for path in all.map(site_relative) {
            if !out.contains(&path) {
                out.push(path);
            }
        }
        out
    }
}

/// Strip leading `/`, `./` and `../` so root-, stylesheet- and
/// page-relative references to the same file compare equal.
pub fn site_relative(path: &str) -> &str {
    let mut p = path;
    loop {
        if let Some(rest) = p.strip_prefix("./") {
            p = rest;
        } else if let Some(rest) = p.strip_prefix("../") {
            p = rest;
        } else if let Some(rest) = p.strip_prefix('/') {
            p = rest;
        } else {
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_loads() {
        let table = SceneTable::builtin().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.scenes()[0].title, "Haute Couture Nights — Paris");
        assert_eq!(table.scenes()[1].images[3], "../assets/img16.webp");
        assert!(table.scenes().iter().all(|s| s.grid_items.len() == GRID_ITEMS));
    }

    #[test]
    fn site_relative_paths() {
        assert_eq!(site_relative("../assets/img1.webp"), "assets/img1.webp");
        assert_eq!(site_relative("./../assets/a.webp"), "assets/a.webp");
        assert_eq!(site_relative("assets/a.webp"), "assets/a.webp");
        assert_eq!(site_relative("/assets/a.webp"), "assets/a.webp");
        assert_eq!(site_relative("//assets/a.webp"), "assets/a.webp");
    }

    #[test]
    fn asset_paths_dedup_across_faces_and_grid() {
        let table = SceneTable::builtin().unwrap();
        let paths = table.asset_paths();

        // img1..img12, then img13..img19, img22, img21, img23, img24 (img20 is never used)
        assert_eq!(paths.len(), 23);
        assert_eq!(paths[0], "assets/img1.webp");
        assert!(!paths.contains(&"assets/img20.webp"));
        assert_eq!(paths.iter().filter(|p| **p == "assets/img22.webp").count(), 1);
    }

    #[test]
    fn accepts_img_alias() {
        let json = r#"[{"title":"T","images":["a.webp"],"gridItems":[{"img":"a.webp","caption":"A"}]}]"#;
        let table = SceneTable::from_json(json).unwrap();
        assert_eq!(table.scenes()[0].grid_items[0].image, "a.webp");
    }
}
