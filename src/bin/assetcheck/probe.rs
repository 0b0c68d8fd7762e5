// probe.rs - Check that each referenced asset exists and decodes
//
// Only the header is read (image::image_dimensions), so checking a
// full gallery is cheap.

use std::path::{Path, PathBuf};

use carousel_gallery::scene::site_relative;

#[derive(Debug)]
pub enum Probe {
    Ok { width: u32, height: u32 },
    Missing,
    Unreadable(String),
}

pub struct AssetReport {
    pub path: String,
    pub file: PathBuf,
    pub probe: Probe,
}

impl AssetReport {
    pub fn is_ok(&self) -> bool {
        matches!(self.probe, Probe::Ok { .. })
    }
}

pub fn probe_all<'a>(root: &Path, paths: impl IntoIterator<Item = &'a str>) -> Vec<AssetReport> {
    paths
        .into_iter()
        .map(|path| {
            let file = root.join(site_relative(path));
            let probe = probe(&file);
            AssetReport { path: path.to_string(), file, probe }
        })
        .collect()
}

fn probe(file: &Path) -> Probe {
    if !file.is_file() {
        return Probe::Missing;
    }
    match image::image_dimensions(file) {
        Ok((width, height)) => Probe::Ok { width, height },
        Err(e) => Probe::Unreadable(e.to_string()),
    }
}
