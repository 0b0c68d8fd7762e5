// preview.rs - Which preview overlay is open
//
// Scene i opens the grid at #preview-{i+1}. At most one is open.

use crate::error::{GalleryError, Result};

const FRAGMENT_PREFIX: &str = "#preview-";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewNav {
    len: usize,
    open: Option<usize>,
}

impl PreviewNav {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn current(&self) -> Option<usize> {
        self.open
    }

    /// Open preview `index`, returning the one it replaced.
    pub fn open(&mut self, index: usize) -> Result<Option<usize>> {
        if index >= self.len {
            return Err(GalleryError::PreviewOutOfRange { index, len: self.len });
        }
        Ok(self.open.replace(index))
    }

    pub fn close(&mut self) -> Option<usize> {
        self.open.take()
    }

    /// Open whatever `hash` points at; anything else closes.
    pub fn follow(&mut self, hash: &str) -> Option<usize> {
        match from_fragment(hash).filter(|&i| i < self.len) {
            Some(i) => {
                self.open = Some(i);
                Some(i)
            }
            None => {
                self.open = None;
                None
            }
        }
    }
}

pub fn fragment(index: usize) -> String {
    format!("{}{}", FRAGMENT_PREFIX, index + 1)
}

/// Element id of a preview, the fragment without '#'.
pub fn element_id(index: usize) -> String {
    format!("preview-{}", index + 1)
}

/// Zero-based index from `#preview-N` (N is one-based).
pub fn from_fragment(hash: &str) -> Option<usize> {
    let n: usize = hash.strip_prefix(FRAGMENT_PREFIX)?.parse().ok()?;
    n.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_round_trip() {
        assert_eq!(fragment(0), "#preview-1");
        assert_eq!(from_fragment("#preview-1"), Some(0));
        assert_eq!(from_fragment("#preview-12"), Some(11));
        assert_eq!(from_fragment("#preview-0"), None);
        assert_eq!(from_fragment("#preview-"), None);
        assert_eq!(from_fragment("#other"), None);
    }

    #[test]
    fn open_replaces_and_close_clears() {
        let mut nav = PreviewNav::new(2);
        assert_eq!(nav.open(0).unwrap(), None);
        assert_eq!(nav.open(1).unwrap(), Some(0));
        assert_eq!(nav.current(), Some(1));
        assert_eq!(nav.close(), Some(1));
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn open_out_of_range() {
        let mut nav = PreviewNav::new(2);
        assert!(matches!(
            nav.open(2),
            Err(GalleryError::PreviewOutOfRange { index: 2, len: 2 })
        ));
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn follow_hash() {
        let mut nav = PreviewNav::new(2);
        assert_eq!(nav.follow("#preview-2"), Some(1));
        assert_eq!(nav.follow("#preview-3"), None);
        assert_eq!(nav.current(), None);
    }
}
