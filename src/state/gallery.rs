use std::rc::Rc;

use log::warn;

use crate::catalog::VideoEntry;
use crate::config::DEFAULT_VISIBLE_VIDEOS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryMsg {
    /// Show the whole catalog. There is no way back to the short list.
    Reveal,
    /// Play the entry with this source in the modal.
    Open(String),
    Close,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    catalog: Rc<[VideoEntry]>,
    expanded: bool,
    selected: Option<String>,
}

impl GalleryState {
    pub fn new(catalog: Rc<[VideoEntry]>) -> Self {
        Self { catalog, expanded: false, selected: None }
    }

    pub fn catalog(&self) -> &[VideoEntry] {
        &self.catalog
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_entry(&self) -> Option<&VideoEntry> {
        let source = self.selected.as_deref()?;
        self.catalog.iter().find(|entry| entry.source == source)
    }

    /// Entries currently rendered as cards, in catalog order.
    pub fn visible(&self) -> &[VideoEntry] {
        if self.expanded {
            &self.catalog
        } else {
            &self.catalog[..self.catalog.len().min(DEFAULT_VISIBLE_VIDEOS)]
        }
    }

    pub fn has_more(&self) -> bool {
        !self.expanded && self.catalog.len() > DEFAULT_VISIBLE_VIDEOS
    }

    pub fn apply(&mut self, msg: GalleryMsg) -> bool {
        match msg {
            GalleryMsg::Reveal => {
                let changed = !self.expanded;
                self.expanded = true;
                changed
            }
            GalleryMsg::Open(source) => {
                if self.selected.as_deref() == Some(source.as_str()) {
                    return false;
                }
                if !self.catalog.iter().any(|entry| entry.source == source) {
                    warn!("Ignoring selection of unknown video {}", source);
                    return false;
                }
                self.selected = Some(source);
                true
            }
            GalleryMsg::Close => self.selected.take().is_some(),
        }
    }
}
