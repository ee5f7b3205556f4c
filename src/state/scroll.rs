use crate::config::SCROLL_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub past_threshold: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        Self { past_threshold: offset > SCROLL_THRESHOLD_PX }
    }
}
