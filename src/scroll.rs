mod scroll_state;

pub use scroll_state::{SCROLL_MARGIN, ScrollState};
