mod feed_vm;
mod story_vm;
mod time_fmt;

pub use feed_vm::{PostCardVm, StoryRingVm, map_post_cards, map_story_rings};
pub use story_vm::{DispatchOutcome, StoryViewerVm, ViewerFrame};
pub use time_fmt::{format_count, format_post_date};
