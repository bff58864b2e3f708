mod ids;
mod post;
mod story;

pub use ids::PostId;
pub use post::{Post, PostError};
pub use story::{MAX_RAIL_STORIES, Story};
