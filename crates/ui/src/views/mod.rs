mod feed;
mod post;
mod state;
mod stories;
mod story_viewer;

pub use feed::FeedView;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
