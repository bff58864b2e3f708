use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The posts endpoint could not be reached or returned garbage.
    FeedUnavailable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::FeedUnavailable => "Couldn't load the feed. Check your connection.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

/// Lifecycle of an async-loaded view: every screen renders one of these
/// four shapes, so loading and error chrome stay consistent.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
