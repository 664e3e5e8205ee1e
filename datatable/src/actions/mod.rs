//! Playback/queue commands and their user feedback.
//!
//! The table core never depends on these; they are the request/response
//! glue the surrounding application uses from row buttons. Each action is
//! sent once and produces exactly one notification, success or error.
//! Failed actions are not retried.

mod notify;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

pub use notify::{Category, DEFAULT_DURATION_MS, Notification, Notifier};

/// A fire-and-forget command for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Append a song to the play queue.
    Enqueue(u64),
    /// Play a song immediately.
    PlayNow(u64),
    /// Skip to the next queued song.
    Next,
    /// Empty the play queue.
    ClearQueue,
    /// Stop playback.
    Stop,
}

/// JSON body identifying a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SongRef {
    pub hash: u64,
}

impl Action {
    /// Request path for this action.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Action::Enqueue(_) => "/api/add",
            Action::PlayNow(_) => "/api/playnow",
            Action::Next => "/api/next",
            Action::ClearQueue => "/api/clear",
            Action::Stop => "/api/stop",
        }
    }

    /// Request body, for actions that target a song.
    pub fn body(&self) -> Option<SongRef> {
        match *self {
            Action::Enqueue(hash) | Action::PlayNow(hash) => Some(SongRef { hash }),
            Action::Next | Action::ClearQueue | Action::Stop => None,
        }
    }

    pub fn success_title(&self) -> &'static str {
        match self {
            Action::Enqueue(_) => "Added to Queue",
            Action::PlayNow(_) => "Playing Now",
            Action::Next => "Next song playing",
            Action::ClearQueue => "Queue cleared",
            Action::Stop => "Player stopped",
        }
    }

    pub fn failure_title(&self) -> &'static str {
        match self {
            Action::Enqueue(_) => "Failed to Add",
            Action::PlayNow(_) => "Failed to Play",
            Action::Next => "Failed to play next",
            Action::ClearQueue => "Failed to clear queue",
            Action::Stop => "Failed to stop player",
        }
    }
}

/// Errors from sending an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The server answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { status: u16, endpoint: &'static str },

    /// The request never got an answer.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Sends actions to the player.
#[async_trait]
pub trait ActionClient: Send + Sync {
    async fn send(&self, action: &Action) -> Result<(), ActionError>;
}

/// Send `action` once and report the outcome through `notifier`.
pub async fn perform(
    client: &dyn ActionClient,
    notifier: &dyn Notifier,
    action: &Action,
) -> Result<(), ActionError> {
    debug!("Sending {:?} to {}", action, action.endpoint());
    let result = client.send(action).await;
    match &result {
        Ok(()) => notifier.notify(Notification::success(action.success_title())),
        Err(e) => {
            warn!("{:?} failed: {}", action, e);
            notifier.notify(Notification::error(action.failure_title()));
        }
    }
    result
}
