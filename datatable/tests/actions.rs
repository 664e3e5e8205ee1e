use std::sync::Mutex;

use async_trait::async_trait;
use datatable::actions::{
    Action, ActionClient, ActionError, Category, DEFAULT_DURATION_MS, Notification, Notifier,
    perform,
};

/// Client that records every action and answers with a fixed result.
struct MockClient {
    sent: Mutex<Vec<Action>>,
    result: Result<(), ActionError>,
}

impl MockClient {
    fn ok() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            result: Ok(()),
        }
    }

    fn failing(error: ActionError) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            result: Err(error),
        }
    }
}

#[async_trait]
impl ActionClient for MockClient {
    async fn send(&self, action: &Action) -> Result<(), ActionError> {
        self.sent.lock().unwrap().push(*action);
        self.result.clone()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    shown: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}

// ============================================================================
// Requests
// ============================================================================

#[test]
fn test_endpoints() {
    assert_eq!(Action::Enqueue(1).endpoint(), "/api/add");
    assert_eq!(Action::PlayNow(1).endpoint(), "/api/playnow");
    assert_eq!(Action::Next.endpoint(), "/api/next");
    assert_eq!(Action::ClearQueue.endpoint(), "/api/clear");
    assert_eq!(Action::Stop.endpoint(), "/api/stop");
}

#[test]
fn test_song_actions_carry_hash() {
    let body = serde_json::to_value(Action::Enqueue(42).body()).unwrap();
    assert_eq!(body, serde_json::json!({ "hash": 42 }));
    assert_eq!(Action::PlayNow(7).body().map(|b| b.hash), Some(7));
    assert!(Action::Next.body().is_none());
    assert!(Action::ClearQueue.body().is_none());
    assert!(Action::Stop.body().is_none());
}

// ============================================================================
// Feedback
// ============================================================================

#[tokio::test]
async fn test_success_notifies_once() {
    let client = MockClient::ok();
    let notifier = RecordingNotifier::default();

    perform(&client, &notifier, &Action::Enqueue(42)).await.unwrap();

    assert_eq!(*client.sent.lock().unwrap(), vec![Action::Enqueue(42)]);
    let shown = notifier.shown.lock().unwrap();
    assert_eq!(
        *shown,
        vec![Notification {
            title: "Added to Queue".into(),
            category: Category::Success,
            duration_ms: DEFAULT_DURATION_MS,
        }]
    );
}

#[tokio::test]
async fn test_failure_notifies_once_without_retry() {
    let error = ActionError::Status {
        status: 500,
        endpoint: "/api/playnow",
    };
    let client = MockClient::failing(error.clone());
    let notifier = RecordingNotifier::default();

    let result = perform(&client, &notifier, &Action::PlayNow(3)).await;

    assert_eq!(result, Err(error));
    assert_eq!(client.sent.lock().unwrap().len(), 1);
    let shown = notifier.shown.lock().unwrap();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Failed to Play");
    assert_eq!(shown[0].category, Category::Error);
}

#[tokio::test]
async fn test_titles_for_every_action() {
    let cases = [
        (Action::Enqueue(1), "Added to Queue", "Failed to Add"),
        (Action::PlayNow(1), "Playing Now", "Failed to Play"),
        (Action::Next, "Next song playing", "Failed to play next"),
        (Action::ClearQueue, "Queue cleared", "Failed to clear queue"),
        (Action::Stop, "Player stopped", "Failed to stop player"),
    ];

    for (action, success, failure) in cases {
        let notifier = RecordingNotifier::default();
        perform(&MockClient::ok(), &notifier, &action).await.unwrap();
        let failed = perform(
            &MockClient::failing(ActionError::Transport("refused".into())),
            &notifier,
            &action,
        )
        .await;
        assert!(failed.is_err());

        let titles: Vec<_> = notifier
            .shown
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect();
        assert_eq!(titles, [success, failure]);
    }
}

#[test]
fn test_error_messages() {
    let status = ActionError::Status {
        status: 404,
        endpoint: "/api/add",
    };
    assert_eq!(status.to_string(), "/api/add returned HTTP 404");
    assert_eq!(
        ActionError::Transport("timed out".into()).to_string(),
        "Transport error: timed out"
    );
}

#[test]
fn test_notification_builders() {
    let n = Notification::warning("Careful").with_duration_ms(500);
    assert_eq!(n.category, Category::Warning);
    assert_eq!(n.duration_ms, 500);
    assert_eq!(Notification::info("x").category, Category::Info);
    assert_eq!(Category::Success.to_string(), "success");
    assert_eq!(
        serde_json::to_string(&Category::Error).unwrap(),
        "\"error\""
    );
}
