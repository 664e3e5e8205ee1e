use datatable::actions::{Category, Notification, Notifier};
use log::info;

/// Prints notifications as single status lines.
///
/// A line-oriented terminal has nothing to dismiss, so `duration_ms` is
/// only logged.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        info!(
            "Notification [{}] {} ({} ms)",
            notification.category, notification.title, notification.duration_ms
        );
        println!("{}", format_line(&notification));
    }
}

fn format_line(notification: &Notification) -> String {
    let marker = match notification.category {
        Category::Info => "i",
        Category::Warning => "!",
        Category::Success => "+",
        Category::Error => "x",
    };
    format!("({marker}) {}", notification.title)
}
