//! Line commands and the interactive session around a mounted song table.

use std::str::FromStr;
use std::sync::Arc;

use datatable::TableConfig;
use datatable::actions::{Action, ActionClient, Notifier, perform};
use datatable::document::{
    DATA_PAGE, DocumentTable, PAGING_ACTIVE_CLASS, SORT_ASC_CLASS, SORT_DESC_CLASS,
};
use log::debug;
use thiserror::Error;
use tuidom::{Element, Event, Tag, find_element, query_all, render_lines_with, text_content};

use crate::error::CliError;
use crate::library::{self, ACTION_PLAY, ACTION_QUEUE, DATA_ACTION};

pub const HELP: &str = "\
Commands:
  filter <text>, / <text>   show songs matching every word (empty clears)
  sort <column>             sort by column number or name, again to reverse
  page <n>                  go to page n
  next, prev                move one page
  queue <row>, play <row>   queue or play the song in row n of this page
  skip, clear, stop         control the player
  help                      show this help
  quit                      exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(String),
    /// Column number (1-based) or header text.
    Sort(String),
    /// 1-based page number.
    Page(usize),
    Next,
    Prev,
    /// 1-based row on the current page.
    Queue(usize),
    Play(usize),
    Skip,
    Clear,
    Stop,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command {0:?}, try `help`")]
    Unknown(String),

    #[error("`{0}` expects a number")]
    ExpectedNumber(&'static str),

    #[error("Numbers start at 1")]
    Zero,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if let Some(text) = line.strip_prefix('/') {
            return Ok(Command::Filter(text.trim().to_string()));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match word.to_lowercase().as_str() {
            "filter" => Ok(Command::Filter(rest.to_string())),
            "sort" => Ok(Command::Sort(rest.to_string())),
            "page" => number("page", rest).map(Command::Page),
            "next" => Ok(Command::Next),
            "prev" => Ok(Command::Prev),
            "queue" => number("queue", rest).map(Command::Queue),
            "play" => number("play", rest).map(Command::Play),
            "skip" => Ok(Command::Skip),
            "clear" => Ok(Command::Clear),
            "stop" => Ok(Command::Stop),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

fn number(command: &'static str, text: &str) -> Result<usize, CommandError> {
    match text.parse::<usize>() {
        Ok(0) => Err(CommandError::Zero),
        Ok(n) => Ok(n),
        Err(_) => Err(CommandError::ExpectedNumber(command)),
    }
}

/// What the caller should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The table changed.
    Redraw,
    /// Nothing to redraw; the notifier already reported.
    Quiet,
    Message(String),
    Quit,
}

/// A mounted song table plus the player collaborators.
pub struct Session {
    root: Element,
    table: DocumentTable,
    client: Arc<dyn ActionClient>,
    notifier: Arc<dyn Notifier>,
}

impl Session {
    pub fn mount(
        mut root: Element,
        config: TableConfig,
        client: Arc<dyn ActionClient>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, CliError> {
        let table = DocumentTable::mount(&mut root, config)?.ok_or(CliError::NoTable)?;
        Ok(Self {
            root,
            table,
            client,
            notifier,
        })
    }

    pub fn table(&self) -> &DocumentTable {
        &self.table
    }

    pub async fn execute(&mut self, command: Command) -> Reply {
        debug!("Command {:?}", command);
        match command {
            Command::Filter(text) => {
                let event = Event::change(self.table.filter_id(), text);
                self.route(event)
            }
            Command::Sort(column) => match self.header_for(&column) {
                Some(id) => self.route(Event::click(id)),
                None => Reply::Message(format!("No sortable column {column:?}")),
            },
            Command::Page(n) => match n.checked_sub(1) {
                Some(index) => self.go_to_page(index),
                None => Reply::Message(CommandError::Zero.to_string()),
            },
            Command::Prev => self.step("<", "Already on the first page"),
            Command::Next => self.step(">", "Already on the last page"),
            Command::Queue(row) => self.row_action(row, ACTION_QUEUE).await,
            Command::Play(row) => self.row_action(row, ACTION_PLAY).await,
            Command::Skip => self.send(Action::Next).await,
            Command::Clear => self.send(Action::ClearQueue).await,
            Command::Stop => self.send(Action::Stop).await,
            Command::Help => Reply::Message(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    /// The page as text, with sort arrows, the active page, and a summary.
    pub fn render(&self) -> String {
        let mut lines = render_lines_with(&self.root, &decorate);
        lines.push(self.summary());
        lines.join("\n")
    }

    fn summary(&self) -> String {
        let table = self.table.table();
        let total = table.index().len();
        let matches = table.match_count();
        if matches == 0 {
            return format!("No matching songs ({total} total)");
        }

        let paging = table.state().paging();
        let first = paging.start() + 1;
        let last = paging.start() + table.view().len();
        let mut summary = if last < first {
            format!("Page {} is empty, {matches} songs", paging.page() + 1)
        } else {
            format!("Showing {first}-{last} of {matches} songs")
        };
        if matches != total {
            summary.push_str(&format!(" (filtered from {total})"));
        }
        summary
    }

    fn route(&mut self, event: Event) -> Reply {
        if self.table.handle_event(&mut self.root, &event) {
            Reply::Redraw
        } else {
            Reply::Message("Nothing to do".to_string())
        }
    }

    fn header_for(&self, column: &str) -> Option<String> {
        let headers = &self.table.ids().headers;
        if let Ok(n) = column.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| headers.get(i)).cloned();
        }
        headers
            .iter()
            .find(|id| {
                find_element(&self.root, id)
                    .is_some_and(|h| text_content(h).trim().eq_ignore_ascii_case(column))
            })
            .cloned()
    }

    fn pager_buttons(&self) -> Vec<&Element> {
        match find_element(&self.root, &self.table.ids().pager) {
            Some(pager) => query_all(pager, |e| e.tag == Tag::Button),
            None => Vec::new(),
        }
    }

    fn go_to_page(&mut self, index: usize) -> Reply {
        let page_count = self.table.table().state().paging().page_count();
        if index >= page_count.max(1) {
            return Reply::Message(format!("No page {}", index + 1));
        }

        let label = (index + 1).to_string();
        let shown = self
            .pager_buttons()
            .into_iter()
            .find(|b| text_content(b) == label)
            .map(|b| b.id.clone());
        match shown {
            Some(id) => self.route(Event::click(id)),
            None => {
                // Hidden behind an ellipsis or no pager at all.
                self.table
                    .apply(&mut self.root, datatable::Transition::SetPage(index));
                Reply::Redraw
            }
        }
    }

    fn step(&mut self, label: &str, at_edge: &str) -> Reply {
        let button = self
            .pager_buttons()
            .into_iter()
            .find(|b| text_content(b) == label)
            .map(|b| (b.id.clone(), b.disabled || !b.has_data(DATA_PAGE)));
        match button {
            None => Reply::Message("There is only one page".to_string()),
            Some((_, true)) => Reply::Message(at_edge.to_string()),
            Some((id, false)) => self.route(Event::click(id)),
        }
    }

    /// Route a click to the table, or to the row button with that id.
    pub async fn click(&mut self, target: &str) -> Reply {
        if self.table.handle_event(&mut self.root, &Event::click(target)) {
            return Reply::Redraw;
        }
        match find_element(&self.root, target).and_then(library::button_action) {
            Some(action) => self.send(action).await,
            None => Reply::Message("Nothing to do".to_string()),
        }
    }

    /// Click the `kind` button of the n-th row on the current page.
    async fn row_action(&mut self, row: usize, kind: &str) -> Reply {
        let button = find_element(&self.root, &self.table.ids().body)
            .zip(row.checked_sub(1))
            .and_then(|(body, index)| body.child_elements().get(index))
            .and_then(|row| {
                query_all(row, |e| e.get_data(DATA_ACTION).is_some_and(|a| a == kind))
                    .first()
                    .map(|button| button.id.clone())
            });
        match button {
            Some(id) => self.click(&id).await,
            None => Reply::Message(format!("No row {row} on this page")),
        }
    }

    async fn send(&self, action: Action) -> Reply {
        // The notifier reports the outcome.
        let _ = perform(self.client.as_ref(), self.notifier.as_ref(), &action).await;
        Reply::Quiet
    }
}

fn decorate(element: &Element, text: String) -> String {
    if element.has_class(SORT_ASC_CLASS) {
        format!("{text} ^")
    } else if element.has_class(SORT_DESC_CLASS) {
        format!("{text} v")
    } else if element.has_class(PAGING_ACTIVE_CLASS) {
        format!("*{}*", text.trim_matches(&['[', ']'][..]))
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use datatable::actions::{ActionError, Notification};

    use super::*;
    use crate::library::{Song, page_document};

    #[derive(Default)]
    struct MockClient {
        sent: Mutex<Vec<Action>>,
    }

    #[async_trait]
    impl ActionClient for MockClient {
        async fn send(&self, action: &Action) -> Result<(), ActionError> {
            self.sent.lock().unwrap().push(*action);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        shown: Mutex<Vec<Notification>>,
    }

    impl Notifier for MockNotifier {
        fn notify(&self, notification: Notification) {
            self.shown.lock().unwrap().push(notification);
        }
    }

    fn songs(count: u64) -> Vec<Song> {
        (0..count)
            .map(|i| Song {
                id: 100 + i,
                artist: format!("Artist {i:02}"),
                title: if i % 2 == 0 { "Even".into() } else { "Odd".into() },
            })
            .collect()
    }

    fn session(count: u64, page_size: usize) -> (Session, Arc<MockClient>, Arc<MockNotifier>) {
        let config = TableConfig::default().page_size(page_size);
        let client = Arc::new(MockClient::default());
        let notifier = Arc::new(MockNotifier::default());
        let session = Session::mount(
            page_document(&songs(count), &config),
            config,
            client.clone(),
            notifier.clone(),
        )
        .unwrap();
        (session, client, notifier)
    }

    fn view_ids(session: &Session) -> Vec<u64> {
        session
            .table()
            .table()
            .view()
            .iter()
            .filter_map(|row| library::song_id(row.handle()))
            .collect()
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    #[test]
    fn test_parse_commands() {
        assert_eq!("filter queen".parse::<Command>(), Ok(Command::Filter("queen".into())));
        assert_eq!("/  don't stop ".parse::<Command>(), Ok(Command::Filter("don't stop".into())));
        assert_eq!("/".parse::<Command>(), Ok(Command::Filter(String::new())));
        assert_eq!("sort artist".parse::<Command>(), Ok(Command::Sort("artist".into())));
        assert_eq!("PAGE 3".parse::<Command>(), Ok(Command::Page(3)));
        assert_eq!("queue 2".parse::<Command>(), Ok(Command::Queue(2)));
        assert_eq!("next".parse::<Command>(), Ok(Command::Next));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".into()))
        );
        assert_eq!(
            "page two".parse::<Command>(),
            Err(CommandError::ExpectedNumber("page"))
        );
        assert_eq!("play 0".parse::<Command>(), Err(CommandError::Zero));
    }

    // ========================================================================
    // Session
    // ========================================================================

    #[test]
    fn test_mount_requires_rows() {
        let config = TableConfig::default();
        let result = Session::mount(
            page_document(&[], &config),
            config,
            Arc::new(MockClient::default()),
            Arc::new(MockNotifier::default()),
        );
        assert!(matches!(result, Err(CliError::NoTable)));
    }

    #[tokio::test]
    async fn test_paging_commands() {
        let (mut session, _, _) = session(25, 5);
        assert_eq!(view_ids(&session), [100, 101, 102, 103, 104]);

        assert_eq!(
            session.execute(Command::Prev).await,
            Reply::Message("Already on the first page".into())
        );
        assert_eq!(session.execute(Command::Next).await, Reply::Redraw);
        assert_eq!(view_ids(&session)[0], 105);

        // Page 5 is the last page and is shown in the strip.
        assert_eq!(session.execute(Command::Page(5)).await, Reply::Redraw);
        assert_eq!(view_ids(&session)[0], 120);
        assert_eq!(
            session.execute(Command::Next).await,
            Reply::Message("Already on the last page".into())
        );

        assert_eq!(session.execute(Command::Page(9)).await, Reply::Message("No page 9".into()));
    }

    #[tokio::test]
    async fn test_page_hidden_behind_ellipsis() {
        let (mut session, _, _) = session(50, 5);
        assert_eq!(session.execute(Command::Page(6)).await, Reply::Redraw);
        assert_eq!(session.table().table().state().paging().page(), 5);
        assert_eq!(view_ids(&session)[0], 125);
    }

    #[tokio::test]
    async fn test_filter_and_sort_commands() {
        let (mut session, _, _) = session(10, 100);

        assert_eq!(session.execute(Command::Filter("odd".into())).await, Reply::Redraw);
        assert_eq!(view_ids(&session), [101, 103, 105, 107, 109]);

        assert_eq!(session.execute(Command::Sort("artist".into())).await, Reply::Redraw);
        assert_eq!(view_ids(&session), [109, 107, 105, 103, 101]);

        assert_eq!(session.execute(Command::Sort("2".into())).await, Reply::Redraw);
        assert_eq!(
            session.execute(Command::Sort("actions".into())).await,
            Reply::Message("No sortable column \"actions\"".into())
        );
    }

    #[tokio::test]
    async fn test_row_actions_use_current_view() {
        let (mut session, client, notifier) = session(10, 3);
        session.execute(Command::Next).await;

        assert_eq!(session.execute(Command::Queue(2)).await, Reply::Quiet);
        assert_eq!(session.execute(Command::Play(1)).await, Reply::Quiet);
        assert_eq!(
            session.execute(Command::Play(4)).await,
            Reply::Message("No row 4 on this page".into())
        );
        assert_eq!(session.execute(Command::Stop).await, Reply::Quiet);

        assert_eq!(
            *client.sent.lock().unwrap(),
            [Action::Enqueue(104), Action::PlayNow(103), Action::Stop]
        );
        let titles: Vec<_> = notifier
            .shown
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect();
        assert_eq!(titles, ["Added to Queue", "Playing Now", "Player stopped"]);
    }

    #[tokio::test]
    async fn test_click_row_button() {
        let (mut session, client, _) = session(10, 3);

        assert_eq!(session.click("song-1-play").await, Reply::Quiet);
        assert_eq!(session.click("song-2-queue").await, Reply::Quiet);
        assert_eq!(
            session.click("song-2").await,
            Reply::Message("Nothing to do".into())
        );
        // Rows on other pages are not in the document.
        assert_eq!(
            session.click("song-3-queue").await,
            Reply::Message("Nothing to do".into())
        );
        assert_eq!(
            *client.sent.lock().unwrap(),
            [Action::PlayNow(101), Action::Enqueue(102)]
        );
    }

    #[test]
    fn test_render_shows_state() {
        let (session, _, _) = session(12, 5);
        let text = session.render();
        assert!(text.contains("Artist ^"));
        assert!(text.contains("*1*"));
        assert!(text.contains("[Filter...]"));
        assert!(text.ends_with("Showing 1-5 of 12 songs"));
    }
}
