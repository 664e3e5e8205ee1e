//! Song library loading and the table document built from it.

use std::fs;
use std::path::Path;

use datatable::TableConfig;
use datatable::actions::Action;
use serde::{Deserialize, Serialize};
use tuidom::Element;

use crate::error::CliError;

/// Data key holding a song id on rows and action buttons.
pub const DATA_ID: &str = "id";
/// Data key naming the action a row button triggers.
pub const DATA_ACTION: &str = "action";

pub const ACTION_QUEUE: &str = "queue";
pub const ACTION_PLAY: &str = "play";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: u64,
    pub artist: String,
    pub title: String,
}

pub fn load(path: &Path) -> Result<Vec<Song>, CliError> {
    parse(&fs::read_to_string(path)?)
}

pub fn parse(text: &str) -> Result<Vec<Song>, CliError> {
    Ok(serde_json::from_str(text)?)
}

/// The whole page: a title line and the song table.
pub fn page_document(songs: &[Song], config: &TableConfig) -> Element {
    Element::box_()
        .id("jukebox")
        .child(Element::text(format!("Jukebox: {} songs", songs.len())))
        .child(song_table(songs, config))
}

/// `table` with sortable Artist and Song columns and an Actions column.
pub fn song_table(songs: &[Song], config: &TableConfig) -> Element {
    let marker = config.sortable_marker.as_str();
    let header = Element::tr()
        .child(Element::th("Artist").data(marker, ""))
        .child(Element::th("Song").data(marker, ""))
        .child(Element::th("Actions"));

    Element::table()
        .id(config.container_id.as_str())
        .child(Element::thead().child(header))
        .child(
            Element::tbody().children(
                songs
                    .iter()
                    .enumerate()
                    .map(|(position, song)| song_row(position, song, marker)),
            ),
        )
}

fn song_row(position: usize, song: &Song, marker: &str) -> Element {
    let id = song.id.to_string();
    let button = |label: &str, action: &str| {
        Element::button(label)
            .id(format!("song-{position}-{action}"))
            .data(DATA_ACTION, action)
            .data(DATA_ID, id.as_str())
    };

    Element::tr()
        .id(format!("song-{position}"))
        .data(DATA_ID, id.as_str())
        .child(Element::td(song.artist.as_str()).data(marker, ""))
        .child(Element::td(song.title.as_str()).data(marker, ""))
        .child(
            Element::td("")
                .child(button("Queue", ACTION_QUEUE))
                .child(button("Play", ACTION_PLAY)),
        )
}

/// Song id carried by a rendered row.
pub fn song_id(row: &Element) -> Option<u64> {
    row.get_data(DATA_ID)?.parse().ok()
}

/// Player action triggered by a row button.
pub fn button_action(button: &Element) -> Option<Action> {
    let id = song_id(button)?;
    match button.get_data(DATA_ACTION)?.as_str() {
        ACTION_QUEUE => Some(Action::Enqueue(id)),
        ACTION_PLAY => Some(Action::PlayNow(id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use tuidom::{Tag, find_by_tag, query_all, text_content};

    use super::*;

    fn songs() -> Vec<Song> {
        parse(
            r#"[
                {"id": 11, "artist": "Queen", "title": "Bohemian Rhapsody"},
                {"id": 12, "artist": "ABBA", "title": "Waterloo"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_library() {
        let songs = songs();
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[1].artist, "ABBA");
        assert!(matches!(parse("{}"), Err(CliError::Json(_))));
    }

    #[test]
    fn test_song_table_structure() {
        let table = song_table(&songs(), &TableConfig::default());
        assert_eq!(table.id, "datatable");

        let head = find_by_tag(&table, Tag::Head).unwrap();
        let sortable = query_all(head, |e| e.has_data("sortable"));
        assert_eq!(sortable.len(), 2);

        let body = find_by_tag(&table, Tag::Body).unwrap();
        let rows = body.child_elements();
        assert_eq!(rows.len(), 2);
        assert_eq!(song_id(&rows[0]), Some(11));

        let cells: Vec<_> = query_all(&rows[0], |e| e.has_data("sortable"))
            .into_iter()
            .map(text_content)
            .collect();
        assert_eq!(cells, ["Queen", "Bohemian Rhapsody"]);

        let buttons = query_all(&rows[1], |e| e.tag == Tag::Button);
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[1].get_data(DATA_ACTION).map(String::as_str), Some("play"));
        assert_eq!(song_id(buttons[1]), Some(12));
        assert_eq!(button_action(buttons[0]), Some(Action::Enqueue(12)));
        assert_eq!(button_action(buttons[1]), Some(Action::PlayNow(12)));
        assert_eq!(button_action(&rows[1]), None);
    }

    #[test]
    fn test_custom_marker_and_container() {
        let config = TableConfig::new("songs").sortable_marker("sort");
        let table = song_table(&songs(), &config);
        assert_eq!(table.id, "songs");
        assert_eq!(query_all(&table, |e| e.has_data("sort")).len(), 6);
    }
}
