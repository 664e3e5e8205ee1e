use tuidom::render::inline;
use tuidom::{render_lines, render_lines_with, render_to_string, Element, Tag};

fn plain(element: &Element) -> String {
    inline(element, &|_, text| text)
}

// ============================================================================
// Inline rendering
// ============================================================================

#[test]
fn test_inline_text_is_trimmed() {
    assert_eq!(plain(&Element::text("  hi  ")), "hi");
}

#[test]
fn test_inline_buttons() {
    assert_eq!(plain(&Element::button("Play")), "[Play]");
    assert_eq!(plain(&Element::button("<").disabled(true)), " < ");
}

#[test]
fn test_inline_text_input() {
    let input = Element::text_input("").placeholder("Filter...");
    assert_eq!(plain(&input), "[Filter...]");

    let mut input = input;
    input.set_value("queen");
    assert_eq!(plain(&input), "[queen]");
}

#[test]
fn test_inline_children_join_with_spaces() {
    let strip = Element::box_()
        .child(Element::button("1"))
        .child(Element::text(""))
        .child(Element::button("2"));
    assert_eq!(plain(&strip), "[1] [2]");
}

// ============================================================================
// Blocks
// ============================================================================

#[test]
fn test_render_non_table_blocks() {
    let root = Element::box_()
        .child(Element::text("Title"))
        .child(Element::box_());
    assert_eq!(render_lines(&root), ["Title"]);
}

#[test]
fn test_render_table_grid() {
    let table = Element::table()
        .child(
            Element::thead().child(
                Element::tr()
                    .child(Element::th("Artist"))
                    .child(Element::th("Song")),
            ),
        )
        .child(
            Element::tbody()
                .child(Element::tr().child(Element::td("ABBA")).child(Element::td("Waterloo")))
                .child(Element::tr().child(Element::td("Toto")).child(Element::td("Africa"))),
        );

    assert_eq!(
        render_lines(&table),
        [
            "Artist | Song",
            "-----------------",
            "ABBA   | Waterloo",
            "Toto   | Africa",
        ]
    );
}

#[test]
fn test_render_spanning_cell() {
    let table = Element::table()
        .child(
            Element::thead()
                .child(Element::tr().child(Element::th("A")).child(Element::th("B"))),
        )
        .child(Element::tfoot().child(Element::tr().child(Element::td("wide footer").col_span(2))));

    let lines = render_lines(&table);
    assert_eq!(lines[0], "A | B");
    assert_eq!(lines[2], "wide footer");
}

#[test]
fn test_render_table_inside_box() {
    let root = Element::box_()
        .child(Element::text("Songs"))
        .child(Element::table().child(Element::tr().child(Element::td("only"))));
    assert_eq!(render_to_string(&root), "Songs\nonly");
}

#[test]
fn test_decorator_sees_every_element() {
    let row = Element::tr()
        .child(Element::th("Artist").class("sorted"))
        .child(Element::th("Song"));
    let table = Element::table().child(Element::thead().child(row));

    let lines = render_lines_with(&table, &|el, text| {
        if el.tag == Tag::HeaderCell && el.has_class("sorted") {
            format!("{text} ^")
        } else {
            text
        }
    });
    assert_eq!(lines, ["Artist ^ | Song"]);
}
