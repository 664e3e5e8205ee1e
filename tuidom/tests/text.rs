use tuidom::text::{char_width, display_width, fit_to_width, pad_to_width, truncate_to_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("a b c"), 5);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters are typically 2 cells wide
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("한글"), 4);
}

#[test]
fn test_display_width_mixed() {
    assert_eq!(display_width("hello日本語"), 11); // 5 + 6
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello", 5), "hello");
}

#[test]
fn test_truncate_overflow() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 3), "he…");
}

#[test]
fn test_truncate_edge_cases() {
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
    assert_eq!(truncate_to_width("", 5), "");
}

#[test]
fn test_truncate_cjk() {
    // Only two wide chars fit next to the ellipsis
    assert_eq!(truncate_to_width("日本語", 5), "日本…");
}

#[test]
fn test_pad_to_width() {
    assert_eq!(pad_to_width("ab", 4), "ab  ");
    assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    assert_eq!(pad_to_width("日", 3), "日 ");
}

#[test]
fn test_fit_to_width() {
    assert_eq!(fit_to_width("ab", 4), "ab  ");
    assert_eq!(fit_to_width("abcdef", 4), "abc…");
    assert_eq!(fit_to_width("", 0), "");
}
