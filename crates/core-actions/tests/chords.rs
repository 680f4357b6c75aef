mod common;
use common::*;
use core_actions::dispatch;
use core_events::Direction;
use pretty_assertions::assert_eq;

#[test]
fn single_d_deletes_nothing() {
    let mut m = model(&["one", "two"]);
    typ(&mut m, "d");
    assert_eq!(lines(&m), vec!["one", "two"]);
    assert!(m.state().pending_chord.is_pending());
}

#[test]
fn interrupted_chord_does_not_delete() {
    for middle in ["l", "x", "g", "0"] {
        let mut m = model(&["one", "two"]);
        typ(&mut m, "d");
        typ(&mut m, middle);
        typ(&mut m, "d");
        assert_eq!(m.state().buffer().line_count(), 2, "d{middle}d");
    }
}

#[test]
fn escape_invalidates_chord() {
    let mut m = model(&["one", "two"]);
    typ(&mut m, "d");
    dispatch(esc(), &mut m);
    typ(&mut m, "d");
    assert_eq!(lines(&m), vec!["one", "two"]);
}

#[test]
fn arrow_invalidates_chord() {
    let mut m = model(&["one", "two", "three"]);
    typ(&mut m, "d");
    dispatch(Direction::Down.into(), &mut m);
    typ(&mut m, "d");
    assert_eq!(m.state().buffer().line_count(), 3);
}

#[test]
fn dddd_deletes_two_lines() {
    let mut m = model(&["a", "b", "c"]);
    typ(&mut m, "dddd");
    assert_eq!(lines(&m), vec!["c"]);
}

#[test]
fn dd_on_sole_line_clears_it() {
    let mut m = model(&["only"]);
    typ(&mut m, "$dd");
    assert_eq!(lines(&m), vec![""]);
    assert_eq!(pos(&m), (0, 0));
    assert!(m.state().dirty);
}

#[test]
fn dd_on_last_line_moves_cursor_up() {
    let mut m = model(&["a", "b", "c"]);
    typ(&mut m, "jjdd");
    assert_eq!(lines(&m), vec!["a", "b"]);
    assert_eq!(pos(&m), (1, 0));
}

#[test]
fn gg_and_g_jump() {
    let src: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = src.iter().map(String::as_str).collect();
    let mut m = model_sized(&refs, 11);
    typ(&mut m, "G");
    let c = m.cursor();
    assert_eq!((c.line(), c.row, c.offset, c.col), (49, 9, 40, 0));
    typ(&mut m, "g");
    assert_eq!(m.cursor().line(), 49, "single g does not move");
    typ(&mut m, "g");
    let c = m.cursor();
    assert_eq!((c.line(), c.row, c.offset), (0, 0, 0));
}

#[test]
fn g_then_other_key_then_g_does_not_jump() {
    let mut m = model(&["a", "b", "c"]);
    typ(&mut m, "jjgjg");
    assert_eq!(pos(&m).0, 2);
}
