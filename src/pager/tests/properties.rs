use crossterm::event::KeyCode;

use crate::config::Config;
use crate::document::Document;
use crate::pager::{Pager, PagerAction};

use super::{ch, key, press, search, text_pager};

const ALL_MOVES: [PagerAction; 8] = [
    PagerAction::Up,
    PagerAction::Down,
    PagerAction::PageUp,
    PagerAction::PageDown,
    PagerAction::Home,
    PagerAction::End,
    PagerAction::Advance,
    PagerAction::ToggleHighlight,
];

#[test]
fn cursor_stays_in_bounds_for_any_move_sequence() {
    for len in [1usize, 2, 7, 33] {
        let mut pager = text_pager(len, 3);
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d ^ len as u64;
        for _ in 0..400 {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let action = ALL_MOVES[(seed >> 33) as usize % ALL_MOVES.len()];
            pager.apply(action).expect("moves on a non-empty document succeed");
            assert!(
                pager.state().cursor < len,
                "cursor {} escaped a {len}-line document after {}",
                pager.state().cursor,
                action.id()
            );
        }
    }
}

#[test]
fn page_down_lands_on_min_of_last_and_cursor_plus_viewport() {
    let len = 50;
    let viewport = 20;
    for start in 0..len {
        let mut pager = text_pager(len, viewport);
        for _ in 0..start {
            press(&mut pager, key(KeyCode::Down));
        }
        assert_eq!(pager.state().cursor, start);

        press(&mut pager, key(KeyCode::PageDown));
        assert_eq!(pager.state().cursor, (len - 1).min(start + viewport));
    }
}

#[test]
fn searching_twice_with_the_same_term_settles_identically() {
    let mut pager = text_pager(50, 20);
    search(&mut pager, "line 1");
    let first_results = pager.state().search.results.clone();
    let first_cursor = pager.state().cursor;
    assert_eq!(first_results.len(), 11);

    press(&mut pager, ch('n'));
    press(&mut pager, ch('n'));
    search(&mut pager, "line 1");

    assert_eq!(pager.state().search.results, first_results);
    assert_eq!(pager.state().cursor, first_cursor);
    assert_eq!(pager.state().search.cursor, 0);
}

#[test]
fn search_ignores_case() {
    let document = Document::text(vec!["nothing here".to_string(), "Some foo text".to_string()]);
    let mut pager = Pager::new("foo.txt", document, &Config::default());

    search(&mut pager, "FOO");
    assert_eq!(pager.state().search.results.len(), 1);
    assert_eq!(pager.state().cursor, 1);
}

#[test]
fn result_navigation_cycles_back_to_the_start() {
    let mut pager = text_pager(50, 20);
    search(&mut pager, "line 2");
    let total = pager.state().search.results.len();
    assert_eq!(total, 11);
    let start = pager.state().cursor;

    for _ in 0..total {
        press(&mut pager, ch('n'));
    }
    assert_eq!(pager.state().cursor, start);

    for _ in 0..total {
        press(&mut pager, ch('N'));
    }
    assert_eq!(pager.state().cursor, start);

    press(&mut pager, ch('N'));
    let last = pager.state().search.results[total - 1].index;
    assert_eq!(pager.state().cursor, last);
}

#[test]
fn toggling_a_highlight_twice_restores_the_set() {
    let mut pager = text_pager(10, 20);
    press(&mut pager, ch('j'));
    press(&mut pager, ch('h'));
    press(&mut pager, ch('j'));
    let before = pager.state().highlighted.clone();
    assert_eq!(before.len(), 1);

    press(&mut pager, ch('h'));
    assert!(pager.state().highlighted.contains(&2));
    press(&mut pager, ch('h'));
    assert_eq!(pager.state().highlighted, before);
}
