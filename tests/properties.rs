//! Property tests for coordinate mapping and highlighting.

use kite::document::{Document, DEFAULT_TAB_STOP};
use kite::syntax::SyntaxProfile;
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            8 => prop::sample::select(b"abcxyz019 ;(){}".to_vec()),
            1 => Just(b'\t'),
            1 => prop::sample::select(b"/*\"'\\".to_vec()),
        ],
        0..60,
    )
}

proptest! {
    #[test]
    fn prop_render_and_highlight_lengths_match(lines in prop::collection::vec(line_strategy(), 1..12)) {
        let mut doc = Document::from_lines(lines, DEFAULT_TAB_STOP);
        doc.set_syntax(SyntaxProfile::for_filename("p.c"));
        for row in doc.rows() {
            prop_assert_eq!(row.render().len(), row.highlight().len());
        }
    }

    #[test]
    fn prop_tab_free_mapping_is_identity(text in "[a-z ;]{0,40}") {
        let doc = Document::from_lines([text.as_str()], DEFAULT_TAB_STOP);
        for cx in 0..=text.len() {
            let rx = doc.char_col_to_render_col(0, cx);
            prop_assert_eq!(rx, cx);
            prop_assert_eq!(doc.render_col_to_char_col(0, rx), cx);
        }
    }

    #[test]
    fn prop_mapping_round_trips_with_tabs(line in line_strategy(), tab_stop in 1usize..9) {
        let doc = Document::from_lines([line.clone()], tab_stop);
        for cx in 0..=line.len() {
            let rx = doc.char_col_to_render_col(0, cx);
            prop_assert_eq!(doc.render_col_to_char_col(0, rx), cx);
        }
    }

    #[test]
    fn prop_incremental_matches_full_rehighlight(
        lines in prop::collection::vec(line_strategy(), 1..10),
        edits in prop::collection::vec((0usize..12, 0usize..70, prop::sample::select(b"/*x\n".to_vec())), 1..20),
    ) {
        let profile = SyntaxProfile::for_filename("p.c");
        let mut doc = Document::from_lines(lines, DEFAULT_TAB_STOP);
        doc.set_syntax(profile);
        for (row, col, byte) in edits {
            let row = row % doc.len().max(1);
            if byte == b'\n' {
                doc.split_row(row, col);
            } else {
                doc.insert_char(row, col, byte);
            }
        }

        let mut fresh = Document::from_lines(doc.rows().iter().map(|r| r.chars().to_vec()), DEFAULT_TAB_STOP);
        fresh.set_syntax(profile);
        for (a, b) in doc.rows().iter().zip(fresh.rows()) {
            prop_assert_eq!(a.highlight(), b.highlight());
            prop_assert_eq!(a.comment_open(), b.comment_open());
        }
    }
}
