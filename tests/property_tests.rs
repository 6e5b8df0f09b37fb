use proptest::prelude::*;
use sniffcsv::api::{detect, detect_ranked, parse};
use sniffcsv::config::DetectorConfig;
use sniffcsv::dialect::Dialect;
use sniffcsv::selector;
use sniffcsv::tokenizer::tokenize;

fn arb_dialect() -> impl Strategy<Value = Dialect> {
    (
        prop_oneof![Just(','), Just(';'), Just('\t'), Just('|'), Just(':')],
        prop_oneof![Just(None), Just(Some('"')), Just(Some('\''))],
        prop_oneof![Just(None), Just(Some('\\'))],
    )
        .prop_map(|(d, q, e)| Dialect::new(d, q, e))
}

proptest! {
    // Tokenization is total: any text under any well-formed dialect yields
    // rows whose cells are valid, in-bounds slices.
    #[test]
    fn tokenize_never_panics(text in ".{0,200}", dialect in arb_dialect()) {
        let rows = tokenize(&text, &dialect);
        for row in &rows {
            prop_assert!(!row.is_empty());
            for cell in row {
                prop_assert!(cell.start <= cell.end);
                prop_assert!(cell.end <= text.len());
                // must not slice through a char boundary
                let _ = cell.raw(&text);
                let _ = cell.content(&text, &dialect);
            }
        }
    }

    #[test]
    fn parse_is_idempotent(text in ".{0,200}", dialect in arb_dialect()) {
        prop_assert_eq!(parse(&text, &dialect), parse(&text, &dialect));
    }

    #[test]
    fn detect_is_deterministic(text in "[a-z0-9,;\"'\\\\\n]{0,120}") {
        prop_assert_eq!(detect(&text), detect(&text));
    }

    #[test]
    fn scores_stay_in_unit_interval(text in ".{0,200}") {
        for cand in detect_ranked(&text, &DetectorConfig::default()) {
            prop_assert!((0.0..=1.0).contains(&cand.score));
        }
    }

    // The winner reported by select is never beaten by any candidate.
    #[test]
    fn selection_is_maximal(text in "[a-z0-9,;\n]{0,120}") {
        let ranked = detect_ranked(&text, &DetectorConfig::default());
        if let Some(sel) = selector::select(&ranked) {
            for cand in &ranked {
                prop_assert!(cand.score <= sel.winner.score);
            }
        }
    }

    // Delimiter-free, quote-free fields come back in one piece.
    #[test]
    fn plain_fields_round_trip(fields in proptest::collection::vec("[a-z]{1,8}", 1..6)) {
        let text = fields.join(",");
        let dialect = Dialect::new(',', None, None);
        let rows = tokenize(&text, &dialect);
        prop_assert_eq!(rows.len(), 1);
        let values: Vec<&str> = rows[0].iter().map(|c| c.raw(&text)).collect();
        prop_assert_eq!(values, fields);
    }
}
