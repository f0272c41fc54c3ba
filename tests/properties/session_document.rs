//! Property tests for decoding stored sessions.

use proptest::prelude::*;

use yams::infrastructure::repositories::session_document::decode;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decoding never panics on arbitrary input.
    #[test]
    fn property_decode_never_panics(content in "(?s).{0,256}") {
        let _ = decode(&content);
    }

    /// PROPERTY: any legacy board list decodes, one board per element.
    #[test]
    fn property_board_arrays_always_decode(
        names in proptest::collection::vec("[A-Za-z ]{0,12}", 0..6),
        value in -50i64..1200,
    ) {
        let boards: Vec<serde_json::Value> = names
            .iter()
            .map(|n| serde_json::json!({"name": n, "entries": {"ones": value, "chance": "12"}}))
            .collect();
        let doc = serde_json::json!({ "boards": boards });
        let session = decode(&doc.to_string()).unwrap();
        let decoded: Vec<_> = session.all_boards().collect();
        prop_assert_eq!(decoded.len(), names.len());
        for board in decoded {
            prop_assert!(!board.name().trim().is_empty());
            prop_assert!(board.entry(yams::CategoryId::Ones).map_or(true, |v| v <= 999));
        }
    }
}
