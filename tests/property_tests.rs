use std::collections::BTreeSet;

use chrono::DateTime;
use proptest::prelude::*;
use slackapi::core::Timestamp;
use slackapi::slack::api::{ConversationListQuery, FileListQuery, SearchQuery};
use slackapi::slack::{FileType, Params};

fn file_type() -> impl Strategy<Value = FileType> {
    prop_oneof![
        Just(FileType::Spaces),
        Just(FileType::Snippets),
        Just(FileType::Images),
        Just(FileType::Gdocs),
        Just(FileType::Zips),
        Just(FileType::Pdfs),
    ]
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9 ]{0,12}")
}

proptest! {
    #[test]
    fn test_timestamp_survives_the_wire(
        micros in -2_208_988_800_000_000i64..253_402_300_799_000_000i64,
    ) {
        let at = DateTime::from_timestamp_micros(micros).unwrap();
        let ts = Timestamp::new(at);
        let text = ts.to_string();

        let (_, fraction) = text.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 6);
        prop_assert_eq!(text.parse::<Timestamp>().unwrap(), ts);
    }

    #[test]
    fn test_assembly_is_deterministic(
        user in optional_text(),
        channel in optional_text(),
        count in prop::option::of(0u32..1000),
        types in prop::collection::btree_set(file_type(), 0..6),
    ) {
        let query = FileListQuery {
            user,
            channel,
            count,
            types,
            ..FileListQuery::default()
        };
        prop_assert_eq!(query.params(), query.params());
    }

    #[test]
    fn test_absent_and_empty_arguments_are_never_sent(
        user in optional_text(),
        channel in optional_text(),
        page in prop::option::of(1u32..50),
        types in prop::collection::btree_set(file_type(), 0..6),
    ) {
        let query = FileListQuery {
            user: user.clone(),
            channel: channel.clone(),
            page,
            types: types.clone(),
            ..FileListQuery::default()
        };
        let params = query.params();

        let sent = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        prop_assert_eq!(params.contains("user"), sent(&user));
        prop_assert_eq!(params.contains("channel"), sent(&channel));
        prop_assert_eq!(params.contains("page"), page.is_some());
        prop_assert_eq!(params.contains("types"), !types.is_empty());
        prop_assert!(!params.contains("ts_from"));
        prop_assert!(params.iter().all(|(_, value)| !value.is_empty()));
    }

    #[test]
    fn test_file_type_filter_order_ignores_insertion_order(
        types in prop::collection::vec(file_type(), 1..12),
    ) {
        let forward: BTreeSet<FileType> = types.iter().copied().collect();
        let backward: BTreeSet<FileType> = types.iter().rev().copied().collect();
        prop_assert_eq!(
            Params::new().file_types("types", &forward),
            Params::new().file_types("types", &backward)
        );
    }

    #[test]
    fn test_highlight_is_sent_only_when_on(query in "[a-z]{1,10}", highlight in any::<bool>()) {
        let search = SearchQuery { query, highlight, ..SearchQuery::default() };
        let params = search.params();
        prop_assert_eq!(params.get("highlight"), highlight.then_some("1"));
    }
}

#[test]
fn test_timestamp_edges() {
    let epoch: Timestamp = "0.000000".parse().unwrap();
    assert_eq!(epoch.unix_seconds(), 0);
    assert_eq!(epoch.to_string(), "0.000000");

    let far: Timestamp = "253402300799.999999".parse().unwrap();
    assert_eq!(far.to_string(), "253402300799.999999");

    let nanos: Timestamp = "1.123456789".parse().unwrap();
    assert_eq!(nanos.as_datetime().timestamp_subsec_nanos(), 123_456_789);

    assert!("".parse::<Timestamp>().is_err());
    assert!("abc.123".parse::<Timestamp>().is_err());
    assert!("1.1234567890".parse::<Timestamp>().is_err());
}

#[test]
fn test_default_conversation_list_matches_the_wire_example() {
    assert_eq!(
        ConversationListQuery::default().params().into_vec(),
        vec![
            ("exclude_archived".to_string(), "1".to_string()),
            ("limit".to_string(), "100".to_string()),
        ]
    );
}
