use proptest::prelude::*;
use search_state::languages::*;

#[test]
fn catalog_is_not_empty() {
    assert!(catalog().len() > 100);
}

#[test]
fn catalog_is_memoized() {
    let first = catalog().as_ptr();
    let second = catalog().as_ptr();
    assert_eq!(first, second);
}

#[test]
fn catalog_sorted_by_name_case_insensitive() {
    let keys: Vec<String> = catalog().iter().map(|l| collation_key(&l.name)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn catalog_codes_lowercase_and_unique() {
    let mut codes: Vec<&str> = catalog().iter().map(|l| l.code.as_str()).collect();
    assert!(codes.iter().all(|c| *c == c.to_lowercase()));
    let before = codes.len();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), before);
}

#[test]
fn catalog_contains_common_languages() {
    assert_eq!(display_name("fr"), Some("French"));
    assert_eq!(display_name("EN"), Some("English"));
    assert_eq!(display_name("xx"), None);
    assert_eq!(display_name(""), None);
}

#[test]
fn from_json_accepts_plain_and_detailed_entries() {
    let list = from_json(r#"{"de": "German", "fr": {"name": "French", "native": "Français"}}"#);
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].code, "fr");
    assert_eq!(list[0].native.as_deref(), Some("Français"));
    assert_eq!(list[1].code, "de");
    assert_eq!(list[1].native, None);
}

#[test]
fn from_json_sorts_by_name_not_code() {
    let list = from_json(r#"{"aa": "Zulu", "zz": "afrikaans", "mm": "Basque"}"#);
    let names: Vec<&str> = list.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["afrikaans", "Basque", "Zulu"]);
}

#[test]
fn from_json_lowercases_codes() {
    let list = from_json(r#"{"EN": "English"}"#);
    assert_eq!(list[0].code, "en");
    assert_eq!(list[0].code_label(), "EN");
}

#[test]
fn from_json_drops_duplicate_codes_after_lowercasing() {
    let list = from_json(r#"{"EN": "English (upper)", "en": "English"}"#);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "English (upper)");
}

#[test]
fn from_json_skips_entries_without_names() {
    let list = from_json(
        r#"{"aa": {"native": "Afar"}, "bb": {"name": ""}, "cc": "  ", "dd": 42, "ee": "Ewe"}"#,
    );
    let codes: Vec<&str> = list.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["ee"]);
}

#[test]
fn from_json_malformed_table_is_empty() {
    assert!(from_json("not json").is_empty());
    assert!(from_json("[1, 2, 3]").is_empty());
    assert!(from_json("").is_empty());
}

#[test]
fn collation_folds_accents_and_case() {
    assert_eq!(collation_key("Volapük"), "volapuk");
    assert_eq!(collation_key("ÉWE"), "ewe");
}

#[test]
fn find_is_case_insensitive() {
    let list = from_json(r#"{"fr": "French"}"#);
    assert_eq!(find(&list, "FR").map(|l| l.name.as_str()), Some("French"));
    assert!(find(&list, "french").is_none());
}

proptest! {
    #[test]
    fn from_json_output_always_sorted(names in proptest::collection::btree_map("[a-z]{2}", "[A-Za-z ]{0,12}", 0..30)) {
        let source = serde_json::to_string(&names).unwrap();
        let list = from_json(&source);
        prop_assert!(list.iter().all(|l| !l.name.is_empty()));
        prop_assert!(list
            .windows(2)
            .all(|w| collation_key(&w[0].name) <= collation_key(&w[1].name)));
    }
}
