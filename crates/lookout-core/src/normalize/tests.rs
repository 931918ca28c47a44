//! Tests for the schema normalizer.

use serde_json::json;

use super::*;

#[test]
fn test_record_with_sequence_returns_values_in_order() {
    let value = json!({"targets": ["recruiting", "sales", "humanresources"]});
    assert_eq!(
        normalize(&value, "targets"),
        vec!["recruiting", "sales", "humanresources"]
    );
}

#[test]
fn test_record_with_scalar_wraps_single_value() {
    let value = json!({"instruction": "compare pricing", "limit": 5});
    assert_eq!(normalize(&value, "instruction"), vec!["compare pricing"]);
    assert_eq!(normalize(&value, "limit"), vec!["5"]);
}

#[test]
fn test_record_lookup_is_case_insensitive() {
    let value = json!({"Target_Subreddits": ["a", "b"]});
    assert_eq!(normalize(&value, "target_subreddits"), vec!["a", "b"]);
    assert_eq!(normalize(&value, " TARGET_SUBREDDITS "), vec!["a", "b"]);
}

#[test]
fn test_exact_match_wins_over_case_insensitive() {
    let value = json!({"Targets": ["upper"], "targets": ["lower"]});
    assert_eq!(normalize(&value, "targets"), vec!["lower"]);
}

#[test]
fn test_mixed_integer_and_string_keys_do_not_crash() {
    let value = json!({"0": "row zero", "1": 42, "Keywords": ["ats"]});
    assert_eq!(normalize(&value, "keywords"), vec!["ats"]);
    assert!(normalize(&value, "missing").is_empty());
}

#[test]
fn test_positional_keys_are_not_names() {
    let value = json!({"0": ["should", "not", "match"]});
    assert!(normalize(&value, " 0").is_empty());

    let value = json!({"01": "x"});
    assert!(normalize(&value, "1").is_empty());
}

#[test]
fn test_list_of_rows_collects_in_row_order() {
    let value = json!([
        {"target_subreddit": "r/recruiting", "search_keywords": "ATS"},
        {"note": "row without the field"},
        {"Target_Subreddit": "r/sales", "search_keywords": "CRM"},
        "not a row",
    ]);
    assert_eq!(
        normalize(&value, "target_subreddit"),
        vec!["r/recruiting", "r/sales"]
    );
    assert_eq!(normalize(&value, "search_keywords"), vec!["ATS", "CRM"]);
}

#[test]
fn test_row_keyed_mapping_searches_each_row() {
    let value = json!({
        "1": {"targets": "sales"},
        "0": {"targets": "recruiting"},
        "10": {"targets": "hr"},
        "2": {"other": "x"},
    });
    assert_eq!(normalize(&value, "targets"), vec!["recruiting", "sales", "hr"]);
}

#[test]
fn test_column_oriented_mapping_reads_in_position_order() {
    let value = json!({
        "targets": {"1": "sales", "0": "recruiting", "2": null},
        "keywords": {"0": "ATS", "1": "CRM"},
    });
    assert_eq!(normalize(&value, "targets"), vec!["recruiting", "sales"]);
    assert_eq!(normalize(&value, "keywords"), vec!["ATS", "CRM"]);
}

#[test]
fn test_table_resolves_exact_then_case_insensitive_then_substring() {
    let table = json!({
        "columns": ["Target_Subreddit", "search_keywords", "ai_instruction"],
        "data": [
            ["r/recruiting", "ATS", "Extract pricing"],
            ["r/sales", null, "Extract features"],
        ],
    });
    assert_eq!(
        normalize(&table, "target_subreddit"),
        vec!["r/recruiting", "r/sales"]
    );
    assert_eq!(normalize(&table, "search_keywords"), vec!["ATS"]);
    assert_eq!(
        normalize(&table, "instruction"),
        vec!["Extract pricing", "Extract features"]
    );
    assert!(normalize(&table, "missing").is_empty());
}

#[test]
fn test_table_accepts_rows_key_and_skips_non_string_columns() {
    let table = json!({
        "columns": [0, "targets"],
        "rows": [[1, "a"], [2, "b"], [3]],
    });
    assert_eq!(normalize(&table, "targets"), vec!["a", "b"]);
    assert!(normalize(&table, "0").is_empty());
}

#[test]
fn test_sequence_elements_pass_through_as_text() {
    let value = json!({"keywords": ["ATS", 7, true, null, {"k": "v"}]});
    assert_eq!(
        normalize(&value, "keywords"),
        vec!["ATS", "7", "true", r#"{"k":"v"}"#]
    );
}

#[test]
fn test_unrecognized_shapes_return_empty() {
    for value in [
        json!(null),
        json!("targets"),
        json!(12),
        json!([]),
        json!({}),
        json!(["a", "b"]),
        json!({"targets": null}),
        json!({"columns": "not a list", "data": []}),
    ] {
        assert!(normalize(&value, "targets").is_empty(), "value: {value}");
    }
}

#[test]
fn test_field_spec_resolves_first_populated_alias() {
    let value = json!({"target_subreddits": ["a"], "subreddit": "b"});
    assert_eq!(FieldSpec::TARGETS.resolve(&value), vec!["a"]);

    let value = json!({"targets": [], "subreddits": ["c", "d"]});
    assert_eq!(FieldSpec::TARGETS.resolve(&value), vec!["c", "d"]);

    let value = json!({"search_keywords": ["x"]});
    assert_eq!(FieldSpec::KEYWORDS.resolve(&value), vec!["x"]);

    let value = json!({"ai_instruction": "Specific goal"});
    assert_eq!(FieldSpec::INSTRUCTION.resolve(&value), vec!["Specific goal"]);

    assert!(FieldSpec::PROJECT_NAME.resolve(&json!({})).is_empty());
}

#[test]
fn test_field_spec_presence_checks_direct_keys_only() {
    let record = json!({"Search_Keywords": "x"});
    let wrapped = json!({"strategy": [{"search_keywords": "x"}]});

    assert!(FieldSpec::KEYWORDS.present_in(record.as_object().expect("object")));
    assert!(!FieldSpec::KEYWORDS.present_in(wrapped.as_object().expect("object")));
}
