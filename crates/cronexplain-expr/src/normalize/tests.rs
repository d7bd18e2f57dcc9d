//! Tests for expression splitting and alias canonicalization.

use pretty_assertions::assert_eq;

use super::normalize;
use crate::error::ParseError;

fn fields_of(raw: &str) -> [String; 5] {
    normalize(raw).expect("should normalize").fields
}

#[test]
fn test_split_five_fields_no_command() {
    let normalized = normalize("*/15 0 1,15 * 1-5").unwrap();
    assert_eq!(
        normalized.fields,
        ["*/15", "0", "1,15", "*", "1-5"].map(String::from)
    );
    assert_eq!(normalized.command, "");
}

#[test]
fn test_command_keeps_internal_whitespace() {
    let normalized = normalize("* * * * *  /usr/bin/find /tmp -name '*.log'").unwrap();
    assert_eq!(normalized.command, "/usr/bin/find /tmp -name '*.log'");
}

#[test]
fn test_split_tolerates_leading_whitespace_and_runs() {
    let normalized = normalize("  *   *  * * *   echo hi").unwrap();
    assert_eq!(normalized.fields, ["*", "*", "*", "*", "*"].map(String::from));
    assert_eq!(normalized.command, "echo hi");
}

#[test]
fn test_fewer_than_five_fields_is_malformed() {
    for raw in ["*", "* *", "* * *", "* * * *", "", "   "] {
        match normalize(raw) {
            Err(ParseError::MalformedExpression { .. }) => {}
            other => panic!("{:?} should be malformed, got {:?}", raw, other),
        }
    }
}

#[test]
fn test_question_mark_becomes_wildcard_in_day_fields() {
    assert_eq!(fields_of("* * ? * ?")[2], "*");
    assert_eq!(fields_of("* * ? * ?")[4], "*");
    // Minute and hour are passed through untouched.
    assert_eq!(fields_of("*/5 0-6 ? * ?")[0], "*/5");
    assert_eq!(fields_of("*/5 0-6 ? * ?")[1], "0-6");
}

#[test]
fn test_day_seven_is_sunday() {
    assert_eq!(fields_of("* * * * 7")[4], "0");
    assert_eq!(fields_of("* * * * 5-7")[4], "5-0");
}

#[test]
fn test_day_seven_rewrite_is_literal() {
    // The rewrite is a character substitution, so a 7 inside a larger token
    // is rewritten too. Accepted observable behavior.
    assert_eq!(fields_of("* * * * 17")[4], "10");
}

#[test]
fn test_month_names_replaced_case_insensitively() {
    assert_eq!(fields_of("* * * JAN *")[3], "1");
    assert_eq!(fields_of("* * * dec *")[3], "12");
    assert_eq!(fields_of("* * * Feb-Nov *")[3], "2-11");
    assert_eq!(fields_of("* * * jan,jun,sep *")[3], "1,6,9");
}

#[test]
fn test_day_names_replaced_case_insensitively() {
    assert_eq!(fields_of("* * * * SUN")[4], "0");
    assert_eq!(fields_of("* * * * mon-fri")[4], "1-5");
    assert_eq!(fields_of("* * * * Sat")[4], "6");
}

#[test]
fn test_name_replacement_is_literal_substring() {
    // JANFEB -> 1FEB -> 12: substitutions run in table order over the raw
    // text, not over tokens. Accepted observable behavior.
    assert_eq!(fields_of("* * * JANFEB *")[3], "12");
}

#[test]
fn test_minute_and_hour_passthrough() {
    let normalized = normalize("1,2,3 */4 * * *").unwrap();
    assert_eq!(normalized.fields[0], "1,2,3");
    assert_eq!(normalized.fields[1], "*/4");
}
