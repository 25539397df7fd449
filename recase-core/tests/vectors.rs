//! Conversion vectors for the public entry points.

use recase_core::{CaseStyle, Error, format, format_value, to_camel_case, to_kebab_case};
use serde_json::json;

#[test]
fn test_literal_vectors() {
    assert_eq!(to_camel_case("hello_world"), "helloWorld");
    assert_eq!(to_camel_case("HELLO_WORLD"), "helloWorld");
    assert_eq!(to_camel_case("hello_123_world"), "hello123World");
    assert_eq!(to_camel_case("123_hello_world"), "123HelloWorld");
    assert_eq!(to_kebab_case("camelCaseString"), "camel-case-string");
    assert_eq!(to_kebab_case("  multiple   spaces  here "), "multiple-spaces-here");
    assert_eq!(to_kebab_case("ALLCAPS"), "allcaps");
}

#[test]
fn test_camel_case_table() {
    let cases = [
        ("hello world", "helloWorld"),
        ("Hello World", "helloWorld"),
        ("hello_world", "helloWorld"),
        ("hello-world", "helloWorld"),
        ("hello   world", "helloWorld"),
        ("  hello world  ", "helloWorld"),
        ("HELLO_WORLD", "helloWorld"),
        ("helloWorld", "helloWorld"),
        ("HelloWorld", "helloWorld"),
        ("helloWorldTest", "helloWorldTest"),
        ("HelloWorldTest", "helloWorldTest"),
        ("hello123world", "hello123world"),
        ("hello_123_world", "hello123World"),
        ("123_hello_world", "123HelloWorld"),
        ("hello--world", "helloWorld"),
        ("hello__world", "helloWorld"),
        ("hello---___world", "helloWorld"),
        ("hello world!", "helloWorld"),
        ("hello world123", "helloWorld123"),
        ("HELLO123WORLD", "hello123World"),
        ("user_ID", "userId"),
        ("user-id", "userId"),
        ("user id", "userId"),
        ("userID", "userId"),
        ("UserID", "userId"),
        ("userIDNumber", "userIdNumber"),
        ("UserIDNumber", "userIdNumber"),
        ("first name", "firstName"),
        ("SCREEN_NAME", "screenName"),
        ("mobile-number", "mobileNumber"),
    ];
    for (input, expected) in cases {
        assert_eq!(to_camel_case(input), expected, "input: {input:?}");
    }
}

#[test]
fn test_camel_case_degenerate() {
    let cases = [
        ("", ""),
        ("   ", ""),
        ("___", ""),
        ("---", ""),
        ("!!!", ""),
        ("123", "123"),
        ("A", "a"),
        ("a", "a"),
        ("A_B_C", "aBC"),
        ("A-B-C", "aBC"),
        ("A B C", "aBC"),
        ("a_b_c", "aBC"),
        ("a-b-c", "aBC"),
        ("a b c", "aBC"),
    ];
    for (input, expected) in cases {
        assert_eq!(to_camel_case(input), expected, "input: {input:?}");
    }
}

#[test]
fn test_punctuation_inside_a_word_is_not_a_boundary() {
    assert_eq!(to_camel_case("hello!@#world"), "helloworld");
    assert_eq!(to_camel_case("hello$%^world"), "helloworld");
}

#[test]
fn test_kebab_case_table() {
    let cases = [
        ("camelCaseString", "camel-case-string"),
        ("PascalCaseString", "pascal-case-string"),
        ("  mixed_separators-Here ", "mixed-separators-here"),
        ("ALLCAPS", "allcaps"),
        ("with special!@# chars", "with-special-chars"),
        ("snake_case_and-dash-case", "snake-case-and-dash-case"),
        ("already-kebab-case", "already-kebab-case"),
        ("  multiple   spaces  here ", "multiple-spaces-here"),
        ("HTTPServer", "http-server"),
        ("NASAManagesISS", "nasa-manages-iss"),
    ];
    for (input, expected) in cases {
        assert_eq!(to_kebab_case(input), expected, "input: {input:?}");
    }
}

#[test]
fn test_absent_input_for_every_style() {
    for style in CaseStyle::ALL {
        assert_eq!(format_value(&json!(null), style).unwrap(), "");
    }
}

#[test]
fn test_invalid_input_type() {
    for value in [json!(123), json!({}), json!([]), json!(true), json!(1.5)] {
        for style in CaseStyle::ALL {
            let err = format_value(&value, style).unwrap_err();
            assert!(
                matches!(err, Error::InvalidInputType { .. }),
                "{value} with {style}: {err:?}"
            );
        }
    }
}

#[test]
fn test_invalid_input_type_message() {
    let err = format_value(&json!([1, 2]), CaseStyle::Kebab).unwrap_err();
    assert_eq!(err.to_string(), "input must be a string or null, found array");
}

#[test]
fn test_all_styles_table() {
    let table = ["HTTPServer", "user_ID", "  multiple   spaces  here "]
        .iter()
        .map(|input| {
            CaseStyle::ALL
                .iter()
                .map(|style| format(*input, *style))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(table, @r"
    httpServer HttpServer http-server http_server
    userId UserId user-id user_id
    multipleSpacesHere MultipleSpacesHere multiple-spaces-here multiple_spaces_here
    ");
}
