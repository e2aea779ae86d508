use jmespath_registry::{JmesPathFunction, create_standard_registry};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn eval(name: &str, args: &[Value]) -> Result<Value, jmespath_registry::FunctionError> {
    let registry = create_standard_registry();
    registry
        .get(name)
        .unwrap_or_else(|| panic!("function '{name}' not registered"))
        .evaluate(args)
}

#[rstest]
#[case("^a.*z$", json!("abz"), true)]
#[case("^a.*z$", json!("abc"), false)]
#[case("^123$", json!(123.0), true)]
#[case("^1\\.5$", json!(1.5), true)]
fn regex_match_cases(#[case] pattern: &str, #[case] subject: Value, #[case] expected: bool) {
    let result = eval("regex_match", &[json!(pattern), subject]).unwrap();
    assert_eq!(result, json!(expected));
}

#[test]
fn regex_replace_all_expands_captures() {
    let result = eval(
        "regex_replace_all",
        &[json!("(?P<digit>\\d)"), json!("a1b2"), json!("<$digit>")],
    )
    .unwrap();
    assert_eq!(result, json!("a<1>b<2>"));
}

#[test]
fn regex_replace_all_literal_takes_replacement_verbatim() {
    let result = eval(
        "regex_replace_all_literal",
        &[json!("\\d"), json!("a1b2"), json!("$0")],
    )
    .unwrap();
    assert_eq!(result, json!("a$0b$0"));
}

#[test]
fn regex_replace_all_stringifies_numeric_subject() {
    let result = eval(
        "regex_replace_all",
        &[json!("23"), json!(123.0), json!("x")],
    )
    .unwrap();
    assert_eq!(result, json!("1x"));
}

#[test]
fn invalid_regex_names_the_function() {
    let err = eval("regex_match", &[json!("("), json!("a")]).unwrap_err();
    assert!(err.to_string().starts_with("JMESPath function 'regex_match':"));
}

#[rstest]
#[case("*.yaml", "policy.yaml", true)]
#[case("*.yaml", "policy.json", false)]
#[case("polic?", "policy", true)]
#[case("nginx-*", "nginx-ingress", true)]
fn pattern_match_is_glob_not_regex(
    #[case] pattern: &str,
    #[case] subject: &str,
    #[case] expected: bool,
) {
    let result = eval("pattern_match", &[json!(pattern), json!(subject)]).unwrap();
    assert_eq!(result, json!(expected));
}

#[rstest]
#[case(json!({"a": "1"}), json!({"a": "1", "b": "2"}), true)]
#[case(json!({"a": "1"}), json!({"a": "2"}), false)]
#[case(json!({"a": "1", "b": "2"}), json!({"a": "1"}), false)]
#[case(json!({}), json!({"a": "1"}), true)]
#[case(json!({}), json!({}), true)]
fn label_match_is_subset_with_equality(
    #[case] labels: Value,
    #[case] target: Value,
    #[case] expected: bool,
) {
    let result = eval("label_match", &[labels, target]).unwrap();
    assert_eq!(result, json!(expected));
}

#[test]
fn label_match_requires_objects() {
    let err = eval("label_match", &[json!({"a": "1"}), json!("nope")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "JMESPath function 'label_match': 2 argument is expected of Object type"
    );
}
