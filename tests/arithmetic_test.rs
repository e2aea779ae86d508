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
#[case("add", json!(2), json!(3), 5.0)]
#[case("add", json!(2.5), json!(0.5), 3.0)]
#[case("subtract", json!(2), json!(3), -1.0)]
#[case("multiply", json!(4), json!(2.5), 10.0)]
#[case("divide", json!(7), json!(2), 3.5)]
#[case("modulo", json!(10), json!(3), 1.0)]
#[case("modulo", json!(-7), json!(2), -1.0)]
fn numeric_arithmetic(
    #[case] function: &str,
    #[case] left: Value,
    #[case] right: Value,
    #[case] expected: f64,
) {
    let result = eval(function, &[left, right]).unwrap();
    assert_eq!(result, json!(expected));
}

#[rstest]
#[case(json!(1))]
#[case(json!(0))]
#[case(json!(-3.5))]
fn divide_by_zero_always_fails(#[case] dividend: Value) {
    let err = eval("divide", &[dividend, json!(0)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "JMESPath function 'divide': Zero divisor passed"
    );
}

#[rstest]
#[case(json!(7.5), json!(2))]
#[case(json!(7), json!(2.5))]
#[case(json!(0.1), json!(0.2))]
fn modulo_rejects_fractional_operands(#[case] left: Value, #[case] right: Value) {
    let err = eval("modulo", &[left, right]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "JMESPath function 'modulo': Non-integer argument(s) passed for modulo"
    );
}

#[test]
fn modulo_by_zero_fails() {
    let err = eval("modulo", &[json!(10), json!(0)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "JMESPath function 'modulo': Zero divisor passed"
    );
}

#[test]
fn non_numeric_operand_names_the_position() {
    let err = eval("add", &[json!("2"), json!(3)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "JMESPath function 'add': 1 argument is expected of Number type"
    );

    let err = eval("subtract", &[json!(2), json!([])]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "JMESPath function 'subtract': 2 argument is expected of Number type"
    );
}
