//! The JSON transport form of conventions.

use naming_cli::constants::MAX_GENERATED_LENGTH;
use naming_cli::convention::{AttrValue, Convention, ConventionError, Inputs, Variable, wire};
use naming_cli::generator::{NameGenerator, generate_name};
use naming_cli::test_utils::FixedSource;

#[test]
fn test_round_trip_generates_identical_names() {
    let mut unknown = Variable::new("zone").with_default("eu");
    unknown.max_length = AttrValue::Unknown;

    let convention = Convention::new(
        "(name)-(env)-(zone)-(id)",
        vec![
            Variable::new("env").with_default("dev").with_max_length(2),
            unknown,
            Variable::new("id").with_generated(true).with_max_length(3),
        ],
    );

    let decoded = wire::from_json(&wire::to_json(&convention).unwrap()).unwrap();
    assert_eq!(decoded, convention);

    let generator = NameGenerator::with_source(FixedSource::new("k"));
    let values = Inputs::from([("env".to_string(), "prod".to_string())]);
    assert_eq!(
        generator.generate("app", &values, &convention).unwrap(),
        generator.generate("app", &values, &decoded).unwrap()
    );
}

#[test]
fn test_pretty_and_compact_decode_alike() {
    let convention = Convention::new("(name)-(x)", vec![Variable::new("x").with_generated(false)]);
    let compact = wire::to_json(&convention).unwrap();
    let pretty = wire::to_json_pretty(&convention).unwrap();

    assert_eq!(wire::from_json(&compact).unwrap(), wire::from_json(&pretty).unwrap());
}

#[test]
fn test_bare_strings_are_accepted() {
    let json = r#"{"definition":"(name)-(env)","variables":[{"name":"env","default":"dev","generated":"false","max_length":"0"}]}"#;
    let convention = wire::from_json(json).unwrap();

    let variable = &convention.variables[0];
    assert_eq!(variable.name, "env");
    assert_eq!(variable.default_value(), "dev");
    assert_eq!(variable.generated, AttrValue::Value(false));
    assert_eq!(variable.length_limit(), None);
}

#[test]
fn test_missing_variables_key_is_empty_list() {
    let convention = wire::from_json(r#"{"definition":"(name)"}"#).unwrap();
    assert!(convention.variables.is_empty());
}

#[test]
fn test_malformed_payloads() {
    let cases = [
        "",
        "{}",
        r#"{"definition":"(name)","variables":"env"}"#,
        r#"{"definition":"(name)","variables":[{"name":"a","max_length":"-1"}]}"#,
        r#"{"definition":"(name)","variables":[{"name":"a","generated":"TRUE"}]}"#,
        r#"{"definition":"(name)","variables":[{"name":"\"\""}]}"#,
        r#"{"definition":"(name)","variables":[{"name":"<unknown>"}]}"#,
    ];

    for json in cases {
        let err = wire::from_json(json).unwrap_err();
        assert!(matches!(err, ConventionError::MalformedConvention { .. }), "payload {json}");
        assert_eq!(err.summary(), "Convention Reading Error");
    }
}

#[test]
fn test_wire_variable_fields_are_strings() {
    let convention = Convention::new(
        "(name)-(n)",
        vec![Variable::new("n").with_generated(true).with_max_length(12)],
    );
    let value: serde_json::Value =
        serde_json::from_str(&wire::to_json(&convention).unwrap()).unwrap();

    let variable = &value["variables"][0];
    assert_eq!(variable["name"], "\"n\"");
    assert_eq!(variable["default"], "<null>");
    assert_eq!(variable["generated"], "true");
    assert_eq!(variable["max_length"], "12");
}

#[test]
fn test_decoded_huge_generated_length_is_clamped() {
    let json = r#"{"definition":"(name)-(id)","variables":[{"name":"\"id\"","default":"<null>","generated":"true","max_length":"18446744073709551615"}]}"#;
    let convention = wire::from_json(json).unwrap();
    assert!(convention.validate().is_empty());

    let result = generate_name("app", &Inputs::new(), &convention).unwrap();
    assert_eq!(result.len(), "app-".len() + MAX_GENERATED_LENGTH);
    assert!(result["app-".len()..].chars().all(|c| c.is_ascii_alphanumeric()));
}
