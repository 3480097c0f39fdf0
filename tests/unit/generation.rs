//! Name generation through the public API.

use naming_cli::convention::{Convention, ConventionError, Inputs, Variable};
use naming_cli::generator::{NameGenerator, generate_name};
use naming_cli::test_utils::FixedSource;

fn inputs(pairs: &[(&str, &str)]) -> Inputs {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

#[test]
fn test_reference_example() {
    let convention = Convention::new(
        "(name)-(type)-(default)",
        vec![
            Variable::new("type").with_max_length(4),
            Variable::new("default").with_default("default"),
        ],
    );
    assert!(convention.validate().is_empty());

    let result = generate_name("foobar", &inputs(&[("type", "service")]), &convention).unwrap();
    assert_eq!(result, "foobar-serv-default");
}

#[test]
fn test_generated_example_shape() {
    let convention = Convention::new(
        "(name)-(generated)",
        vec![Variable::new("generated").with_generated(true).with_max_length(4)],
    );

    for _ in 0..20 {
        let result = generate_name("foobar", &Inputs::new(), &convention).unwrap();
        assert_eq!(result.len(), 11);
        assert!(result.starts_with("foobar-"));
        assert!(result["foobar-".len()..].chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn test_fixed_source_makes_generation_deterministic() {
    let convention = Convention::new(
        "(name)-(a)-(b)",
        vec![
            Variable::new("a").with_generated(true).with_max_length(3),
            Variable::new("b").with_generated(true),
        ],
    );
    let generator = NameGenerator::with_source(FixedSource::new("z9")).generated_length(5);

    assert_eq!(generator.generate("n", &Inputs::new(), &convention).unwrap(), "n-z9z-z9z9z");
}

#[test]
fn test_truncation_to_exactly_max_length() {
    for limit in 1..=6u64 {
        let convention =
            Convention::new("(name)|(v)", vec![Variable::new("v").with_max_length(limit)]);
        let result = generate_name("n", &inputs(&[("v", "abcdef")]), &convention).unwrap();
        let expected = &"abcdef"[..usize::try_from(limit).unwrap()];
        assert_eq!(result, format!("n|{expected}"));
    }
}

#[test]
fn test_default_fallback_is_truncated() {
    let convention = Convention::new(
        "(name)-(env)",
        vec![Variable::new("env").with_default("development").with_max_length(3)],
    );
    assert_eq!(generate_name("api", &Inputs::new(), &convention).unwrap(), "api-dev");
    assert_eq!(generate_name("api", &inputs(&[("env", "")]), &convention).unwrap(), "api-dev");
}

#[test]
fn test_strict_empty_value() {
    let convention = Convention::new("(name)-(env)", vec![Variable::new("env")]);
    let err = generate_name("api", &inputs(&[("env", "")]), &convention).unwrap_err();

    assert_eq!(err.to_string(), "Missing value \"env\"");
    assert_eq!(err.summary(), "Name Generation Error");
}

#[test]
fn test_first_missing_value_stops_generation() {
    let convention =
        Convention::new("(name)-(a)-(b)", vec![Variable::new("a"), Variable::new("b")]);
    assert_eq!(
        generate_name("n", &Inputs::new(), &convention),
        Err(ConventionError::MissingValue {
            variable: "a".to_string(),
        })
    );
}

#[test]
fn test_unbound_name_is_replaced_last() {
    let convention = Convention::new("(name)-(env)-(name)", vec![Variable::new("env")]);
    let result = generate_name("svc", &inputs(&[("env", "(name)")]), &convention).unwrap();
    // The input value contains (name) and is substituted by the final pass
    assert_eq!(result, "svc-svc-svc");
}

#[test]
fn test_bound_name_respects_max_length() {
    let convention = Convention::new(
        "(name)-(env)",
        vec![Variable::new("name").with_max_length(3), Variable::new("env")],
    );
    let result = generate_name("database", &inputs(&[("env", "qa")]), &convention).unwrap();
    assert_eq!(result, "dat-qa");
}

#[test]
fn test_literal_text_is_preserved() {
    let convention = Convention::new("rg_(name)_(env)_[01]", vec![Variable::new("env")]);
    let result = generate_name("core", &inputs(&[("env", "prd")]), &convention).unwrap();
    assert_eq!(result, "rg_core_prd_[01]");
}
