//! Host adapters: declare, name records and the generation function.

use naming_cli::adapters::convention::declare;
use naming_cli::adapters::function::{FunctionError, generate_name, generate_name_with};
use naming_cli::adapters::name::{NameRequest, NameResource};
use naming_cli::convention::{ConventionError, Inputs, Variable};
use naming_cli::generator::NameGenerator;
use naming_cli::test_utils::FixedSource;

fn inputs(pairs: &[(&str, &str)]) -> Inputs {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

#[test]
fn test_declare_then_create_and_update() {
    let declared = declare(
        "(name)-(env)-(suffix)",
        vec![
            Variable::new("env").with_default("dev"),
            Variable::new("suffix").with_generated(true).with_max_length(2),
        ],
    )
    .unwrap();

    let resource =
        NameResource::with_generator(NameGenerator::with_source(FixedSource::new("ab")));

    let mut request = NameRequest {
        name: "web".to_string(),
        inputs: Inputs::new(),
        convention: declared.convention.clone(),
    };
    let record = resource.create(&request).unwrap();
    assert_eq!(record.id, "(name)-(env)-(suffix)/web");
    assert_eq!(record.result, "web-dev-ab");

    request.inputs = inputs(&[("env", "prd")]);
    let updated = resource.update(&record, &request).unwrap();
    assert_eq!(updated.id, record.id);
    assert_eq!(updated.result, "web-prd-ab");
}

#[test]
fn test_declare_rejects_without_encoding() {
    let errors = declare("(env)", vec![Variable::new("env"), Variable::new("tier")]).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.summary() == "Convention Validate Error"));
}

#[test]
fn test_name_record_serializes() {
    let declared = declare("(name)", Vec::new()).unwrap();
    let record = NameResource::new()
        .create(&NameRequest {
            name: "solo".to_string(),
            inputs: Inputs::new(),
            convention: declared.convention,
        })
        .unwrap();

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value, serde_json::json!({"id": "(name)/solo", "name": "solo", "result": "solo"}));
}

#[test]
fn test_function_uses_name_input() {
    let declared = declare("(name).(env)", vec![Variable::new("env")]).unwrap();
    let result =
        generate_name(&declared.convention, &inputs(&[("name", "db"), ("env", "qa")])).unwrap();
    assert_eq!(result, "db.qa");
}

#[test]
fn test_function_with_configured_generator() {
    let declared =
        declare("(name)-(id)", vec![Variable::new("id").with_generated(true)]).unwrap();
    let generator = NameGenerator::with_source(FixedSource::new("7")).generated_length(3);

    let result = generate_name_with(&generator, &declared.convention, &inputs(&[("name", "x")]))
        .unwrap();
    assert_eq!(result, "x-777");
}

#[test]
fn test_function_error_messages() {
    let err = generate_name("nope", &Inputs::new()).unwrap_err();
    assert!(err.to_string().starts_with("Error reading convention: "));

    let declared = declare("(name)-(env)", vec![Variable::new("env")]).unwrap();
    let err = generate_name(&declared.convention, &inputs(&[("name", "x"), ("env", "")]))
        .unwrap_err();
    assert_eq!(
        err,
        FunctionError::GenerateName(ConventionError::MissingValue {
            variable: "env".to_string(),
        })
    );
    assert_eq!(err.to_string(), "Error generating name: Missing value \"env\"");
}

#[test]
fn test_adapters_agree_on_declared_name_variable() {
    let declared = declare("(name)-x", vec![Variable::new("name").with_default("svc")]).unwrap();

    let record = NameResource::new()
        .create(&NameRequest {
            name: String::new(),
            inputs: Inputs::new(),
            convention: declared.convention.clone(),
        })
        .unwrap();
    let function = generate_name(&declared.convention, &Inputs::new()).unwrap();

    assert_eq!(record.result, "svc-x");
    assert_eq!(function, record.result);
}
