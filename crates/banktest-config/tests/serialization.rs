//! Wire-contract tests for the serialized settings document.
// banktest-config/tests/serialization.rs
// =============================================================================
// Module: Settings Serialization Tests
// Description: Validate the flat document shape the external runner consumes.
// Purpose: Ensure key names and values match the runner contract exactly.
// =============================================================================

use banktest_config::ServiceEndpoints;
use banktest_config::SuiteSettings;
use serde_json::Value;

type TestResult = Result<(), String>;

/// Serializes settings and returns the resulting JSON object.
fn settings_document(env: Option<&str>) -> Result<serde_json::Map<String, Value>, String> {
    let settings = SuiteSettings::resolve(env);
    let value = serde_json::to_value(&settings).map_err(|err| err.to_string())?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(format!("expected object document, got {other}")),
    }
}

#[test]
fn document_carries_exactly_the_runner_keys() -> TestResult {
    let document = settings_document(Some("dev"))?;
    let mut keys: Vec<&str> = document.keys().map(String::as_str).collect();
    keys.sort_unstable();
    if keys != ["clientAppUrl", "connectTimeout", "readTimeout", "transactionAppUrl"] {
        return Err(format!("unexpected document keys: {keys:?}"));
    }
    Ok(())
}

#[test]
fn dev_document_targets_localhost() -> TestResult {
    let document = settings_document(Some("dev"))?;
    if document["clientAppUrl"] != "http://localhost:8080/api" {
        return Err(format!("unexpected client url: {}", document["clientAppUrl"]));
    }
    if document["transactionAppUrl"] != "http://localhost:8081/api" {
        return Err(format!("unexpected transaction url: {}", document["transactionAppUrl"]));
    }
    Ok(())
}

#[test]
fn docker_document_overrides_both_urls() -> TestResult {
    let document = settings_document(Some("docker"))?;
    if document["clientAppUrl"] != "http://clientapp:8080/api" {
        return Err(format!("unexpected client url: {}", document["clientAppUrl"]));
    }
    if document["transactionAppUrl"] != "http://transactionapp:8081/api" {
        return Err(format!("unexpected transaction url: {}", document["transactionAppUrl"]));
    }
    Ok(())
}

#[test]
fn document_timeouts_are_millisecond_integers() -> TestResult {
    let document = settings_document(None)?;
    if document["connectTimeout"] != 10_000 {
        return Err(format!("unexpected connect timeout: {}", document["connectTimeout"]));
    }
    if document["readTimeout"] != 10_000 {
        return Err(format!("unexpected read timeout: {}", document["readTimeout"]));
    }
    Ok(())
}

#[test]
fn endpoints_deserialize_from_runner_documents() -> TestResult {
    let endpoints: ServiceEndpoints = serde_json::from_str(
        r#"{"clientAppUrl": "http://clientapp:8080/api", "transactionAppUrl": "http://transactionapp:8081/api"}"#,
    )
    .map_err(|err| err.to_string())?;
    if endpoints.client_app_url != "http://clientapp:8080/api" {
        return Err(format!("unexpected client url: {}", endpoints.client_app_url));
    }
    Ok(())
}
