//! Signup form example
//!
//! This example demonstrates:
//! - Registering fields with layered assertions
//! - Gating a field behind another field's value
//! - Running a traced validation pass and reading the result

use formcheck_sdk::assertion::{Email, IsChecked, IsNotEmpty, Length, Number, Uri};
use formcheck_sdk::condition::FieldEquals;
use formcheck_sdk::{Binding, Form, FormConfig, Value};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Signup Form Example ===\n");

    let username = Binding::new("ab".to_string());
    let email = Binding::new("not-an-email".to_string());
    let age = Binding::new("17".to_string());
    let has_site = Binding::new(true);
    let website = Binding::new("ftp://example.com".to_string());
    let terms = Binding::new(false);

    let config = FormConfig::from_yaml("name: signup\nenable_trace: true\n")?;

    let form = Form::builder()
        .with_config(config)
        .field("username", username.clone(), |f| {
            f.label("Username");
            f.assert(IsNotEmpty);
            f.assert(Length::new().at_least(3));
        })
        .field("email", email.clone(), |f| {
            f.assert(IsNotEmpty);
            f.assert(Email);
        })
        .field("age", age.clone(), |f| {
            f.assert(Number::new().at_least(18.0));
        })
        .field("has_site", has_site.clone(), |_| {})
        .field("website", website.clone(), |f| {
            f.conditional(FieldEquals::new("has_site", Value::Bool(true)));
            f.assert(Uri::new().schemes(["http", "https"]));
        })
        .field("terms", terms.clone(), |f| {
            f.assert(IsChecked).description("please accept the terms");
        })
        .build()?;

    let result = form.validate()?;
    println!("First pass success: {}", result.success());
    for error in result.errors() {
        println!("  {}", error);
    }

    if let Some(trace) = result.trace() {
        println!("\nTrace:");
        println!("{}", serde_json::to_string_pretty(trace)?);
    }

    tracing::info!("filling in the remaining fields");
    username.set("ada".to_string());
    email.set("ada@example.com".to_string());
    age.set("36".to_string());
    has_site.set(false);
    terms.set(true);

    let result = form.submit(|result| {
        println!("\nSubmitted with {} values", result.values().len());
    })?;
    println!("Second pass success: {}", result.success());

    Ok(())
}
