//! Live revalidation example
//!
//! This example demonstrates:
//! - Resolving field sources through a container
//! - Subscribing fields to live mode with a display callback
//! - Revalidating one field as its value changes

use formcheck_sdk::assertion::{Contains, IsNotEmpty, Length};
use formcheck_sdk::{BindingMap, Form, LiveUpdate};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Live Revalidation Example ===\n");

    let mut container = BindingMap::new();
    let title = container.insert("title", String::new());
    let body = container.insert("body", String::new());

    let mut form = Form::builder()
        .locate(&container, "title", |f| {
            f.assert(IsNotEmpty);
            f.assert(Length::new().at_most(20));
            f.on_error(|id, error| match error {
                Some(error) => println!("  [{}] {}", id, error.message()),
                None => println!("  [{}] ok", id),
            });
        })
        .locate(&container, "body", |f| {
            f.assert(Contains::new("rust").ignore_case());
        })
        .build()?;

    let subscription = form.enable_live("title")?;
    tracing::info!(field = subscription.field_id(), "title is live");

    for typed in ["", "Hello", "A title far too long for the limit"] {
        title.set(typed.to_string());
        println!("title = {:?}", typed);
        form.notify_change("title")?;
    }

    body.set("Learning Rust".to_string());
    match form.notify_change("body")? {
        LiveUpdate::Inactive => println!("body is not live, full pass needed"),
        LiveUpdate::Revalidated(error) => println!("body revalidated: {:?}", error),
    }

    println!("\nLive errors: {}", form.live_errors().len());
    form.cancel_live(&subscription);

    let result = form.validate()?;
    println!("Full pass success: {}", result.success());

    Ok(())
}
