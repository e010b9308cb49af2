//! Unit tests for Form

use super::*;
use crate::config::FormConfig;
use crate::error::SdkError;
use crate::result::{FieldError, TraceStatus};
use crate::source::Binding;
use formcheck_core::assertion::{IsChecked, IsNotEmpty, Length, Number};
use formcheck_core::condition::{ContextFlag, FieldEquals, FieldIsValid};
use formcheck_core::{Context, FormState, Value, When};
use std::cell::RefCell;
use std::rc::Rc;

fn text(value: &str) -> Binding<String> {
    Binding::new(value.to_string())
}

#[test]
fn test_empty_form_succeeds() {
    let form = Form::builder().build().unwrap();
    let result = form.validate().unwrap();
    assert!(result.success());
    assert!(result.errors().is_empty());
    assert!(form.is_empty());
}

#[test]
fn test_errors_follow_registration_order() {
    let form = Form::builder()
        .field("first", text(""), |f| {
            f.assert(IsNotEmpty);
        })
        .field("second", text("ok"), |f| {
            f.assert(IsNotEmpty);
        })
        .field("third", text("abc"), |f| {
            f.assert(Length::new().at_least(5));
        })
        .build()
        .unwrap();

    let result = form.validate().unwrap();
    let ids: Vec<&str> = result.errors().iter().map(|e| e.field_id()).collect();
    assert_eq!(ids, vec!["first", "third"]);
    assert_eq!(result.errors()[1].message(), "length must be at least 5");
}

#[test]
fn test_values_recorded_for_applicable_fields() {
    let form = Form::builder()
        .field("age", Binding::new(42_i64), |_| {})
        .field("nickname", text("zed"), |f| {
            f.conditional(When::new("never", |_: &FormState| false));
        })
        .build()
        .unwrap();

    let result = form.validate().unwrap();
    assert_eq!(result.value("age"), Some(&Value::Number(42.0)));
    assert_eq!(result.value("nickname"), None);
}

#[test]
fn test_condition_sees_earlier_field_outcome() {
    let form = Form::builder()
        .field("password", text("short"), |f| {
            f.assert(Length::new().at_least(8));
        })
        .field("confirm", text(""), |f| {
            f.conditional(FieldIsValid::new("password"));
            f.assert(IsNotEmpty);
        })
        .build()
        .unwrap();

    let result = form.validate().unwrap();
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].field_id(), "password");
}

#[test]
fn test_context_gates_field() {
    let form = Form::builder()
        .field("vat_number", text(""), |f| {
            f.conditional(ContextFlag::new("business"));
            f.assert(IsNotEmpty);
        })
        .build()
        .unwrap();

    assert!(form.validate().unwrap().success());

    let mut context = Context::new();
    context.insert("business".to_string(), Value::Bool(true));
    let result = form.validate_with(&context).unwrap();
    assert_eq!(result.errors()[0].field_id(), "vat_number");
}

#[test]
fn test_unavailable_source_fails_the_pass() {
    let email = text("a@b.com");
    let form = Form::builder()
        .field("name", text(""), |f| {
            f.assert(IsNotEmpty);
        })
        .field("email", email.clone(), |_| {})
        .build()
        .unwrap();

    email.detach();
    assert_eq!(
        form.validate(),
        Err(SdkError::Unavailable {
            field: "email".to_string(),
            reason: "binding detached".to_string(),
        })
    );
}

#[test]
fn test_trace_records_each_field() {
    let form = Form::builder()
        .with_config(FormConfig::new().enable_trace(true))
        .field("skipped", text(""), |f| {
            f.conditional(When::new("off", |_: &FormState| false));
        })
        .field("ok", text("x"), |f| {
            f.assert(IsNotEmpty);
        })
        .field("bad", text("x"), |f| {
            f.assert(IsNotEmpty);
            f.assert(Number::new().at_least(1.0));
        })
        .build()
        .unwrap();

    let result = form.validate().unwrap();
    let trace = result.trace().unwrap();
    assert_eq!(
        trace.field("skipped").unwrap().status,
        TraceStatus::Skipped {
            condition: "off".to_string()
        }
    );
    assert_eq!(
        trace.field("ok").unwrap().status,
        TraceStatus::Passed { assertions_run: 1 }
    );
    assert_eq!(
        trace.field("bad").unwrap().status,
        TraceStatus::Failed {
            assertion: "number".to_string(),
            assertions_run: 2
        }
    );
}

#[test]
fn test_trace_absent_by_default() {
    let form = Form::builder()
        .field("a", text("x"), |_| {})
        .build()
        .unwrap();
    assert!(form.validate().unwrap().trace().is_none());
}

#[test]
fn test_validate_field_unknown_id() {
    let form = Form::builder().build().unwrap();
    assert_eq!(
        form.validate_field("missing"),
        Err(SdkError::NotFound("missing".to_string()))
    );
}

#[test]
fn test_validate_field_sees_earlier_values() {
    let terms = Binding::new(false);
    let form = Form::builder()
        .field("terms", terms.clone(), |f| {
            f.assert(IsChecked);
        })
        .field("signature", text(""), |f| {
            f.conditional(When::new("terms accepted", |s: &FormState| {
                s.value("terms") == Some(&Value::Bool(true))
            }));
            f.assert(IsNotEmpty);
        })
        .build()
        .unwrap();

    assert_eq!(form.validate_field("signature").unwrap(), None);

    terms.set(true);
    let error = form.validate_field("signature").unwrap().unwrap();
    assert_eq!(error.message(), "cannot be empty");
}

#[test]
fn test_validate_field_ignores_gated_off_unavailable_field() {
    let website = text("https://example.com");
    let form = Form::builder()
        .field("website", website.clone(), |f| {
            f.conditional(When::new("never", |_: &FormState| false));
        })
        .field("terms", Binding::new(false), |f| {
            f.assert(IsChecked);
        })
        .build()
        .unwrap();

    website.detach();
    assert_eq!(form.validate().unwrap().errors().len(), 1);

    let error = form.validate_field("terms").unwrap().unwrap();
    assert_eq!(error.field_id(), "terms");
    assert_eq!(error.message(), "must be checked");
}

#[test]
fn test_validate_field_unaffected_by_other_broken_source() {
    let nickname = text("zed");
    let form = Form::builder()
        .field("nickname", nickname.clone(), |_| {})
        .field("email", text(""), |f| {
            f.assert(IsNotEmpty);
        })
        .build()
        .unwrap();

    nickname.detach();
    assert!(matches!(form.validate(), Err(SdkError::Unavailable { .. })));
    assert_eq!(
        form.validate_field("email").unwrap().unwrap().message(),
        "cannot be empty"
    );
    assert!(matches!(
        form.validate_field("nickname"),
        Err(SdkError::Unavailable { .. })
    ));
}

#[test]
fn test_validate_field_hides_values_of_skipped_fields() {
    let form = Form::builder()
        .field("plan", text("pro"), |f| {
            f.conditional(When::new("never", |_: &FormState| false));
        })
        .field("coupon", text(""), |f| {
            f.conditional(FieldEquals::new("plan", Value::from("pro")));
            f.assert(IsNotEmpty);
        })
        .build()
        .unwrap();

    assert!(form.validate().unwrap().success());
    assert_eq!(form.validate_field("coupon").unwrap(), None);
}

#[test]
fn test_validate_field_uses_recorded_outcomes() {
    let password = text("longenough");
    let form = Form::builder()
        .field("password", password.clone(), |f| {
            f.assert(Length::new().at_least(8));
        })
        .field("confirm", text(""), |f| {
            f.conditional(FieldIsValid::new("password"));
            f.assert(IsNotEmpty);
        })
        .build()
        .unwrap();

    // nothing recorded for "password" yet
    assert_eq!(form.validate_field("confirm").unwrap(), None);

    let result = form.validate().unwrap();
    let from_pass = result.error_for("confirm").cloned();
    assert_eq!(from_pass.as_ref().map(|e| e.message()), Some("cannot be empty"));
    assert_eq!(form.validate_field("confirm").unwrap(), from_pass);

    password.set("short".to_string());
    assert!(form.validate_field("password").unwrap().is_some());
    assert_eq!(form.validate_field("confirm").unwrap(), None);
    assert!(form.validate().unwrap().error_for("confirm").is_none());
}

#[test]
fn test_present_calls_every_callback() {
    let seen: Rc<RefCell<Vec<(String, Option<String>)>>> = Rc::new(RefCell::new(Vec::new()));
    let record = |seen: &Rc<RefCell<Vec<(String, Option<String>)>>>| {
        let seen = Rc::clone(seen);
        move |id: &str, error: Option<&FieldError>| {
            seen.borrow_mut()
                .push((id.to_string(), error.map(|e| e.message().to_string())));
        }
    };

    let form = Form::builder()
        .field("a", text(""), |f| {
            f.assert(IsNotEmpty);
            f.on_error(record(&seen));
        })
        .field("b", text("x"), |f| {
            f.on_error(record(&seen));
        })
        .build()
        .unwrap();

    let result = form.validate().unwrap();
    form.present(&result);
    assert_eq!(
        *seen.borrow(),
        vec![
            ("a".to_string(), Some("cannot be empty".to_string())),
            ("b".to_string(), None),
        ]
    );
}

#[test]
fn test_submit_runs_callback_only_on_success() {
    let name = text("");
    let form = Form::builder()
        .field("name", name.clone(), |f| {
            f.assert(IsNotEmpty);
        })
        .build()
        .unwrap();

    let submitted = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&submitted);
    let result = form.submit(|_| *counter.borrow_mut() += 1).unwrap();
    assert!(!result.success());
    assert_eq!(*submitted.borrow(), 0);

    name.set("Ada".to_string());
    let counter = Rc::clone(&submitted);
    assert!(form.submit(|_| *counter.borrow_mut() += 1).unwrap().success());
    assert_eq!(*submitted.borrow(), 1);
}

#[test]
fn test_live_lifecycle() {
    let email = text("");
    let mut form = Form::builder()
        .field("email", email.clone(), |f| {
            f.assert(IsNotEmpty);
        })
        .build()
        .unwrap();

    assert_eq!(form.notify_change("email").unwrap(), LiveUpdate::Inactive);

    let subscription = form.enable_live("email").unwrap();
    assert_eq!(subscription.field_id(), "email");
    assert!(form.is_live("email"));
    assert_eq!(form.enable_live("email").unwrap(), subscription);

    match form.notify_change("email").unwrap() {
        LiveUpdate::Revalidated(Some(error)) => assert_eq!(error.message(), "cannot be empty"),
        other => panic!("Expected revalidation error, got {:?}", other),
    }
    assert_eq!(form.live_errors().len(), 1);

    email.set("a@b.com".to_string());
    assert_eq!(
        form.notify_change("email").unwrap(),
        LiveUpdate::Revalidated(None)
    );
    assert!(form.live_errors().is_empty());

    assert!(form.cancel_live(&subscription));
    assert!(!form.cancel_live(&subscription));
    assert!(!form.is_live("email"));
}

#[test]
fn test_live_unknown_id() {
    let mut form = Form::builder().build().unwrap();
    assert!(matches!(form.enable_live("nope"), Err(SdkError::NotFound(_))));
    assert!(matches!(form.notify_change("nope"), Err(SdkError::NotFound(_))));
}

#[test]
fn test_live_by_default_subscribes_everything() {
    let form = Form::builder()
        .with_config(FormConfig::new().live_by_default(true))
        .field("a", text(""), |_| {})
        .field("b", text(""), |_| {})
        .build()
        .unwrap();
    assert!(form.is_live("a"));
    assert!(form.is_live("b"));
}

#[test]
fn test_stale_subscription_cannot_cancel_new_one() {
    let mut form = Form::builder()
        .field("a", text(""), |_| {})
        .build()
        .unwrap();

    let first = form.enable_live("a").unwrap();
    assert!(form.cancel_live(&first));
    let second = form.enable_live("a").unwrap();
    assert_ne!(first, second);
    assert!(!form.cancel_live(&first));
    assert!(form.is_live("a"));
    assert!(form.cancel_live(&second));
}
