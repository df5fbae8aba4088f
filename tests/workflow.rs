//! Link-creation workflow tests over real in-memory stores.

mod common;

use common::{empty_context, new_form_payload};
use gatelink::error::AppError;
use gatelink::prelude::{WorkflowAdvance, WorkflowStep};

#[tokio::test]
async fn test_empty_url_blocks_first_step() {
    let context = empty_context();
    let mut creator = context.link_creator();

    let result = creator.advance().await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(creator.step(), WorkflowStep::Url);
}

#[tokio::test]
async fn test_whitespace_url_blocks_first_step() {
    let context = empty_context();
    let mut creator = context.link_creator();

    creator.set_original_url("   ");
    let result = creator.advance().await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(creator.step(), WorkflowStep::Url);
}

#[tokio::test]
async fn test_missing_form_blocks_second_step() {
    let context = empty_context();
    context
        .form_service
        .create(new_form_payload("Signup"))
        .await
        .unwrap();

    let mut creator = context.link_creator();
    creator.set_original_url("https://example.com/content");
    creator.advance().await.unwrap();

    let result = creator.advance().await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(creator.step(), WorkflowStep::SelectForm);
}

#[tokio::test]
async fn test_first_step_loads_available_forms() {
    let context = empty_context();
    context
        .form_service
        .create(new_form_payload("Signup"))
        .await
        .unwrap();
    context
        .form_service
        .create(new_form_payload("Webinar"))
        .await
        .unwrap();

    let mut creator = context.link_creator();
    creator.set_original_url("https://example.com/content");
    creator.advance().await.unwrap();

    assert_eq!(creator.available_forms().len(), 2);
    // Newest first, matching the store ordering.
    assert_eq!(creator.available_forms()[0].name, "Webinar");
}

#[tokio::test]
async fn test_end_to_end_creation() {
    let context = empty_context();
    let form = context
        .form_service
        .create(new_form_payload("Signup"))
        .await
        .unwrap();

    let mut creator = context.link_creator();
    creator.set_original_url("https://x.com");
    creator.advance().await.unwrap();
    creator.select_form(form.id);
    creator.advance().await.unwrap();
    creator.customization_mut().headline = "Get the guide".to_string();

    let link = match creator.advance().await.unwrap() {
        WorkflowAdvance::Submitted(link) => link,
        WorkflowAdvance::Moved(step) => panic!("expected submission, got {step:?}"),
    };

    assert_eq!(link.id, 1);
    assert_eq!(link.clicks, 0);
    assert_eq!(link.submissions, 0);
    assert!(!link.gated_url.is_empty());
    assert_ne!(link.gated_url, link.original_url);
    assert_eq!(link.customization.headline, "Get the guide");

    let all = context.link_service.get_all().await.unwrap();
    assert_eq!(all[0].id, link.id);

    // Submission resets the workflow for the next link.
    assert_eq!(creator.step(), WorkflowStep::Url);
    assert!(creator.draft().original_url.is_empty());
}

#[tokio::test]
async fn test_failed_submit_stays_in_customize_and_is_retryable() {
    let context = empty_context();
    let form = context
        .form_service
        .create(new_form_payload("Signup"))
        .await
        .unwrap();

    let mut creator = context.link_creator();
    creator.set_original_url("not a valid url");
    creator.advance().await.unwrap();
    creator.select_form(form.id);
    creator.advance().await.unwrap();

    let result = creator.advance().await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(creator.step(), WorkflowStep::Customize);

    // Fix the draft and retry from the same step.
    creator.set_original_url("https://example.com/fixed");
    assert!(matches!(
        creator.advance().await.unwrap(),
        WorkflowAdvance::Submitted(_)
    ));
}

#[tokio::test]
async fn test_back_steps_without_guards() {
    let context = empty_context();
    context
        .form_service
        .create(new_form_payload("Signup"))
        .await
        .unwrap();

    let mut creator = context.link_creator();
    creator.set_original_url("https://example.com/content");
    creator.advance().await.unwrap();
    creator.select_form(1);
    creator.advance().await.unwrap();
    assert_eq!(creator.step(), WorkflowStep::Customize);

    creator.back();
    assert_eq!(creator.step(), WorkflowStep::SelectForm);

    creator.back();
    assert_eq!(creator.step(), WorkflowStep::Url);

    // No-op at the first step.
    creator.back();
    assert_eq!(creator.step(), WorkflowStep::Url);

    // Draft survives backward navigation.
    assert_eq!(creator.draft().original_url, "https://example.com/content");
}

#[tokio::test]
async fn test_cancel_discards_draft() {
    let context = empty_context();
    context
        .form_service
        .create(new_form_payload("Signup"))
        .await
        .unwrap();

    let mut creator = context.link_creator();
    creator.set_original_url("https://example.com/content");
    creator.advance().await.unwrap();

    creator.cancel();

    assert_eq!(creator.step(), WorkflowStep::Url);
    assert!(creator.draft().original_url.is_empty());
    assert!(creator.available_forms().is_empty());
    assert!(context.link_service.get_all().await.unwrap().is_empty());
}
