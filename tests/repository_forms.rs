//! Store-contract tests for the in-memory form and submission repositories.

use std::sync::Arc;
use std::time::Duration;

use gatelink::domain::entities::{FormFieldDef, FormPatch, FormTheme, NewForm, NewSubmission};
use gatelink::domain::repositories::{FormRepository, SubmissionRepository};
use gatelink::error::AppError;
use gatelink::infrastructure::latency::NoLatency;
use gatelink::infrastructure::persistence::{MemoryFormRepository, MemorySubmissionRepository};

fn form_payload(name: &str) -> NewForm {
    NewForm {
        name: name.to_string(),
        description: "desc".to_string(),
        fields: vec![FormFieldDef {
            name: "email".to_string(),
            label: "Email".to_string(),
            field_type: "email".to_string(),
            required: true,
        }],
        theme: FormTheme::default(),
    }
}

fn submission_payload(link_id: i64) -> NewSubmission {
    NewSubmission {
        link_id,
        data: Default::default(),
    }
}

#[tokio::test]
async fn test_form_crud_roundtrip() {
    let repo = MemoryFormRepository::new(Arc::new(NoLatency));

    let form = repo.create(form_payload("Signup")).await.unwrap();
    assert_eq!(form.id, 1);

    let fetched = repo.get_by_id(form.id).await.unwrap();
    assert_eq!(fetched.name, "Signup");

    repo.delete(form.id).await.unwrap();
    assert!(matches!(
        repo.get_by_id(form.id).await,
        Err(AppError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_form_update_merges_partial_fields() {
    let repo = MemoryFormRepository::new(Arc::new(NoLatency));
    let form = repo.create(form_payload("Signup")).await.unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;

    let updated = repo
        .update(
            form.id,
            FormPatch {
                name: Some("Newsletter".to_string()),
                ..FormPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Newsletter");
    assert_eq!(updated.description, form.description);
    assert_eq!(updated.fields, form.fields);
    assert_eq!(updated.theme, form.theme);
    assert!(updated.updated_at > form.updated_at);
}

#[tokio::test]
async fn test_form_not_found_symmetry() {
    let repo = MemoryFormRepository::new(Arc::new(NoLatency));

    assert!(matches!(
        repo.get_by_id(7).await,
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        repo.update(7, FormPatch::default()).await,
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(repo.delete(7).await, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_submissions_filter_by_link() {
    let repo = MemorySubmissionRepository::new(Arc::new(NoLatency));

    repo.create(submission_payload(1)).await.unwrap();
    repo.create(submission_payload(2)).await.unwrap();
    repo.create(submission_payload(1)).await.unwrap();

    let for_link_1 = repo.get_by_link_id(1).await.unwrap();
    assert_eq!(for_link_1.len(), 2);
    assert!(for_link_1.iter().all(|s| s.link_id == 1));

    let for_unknown = repo.get_by_link_id(42).await.unwrap();
    assert!(for_unknown.is_empty());
}

#[tokio::test]
async fn test_submission_ids_increase_newest_first() {
    let repo = MemorySubmissionRepository::new(Arc::new(NoLatency));

    repo.create(submission_payload(1)).await.unwrap();
    repo.create(submission_payload(1)).await.unwrap();

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, 2);
    assert_eq!(all[1].id, 1);
}

#[tokio::test]
async fn test_submission_delete_missing_is_not_found() {
    let repo = MemorySubmissionRepository::new(Arc::new(NoLatency));

    assert!(matches!(repo.delete(5).await, Err(AppError::NotFound { .. })));
}
