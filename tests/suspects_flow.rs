#![allow(clippy::unwrap_used, clippy::expect_used)]

mod support;

use casefile::{
    features::{cases::flows as case_flows, suspects::flows},
    views, FlowError, Outcome, Route,
};
use support::FakeBackend;

#[tokio::test]
async fn register_list_show_and_delete() {
    let backend = FakeBackend::start().await;
    let api = backend.signed_in_client();

    assert_eq!(
        views::suspects::list_view(&flows::list_suspects(&api).await.unwrap())
            .empty_message
            .as_deref(),
        Some("No suspects registered. Add a new suspect to begin.")
    );

    let outcome = flows::add_suspect(
        &api,
        "Irene Adler",
        Some("Opera singer"),
        None,
        Some("Montenegro"),
    )
    .await
    .unwrap();
    assert_eq!(
        outcome,
        Outcome::Navigate {
            to: Route::Suspects,
            notice: Some("Suspect registered successfully!".to_string()),
        }
    );

    let suspects = flows::list_suspects(&api).await.unwrap();
    assert_eq!(suspects.len(), 1);
    let id = suspects[0].id.clone();

    let suspect = flows::load_suspect(&api, Some(&id)).await.unwrap();
    let view = views::suspects::detail_view(&suspect);
    assert_eq!(view.name, "Irene Adler");
    assert_eq!(view.alibi, "No alibi recorded");
    assert_eq!(view.last_known_location, "Montenegro");

    // the backend answers the delete with 204 and no body
    let outcome = flows::delete_suspect(&api, &id, &|_: &str| true)
        .await
        .unwrap();
    assert_eq!(outcome.route(), Some(&Route::Suspects));
    assert_eq!(backend.suspect_count(), 0);

    let err = flows::load_suspect(&api, Some(&id)).await.unwrap_err();
    assert_eq!(err.to_string(), "Suspect not found");
}

#[tokio::test]
async fn blank_name_sends_nothing() {
    let backend = FakeBackend::start().await;
    let api = backend.signed_in_client();

    let err = flows::add_suspect(&api, " ", Some("tall"), None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::Validation(_)));
    assert_eq!(err.to_string(), "Please enter a suspect name.");
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn double_submission_registers_twice() {
    let backend = FakeBackend::start().await;
    let api = backend.signed_in_client();

    let (first, second) = tokio::join!(
        flows::add_suspect(&api, "Moran", None, None, None),
        flows::add_suspect(&api, "Moran", None, None, None),
    );
    first.unwrap();
    second.unwrap();

    assert_eq!(backend.suspect_count(), 2);
}

#[tokio::test]
async fn declined_delete_keeps_the_suspect() {
    let backend = FakeBackend::start().await;
    let api = backend.signed_in_client();
    flows::add_suspect(&api, "Milverton", None, None, None)
        .await
        .unwrap();
    let id = flows::list_suspects(&api).await.unwrap()[0].id.clone();
    let before = backend.request_count();

    let outcome = flows::delete_suspect(&api, &id, &|_: &str| false)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Declined);
    assert_eq!(backend.request_count(), before);
    assert_eq!(backend.suspect_count(), 1);
}

#[tokio::test]
async fn load_suspect_without_id_redirects() {
    let backend = FakeBackend::start().await;
    let api = backend.signed_in_client();

    let err = flows::load_suspect(&api, None).await.unwrap_err();

    assert_eq!(err.redirect_to(), Some(&Route::Suspects));
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn dashboard_summary_counts_records() {
    let backend = FakeBackend::start().await;
    let api = backend.signed_in_client();
    case_flows::add_case(&api, "Robbery", None, None).await.unwrap();
    flows::add_suspect(&api, "Moriarty", None, None, None)
        .await
        .unwrap();

    let cases = case_flows::list_cases(&api).await.unwrap();
    let suspects = flows::list_suspects(&api).await.unwrap();
    let summary = views::dashboard::summary(&cases, &suspects);

    assert_eq!(summary.total_cases, 1);
    assert_eq!(summary.open, 1);
    assert_eq!(summary.suspects, 1);
}
