//! End-to-end effect flows against the mock backends with zero latency.

use std::sync::Arc;
use std::time::Duration;

use formkit_backend::{MockAuthBackend, MockFormBackend, MockLatency};
use formkit_model::{AppState, FieldValue, SubmissionData, UserRole};
use formkit_platform::{MemoryStorage, RecordingNavigator, Storage, CURRENT_USER_KEY};
use formkit_store::{selectors, AuthAction, AuthEffects, FormBuilderAction, FormBuilderEffects, Store};

const SETTLE: Duration = Duration::from_secs(2);

struct Harness {
    store: Arc<Store>,
    navigator: Arc<RecordingNavigator>,
    storage: Arc<MemoryStorage>,
}

async fn harness() -> Harness {
    let store = Arc::new(Store::new());
    let storage = Arc::new(MemoryStorage::new());
    let navigator = Arc::new(RecordingNavigator::new());

    let auth_backend =
        Arc::new(MockAuthBackend::new(storage.clone()).with_latency(MockLatency::zero()));
    let form_backend = Arc::new(MockFormBackend::new().with_latency(MockLatency::zero()));

    AuthEffects::new(store.clone(), auth_backend, navigator.clone()).spawn();
    FormBuilderEffects::new(store.clone(), form_backend).spawn();

    // Let the just-spawned effect tasks run up to their `recv().await` so
    // they are subscribed to the action stream before the test dispatches;
    // a broadcast has no receivers until then and would drop early actions.
    tokio::task::yield_now().await;

    Harness {
        store,
        navigator,
        storage,
    }
}

/// Wait until the state satisfies `pred`, or panic after [`SETTLE`].
async fn wait_for(store: &Store, pred: impl Fn(&AppState) -> bool) {
    let mut rx = store.subscribe();
    tokio::time::timeout(SETTLE, async {
        loop {
            let satisfied = pred(&rx.borrow_and_update());
            if satisfied {
                break;
            }
            if rx.changed().await.is_err() {
                panic!("store dropped before the condition held");
            }
        }
    })
    .await
    .expect("state condition not reached in time");
}

/// Wait until `pred` holds, polling; for collaborator-side assertions.
async fn eventually(pred: impl Fn() -> bool) {
    tokio::time::timeout(SETTLE, async {
        while !pred() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

#[tokio::test]
async fn login_with_valid_credentials_authenticates_and_navigates() {
    let h = harness().await;
    h.store.dispatch(AuthAction::Login {
        username: "admin".into(),
        password: "password".into(),
    });
    assert!(h.store.select(selectors::auth_loading));

    wait_for(&h.store, selectors::is_authenticated).await;
    let user = h.store.select(selectors::current_user).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.username, "admin");
    assert_eq!(user.role, UserRole::Admin);
    assert!(h.store.select(selectors::is_admin));

    let navigator = h.navigator.clone();
    eventually(move || navigator.last().as_deref() == Some("/dashboard")).await;
}

#[tokio::test]
async fn login_with_wrong_password_records_error() {
    let h = harness().await;
    h.store.dispatch(AuthAction::Login {
        username: "admin".into(),
        password: "wrong".into(),
    });
    wait_for(&h.store, |s| s.auth.error.is_some()).await;

    assert_eq!(
        h.store.select(selectors::auth_error).as_deref(),
        Some("Invalid credentials")
    );
    assert!(!h.store.select(selectors::is_authenticated));
    assert!(!h.store.select(selectors::auth_loading));
    assert!(h.navigator.paths().is_empty());
}

#[tokio::test]
async fn load_templates_populates_the_slice() {
    let h = harness().await;
    h.store.dispatch(FormBuilderAction::LoadTemplates);
    assert!(h.store.select(selectors::builder_loading));

    wait_for(&h.store, |s| !s.form_builder.templates.is_empty()).await;
    let templates = h.store.select(selectors::all_templates);
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].name, "Contact Form");
    assert!(!h.store.select(selectors::builder_loading));
    assert_eq!(h.store.select(selectors::builder_error), None);
}

#[tokio::test]
async fn missing_template_surfaces_a_failure_and_stays_usable() {
    let h = harness().await;
    h.store.dispatch(FormBuilderAction::LoadTemplate { id: "missing".into() });
    wait_for(&h.store, |s| s.form_builder.error.is_some()).await;

    assert_eq!(
        h.store.select(selectors::builder_error).as_deref(),
        Some("Template not found")
    );
    assert!(!h.store.select(selectors::builder_loading));

    // retry works: the slice is not poisoned
    h.store.dispatch(FormBuilderAction::LoadTemplate { id: "1".into() });
    wait_for(&h.store, |s| s.form_builder.current_template.is_some()).await;
    assert_eq!(h.store.select(selectors::builder_error), None);
}

#[tokio::test]
async fn submit_form_appends_a_denormalized_submission() {
    let h = harness().await;
    let mut data = SubmissionData::new();
    data.insert("field1".into(), FieldValue::Text("John Doe".into()));
    data.insert("field3".into(), FieldValue::Text("Hello from the tests".into()));

    h.store.dispatch(FormBuilderAction::SubmitForm {
        template_id: "1".into(),
        data: data.clone(),
        submitted_by: Some("2".into()),
    });
    wait_for(&h.store, |s| !s.form_builder.submissions.is_empty()).await;

    let submissions = h.store.select(selectors::all_submissions);
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].form_template_name, "Contact Form");
    assert_eq!(submissions[0].data, data);
    assert_eq!(
        h.store.select(|s| selectors::submissions_by_template(s, "1")).len(),
        1
    );
}

#[tokio::test]
async fn deleting_the_current_template_clears_it() {
    let h = harness().await;
    h.store.dispatch(FormBuilderAction::LoadTemplate { id: "1".into() });
    wait_for(&h.store, |s| s.form_builder.current_template.is_some()).await;

    h.store.dispatch(FormBuilderAction::DeleteTemplate { id: "1".into() });
    wait_for(&h.store, |s| s.form_builder.current_template.is_none()).await;
    assert!(h.store.select(selectors::current_template).is_none());
}

#[tokio::test]
async fn session_restore_uses_the_persisted_record() {
    let h = harness().await;
    let record = serde_json::to_string(&formkit_test_utils::regular_user()).unwrap();
    h.storage.set(CURRENT_USER_KEY, &record);

    h.store.dispatch(AuthAction::LoadCurrentUser);
    wait_for(&h.store, selectors::is_authenticated).await;

    let user = h.store.select(selectors::current_user).unwrap();
    assert_eq!(user.id, "2");
    // restore never flickers the loading flag
    assert!(!h.store.select(selectors::auth_loading));
}

#[tokio::test]
async fn session_restore_without_a_record_falls_back_to_logout() {
    let h = harness().await;
    h.store.dispatch(AuthAction::LoadCurrentUser);

    let navigator = h.navigator.clone();
    eventually(move || navigator.last().as_deref() == Some("/login")).await;
    assert!(!h.store.select(selectors::is_authenticated));
}

#[tokio::test]
async fn concurrent_identical_requests_are_each_fulfilled() {
    let h = harness().await;
    h.store.dispatch(FormBuilderAction::LoadTemplates);
    h.store.dispatch(FormBuilderAction::LoadTemplates);

    wait_for(&h.store, |s| {
        !s.form_builder.is_loading && !s.form_builder.templates.is_empty()
    })
    .await;
    assert_eq!(h.store.select(selectors::all_templates).len(), 1);
}
