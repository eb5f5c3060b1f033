//! Demo shell for the FormKit core.
//!
//! Wires the store, effects, and mock backends together, then walks the
//! primary flows end to end: session restore, login, template listing,
//! and filling + submitting the seeded contact form. All domain logic
//! lives in the library crates; this binary is host wiring only.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use formkit_backend::{MockAuthBackend, MockFormBackend, MockLatency};
use formkit_builder::BuilderSession;
use formkit_form::{FormRuntime, RendererConfig, SubmitOutcome};
use formkit_model::{AppState, FieldType, FieldValue, TemplateDraft};
use formkit_platform::{MemoryStorage, Navigator, Notifier};
use formkit_store::{selectors, AuthAction, AuthEffects, FormBuilderAction, FormBuilderEffects, Store};

#[derive(Parser)]
#[command(name = "formkit", about = "FormKit demo shell")]
struct Args {
    /// Artificial backend latency in milliseconds
    #[arg(long, default_value_t = 100)]
    latency_ms: u64,

    /// Login name (try `user`, or a wrong password, to see failures)
    #[arg(long, default_value = "admin")]
    username: String,

    /// Password (`password` for every mock user)
    #[arg(long, default_value = "password")]
    password: String,
}

/// Navigator printing route changes to stdout.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, path: &str) {
        println!("  -> navigate {path}");
    }
}

/// Notifier printing toasts to stdout.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&self, message: &str, _action_label: &str, _duration: Duration) {
        println!("  [toast] {message}");
    }
}

/// Wait until the state satisfies `pred`.
async fn settle(store: &Store, what: &str, pred: impl Fn(&AppState) -> bool) -> Result<()> {
    let mut rx = store.subscribe();
    let waited = tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            let done = pred(&rx.borrow_and_update());
            if done {
                break;
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
    })
    .await;
    if waited.is_err() {
        bail!("timed out waiting for {what}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let latency = MockLatency::uniform(Duration::from_millis(args.latency_ms));

    let storage = Arc::new(MemoryStorage::new());
    let store = Arc::new(Store::new());
    AuthEffects::new(
        store.clone(),
        Arc::new(MockAuthBackend::new(storage).with_latency(latency)),
        Arc::new(ConsoleNavigator),
    )
    .spawn();
    FormBuilderEffects::new(
        store.clone(),
        Arc::new(MockFormBackend::new().with_latency(latency)),
    )
    .spawn();

    println!("session restore:");
    store.dispatch(AuthAction::LoadCurrentUser);
    // no persisted record on a cold start: the restore chain ends in a
    // logout; give it time to finish before logging in
    tokio::time::sleep(Duration::from_millis(200)).await;
    println!(
        "  restored: {}",
        if store.select(selectors::is_authenticated) { "signed in" } else { "signed out" }
    );

    println!("login as {:?}:", args.username);
    store.dispatch(AuthAction::Login {
        username: args.username,
        password: args.password,
    });
    settle(&store, "login", |s| {
        s.auth.is_authenticated || s.auth.error.is_some()
    })
    .await?;
    if let Some(error) = store.select(selectors::auth_error) {
        bail!("login failed: {error}");
    }
    let user = store
        .select(selectors::current_user)
        .context("authenticated without a user")?;
    println!("  signed in as {} ({:?})", user.username, user.role);

    println!("load templates:");
    store.dispatch(FormBuilderAction::LoadTemplates);
    settle(&store, "template list", |s| {
        !s.form_builder.templates.is_empty()
    })
    .await?;
    for template in store.select(selectors::all_templates) {
        println!(
            "  {} \"{}\" ({} fields)",
            template.id,
            template.name,
            template.fields.len()
        );
    }

    println!("compose a feedback template:");
    let mut session = BuilderSession::new(store.clone());
    session.add_field(FieldType::Text);
    session.add_field(FieldType::Textarea);
    session.insert_from_palette(FieldType::Select, 1);
    let draft = TemplateDraft {
        name: "Feedback".to_string(),
        description: Some("Composed by the demo shell".to_string()),
        fields: session.fields().to_vec(),
        created_by: user.id.clone(),
        is_active: true,
    };
    store.dispatch(FormBuilderAction::CreateTemplate { draft });
    settle(&store, "template creation", |s| s.form_builder.templates.len() > 1).await?;
    let created = store
        .select(selectors::current_template)
        .context("created template not selected")?;
    println!(
        "  created \"{}\" ({} fields, orders {:?})",
        created.name,
        created.fields.len(),
        created.fields.iter().map(|f| f.order).collect::<Vec<_>>()
    );

    println!("fill and submit the contact form:");
    let template = store
        .select(|s| selectors::template_by_id(s, "1").cloned())
        .context("seeded template missing")?;
    let mut runtime = FormRuntime::compile(&template, None, true)?
        .with_config(RendererConfig::immediate())
        .with_navigator(Arc::new(ConsoleNavigator))
        .with_notifier(Arc::new(ConsoleNotifier));
    runtime.set_value("field1", FieldValue::Text("Ada Lovelace".into()));
    runtime.set_value("field3", FieldValue::Text("Hello from the demo shell".into()));

    match runtime.submit().await {
        SubmitOutcome::Submitted(data) => {
            store.dispatch(FormBuilderAction::SubmitForm {
                template_id: template.id.clone(),
                data,
                submitted_by: Some(user.id),
            });
            settle(&store, "submission", |s| !s.form_builder.submissions.is_empty()).await?;
            let submissions = store.select(selectors::all_submissions);
            println!(
                "  recorded submission {} against \"{}\"",
                submissions[0].id, submissions[0].form_template_name
            );
        }
        SubmitOutcome::Invalid { errors } => {
            for (field_id, message) in errors {
                println!("  {field_id}: {message}");
            }
            bail!("submission rejected by validation");
        }
    }

    println!("done");
    Ok(())
}
