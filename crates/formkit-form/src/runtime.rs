//! The compiled form: values, validity, and the submit flow.

use std::sync::Arc;
use std::time::Duration;

use formkit_model::{FieldValue, FormTemplate, SubmissionData};
use formkit_platform::{Navigator, NoopNavigator, NoopNotifier, Notifier};
use indexmap::IndexMap;

use crate::control::FormControl;
use crate::error::FormRuntimeError;

/// Route taken after a successful submit or a cancel.
const EXIT_ROUTE: &str = "/dashboard";

/// How long the failure toast stays up.
const ERROR_TOAST: Duration = Duration::from_millis(3000);

/// How long the success toast stays up.
const SUCCESS_TOAST: Duration = Duration::from_millis(4000);

/// Renderer tuning.
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    /// Pause between the success toast and the exit navigation. Purely
    /// cosmetic; zero is valid and is what tests use.
    pub redirect_delay: Duration,
}

impl RendererConfig {
    /// Config with no redirect pause.
    #[inline]
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            redirect_delay: Duration::ZERO,
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            redirect_delay: Duration::from_millis(1500),
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every control valid; the data map was emitted exactly once
    Submitted(SubmissionData),
    /// At least one control invalid; nothing was emitted
    Invalid {
        /// Field id to rendered message, in display order
        errors: Vec<(String, String)>,
    },
}

/// A template compiled into live, validated controls.
///
/// Controls keep the template's display order. Reading values back out
/// yields a `{field id: value}` map covering the enabled controls.
pub struct FormRuntime {
    template_name: String,
    controls: IndexMap<String, FormControl>,
    config: RendererConfig,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl FormRuntime {
    /// Compile `template` into a runtime form.
    ///
    /// Each field resolves its initial value as provided data, else the
    /// field default, else null; a field is enabled only when
    /// `is_editable` and the field itself is not disabled.
    ///
    /// # Errors
    /// [`FormRuntimeError::InvalidPattern`] when a field carries a
    /// pattern rule that does not compile.
    pub fn compile(
        template: &FormTemplate,
        provided: Option<&SubmissionData>,
        is_editable: bool,
    ) -> Result<Self, FormRuntimeError> {
        let mut controls = IndexMap::with_capacity(template.fields.len());
        for field in &template.fields {
            let initial = provided.and_then(|data| data.get(&field.id));
            let control = FormControl::compile(field, initial, is_editable)?;
            controls.insert(field.id.clone(), control);
        }
        tracing::debug!(template = %template.name, controls = controls.len(), "form compiled");
        Ok(Self {
            template_name: template.name.clone(),
            controls,
            config: RendererConfig::default(),
            notifier: Arc::new(NoopNotifier),
            navigator: Arc::new(NoopNavigator),
        })
    }

    /// Replace the notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replace the navigator.
    #[must_use]
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Replace the tuning.
    #[must_use]
    pub fn with_config(mut self, config: RendererConfig) -> Self {
        self.config = config;
        self
    }

    /// The control for `field_id`, when the template has that field.
    #[must_use]
    pub fn control(&self, field_id: &str) -> Option<&FormControl> {
        self.controls.get(field_id)
    }

    /// Controls in display order.
    pub fn controls(&self) -> impl Iterator<Item = &FormControl> {
        self.controls.values()
    }

    /// Set a control's value. Returns false for unknown field ids.
    pub fn set_value(&mut self, field_id: &str, value: FieldValue) -> bool {
        match self.controls.get_mut(field_id) {
            Some(control) => {
                control.set_value(value);
                true
            }
            None => {
                tracing::debug!(field_id, "set_value ignored: unknown field");
                false
            }
        }
    }

    /// Whether every enabled control passes its checks.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.controls.values().all(FormControl::is_valid)
    }

    /// The `{field id: value}` map over enabled controls.
    #[must_use]
    pub fn values(&self) -> SubmissionData {
        self.controls
            .values()
            .filter(|control| !control.is_disabled())
            .map(|control| (control.field_id().to_string(), control.value().clone()))
            .collect()
    }

    /// Mark every control touched so per-field errors render.
    pub fn mark_all_touched(&mut self) {
        for control in self.controls.values_mut() {
            control.touch();
        }
    }

    /// Field id to rendered message for every invalid enabled control.
    #[must_use]
    pub fn field_errors(&self) -> Vec<(String, String)> {
        self.controls
            .values()
            .filter_map(|control| {
                control
                    .error_message()
                    .map(|message| (control.field_id().to_string(), message))
            })
            .collect()
    }

    /// Attempt submission.
    ///
    /// Invalid: every control is marked touched, one aggregate failure
    /// toast is shown, and no data is emitted. Valid: the data map is
    /// emitted exactly once, a success toast names the template, and
    /// after the configured cosmetic delay the runtime navigates away.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.is_valid() {
            self.mark_all_touched();
            self.notifier
                .show("Please fix the errors in the form", "Close", ERROR_TOAST);
            return SubmitOutcome::Invalid {
                errors: self.field_errors(),
            };
        }

        let data = self.values();
        self.notifier.show(
            &format!(
                "{} submitted successfully! Redirecting to dashboard...",
                self.template_name
            ),
            "Close",
            SUCCESS_TOAST,
        );
        if !self.config.redirect_delay.is_zero() {
            tokio::time::sleep(self.config.redirect_delay).await;
        }
        self.navigator.navigate_to(EXIT_ROUTE);
        SubmitOutcome::Submitted(data)
    }

    /// Abandon the form and navigate away immediately.
    pub fn cancel(&self) {
        self.navigator.navigate_to(EXIT_ROUTE);
    }
}
