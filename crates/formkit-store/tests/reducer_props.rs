//! Property tests for the form-builder reducer invariants.

use formkit_model::{FieldPatch, FormBuilderState};
use formkit_store::{form_builder_reducer, FormBuilderAction};
use formkit_test_utils::{template_named, text_field};
use proptest::prelude::*;

/// Model of one field-level edit gesture.
#[derive(Debug, Clone)]
enum Edit {
    Add(u8),
    Update(u8),
    Remove(u8),
    ReorderReverse,
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0..16u8).prop_map(Edit::Add),
        (0..16u8).prop_map(Edit::Update),
        (0..16u8).prop_map(Edit::Remove),
        Just(Edit::ReorderReverse),
    ]
}

fn to_action(edit: &Edit, state: &FormBuilderState) -> FormBuilderAction {
    match edit {
        Edit::Add(n) => FormBuilderAction::AddField {
            field: text_field(&format!("f{n}"), "Field"),
        },
        Edit::Update(n) => FormBuilderAction::UpdateField {
            id: format!("f{n}"),
            patch: FieldPatch {
                required: Some(true),
                ..FieldPatch::default()
            },
        },
        Edit::Remove(n) => FormBuilderAction::RemoveField { id: format!("f{n}") },
        Edit::ReorderReverse => {
            let mut fields = state
                .current_template
                .as_ref()
                .map(|t| t.fields.clone())
                .unwrap_or_default();
            fields.reverse();
            FormBuilderAction::ReorderFields { fields }
        }
    }
}

proptest! {
    /// After any field-mutation sequence, the list entry for the current
    /// template's id equals the current template itself.
    #[test]
    fn templates_and_current_never_diverge(edits in proptest::collection::vec(edit_strategy(), 0..24)) {
        let template = template_named("t1", "Contact Form");
        let mut state = FormBuilderState {
            templates: vec![template.clone()],
            current_template: Some(template),
            ..FormBuilderState::default()
        };

        for edit in &edits {
            let action = to_action(edit, &state);
            state = form_builder_reducer(&state, &action);

            let current = state.current_template.as_ref().unwrap();
            let listed = state.templates.iter().find(|t| t.id == current.id).unwrap();
            prop_assert_eq!(listed, current);
        }
    }

    /// Reducers are idempotent for id-keyed removals: removing an absent
    /// id is a no-op.
    #[test]
    fn remove_is_idempotent(edits in proptest::collection::vec(edit_strategy(), 0..12), n in 0..16u8) {
        let template = template_named("t1", "Contact Form");
        let mut state = FormBuilderState {
            templates: vec![template.clone()],
            current_template: Some(template),
            ..FormBuilderState::default()
        };
        for edit in &edits {
            let action = to_action(edit, &state);
            state = form_builder_reducer(&state, &action);
        }

        let remove = FormBuilderAction::RemoveField { id: format!("f{n}") };
        let once = form_builder_reducer(&state, &remove);
        let twice = form_builder_reducer(&once, &remove);
        prop_assert_eq!(once, twice);
    }
}
