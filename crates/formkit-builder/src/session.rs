//! The editing session: a draft field list plus selection tracking.

use std::sync::Arc;

use formkit_model::{FieldPatch, FieldType, FormField};
use formkit_store::{FormBuilderAction, Store};

use crate::defaults;

/// Callback receiving the full draft after every mutation.
pub type FieldListSink = Box<dyn FnMut(&[FormField]) + Send>;

/// One form-editing session.
///
/// Owns the draft ordered field list, independent of store state: the
/// two may diverge during a single edit gesture and are reconciled by
/// the session emitting its list upward. Each mutating operation
/// dispatches the matching store action, then updates the draft, then
/// synchronously hands the full list to the sink.
pub struct BuilderSession {
    fields: Vec<FormField>,
    selected: Option<String>,
    store: Arc<Store>,
    sink: Option<FieldListSink>,
}

impl BuilderSession {
    /// Empty session against `store`.
    #[must_use]
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            fields: Vec::new(),
            selected: None,
            store,
            sink: None,
        }
    }

    /// Session seeded with an existing template's fields.
    #[must_use]
    pub fn with_fields(store: Arc<Store>, fields: Vec<FormField>) -> Self {
        Self {
            fields,
            selected: None,
            store,
            sink: None,
        }
    }

    /// Attach the parent sink.
    #[must_use]
    pub fn on_fields_changed(mut self, sink: FieldListSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The draft, in display order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// The field whose properties are being edited, when any.
    #[must_use]
    pub fn selected_field(&self) -> Option<&FormField> {
        let id = self.selected.as_deref()?;
        self.fields.iter().find(|f| f.id == id)
    }

    /// Append a fresh field of `field_type` and select it.
    pub fn add_field(&mut self, field_type: FieldType) -> FormField {
        let field = defaults::new_field(field_type, self.fields.len() as u32 + 1);
        self.store.dispatch(FormBuilderAction::AddField {
            field: field.clone(),
        });
        self.fields.push(field.clone());
        self.selected = Some(field.id.clone());
        self.emit();
        field
    }

    /// Drop a fresh field of `field_type` at `index` and select it.
    ///
    /// Distinguished from [`reorder`](Self::reorder) by the source of
    /// the drag gesture (palette vs existing-field list), not by
    /// payload shape.
    pub fn insert_from_palette(&mut self, field_type: FieldType, index: usize) -> FormField {
        let field = defaults::new_field(field_type, self.fields.len() as u32 + 1);
        let index = index.min(self.fields.len());
        self.fields.insert(index, field.clone());
        self.renumber();
        self.store.dispatch(FormBuilderAction::AddField {
            field: field.clone(),
        });
        self.selected = Some(field.id.clone());
        self.emit();
        field
    }

    /// Move the field at `from` to `to` and renumber.
    ///
    /// No-op when the position does not change or `from` is out of
    /// bounds; `to` clamps to the end of the list.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.fields.len() {
            return;
        }
        let to = to.min(self.fields.len() - 1);
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        self.renumber();
        self.store.dispatch(FormBuilderAction::ReorderFields {
            fields: self.fields.clone(),
        });
        self.emit();
    }

    /// Replace a field wholesale (property-panel edit) and select it.
    ///
    /// Unknown ids leave the draft untouched apart from the selection.
    pub fn update_field(&mut self, updated: FormField) {
        self.store.dispatch(FormBuilderAction::UpdateField {
            id: updated.id.clone(),
            patch: FieldPatch::from(&updated),
        });
        if let Some(existing) = self.fields.iter_mut().find(|f| f.id == updated.id) {
            *existing = updated.clone();
        }
        self.selected = Some(updated.id);
        self.emit();
    }

    /// Remove a field by id, clearing the selection if it pointed there.
    pub fn remove_field(&mut self, id: &str) {
        self.store.dispatch(FormBuilderAction::RemoveField { id: id.to_string() });
        self.fields.retain(|f| f.id != id);
        self.renumber();
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.emit();
    }

    /// Show `id` in the properties panel.
    pub fn select(&mut self, id: &str) {
        if self.fields.iter().any(|f| f.id == id) {
            self.selected = Some(id.to_string());
        } else {
            tracing::debug!(id, "select ignored: unknown field");
        }
    }

    /// Clear the properties panel.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Recompute every `order` as 1 + array index.
    fn renumber(&mut self) {
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.order = index as u32 + 1;
        }
    }

    fn emit(&mut self) {
        if let Some(sink) = &mut self.sink {
            sink(&self.fields);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_store::selectors;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn session() -> BuilderSession {
        BuilderSession::new(Arc::new(Store::new()))
    }

    fn orders(session: &BuilderSession) -> Vec<u32> {
        session.fields().iter().map(|f| f.order).collect()
    }

    #[test]
    fn add_field_appends_selects_and_numbers() {
        let mut session = session();
        let field = session.add_field(FieldType::Text);
        assert_eq!(session.fields().len(), 1);
        assert_eq!(field.order, 1);
        assert_eq!(session.selected_field().map(|f| f.id.clone()), Some(field.id));
    }

    #[test]
    fn drop_from_palette_inserts_at_position() {
        let mut session = session();
        session.add_field(FieldType::Text);
        session.add_field(FieldType::Date);

        let dropped = session.insert_from_palette(FieldType::Select, 1);
        assert_eq!(session.fields().len(), 3);
        assert_eq!(session.fields()[1].id, dropped.id);
        assert_eq!(session.fields()[1].field_type, FieldType::Select);
        assert_eq!(session.fields()[1].options.len(), 3);
        assert_eq!(orders(&session), vec![1, 2, 3]);
    }

    #[test]
    fn palette_drop_index_clamps_to_end() {
        let mut session = session();
        session.add_field(FieldType::Text);
        session.insert_from_palette(FieldType::Checkbox, 99);
        assert_eq!(session.fields()[1].field_type, FieldType::Checkbox);
        assert_eq!(orders(&session), vec![1, 2]);
    }

    #[test]
    fn reorder_moves_and_renumbers() {
        let mut session = session();
        let a = session.add_field(FieldType::Text);
        let b = session.add_field(FieldType::Date);
        let c = session.add_field(FieldType::Checkbox);

        session.reorder(0, 2);
        let ids: Vec<&str> = session.fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec![b.id.as_str(), c.id.as_str(), a.id.as_str()]);
        assert_eq!(orders(&session), vec![1, 2, 3]);
    }

    #[test]
    fn reorder_to_same_position_is_a_noop() {
        let mut session = session();
        session.add_field(FieldType::Text);
        session.add_field(FieldType::Date);
        let before: Vec<String> = session.fields().iter().map(|f| f.id.clone()).collect();
        session.reorder(1, 1);
        let after: Vec<String> = session.fields().iter().map(|f| f.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn removing_the_selected_field_clears_selection() {
        let mut session = session();
        let field = session.add_field(FieldType::Text);
        session.add_field(FieldType::Date);
        session.select(&field.id);

        session.remove_field(&field.id);
        assert!(session.selected_field().is_none());
        assert_eq!(session.fields().len(), 1);
        assert_eq!(orders(&session), vec![1]);
    }

    #[test]
    fn removing_another_field_keeps_selection() {
        let mut session = session();
        let keep = session.add_field(FieldType::Text);
        let drop = session.add_field(FieldType::Date);
        session.select(&keep.id);

        session.remove_field(&drop.id);
        assert_eq!(session.selected_field().map(|f| f.id.clone()), Some(keep.id));
    }

    #[test]
    fn every_mutation_emits_the_full_list() {
        let emissions = Arc::new(AtomicUsize::new(0));
        let counter = emissions.clone();
        let mut session = BuilderSession::new(Arc::new(Store::new())).on_fields_changed(Box::new(
            move |fields| {
                counter.fetch_add(1, Ordering::SeqCst);
                // the sink always sees a contiguous ordering
                for (index, field) in fields.iter().enumerate() {
                    assert_eq!(field.order as usize, index + 1);
                }
            },
        ));

        let field = session.add_field(FieldType::Text);
        session.insert_from_palette(FieldType::Select, 0);
        session.reorder(0, 1);
        session.remove_field(&field.id);
        assert_eq!(emissions.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn mutations_notify_the_store() {
        let store = Arc::new(Store::new());
        // give the store a current template so dispatches land
        store.dispatch(formkit_store::FormBuilderAction::LoadTemplateSuccess {
            template: formkit_test_utils::template_named("t1", "Contact Form"),
        });

        let mut session = BuilderSession::new(store.clone());
        session.add_field(FieldType::Text);
        assert_eq!(store.select(selectors::current_template_fields).len(), 1);
    }

    #[test]
    fn update_field_replaces_by_id() {
        let mut session = session();
        let mut field = session.add_field(FieldType::Text);
        field.label = "Company".to_string();
        field.required = true;
        session.update_field(field.clone());
        assert_eq!(session.fields()[0].label, "Company");
        assert!(session.fields()[0].required);
    }
}
