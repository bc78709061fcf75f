use crate::form::codec::{self, ImportReport};
use crate::form::error::{CodecError, ModelError};
use crate::form::form_model::FormComponent;
use crate::form::model_check::{check_component, check_form};
use crate::history::timeline::History;
use crate::schema::compiler::compile;
use crate::schema::schema_model::{CompiledSchema, Record, ValidationOutcome};
use crate::session::fingerprint::component_fingerprint;
use crate::trace::event::SessionEvent;
use crate::trace::logger::TraceLogger;

/// A single-owner editing session over one form.
///
/// All mutations flow through the history engine (the sole point where
/// history grows); the compiled schema is cached against the component
/// list's fingerprint and recompiled lazily on first validate after a
/// structural change.
pub struct FormSession {
    history: History<Vec<FormComponent>>,
    components: Vec<FormComponent>,
    cache: Option<SchemaCache>,
    tracer: Option<TraceLogger>,
}

struct SchemaCache {
    signature: String,
    schema: CompiledSchema,
}

impl FormSession {
    /// Fresh session over an empty form.
    pub fn new() -> Self {
        FormSession {
            history: History::new(vec![]),
            components: vec![],
            cache: None,
            tracer: None,
        }
    }

    /// Attach a JSONL trace logger; every mutation, undo/redo, compile,
    /// and validation run is logged.
    pub fn with_trace(mut self, tracer: TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn components(&self) -> &[FormComponent] {
        &self.components
    }

    /// Fingerprint of the current component list.
    pub fn signature(&self) -> String {
        component_fingerprint(&self.components)
    }

    // ------------------------------------------------------------------
    // Mutations (each commits exactly one history snapshot)
    // ------------------------------------------------------------------

    /// Append a component. Rejects malformed components and duplicate
    /// ids without touching history.
    pub fn add(&mut self, component: FormComponent) -> Result<(), ModelError> {
        check_component(&component)?;

        if self.components.iter().any(|c| c.id == component.id) {
            return Err(ModelError::DuplicateId {
                id: component.id.clone(),
            });
        }

        let id = component.id.clone();
        let mut next = self.components.clone();
        next.push(component);
        self.commit(next);
        self.trace(SessionEvent::now("component_added").with_component(&id));
        Ok(())
    }

    /// Remove a component by id, returning it. Unknown ids are an error
    /// and commit nothing.
    pub fn remove(&mut self, id: &str) -> Result<FormComponent, ModelError> {
        let position = self
            .components
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ModelError::UnknownId { id: id.to_string() })?;

        let mut next = self.components.clone();
        let removed = next.remove(position);
        self.commit(next);
        self.trace(SessionEvent::now("component_removed").with_component(id));
        Ok(removed)
    }

    /// Replace a component in place (renaming allowed, as long as the new
    /// id stays unique). Unknown ids are an error and commit nothing.
    pub fn update(&mut self, id: &str, component: FormComponent) -> Result<(), ModelError> {
        check_component(&component)?;

        let position = self
            .components
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ModelError::UnknownId { id: id.to_string() })?;

        if self
            .components
            .iter()
            .enumerate()
            .any(|(i, c)| i != position && c.id == component.id)
        {
            return Err(ModelError::DuplicateId {
                id: component.id.clone(),
            });
        }

        let new_id = component.id.clone();
        let mut next = self.components.clone();
        next[position] = component;
        self.commit(next);
        self.trace(SessionEvent::now("component_updated").with_component(&new_id));
        Ok(())
    }

    /// Replace the whole component list as one committed mutation.
    /// Fails on the first model problem without touching history.
    pub fn install(&mut self, components: Vec<FormComponent>) -> Result<(), ModelError> {
        if let Some(first) = check_form(&components).into_iter().next() {
            return Err(first);
        }

        self.commit(components);
        self.trace(SessionEvent::now("import").with_cursor(self.history.cursor()));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Undo / redo
    // ------------------------------------------------------------------

    /// Step back one snapshot; no-op at the oldest state. The schema
    /// cache is dropped unconditionally: the restored list's signature
    /// may differ from the one just discarded.
    pub fn undo(&mut self) -> &[FormComponent] {
        self.components = self.history.undo().clone();
        self.cache = None;
        self.trace(SessionEvent::now("undo").with_cursor(self.history.cursor()));
        &self.components
    }

    /// Step forward one snapshot; no-op at the newest state.
    pub fn redo(&mut self) -> &[FormComponent] {
        self.components = self.history.redo().clone();
        self.cache = None;
        self.trace(SessionEvent::now("redo").with_cursor(self.history.cursor()));
        &self.components
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Validate a record against the current form, reusing the cached
    /// schema when the component list is structurally unchanged.
    pub fn validate(&mut self, record: &Record) -> ValidationOutcome {
        let outcome = self.ensure_compiled().validate(record);
        self.trace(SessionEvent::now("validation_run").with_outcome(&outcome));
        outcome
    }

    /// The compiled schema for the current form, compiling it first if
    /// needed (e.g. to inspect compile issues).
    pub fn schema(&mut self) -> &CompiledSchema {
        self.ensure_compiled()
    }

    fn ensure_compiled(&mut self) -> &CompiledSchema {
        let signature = self.signature();

        let stale = match &self.cache {
            Some(cache) => cache.signature != signature,
            None => true,
        };

        if stale {
            let schema = compile(&self.components);
            self.trace(SessionEvent::now("schema_compiled").with_schema(&signature, &schema));
            self.cache = Some(SchemaCache { signature, schema });
        }

        // Populated just above when missing or stale
        &self.cache.as_ref().unwrap().schema
    }

    // ------------------------------------------------------------------
    // Export / import
    // ------------------------------------------------------------------

    /// The current form as the canonical JSON document.
    pub fn export(&self) -> Result<String, CodecError> {
        codec::export_components(&self.components)
    }

    pub fn export_pretty(&self) -> Result<String, CodecError> {
        codec::export_components_pretty(&self.components)
    }

    /// Import a form document, installing the accepted components as one
    /// committed mutation. Per-component rejections are reported back;
    /// only structurally invalid JSON fails outright.
    pub fn import(&mut self, json: &str) -> Result<ImportReport, CodecError> {
        let report = codec::import_components(json)?;
        self.commit(report.components.clone());
        self.trace(SessionEvent::now("import").with_cursor(self.history.cursor()));
        Ok(report)
    }

    // ------------------------------------------------------------------

    /// The single path every mutation takes: commit the snapshot, mirror
    /// it, and invalidate the cache when the structure actually changed.
    fn commit(&mut self, next: Vec<FormComponent>) {
        self.history.commit(next.clone());
        self.components = next;

        let signature = self.signature();
        if self
            .cache
            .as_ref()
            .is_some_and(|cache| cache.signature != signature)
        {
            self.cache = None;
        }
    }

    fn trace(&self, event: SessionEvent) {
        if let Some(tracer) = &self.tracer {
            tracer.log(&event);
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
