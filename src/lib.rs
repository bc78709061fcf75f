pub mod cli;
pub mod form;
pub mod history;
pub mod report;
pub mod schema;
pub mod session;
pub mod trace;

pub use crate::form::codec::{ImportReport, export_components, import_components};
pub use crate::form::error::{CodecError, ModelError};
pub use crate::form::form_model::{
    Condition, ConditionOperator, FieldType, FormComponent, RuleKind, ValidationRule, WidthHint,
};
pub use crate::history::timeline::History;
pub use crate::schema::compiler::compile;
pub use crate::schema::schema_model::{
    CompileIssue, CompiledSchema, FieldValidator, Record, ValidationOutcome,
};
pub use crate::session::session::FormSession;
