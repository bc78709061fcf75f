use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::form::form_model::{FieldType, RuleKind};
use crate::schema::checks;

/// A candidate input record: field id to submitted value.
pub type Record = serde_json::Map<String, Value>;

/// The compiled form of a component list: one validator per field in
/// component order, plus any issues surfaced while compiling rules.
///
/// Issues never abort compilation: the offending rule is skipped and
/// recorded here, and every other rule and field stays enforceable.
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    fields: Vec<FieldValidator>,
    issues: Vec<CompileIssue>,
}

impl CompiledSchema {
    pub fn new(fields: Vec<FieldValidator>, issues: Vec<CompileIssue>) -> Self {
        CompiledSchema { fields, issues }
    }

    pub fn fields(&self) -> &[FieldValidator] {
        &self.fields
    }

    /// Per-field lookup, the mapping half of the validator contract.
    pub fn field(&self, id: &str) -> Option<&FieldValidator> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Rules that were skipped during compilation, attributed to their
    /// component and rule index.
    pub fn issues(&self) -> &[CompileIssue] {
        &self.issues
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Check a whole record. Every field is checked independently; all
    /// violations for a field surface together, in rule order.
    pub fn validate(&self, record: &Record) -> ValidationOutcome {
        let mut errors = BTreeMap::new();

        for field in &self.fields {
            let violations = field.check(record.get(&field.id));
            if !violations.is_empty() {
                errors.insert(field.id.clone(), violations);
            }
        }

        ValidationOutcome {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Result of checking one record against a compiled schema. Validation
/// failures are expected outcomes, never errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationOutcome {
    pub valid: bool,

    /// Field id to violation messages, in rule order per field
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationOutcome {
    pub fn field_errors(&self, id: &str) -> &[String] {
        self.errors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

/// The checking function for one field.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    pub id: String,
    pub field_type: FieldType,
    pub required: bool,

    /// Message for the presence violation; a `required` rule overrides
    /// the built-in default
    pub required_message: Option<String>,

    /// Allowed values for select/radio fields
    pub options: Vec<String>,

    /// Compiled extra rules, in listed order
    pub rules: Vec<CompiledRule>,
}

impl FieldValidator {
    /// Check one submitted value. Returns the violation messages, empty
    /// when the value passes.
    ///
    /// Absent + optional passes with no checks run. Absent + required is
    /// exactly the presence violation. Present values get the base type
    /// check and then every rule, accumulating without short-circuit.
    pub fn check(&self, value: Option<&Value>) -> Vec<String> {
        let mut violations = Vec::new();

        match value {
            Some(value) if checks::is_present(self.field_type, value) => {
                if let Some(message) = checks::base_check(self.field_type, &self.options, value) {
                    violations.push(message);
                }

                for rule in &self.rules {
                    if !rule.check.passes(value) {
                        violations.push(rule.message.clone());
                    }
                }
            }
            _ => {
                if self.required {
                    violations.push(
                        self.required_message
                            .clone()
                            .unwrap_or_else(|| checks::REQUIRED_MESSAGE.to_string()),
                    );
                }
            }
        }

        violations
    }
}

/// One compiled rule: the executable check plus the message to append
/// when it fails.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Position in the component's `validation` list
    pub index: usize,
    pub message: String,
    pub check: RuleCheck,
}

/// Executable form of a rule. Min/max are already dispatched on the
/// component's declared type: value bounds for number fields, length
/// bounds for everything else.
#[derive(Debug, Clone)]
pub enum RuleCheck {
    MinValue(f64),
    MaxValue(f64),
    MinLength(usize),
    MaxLength(usize),
    Pattern(Regex),
}

impl RuleCheck {
    /// Whether the value passes this rule. Values of the wrong runtime
    /// shape pass here; the base type check already reported them, and
    /// a rule must not duplicate that violation.
    pub fn passes(&self, value: &Value) -> bool {
        match self {
            RuleCheck::MinValue(bound) => match checks::numeric_value(value) {
                Some(n) => n >= *bound,
                None => true,
            },
            RuleCheck::MaxValue(bound) => match checks::numeric_value(value) {
                Some(n) => n <= *bound,
                None => true,
            },
            RuleCheck::MinLength(bound) => match value.as_str() {
                Some(s) => s.chars().count() >= *bound,
                None => true,
            },
            RuleCheck::MaxLength(bound) => match value.as_str() {
                Some(s) => s.chars().count() <= *bound,
                None => true,
            },
            RuleCheck::Pattern(regex) => match value.as_str() {
                Some(s) => regex.is_match(s),
                None => true,
            },
        }
    }
}

/// A rule the compiler had to skip, attributed to its component and
/// position. Surfaced on the schema; never silent.
#[derive(Debug, Clone)]
pub enum CompileIssue {
    /// Pattern rule whose value does not compile as a regex
    InvalidPattern {
        component_id: String,
        rule_index: usize,
        source: regex::Error,
    },

    /// Min/max/pattern rule with a missing or wrong-shaped value
    BadRuleValue {
        component_id: String,
        rule_index: usize,
        kind: RuleKind,
    },

    /// Rule kind the core cannot execute (custom)
    UnsupportedRule {
        component_id: String,
        rule_index: usize,
        kind: RuleKind,
    },
}

impl CompileIssue {
    pub fn component_id(&self) -> &str {
        match self {
            CompileIssue::InvalidPattern { component_id, .. }
            | CompileIssue::BadRuleValue { component_id, .. }
            | CompileIssue::UnsupportedRule { component_id, .. } => component_id,
        }
    }

    pub fn rule_index(&self) -> usize {
        match self {
            CompileIssue::InvalidPattern { rule_index, .. }
            | CompileIssue::BadRuleValue { rule_index, .. }
            | CompileIssue::UnsupportedRule { rule_index, .. } => *rule_index,
        }
    }
}

impl fmt::Display for CompileIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileIssue::InvalidPattern {
                component_id,
                rule_index,
                source,
            } => {
                write!(
                    f,
                    "Component '{}' rule {}: invalid pattern ({})",
                    component_id, rule_index, source
                )
            }
            CompileIssue::BadRuleValue {
                component_id,
                rule_index,
                kind,
            } => {
                write!(
                    f,
                    "Component '{}' rule {}: {:?} rule has a missing or invalid value",
                    component_id, rule_index, kind
                )
            }
            CompileIssue::UnsupportedRule {
                component_id,
                rule_index,
                kind,
            } => {
                write!(
                    f,
                    "Component '{}' rule {}: {:?} rules are not executable",
                    component_id, rule_index, kind
                )
            }
        }
    }
}
