use regex::Regex;

use crate::form::form_model::{FieldType, FormComponent, RuleKind};
use crate::schema::checks;
use crate::schema::schema_model::{
    CompileIssue, CompiledRule, CompiledSchema, FieldValidator, RuleCheck,
};

/// Compile an ordered component list into a schema.
///
/// Pure and deterministic: deep-equal inputs compile to behaviorally
/// identical schemas, so callers can memoize on a structural fingerprint
/// instead of recompiling on every keystroke.
///
/// Rules the compiler cannot execute (invalid pattern, missing or
/// wrong-shaped value, custom) are skipped and surfaced as issues on the
/// schema; the remaining rules and components compile normally.
pub fn compile(components: &[FormComponent]) -> CompiledSchema {
    let mut fields = Vec::with_capacity(components.len());
    let mut issues = Vec::new();

    for component in components {
        fields.push(compile_field(component, &mut issues));
    }

    CompiledSchema::new(fields, issues)
}

fn compile_field(component: &FormComponent, issues: &mut Vec<CompileIssue>) -> FieldValidator {
    let mut required = component.required;
    let mut required_message = None;
    let mut rules = Vec::new();

    for (index, rule) in component.validation.iter().enumerate() {
        match rule.kind {
            // A required rule forces presence and supplies the message
            RuleKind::Required => {
                required = true;
                required_message = Some(rule.message.clone());
            }

            RuleKind::Min | RuleKind::Max => {
                let bound = rule.value.as_ref().and_then(checks::numeric_value);
                match bound {
                    Some(bound) => rules.push(CompiledRule {
                        index,
                        message: rule.message.clone(),
                        check: bound_check(rule.kind, component.field_type, bound),
                    }),
                    None => issues.push(CompileIssue::BadRuleValue {
                        component_id: component.id.clone(),
                        rule_index: index,
                        kind: rule.kind,
                    }),
                }
            }

            RuleKind::Pattern => {
                let source = rule.value.as_ref().and_then(|v| v.as_str());
                match source {
                    Some(source) => match Regex::new(source) {
                        Ok(regex) => rules.push(CompiledRule {
                            index,
                            message: rule.message.clone(),
                            check: RuleCheck::Pattern(regex),
                        }),
                        Err(source) => issues.push(CompileIssue::InvalidPattern {
                            component_id: component.id.clone(),
                            rule_index: index,
                            source,
                        }),
                    },
                    None => issues.push(CompileIssue::BadRuleValue {
                        component_id: component.id.clone(),
                        rule_index: index,
                        kind: rule.kind,
                    }),
                }
            }

            RuleKind::Custom => issues.push(CompileIssue::UnsupportedRule {
                component_id: component.id.clone(),
                rule_index: index,
                kind: rule.kind,
            }),
        }
    }

    FieldValidator {
        id: component.id.clone(),
        field_type: component.field_type,
        required,
        required_message,
        options: component.options.clone(),
        rules,
    }
}

/// Min/max dispatch on the declared type: value bound for number fields,
/// string-length bound for everything else. Runtime values never change
/// which check runs.
fn bound_check(kind: RuleKind, field_type: FieldType, bound: f64) -> RuleCheck {
    let numeric = field_type == FieldType::Number;

    match (kind, numeric) {
        (RuleKind::Min, true) => RuleCheck::MinValue(bound),
        (RuleKind::Max, true) => RuleCheck::MaxValue(bound),
        (RuleKind::Min, false) => RuleCheck::MinLength(bound.max(0.0) as usize),
        _ => RuleCheck::MaxLength(bound.max(0.0) as usize),
    }
}
