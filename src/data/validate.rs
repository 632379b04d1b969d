//! Pre-flight consistency checks between the roster and the type chart.
//!
//! These are reported, not enforced: the search still fails at the first
//! evaluation that hits an unknown type.

use std::collections::BTreeSet;
use std::fmt;

use crate::data::creature::Roster;
use crate::data::type_chart::TypeAdvantageIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

pub fn validate_search_inputs(
    roster: &Roster,
    index: &TypeAdvantageIndex,
    team_size: usize,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if roster.len() < team_size {
        report.push(
            ValidationSeverity::Warning,
            "roster",
            format!(
                "{} creature(s) cannot fill a team of {team_size}; nothing will be evaluated",
                roster.len()
            ),
        );
    }

    for creature in roster.creatures() {
        for type_name in creature.types() {
            if !index.contains(type_name) {
                report.push(
                    ValidationSeverity::Error,
                    creature.name.as_str(),
                    format!("type '{type_name}' is not in the type chart"),
                );
            }
        }
    }

    let mut unknown_targets = BTreeSet::new();
    for type_name in index.type_names() {
        let Ok(advantages) = index.advantages_of(type_name) else {
            continue;
        };
        for target in advantages {
            if !index.contains(target) && unknown_targets.insert(target.as_str()) {
                report.push(
                    ValidationSeverity::Warning,
                    type_name.as_str(),
                    format!("advantage target '{target}' is not itself a charted type"),
                );
            }
        }
    }

    report
}
