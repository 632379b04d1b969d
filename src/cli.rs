use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::data::creature::{load_roster, DEFAULT_CREATURES_PATH};
use crate::data::normalize::{load_type_normalizer, DEFAULT_TYPE_ALIASES_PATH};
use crate::data::type_chart::{load_type_chart, DEFAULT_TYPES_PATH};
use crate::data::validate::{validate_search_inputs, ValidationReport, ValidationSeverity};
use crate::error::Result;
use crate::output::{JsonlSink, SearchContext, DEFAULT_OUTPUT_PATH};
use crate::search::{SearchConfig, SearchSummary, TeamSearch};

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    pub creatures: PathBuf,
    pub types: PathBuf,
    pub type_aliases: PathBuf,
    pub output: PathBuf,
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self {
            creatures: PathBuf::from(DEFAULT_CREATURES_PATH),
            types: PathBuf::from(DEFAULT_TYPES_PATH),
            type_aliases: PathBuf::from(DEFAULT_TYPE_ALIASES_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl SearchPaths {
    /// The default file names, resolved under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let defaults = Self::default();
        Self {
            creatures: dir.join(defaults.creatures),
            types: dir.join(defaults.types),
            type_aliases: dir.join(defaults.type_aliases),
            output: dir.join(defaults.output),
        }
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    if args.len() > 1 {
        eprintln!(
            "usage: teamcover (reads {DEFAULT_CREATURES_PATH} and {DEFAULT_TYPES_PATH}, appends to {DEFAULT_OUTPUT_PATH})"
        );
        return 2;
    }

    match run_search(&SearchPaths::default(), SearchConfig::default()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("search failed: {err}");
            1
        }
    }
}

/// Load both tables, report diagnostics, then run the search into the output file.
pub fn run_search(paths: &SearchPaths, config: SearchConfig) -> Result<SearchSummary> {
    let normalizer = load_type_normalizer(&paths.type_aliases)?;
    let roster = load_roster(&paths.creatures, &normalizer)?;
    let index = load_type_chart(&paths.types, &normalizer)?;

    log_diagnostics(&validate_search_inputs(&roster, &index, config.team_size));

    let sink = JsonlSink::open(&paths.output)?;
    let mut ctx = SearchContext::new(sink);
    let summary = TeamSearch::with_config(&roster, &index, config).run(&mut ctx)?;
    debug!(
        output = %ctx.sink().path().display(),
        appended = ctx.sink().written(),
        "output released"
    );
    Ok(summary)
}

/// Log each diagnostic; returns whether any would make the search fail.
fn log_diagnostics(report: &ValidationReport) -> bool {
    for diag in &report.diagnostics {
        match diag.severity {
            ValidationSeverity::Error => warn!(context = %diag.context, "{}", diag.message),
            ValidationSeverity::Warning => debug!(context = %diag.context, "{}", diag.message),
        }
    }
    let has_errors = report.has_errors();
    if has_errors {
        warn!("inputs reference uncharted types; the search will stop at the first team using one");
    }
    has_errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_arguments_print_usage() {
        let args = vec!["teamcover".to_string(), "--threshold".to_string()];
        assert_eq!(run_with_args(&args), 2);
    }

    #[test]
    fn paths_resolve_under_directory() {
        let paths = SearchPaths::in_dir("/data");
        assert_eq!(paths.creatures, PathBuf::from("/data/pokemon.csv"));
        assert_eq!(paths.types, PathBuf::from("/data/types.csv"));
        assert_eq!(paths.type_aliases, PathBuf::from("/data/type_aliases.csv"));
        assert_eq!(paths.output, PathBuf::from("/data/file.txt"));
    }

    #[test]
    fn diagnostics_report_whether_the_search_can_fail() {
        let mut report = ValidationReport::default();
        report.push(ValidationSeverity::Warning, "roster", "too small");
        assert!(!log_diagnostics(&report));
        report.push(ValidationSeverity::Error, "Gengar", "type 'Ghost' is not in the type chart");
        assert!(log_diagnostics(&report));
    }

    #[test]
    fn missing_inputs_fail_before_output_is_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = SearchPaths::in_dir(dir.path());
        assert!(run_search(&paths, SearchConfig::default()).is_err());
        assert!(!paths.output.exists());
    }
}
