//! Evaluation pipeline.

use foodex_model::{ClassificationCode, KnowledgeBase};
use foodex_rules::{MessageCatalog, RuleBook, WarningEvent};
use tracing::{debug, debug_span};

use crate::checks;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::report::{RenderOptions, WarningReport, fold};
use crate::resolver::resolve_warn_group;
use crate::subject::Subject;
use crate::warning::RaisedWarning;

/// Evaluate one classification code.
///
/// Raises the base term checks, then, when the code has facets, resolves the
/// warn group and runs the facet and aggregate checks. A code that names a
/// term or facet category missing from the catalogue raises only
/// [`WarningEvent::Error`] with the missing code as data.
pub fn evaluate<K>(
    code: &ClassificationCode,
    kb: &K,
    rules: &RuleBook,
    config: &EngineConfig,
) -> Vec<RaisedWarning>
where
    K: KnowledgeBase + ?Sized,
{
    let span = debug_span!("evaluate", code = %code);
    let _guard = span.enter();

    let subject = match Subject::resolve(code, kb, config) {
        Ok(subject) => subject,
        Err(unknown) => {
            debug!(missing = %unknown.0, "Code not in catalogue");
            return vec![RaisedWarning::new(WarningEvent::Error, unknown.0)];
        }
    };

    let mut warnings = checks::base_term::check(&subject, rules);

    if code.has_facets() {
        let group = resolve_warn_group(&subject.base, kb, rules, &config.reporting_hierarchy);
        warnings.extend(checks::run_facet_checks(&subject, group.as_ref()));
    }

    for warning in &warnings {
        debug!(event = %warning.event, data = warning.data.as_deref(), "Raised");
    }
    warnings
}

/// Catalogue, rules, messages and configuration shared by many evaluations.
///
/// Holds references only; callers that reload rules build a new engine.
#[derive(Debug)]
pub struct Engine<'a, K: ?Sized> {
    kb: &'a K,
    rules: &'a RuleBook,
    messages: &'a MessageCatalog,
    config: &'a EngineConfig,
}

impl<'a, K> Engine<'a, K>
where
    K: KnowledgeBase + ?Sized,
{
    pub fn new(
        kb: &'a K,
        rules: &'a RuleBook,
        messages: &'a MessageCatalog,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            kb,
            rules,
            messages,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        self.config
    }

    pub fn evaluate(&self, code: &ClassificationCode) -> Vec<RaisedWarning> {
        evaluate(code, self.kb, self.rules, self.config)
    }

    /// Parse, evaluate and fold one code string.
    pub fn check(&self, raw: &str, options: RenderOptions) -> Result<WarningReport> {
        let code = ClassificationCode::parse(raw)?;
        let warnings = self.evaluate(&code);
        Ok(fold(&warnings, self.messages, options))
    }
}
