use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use serde::Serialize;
use tracing::{info, info_span};

use foodex_cli::input::{CodeLine, read_codes};
use foodex_model::MemoryCatalogue;
use foodex_rules::{MessageCatalog, RuleBook, RuleSet, WarningEvent};
use foodex_validate::{Engine, EngineConfig, RenderOptions, WarningReport};

use crate::cli::{CheckArgs, EventsArgs, OutputFormatArg};
use crate::summary::{apply_table_style, severity_cell};

/// Outcome of one input code.
#[derive(Debug, Serialize)]
pub struct CodeResult {
    pub line: usize,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<WarningReport>,
    /// Parse failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CodeResult {
    pub fn is_failure(&self) -> bool {
        self.error.is_some() || self.report.as_ref().is_some_and(WarningReport::is_blocking)
    }
}

pub struct CheckResult {
    pub results: Vec<CodeResult>,
    pub format: OutputFormatArg,
}

impl CheckResult {
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(CodeResult::is_failure)
    }
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let span = info_span!("check");
    let _guard = span.enter();

    let catalogue = MemoryCatalogue::load(&args.catalogue)
        .with_context(|| format!("load catalogue {}", args.catalogue.display()))?;
    let (standard, _) = RuleSet::load(&args.rules).context("load forbidden process rules")?;
    let exceptions = match &args.exceptions {
        Some(path) => RuleSet::load(path)
            .context("load forbidden process exceptions")?
            .0,
        None => RuleSet::new(),
    };
    let rules = RuleBook::new(standard, exceptions);
    let messages = load_messages(args.messages.as_deref())?;
    let config = match &args.config {
        Some(path) => EngineConfig::from_path(path).context("load engine configuration")?,
        None => EngineConfig::default(),
    };

    let codes = read_input(args.codes.as_deref())?;
    let engine = Engine::new(&catalogue, &rules, &messages, &config);
    let options = RenderOptions {
        timestamp: args.timestamp,
        batch: matches!(args.format, OutputFormatArg::Json),
    };

    let results: Vec<CodeResult> = codes
        .into_iter()
        .map(|CodeLine { line, code }| match engine.check(&code, options) {
            Ok(report) => CodeResult {
                line,
                code,
                report: Some(report),
                error: None,
            },
            Err(error) => CodeResult {
                line,
                code,
                report: None,
                error: Some(error.to_string()),
            },
        })
        .collect();

    info!(
        codes = results.len(),
        failures = results.iter().filter(|r| r.is_failure()).count(),
        "Checked codes"
    );
    Ok(CheckResult {
        results,
        format: args.format,
    })
}

pub fn run_events(args: &EventsArgs) -> Result<()> {
    let messages = load_messages(args.messages.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Id", "Event", "Indicator", "Text", "Message"]);
    apply_table_style(&mut table);
    for event in WarningEvent::all() {
        let def = messages.resolve(*event);
        table.add_row(vec![
            Cell::new(event.id()),
            Cell::new(event.name()),
            severity_cell(def.indicator),
            severity_cell(def.text),
            Cell::new(&def.template),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_messages(path: Option<&Path>) -> Result<MessageCatalog> {
    match path {
        Some(path) => {
            let (messages, _) = MessageCatalog::load_or_default(path)
                .with_context(|| format!("load message table {}", path.display()))?;
            Ok(messages)
        }
        None => Ok(MessageCatalog::default()),
    }
}

fn read_input(path: Option<&Path>) -> Result<Vec<CodeLine>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file =
                File::open(path).with_context(|| format!("open code list {}", path.display()))?;
            read_codes(BufReader::new(file))
                .with_context(|| format!("read code list {}", path.display()))
        }
        _ => read_codes(io::stdin().lock()).context("read codes from stdin"),
    }
}
