//! Warning message catalog.
//!
//! Source format: a header line, then rows of
//! `messageId;triggerDescription;text;semaphoreLevel;textLevel`, where the
//! levels are `HIGH`, `LOW` or `NONE` (any case). `messageId` is the
//! [`WarningEvent::id`] the row describes; rows may appear in any order.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, RuleLoadError};
use crate::event::WarningEvent;
use crate::loader::{self, LoadSummary, RowRejected};
use crate::severity::Severity;

const FIELD_COUNT: usize = 5;

/// Message template and severities for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageDef {
    pub event: WarningEvent,
    /// What triggers the event, for documentation only.
    pub trigger: String,
    pub template: String,
    /// Indicator-light severity.
    pub indicator: Severity,
    /// Message emphasis severity.
    pub text: Severity,
}

impl MessageDef {
    /// Built-in definition of `event`.
    pub fn builtin(event: WarningEvent) -> Self {
        let (trigger, template, indicator, text) = match event {
            WarningEvent::HierarchyBaseTerm => (
                "Base term is a hierarchy node of the exposure hierarchy",
                "The selected base term is a hierarchy term; prefer a more specific term where possible",
                Severity::Low,
                Severity::Low,
            ),
            WarningEvent::NoExpHierarchyTerm => (
                "Base term is a hierarchy node outside the exposure hierarchy",
                "The selected hierarchy term does not belong to the exposure hierarchy and cannot be used as base term",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::NonSpecificTerm => (
                "Base term detail level is non-specific",
                "The selected base term is non-specific; choose a more specific term if the information is available",
                Severity::Low,
                Severity::Low,
            ),
            WarningEvent::ExceptionTermSelected => (
                "Base term has its own exception rules",
                "The selected base term is an exception term: only its own forbidden processes apply",
                Severity::Low,
                Severity::None,
            ),
            WarningEvent::ForbiddenProcess => (
                "Forbidden process applied to a raw commodity",
                "A derivative term exists for this process: use the derivative instead of adding the process to the raw commodity",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::WrongProcessOrder => (
                "Process of an earlier tier applied to a derivative",
                "The process should be applied before the ones already implicit in the derivative: start from a less processed term",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::GenericProcessing => (
                "Generic process facet selected",
                "A generic process facet was used; select a more specific process if known",
                Severity::Low,
                Severity::Low,
            ),
            WarningEvent::MinorIngredient => (
                "Ingredient facet on raw commodity or derivative",
                "Ingredient facets on raw commodities or derivatives may only describe minor ingredients",
                Severity::Low,
                Severity::Low,
            ),
            WarningEvent::SourceInComposite => (
                "Source facet on composite food",
                "The source facet is not allowed on composite foods",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::SourceCommodityInComposite => (
                "Source-commodity facet on composite food",
                "The source-commodity facet is not allowed on composite foods",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::ReconstitutionProduct => (
                "Reconstitution or dilution of a concentrate or powder",
                "Reconstitution or dilution of a concentrate or powder: use the term for the reconstituted product instead",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::SingleSourceCommodityToRaw => (
                "Single source-commodity on a raw commodity",
                "Source-commodity facets on raw commodities are only allowed to describe mixtures of two or more commodities",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::NonGenericDerivativeUsed => (
                "Source-commodity facet on a non-generic derivative",
                "Source-commodity facets may only refine the source-commodity already implicit in the derivative",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::SourceInDerivative => (
                "Source facet on derivative without source-commodity",
                "The source facet requires a source-commodity facet on derivatives",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::MixedDerivative => (
                "Source facet on derivative of mixed source-commodities",
                "The source facet is not allowed on derivatives made of more than one source-commodity",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::SourceToDerivative => (
                "Source facet on derivative with a single source-commodity",
                "Check that the source facet is consistent with the source-commodity of the derivative",
                Severity::Low,
                Severity::Low,
            ),
            WarningEvent::DecimalForbiddenProcess => (
                "Alternative derivative encodings combined",
                "Processes describing alternative forms of the same derivative cannot be combined",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::MutuallyExPropertyViolated => (
                "Mutually exclusive processes combined",
                "The selected processes are mutually exclusive: at most one of them can be applied",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::NoRepNoExpBaseTerm => (
                "Base term outside reporting and exposure hierarchies",
                "The selected base term belongs neither to the reporting nor to the exposure hierarchy",
                Severity::High,
                Severity::High,
            ),
            WarningEvent::NoExposureTerm => (
                "Base term outside the exposure hierarchy",
                "The selected base term does not belong to the exposure hierarchy",
                Severity::Low,
                Severity::Low,
            ),
            WarningEvent::BaseTermSuccessfullyAdded => (
                "Base term accepted",
                "Base term successfully added",
                Severity::None,
                Severity::None,
            ),
            WarningEvent::Error => (
                "Malformed code or unknown term",
                "The code refers to a term or facet category that is not in the catalogue",
                Severity::Error,
                Severity::Error,
            ),
        };
        Self {
            event,
            trigger: trigger.to_string(),
            template: template.to_string(),
            indicator,
            text,
        }
    }
}

/// Message definitions keyed by event id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    defs: BTreeMap<u32, MessageDef>,
}

impl Default for MessageCatalog {
    /// The built-in table.
    fn default() -> Self {
        Self::from_defs(WarningEvent::all().iter().map(|e| MessageDef::builtin(*e)))
    }
}

impl MessageCatalog {
    /// Catalog with no definitions; every lookup falls back to the built-in
    /// table.
    pub fn empty() -> Self {
        Self {
            defs: BTreeMap::new(),
        }
    }

    pub fn from_defs(defs: impl IntoIterator<Item = MessageDef>) -> Self {
        let mut catalog = Self::empty();
        for def in defs {
            catalog.insert(def);
        }
        catalog
    }

    pub fn insert(&mut self, def: MessageDef) {
        self.defs.insert(def.event.id(), def);
    }

    /// Definition loaded for `event`, if any.
    pub fn get(&self, event: WarningEvent) -> Option<&MessageDef> {
        self.defs.get(&event.id())
    }

    /// Definition to render `event` with.
    ///
    /// Falls back to the built-in definition when the table has no row for
    /// the event. [`WarningEvent::Error`] always carries `Error` severity.
    pub fn resolve(&self, event: WarningEvent) -> Cow<'_, MessageDef> {
        let def = match self.get(event) {
            Some(def) => Cow::Borrowed(def),
            None => {
                tracing::debug!(event = %event, "No message row, using built-in definition");
                Cow::Owned(MessageDef::builtin(event))
            }
        };
        if event == WarningEvent::Error && def.indicator != Severity::Error {
            let mut def = def.into_owned();
            def.indicator = Severity::Error;
            def.text = Severity::Error;
            return Cow::Owned(def);
        }
        def
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageDef> {
        self.defs.values()
    }

    /// Load a message table from a file.
    pub fn load(path: &Path) -> Result<(Self, LoadSummary)> {
        let file = loader::open(path)?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Load a message table, materialising the built-in table when the file
    /// does not exist. Any other failure is returned.
    pub fn load_or_default(path: &Path) -> Result<(Self, LoadSummary)> {
        match Self::load(path) {
            Err(RuleLoadError::FileNotFound { .. }) => {
                tracing::info!(path = %path.display(), "Message table not found, using built-in messages");
                Ok(Self::builtin_with_summary())
            }
            Err(RuleLoadError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Self::builtin_with_summary())
            }
            other => other,
        }
    }

    fn builtin_with_summary() -> (Self, LoadSummary) {
        let catalog = Self::default();
        let summary = LoadSummary {
            source: "built-in".to_string(),
            loaded: catalog.len(),
            skipped: 0,
        };
        (catalog, summary)
    }

    /// Parse a message table from text.
    pub fn from_csv_str(content: &str, source: &str) -> Result<(Self, LoadSummary)> {
        Self::from_reader(content.as_bytes(), source)
    }

    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<(Self, LoadSummary)> {
        let (defs, summary) = loader::read_table(reader, source, FIELD_COUNT, |record| {
            parse_row(record, source)
        })?;
        Ok((Self::from_defs(defs), summary))
    }
}

fn parse_row(record: &csv::StringRecord, source: &str) -> std::result::Result<MessageDef, RowRejected> {
    let id_field = &record[0];
    let event = id_field
        .parse::<u32>()
        .ok()
        .and_then(WarningEvent::from_id)
        .ok_or_else(|| RowRejected::new("messageId", id_field))?;

    Ok(MessageDef {
        event,
        trigger: record[1].to_string(),
        template: record[2].to_string(),
        indicator: parse_level(&record[3], "semaphoreLevel", source),
        text: parse_level(&record[4], "textLevel", source),
    })
}

/// Unknown level tokens read as `None`.
fn parse_level(token: &str, field: &'static str, source: &str) -> Severity {
    Severity::parse(token).unwrap_or_else(|| {
        tracing::warn!(source, field, value = token, "Unknown severity level, using NONE");
        Severity::None
    })
}
