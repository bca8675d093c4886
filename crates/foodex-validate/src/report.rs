//! Warning aggregation.
//!
//! [`fold`] renders raised warnings through the message catalog and keeps
//! two running severities: the indicator (replaced by any event at least as
//! severe, so ties go to the latest event) and the text emphasis (plain
//! maximum).

use chrono::Local;
use foodex_rules::{MessageCatalog, Severity, WarningEvent};
use serde::Serialize;

use crate::warning::RaisedWarning;

/// How messages are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append the local wall-clock time (`HH:MM:SS`).
    pub timestamp: bool,
    /// Machine-readable output: omit `BaseTermSuccessfullyAdded` messages.
    pub batch: bool,
}

impl RenderOptions {
    pub fn batch() -> Self {
        Self {
            timestamp: false,
            batch: true,
        }
    }
}

/// One rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedWarning {
    pub event: WarningEvent,
    pub message: String,
    pub indicator: Severity,
    pub text: Severity,
}

/// Rendered messages and final severities of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WarningReport {
    pub messages: Vec<RenderedWarning>,
    pub indicator: Severity,
    pub text: Severity,
    /// Event that last set the indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_event: Option<WarningEvent>,
}

impl WarningReport {
    /// Whether the code should be rejected.
    pub fn is_blocking(&self) -> bool {
        self.indicator.is_blocking() || self.text.is_blocking()
    }

    pub fn has_event(&self, event: WarningEvent) -> bool {
        self.messages.iter().any(|message| message.event == event)
    }

    pub fn events(&self) -> Vec<WarningEvent> {
        self.messages.iter().map(|message| message.event).collect()
    }
}

/// Fold raised warnings into a report.
pub fn fold(
    warnings: &[RaisedWarning],
    messages: &MessageCatalog,
    options: RenderOptions,
) -> WarningReport {
    let stamp = options
        .timestamp
        .then(|| Local::now().format("%H:%M:%S").to_string());
    let mut report = WarningReport::default();

    for warning in warnings {
        let def = messages.resolve(warning.event);

        if def.indicator >= report.indicator {
            report.indicator = def.indicator;
            report.indicator_event = Some(warning.event);
        }
        report.text = report.text.max(def.text);

        if options.batch && warning.event == WarningEvent::BaseTermSuccessfullyAdded {
            continue;
        }
        report.messages.push(RenderedWarning {
            event: warning.event,
            message: render(&def.template, warning.data.as_deref(), stamp.as_deref()),
            indicator: def.indicator,
            text: def.text,
        });
    }

    report
}

fn render(template: &str, data: Option<&str>, stamp: Option<&str>) -> String {
    let mut message = template.to_string();
    if let Some(data) = data {
        message.push_str(&format!(" ({data})"));
    }
    if let Some(stamp) = stamp {
        message.push_str(&format!(" [{stamp}]"));
    }
    message
}
