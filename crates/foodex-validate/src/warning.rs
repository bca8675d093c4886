//! Raised warning events.

use std::fmt;

use foodex_rules::WarningEvent;
use serde::Serialize;

/// Separator between codes named by one aggregate warning.
pub(crate) const CODE_SEPARATOR: &str = " - ";

/// One event raised by the pipeline, with the code(s) that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaisedWarning {
    pub event: WarningEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl RaisedWarning {
    /// Event without trigger data (base term outcomes).
    pub fn bare(event: WarningEvent) -> Self {
        Self { event, data: None }
    }

    pub fn new(event: WarningEvent, data: impl Into<String>) -> Self {
        Self {
            event,
            data: Some(data.into()),
        }
    }

    /// Event naming several codes, joined in the given order.
    pub(crate) fn naming<'c>(event: WarningEvent, codes: impl IntoIterator<Item = &'c str>) -> Self {
        let data = codes.into_iter().collect::<Vec<_>>().join(CODE_SEPARATOR);
        Self::new(event, data)
    }

    /// Codes named in `data`.
    pub fn codes(&self) -> Vec<&str> {
        self.data
            .as_deref()
            .map(|data| data.split(CODE_SEPARATOR).collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for RaisedWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(f, "{} ({data})", self.event),
            None => write!(f, "{}", self.event),
        }
    }
}
