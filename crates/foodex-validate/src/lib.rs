//! Business rule evaluation for classification codes.
//!
//! Given a parsed [`ClassificationCode`], a catalogue implementing
//! [`KnowledgeBase`] and the forbidden process [`RuleBook`], [`evaluate`]
//! returns the warnings the code raises. [`fold`] renders them through a
//! [`MessageCatalog`] into a [`WarningReport`] with the final indicator and
//! text severities.
//!
//! Evaluation performs no I/O and does not mutate its inputs, so one loaded
//! catalogue and rule book can be shared by any number of evaluations.
//!
//! # Example
//!
//! ```rust,ignore
//! use foodex_validate::{Engine, EngineConfig, RenderOptions};
//!
//! let engine = Engine::new(&catalogue, &rules, &messages, &config);
//! let report = engine.check("A0DPP#F28.A07JS", RenderOptions::default())?;
//! println!("{}: {} messages", report.indicator, report.messages.len());
//! ```
//!
//! [`ClassificationCode`]: foodex_model::ClassificationCode
//! [`KnowledgeBase`]: foodex_model::KnowledgeBase
//! [`RuleBook`]: foodex_rules::RuleBook
//! [`MessageCatalog`]: foodex_rules::MessageCatalog

mod checks;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod resolver;
mod subject;
pub mod warning;

pub use config::EngineConfig;
pub use error::{ConfigError, EvaluateError, Result};
pub use pipeline::{Engine, evaluate};
pub use report::{RenderOptions, RenderedWarning, WarningReport, fold};
pub use resolver::{WarnGroup, resolve_warn_group};
pub use warning::RaisedWarning;
