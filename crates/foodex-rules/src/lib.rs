//! Forbidden process rule sets and the warning message catalog.
//!
//! This crate provides:
//!
//! - [`OrdCode`]: the process ordering / mutual-exclusion code
//! - [`RuleSet`] and [`RuleBook`]: forbidden process rules keyed by warn
//!   group, loaded from `;`-separated tables
//! - [`WarningEvent`], [`Severity`], [`MessageCatalog`]: the events the
//!   engine raises and how they are worded and graded
//!
//! Loading is the only I/O in the engine. Row-level problems are skipped and
//! reported through `tracing` and the returned [`LoadSummary`]; a missing
//! or unusable file is a [`RuleLoadError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use foodex_rules::{MessageCatalog, RuleBook, RuleSet};
//!
//! let (standard, _) = RuleSet::load(Path::new("BR_Data.csv"))?;
//! let (exceptions, _) = RuleSet::load(Path::new("BR_Exceptions.csv"))?;
//! let (messages, _) = MessageCatalog::load_or_default(Path::new("warningMessages.txt"))?;
//! let rules = RuleBook::new(standard, exceptions);
//! ```

pub mod error;
pub mod event;
pub mod forbidden;
mod loader;
pub mod messages;
pub mod ord_code;
pub mod severity;

pub use error::{Result, RuleLoadError};
pub use event::WarningEvent;
pub use forbidden::{ForbiddenProcessRule, RuleBook, RuleSet};
pub use loader::LoadSummary;
pub use messages::{MessageCatalog, MessageDef};
pub use ord_code::{InvalidOrdCode, OrdCode};
pub use severity::Severity;
