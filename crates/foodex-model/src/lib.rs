//! Classification code model and catalogue interface.
//!
//! This crate provides:
//!
//! - [`ClassificationCode`]: a parsed `BASE#INDEX.CODE$INDEX.CODE` code
//! - Catalogue entities: [`Term`], [`Hierarchy`], [`Attribute`]
//! - [`KnowledgeBase`]: the read-only catalogue queries the validation
//!   engine depends on
//! - [`MemoryCatalogue`]: an in-memory implementation, buildable in code or
//!   from a JSON snapshot
//!
//! # Example
//!
//! ```rust,ignore
//! use foodex_model::{ClassificationCode, KnowledgeBase, MemoryCatalogue};
//!
//! let code = ClassificationCode::parse("A0DPP#F28.A07JS")?;
//! let catalogue = MemoryCatalogue::load(Path::new("catalogue.json"))?;
//! let base = catalogue.term_by_code(code.base_term());
//! ```

pub mod catalogue;
pub mod code;
pub mod error;
pub mod knowledge;
pub mod memory;

pub use catalogue::{Attribute, DetailLevel, Hierarchy, Term, TermType};
pub use code::{ClassificationCode, FacetRef};
pub use error::{ModelError, ParseError, Result};
pub use knowledge::KnowledgeBase;
pub use memory::{DEFAULT_MASTER_HIERARCHY, MemoryCatalogue};
