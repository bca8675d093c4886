//! Warning events raised by the validation engine.

use serde::{Deserialize, Serialize};

/// Every warning the engine can raise.
///
/// [`id`](Self::id) is the declaration ordinal and is the `messageId` key of
/// the message table. Appending variants is safe; reordering them breaks
/// existing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WarningEvent {
    HierarchyBaseTerm,
    NoExpHierarchyTerm,
    NonSpecificTerm,
    ExceptionTermSelected,
    ForbiddenProcess,
    WrongProcessOrder,
    GenericProcessing,
    MinorIngredient,
    SourceInComposite,
    SourceCommodityInComposite,
    ReconstitutionProduct,
    SingleSourceCommodityToRaw,
    NonGenericDerivativeUsed,
    SourceInDerivative,
    MixedDerivative,
    SourceToDerivative,
    DecimalForbiddenProcess,
    MutuallyExPropertyViolated,
    NoRepNoExpBaseTerm,
    NoExposureTerm,
    BaseTermSuccessfullyAdded,
    Error,
}

impl WarningEvent {
    /// All events in id order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::HierarchyBaseTerm,
            Self::NoExpHierarchyTerm,
            Self::NonSpecificTerm,
            Self::ExceptionTermSelected,
            Self::ForbiddenProcess,
            Self::WrongProcessOrder,
            Self::GenericProcessing,
            Self::MinorIngredient,
            Self::SourceInComposite,
            Self::SourceCommodityInComposite,
            Self::ReconstitutionProduct,
            Self::SingleSourceCommodityToRaw,
            Self::NonGenericDerivativeUsed,
            Self::SourceInDerivative,
            Self::MixedDerivative,
            Self::SourceToDerivative,
            Self::DecimalForbiddenProcess,
            Self::MutuallyExPropertyViolated,
            Self::NoRepNoExpBaseTerm,
            Self::NoExposureTerm,
            Self::BaseTermSuccessfullyAdded,
            Self::Error,
        ]
    }

    /// Stable message table key.
    pub const fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::all().get(usize::try_from(id).ok()?).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::HierarchyBaseTerm => "HierarchyBaseTerm",
            Self::NoExpHierarchyTerm => "NoExpHierarchyTerm",
            Self::NonSpecificTerm => "NonSpecificTerm",
            Self::ExceptionTermSelected => "ExceptionTermSelected",
            Self::ForbiddenProcess => "ForbiddenProcess",
            Self::WrongProcessOrder => "WrongProcessOrder",
            Self::GenericProcessing => "GenericProcessing",
            Self::MinorIngredient => "MinorIngredient",
            Self::SourceInComposite => "SourceInComposite",
            Self::SourceCommodityInComposite => "SourceCommodityInComposite",
            Self::ReconstitutionProduct => "ReconstitutionProduct",
            Self::SingleSourceCommodityToRaw => "SingleSourceCommodityToRaw",
            Self::NonGenericDerivativeUsed => "NonGenericDerivativeUsed",
            Self::SourceInDerivative => "SourceInDerivative",
            Self::MixedDerivative => "MixedDerivative",
            Self::SourceToDerivative => "SourceToDerivative",
            Self::DecimalForbiddenProcess => "DecimalForbiddenProcess",
            Self::MutuallyExPropertyViolated => "MutuallyExPropertyViolated",
            Self::NoRepNoExpBaseTerm => "NoRepNoExpBaseTerm",
            Self::NoExposureTerm => "NoExposureTerm",
            Self::BaseTermSuccessfullyAdded => "BaseTermSuccessfullyAdded",
            Self::Error => "Error",
        }
    }

    /// Events that describe the base term alone; exactly one of these is
    /// raised for every evaluated base term.
    pub const fn is_base_term_outcome(self) -> bool {
        matches!(
            self,
            Self::HierarchyBaseTerm | Self::NoExpHierarchyTerm | Self::BaseTermSuccessfullyAdded
        )
    }
}

impl std::fmt::Display for WarningEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
