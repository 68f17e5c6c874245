use icu_locid::LanguageIdentifier;
use serde::{Deserialize, Serialize};

use crate::{casing::Casing, error::Error, value::Value};

/// Outcome of a transform: either the cased text, or a marker that the input
/// was not string-typed and no conversion took place. The marker is a
/// distinct variant rather than a sentinel string so it can never collide
/// with real output (including the empty string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    Converted(String),
    NotApplicable,
}

impl Conversion {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Conversion::Converted(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Conversion::Converted(s) => Some(s),
            Conversion::NotApplicable => None,
        }
    }

    pub fn into_converted(self) -> Option<String> {
        match self {
            Conversion::Converted(s) => Some(s),
            Conversion::NotApplicable => None,
        }
    }
}

/// Two-way case transformer sitting between a data source and an edit
/// surface. `forward` (source → target) applies the target-side casing,
/// `backward` (target → source) applies the source-side casing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseTransformer {
    source_casing: Casing,
    target_casing: Casing,
}

impl CaseTransformer {
    /// Both settings default to `Unchanged`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one casing to both sides.
    pub fn with_casing(casing: Casing) -> Self {
        Self {
            source_casing: casing,
            target_casing: casing,
        }
    }

    /// Sets the two sides independently.
    pub fn with_casings(source_casing: Casing, target_casing: Casing) -> Self {
        Self {
            source_casing,
            target_casing,
        }
    }

    pub fn source_casing(&self) -> Casing {
        self.source_casing
    }

    pub fn target_casing(&self) -> Casing {
        self.target_casing
    }

    pub fn set_source_casing(&mut self, casing: Casing) {
        self.source_casing = casing;
    }

    pub fn set_target_casing(&mut self, casing: Casing) {
        self.target_casing = casing;
    }

    /// Sets both sides at once.
    pub fn set_casing(&mut self, casing: Casing) {
        self.source_casing = casing;
        self.target_casing = casing;
    }

    /// Ordinal flavour of [`CaseTransformer::set_source_casing`] for binding
    /// layers that convey the setting numerically. An undefined ordinal
    /// leaves the transformer untouched.
    pub fn set_source_casing_index(&mut self, value: u8) -> Result<(), Error> {
        self.source_casing = Self::casing_from_index(value, "source_casing")?;
        Ok(())
    }

    pub fn set_target_casing_index(&mut self, value: u8) -> Result<(), Error> {
        self.target_casing = Self::casing_from_index(value, "target_casing")?;
        Ok(())
    }

    /// Ordinal flavour of [`CaseTransformer::set_casing`]; validates before
    /// assigning so a bad ordinal changes neither side.
    pub fn set_casing_index(&mut self, value: u8) -> Result<(), Error> {
        let casing = Self::casing_from_index(value, "casing")?;
        self.source_casing = casing;
        self.target_casing = casing;
        Ok(())
    }

    /// Source → target: transforms `value` under the target-side casing.
    /// Non-string values are reported as [`Conversion::NotApplicable`].
    pub fn forward(&self, value: &Value, locale: Option<&LanguageIdentifier>) -> Conversion {
        Self::convert(self.target_casing, value, locale)
    }

    /// Target → source: mirror of [`CaseTransformer::forward`] under the
    /// source-side casing.
    pub fn backward(&self, value: &Value, locale: Option<&LanguageIdentifier>) -> Conversion {
        Self::convert(self.source_casing, value, locale)
    }

    fn convert(casing: Casing, value: &Value, locale: Option<&LanguageIdentifier>) -> Conversion {
        match value.as_str() {
            Some(text) => Conversion::Converted(casing.apply(text, locale).into_owned()),
            None => Conversion::NotApplicable,
        }
    }

    fn casing_from_index(value: u8, field: &'static str) -> Result<Casing, Error> {
        Casing::from_index(value).ok_or(Error::UndefinedCasing { value, field })
    }
}
