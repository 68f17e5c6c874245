use std::{borrow::Cow, fmt, str::FromStr};

use clap::ValueEnum;
use icu_casemap::CaseMapper;
use icu_locid::LanguageIdentifier;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Case rule applied to one side of a binding: leave the text alone, or map it
/// to lower/upper case under a given locale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Casing {
    #[default]
    Unchanged,
    Lower,
    Upper,
}

impl Casing {
    /// Stable ordinal for binding layers that convey the setting numerically.
    pub const fn index(self) -> u8 {
        match self {
            Casing::Unchanged => 0,
            Casing::Lower => 1,
            Casing::Upper => 2,
        }
    }

    /// Inverse of [`Casing::index`]; `None` for ordinals no variant occupies.
    pub const fn from_index(value: u8) -> Option<Casing> {
        match value {
            0 => Some(Casing::Unchanged),
            1 => Some(Casing::Lower),
            2 => Some(Casing::Upper),
            _ => None,
        }
    }

    /// Applies this rule to `input`, reusing the original string when no
    /// mapping is requested.
    ///
    /// Case mapping goes through ICU4X so that locale-specific rules hold:
    /// under `tr`, `i` upper-cases to `İ` and `I` lower-cases to `ı`. With no
    /// locale the root locale (`und`) applies, which performs no such
    /// substitution.
    pub fn apply<'a>(self, input: &'a str, locale: Option<&LanguageIdentifier>) -> Cow<'a, str> {
        let und = LanguageIdentifier::UND;
        let langid = locale.unwrap_or(&und);
        match self {
            Casing::Unchanged => Cow::Borrowed(input),
            Casing::Lower => Cow::Owned(CaseMapper::new().lowercase_to_string(input, langid)),
            Casing::Upper => Cow::Owned(CaseMapper::new().uppercase_to_string(input, langid)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Casing::Unchanged => "unchanged",
            Casing::Lower => "lower",
            Casing::Upper => "upper",
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Casing {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "unchanged" => Ok(Casing::Unchanged),
            "lower" => Ok(Casing::Lower),
            "upper" => Ok(Casing::Upper),
            _ => Err(Error::UnknownCasingName {
                name: value.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for Casing {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Casing::from_index(value).ok_or(Error::UndefinedCasing {
            value,
            field: "casing",
        })
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use icu_locid::langid;

    use super::*;

    #[test]
    fn index_round_trips_every_variant() {
        for casing in [Casing::Unchanged, Casing::Lower, Casing::Upper] {
            assert_eq!(Casing::from_index(casing.index()), Some(casing));
        }
        assert_eq!(Casing::from_index(3), None);
        assert_eq!(Casing::from_index(100), None);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("upper".parse::<Casing>().unwrap(), Casing::Upper);
        assert_eq!("Lower".parse::<Casing>().unwrap(), Casing::Lower);
        assert_eq!("UNCHANGED".parse::<Casing>().unwrap(), Casing::Unchanged);

        let err = "title".parse::<Casing>().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownCasingName {
                name: "title".to_string()
            }
        );
    }

    #[test]
    fn unchanged_borrows_its_input() {
        let input = "AbCd";
        assert!(matches!(Casing::Unchanged.apply(input, None), Cow::Borrowed(_)));
    }

    #[test]
    fn root_locale_maps_ascii() {
        assert_eq!(Casing::Upper.apply("AbCd", None).as_ref(), "ABCD");
        assert_eq!(Casing::Lower.apply("AbCd", None).as_ref(), "abcd");
    }

    #[test]
    fn turkish_locale_redefines_dotted_i() {
        let tr = langid!("tr");
        assert_eq!(Casing::Upper.apply("ijk", Some(&tr)).as_ref(), "İJK");
        assert_eq!(Casing::Lower.apply("IJK", Some(&tr)).as_ref(), "ıjk");
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&Casing::Upper).unwrap(), "\"upper\"");
        let parsed: Casing = serde_json::from_str("\"unchanged\"").unwrap();
        assert_eq!(parsed, Casing::Unchanged);
    }
}
