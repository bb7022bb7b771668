//! Locale handling and centralized translation labels.
//!
//! This module replaces per-call-site string branching with a [`Locale`] enum
//! mapped to a static [`Labels`] lookup table, keeping the translation surface
//! centralized and testable independent of the core pipeline. Only the labels
//! the core itself needs live here (price formatting and the stat captions);
//! presentation layers carry their own strings.

use crate::currency::Currency;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported UI locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Simplified Chinese.
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,

    /// US English.
    #[serde(rename = "en-US")]
    EnUs,

    /// Japanese.
    #[serde(rename = "ja-JP")]
    JaJp,
}

/// Translated labels for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Shown instead of a currency-formatted zero price.
    pub free_to_use: &'static str,

    /// Caption for the price field.
    pub price: &'static str,

    /// Caption for the rating field.
    pub rating: &'static str,

    /// Caption for the platform field.
    pub platform: &'static str,

    /// Caption for the category field.
    pub category: &'static str,
}

const ZH_CN: Labels = Labels {
    free_to_use: "免费使用",
    price: "价格",
    rating: "评分",
    platform: "平台",
    category: "应用分类",
};

const EN_US: Labels = Labels {
    free_to_use: "Free to Use",
    price: "Price",
    rating: "Rating",
    platform: "Platform",
    category: "Category",
};

const JA_JP: Labels = Labels {
    free_to_use: "無料で使用",
    price: "価格",
    rating: "評価",
    platform: "プラットフォーム",
    category: "カテゴリ",
};

impl Locale {
    /// Returns the BCP 47 tag for this locale.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
            Self::JaJp => "ja-JP",
        }
    }

    /// Returns the label table for this locale.
    #[must_use]
    pub const fn labels(self) -> &'static Labels {
        match self {
            Self::ZhCn => &ZH_CN,
            Self::EnUs => &EN_US,
            Self::JaJp => &JA_JP,
        }
    }

    /// Returns the default display currency for this locale.
    ///
    /// Used when the user has not picked a currency explicitly: Chinese maps
    /// to CNY, Japanese to JPY, English to USD.
    #[must_use]
    pub const fn default_currency(self) -> Currency {
        match self {
            Self::ZhCn => Currency::Cny,
            Self::EnUs => Currency::Usd,
            Self::JaJp => Currency::Jpy,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Parses a BCP 47 tag, falling back to a language-prefix match so that
    /// e.g. `"zh-TW"` and `"ja"` resolve to the closest supported locale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh-CN" => return Ok(Self::ZhCn),
            "en-US" => return Ok(Self::EnUs),
            "ja-JP" => return Ok(Self::JaJp),
            _ => {}
        }

        let prefix = s.split('-').next().unwrap_or(s).to_lowercase();
        match prefix.as_str() {
            "zh" => Ok(Self::ZhCn),
            "en" => Ok(Self::EnUs),
            "ja" => Ok(Self::JaJp),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_label_varies_per_locale() {
        assert_eq!(Locale::ZhCn.labels().free_to_use, "免费使用");
        assert_eq!(Locale::EnUs.labels().free_to_use, "Free to Use");
        assert_eq!(Locale::JaJp.labels().free_to_use, "無料で使用");
    }

    #[test]
    fn parsing_accepts_language_prefixes() {
        assert_eq!("zh-TW".parse::<Locale>(), Ok(Locale::ZhCn));
        assert_eq!("en-GB".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!("ja".parse::<Locale>(), Ok(Locale::JaJp));
        assert!("fr-FR".parse::<Locale>().is_err());
    }

    #[test]
    fn default_currency_tracks_locale() {
        assert_eq!(Locale::ZhCn.default_currency(), Currency::Cny);
        assert_eq!(Locale::EnUs.default_currency(), Currency::Usd);
        assert_eq!(Locale::JaJp.default_currency(), Currency::Jpy);
    }
}
