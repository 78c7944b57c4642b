// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Locale table for ranking providers
//!
//! Maps a country code to the parameters each provider expects. Unknown
//! codes fall back to the Japan profile.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Provider-specific locale parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryProfile {
    /// Display location name (ValueSERP `location`)
    pub location: &'static str,
    /// Google domain to search on
    pub google_domain: &'static str,
    /// Geolocation code (`gl`)
    pub gl: &'static str,
    /// Interface language (`hl`)
    pub hl: &'static str,
}

const JP: CountryProfile = CountryProfile {
    location: "Japan",
    google_domain: "google.co.jp",
    gl: "jp",
    hl: "ja",
};

const US: CountryProfile = CountryProfile {
    location: "United States",
    google_domain: "google.com",
    gl: "us",
    hl: "en",
};

const UK: CountryProfile = CountryProfile {
    location: "United Kingdom",
    google_domain: "google.co.uk",
    gl: "uk",
    hl: "en",
};

const CA: CountryProfile = CountryProfile {
    location: "Canada",
    google_domain: "google.ca",
    gl: "ca",
    hl: "en",
};

const AU: CountryProfile = CountryProfile {
    location: "Australia",
    google_domain: "google.com.au",
    gl: "au",
    hl: "en",
};

const DE: CountryProfile = CountryProfile {
    location: "Germany",
    google_domain: "google.de",
    gl: "de",
    hl: "de",
};

const FR: CountryProfile = CountryProfile {
    location: "France",
    google_domain: "google.fr",
    gl: "fr",
    hl: "fr",
};

const KR: CountryProfile = CountryProfile {
    location: "South Korea",
    google_domain: "google.co.kr",
    gl: "kr",
    hl: "ko",
};

const CN: CountryProfile = CountryProfile {
    location: "China",
    google_domain: "google.com.hk",
    gl: "cn",
    hl: "zh-CN",
};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    #[default]
    Jp,
    Us,
    Uk,
    Ca,
    Au,
    De,
    Fr,
    Kr,
    Cn,
}

impl Country {
    pub const ALL: [Country; 9] = [
        Country::Jp,
        Country::Us,
        Country::Uk,
        Country::Ca,
        Country::Au,
        Country::De,
        Country::Fr,
        Country::Kr,
        Country::Cn,
    ];

    /// Look up a country by its code, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Resolve a code, falling back to Japan for anything unsupported
    pub fn from_code_or_default(code: &str) -> Self {
        match Self::from_code(code) {
            Some(country) => country,
            None => {
                tracing::warn!("Unsupported country code '{}', using jp", code);
                Country::Jp
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Country::Jp => "jp",
            Country::Us => "us",
            Country::Uk => "uk",
            Country::Ca => "ca",
            Country::Au => "au",
            Country::De => "de",
            Country::Fr => "fr",
            Country::Kr => "kr",
            Country::Cn => "cn",
        }
    }

    pub fn profile(&self) -> &'static CountryProfile {
        match self {
            Country::Jp => &JP,
            Country::Us => &US,
            Country::Uk => &UK,
            Country::Ca => &CA,
            Country::Au => &AU,
            Country::De => &DE,
            Country::Fr => &FR,
            Country::Kr => &KR,
            Country::Cn => &CN,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unsupported country code: {}", s))
    }
}

// Unknown codes are not a request error; they resolve to the default profile.
impl<'de> Deserialize<'de> for Country {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Country::from_code_or_default(&code))
    }
}

/// Number of supported locales
pub fn supported_count() -> usize {
    Country::ALL.len()
}
