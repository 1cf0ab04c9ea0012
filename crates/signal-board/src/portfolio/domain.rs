use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Business goal a client channel can be ranked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Leads,
    Sales,
    Roas,
    Visibility,
    Community,
}

impl Outcome {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Leads,
            Self::Sales,
            Self::Roas,
            Self::Visibility,
            Self::Community,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leads => "leads",
            Self::Sales => "sales",
            Self::Roas => "roas",
            Self::Visibility => "visibility",
            Self::Community => "community",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Leads => "Leads",
            Self::Sales => "Sales",
            Self::Roas => "ROAS",
            Self::Visibility => "Visibility",
            Self::Community => "Community",
        }
    }

    /// Lowercase substrings that tie a free-text KPI label to this outcome.
    pub const fn label_tokens(self) -> &'static [&'static str] {
        match self {
            Self::Leads => &["lead"],
            Self::Sales => &["sale"],
            Self::Roas => &["roas"],
            Self::Visibility => &["visibility", "impressions", "reach", "footfall"],
            Self::Community => &["community"],
        }
    }

    /// Case-insensitive substring match of a KPI label against this outcome.
    ///
    /// Labels such as "Lead to Sale Ratio" match more than one outcome.
    pub fn matches_label(self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.label_tokens()
            .iter()
            .any(|token| label.contains(token))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome selection on the board, including the "all" wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutcomeFilter {
    #[default]
    All,
    Outcome(Outcome),
}

impl OutcomeFilter {
    pub fn ordered() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Outcome::ordered().into_iter().map(Self::Outcome))
            .collect()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Outcome(outcome) => outcome.as_str(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Latest",
            Self::Outcome(outcome) => outcome.label(),
        }
    }
}

impl From<Outcome> for OutcomeFilter {
    fn from(value: Outcome) -> Self {
        Self::Outcome(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown outcome '{0}' (expected all, leads, sales, roas, visibility or community)")]
pub struct UnknownOutcome(pub String);

impl FromStr for OutcomeFilter {
    type Err = UnknownOutcome;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized == "all" {
            return Ok(Self::All);
        }
        Outcome::ordered()
            .into_iter()
            .find(|outcome| outcome.as_str() == normalized)
            .map(Self::Outcome)
            .ok_or_else(|| UnknownOutcome(value.to_string()))
    }
}

impl fmt::Display for OutcomeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OutcomeFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OutcomeFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    Video,
    Poster,
    Social,
    Web,
}

impl ArtifactType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Poster => "Poster",
            Self::Social => "Social",
            Self::Web => "Web",
        }
    }
}

/// One piece of creative output delivered for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ArtifactType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "dateISO", deserialize_with = "deserialize_catalog_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
    /// Running time in seconds for video artifacts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Artifact {
    pub fn supports(&self, outcome: Outcome) -> bool {
        self.outcomes.contains(&outcome)
    }
}

/// A reported metric snapshot. The label is free text; see [`Outcome::matches_label`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "dateISO", deserialize_with = "deserialize_catalog_date")]
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strategy: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creative: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performance: Vec<String>,
}

/// One marketing client and everything delivered or reported for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientChannel {
    pub id: String,
    pub name: String,
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ClientSummary>,
}

/// Parses catalog dates written either as `YYYY-MM-DD` or as an RFC 3339 timestamp.
pub fn parse_catalog_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD or RFC 3339 ({err})"))
}

fn deserialize_catalog_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_catalog_date(&raw).map_err(serde::de::Error::custom)
}
