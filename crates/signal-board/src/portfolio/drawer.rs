use super::domain::{Artifact, ArtifactType, ClientChannel, ClientSummary, Kpi, SocialLink};
use super::ranking::filter_artifacts_by_cutoff;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const STORY_ASPECT: &str = "9:16";

/// Format tabs in the client drawer, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactTab {
    Reel,
    Posters,
    Social,
    Web,
    Story,
}

impl ArtifactTab {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Reel,
            Self::Posters,
            Self::Social,
            Self::Web,
            Self::Story,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reel => "reel",
            Self::Posters => "posters",
            Self::Social => "social",
            Self::Web => "web",
            Self::Story => "story",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Reel => "Reel",
            Self::Posters => "Posters",
            Self::Social => "Social",
            Self::Web => "Web",
            Self::Story => "Story",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Reel => "Vertical edits, reels, trailers",
            Self::Posters => "Print + digital posters",
            Self::Social => "Organic + paid social",
            Self::Web => "Landing pages & microsites",
            Self::Story => "Story-format cutdowns",
        }
    }

    pub fn includes(self, artifact: &Artifact) -> bool {
        match self {
            Self::Reel => artifact.kind == ArtifactType::Video,
            Self::Posters => artifact.kind == ArtifactType::Poster,
            Self::Social => artifact.kind == ArtifactType::Social,
            Self::Web => artifact.kind == ArtifactType::Web,
            Self::Story => {
                artifact.kind == ArtifactType::Video
                    && artifact.aspect.as_deref() == Some(STORY_ASPECT)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown artifact tab '{0}' (expected reel, posters, social, web or story)")]
pub struct UnknownTab(pub String);

impl FromStr for ArtifactTab {
    type Err = UnknownTab;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|tab| tab.as_str() == normalized)
            .ok_or_else(|| UnknownTab(value.to_string()))
    }
}

pub fn artifacts_for_tab<'a>(
    artifacts: impl IntoIterator<Item = &'a Artifact>,
    tab: ArtifactTab,
) -> Vec<&'a Artifact> {
    artifacts
        .into_iter()
        .filter(|artifact| tab.includes(artifact))
        .collect()
}

/// First tab with something to show at `cutoff`, falling back to the reel.
pub fn default_tab(client: &ClientChannel, cutoff: NaiveDate) -> ArtifactTab {
    ArtifactTab::ordered()
        .into_iter()
        .find(|tab| {
            client
                .artifacts
                .iter()
                .any(|artifact| artifact.date <= cutoff && tab.includes(artifact))
        })
        .unwrap_or(ArtifactTab::Reel)
}

/// Up to two uppercase initials used when a client has no logo.
pub fn client_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    pub tab: ArtifactTab,
    pub label: &'static str,
    pub description: &'static str,
    pub artifact_count: usize,
}

/// Everything the client drawer shows for one client at a cutoff.
#[derive(Debug, Clone, Serialize)]
pub struct ClientDetail {
    pub id: String,
    pub name: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub initials: String,
    pub cutoff: NaiveDate,
    pub active_tab: ArtifactTab,
    pub tabs: Vec<TabView>,
    pub artifacts: Vec<Artifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    pub kpis: Vec<Kpi>,
    pub socials: Vec<SocialLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ClientSummary>,
}

impl ClientDetail {
    pub fn build(client: &ClientChannel, cutoff: NaiveDate, tab: Option<ArtifactTab>) -> Self {
        let visible = filter_artifacts_by_cutoff(&client.artifacts, cutoff);
        let active_tab = tab.unwrap_or_else(|| default_tab(client, cutoff));

        let tabs = ArtifactTab::ordered()
            .into_iter()
            .map(|tab| TabView {
                tab,
                label: tab.label(),
                description: tab.description(),
                artifact_count: artifacts_for_tab(visible.iter().copied(), tab).len(),
            })
            .collect();

        let artifacts: Vec<Artifact> = artifacts_for_tab(visible.iter().copied(), active_tab)
            .into_iter()
            .cloned()
            .collect();
        let empty_message = artifacts
            .is_empty()
            .then(|| format!("No artifacts for this format before {cutoff}."));

        // KPIs are listed in full, independent of the cutoff.
        let mut kpis = client.kpis.clone();
        kpis.sort_by(|a, b| b.date.cmp(&a.date));

        Self {
            id: client.id.clone(),
            name: client.name.clone(),
            industry: client.industry.clone(),
            logo: client.logo.clone(),
            initials: client_initials(&client.name),
            cutoff,
            active_tab,
            tabs,
            artifacts,
            empty_message,
            kpis,
            socials: client.socials.clone(),
            summary: client.summary.clone(),
        }
    }
}
