#![allow(dead_code)]

use chrono::NaiveDate;
use signal_board::portfolio::{Artifact, ArtifactType, ClientChannel, Kpi, Outcome};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn artifact(id: &str, kind: ArtifactType, on: NaiveDate, outcomes: &[Outcome]) -> Artifact {
    Artifact {
        id: id.to_string(),
        kind,
        title: None,
        date: on,
        outcomes: outcomes.to_vec(),
        duration: None,
        aspect: None,
        link: None,
    }
}

pub fn kpi(label: &str, value: f64, on: NaiveDate) -> Kpi {
    Kpi {
        label: label.to_string(),
        value,
        unit: None,
        date: on,
    }
}

pub fn client(id: &str, name: &str) -> ClientChannel {
    ClientChannel {
        id: id.to_string(),
        name: name.to_string(),
        industry: "Hospitality".to_string(),
        logo: None,
        artifacts: Vec::new(),
        kpis: Vec::new(),
        socials: Vec::new(),
        summary: None,
    }
}

pub fn with_artifacts(mut client: ClientChannel, artifacts: Vec<Artifact>) -> ClientChannel {
    client.artifacts = artifacts;
    client
}

pub fn with_kpis(mut client: ClientChannel, kpis: Vec<Kpi>) -> ClientChannel {
    client.kpis = kpis;
    client
}

/// A small catalog spanning Jan to Apr 2024 with every priority tier represented.
pub fn sample_clients() -> Vec<ClientChannel> {
    vec![
        with_kpis(
            with_artifacts(
                client("harbor", "Harbor Fitness"),
                vec![
                    artifact("h-1", ArtifactType::Video, date(2024, 1, 8), &[Outcome::Leads]),
                    artifact("h-2", ArtifactType::Social, date(2024, 3, 15), &[Outcome::Community]),
                ],
            ),
            vec![
                kpi("Leads Generated", 120.0, date(2024, 1, 10)),
                kpi("Community Members", 900.0, date(2024, 4, 2)),
            ],
        ),
        with_artifacts(
            client("lumen", "Lumen Optics"),
            vec![
                artifact("l-1", ArtifactType::Poster, date(2024, 1, 5), &[Outcome::Leads]),
                artifact("l-2", ArtifactType::Web, date(2024, 2, 12), &[Outcome::Leads, Outcome::Sales]),
            ],
        ),
        with_kpis(
            with_artifacts(
                client("orchard", "Orchard Bakery"),
                vec![artifact("o-1", ArtifactType::Social, date(2024, 2, 20), &[Outcome::Visibility])],
            ),
            vec![kpi("Store Footfall", 3400.0, date(2024, 2, 28))],
        ),
        client("quarry", "Quarry Studios"),
    ]
}

pub fn names(clients: &[&ClientChannel]) -> Vec<String> {
    clients.iter().map(|client| client.name.clone()).collect()
}
