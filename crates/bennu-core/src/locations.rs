//! Built-in impact scenarios.
//!
//! The impact facts are narrative data for the results and briefing views.
//! The engine carries them along but never reads them.

use serde::{Deserialize, Serialize};

use crate::enums::LocationId;
use crate::types::GeoCoord;

/// A selectable impact site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationProfile {
    pub id: LocationId,
    pub name: String,
    pub coords: GeoCoord,
    pub facts: ImpactFacts,
}

/// Projected consequences of an unmitigated impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ImpactFacts {
    Ocean {
        tsunami_wave: String,
        coastal_waves: String,
        cities: Vec<String>,
        warning_time: String,
        inundation: String,
    },
    Land {
        crater_width: String,
        crater_depth: String,
        immediate_radius: String,
        severe_radius: String,
        agriculture_loss: String,
    },
}

impl LocationProfile {
    /// Profile for a built-in location.
    pub fn builtin(id: LocationId) -> Self {
        match id {
            LocationId::Ocean => Self {
                id,
                name: "Atlantic Ocean".into(),
                coords: GeoCoord::new(33.0, -65.0),
                facts: ImpactFacts::Ocean {
                    tsunami_wave: "60-80 meters".into(),
                    coastal_waves: "10-20 meters".into(),
                    cities: ["New York", "Boston", "Miami", "Lisbon"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                    warning_time: "45-90 minutes".into(),
                    inundation: "5-15 km inland".into(),
                },
            },
            LocationId::Land => Self {
                id,
                name: "Central USA".into(),
                coords: GeoCoord::new(40.0, -100.0),
                facts: ImpactFacts::Land {
                    crater_width: "6.2 km".into(),
                    crater_depth: "800 meters".into(),
                    immediate_radius: "45 km".into(),
                    severe_radius: "95 km".into(),
                    agriculture_loss: "50,000 km²".into(),
                },
            },
        }
    }

    /// All built-in locations, in menu order.
    pub fn catalogue() -> Vec<LocationProfile> {
        LocationId::ALL.into_iter().map(Self::builtin).collect()
    }
}
