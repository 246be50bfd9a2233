//! Route regions and plan-sheet links.
//!
//! Chainage is the distance in metres along the route from London Euston.

use serde::Serialize;

pub const UNKNOWN_REGION: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub chainage_from: f64,
    pub chainage_to: f64,
}

impl Region {
    pub fn contains(&self, chainage: f64) -> bool {
        chainage >= self.chainage_from && chainage < self.chainage_to
    }
}

pub static REGIONS: [Region; 4] = [
    Region {
        id: "london",
        name: "London Metropolitan",
        description: "From London Euston to the Colne Valley.",
        chainage_from: 0.0,
        chainage_to: 25_800.0,
    },
    Region {
        id: "south",
        name: "Country South",
        description: "From the Colne Valley to Lower Boddington, Northamptonshire.",
        chainage_from: 25_800.0,
        chainage_to: 115_200.0,
    },
    Region {
        id: "north",
        name: "Country North",
        description: "From Wormleighton, Warwickshire to Handsacre, Staffordshire.",
        chainage_from: 115_200.0,
        chainage_to: 192_765.0,
    },
    Region {
        id: "birmingham",
        name: "Birmingham Spur",
        description: "From the Delta Junction to Birmingham Curzon Street.",
        chainage_from: 160_426.0,
        chainage_to: 175_680.0,
    },
];

pub fn region_by_id(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.id == id)
}

/// Region id a plan sheet is listed under.
///
/// Named spur and chord sheets win over chainage. The main line regions are
/// tried in route order; the Birmingham spur overlaps Country North and is
/// only reached by name.
pub fn region_for_plan(plan_name: &str, chainage_from: Option<f64>) -> &'static str {
    if plan_name.contains("North Chord") {
        return "north";
    }
    if plan_name.contains("Birmingham Spur") {
        return "birmingham";
    }
    let chainage = match chainage_from {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => return "london",
    };
    REGIONS[..3]
        .iter()
        .find(|region| chainage < region.chainage_to)
        .map(|region| region.id)
        .unwrap_or(UNKNOWN_REGION)
}

pub fn plan_href(region_id: &str, plan_id: &str) -> String {
    format!("/route/{region_id}/{plan_id}")
}
