use hs2_routing::{
    plan_href, region_for_plan, resolve_href, structure_totals, FeatureType, StructurePath,
};
use hs2_status::{
    coarse_series, count_by_status, fine_series, series_total, FeatureStatus, HasFeatureStatus,
};
use proptest::prelude::*;
use serde_json::json;

struct FeatureRecord {
    id: &'static str,
    feature_type: FeatureType,
    status: Option<FeatureStatus>,
}

impl HasFeatureStatus for FeatureRecord {
    fn feature_status(&self) -> Option<FeatureStatus> {
        self.status
    }
}

fn catalog() -> Vec<FeatureRecord> {
    vec![
        FeatureRecord {
            id: "euston",
            feature_type: FeatureType::Station,
            status: Some(FeatureStatus::Foundations),
        },
        FeatureRecord {
            id: "chiltern",
            feature_type: FeatureType::Tunnel,
            status: Some(FeatureStatus::Completed),
        },
        FeatureRecord {
            id: "colne-valley",
            feature_type: FeatureType::Viaduct,
            status: Some(FeatureStatus::Deck),
        },
        FeatureRecord {
            id: "dews-lane",
            feature_type: FeatureType::Overbridge,
            status: None,
        },
        FeatureRecord {
            id: "wendover-green",
            feature_type: FeatureType::CutAndCover,
            status: Some(FeatureStatus::Landscaping),
        },
        FeatureRecord {
            id: "vent-shaft-3",
            feature_type: FeatureType::Shaft,
            status: Some(FeatureStatus::SurfaceBuildings),
        },
    ]
}

#[test]
fn integration_overview_series_totals_and_links_agree() {
    let features = catalog();
    let counts = count_by_status(&features);
    assert_eq!(counts.total(), features.len() as u64);

    let coarse = coarse_series(Some(&counts));
    let coarse_json = serde_json::to_value(&coarse).expect("encode series");
    assert_eq!(
        coarse_json,
        json!([
            {"name": "Not Started", "value": 1, "color": "red.600"},
            {"name": "Foundations", "value": 1, "color": "yellow.500"},
            {"name": "Superstructure", "value": 2, "color": "blue.500"},
            {"name": "Civils", "value": 1, "color": "green.500"},
            {"name": "Completed", "value": 1, "color": "green.600"},
        ])
    );
    assert_eq!(
        series_total(&fine_series(Some(&counts))),
        series_total(&coarse)
    );

    let totals = structure_totals(features.iter().map(|feature| feature.feature_type.as_str()));
    assert_eq!(totals.major_features, 5);
    assert_eq!(totals.tunnels, 2);

    let hrefs = features
        .iter()
        .map(|feature| resolve_href(feature.feature_type.as_str(), feature.id))
        .collect::<Vec<_>>();
    assert_eq!(
        hrefs,
        vec![
            "/structures/stations/euston",
            "/structures/tunnels/chiltern",
            "/structures/viaducts/colne-valley",
            "/structures/bridges/overbridges/dews-lane",
            "/structures/tunnels/cut_and_covers/wendover-green",
            "/structures/structures/vent-shaft-3",
        ]
    );
}

#[test]
fn integration_detail_breadcrumbs_follow_resolved_href() {
    let href = resolve_href("box_structure", "b-9");
    let segments = href.trim_start_matches('/').split('/').collect::<Vec<_>>();
    let path = StructurePath::parse(segments[1], &segments[2..]).expect("parse detail path");
    let urls = path
        .breadcrumbs("Small Dean Box")
        .into_iter()
        .filter_map(|item| item.url)
        .collect::<Vec<_>>();
    assert_eq!(
        urls,
        vec![
            "/structures",
            "/structures/viaducts",
            "/structures/viaducts/box_structures",
        ]
    );
}

#[test]
fn integration_plan_sheets_link_into_regions() {
    let region = region_for_plan("C222-ATK-CV-DPP-020-000013", Some(47_500.0));
    assert_eq!(plan_href(region, "plan-13"), "/route/south/plan-13");
    let spur = region_for_plan("Birmingham Spur sheet 4", Some(166_000.0));
    assert_eq!(plan_href(spur, "plan-88"), "/route/birmingham/plan-88");
}

proptest! {
    #[test]
    fn property_fine_and_coarse_totals_match_entity_count(
        statuses in prop::collection::vec(
            prop::option::of(prop::sample::select(FeatureStatus::ALL.to_vec())),
            0..48,
        )
    ) {
        let counts = count_by_status(statuses.iter().copied());
        let expected = statuses.len() as u64;
        prop_assert_eq!(series_total(&fine_series(Some(&counts))), expected);
        prop_assert_eq!(series_total(&coarse_series(Some(&counts))), expected);
    }
}
