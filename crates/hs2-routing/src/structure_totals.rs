use serde::Serialize;

use crate::feature_type::FeatureType;
use crate::routing_table::RoutingTable;

/// Headline counts for the structures overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StructureTotals {
    pub major_features: u64,
    pub stations: u64,
    pub tunnels: u64,
    pub bridges: u64,
    pub viaducts: u64,
}

impl RoutingTable {
    /// Counts features per parent section, skipping minor works.
    ///
    /// Tags outside the known feature types still count as major features.
    pub fn structure_totals<'a, I>(&self, category_tags: I) -> StructureTotals
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut totals = StructureTotals::default();
        for tag in category_tags {
            if tag
                .parse::<FeatureType>()
                .is_ok_and(FeatureType::is_minor_work)
            {
                continue;
            }
            totals.major_features += 1;
            match self.parent_section_of(tag) {
                "stations" => totals.stations += 1,
                "tunnels" => totals.tunnels += 1,
                "bridges" => totals.bridges += 1,
                "viaducts" => totals.viaducts += 1,
                _ => {}
            }
        }
        totals
    }
}

pub fn structure_totals<'a, I>(category_tags: I) -> StructureTotals
where
    I: IntoIterator<Item = &'a str>,
{
    RoutingTable::builtin().structure_totals(category_tags)
}
