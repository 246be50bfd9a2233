//! Feature-type routing and navigation helpers for the HS2 tracker site.
//!
//! Maps category tags to canonical detail-page paths, parses those paths back
//! for breadcrumb trails, and places route plan sheets into regions.

pub mod feature_type;
pub mod regions;
pub mod routing_table;
pub mod structure_path;
pub mod structure_totals;
pub mod text;

pub use feature_type::{FeatureType, UnknownFeatureType};
pub use regions::{plan_href, region_by_id, region_for_plan, Region, REGIONS, UNKNOWN_REGION};
pub use routing_table::{
    category_display_name, parent_section_of, pluralize, resolve_href, uses_subtype_segment,
    CategoryRoute, RoutingConfigError, RoutingTable, DEFAULT_FALLBACK_SECTION,
    DEFAULT_SECTION_ROOT,
};
pub use structure_path::{BreadcrumbItem, StructurePath};
pub use structure_totals::{structure_totals, StructureTotals};
pub use text::{format_phase, snake_case_to_title_case};
