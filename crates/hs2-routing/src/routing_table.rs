//! Category-tag routing for structure detail pages.
//!
//! Every known category tag maps to a parent section under the section root.
//! Categories with several subtypes under one section get an extra pluralized
//! path segment, e.g. `/structures/bridges/overbridges/<id>`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::feature_type::FeatureType;

pub const DEFAULT_SECTION_ROOT: &str = "structures";
pub const DEFAULT_FALLBACK_SECTION: &str = "structures";

#[derive(Debug, Error)]
pub enum RoutingConfigError {
    #[error("failed to read routing config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse routing config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("routing config field '{field}' must be a single non-empty path segment, got '{value}'")]
    InvalidSegment { field: String, value: String },
    #[error("routing config has no route for feature type '{feature_type}'")]
    MissingRoute { feature_type: FeatureType },
}

/// Where a category tag lives in the site tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryRoute {
    #[serde(rename = "parent")]
    pub parent_section: String,
    #[serde(rename = "subtype", default)]
    pub uses_subtype_segment: bool,
}

impl CategoryRoute {
    pub fn new(parent_section: &str, uses_subtype_segment: bool) -> Self {
        Self {
            parent_section: parent_section.to_string(),
            uses_subtype_segment,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoutingConfigFile {
    #[serde(default)]
    section_root: Option<String>,
    #[serde(default)]
    fallback_section: Option<String>,
    #[serde(default)]
    routes: BTreeMap<String, CategoryRoute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    section_root: String,
    fallback_section: String,
    routes: BTreeMap<String, CategoryRoute>,
}

impl RoutingTable {
    /// Validates a table; every known feature type must have a route.
    pub fn new(
        section_root: &str,
        fallback_section: &str,
        routes: BTreeMap<String, CategoryRoute>,
    ) -> Result<Self, RoutingConfigError> {
        validate_segment("section_root", section_root)?;
        validate_segment("fallback_section", fallback_section)?;
        for (tag, route) in &routes {
            validate_segment(&format!("routes.{tag}"), tag)?;
            validate_segment(&format!("routes.{tag}.parent"), &route.parent_section)?;
        }
        if let Some(feature_type) = FeatureType::ALL
            .into_iter()
            .find(|feature_type| !routes.contains_key(feature_type.as_str()))
        {
            return Err(RoutingConfigError::MissingRoute { feature_type });
        }
        Ok(Self {
            section_root: section_root.to_string(),
            fallback_section: fallback_section.to_string(),
            routes,
        })
    }

    /// Process-wide built-in table.
    pub fn builtin() -> &'static RoutingTable {
        static TABLE: OnceLock<RoutingTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let routes = builtin_routes();
            match Self::new(DEFAULT_SECTION_ROOT, DEFAULT_FALLBACK_SECTION, routes.clone()) {
                Ok(table) => table,
                Err(error) => {
                    debug_assert!(false, "{error}");
                    tracing::error!(%error, "built-in routing table failed validation");
                    Self {
                        section_root: DEFAULT_SECTION_ROOT.to_string(),
                        fallback_section: DEFAULT_FALLBACK_SECTION.to_string(),
                        routes,
                    }
                }
            }
        })
    }

    /// Loads a routing config. Omitted top-level fields take the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, RoutingConfigError> {
        let file: RoutingConfigFile = toml::from_str(raw)?;
        Self::new(
            file.section_root.as_deref().unwrap_or(DEFAULT_SECTION_ROOT),
            file.fallback_section
                .as_deref()
                .unwrap_or(DEFAULT_FALLBACK_SECTION),
            file.routes,
        )
    }

    pub fn from_toml_path(path: &Path) -> Result<Self, RoutingConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RoutingConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn section_root(&self) -> &str {
        &self.section_root
    }

    pub fn lookup(&self, category_tag: &str) -> Option<&CategoryRoute> {
        self.routes.get(category_tag)
    }

    /// Canonical path of a feature detail page.
    ///
    /// Unknown tags fall back to `/<root>/<tag>s/<id>` and log a warning.
    pub fn resolve_href(&self, category_tag: &str, feature_id: &str) -> String {
        let root = &self.section_root;
        match self.lookup(category_tag) {
            Some(route) if route.uses_subtype_segment => format!(
                "/{root}/{}/{}/{feature_id}",
                route.parent_section,
                pluralize(category_tag)
            ),
            Some(route) => format!("/{root}/{}/{feature_id}", route.parent_section),
            None => {
                warn!(
                    category_tag,
                    feature_id, "unknown feature type; using fallback structure route"
                );
                format!("/{root}/{}/{feature_id}", pluralize(category_tag))
            }
        }
    }

    pub fn parent_section_of(&self, category_tag: &str) -> &str {
        self.lookup(category_tag)
            .map(|route| route.parent_section.as_str())
            .unwrap_or(&self.fallback_section)
    }

    pub fn uses_subtype_segment(&self, category_tag: &str) -> bool {
        self.lookup(category_tag)
            .map(|route| route.uses_subtype_segment)
            .unwrap_or(false)
    }

    /// Heading shown for the section a category belongs to.
    pub fn category_display_name(&self, category_tag: &str) -> &'static str {
        match self.parent_section_of(category_tag) {
            "tunnels" => "Tunnels",
            "bridges" => "Bridges",
            "viaducts" => "Viaducts",
            "stations" => "Stations",
            _ => "Structures",
        }
    }
}

fn validate_segment(field: &str, value: &str) -> Result<(), RoutingConfigError> {
    if value.trim().is_empty() || value.contains('/') || value != value.trim() {
        return Err(RoutingConfigError::InvalidSegment {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn builtin_routes() -> BTreeMap<String, CategoryRoute> {
    [
        ("tunnel", "tunnels", false),
        ("cut_and_cover", "tunnels", true),
        ("overbridge", "bridges", true),
        ("underbridge", "bridges", true),
        ("underpass", "bridges", true),
        ("viaduct", "viaducts", false),
        ("box_structure", "viaducts", true),
        ("station", "stations", false),
        ("embankment", "structures", false),
        ("cutting", "structures", false),
        ("shaft", "structures", false),
        ("culvert", "structures", false),
    ]
    .into_iter()
    .map(|(tag, parent, subtype)| (tag.to_string(), CategoryRoute::new(parent, subtype)))
    .collect()
}

/// Naive plural: appends "s". Every current category tag is regular.
pub fn pluralize(tag: &str) -> String {
    format!("{tag}s")
}

pub fn resolve_href(category_tag: &str, feature_id: &str) -> String {
    RoutingTable::builtin().resolve_href(category_tag, feature_id)
}

pub fn parent_section_of(category_tag: &str) -> &'static str {
    RoutingTable::builtin().parent_section_of(category_tag)
}

pub fn uses_subtype_segment(category_tag: &str) -> bool {
    RoutingTable::builtin().uses_subtype_segment(category_tag)
}

pub fn category_display_name(category_tag: &str) -> &'static str {
    RoutingTable::builtin().category_display_name(category_tag)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{
        builtin_routes, category_display_name, parent_section_of, pluralize, resolve_href,
        uses_subtype_segment, CategoryRoute, RoutingConfigError, RoutingTable,
    };
    use crate::feature_type::FeatureType;

    const FULL_CONFIG: &str = r#"
section_root = "works"
fallback_section = "other"

[routes.tunnel]
parent = "bores"

[routes.cut_and_cover]
parent = "bores"
subtype = true

[routes.overbridge]
parent = "crossings"
subtype = true

[routes.underbridge]
parent = "crossings"
subtype = true

[routes.underpass]
parent = "crossings"
subtype = true

[routes.viaduct]
parent = "viaducts"

[routes.box_structure]
parent = "viaducts"
subtype = true

[routes.station]
parent = "stations"

[routes.embankment]
parent = "earthworks"

[routes.cutting]
parent = "earthworks"

[routes.shaft]
parent = "other"

[routes.culvert]
parent = "other"
"#;

    #[test]
    fn unit_builtin_routes_cover_every_feature_type() {
        let routes = builtin_routes();
        for feature_type in FeatureType::ALL {
            assert!(
                routes.contains_key(feature_type.as_str()),
                "missing route for {feature_type}"
            );
        }
        assert_eq!(routes.len(), FeatureType::ALL.len());
    }

    #[test]
    fn functional_resolve_href_uses_subtype_segment_for_bridges() {
        assert_eq!(
            resolve_href("overbridge", "abc123"),
            "/structures/bridges/overbridges/abc123"
        );
        assert_eq!(
            resolve_href("cut_and_cover", "c1"),
            "/structures/tunnels/cut_and_covers/c1"
        );
    }

    #[test]
    fn functional_resolve_href_uses_direct_path_for_single_type_sections() {
        assert_eq!(resolve_href("tunnel", "xyz"), "/structures/tunnels/xyz");
        assert_eq!(resolve_href("station", "euston"), "/structures/stations/euston");
        assert_eq!(
            resolve_href("embankment", "e1"),
            "/structures/structures/e1"
        );
    }

    #[test]
    fn functional_resolve_href_falls_back_for_unknown_tag() {
        assert_eq!(
            resolve_href("unknown_type", "id1"),
            "/structures/unknown_types/id1"
        );
        assert_eq!(resolve_href("", "id1"), "/structures/s/id1");
    }

    #[test]
    fn unit_parent_section_and_subtype_defaults() {
        assert_eq!(parent_section_of("underpass"), "bridges");
        assert_eq!(parent_section_of("monorail"), "structures");
        assert!(uses_subtype_segment("box_structure"));
        assert!(!uses_subtype_segment("viaduct"));
        assert!(!uses_subtype_segment("monorail"));
    }

    #[test]
    fn unit_category_display_name_groups_by_parent() {
        assert_eq!(category_display_name("underbridge"), "Bridges");
        assert_eq!(category_display_name("cut_and_cover"), "Tunnels");
        assert_eq!(category_display_name("box_structure"), "Viaducts");
        assert_eq!(category_display_name("station"), "Stations");
        assert_eq!(category_display_name("culvert"), "Structures");
        assert_eq!(category_display_name("monorail"), "Structures");
    }

    #[test]
    fn regression_pluralize_is_naive_for_sibilant_tags() {
        assert_eq!(pluralize("underpass"), "underpasss");
        assert_eq!(pluralize("viaduct"), "viaducts");
    }

    #[test]
    fn functional_from_toml_str_loads_custom_sections() {
        let table = RoutingTable::from_toml_str(FULL_CONFIG).expect("config loads");
        assert_eq!(table.section_root(), "works");
        assert_eq!(table.resolve_href("tunnel", "t1"), "/works/bores/t1");
        assert_eq!(
            table.resolve_href("underpass", "u1"),
            "/works/crossings/underpasss/u1"
        );
        assert_eq!(table.parent_section_of("monorail"), "other");
        assert_eq!(table.resolve_href("monorail", "m1"), "/works/monorails/m1");
    }

    #[test]
    fn regression_from_toml_str_rejects_missing_route() {
        let partial = FULL_CONFIG.replace("[routes.culvert]\nparent = \"other\"\n", "");
        let error = RoutingTable::from_toml_str(&partial).expect_err("culvert missing");
        assert!(matches!(
            error,
            RoutingConfigError::MissingRoute {
                feature_type: FeatureType::Culvert
            }
        ));
    }

    #[test]
    fn regression_from_toml_str_rejects_slash_in_segment() {
        let config = FULL_CONFIG.replace("section_root = \"works\"", "section_root = \"a/b\"");
        let error = RoutingTable::from_toml_str(&config).expect_err("slash rejected");
        assert!(matches!(
            error,
            RoutingConfigError::InvalidSegment { ref field, .. } if field == "section_root"
        ));
    }

    #[test]
    fn regression_from_toml_str_rejects_misspelled_route_key() {
        let config = FULL_CONFIG.replace(
            "[routes.overbridge]\nparent = \"crossings\"\nsubtype = true",
            "[routes.overbridge]\nparent = \"crossings\"\nsub_type = true",
        );
        assert_ne!(config, FULL_CONFIG);
        let error = RoutingTable::from_toml_str(&config).expect_err("typo rejected");
        assert!(matches!(error, RoutingConfigError::Parse(_)));
        assert!(error.to_string().contains("sub_type"));
    }

    #[test]
    fn regression_from_toml_str_reports_parse_errors() {
        let error = RoutingTable::from_toml_str("routes = 3").expect_err("bad shape");
        assert!(matches!(error, RoutingConfigError::Parse(_)));
    }

    #[test]
    fn functional_from_toml_path_reads_file() {
        let tempdir = tempfile::tempdir().expect("tempdir");
        let path = tempdir.path().join("routing.toml");
        std::fs::write(&path, FULL_CONFIG).expect("write config");
        let table = RoutingTable::from_toml_path(&path).expect("load config");
        assert_eq!(table.resolve_href("station", "s1"), "/works/stations/s1");

        let missing = tempdir.path().join("missing.toml");
        let error = RoutingTable::from_toml_path(&missing).expect_err("missing file");
        assert!(matches!(error, RoutingConfigError::Read { .. }));
    }

    #[test]
    fn unit_new_rejects_blank_parent_section() {
        let mut routes: BTreeMap<String, CategoryRoute> = builtin_routes();
        routes.insert("tunnel".to_string(), CategoryRoute::new(" ", false));
        let error = RoutingTable::new("structures", "structures", routes).expect_err("blank");
        assert!(matches!(error, RoutingConfigError::InvalidSegment { .. }));
    }
}
