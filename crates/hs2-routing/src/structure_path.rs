use serde::Serialize;

use crate::text::snake_case_to_title_case;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl BreadcrumbItem {
    fn link(title: String, url: String) -> Self {
        Self {
            title,
            url: Some(url),
        }
    }

    fn current(title: &str) -> Self {
        Self {
            title: title.to_string(),
            url: None,
        }
    }
}

/// Parsed `/structures/<section>/[<subtype>/]<id>` detail path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructurePath {
    pub section: String,
    pub subtype: Option<String>,
    pub feature_id: String,
}

impl StructurePath {
    /// `slug` is either `[id]` or `[subtype, id]`; longer slugs keep the
    /// first two segments.
    pub fn parse(section: &str, slug: &[&str]) -> Option<Self> {
        let (subtype, feature_id) = match slug {
            [] => return None,
            [id] => (None, *id),
            [subtype, id, ..] => (Some(subtype.to_string()), *id),
        };
        if feature_id.is_empty() {
            return None;
        }
        Some(Self {
            section: section.to_string(),
            subtype,
            feature_id: feature_id.to_string(),
        })
    }

    /// Trail from the structures index down to the feature itself.
    pub fn breadcrumbs(&self, display_name: &str) -> Vec<BreadcrumbItem> {
        let section_url = format!("/structures/{}", self.section);
        let mut items = vec![
            BreadcrumbItem::link("Structures".to_string(), "/structures".to_string()),
            BreadcrumbItem::link(snake_case_to_title_case(&self.section), section_url.clone()),
        ];
        if let Some(subtype) = self.subtype.as_deref().filter(|value| !value.is_empty()) {
            items.push(BreadcrumbItem::link(
                snake_case_to_title_case(subtype),
                format!("{section_url}/{subtype}"),
            ));
        }
        items.push(BreadcrumbItem::current(display_name));
        items
    }
}
