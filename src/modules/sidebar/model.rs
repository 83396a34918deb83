use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::sidebar::{SidebarCategory, SidebarGroups};

#[derive(Debug, Serialize, ToSchema)]
pub struct SidebarResponse {
    /// `category -> expanded`
    #[schema(example = json!({"general": true, "learning": true, "community": false}))]
    pub groups: BTreeMap<String, bool>,
}

impl From<&SidebarGroups> for SidebarResponse {
    fn from(groups: &SidebarGroups) -> Self {
        Self {
            groups: groups.to_map(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleGroupResponse {
    pub category: SidebarCategory,
    pub expanded: bool,
    pub groups: BTreeMap<String, bool>,
}
