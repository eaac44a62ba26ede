use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{build_params, opt_param};

/// A group as the admin API represents it on the wire.
///
/// Only the documented fields are named; everything else the server sends
/// lands in `other` and round-trips untouched. The schema is owned by the
/// remote system, so nothing here is validated locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_groups: Option<Vec<GroupRepresentation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm_roles: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, Value>,
}

impl GroupRepresentation {
    /// Minimal representation for creating a group by name.
    pub fn named(name: impl Into<String>) -> Self {
        GroupRepresentation {
            name: Some(name.into()),
            ..GroupRepresentation::default()
        }
    }
}

/// Query parameters for the group list endpoint. Unset fields are omitted
/// from the request entirely.
#[derive(Debug, Clone, Default)]
pub struct GroupQuery {
    pub search: Option<String>,
    pub exact: Option<bool>,
    pub brief_representation: Option<bool>,
    pub first: Option<i32>,
    pub max: Option<i32>,
}

impl GroupQuery {
    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        build_params([
            opt_param("search", self.search.clone()),
            opt_param("exact", self.exact.map(|value| value.to_string())),
            opt_param(
                "briefRepresentation",
                self.brief_representation.map(|value| value.to_string()),
            ),
            opt_param("first", self.first.map(|value| value.to_string())),
            opt_param("max", self.max.map(|value| value.to_string())),
        ])
    }
}

/// Placement options for group creation. `parent_id` routes the request to
/// the parent's `children` endpoint; it is never sent as a query parameter.
#[derive(Debug, Clone, Default)]
pub struct CreateGroupOptions {
    pub parent_id: Option<String>,
}
