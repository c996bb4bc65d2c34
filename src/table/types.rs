//! Table definition, qualifiers and row type

use crate::cloudflare::{CustomHostname, CustomHostnameFilter};
use crate::error::{Error, Result};
use crate::types::{null_if_empty, JsonValue, OptionStringExt, ValueMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Table Definition
// ============================================================================

/// Column type exposed to the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Timestamp,
    Json,
}

/// A column of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub description: &'static str,
}

/// An equality qualifier accepted by an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyColumn {
    pub name: &'static str,
    pub required: bool,
}

/// Static description of a table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableDef {
    pub name: &'static str,
    pub description: &'static str,
    pub columns: &'static [ColumnDef],
    pub list_key_columns: &'static [KeyColumn],
    pub get_key_columns: &'static [KeyColumn],
}

impl TableDef {
    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// The `cloudflare_custom_hostname` table
pub const CUSTOM_HOSTNAME_TABLE: TableDef = TableDef {
    name: "cloudflare_custom_hostname",
    description: "Cloudflare Custom Hostname.",
    columns: &[
        ColumnDef {
            name: "id",
            column_type: ColumnType::String,
            description: "ID of the custom hostname.",
        },
        ColumnDef {
            name: "zone_id",
            column_type: ColumnType::String,
            description: "Zone where the custom hostname is defined.",
        },
        ColumnDef {
            name: "name",
            column_type: ColumnType::String,
            description: "Custom hostname value.",
        },
        ColumnDef {
            name: "status",
            column_type: ColumnType::String,
            description: "Status of the custom hostname (eg. 'active').",
        },
        ColumnDef {
            name: "created_on",
            column_type: ColumnType::Timestamp,
            description: "When the custom hostname was created.",
        },
        ColumnDef {
            name: "ssl",
            column_type: ColumnType::Json,
            description: "SSL meta JSON.",
        },
    ],
    list_key_columns: &[
        KeyColumn {
            name: "zone_id",
            required: true,
        },
        KeyColumn {
            name: "name",
            required: false,
        },
        KeyColumn {
            name: "status",
            required: false,
        },
    ],
    get_key_columns: &[
        KeyColumn {
            name: "zone_id",
            required: true,
        },
        KeyColumn {
            name: "id",
            required: true,
        },
    ],
};

// ============================================================================
// Qualifiers
// ============================================================================

/// Equality predicates handed over by the query engine, keyed by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EqualsQuals(ValueMap);

impl EqualsQuals {
    /// Create an empty set of qualifiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality predicate
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.0.insert(column.into(), value.into());
        self
    }

    /// String value of a qualifier; non-string values read as absent
    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.0.get(column).and_then(JsonValue::as_str)
    }

    fn required(&self, column: &str) -> Result<String> {
        self.get_str(column)
            .map(str::to_string)
            .ok_or_else(|| Error::missing_qual(column))
    }

    fn optional(&self, column: &str) -> Option<String> {
        self.get_str(column).map(str::to_string).none_if_empty()
    }
}

impl From<ValueMap> for EqualsQuals {
    fn from(map: ValueMap) -> Self {
        Self(map)
    }
}

/// Anything carrying the `zone_id` qualifier
pub trait ZoneQual {
    /// The zone the query is scoped to
    fn zone_id(&self) -> &str;
}

/// Qualifiers of a list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuals {
    pub zone_id: String,
    pub name: Option<String>,
    pub status: Option<String>,
}

impl ListQuals {
    /// List everything in a zone
    pub fn new(zone_id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            name: None,
            status: None,
        }
    }

    /// Only the given hostname
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Only hostnames in the given status
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Parse from equality predicates; `zone_id` is required
    pub fn from_quals(quals: &EqualsQuals) -> Result<Self> {
        Ok(Self {
            zone_id: quals.required("zone_id")?,
            name: quals.optional("name"),
            status: quals.optional("status"),
        })
    }

    /// Server-side filter for these qualifiers
    pub fn filter(&self) -> CustomHostnameFilter {
        CustomHostnameFilter {
            hostname: self.name.clone().none_if_empty(),
            status: self.status.clone().none_if_empty(),
        }
    }
}

impl ZoneQual for ListQuals {
    fn zone_id(&self) -> &str {
        &self.zone_id
    }
}

/// Qualifiers of a point lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetQuals {
    pub zone_id: String,
    pub id: String,
}

impl GetQuals {
    pub fn new(zone_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            id: id.into(),
        }
    }

    /// Parse from equality predicates; `zone_id` and `id` are required
    pub fn from_quals(quals: &EqualsQuals) -> Result<Self> {
        Ok(Self {
            zone_id: quals.required("zone_id")?,
            id: quals.required("id")?,
        })
    }
}

impl ZoneQual for GetQuals {
    fn zone_id(&self) -> &str {
        &self.zone_id
    }
}

// ============================================================================
// Rows
// ============================================================================

/// One row of the custom hostname table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomHostnameRow {
    pub id: String,
    pub zone_id: String,
    pub name: String,
    pub status: String,
    pub created_on: Option<DateTime<Utc>>,
    pub ssl: Option<JsonValue>,
}

impl CustomHostnameRow {
    /// Map a hostname from a listing page. `status` is the hostname status.
    pub fn from_listing(hostname: CustomHostname) -> Self {
        Self {
            id: hostname.id,
            zone_id: String::new(),
            name: hostname.hostname,
            status: hostname.status,
            created_on: hostname.created_at,
            ssl: null_if_empty(hostname.ssl),
        }
    }

    /// Map a hostname from a point lookup. `status` is the SSL status,
    /// empty when SSL reports none.
    pub fn from_lookup(hostname: CustomHostname) -> Self {
        let status = hostname.ssl_status().unwrap_or_default().to_string();
        Self {
            status,
            ..Self::from_listing(hostname)
        }
    }
}

/// Fill `zone_id` from the query qualifiers, ignoring the payload
pub fn hydrate_zone_id<Q: ZoneQual>(mut row: CustomHostnameRow, quals: &Q) -> CustomHostnameRow {
    row.zone_id = quals.zone_id().to_string();
    row
}
