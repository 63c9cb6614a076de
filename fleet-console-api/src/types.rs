use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Fixed page size used by the console's fleet list.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameters for the fleet list endpoint.
///
/// Combines page-based pagination with the address substring filter.
/// Pages are 1-indexed. The filter is matched server-side against
/// `BotRecord::address`; the client passes it through URL-encoded and
/// otherwise unescaped.
///
/// # Default
///
/// The default is `page = 1, page_size = 10`, with an empty filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Address substring filter; empty matches everything.
    pub address: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            address: String::new(),
        }
    }
}

impl ListQuery {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    /// - `address` is preserved as-is
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size),
            address: self.address.clone(),
        }
    }
}

// ============ Bot records ============

/// A managed bot agent as reported by the server.
///
/// The client holds an immutable snapshot per fetch and never patches
/// records locally; every mutation round-trips through the server
/// followed by a list refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotRecord {
    /// Unique positive identifier. `0` never appears in server data; it is
    /// reserved as the unsaved-draft sentinel (see [`BotDraft`]).
    pub id: u64,
    /// Network endpoint (`host:port`); display key and search target.
    pub address: String,
    /// Client certificate, PEM text. Opaque to the console.
    #[serde(default)]
    pub crt_file: String,
    /// Client key, PEM text. Opaque to the console.
    #[serde(default)]
    pub key_file: String,
    /// CA bundle, PEM text. Opaque to the console.
    #[serde(default)]
    pub ca_file: String,
    /// Server-reported status, display-only.
    #[serde(default)]
    pub status: String,
    /// Creation time, epoch seconds.
    #[serde(default)]
    pub create_time: i64,
    /// Last-update time, epoch seconds.
    #[serde(default)]
    pub update_time: i64,
}

/// The editable subset of a bot record, used as the wire payload for both
/// create and update.
///
/// The only thing distinguishing the two operations is the id sentinel:
/// `id == 0` means "not yet created" and dispatches to the create
/// endpoint; any nonzero id dispatches to update. The client never
/// invents nonzero ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotDraft {
    /// Record id, or `0` for an unsaved draft.
    pub id: u64,
    /// Network endpoint (`host:port`).
    pub address: String,
    /// Client certificate, PEM text.
    pub crt_file: String,
    /// Client key, PEM text.
    pub key_file: String,
    /// CA bundle, PEM text.
    pub ca_file: String,
}

impl BotDraft {
    /// An empty draft for the create form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft pre-populated from an existing record, for the edit form.
    #[must_use]
    pub fn from_record(record: &BotRecord) -> Self {
        Self {
            id: record.id,
            address: record.address.clone(),
            crt_file: record.crt_file.clone(),
            key_file: record.key_file.clone(),
            ca_file: record.ca_file.clone(),
        }
    }

    /// Whether this draft has not been created server-side yet.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

/// One page of the fleet list, as returned by the list endpoint.
///
/// `total` is authoritative from the server and drives the pagination
/// bounds; `list` is exactly the rows of the requested page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotPage {
    /// Rows of the requested page.
    pub list: Vec<BotRecord>,
    /// Total number of matching records across all pages.
    pub total: u64,
}

// ============ Structured config ============

/// Schema-agnostic structured configuration payload.
///
/// The console does not interpret the fields; the structured-config
/// editor renders and edits them generically.
pub type ConfigFields = serde_json::Map<String, serde_json::Value>;

/// Request body for the structured-config save endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigUpdateRequest {
    /// Target bot id.
    pub id: u64,
    /// Full replacement field set.
    pub config: ConfigFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_default() {
        let q = ListQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 10);
        assert!(q.address.is_empty());
    }

    #[test]
    fn list_query_validated_clamps_page() {
        let q = ListQuery {
            page: 0,
            page_size: 10,
            address: String::new(),
        };
        assert_eq!(q.validated(100).page, 1);
    }

    #[test]
    fn list_query_validated_clamps_page_size() {
        let q = ListQuery {
            page: 2,
            page_size: 500,
            address: "10.0".to_string(),
        };
        let v = q.validated(100);
        assert_eq!(v.page_size, 100);
        assert_eq!(v.address, "10.0");
    }

    #[test]
    fn draft_sentinel_dispatch() {
        assert!(BotDraft::new().is_new());

        let record = BotRecord {
            id: 7,
            address: "10.0.0.1:9000".to_string(),
            crt_file: String::new(),
            key_file: String::new(),
            ca_file: String::new(),
            status: "online".to_string(),
            create_time: 1_700_000_000,
            update_time: 1_700_000_000,
        };
        let draft = BotDraft::from_record(&record);
        assert!(!draft.is_new());
        assert_eq!(draft.address, "10.0.0.1:9000");
    }

    #[test]
    fn bot_record_decodes_with_missing_blobs() {
        let json = r#"{"id":1,"address":"10.0.0.1:9000","status":"online","create_time":1700000000,"update_time":1700000001}"#;
        let record: BotRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert!(record.crt_file.is_empty());
    }
}
