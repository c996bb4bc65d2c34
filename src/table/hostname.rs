//! List and get operations of the custom hostname table

use super::types::{
    hydrate_zone_id, CustomHostnameRow, EqualsQuals, GetQuals, ListQuals, TableDef,
    CUSTOM_HOSTNAME_TABLE,
};
use crate::cloudflare::{CloudflareClient, CustomHostname};
use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use crate::pagination::{PageCursor, PageReport};
use futures::stream::{self, Stream, TryStreamExt};
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, error};

/// Rows produced lazily by a list query
pub type RowStream = Pin<Box<dyn Stream<Item = Result<CustomHostnameRow>> + Send>>;

/// The custom hostname table bound to host-supplied connection settings.
///
/// Each call opens its own connection; nothing is shared between calls.
#[derive(Debug, Clone)]
pub struct CustomHostnameTable {
    config: ConnectionConfig,
}

impl CustomHostnameTable {
    /// Create a table that connects with the given settings
    pub fn new(config: ConnectionConfig) -> Self {
        Self { config }
    }

    /// Static table definition
    pub fn definition() -> &'static TableDef {
        &CUSTOM_HOSTNAME_TABLE
    }

    /// Stream every custom hostname of a zone matching the qualifiers.
    ///
    /// Pages are requested only as the stream is polled. The first failing
    /// page ends the stream with that error; rows already yielded stand.
    pub fn list(&self, quals: &ListQuals) -> Result<RowStream> {
        let client = CloudflareClient::connect(&self.config)?;
        Ok(stream_custom_hostnames(client, quals.clone()))
    }

    /// Look up one custom hostname; `Ok(None)` when it does not exist
    pub async fn get(&self, quals: &GetQuals) -> Result<Option<CustomHostnameRow>> {
        let client = CloudflareClient::connect(&self.config)?;
        fetch_custom_hostname(&client, quals).await
    }

    /// `list` driven by raw equality predicates
    pub fn list_by_quals(&self, quals: &EqualsQuals) -> Result<RowStream> {
        self.list(&ListQuals::from_quals(quals)?)
    }

    /// `get` driven by raw equality predicates
    pub async fn get_by_quals(&self, quals: &EqualsQuals) -> Result<Option<CustomHostnameRow>> {
        self.get(&GetQuals::from_quals(quals)?).await
    }
}

/// Walk the listing endpoint page by page, yielding one row per hostname
pub fn stream_custom_hostnames(client: CloudflareClient, quals: ListQuals) -> RowStream {
    let client = Arc::new(client);
    let filter = quals.filter();
    let zone_id: Arc<str> = Arc::from(quals.zone_id.as_str());

    let pages = stream::try_unfold(PageCursor::new(), move |mut cursor| {
        let client = Arc::clone(&client);
        let filter = filter.clone();
        let zone_id = Arc::clone(&zone_id);
        async move {
            if cursor.is_done() {
                return Ok(None);
            }

            let page = cursor.page();
            let (items, info) = client
                .custom_hostnames(&zone_id, page, &filter)
                .await
                .map_err(|e| {
                    error!(zone_id = %zone_id, page, error = %e, "Failed to list custom hostnames");
                    e
                })?;

            let report = info.as_ref().map(PageReport::from);
            cursor.advance(report.as_ref(), items.len());
            debug!(
                zone_id = %zone_id,
                page,
                items = items.len(),
                total_pages = report.map_or(0, |r| r.total_pages),
                done = cursor.is_done(),
                "Fetched custom hostname page"
            );
            if cursor.is_done() {
                debug!(
                    zone_id = %zone_id,
                    pages = cursor.pages_fetched(),
                    records = cursor.records_fetched(),
                    "Finished listing custom hostnames"
                );
            }

            Ok::<_, Error>(Some((items, cursor)))
        }
    });

    let rows = pages
        .map_ok(move |items: Vec<CustomHostname>| {
            let quals = quals.clone();
            stream::iter(items.into_iter().map(move |hostname| {
                Ok::<_, Error>(hydrate_zone_id(
                    CustomHostnameRow::from_listing(hostname),
                    &quals,
                ))
            }))
        })
        .try_flatten();

    Box::pin(rows)
}

/// Fetch one hostname, folding a not-found response into `None`
pub async fn fetch_custom_hostname(
    client: &CloudflareClient,
    quals: &GetQuals,
) -> Result<Option<CustomHostnameRow>> {
    match client.custom_hostname(&quals.zone_id, &quals.id).await {
        Ok(hostname) => Ok(Some(hydrate_zone_id(
            CustomHostnameRow::from_lookup(hostname),
            quals,
        ))),
        Err(e) if e.is_not_found() => {
            debug!(zone_id = %quals.zone_id, id = %quals.id, "Custom hostname not found");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
