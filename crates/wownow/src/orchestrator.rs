//! Concurrent retrieval of every product's versions table

use chrono::Utc;
use futures::future::try_join_all;
use wownow_formats::TableResponse;
use wownow_protocol::{ProtocolError, TextFetcher, VersionsClient};

use crate::error::RunError;
use crate::report::Report;

/// Products reported when none are requested explicitly
pub const DEFAULT_PRODUCTS: [&str; 3] = ["wow", "wow_classic", "wow_classic_era"];

/// Fetch all versions tables concurrently
///
/// Results are paired with their product and returned in the order of
/// `products`, whatever order the responses arrive in. The first failure
/// aborts the whole collection.
pub async fn collect_versions<F: TextFetcher>(
    client: &VersionsClient<F>,
    products: &[String],
) -> Result<Vec<(String, TableResponse)>, ProtocolError> {
    let tables = try_join_all(products.iter().map(|product| async move {
        let table = client.fetch_versions(product).await?;
        tracing::info!(
            product = %product,
            seqn = table.sequence_number(),
            regions = table.row_count(),
            "retrieved versions"
        );
        Ok::<_, ProtocolError>(table)
    }))
    .await?;

    Ok(products.iter().cloned().zip(tables).collect())
}

/// Fetch every product and assemble the report
///
/// The retrieval timestamp is taken once all tables have arrived.
pub async fn build_report<F: TextFetcher>(
    client: &VersionsClient<F>,
    products: &[String],
) -> Result<Report, RunError> {
    let tables = collect_versions(client, products).await?;
    let report = Report::assemble(Utc::now(), &tables)?;
    Ok(report)
}
