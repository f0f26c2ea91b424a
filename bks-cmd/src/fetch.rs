//! Download the dataset to a local file.

use bks_core::{base_table::BaseTable, source::DatasetSource};
use log::info;
use std::path::Path;

/// Fetch the CSV, make sure it loads as a Base Table, then write the raw
/// text to `output`. Nothing is written when validation fails.
pub async fn run_fetch(url: Option<String>, output: &Path) -> anyhow::Result<()> {
    let source = DatasetSource::resolve(None, url);
    info!("Fetching dataset from {}", source);

    let body = source.fetch_text().await?;
    let table = BaseTable::from_csv(&body)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, &body)?;

    info!(
        "Wrote {} rows ({} bytes) to {}",
        table.len(),
        body.len(),
        output.display()
    );
    Ok(())
}
