// Spreadsheet data source

use anyhow::Result;
use async_trait::async_trait;

/// Rows of cell values, header row first.
pub type SheetRows = Vec<Vec<String>>;

#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_rows(&self) -> Result<SheetRows>;
}

/// Returns a fixed inventory table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubSheetSource;

#[async_trait]
impl SheetSource for StubSheetSource {
    async fn fetch_rows(&self) -> Result<SheetRows> {
        let rows = [
            ["page", "status", "last_reviewed"],
            ["/", "live", "2024-01-01"],
            ["/pricing", "draft", "2024-01-01"],
        ];

        Ok(rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect())
    }
}
