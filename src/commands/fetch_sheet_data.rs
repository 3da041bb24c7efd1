//! Handler for the `FETCH_SHEET_DATA` command.
//!
//! Pulls rows from the configured sheet source. Takes no arguments.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use super::{CommandArgs, CommandError, CommandHandler, CommandOutcome, FETCH_SHEET_DATA};
use crate::providers::SheetSource;

pub struct FetchSheetDataHandler {
    sheets: Arc<dyn SheetSource>,
}

impl FetchSheetDataHandler {
    pub fn new(sheets: Arc<dyn SheetSource>) -> Self {
        Self { sheets }
    }

    async fn run(&self, args: CommandArgs) -> Result<CommandOutcome, CommandError> {
        super::reject_remaining(&args)?;

        let rows = self
            .sheets
            .fetch_rows()
            .await
            .map_err(|e| CommandError::upstream("Sheet data fetch failed", e))?;
        debug!(rows = rows.len(), "sheet rows fetched");

        Ok(CommandOutcome::success("Sheet data fetched successfully"))
    }
}

impl CommandHandler for FetchSheetDataHandler {
    fn name(&self) -> &str {
        FETCH_SHEET_DATA
    }

    fn description(&self) -> &str {
        "Fetch rows from the inventory spreadsheet."
    }

    fn execute(
        &self,
        args: CommandArgs,
    ) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + '_>> {
        Box::pin(async move { self.run(args).await.unwrap_or_else(CommandOutcome::from) })
    }
}
