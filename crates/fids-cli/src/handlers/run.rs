use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use fids_runtime::{BoardConfig, BoardRuntime, FeedClient, HttpFeedClient};
use tracing::info;

use crate::presentation::renderers::TuiRenderer;

pub fn handle(config: BoardConfig) -> Result<()> {
    let runtime = BoardRuntime::new(&config, Local)?;
    let client: Arc<dyn FeedClient> =
        Arc::new(HttpFeedClient::new(&config.base_url, config.request_timeout())?);

    info!(
        base_url = %config.base_url,
        daily_refresh = %config.daily_refresh,
        "starting board"
    );

    let tokio_rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = tokio_rt.block_on(TuiRenderer::new().run(runtime, client));

    // the terminal reader thread blocks on input; don't wait for it
    tokio_rt.shutdown_background();
    result
}
