//! History recording helpers.
//!
//! Appending is caller-invoked and happens only after a generation has
//! succeeded; failed operations leave no trace in history.

use std::path::Path;

use smotion_models::{HistoryItem, HistoryKind, RenderStyle};
use smotion_storage::HistoryStore;

use crate::error::StudioResult;

/// Record a successful image generation.
pub fn record_image_generation(
    store: &mut HistoryStore,
    prompt: &str,
    style: RenderStyle,
    source_data_url: &str,
    render_data_url: &str,
) -> StudioResult<HistoryItem> {
    let item = HistoryItem::new(
        HistoryKind::Image,
        prompt,
        style,
        source_data_url,
        render_data_url,
    );
    store.push(item.clone())?;
    Ok(item)
}

/// Record a successful video generation.
pub fn record_video_generation(
    store: &mut HistoryStore,
    prompt: &str,
    style: RenderStyle,
    source_data_url: &str,
    video_path: &Path,
) -> StudioResult<HistoryItem> {
    let item = HistoryItem::new(
        HistoryKind::Video,
        prompt,
        style,
        source_data_url,
        video_path.display().to_string(),
    );
    store.push(item.clone())?;
    Ok(item)
}
