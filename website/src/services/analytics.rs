use serde::Serialize;
use tracing::warn;

use crate::run::AppState;
use sala::locale::Locale;

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub locale: Locale,
    pub path: String,
}

impl AnalyticsEvent {
    pub fn new(name: &str, locale: Locale, path: &str) -> Self {
        AnalyticsEvent {
            name: name.to_string(),
            locale,
            path: path.to_string(),
        }
    }
}

/// Fire-and-forget event delivery.
///
/// Failures never reach the user; delivery happens off the request task and
/// errors are logged and dropped.
pub fn track_event(state: &AppState, event: AnalyticsEvent) {
    let Some(url) = state.config.analytics_url.clone() else {
        return;
    };
    let client = state.client.clone();

    tokio::spawn(async move {
        if let Err(err) = client.post(url).json(&event).send().await {
            warn!("Analytics delivery failed for {}: {}", event.name, err);
        }
    });
}
