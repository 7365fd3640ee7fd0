//! HTTP API Client
//!
//! Functions for communicating with the ZoneWatch REST API. Every
//! endpoint is a parameterless GET returning a JSON body; all of them go
//! through the single [`fetch_json`] helper.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::models::*;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8001/api/v1";

/// Local-storage key holding an operator override of the API base URL.
const API_BASE_KEY: &str = "zonewatch_api_url";

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Strip trailing slashes so path joins stay well-formed.
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Issue a GET against `path` under the configured base URL and parse the
/// JSON body. No retry, no caching, no auth; a network or parse failure
/// becomes the `Err` message the caller surfaces.
async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = format!("{}{}", get_api_base(), path);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all monitored risk zones.
pub async fn fetch_risk_zones() -> Result<Vec<RiskZone>, String> {
    fetch_json("/risk-zones").await
}

/// Fetch the hourly 24-hour forecast.
pub async fn fetch_forecast_24h() -> Result<Vec<HourlyForecast>, String> {
    fetch_json("/forecast/24h").await
}

/// Fetch the 3-day zone classification outlook.
pub async fn fetch_forecast_3day() -> Result<Vec<DailyOutlook>, String> {
    fetch_json("/forecast/3day").await
}

/// Fetch the 7-day risk index projection.
pub async fn fetch_forecast_7day() -> Result<Vec<WeeklyProjection>, String> {
    fetch_json("/forecast/7day").await
}

/// Fetch the chronologically ordered historical timeline.
pub async fn fetch_historical_data() -> Result<Vec<HistoricalPeriod>, String> {
    fetch_json("/history/data").await
}

/// Fetch recorded events with their prediction outcomes.
pub async fn fetch_historical_events() -> Result<Vec<HistoricalEvent>, String> {
    fetch_json("/history/events").await
}

/// Fetch monthly risk classification counts.
pub async fn fetch_risk_trend() -> Result<Vec<RiskTrend>, String> {
    fetch_json("/analytics/risk-trend").await
}

/// Fetch weekly prediction accuracy samples.
pub async fn fetch_prediction_accuracy() -> Result<Vec<AccuracyPoint>, String> {
    fetch_json("/analytics/accuracy").await
}

/// Fetch incident counts per zone.
pub async fn fetch_zone_activity() -> Result<Vec<ZoneActivity>, String> {
    fetch_json("/analytics/zone-activity").await
}

/// Fetch the live system health summary.
pub async fn fetch_system_status() -> Result<SystemStatus, String> {
    fetch_json("/analytics/status").await
}

/// Fetch model feature importances.
pub async fn fetch_feature_importance() -> Result<Vec<FeatureImportance>, String> {
    fetch_json("/explain/feature-importance").await
}

/// Fetch per-zone prediction factor breakdowns.
pub async fn fetch_prediction_breakdown() -> Result<Vec<PredictionBreakdown>, String> {
    fetch_json("/explain/prediction-breakdown").await
}

/// Fetch aggregate model quality metrics.
pub async fn fetch_model_metrics() -> Result<Vec<ModelMetric>, String> {
    fetch_json("/explain/model-metrics").await
}

/// Fetch available report metadata.
pub async fn fetch_reports() -> Result<Vec<Report>, String> {
    fetch_json("/reports").await
}

/// Fetch AI-generated intelligence summaries.
pub async fn fetch_insights() -> Result<Vec<Insight>, String> {
    fetch_json("/reports/insights").await
}

/// Fetch access-control roles.
pub async fn fetch_roles() -> Result<Vec<Role>, String> {
    fetch_json("/access/roles").await
}

/// Fetch the user activity log.
pub async fn fetch_activity_log() -> Result<Vec<ActivityEntry>, String> {
    fetch_json("/access/activity-log").await
}

/// Fetch full comparison profiles for the compared zones.
pub async fn fetch_zone_comparison() -> Result<Vec<ZoneComparison>, String> {
    fetch_json("/comparison/zones").await
}

/// Fetch weekly risk indices for the compared zones.
pub async fn fetch_comparison_trend() -> Result<Vec<ComparisonTrend>, String> {
    fetch_json("/comparison/trend").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base("http://localhost:8001/api/v1/"),
            "http://localhost:8001/api/v1"
        );
        assert_eq!(
            normalize_base("http://localhost:8001/api/v1"),
            "http://localhost:8001/api/v1"
        );
        assert_eq!(normalize_base("http://h/api/v1//"), "http://h/api/v1");
    }
}
