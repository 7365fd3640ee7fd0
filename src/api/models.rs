//! API Response Models
//!
//! Wire shapes for the ZoneWatch REST API. Every entity here is a
//! read-only view model reconstructed from a fetch response and discarded
//! when its page unmounts; nothing is written back to the server.

use serde::Deserialize;

/// Three-way risk classification driving all color coding.
///
/// Unexpected wire values collapse into [`RiskLevel::Unknown`], which
/// renders the neutral mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Moderate,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    /// Accent color for chart strokes, markers and inline styles.
    pub fn accent(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "#00ff87",
            RiskLevel::Moderate => "#ffb800",
            RiskLevel::High => "#ff3366",
            RiskLevel::Unknown => "#ffffff",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "text-[#00ff87]",
            RiskLevel::Moderate => "text-[#ffb800]",
            RiskLevel::High => "text-[#ff3366]",
            RiskLevel::Unknown => "text-white",
        }
    }

    pub fn border_class(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "border-[#00ff87]/30",
            RiskLevel::Moderate => "border-[#ffb800]/30",
            RiskLevel::High => "border-[#ff3366]/30",
            RiskLevel::Unknown => "border-white/30",
        }
    }

    pub fn glow_class(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "glow-safe",
            RiskLevel::Moderate => "glow-moderate",
            RiskLevel::High => "glow-high-risk",
            RiskLevel::Unknown => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Unknown => "unknown",
        }
    }

    /// Classify a 0-100 risk index: >=70 high, >=50 moderate, else safe.
    pub fn from_index(index: u32) -> RiskLevel {
        if index >= 70 {
            RiskLevel::High
        } else if index >= 50 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Safe
        }
    }
}

/// Alert severity, distinct from [`RiskLevel`]: alerts grade urgency,
/// zones grade exposure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Severity {
    pub fn accent(&self) -> &'static str {
        match self {
            Severity::Critical => "#ff3366",
            Severity::Warning => "#ffb800",
            Severity::Info => "#00d4ff",
            Severity::Unknown => "#ffffff",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Severity::Critical => "text-[#ff3366]",
            Severity::Warning => "text-[#ffb800]",
            Severity::Info => "text-[#00d4ff]",
            Severity::Unknown => "text-white",
        }
    }

    pub fn border_class(&self) -> &'static str {
        match self {
            Severity::Critical => "border-[#ff3366]/50",
            Severity::Warning => "border-[#ffb800]/50",
            Severity::Info => "border-[#00d4ff]/50",
            Severity::Unknown => "border-white/50",
        }
    }

    pub fn glow_class(&self) -> &'static str {
        match self {
            Severity::Critical => "glow-high-risk",
            Severity::Warning => "glow-moderate",
            Severity::Info => "glow-cyan",
            Severity::Unknown => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Unknown => "unknown",
        }
    }
}

/// A monitored geographic zone with its current assessment.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskZone {
    pub id: String,
    pub zone: String,
    pub risk_level: RiskLevel,
    pub confidence: u32,
    pub forecast: String,
    #[serde(default)]
    pub indicators: Vec<String>,
}

/// An entry in the alert feed. Held client-side only; dismissal removes
/// it from the local list and nothing else.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Alert {
    pub id: String,
    pub zone: String,
    pub severity: Severity,
    pub message: String,
    pub timestamp: String,
    pub confidence: u32,
}

/// Percent-based plot position on the abstract world map.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// A zone as rendered on the map: a risk zone plus 2-D coordinates.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapZone {
    pub id: String,
    pub name: String,
    pub position: MapPoint,
    pub risk_level: RiskLevel,
    pub confidence: u32,
    pub details: String,
}

/// Hour-resolution point of the 24-hour forecast.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HourlyForecast {
    pub hour: String,
    pub risk: u32,
    pub confidence: u32,
}

/// Zone classification counts for one day of the 3-day outlook.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DailyOutlook {
    pub day: String,
    pub safe: u32,
    pub moderate: u32,
    pub high: u32,
}

/// One day of the 7-day risk index projection.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProjection {
    pub day: String,
    pub risk_index: u32,
    pub trend: String,
}

/// One period of the historical timeline. The sequence returned by the
/// API is chronologically ordered; the playback cursor indexes into it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoricalPeriod {
    pub date: String,
    pub risk: u32,
    pub incidents: u32,
}

/// A recorded event with its prediction outcome.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEvent {
    pub date: String,
    pub zone: String,
    pub event: String,
    pub risk_level: RiskLevel,
    pub actual_vs_predicted: String,
    pub impact: String,
}

/// Monthly zone-classification counts for the analytics trend chart.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RiskTrend {
    pub month: String,
    pub high: u32,
    pub moderate: u32,
    pub safe: u32,
}

/// Weekly model accuracy sample.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccuracyPoint {
    pub week: String,
    pub accuracy: u32,
}

/// Incident count per zone for the activity chart.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ZoneActivity {
    pub zone: String,
    pub incidents: u32,
}

/// Live system health summary.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub model_accuracy: f64,
    pub predictions_per_hour: u32,
    pub avg_response_time: String,
    pub status: String,
}

/// Relative weight of one model input feature.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: u32,
    pub color: String,
}

/// Named factor contribution, 0-100.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BreakdownFactor {
    pub name: String,
    pub value: u32,
}

/// Per-zone factor decomposition of a prediction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictionBreakdown {
    pub zone: String,
    pub confidence: u32,
    pub factors: Vec<BreakdownFactor>,
}

/// Aggregate model quality metric.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ModelMetric {
    pub metric: String,
    pub score: f64,
}

/// Downloadable report metadata. Purely descriptive; no generation
/// happens client-side.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Report {
    pub title: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub pages: u32,
    pub size: String,
    pub status: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// AI-generated intelligence summary. The severity here is a risk
/// grading, so it reuses [`RiskLevel`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Insight {
    pub title: String,
    pub zone: String,
    pub severity: RiskLevel,
    pub insight: String,
    pub confidence: u32,
}

/// Access-control role with its permission set.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Role {
    pub name: String,
    pub level: String,
    pub users: u32,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub color: String,
}

/// One line of the user activity log.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ActivityEntry {
    pub user: String,
    pub action: String,
    pub role: String,
    pub time: String,
}

/// Named factor value used in zone comparison.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ComparisonFactor {
    pub metric: String,
    pub value: u32,
}

/// Full comparison profile of one zone.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneComparison {
    pub zone: String,
    pub risk_level: RiskLevel,
    pub confidence: u32,
    pub population: String,
    pub risk_index: u32,
    pub trend: String,
    pub escalation_speed: String,
    pub factors: Vec<ComparisonFactor>,
}

/// Weekly risk index per compared zone.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ComparisonTrend {
    pub week: String,
    pub pnw: u32,
    pub caribbean: u32,
    pub arctic: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_zone_parses_wire_shape() {
        let json = r#"{
            "id": "1",
            "zone": "Pacific Northwest",
            "riskLevel": "high",
            "confidence": 94,
            "forecast": "48-72 hours",
            "indicators": ["Seismic Activity", "Tectonic Shifts"]
        }"#;
        let zone: RiskZone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.risk_level, RiskLevel::High);
        assert_eq!(zone.confidence, 94);
        assert_eq!(zone.indicators.len(), 2);
    }

    #[test]
    fn unknown_risk_level_falls_back() {
        let json = r#"{
            "id": "9",
            "zone": "Atlantis",
            "riskLevel": "catastrophic",
            "confidence": 50,
            "forecast": "n/a",
            "indicators": []
        }"#;
        let zone: RiskZone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.risk_level, RiskLevel::Unknown);
        assert_eq!(zone.risk_level.glow_class(), "");
    }

    #[test]
    fn high_mapping_is_exclusive_for_all_confidences() {
        // The riskLevel alone determines the mapping, never confidence.
        for confidence in 0..=100u32 {
            let _ = confidence;
            let high = RiskLevel::High;
            assert_eq!(high.accent(), "#ff3366");
            assert_ne!(high.accent(), RiskLevel::Moderate.accent());
            assert_ne!(high.accent(), RiskLevel::Safe.accent());
            assert_ne!(high.border_class(), RiskLevel::Moderate.border_class());
            assert_ne!(high.glow_class(), RiskLevel::Safe.glow_class());
        }
    }

    #[test]
    fn index_classification_thresholds() {
        assert_eq!(RiskLevel::from_index(71), RiskLevel::High);
        assert_eq!(RiskLevel::from_index(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_index(69), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_index(50), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_index(49), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_index(0), RiskLevel::Safe);
    }

    #[test]
    fn severity_parses_lowercase_literals() {
        let json = r#"{
            "id": "a1",
            "zone": "Caribbean Basin",
            "severity": "critical",
            "message": "Hurricane formation confirmed.",
            "timestamp": "5 min ago",
            "confidence": 91
        }"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.severity, Severity::Critical);
        assert_eq!(alert.severity.label(), "critical");
    }

    #[test]
    fn comparison_zone_parses_camel_case() {
        let json = r#"{
            "zone": "Arctic Circle",
            "riskLevel": "moderate",
            "confidence": 82,
            "population": "4.3M",
            "riskIndex": 62,
            "trend": "+8%",
            "escalationSpeed": "Moderate",
            "factors": [{"metric": "Seismic", "value": 25}]
        }"#;
        let zone: ZoneComparison = serde_json::from_str(json).unwrap();
        assert_eq!(zone.risk_index, 62);
        assert_eq!(zone.escalation_speed, "Moderate");
        assert_eq!(zone.factors[0].metric, "Seismic");
    }

    #[test]
    fn report_type_field_maps_to_kind() {
        let json = r#"{
            "title": "Q4 2025 Risk Trends",
            "date": "Q4 2025",
            "type": "Quarterly Report",
            "pages": 38,
            "size": "4.5 MB",
            "status": "Ready",
            "highlights": ["Seasonal trend analysis"]
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.kind, "Quarterly Report");
        assert_eq!(report.pages, 38);
    }
}
