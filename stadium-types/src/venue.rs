//! Venue read models: crowd zones, energy meters, tickets, merchandise, logs.
//!
//! These mirror the records served by the backend's REST collections.
//! The console only reads them (ticket validation is the one mutation).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Crowd
// =============================================================================

/// Occupancy status reported for a crowd zone.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    #[default]
    Green,
    Yellow,
    Red,
}

impl std::fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Green => write!(f, "green"),
            Self::Yellow => write!(f, "yellow"),
            Self::Red => write!(f, "red"),
        }
    }
}

/// A monitored area of the stadium (gate, stand, lounge).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrowdZone {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
    pub current_count: i64,
    #[serde(default)]
    pub status: ZoneStatus,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    /// Next-hour forecast attached by the zone listing
    #[serde(default)]
    pub ai_prediction: Option<CrowdPrediction>,
}

impl CrowdZone {
    /// Occupancy as a percentage of capacity (0 when capacity is unknown).
    pub fn utilization_pct(&self) -> f64 {
        if self.capacity <= 0 {
            return 0.0;
        }
        self.current_count as f64 * 100.0 / self.capacity as f64
    }

    /// Zones above 90% occupancy need crowd control.
    pub fn is_critical(&self) -> bool {
        self.status == ZoneStatus::Red || self.utilization_pct() > 90.0
    }
}

/// Forecast risk bucket for a crowd zone.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CrowdPrediction {
    pub predicted_count: i64,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub suggestion: String,
}

// =============================================================================
// Energy
// =============================================================================

/// `GET /energy/` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnergyOverview {
    pub summary: EnergySummary,
    #[serde(default)]
    pub history: Vec<UsagePoint>,
    #[serde(default)]
    pub meters: Vec<EnergyMeter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnergySummary {
    /// Current draw across all meters, kW
    pub total_usage: f64,
}

/// One sample of the usage curve.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UsagePoint {
    /// Wall-clock label ("09:00")
    pub time: String,
    pub usage: f64,
    pub prediction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyMeter {
    pub id: i64,
    /// Physical location of the meter
    pub zone: String,
    /// Meter name ("HVAC North", "Floodlights")
    #[serde(rename = "type")]
    pub kind: String,
    pub current_reading: f64,
    /// optimal, high or critical
    #[serde(default)]
    pub status: String,
}

impl EnergyOverview {
    /// Peak of the predicted curve, kW.
    pub fn peak_prediction(&self) -> f64 {
        self.history
            .iter()
            .map(|p| p.prediction)
            .fold(0.0, f64::max)
    }

    /// Meters not in the optimal band.
    pub fn meters_needing_attention(&self) -> impl Iterator<Item = &EnergyMeter> {
        self.meters.iter().filter(|m| m.status != "optimal")
    }
}

// =============================================================================
// Tickets
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: i64,
    /// Event primary key
    pub event: i64,
    pub customer_name: String,
    pub ticket_code: String,
    #[serde(default)]
    pub is_validated: bool,
    #[serde(default)]
    pub entry_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fraud_score: f64,
    #[serde(default)]
    pub seat_number: String,
    #[serde(deserialize_with = "crate::money::deserialize")]
    pub price: f64,
}

impl Ticket {
    /// Fraud scores above this threshold are refused at the gate.
    pub const FRAUD_THRESHOLD: f64 = 0.8;

    pub fn is_suspicious(&self) -> bool {
        self.fraud_score > Self::FRAUD_THRESHOLD
    }
}

/// `POST /validate-ticket` request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TicketScan {
    pub code: String,
}

/// `POST /validate-ticket` response.
///
/// Rejections use HTTP 400/403/404 but keep this body shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TicketValidation {
    pub valid: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub details: Option<Ticket>,
}

// =============================================================================
// Merchandise
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MerchandiseItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(deserialize_with = "crate::money::deserialize")]
    pub price: f64,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub sold_count: i64,
}

impl MerchandiseItem {
    pub fn revenue(&self) -> f64 {
        self.price * self.sold_count as f64
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < 10
    }
}

// =============================================================================
// System logs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemLog {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub module: String,
    /// INFO, WARNING or ERROR
    pub level: String,
    pub message: String,
}
