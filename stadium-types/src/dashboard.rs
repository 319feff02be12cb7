//! Aggregated payload for the operations dashboard (`GET /dashboard-data`).

use serde::{Deserialize, Serialize};

use crate::venue::MerchandiseItem;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    #[serde(default)]
    pub active_events: i64,
    /// Stadium-wide occupancy, 0-100
    #[serde(default)]
    pub occupancy_percentage: i64,
    /// Synthetic health score, 0-100
    #[serde(default)]
    pub system_health: i64,
    #[serde(default)]
    pub ticketing: TicketingStats,
    #[serde(default)]
    pub crowd: CrowdStats,
    #[serde(default)]
    pub energy: EnergyStats,
    #[serde(default)]
    pub merchandise: MerchandiseStats,
    #[serde(default)]
    pub activity: Vec<ActivityEntry>,
    #[serde(default)]
    pub alerts: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TicketingStats {
    pub total_sold: i64,
    pub fraud_alerts: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CrowdStats {
    pub critical_zones: i64,
    pub total_zones: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnergyStats {
    pub total_usage: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MerchandiseStats {
    #[serde(deserialize_with = "crate::money::deserialize")]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_items: i64,
    #[serde(default)]
    pub breakdown: Vec<MerchandiseItem>,
}

/// One line of the activity feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub id: i64,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub detail: String,
    /// "HH:MM"
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub level: String,
}

impl DashboardData {
    /// Share of zones flagged critical, 0-100.
    pub fn critical_zone_pct(&self) -> f64 {
        if self.crowd.total_zones <= 0 {
            return 0.0;
        }
        self.crowd.critical_zones as f64 * 100.0 / self.crowd.total_zones as f64
    }
}
