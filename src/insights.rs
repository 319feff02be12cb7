//! Figures derived from backend read models for the KPI cards.
//!
//! Pure functions over `stadium-types`; the pages only format them.

use stadium_types::{CrowdZone, DashboardData, EnergyOverview, MerchandiseItem, Ticket};

/// Grid emission factor used for the carbon estimate, kg CO2 per kWh.
pub const GRID_KG_CO2_PER_KWH: f64 = 0.4;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrowdSummary {
    pub attendance: i64,
    pub capacity: i64,
    pub critical_zones: usize,
    /// Zones whose forecast is high risk, with the suggested action
    pub advisories: Vec<(String, String)>,
}

impl CrowdSummary {
    pub fn from_zones(zones: &[CrowdZone]) -> Self {
        let advisories = zones
            .iter()
            .filter_map(|z| {
                let prediction = z.ai_prediction.as_ref()?;
                (prediction.risk_level == stadium_types::RiskLevel::High)
                    .then(|| (z.name.clone(), prediction.suggestion.clone()))
            })
            .collect();

        Self {
            attendance: zones.iter().map(|z| z.current_count).sum(),
            capacity: zones.iter().map(|z| z.capacity).sum(),
            critical_zones: zones.iter().filter(|z| z.is_critical()).count(),
            advisories,
        }
    }

    pub fn occupancy_pct(&self) -> f64 {
        percent(self.attendance as f64, self.capacity as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketingSummary {
    pub issued: usize,
    pub validated: usize,
    pub suspicious: usize,
    pub gross_sales: f64,
}

impl TicketingSummary {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        Self {
            issued: tickets.len(),
            validated: tickets.iter().filter(|t| t.is_validated).count(),
            suspicious: tickets.iter().filter(|t| t.is_suspicious()).count(),
            gross_sales: tickets.iter().map(|t| t.price).sum(),
        }
    }

    pub fn validation_rate_pct(&self) -> f64 {
        percent(self.validated as f64, self.issued as f64)
    }

    pub fn average_price(&self) -> f64 {
        if self.issued == 0 {
            0.0
        } else {
            self.gross_sales / self.issued as f64
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MerchandiseSummary {
    pub revenue: f64,
    pub units_sold: i64,
    pub low_stock: Vec<String>,
    pub best_seller: Option<String>,
}

impl MerchandiseSummary {
    pub fn from_items(items: &[MerchandiseItem]) -> Self {
        Self {
            revenue: items.iter().map(MerchandiseItem::revenue).sum(),
            units_sold: items.iter().map(|i| i.sold_count).sum(),
            low_stock: items
                .iter()
                .filter(|i| i.is_low_stock())
                .map(|i| i.name.clone())
                .collect(),
            best_seller: items
                .iter()
                .filter(|i| i.sold_count > 0)
                .max_by_key(|i| i.sold_count)
                .map(|i| i.name.clone()),
        }
    }
}

/// Cross-module figures for the analytics page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsSummary {
    pub occupancy_pct: i64,
    pub fraud_rate_pct: f64,
    pub revenue_per_ticket: f64,
    pub energy_per_ticket_kw: f64,
    pub ticketing: TicketingSummary,
}

impl AnalyticsSummary {
    pub fn new(dashboard: &DashboardData, tickets: &[Ticket]) -> Self {
        let sold = dashboard.ticketing.total_sold as f64;
        let per_ticket = |v: f64| if sold > 0.0 { v / sold } else { 0.0 };

        Self {
            occupancy_pct: dashboard.occupancy_percentage,
            fraud_rate_pct: percent(dashboard.ticketing.fraud_alerts as f64, sold),
            revenue_per_ticket: per_ticket(dashboard.merchandise.total_revenue),
            energy_per_ticket_kw: per_ticket(dashboard.energy.total_usage),
            ticketing: TicketingSummary::from_tickets(tickets),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SustainabilitySummary {
    /// Sum of the sampled usage curve, treated as hourly kWh
    pub sampled_kwh: f64,
    pub estimated_kg_co2: f64,
    /// Positive when actual usage ran under the forecast
    pub savings_vs_forecast_pct: f64,
    pub optimal_meter_pct: f64,
}

impl SustainabilitySummary {
    pub fn from_energy(energy: &EnergyOverview) -> Self {
        let actual: f64 = energy.history.iter().map(|p| p.usage).sum();
        let forecast: f64 = energy.history.iter().map(|p| p.prediction).sum();
        let optimal = energy
            .meters
            .iter()
            .filter(|m| m.status == "optimal")
            .count();

        Self {
            sampled_kwh: actual,
            estimated_kg_co2: actual * GRID_KG_CO2_PER_KWH,
            savings_vs_forecast_pct: percent(forecast - actual, forecast),
            optimal_meter_pct: percent(optimal as f64, energy.meters.len() as f64),
        }
    }
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part * 100.0 / whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stadium_types::{CrowdPrediction, EnergyMeter, RiskLevel, UsagePoint, ZoneStatus};

    fn zone(name: &str, capacity: i64, count: i64, risk: RiskLevel) -> CrowdZone {
        CrowdZone {
            id: 0,
            name: name.to_string(),
            capacity,
            current_count: count,
            status: ZoneStatus::Green,
            last_updated: None,
            ai_prediction: Some(CrowdPrediction {
                predicted_count: count,
                risk_level: risk,
                suggestion: if risk == RiskLevel::High {
                    "Open Gate B".to_string()
                } else {
                    "Monitor".to_string()
                },
            }),
        }
    }

    fn ticket(price: f64, validated: bool, fraud: f64) -> Ticket {
        Ticket {
            id: 0,
            event: 1,
            customer_name: "Fan".to_string(),
            ticket_code: "TKT".to_string(),
            is_validated: validated,
            entry_time: None,
            fraud_score: fraud,
            seat_number: "A1".to_string(),
            price,
        }
    }

    #[test]
    fn test_crowd_summary() {
        let zones = vec![
            zone("North Gate A", 500, 120, RiskLevel::Low),
            zone("South Stand", 2000, 1850, RiskLevel::High),
        ];
        let summary = CrowdSummary::from_zones(&zones);
        assert_eq!(summary.attendance, 1970);
        assert_eq!(summary.critical_zones, 1);
        assert_eq!(
            summary.advisories,
            vec![("South Stand".to_string(), "Open Gate B".to_string())]
        );
        assert!((summary.occupancy_pct() - 78.8).abs() < 1e-9);
    }

    #[test]
    fn test_ticketing_summary() {
        let tickets = vec![
            ticket(50.0, true, 0.1),
            ticket(100.0, false, 0.9),
            ticket(90.0, true, 0.0),
            ticket(80.0, false, 0.05),
        ];
        let summary = TicketingSummary::from_tickets(&tickets);
        assert_eq!(summary.issued, 4);
        assert_eq!(summary.validated, 2);
        assert_eq!(summary.suspicious, 1);
        assert_eq!(summary.validation_rate_pct(), 50.0);
        assert_eq!(summary.average_price(), 80.0);
        assert_eq!(TicketingSummary::default().average_price(), 0.0);
    }

    #[test]
    fn test_merchandise_best_seller_and_low_stock() {
        let items: Vec<MerchandiseItem> = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "Scarf", "category": "Apparel", "price": "20.00", "stock_quantity": 50, "sold_count": 30},
            {"id": 2, "name": "Jersey", "category": "Apparel", "price": "90.00", "stock_quantity": 3, "sold_count": 12}
        ]))
        .unwrap();
        let summary = MerchandiseSummary::from_items(&items);
        assert_eq!(summary.revenue, 1680.0);
        assert_eq!(summary.units_sold, 42);
        assert_eq!(summary.best_seller.as_deref(), Some("Scarf"));
        assert_eq!(summary.low_stock, vec!["Jersey".to_string()]);
    }

    #[test]
    fn test_analytics_handles_zero_sales() {
        let summary = AnalyticsSummary::new(&DashboardData::default(), &[]);
        assert_eq!(summary.fraud_rate_pct, 0.0);
        assert_eq!(summary.revenue_per_ticket, 0.0);
    }

    #[test]
    fn test_sustainability_summary() {
        let energy = EnergyOverview {
            summary: Default::default(),
            history: vec![
                UsagePoint {
                    time: "09:00".into(),
                    usage: 90.0,
                    prediction: 100.0,
                },
                UsagePoint {
                    time: "11:00".into(),
                    usage: 110.0,
                    prediction: 100.0,
                },
                UsagePoint {
                    time: "13:00".into(),
                    usage: 80.0,
                    prediction: 100.0,
                },
            ],
            meters: vec![
                EnergyMeter {
                    id: 1,
                    zone: "North".into(),
                    kind: "HVAC".into(),
                    current_reading: 10.0,
                    status: "optimal".into(),
                },
                EnergyMeter {
                    id: 2,
                    zone: "South".into(),
                    kind: "Lights".into(),
                    current_reading: 30.0,
                    status: "high".into(),
                },
            ],
        };
        let summary = SustainabilitySummary::from_energy(&energy);
        assert_eq!(summary.sampled_kwh, 280.0);
        assert!((summary.estimated_kg_co2 - 112.0).abs() < 1e-9);
        assert!((summary.savings_vs_forecast_pct - 6.666_666_666_666_667).abs() < 1e-9);
        assert_eq!(summary.optimal_meter_pct, 50.0);
    }
}
