//! Crowd management page: zone occupancy with forecasts.

use dioxus::prelude::*;
use std::time::Duration;

use stadium_types::{CrowdZone, RiskLevel, ZoneStatus};

use crate::app::components::cards::format_count;
use crate::app::components::{ErrorCard, KpiCard, LoadingCard, PageHeader};
use crate::app::poll::use_polling;
use crate::app::session::use_session;
use crate::insights::CrowdSummary;

#[component]
pub fn Crowd() -> Element {
    let ctx = use_session();
    let store = ctx.store.clone();

    let zones = use_resource(move || {
        let store = store.clone();
        async move { store.client().crowd_zones().await }
    });
    use_polling(zones, Duration::from_secs(ctx.settings.crowd_poll_secs));

    let content = match zones.read().clone() {
        None => rsx! { LoadingCard { message: "Loading zones..." } },
        Some(Err(e)) => rsx! { ErrorCard { error: e.to_string() } },
        Some(Ok(zones)) => rsx! { ZoneBoard { zones } },
    };

    rsx! {
        PageHeader {
            title: "Crowd Management",
            subtitle: "Zone occupancy and flow forecasts",
        }
        {content}
    }
}

#[component]
fn ZoneBoard(zones: Vec<CrowdZone>) -> Element {
    let summary = CrowdSummary::from_zones(&zones);

    rsx! {
        div { class: "kpi-grid",
            KpiCard {
                label: "Attendance",
                value: format_count(summary.attendance),
                hint: format!("of {} capacity", format_count(summary.capacity)),
            }
            KpiCard {
                label: "Occupancy",
                value: format!("{:.1}%", summary.occupancy_pct()),
            }
            KpiCard {
                label: "Critical zones",
                value: summary.critical_zones.to_string(),
                hint: format!("of {} zones", zones.len()),
            }
        }

        if !summary.advisories.is_empty() {
            article { class: "status-red",
                header { strong { "High-risk forecasts" } }
                ul {
                    for (zone, suggestion) in summary.advisories.iter() {
                        li { key: "{zone}", strong { "{zone}: " } "{suggestion}" }
                    }
                }
            }
        }

        article {
            table {
                thead {
                    tr {
                        th { "Zone" }
                        th { "Occupancy" }
                        th { "Status" }
                        th { "Forecast" }
                        th { "Updated" }
                    }
                }
                tbody {
                    for zone in zones.iter() {
                        tr { key: "{zone.id}",
                            td { "{zone.name}" }
                            td {
                                "{zone.current_count} / {zone.capacity}"
                                br {}
                                small { {format!("{:.0}%", zone.utilization_pct())} }
                            }
                            td { class: status_class(zone.status), "{zone.status}" }
                            td {
                                if let Some(p) = zone.ai_prediction.as_ref() {
                                    span { class: risk_class(p.risk_level), "{p.predicted_count} ({p.risk_level})" }
                                    br {}
                                    small { "{p.suggestion}" }
                                } else {
                                    small { "n/a" }
                                }
                            }
                            td {
                                small {
                                    {zone.last_updated.map(|t| t.format("%H:%M:%S").to_string()).unwrap_or_default()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn status_class(status: ZoneStatus) -> &'static str {
    match status {
        ZoneStatus::Green => "status-green",
        ZoneStatus::Yellow => "status-yellow",
        ZoneStatus::Red => "status-red",
    }
}

fn risk_class(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "status-green",
        RiskLevel::Medium => "status-yellow",
        RiskLevel::High => "status-red",
    }
}
