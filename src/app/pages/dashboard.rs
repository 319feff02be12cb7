//! Dashboard page component.
//!
//! Headline figures across every venue system plus the recent activity feed,
//! refreshed on the dashboard poll interval.

use dioxus::prelude::*;
use std::time::Duration;

use stadium_types::{ActivityEntry, DashboardData};

use crate::app::components::cards::{format_count, format_money};
use crate::app::components::{ErrorCard, KpiCard, LoadingCard, PageHeader};
use crate::app::poll::use_polling;
use crate::app::session::use_session;

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let ctx = use_session();
    let store = ctx.store.clone();

    let data = use_resource(move || {
        let store = store.clone();
        async move { store.client().dashboard_data().await }
    });
    use_polling(data, Duration::from_secs(ctx.settings.dashboard_poll_secs));

    let content = match data.read().clone() {
        None => rsx! { LoadingCard { message: "Loading dashboard..." } },
        Some(Err(e)) => rsx! { ErrorCard { error: e.to_string() } },
        Some(Ok(d)) => rsx! { DashboardBody { data: d } },
    };

    rsx! {
        PageHeader {
            title: "Dashboard",
            subtitle: "Live overview of today's event operations",
        }
        {content}
    }
}

#[component]
fn DashboardBody(data: DashboardData) -> Element {
    let critical_hint = format!("{:.0}% of zones", data.critical_zone_pct());

    rsx! {
        div { class: "kpi-grid",
            KpiCard {
                label: "Active events",
                value: data.active_events.to_string(),
            }
            KpiCard {
                label: "Occupancy",
                value: format!("{}%", data.occupancy_percentage),
            }
            KpiCard {
                label: "Tickets sold",
                value: format_count(data.ticketing.total_sold),
                hint: format!("{} fraud alerts", data.ticketing.fraud_alerts),
            }
            KpiCard {
                label: "Critical zones",
                value: format!("{} / {}", data.crowd.critical_zones, data.crowd.total_zones),
                hint: critical_hint,
            }
            KpiCard {
                label: "Energy usage",
                value: format!("{:.1} kW", data.energy.total_usage),
            }
            KpiCard {
                label: "Merchandise revenue",
                value: format_money(data.merchandise.total_revenue),
                hint: format!("{} products", data.merchandise.total_items),
            }
            KpiCard {
                label: "System health",
                value: format!("{}%", data.system_health),
            }
        }

        div { class: "grid",
            article {
                header { strong { "Recent activity" } }
                ActivityTable { entries: data.activity.clone(), empty: "No activity yet" }
            }
            article {
                header { strong { "Alerts" } }
                ActivityTable { entries: data.alerts.clone(), empty: "No open alerts" }
            }
        }
    }
}

#[component]
fn ActivityTable(entries: Vec<ActivityEntry>, empty: String) -> Element {
    if entries.is_empty() {
        return rsx! { p { small { "{empty}" } } };
    }

    rsx! {
        table {
            tbody {
                for entry in entries {
                    tr { key: "{entry.id}",
                        td { small { "{entry.time}" } }
                        td { class: level_class(&entry.level), "{entry.action}" }
                        td {
                            "{entry.detail}"
                            if !entry.user.is_empty() {
                                br {}
                                small { "{entry.user}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// CSS class for a log/activity level.
pub(crate) fn level_class(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "error" | "critical" => "status-red",
        "warning" | "warn" => "status-yellow",
        _ => "",
    }
}
