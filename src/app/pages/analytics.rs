//! Analytics page: cross-module ratios and the backend's system log.

use dioxus::prelude::*;

use stadium_types::{DashboardData, SystemLog, Ticket};

use super::dashboard::level_class;
use crate::app::components::cards::format_money;
use crate::app::components::{ErrorCard, KpiCard, LoadingCard, PageHeader};
use crate::app::session::use_session;
use crate::insights::AnalyticsSummary;

#[component]
pub fn Analytics() -> Element {
    let ctx = use_session();
    let store = ctx.store.clone();

    let figures = use_resource(move || {
        let store = store.clone();
        async move {
            let client = store.client();
            let (dashboard, tickets) = futures::join!(client.dashboard_data(), client.tickets());
            Ok::<_, crate::error::ApiError>((dashboard?, tickets?))
        }
    });

    let store = ctx.store.clone();
    let logs = use_resource(move || {
        let store = store.clone();
        async move { store.client().system_logs().await }
    });

    let content = match figures.read().clone() {
        None => rsx! { LoadingCard { message: "Crunching numbers..." } },
        Some(Err(e)) => rsx! { ErrorCard { error: e.to_string() } },
        Some(Ok((dashboard, tickets))) => rsx! { Ratios { dashboard, tickets } },
    };

    let log_content = match logs.read().clone() {
        None => rsx! { LoadingCard { message: "Loading system log..." } },
        Some(Err(e)) => rsx! { ErrorCard { error: e.to_string() } },
        Some(Ok(entries)) => rsx! { LogTable { entries } },
    };

    rsx! {
        PageHeader {
            title: "Analytics",
            subtitle: "How ticketing, crowd, energy and retail relate",
        }
        {content}
        article {
            header { strong { "System log" } }
            {log_content}
        }
    }
}

#[component]
fn Ratios(dashboard: DashboardData, tickets: Vec<Ticket>) -> Element {
    let summary = AnalyticsSummary::new(&dashboard, &tickets);

    rsx! {
        div { class: "kpi-grid",
            KpiCard {
                label: "Occupancy",
                value: format!("{}%", summary.occupancy_pct),
            }
            KpiCard {
                label: "Fraud rate",
                value: format!("{:.2}%", summary.fraud_rate_pct),
                hint: format!("{} alerts", dashboard.ticketing.fraud_alerts),
            }
            KpiCard {
                label: "Retail per ticket",
                value: format_money(summary.revenue_per_ticket),
            }
            KpiCard {
                label: "Energy per ticket",
                value: format!("{:.3} kW", summary.energy_per_ticket_kw),
            }
            KpiCard {
                label: "Entry rate",
                value: format!("{:.1}%", summary.ticketing.validation_rate_pct()),
                hint: format!("{} of {} scanned", summary.ticketing.validated, summary.ticketing.issued),
            }
            KpiCard {
                label: "Average ticket",
                value: format_money(summary.ticketing.average_price()),
            }
        }
    }
}

#[component]
fn LogTable(entries: Vec<SystemLog>) -> Element {
    if entries.is_empty() {
        return rsx! { p { small { "Log is empty" } } };
    }

    rsx! {
        table {
            thead {
                tr {
                    th { "Time" }
                    th { "Module" }
                    th { "Level" }
                    th { "Message" }
                }
            }
            tbody {
                for entry in entries.iter() {
                    tr { key: "{entry.id}",
                        td { small { {entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()} } }
                        td { "{entry.module}" }
                        td { class: level_class(&entry.level), "{entry.level}" }
                        td { "{entry.message}" }
                    }
                }
            }
        }
    }
}
