//! Energy page: live load, forecast curve and smart meters.

use dioxus::prelude::*;
use std::time::Duration;

use stadium_types::EnergyOverview;

use crate::app::components::{ErrorCard, KpiCard, LoadingCard, PageHeader};
use crate::app::poll::use_polling;
use crate::app::session::use_session;

#[component]
pub fn Energy() -> Element {
    let ctx = use_session();
    let store = ctx.store.clone();

    let overview = use_resource(move || {
        let store = store.clone();
        async move { store.client().energy_overview().await }
    });
    use_polling(overview, Duration::from_secs(ctx.settings.energy_poll_secs));

    let content = match overview.read().clone() {
        None => rsx! { LoadingCard { message: "Loading meters..." } },
        Some(Err(e)) => rsx! { ErrorCard { error: e.to_string() } },
        Some(Ok(overview)) => rsx! { EnergyBoard { overview } },
    };

    rsx! {
        PageHeader {
            title: "Energy",
            subtitle: "Consumption against forecast across the venue",
        }
        {content}
    }
}

#[component]
fn EnergyBoard(overview: EnergyOverview) -> Element {
    let attention = overview.meters_needing_attention().count();
    // Bar widths are relative to the highest point on either curve
    let scale = overview
        .history
        .iter()
        .flat_map(|p| [p.usage, p.prediction])
        .fold(0.0_f64, f64::max);

    rsx! {
        div { class: "kpi-grid",
            KpiCard {
                label: "Current load",
                value: format!("{:.1} kW", overview.summary.total_usage),
            }
            KpiCard {
                label: "Forecast peak",
                value: format!("{:.1} kW", overview.peak_prediction()),
            }
            KpiCard {
                label: "Meters",
                value: overview.meters.len().to_string(),
                hint: format!("{attention} need attention"),
            }
        }

        div { class: "grid",
            article {
                header { strong { "Usage vs forecast" } }
                table {
                    thead {
                        tr {
                            th { "Time" }
                            th { "Usage" }
                            th { "Forecast" }
                        }
                    }
                    tbody {
                        for point in overview.history.iter() {
                            tr { key: "{point.time}",
                                td { "{point.time}" }
                                td {
                                    progress { value: "{point.usage}", max: "{scale}" }
                                    small { {format!("{:.0} kW", point.usage)} }
                                }
                                td { small { {format!("{:.0} kW", point.prediction)} } }
                            }
                        }
                    }
                }
            }

            article {
                header { strong { "Smart meters" } }
                table {
                    thead {
                        tr {
                            th { "Zone" }
                            th { "Type" }
                            th { "Reading" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for meter in overview.meters.iter() {
                            tr { key: "{meter.id}",
                                td { "{meter.zone}" }
                                td { "{meter.kind}" }
                                td { {format!("{:.1}", meter.current_reading)} }
                                td { class: meter_class(&meter.status), "{meter.status}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn meter_class(status: &str) -> &'static str {
    match status {
        "optimal" => "status-green",
        "critical" => "status-red",
        _ => "status-yellow",
    }
}
