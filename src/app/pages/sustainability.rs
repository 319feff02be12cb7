//! Sustainability page: energy figures recast as emissions and savings.

use dioxus::prelude::*;
use std::time::Duration;

use stadium_types::EnergyOverview;

use crate::app::components::{ErrorCard, KpiCard, LoadingCard, PageHeader};
use crate::app::poll::use_polling;
use crate::app::session::use_session;
use crate::insights::{SustainabilitySummary, GRID_KG_CO2_PER_KWH};

#[component]
pub fn Sustainability() -> Element {
    let ctx = use_session();
    let store = ctx.store.clone();

    let overview = use_resource(move || {
        let store = store.clone();
        async move { store.client().energy_overview().await }
    });
    use_polling(overview, Duration::from_secs(ctx.settings.energy_poll_secs));

    let content = match overview.read().clone() {
        None => rsx! { LoadingCard { message: "Loading energy data..." } },
        Some(Err(e)) => rsx! { ErrorCard { error: e.to_string() } },
        Some(Ok(overview)) => rsx! { Footprint { overview } },
    };

    rsx! {
        PageHeader {
            title: "Sustainability",
            subtitle: "Carbon footprint and efficiency of today's event",
        }
        {content}
    }
}

#[component]
fn Footprint(overview: EnergyOverview) -> Element {
    let summary = SustainabilitySummary::from_energy(&overview);
    let (savings_label, savings_class) = if summary.savings_vs_forecast_pct >= 0.0 {
        ("under forecast", "status-green")
    } else {
        ("over forecast", "status-red")
    };
    let savings = format!("{:.1}%", summary.savings_vs_forecast_pct.abs());

    rsx! {
        div { class: "kpi-grid",
            KpiCard {
                label: "Sampled consumption",
                value: format!("{:.0} kWh", summary.sampled_kwh),
            }
            KpiCard {
                label: "Estimated emissions",
                value: format!("{:.1} kg CO2", summary.estimated_kg_co2),
                hint: format!("at {GRID_KG_CO2_PER_KWH} kg/kWh"),
            }
            KpiCard {
                label: "Optimal meters",
                value: format!("{:.0}%", summary.optimal_meter_pct),
            }
        }

        article {
            p {
                "Actual usage ran "
                strong { class: savings_class, "{savings} {savings_label}" }
                " across the sampled window."
            }
            if overview.meters_needing_attention().next().is_some() {
                ul {
                    for meter in overview.meters_needing_attention() {
                        li { key: "{meter.id}",
                            "{meter.kind} ({meter.zone}) is running {meter.status}"
                        }
                    }
                }
            }
        }
    }
}
