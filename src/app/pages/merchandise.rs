//! Merchandise page: catalogue with sales and stock levels.

use dioxus::prelude::*;

use stadium_types::MerchandiseItem;

use crate::app::components::cards::{format_count, format_money};
use crate::app::components::{ErrorCard, KpiCard, LoadingCard, PageHeader};
use crate::app::session::use_session;
use crate::insights::MerchandiseSummary;

#[component]
pub fn Merchandise() -> Element {
    let ctx = use_session();
    let store = ctx.store.clone();

    let items = use_resource(move || {
        let store = store.clone();
        async move { store.client().merchandise().await }
    });

    let content = match items.read().clone() {
        None => rsx! { LoadingCard { message: "Loading catalogue..." } },
        Some(Err(e)) => rsx! { ErrorCard { error: e.to_string() } },
        Some(Ok(items)) => rsx! { Catalogue { items } },
    };

    rsx! {
        PageHeader {
            title: "Merchandise",
            subtitle: "Store sales and inventory",
        }
        {content}
    }
}

#[component]
fn Catalogue(items: Vec<MerchandiseItem>) -> Element {
    let summary = MerchandiseSummary::from_items(&items);
    let best_seller = summary.best_seller.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        div { class: "kpi-grid",
            KpiCard {
                label: "Revenue",
                value: format_money(summary.revenue),
            }
            KpiCard {
                label: "Units sold",
                value: format_count(summary.units_sold),
            }
            KpiCard {
                label: "Best seller",
                value: best_seller,
            }
            KpiCard {
                label: "Low stock",
                value: summary.low_stock.len().to_string(),
                hint: summary
                    .low_stock
                    .first()
                    .map(|name| format!("incl. {name}"))
                    .unwrap_or_else(|| "all lines stocked".to_string()),
            }
        }

        article {
            table {
                thead {
                    tr {
                        th { "Product" }
                        th { "Category" }
                        th { "Price" }
                        th { "Sold" }
                        th { "Stock" }
                        th { "Revenue" }
                    }
                }
                tbody {
                    for item in items.iter() {
                        tr { key: "{item.id}",
                            td { "{item.name}" }
                            td { small { "{item.category}" } }
                            td { {format_money(item.price)} }
                            td { "{item.sold_count}" }
                            td { class: if item.is_low_stock() { "status-red" } else { "" },
                                "{item.stock_quantity}"
                            }
                            td { {format_money(item.revenue())} }
                        }
                    }
                }
            }
        }
    }
}
