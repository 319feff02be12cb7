//! Ticketing page: sales, fraud flags and gate validation.

use dioxus::prelude::*;

use stadium_types::{Ticket, TicketValidation};

use crate::app::components::cards::{format_count, format_money};
use crate::app::components::{ErrorCard, KpiCard, LoadingCard, PageHeader};
use crate::app::session::use_session;
use crate::insights::TicketingSummary;

#[component]
pub fn Ticketing() -> Element {
    let ctx = use_session();
    let store = ctx.store.clone();

    let mut tickets = use_resource(move || {
        let store = store.clone();
        async move { store.client().tickets().await }
    });

    let mut code = use_signal(String::new);
    let mut checking = use_signal(|| false);
    let mut result = use_signal(|| None::<Result<TicketValidation, String>>);

    let validate = move |evt: FormEvent| {
        evt.prevent_default();
        let scanned = code.read().trim().to_string();
        if scanned.is_empty() || checking() {
            return;
        }
        let store = ctx.store.clone();
        checking.set(true);
        spawn(async move {
            let outcome = store.client().validate_ticket(&scanned).await;
            if let Err(e) = &outcome {
                tracing::warn!("Ticket validation failed: {}", e);
            }
            checking.set(false);
            result.set(Some(outcome.map_err(|e| e.to_string())));
            code.set(String::new());
            // A successful scan flips the ticket's validated flag
            tickets.restart();
        });
    };

    let list = match tickets.read().clone() {
        None => rsx! { LoadingCard { message: "Loading tickets..." } },
        Some(Err(e)) => rsx! { ErrorCard { error: e.to_string() } },
        Some(Ok(list)) => rsx! { TicketBoard { tickets: list } },
    };

    rsx! {
        PageHeader {
            title: "Ticketing",
            subtitle: "Sales, entry validation and fraud screening",
        }

        article {
            header { strong { "Validate ticket" } }
            form { onsubmit: validate,
                fieldset { role: "group",
                    input {
                        r#type: "text",
                        placeholder: "Scan or enter ticket code",
                        value: "{code}",
                        oninput: move |e| code.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        disabled: checking(),
                        aria_busy: if checking() { "true" } else { "false" },
                        "Validate"
                    }
                }
            }
            ValidationResult { result: result() }
        }

        {list}
    }
}

#[component]
fn ValidationResult(#[props(!optional)] result: Option<Result<TicketValidation, String>>) -> Element {
    match result {
        None => rsx! {},
        Some(Err(e)) => rsx! { p { class: "status-err", "Validation unavailable: {e}" } },
        Some(Ok(v)) if v.valid => {
            let holder = v
                .details
                .as_ref()
                .map(|t| format!("{} - seat {}", t.customer_name, t.seat_number))
                .unwrap_or_default();
            rsx! {
                p { class: "status-ok",
                    strong { "Entry granted" }
                    " {holder}"
                }
            }
        }
        Some(Ok(v)) => {
            let reason = v.reason.unwrap_or_else(|| "Ticket rejected".to_string());
            rsx! {
                p { class: "status-err",
                    strong { "Entry denied" }
                    " {reason}"
                }
            }
        }
    }
}

#[component]
fn TicketBoard(tickets: Vec<Ticket>) -> Element {
    let summary = TicketingSummary::from_tickets(&tickets);

    rsx! {
        div { class: "kpi-grid",
            KpiCard {
                label: "Tickets issued",
                value: format_count(summary.issued as i64),
            }
            KpiCard {
                label: "Validated",
                value: format_count(summary.validated as i64),
                hint: format!("{:.1}% of issued", summary.validation_rate_pct()),
            }
            KpiCard {
                label: "Gross sales",
                value: format_money(summary.gross_sales),
                hint: format!("avg {}", format_money(summary.average_price())),
            }
            KpiCard {
                label: "Suspicious",
                value: summary.suspicious.to_string(),
                hint: format!("fraud score above {}", Ticket::FRAUD_THRESHOLD),
            }
        }

        article {
            table {
                thead {
                    tr {
                        th { "Code" }
                        th { "Holder" }
                        th { "Seat" }
                        th { "Price" }
                        th { "Status" }
                        th { "Fraud score" }
                    }
                }
                tbody {
                    for t in tickets.iter() {
                        tr { key: "{t.id}",
                            td { code { "{t.ticket_code}" } }
                            td { "{t.customer_name}" }
                            td { "{t.seat_number}" }
                            td { {format_money(t.price)} }
                            td {
                                if t.is_validated {
                                    span { class: "status-ok", "Entered" }
                                } else {
                                    small { "Not scanned" }
                                }
                            }
                            td { class: if t.is_suspicious() { "status-red" } else { "" },
                                {format!("{:.2}", t.fraud_score)}
                            }
                        }
                    }
                }
            }
        }
    }
}
