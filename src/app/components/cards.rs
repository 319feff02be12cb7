//! Small building blocks shared by the pages.

use dioxus::prelude::*;

/// Title block at the top of a page.
#[component]
pub fn PageHeader(title: String, subtitle: String) -> Element {
    rsx! {
        document::Title { "{title} - Smart Stadium" }
        hgroup {
            h1 { "{title}" }
            p { "{subtitle}" }
        }
    }
}

/// Single headline figure.
#[component]
pub fn KpiCard(label: String, value: String, hint: Option<String>) -> Element {
    rsx! {
        article { class: "kpi",
            small { "{label}" }
            div { class: "value", "{value}" }
            if let Some(hint) = hint {
                small { "{hint}" }
            }
        }
    }
}

#[component]
pub fn LoadingCard(message: String) -> Element {
    rsx! {
        article { aria_busy: "true", "{message}" }
    }
}

/// Shown when a page's data request failed; the next poll retries.
#[component]
pub fn ErrorCard(error: String) -> Element {
    rsx! {
        article { class: "status-err",
            strong { "Data unavailable" }
            p { small { "{error}" } }
        }
    }
}

/// Thousands separators for counts ("2848" -> "2,848").
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", format_count(cents / 100), cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(2848), "2,848");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(-4500), "-4,500");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(18240.5), "$18,240.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(9.999), "$10.00");
        assert_eq!(format_money(-0.5), "-$0.50");
        assert_eq!(format_money(-1234.5), "-$1,234.50");
        assert_eq!(format_money(-0.001), "$0.00");
    }
}
