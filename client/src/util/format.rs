//! Display formatting for dates and shipment states.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO-8601 date or datetime as `dd/mm/yyyy`.
///
/// `None` or an unparseable value renders as `"N/A"`.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_ymd)
        .map_or_else(|| "N/A".to_owned(), |(y, m, d)| format!("{d:02}/{m:02}/{y:04}"))
}

fn parse_ymd(raw: &str) -> Option<(u32, u32, u32)> {
    let date = raw.trim().get(..10)?;
    let mut parts = date.split('-');
    let year = parts.next()?.parse::<u32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// Human label for a shipment status.
pub fn shipment_status_label(status: &str) -> String {
    match status {
        "pending" => "Pending".to_owned(),
        "processed" | "processing" => "Processing".to_owned(),
        "shipped" => "Shipped".to_owned(),
        "delivered" => "Delivered".to_owned(),
        "cancelled" => "Cancelled".to_owned(),
        other => {
            let mut chars = other.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        }
    }
}

/// CSS modifier for a shipment status badge.
pub fn shipment_status_class(status: &str) -> &'static str {
    match status {
        "processed" | "processing" => "badge--info",
        "shipped" => "badge--primary",
        "delivered" => "badge--success",
        "cancelled" => "badge--danger",
        _ => "badge--muted",
    }
}

/// `"1 item"` / `"3 items"`.
pub fn item_count_label(count: u32) -> String {
    if count == 1 { "1 item".to_owned() } else { format!("{count} items") }
}
