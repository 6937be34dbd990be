use super::{escape, layout};
use travel_info::TravelSummary;

pub fn summary_page(summary: &TravelSummary, edit_href: &str) -> String {
    let rows = [
        ("Name", summary.name.clone()),
        ("Phone", summary.phone.clone()),
        ("Travel Type", summary.travel_type.clone()),
        ("Flight Number", summary.flight_number.clone()),
        ("Destination", summary.destination.clone()),
        ("Arrival Date", summary.arrival_date.clone()),
        ("Arrival Time", summary.arrival.to_string()),
        ("Payment Method", summary.payment_display()),
        ("Accounts", summary.accounts_display()),
    ]
    .iter()
    .map(|(label, value)| format!("<p><strong>{label}:</strong> {}</p>", escape(value)))
    .collect::<Vec<_>>()
    .join("\n");

    layout(
        "",
        &format!(
            r#"<h1>Submission Successful</h1>
<section class="card">
<h2>Your Travel Information</h2>
{rows}
<a class="button" href="{edit}">Edit Response</a>
</section>"#,
            edit = escape(edit_href),
        ),
    )
}
