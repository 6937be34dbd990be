use super::{escape, layout, sign_out_button, APP_TITLE};
use itertools::Itertools;
use travel_info::data::{PaymentMethod, RideAccount, TravelInfo, TravelType};
use travel_info::form_state::{FieldUpdate, FormField};
use travel_info::validation::FieldProblem;
use travel_info::ArrivalWindow;

fn text_input(field: FormField, input_type: &str, value: &str, placeholder: &str) -> String {
    let key = field.key();
    format!(
        r#"<div>
<label for="{key}">{label}</label>
<input id="{key}" name="{key}" type="{input_type}" value="{value}" placeholder="{placeholder}" required>
</div>"#,
        label = field.label(),
        value = escape(value),
    )
}

fn travel_type_select(selected: TravelType) -> String {
    let options = TravelType::ALL
        .iter()
        .map(|kind| {
            let marker = if *kind == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{marker}>{}</option>"#,
                kind.code(),
                kind.label()
            )
        })
        .join("");
    let key = FormField::TravelType.key();
    format!(
        r#"<div>
<label for="{key}">{label}</label>
<select id="{key}" name="{key}">{options}</select>
</div>"#,
        label = FormField::TravelType.label(),
    )
}

fn destination_select(selected: &str) -> String {
    let groups = TravelType::ALL
        .iter()
        .map(|kind| {
            let options = kind
                .destinations()
                .map(|destination| {
                    let marker = if destination.code() == selected {
                        " selected"
                    } else {
                        ""
                    };
                    format!(
                        r#"<option value="{}"{marker}>{}</option>"#,
                        destination.code(),
                        destination.label()
                    )
                })
                .join("");
            format!(r#"<optgroup label="{}">{options}</optgroup>"#, kind.label())
        })
        .join("");
    let key = FormField::Destination.key();
    format!(
        r#"<div>
<label for="{key}">{label}</label>
<select id="{key}" name="{key}" required><option value="">Select destination</option>{groups}</select>
</div>"#,
        label = FormField::Destination.label(),
    )
}

fn checkbox(input: &str, value: &str, label: &str, checked: bool) -> String {
    let marker = if checked { " checked" } else { "" };
    format!(r#"<label><input type="checkbox" name="{input}" value="{value}"{marker}> {label}</label>"#)
}

fn problem_list(problems: &[FieldProblem]) -> String {
    if problems.is_empty() {
        return String::new();
    }
    let items = problems
        .iter()
        .map(|problem| format!("<li>{}</li>", escape(&problem.to_string())))
        .join("");
    format!(r#"<ul class="problems">{items}</ul>"#)
}

pub fn travel_form_page(
    info: &TravelInfo,
    window: &ArrivalWindow,
    problems: &[FieldProblem],
) -> String {
    let payment_methods = PaymentMethod::ALL
        .iter()
        .map(|method| {
            checkbox(
                FieldUpdate::PAYMENT_METHOD_INPUT,
                method.key(),
                method.label(),
                info.payment_methods.is_selected(*method),
            )
        })
        .join("\n");
    let accounts = RideAccount::ALL
        .iter()
        .map(|account| {
            checkbox(
                FieldUpdate::RIDE_ACCOUNT_INPUT,
                account.key(),
                account.label(),
                info.accounts.is_selected(*account),
            )
        })
        .join("\n");
    let arrival_date_key = FormField::ArrivalDate.key();

    let body = format!(
        r#"<header><h1>{APP_TITLE}</h1>{sign_out}</header>
<section class="card">
<h2>Travel Information</h2>
{problems}
<form method="post" action="/submit">
{name}
{phone}
{flight_number}
{travel_type}
{destination}
<div>
<label for="{arrival_date_key}">{arrival_date_label}</label>
<input id="{arrival_date_key}" name="{arrival_date_key}" type="date" value="{arrival_date}" min="{min}" max="{max}" required>
</div>
{arrival_time}
<fieldset><legend>Payment Methods</legend>
{payment_methods}
</fieldset>
<fieldset><legend>Which accounts do you have?</legend>
{accounts}
</fieldset>
<button type="submit">Submit</button>
</form>
</section>"#,
        sign_out = sign_out_button(),
        problems = problem_list(problems),
        name = text_input(FormField::Name, "text", &info.name, "Christina Paxson"),
        phone = text_input(FormField::Phone, "tel", &info.phone, "(123) 456-7890"),
        flight_number = text_input(FormField::FlightNumber, "text", &info.flight_number, "AA123"),
        travel_type = travel_type_select(info.travel_type),
        destination = destination_select(&info.destination),
        arrival_date_label = FormField::ArrivalDate.label(),
        arrival_date = escape(&info.arrival_date),
        min = window.earliest_attr(),
        max = window.latest_attr(),
        arrival_time = text_input(FormField::ArrivalTime, "time", &info.arrival_time, ""),
    );
    layout("", &body)
}
