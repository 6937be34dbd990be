use super::{escape, layout, sign_out_button};
use itertools::Itertools;

pub fn loading_page() -> String {
    layout(
        r#"<meta http-equiv="refresh" content="1">"#,
        r#"<div class="loading">Loading...</div>"#,
    )
}

pub fn access_restricted_page(messages: &[String]) -> String {
    let paragraphs = messages
        .iter()
        .map(|message| format!("<p>{}</p>", escape(message)))
        .join("\n");
    layout(
        "",
        &format!(
            r#"{sign_out}
<section class="card">
<h1>Access Restricted</h1>
{paragraphs}
</section>"#,
            sign_out = sign_out_button()
        ),
    )
}
