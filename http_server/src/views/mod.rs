//! Server-rendered HTML for every page of the form.

pub mod form;
pub mod gate;
pub mod sign_in;
pub mod summary;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

pub const APP_TITLE: &str = "Bear Force One";

pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn layout(head_extra: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="Find carpool matches for Brown University students">
<title>{APP_TITLE}</title>
{head_extra}
</head>
<body>
<main>
{body}
</main>
</body>
</html>"#
    )
}

pub fn sign_out_button() -> &'static str {
    r#"<form class="sign-out" method="post" action="/sign-out"><button type="submit">Sign Out</button></form>"#
}

pub fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(ContentType::html())
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn test_markup_is_escaped() {
        assert_eq!(
            escape(r#"<script>alert("O'Hare & co")</script>"#),
            "&lt;script&gt;alert(&quot;O&#x27;Hare &amp; co&quot;)&lt;/script&gt;"
        );
    }
}
