use super::{escape, layout};
use url::Url;

pub fn sign_in_page(hosted_sign_in: &Url, institution_name: &str) -> String {
    layout(
        "",
        &format!(
            r#"<section class="card">
<h1>Sign In</h1>
<p>Use your {institution} email address to continue.</p>
<a class="button" href="{href}">Continue to sign in</a>
</section>"#,
            institution = escape(institution_name),
            href = escape(hosted_sign_in.as_str()),
        ),
    )
}
