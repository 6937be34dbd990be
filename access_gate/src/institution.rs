use serde::Deserialize;
use shared_kernel::non_empty_string;

non_empty_string!(EmailInner);

/// A syntactically valid email address taken from the identity provider's
/// primary-email claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimaryEmail(EmailInner);

impl AsRef<str> for PrimaryEmail {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl TryFrom<String> for PrimaryEmail {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        use validator::validate_email;
        let non_empty_string = EmailInner::try_from(value)?;

        if validate_email(non_empty_string.as_ref()) {
            return Ok(PrimaryEmail(non_empty_string));
        }
        Err(format!("{} is an invalid email", non_empty_string.as_ref()))
    }
}

/// The school whose members may use the form.
#[derive(Clone, Debug, Deserialize)]
pub struct Institution {
    pub name: String,
    pub short_name: String,
    pub email_domain: String,
}

impl Institution {
    pub fn brown() -> Self {
        Institution {
            name: "Brown University".to_string(),
            short_name: "Brown".to_string(),
            email_domain: "brown.edu".to_string(),
        }
    }

    /// Whether `email` is an address at exactly this institution's domain.
    /// Subdomains such as `cs.brown.edu` do not count.
    pub fn issued(&self, email: &PrimaryEmail) -> bool {
        let suffix = format!("@{}", self.email_domain.trim_start_matches('@'));
        let email = email.as_ref();
        email
            .len()
            .checked_sub(suffix.len())
            .and_then(|start| email.get(start..))
            .map(|tail| tail.eq_ignore_ascii_case(&suffix))
            .unwrap_or(false)
    }
}
