use crate::config::EmailField;
use crate::error::ValidationError;
use crate::model::WishDraft;

/// Check a draft against the create-form rules and return it trimmed.
pub fn validate_draft(draft: &WishDraft, email_field: EmailField) -> Result<WishDraft, ValidationError> {
    let title = draft.title.trim();
    let description = draft.description.trim();
    if title.is_empty() || description.is_empty() {
        return Err(ValidationError::EmptyTitleOrDescription);
    }

    let email = match email_field {
        EmailField::None => None,
        EmailField::Optional | EmailField::Required => draft
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty()),
    };

    match (email, email_field) {
        (None, EmailField::Required) => return Err(ValidationError::EmailRequired),
        (Some(address), _) if !is_plausible_email(address) => {
            return Err(ValidationError::EmailFormat)
        }
        _ => {}
    }

    Ok(WishDraft {
        title: title.to_string(),
        description: description.to_string(),
        email: email.map(str::to_string),
    })
}

pub fn validate_comment(text: &str) -> Result<&str, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyComment);
    }
    Ok(text)
}

/// `local@domain.tld` with no whitespace.
fn is_plausible_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}
