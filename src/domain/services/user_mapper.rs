use crate::domain::models::user::{AccountNumber, ApiUser, UserRecord};
use crate::domain::services::detail_factory::create_user_details;

/// Lowercase the full name, keep only `[a-z0-9]` and whitespace, then drop the
/// whitespace. Idempotent; uniqueness across records is not guaranteed.
pub fn make_username(full_name: &str) -> String {
    full_name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Maps one raw feed record to the internal shape. Pure and total: account
/// fields are normalized, absent profile fields stay absent (placeholder text
/// is a presentation concern), and the detail block is derived from the record
/// id so it can be rebuilt anywhere.
pub fn map_api_user(raw: ApiUser) -> UserRecord {
    let account_number = match raw.account_number {
        AccountNumber::Text(s) => s,
        AccountNumber::Number(n) => n.to_string(),
    };
    let profile = raw.profile.unwrap_or_default();
    let details = create_user_details(&raw.id, &raw.full_name);

    UserRecord {
        username: make_username(&raw.full_name),
        id: raw.id,
        organization: raw.organization,
        full_name: raw.full_name,
        email: raw.email,
        phone: raw.phone,
        date_joined: raw.date_joined,
        status: raw.status,
        account_number,
        account_balance: raw.account_balance,
        gender: profile.gender,
        address: profile.address,
        city: profile.city,
        country: profile.country,
        details,
    }
}
