use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Blacklisted,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Pending => "Pending",
            UserStatus::Blacklisted => "Blacklisted",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// The upstream feed is inconsistent about account numbers (sometimes a JSON
// number, sometimes a string); the mapper normalizes to a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountNumber {
    Text(String),
    Number(u64),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProfile {
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub status: UserStatus,
    pub account_number: AccountNumber,
    pub account_balance: f64,
    pub organization: String,
    pub date_joined: String,
    #[serde(default)]
    pub profile: Option<ApiProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employment {
    pub level_of_education: String,
    pub employment_status: String,
    pub sector: String,
    pub duration: String,
    pub office_email: String,
    pub monthly_income: String,
    pub loan_repayment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Socials {
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub bvn: String,
    pub marital_status: String,
    pub children: String,
    pub residence_type: String,
    pub employment: Employment,
    pub socials: Socials,
    pub guarantors: Vec<Guarantor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub organization: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub date_joined: String,
    pub status: UserStatus,
    pub account_number: String,
    pub account_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub details: UserDetails,
}
