use crate::domain::models::user::UserStatus;
use serde::{Deserialize, Serialize};

// Used twice in the users view: once as the draft the filter panel edits and
// once as the applied snapshot the query runs against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    pub organization: String,
    pub username: String,
    pub email: String,
    pub date: String,
    pub phone: String,
    pub status: Option<UserStatus>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.organization.is_empty()
            && self.username.is_empty()
            && self.email.is_empty()
            && self.date.is_empty()
            && self.phone.is_empty()
            && self.status.is_none()
    }
}
