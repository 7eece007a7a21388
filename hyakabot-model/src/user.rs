use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Deserialize;
use time::OffsetDateTime;

use crate::deser::epoch_millis;

#[derive(Clone, Debug, Deserialize)]
pub struct HyakanimeUser {
    pub uid: Box<str>,
    pub username: Box<str>,
    #[serde(rename = "createdAt", with = "epoch_millis")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Box<str>,
    #[serde(rename = "isPremium", default)]
    pub is_premium: bool,
    #[serde(rename = "isStaff", default)]
    pub is_staff: bool,
}

impl HyakanimeUser {
    pub fn badges(&self) -> BadgesFormatter {
        BadgesFormatter {
            premium: self.is_premium,
            staff: self.is_staff,
        }
    }
}

/// Badge icons shown next to the username, star before shield.
#[derive(Copy, Clone)]
pub struct BadgesFormatter {
    premium: bool,
    staff: bool,
}

impl BadgesFormatter {
    pub fn is_empty(self) -> bool {
        !(self.premium || self.staff)
    }
}

impl Display for BadgesFormatter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.premium, self.staff) {
            (true, true) => f.write_str("★ 🛡️"),
            (true, false) => f.write_str("★"),
            (false, true) => f.write_str("🛡️"),
            (false, false) => Ok(()),
        }
    }
}

/// Body of the direct user lookup; the api answers a `message`
/// object instead of a user when it knows no such name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserLookup {
    Found(HyakanimeUser),
    NotFound { message: Box<str> },
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"{
        "uid": "qy0IhmBTf2TlSdgc",
        "username": "Shiragi",
        "createdAt": "1568412797862",
        "photoURL": "https://example.org/shiragi.png",
        "isPremium": true
    }"#;

    #[test]
    fn lookup_user() {
        let lookup: UserLookup = serde_json::from_str(USER).unwrap();

        let UserLookup::Found(user) = lookup else {
            panic!("expected user, got {lookup:?}");
        };

        assert_eq!(user.username.as_ref(), "Shiragi");
        assert_eq!(user.created_at.unix_timestamp(), 1_568_412_797);
        assert!(user.is_premium);
        assert!(!user.is_staff);
    }

    #[test]
    fn lookup_message() {
        let lookup: UserLookup =
            serde_json::from_str(r#"{"message":"Utilisateur introuvable"}"#).unwrap();

        assert!(matches!(lookup, UserLookup::NotFound { .. }));
    }

    #[test]
    fn created_at_as_integer() {
        let user: HyakanimeUser = serde_json::from_str(
            r#"{"uid":"a","username":"b","createdAt":1568412797862}"#,
        )
        .unwrap();

        assert_eq!(user.created_at.unix_timestamp(), 1_568_412_797);
    }

    #[test]
    fn badges() {
        let fmt = |premium, staff| {
            BadgesFormatter { premium, staff }.to_string()
        };

        assert_eq!(fmt(true, true), "★ 🛡️");
        assert_eq!(fmt(true, false), "★");
        assert_eq!(fmt(false, true), "🛡️");
        assert_eq!(fmt(false, false), "");
    }
}
