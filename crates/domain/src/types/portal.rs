//! Portal access tracker types
//!
//! One [`PortalAccessRecord`] per tracked credential/role binding on an
//! external web system. The same portal URL usually appears once per role,
//! which the grouper collapses into a [`PortalGroup`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::INDIVIDUAL_SENTINEL;

/// A tracked credential value.
///
/// The wire contract overloads the credential fields with the literal string
/// `"Individual"` meaning "varies per person, not centrally tracked". This
/// variant type keeps callers away from the magic string; the wire shape
/// itself is unchanged (changing it is outside this module's authority).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// A centrally tracked value
    Known(String),
    /// Varies per person; not centrally tracked
    PerIndividual,
}

impl Credential {
    /// Decode a raw wire value, normalizing the sentinel
    pub fn from_raw(raw: &str) -> Self {
        if raw == INDIVIDUAL_SENTINEL {
            Self::PerIndividual
        } else {
            Self::Known(raw.to_string())
        }
    }
}

/// One tracked credential/role binding for an external portal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalAccessRecord {
    /// Unique record id
    pub id: String,
    pub portal_url: String,
    pub portal_name: String,
    pub portal_category: String,
    /// Free-text role label ("Admin", "Agent", ...)
    pub role: String,
    /// Login id/email/phone, or the "Individual" sentinel
    pub user_identifier: String,
    /// Password, or the "Individual" sentinel
    pub password: String,
    /// Member responsible for keeping this record current
    pub tracked_by: String,
    #[serde(default)]
    pub remark: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortalAccessRecord {
    /// The user identifier with the sentinel normalized away
    pub fn user_credential(&self) -> Credential {
        Credential::from_raw(&self.user_identifier)
    }

    /// The password with the sentinel normalized away
    pub fn password_credential(&self) -> Credential {
        Credential::from_raw(&self.password)
    }
}

/// All records sharing one portal URL, ordered by role
///
/// `portal_name` and `portal_category` carry the first-seen values; the
/// grouper assumes (but does not enforce) that they are consistent across the
/// group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalGroup {
    pub portal_url: String,
    pub portal_name: String,
    pub portal_category: String,
    /// Records sorted by `role`, case-sensitive lexicographic
    pub records: Vec<PortalAccessRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: &str, password: &str) -> PortalAccessRecord {
        PortalAccessRecord {
            id: "rec-1".to_string(),
            portal_url: "https://siem.example.com".to_string(),
            portal_name: "SIEM".to_string(),
            portal_category: "Monitoring".to_string(),
            role: "Admin".to_string(),
            user_identifier: user.to_string(),
            password: password.to_string(),
            tracked_by: "tanvir".to_string(),
            remark: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn sentinel_decodes_to_per_individual() {
        let rec = record("Individual", "Individual");
        assert_eq!(rec.user_credential(), Credential::PerIndividual);
        assert_eq!(rec.password_credential(), Credential::PerIndividual);
    }

    #[test]
    fn non_sentinel_decodes_to_known() {
        let rec = record("soc-admin@example.com", "hunter2");
        assert_eq!(rec.user_credential(), Credential::Known("soc-admin@example.com".to_string()));
        // case matters: the sentinel is exact
        let rec = record("individual", "x");
        assert_eq!(rec.user_credential(), Credential::Known("individual".to_string()));
    }

    #[test]
    fn record_uses_wire_field_names() {
        let rec = record("ops", "secret");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("portalUrl"));
        assert!(json.contains("userIdentifier"));
        assert!(json.contains("trackedBy"));
    }
}
