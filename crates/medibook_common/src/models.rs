// --- File: crates/medibook_common/src/models.rs ---

// Data structures shared across the application: the three collections the
// backend operates on (appointment option templates, bookings, users).

use serde::{Deserialize, Serialize};

/// A treatment's definition of price and the full set of offerable slot
/// labels for a day.
///
/// Templates are maintained externally; the backend only reads them (plus an
/// optional startup seed). Slot labels are unique within one template but not
/// across templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppointmentOption {
    /// The store-assigned identifier
    pub id: Option<i64>,

    /// The treatment name, unique across templates
    pub name: String,

    /// Price in minor currency units
    pub price: i64,

    /// The full ordered list of bookable slot labels
    pub slots: Vec<String>,
}

/// A booked appointment slot.
///
/// Created by the admission controller on successful admission; never mutated
/// or deleted afterwards. No two bookings may share the same
/// (appointment_date, treatment, email) triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// The store-assigned identifier
    pub id: Option<i64>,

    /// Calendar date as an exact-match string, no timezone semantics
    pub appointment_date: String,

    /// References a template's name by value
    pub treatment: String,

    /// One of the template's slot labels at booking time
    pub slot: String,

    /// The patient's email
    pub email: String,

    /// The patient's display name
    pub patient_name: String,
}

/// The role stored on a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    None,
    Admin,
}

impl Role {
    /// The string stored in the users collection, if any.
    pub fn as_stored(&self) -> Option<&'static str> {
        match self {
            Role::None => None,
            Role::Admin => Some("admin"),
        }
    }

    /// Parses the stored role string; anything unknown maps to `None`.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("admin") => Role::Admin,
            _ => Role::None,
        }
    }
}

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// The store-assigned identifier
    pub id: Option<i64>,

    /// Unique identity key
    pub email: String,

    /// Display name
    pub name: String,

    /// Role, defaults to `none`; only ever promoted to `admin`
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_storage() {
        assert_eq!(Role::Admin.as_stored(), Some("admin"));
        assert_eq!(Role::None.as_stored(), None);
        assert_eq!(Role::from_stored(Some("admin")), Role::Admin);
        assert_eq!(Role::from_stored(Some("editor")), Role::None);
        assert_eq!(Role::from_stored(None), Role::None);
    }

    #[test]
    fn booking_serializes_with_camel_case_keys() {
        let booking = Booking {
            id: None,
            appointment_date: "2024-01-10".into(),
            treatment: "Braces".into(),
            slot: "10am".into(),
            email: "a@x.com".into(),
            patient_name: "Ada".into(),
        };
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["appointmentDate"], "2024-01-10");
        assert_eq!(json["patientName"], "Ada");
    }
}
