use serde::{Deserialize, Serialize};

/// A customer record normalized for insertion into the backend.
///
/// The storefront customer id doubles as the record's natural key, so one
/// external id maps to at most one backend customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    /// Storefront numeric customer ID rendered as a string; the record's
    /// primary key.
    pub name: String,
    /// Display name derived from the storefront profile via [`display_name`].
    pub customer_name: String,
    /// Numeric storefront customer ID, kept for existence checks.
    pub woo_customer_id: i64,
    /// Always `false` for imported customers so nothing echoes records back
    /// to the storefront.
    pub sync_with_woocommerce: bool,
    pub customer_group: String,
    pub territory: String,
    /// Fixed to `"Individual"` for storefront signups.
    pub customer_type: String,
}

/// Which side of the storefront profile an address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressKind {
    Billing,
    Shipping,
}

impl std::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressKind::Billing => write!(f, "Billing"),
            AddressKind::Shipping => write!(f, "Shipping"),
        }
    }
}

/// An address row ready for insertion, linked to its owning customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAddress {
    pub kind: AddressKind,
    /// Address display title; the owning customer's key.
    pub address_title: String,
    pub company_name: Option<String>,
    /// Never empty: the builder substitutes `"Address 1"` when missing.
    pub address_line1: String,
    pub address_line2: Option<String>,
    /// Never empty: the builder substitutes `"City"` when missing.
    pub city: String,
    /// Canonical state name after abbreviation resolution.
    pub state: Option<String>,
    pub postal_code: Option<String>,
    /// Canonical country display name after code resolution.
    pub country: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Key of the customer this address belongs to.
    pub customer_name: String,
}

/// A contact row with its email and phone entries, linked to a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    /// Key of the customer this contact belongs to.
    pub customer_name: String,
    pub emails: Vec<ContactEmail>,
    pub phones: Vec<ContactPhone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEmail {
    pub email: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPhone {
    pub phone: String,
    pub is_primary: bool,
}

impl NewContact {
    /// Returns the primary email entry, if one was attached.
    #[must_use]
    pub fn primary_email(&self) -> Option<&ContactEmail> {
        self.emails.iter().find(|e| e.is_primary)
    }

    /// Returns the primary phone entry, if one was attached.
    #[must_use]
    pub fn primary_phone(&self) -> Option<&ContactPhone> {
        self.phones.iter().find(|p| p.is_primary)
    }
}

/// Derive the backend display name from a storefront profile.
///
/// `first_name + " " + last_name` when a first name is present, otherwise
/// the email address stands in.
#[must_use]
pub fn display_name(first_name: &str, last_name: &str, email: &str) -> String {
    if first_name.is_empty() {
        email.to_string()
    } else {
        format!("{first_name} {last_name}")
    }
}
