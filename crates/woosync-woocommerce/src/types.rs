use serde::{Deserialize, Serialize};

/// One customer record as returned by the storefront's customers endpoint.
///
/// Only the fields the importer consumes are modeled; the API sends more.
/// `Serialize` is derived so the raw record can be attached to sync log
/// rows for operator review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WooCustomer {
    /// Storefront numeric customer ID.
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Missing on some storefront configurations; treated as empty.
    pub billing: Option<WooAddress>,
    pub shipping: Option<WooAddress>,
}

/// A billing or shipping block on a storefront customer.
///
/// The API sends every field, using `""` for anything the shopper left
/// blank; the shipping block carries no `email` and often no `phone`, which
/// the defaults cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WooAddress {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address_1: String,
    #[serde(default)]
    pub address_2: String,
    #[serde(default)]
    pub city: String,
    /// State or province, as a code for countries with ISO subdivisions
    /// (e.g. `"KA"` for Karnataka on Indian addresses).
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postcode: String,
    /// ISO 3166-1 alpha-2 country code, e.g. `"IN"`.
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}
