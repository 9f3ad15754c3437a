//! Contact creation for imported customers.

use sqlx::PgPool;

use woosync_core::{ContactEmail, ContactPhone, NewContact, NewSyncLog};
use woosync_db::{get_customer, insert_contact};
use woosync_woocommerce::{WooAddress, WooCustomer};

use crate::error::error_chain;
use crate::{payload_json, record_error_log};

/// Builds the contact row for a customer from the billing block.
///
/// The billing email and phone become primary entries when present.
#[must_use]
pub fn build_contact(billing: &WooAddress, customer_name: &str) -> NewContact {
    let mut emails = Vec::new();
    if !billing.email.is_empty() {
        emails.push(ContactEmail {
            email: billing.email.clone(),
            is_primary: true,
        });
    }

    let mut phones = Vec::new();
    if !billing.phone.is_empty() {
        phones.push(ContactPhone {
            phone: billing.phone.clone(),
            is_primary: true,
        });
    }

    NewContact {
        first_name: billing.first_name.clone(),
        last_name: billing.last_name.clone(),
        customer_name: customer_name.to_string(),
        emails,
        phones,
    }
}

/// Creates the contact for a just-created customer.
///
/// Never propagates: the customer row is re-read first, and a missing row
/// gets its own sync log entry; any other failure is logged generically.
/// The already-created customer and addresses stay in place either way.
pub async fn create_customer_contact(
    pool: &PgPool,
    customer_name: &str,
    billing: &WooAddress,
    customer: &WooCustomer,
) {
    match get_customer(pool, customer_name).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            let title = format!("Customer {customer_name} not found.");
            tracing::error!(customer_name, "customer row missing before contact creation");
            let log = NewSyncLog::error(
                "create_customer_contact",
                &title,
                &title,
                payload_json(customer),
            );
            record_error_log(pool, &log).await;
            return;
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                customer_name,
                "customer lookup failed before contact creation"
            );
            let log = NewSyncLog::error(
                "create_customer_contact",
                &e.to_string(),
                &error_chain(&e),
                payload_json(customer),
            );
            record_error_log(pool, &log).await;
            return;
        }
    }

    let contact = build_contact(billing, customer_name);
    if let Err(e) = insert_contact(pool, &contact).await {
        tracing::error!(error = %e, customer_name, "failed to create contact");
        let log = NewSyncLog::error(
            "create_customer_contact",
            &e.to_string(),
            &error_chain(&e),
            payload_json(customer),
        );
        record_error_log(pool, &log).await;
    }
}
