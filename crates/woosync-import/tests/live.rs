//! End-to-end importer tests against a live Postgres database.
//!
//! Each test gets its own schema via `#[sqlx::test]` with the workspace
//! migrations applied. The storefront feed is simulated either by building
//! `WooCustomer` values directly (importer-level tests) or with a local
//! `wiremock` server (full sync-run tests).

use std::path::PathBuf;

use serde_json::json;
use sqlx::PgPool;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use woosync_core::{AppConfig, CountryConfig, Environment};
use woosync_db::{
    ensure_root_territory, get_customer, list_addresses_for_customer, list_contact_emails,
    list_contact_phones, list_contacts_for_customer, list_sync_logs, seed_countries,
};
use woosync_import::contact::create_customer_contact;
use woosync_import::{import_customer, sync_customers, ImportAction};
use woosync_woocommerce::{WooAddress, WooClient, WooCustomer};

const ROOT_TERRITORY: &str = "All Territories";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        log_level: "info".to_string(),
        countries_path: PathBuf::from("./config/countries.yaml"),
        customer_group: "All Customer Groups".to_string(),
        store_base_url: "https://shop.example.com".to_string(),
        store_consumer_key: "ck_test".to_string(),
        store_consumer_secret: "cs_test".to_string(),
        db_max_connections: 5,
        db_min_connections: 1,
        db_acquire_timeout_secs: 10,
        store_request_timeout_secs: 5,
        store_per_page: 100,
        store_inter_request_delay_ms: 0,
        store_max_retries: 0,
        store_retry_backoff_base_ms: 0,
    }
}

/// Seeds the countries table and the root territory every import needs.
async fn seed_backend(pool: &PgPool) {
    let countries = vec![
        CountryConfig {
            code: "IN".to_string(),
            name: "India".to_string(),
        },
        CountryConfig {
            code: "CH".to_string(),
            name: "Switzerland".to_string(),
        },
        CountryConfig {
            code: "US".to_string(),
            name: "United States".to_string(),
        },
    ];
    seed_countries(pool, &countries)
        .await
        .expect("seeding countries should succeed");
    ensure_root_territory(pool, ROOT_TERRITORY)
        .await
        .expect("ensuring root territory should succeed");
}

fn address_block(address_1: &str, state: &str, country: &str) -> WooAddress {
    WooAddress {
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        address_1: address_1.to_string(),
        city: "Bengaluru".to_string(),
        state: state.to_string(),
        postcode: "560001".to_string(),
        country: country.to_string(),
        email: "a@x.com".to_string(),
        phone: "+91 98450 00000".to_string(),
        ..WooAddress::default()
    }
}

/// The reference customer: Indian billing and shipping addresses with a
/// mappable state abbreviation.
fn asha_rao(id: i64) -> WooCustomer {
    let mut shipping = address_block("12 MG Rd", "KA", "IN");
    // The API sends no contact details on the shipping block.
    shipping.email = String::new();
    shipping.phone = String::new();

    WooCustomer {
        id,
        email: "a@x.com".to_string(),
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        billing: Some(address_block("12 MG Rd", "KA", "IN")),
        shipping: Some(shipping),
    }
}

// ---------------------------------------------------------------------------
// Create path
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn import_creates_customer_with_addresses_and_contact(pool: PgPool) {
    seed_backend(&pool).await;
    let config = test_config();
    let mut imported = Vec::new();

    let action = import_customer(&pool, &config, &asha_rao(501), &mut imported)
        .await
        .expect("import should not fail");

    assert_eq!(action, ImportAction::Created);
    assert_eq!(imported, vec![501], "created id should be collected");

    let customer = get_customer(&pool, "501")
        .await
        .expect("lookup should not fail")
        .expect("customer 501 should exist");
    assert_eq!(customer.customer_name, "Asha Rao");
    assert_eq!(customer.woo_customer_id, 501);
    assert!(!customer.sync_with_woocommerce);
    assert_eq!(customer.customer_group, "All Customer Groups");
    assert_eq!(customer.customer_type, "Individual");
    // No Territory named "India" was seeded, so the root is assigned.
    assert_eq!(customer.territory, ROOT_TERRITORY);

    let addresses = list_addresses_for_customer(&pool, "501")
        .await
        .expect("address listing should not fail");
    assert_eq!(addresses.len(), 2, "billing and shipping expected");
    assert_eq!(addresses[0].address_type, "Billing");
    assert_eq!(addresses[1].address_type, "Shipping");
    for address in &addresses {
        assert_eq!(address.state.as_deref(), Some("Karnataka"));
        assert_eq!(address.country, "India");
        assert_eq!(address.address_title, "501");
        assert_eq!(address.address_line1, "12 MG Rd");
    }

    let contacts = list_contacts_for_customer(&pool, "501")
        .await
        .expect("contact listing should not fail");
    assert_eq!(contacts.len(), 1, "exactly one contact expected");
    assert_eq!(contacts[0].first_name, "Asha");
    assert_eq!(contacts[0].last_name, "Rao");

    let emails = list_contact_emails(&pool, contacts[0].id)
        .await
        .expect("email listing should not fail");
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].email, "a@x.com");
    assert!(emails[0].is_primary);

    let phones = list_contact_phones(&pool, contacts[0].id)
        .await
        .expect("phone listing should not fail");
    assert_eq!(phones.len(), 1);
    assert!(phones[0].is_primary);

    let logs = list_sync_logs(&pool, 10)
        .await
        .expect("log listing should not fail");
    assert_eq!(logs.len(), 1, "one Success row expected");
    assert_eq!(logs[0].status, "Success");
    assert_eq!(logs[0].method, "create_customer");
    assert_eq!(logs[0].title, "create customer");
    assert!(!logs[0].is_exception);
    assert_eq!(logs[0].request_data["id"], json!(501));
}

#[sqlx::test(migrations = "../../migrations")]
async fn import_assigns_matching_territory_when_present(pool: PgPool) {
    seed_backend(&pool).await;
    sqlx::query("INSERT INTO territories (name, parent, is_group) VALUES ($1, $2, false)")
        .bind("India")
        .bind(ROOT_TERRITORY)
        .execute(&pool)
        .await
        .expect("territory insert should succeed");

    let config = test_config();
    let mut imported = Vec::new();
    let action = import_customer(&pool, &config, &asha_rao(501), &mut imported)
        .await
        .expect("import should not fail");
    assert_eq!(action, ImportAction::Created);

    let customer = get_customer(&pool, "501")
        .await
        .expect("lookup should not fail")
        .expect("customer 501 should exist");
    assert_eq!(
        customer.territory, "India",
        "territory should match the billing country name"
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn import_falls_back_to_email_display_name(pool: PgPool) {
    seed_backend(&pool).await;
    let mut raw = asha_rao(502);
    raw.first_name = String::new();
    raw.last_name = String::new();

    let config = test_config();
    let mut imported = Vec::new();
    let action = import_customer(&pool, &config, &raw, &mut imported)
        .await
        .expect("import should not fail");
    assert_eq!(action, ImportAction::Created);

    let customer = get_customer(&pool, "502")
        .await
        .expect("lookup should not fail")
        .expect("customer 502 should exist");
    assert_eq!(customer.customer_name, "a@x.com");
}

// ---------------------------------------------------------------------------
// Skip paths
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn import_skips_existing_customer(pool: PgPool) {
    seed_backend(&pool).await;
    let config = test_config();
    let mut imported = Vec::new();

    let first = import_customer(&pool, &config, &asha_rao(501), &mut imported)
        .await
        .expect("first import should not fail");
    assert_eq!(first, ImportAction::Created);

    let second = import_customer(&pool, &config, &asha_rao(501), &mut imported)
        .await
        .expect("second import should not fail");
    assert_eq!(second, ImportAction::SkippedExisting);
    assert_eq!(imported, vec![501], "skip must not be collected");

    let logs = list_sync_logs(&pool, 10)
        .await
        .expect("log listing should not fail");
    assert_eq!(logs.len(), 1, "the skip must not write a log row");

    let addresses = list_addresses_for_customer(&pool, "501")
        .await
        .expect("address listing should not fail");
    assert_eq!(addresses.len(), 2, "the skip must not write more addresses");
}

#[sqlx::test(migrations = "../../migrations")]
async fn import_skips_customer_with_empty_billing_line(pool: PgPool) {
    seed_backend(&pool).await;
    let mut raw = asha_rao(502);
    if let Some(billing) = raw.billing.as_mut() {
        billing.address_1 = String::new();
    }

    let config = test_config();
    let mut imported = Vec::new();
    let action = import_customer(&pool, &config, &raw, &mut imported)
        .await
        .expect("import should not fail");

    assert_eq!(action, ImportAction::SkippedNoAddress);
    assert!(imported.is_empty());
    assert!(
        get_customer(&pool, "502")
            .await
            .expect("lookup should not fail")
            .is_none(),
        "no customer row expected"
    );

    let logs = list_sync_logs(&pool, 10)
        .await
        .expect("log listing should not fail");
    assert!(logs.is_empty(), "the address gate skips without logging");
}

#[sqlx::test(migrations = "../../migrations")]
async fn import_skips_customer_without_shipping_block(pool: PgPool) {
    seed_backend(&pool).await;
    let mut raw = asha_rao(503);
    raw.shipping = None;

    let config = test_config();
    let mut imported = Vec::new();
    let action = import_customer(&pool, &config, &raw, &mut imported)
        .await
        .expect("import should not fail");

    assert_eq!(action, ImportAction::SkippedNoAddress);
    assert!(
        get_customer(&pool, "503")
            .await
            .expect("lookup should not fail")
            .is_none(),
        "no customer row expected"
    );
}

// ---------------------------------------------------------------------------
// Invalid state
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn invalid_billing_state_logs_error_and_keeps_customer_row(pool: PgPool) {
    seed_backend(&pool).await;
    let mut raw = asha_rao(502);
    if let Some(billing) = raw.billing.as_mut() {
        billing.state = "ZZ".to_string();
    }

    let config = test_config();
    let mut imported = Vec::new();
    let action = import_customer(&pool, &config, &raw, &mut imported)
        .await
        .expect("import should not fail");

    assert_eq!(action, ImportAction::Failed);
    assert!(imported.is_empty(), "failed import must not be counted");

    // The customer insert committed before address validation ran, so the
    // row survives the failure.
    assert!(
        get_customer(&pool, "502")
            .await
            .expect("lookup should not fail")
            .is_some(),
        "customer row should persist"
    );
    let addresses = list_addresses_for_customer(&pool, "502")
        .await
        .expect("address listing should not fail");
    assert!(addresses.is_empty(), "no address row expected");
    let contacts = list_contacts_for_customer(&pool, "502")
        .await
        .expect("contact listing should not fail");
    assert!(contacts.is_empty(), "no contact row expected");

    let logs = list_sync_logs(&pool, 10)
        .await
        .expect("log listing should not fail");
    assert_eq!(logs.len(), 1, "one Error row expected");
    assert_eq!(logs[0].status, "Error");
    assert_eq!(logs[0].method, "create_customer");
    assert_eq!(
        logs[0].title,
        "Invalid state. Please select a valid state from available options"
    );
    assert!(logs[0].is_exception);
    assert_eq!(
        logs[0].request_data["billing"]["state"],
        json!("ZZ"),
        "the raw payload should be attached to the log row"
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn invalid_shipping_state_keeps_billing_address(pool: PgPool) {
    seed_backend(&pool).await;
    let mut raw = asha_rao(504);
    if let Some(shipping) = raw.shipping.as_mut() {
        shipping.state = "ZZ".to_string();
    }

    let config = test_config();
    let mut imported = Vec::new();
    let action = import_customer(&pool, &config, &raw, &mut imported)
        .await
        .expect("import should not fail");
    assert_eq!(action, ImportAction::Failed);

    // Billing was validated and inserted before the shipping state was
    // rejected.
    let addresses = list_addresses_for_customer(&pool, "504")
        .await
        .expect("address listing should not fail");
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0].address_type, "Billing");
    assert_eq!(addresses[0].state.as_deref(), Some("Karnataka"));

    let contacts = list_contacts_for_customer(&pool, "504")
        .await
        .expect("contact listing should not fail");
    assert!(contacts.is_empty(), "contact creation is never reached");

    let logs = list_sync_logs(&pool, 10)
        .await
        .expect("log listing should not fail");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, "Error");
    assert_eq!(logs[0].method, "create_customer");
}

// ---------------------------------------------------------------------------
// Country fallback
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_country_code_falls_back_to_switzerland(pool: PgPool) {
    seed_backend(&pool).await;
    let mut raw = asha_rao(505);
    if let Some(billing) = raw.billing.as_mut() {
        billing.country = "XX".to_string();
        billing.state = String::new();
    }
    if let Some(shipping) = raw.shipping.as_mut() {
        shipping.country = "XX".to_string();
        shipping.state = String::new();
    }

    let config = test_config();
    let mut imported = Vec::new();
    let action = import_customer(&pool, &config, &raw, &mut imported)
        .await
        .expect("import should not fail");
    assert_eq!(action, ImportAction::Created);

    let customer = get_customer(&pool, "505")
        .await
        .expect("lookup should not fail")
        .expect("customer 505 should exist");
    assert_eq!(
        customer.territory, ROOT_TERRITORY,
        "unknown billing country cannot match a territory"
    );

    let addresses = list_addresses_for_customer(&pool, "505")
        .await
        .expect("address listing should not fail");
    assert_eq!(addresses.len(), 2);
    for address in &addresses {
        assert_eq!(address.country, "Switzerland");
    }
}

// ---------------------------------------------------------------------------
// Contact edge cases
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn contact_for_missing_customer_logs_specific_error(pool: PgPool) {
    seed_backend(&pool).await;
    let raw = asha_rao(999);
    let billing = raw.billing.clone().expect("fixture has billing");

    create_customer_contact(&pool, "999", &billing, &raw).await;

    let contacts = list_contacts_for_customer(&pool, "999")
        .await
        .expect("contact listing should not fail");
    assert!(contacts.is_empty(), "no contact may be created");

    let logs = list_sync_logs(&pool, 10)
        .await
        .expect("log listing should not fail");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, "Error");
    assert_eq!(logs[0].method, "create_customer_contact");
    assert_eq!(logs[0].title, "Customer 999 not found.");
    assert!(logs[0].is_exception);
}

// ---------------------------------------------------------------------------
// Full sync run (wiremock feed)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn sync_run_counts_only_created_customers(pool: PgPool) {
    seed_backend(&pool).await;

    // Three records: one importable, one without an address, one with an
    // invalid state abbreviation.
    let importable = asha_rao(601);
    let mut no_address = asha_rao(602);
    if let Some(billing) = no_address.billing.as_mut() {
        billing.address_1 = String::new();
    }
    let mut bad_state = asha_rao(603);
    if let Some(billing) = bad_state.billing.as_mut() {
        billing.state = "ZZ".to_string();
    }

    let page = json!([
        serde_json::to_value(&importable).expect("fixture serializes"),
        serde_json::to_value(&no_address).expect("fixture serializes"),
        serde_json::to_value(&bad_state).expect("fixture serializes"),
    ]);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page))
        .mount(&server)
        .await;

    let config = test_config();
    let client = WooClient::new(&server.uri(), "ck_test", "cs_test", 5, 0, 0)
        .expect("client construction should not fail");

    let totals = sync_customers(&pool, &client, &config)
        .await
        .expect("sync run should not fail");
    assert_eq!(totals.customers, 1, "only the importable record counts");

    let logs = list_sync_logs(&pool, 10)
        .await
        .expect("log listing should not fail");
    let successes = logs.iter().filter(|l| l.status == "Success").count();
    let errors = logs.iter().filter(|l| l.status == "Error").count();
    assert_eq!(successes, 1, "one Success row for the created customer");
    assert_eq!(errors, 1, "one Error row for the invalid state");
}

#[sqlx::test(migrations = "../../migrations")]
async fn sync_rerun_creates_nothing_new(pool: PgPool) {
    seed_backend(&pool).await;

    let page = json!([serde_json::to_value(&asha_rao(601)).expect("fixture serializes")]);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page))
        .mount(&server)
        .await;

    let config = test_config();
    let client = WooClient::new(&server.uri(), "ck_test", "cs_test", 5, 0, 0)
        .expect("client construction should not fail");

    let first = sync_customers(&pool, &client, &config)
        .await
        .expect("first run should not fail");
    assert_eq!(first.customers, 1);

    let second = sync_customers(&pool, &client, &config)
        .await
        .expect("second run should not fail");
    assert_eq!(second.customers, 0, "rerun must not create duplicates");

    let customer = get_customer(&pool, "601")
        .await
        .expect("lookup should not fail");
    assert!(customer.is_some(), "customer survives the rerun untouched");

    let logs = list_sync_logs(&pool, 10)
        .await
        .expect("log listing should not fail");
    assert_eq!(logs.len(), 1, "the rerun writes no additional log rows");
}
