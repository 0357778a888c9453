//! End-to-end wizard flows against the trunk store

use super::*;
use crate::models::{CredentialGenerator, Transport, TrunkMode, TrunkStatus};
use std::collections::HashSet;

fn wizard() -> TrunkWizard {
    TrunkWizard::new(CredentialGenerator::seeded(0xC0FFEE))
}

fn fill_step_one(wizard: &mut TrunkWizard, name: &str, region: &str, mode: TrunkMode) {
    wizard.set_name(name);
    wizard.set_region(Some(region.to_string()));
    wizard.set_mode(mode);
}

// ==================== Navigation ====================

#[test]
fn test_advance_blocked_on_empty_step_one() {
    let mut wizard = wizard();

    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::RegionAndMode);
    assert_eq!(wizard.errors().len(), 3);
    assert!(wizard.error(FieldKey::Name).is_some());
}

#[test]
fn test_registered_flow_skips_options_and_acl() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Reg", "us1", TrunkMode::Registered);

    let mut visited = vec![wizard.step()];
    while wizard.advance() {
        visited.push(wizard.step());
    }

    assert_eq!(visited, vec![WizardStep::RegionAndMode, WizardStep::Endpoints, WizardStep::Review]);
    assert!(!visited.contains(&WizardStep::OptionsAndAcl));
    assert!(wizard.is_last());
    assert_eq!(wizard.max_reached(), WizardStep::Review);
}

#[test]
fn test_static_flow_visits_options_and_acl() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Static", "eu2", TrunkMode::Static);
    wizard.set_endpoint_address(1, "203.0.113.10");

    let mut visited = vec![wizard.step()];
    while wizard.advance() {
        visited.push(wizard.step());
    }

    assert_eq!(
        visited,
        vec![
            WizardStep::RegionAndMode,
            WizardStep::Endpoints,
            WizardStep::OptionsAndAcl,
            WizardStep::Review,
        ]
    );
}

#[test]
fn test_static_endpoints_block_advance() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Static", "eu2", TrunkMode::Static);
    let second = wizard.add_static_endpoint();
    wizard.set_endpoint_address(second, "sip.carrier.example.com");
    assert!(wizard.advance());

    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::Endpoints);
    assert_eq!(wizard.errors().keys().collect::<Vec<_>>(), vec![&FieldKey::Endpoint(1)]);

    wizard.set_endpoint_address(1, "203.0.113.10");
    assert!(wizard.advance());
    assert!(wizard.errors().is_empty());
}

#[test]
fn test_retreat_clears_errors_without_validating() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Static", "eu2", TrunkMode::Static);
    assert!(wizard.advance());
    assert!(!wizard.advance());
    assert!(!wizard.errors().is_empty());

    wizard.retreat();
    assert_eq!(wizard.step(), WizardStep::RegionAndMode);
    assert!(wizard.errors().is_empty());

    // already at the first step
    wizard.retreat();
    assert_eq!(wizard.step(), WizardStep::RegionAndMode);
    assert!(wizard.is_first());
}

#[test]
fn test_retreat_from_review_in_registered_mode_skips_options() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Reg", "us1", TrunkMode::Registered);
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.step(), WizardStep::Review);

    wizard.retreat();
    assert_eq!(wizard.step(), WizardStep::Endpoints);
}

#[test]
fn test_max_reached_survives_retreat() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Reg", "us1", TrunkMode::Registered);
    wizard.advance();
    wizard.advance();
    wizard.retreat();
    wizard.retreat();

    assert_eq!(wizard.step(), WizardStep::RegionAndMode);
    assert_eq!(wizard.max_reached(), WizardStep::Review);
}

// ==================== Credentials ====================

#[test]
fn test_credentials_generated_when_leaving_step_one() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Reg", "us1", TrunkMode::Registered);
    assert!(wizard.form().credentials.is_empty());

    wizard.advance();
    let creds = wizard.form().credentials.clone();
    assert_eq!(creds.len(), 2);
    assert!(creds.iter().all(|c| c.username.starts_with("tdtrunk-us1-")));

    // going back and forward again keeps the existing set
    wizard.retreat();
    wizard.advance();
    assert_eq!(wizard.form().credentials, creds);
}

#[test]
fn test_static_mode_generates_no_credentials() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Static", "eu2", TrunkMode::Static);
    wizard.advance();
    assert!(wizard.form().credentials.is_empty());
}

#[test]
fn test_endpoint_count_change_regenerates_unique_set() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Reg", "us1", TrunkMode::Registered);
    wizard.advance();
    let previous = wizard.form().credentials.clone();

    for n in [1_i64, 3, 7, 20] {
        wizard.set_endpoint_count(n);
        let creds = &wizard.form().credentials;
        assert_eq!(creds.len(), n as usize);
        let unique: HashSet<&str> = creds.iter().map(|c| c.username.as_str()).collect();
        assert_eq!(unique.len(), n as usize);
    }

    wizard.set_endpoint_count(2);
    assert_ne!(wizard.form().credentials, previous);
}

#[test]
fn test_endpoint_count_is_clamped() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Reg", "us1", TrunkMode::Registered);

    wizard.set_endpoint_count(0);
    assert_eq!(wizard.form().endpoint_count, 1);
    assert_eq!(wizard.form().credentials.len(), 1);

    wizard.set_endpoint_count(99);
    assert_eq!(wizard.form().endpoint_count, 20);
    assert_eq!(wizard.form().credentials.len(), 20);

    wizard.set_endpoint_count_input("abc");
    assert_eq!(wizard.form().endpoint_count, 1);

    wizard.set_endpoint_count_input(" 5 ");
    assert_eq!(wizard.form().credentials.len(), 5);
}

#[test]
fn test_custom_max_endpoints() {
    let mut wizard = wizard().with_max_endpoints(4);
    wizard.set_endpoint_count(10);
    assert_eq!(wizard.form().endpoint_count, 4);
}

#[test]
fn test_max_endpoints_cannot_exceed_twenty() {
    let mut wizard = wizard().with_max_endpoints(20_000_000);
    wizard.set_endpoint_count(50);
    assert_eq!(wizard.form().endpoint_count, 20);
    assert_eq!(wizard.form().credentials.len(), 20);

    let mut floor = self::wizard().with_max_endpoints(0);
    floor.set_endpoint_count(5);
    assert_eq!(floor.form().endpoint_count, 1);
}

#[test]
fn test_regenerate_keeps_count() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Reg", "us1", TrunkMode::Registered);
    wizard.set_endpoint_count(4);
    let before = wizard.form().credentials.clone();

    wizard.regenerate_credentials();
    assert_eq!(wizard.form().credentials.len(), 4);
    assert_ne!(wizard.form().credentials, before);
    assert!(wizard.credentials_csv().starts_with("Endpoint,Username,Password\n1,tdtrunk-us1-"));
}

// ==================== Submission ====================

#[test]
fn test_static_submit_scenario() {
    let mut store = TrunkStore::new();
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Carrier-Primary-EU", "eu2", TrunkMode::Static);
    wizard.set_endpoint_address(1, "203.0.113.10");
    wizard.set_endpoint_transport(1, Transport::Udp);
    while wizard.advance() {}

    let draft = wizard.submit().unwrap();
    let trunk = store.add(draft);

    assert_eq!(trunk.name, "Carrier-Primary-EU");
    assert_eq!(trunk.region, "eu2");
    assert_eq!(trunk.mode, TrunkMode::Static);
    assert_eq!(trunk.transports, vec![Transport::Udp]);
    assert_eq!(trunk.endpoint_count, 1);
    assert_eq!(trunk.status, TrunkStatus::Pending);
    assert!(trunk.options);
    assert!(trunk.id.starts_with("trunk-"));
}

#[test]
fn test_registered_submit_scenario() {
    let mut store = TrunkStore::new();
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Reg-US", "us1", TrunkMode::Registered);
    wizard.advance();
    wizard.set_endpoint_count(3);
    wizard.advance();

    let trunk = store.add(wizard.submit().unwrap());

    assert_eq!(trunk.endpoint_count, 3);
    assert_eq!(trunk.transports, vec![Transport::Udp]);
    assert_eq!(trunk.status, TrunkStatus::Pending);
    assert!(!trunk.options);
}

#[test]
fn test_static_transports_deduplicated_in_order() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Multi", "sa1", TrunkMode::Static);
    wizard.set_endpoint_address(1, "203.0.113.10");
    wizard.set_endpoint_transport(1, Transport::Tls);
    for (address, transport) in [
        ("203.0.113.11", Transport::Udp),
        ("203.0.113.12", Transport::Tls),
        ("203.0.113.13", Transport::Udp),
    ] {
        let id = wizard.add_static_endpoint();
        wizard.set_endpoint_address(id, address);
        wizard.set_endpoint_transport(id, transport);
    }
    wizard.toggle_options();
    wizard.add_acl_entry("198.51.100.0/24");

    let draft = wizard.submit().unwrap();
    assert_eq!(draft.transports, vec![Transport::Tls, Transport::Udp]);
    assert_eq!(draft.endpoint_count, 4);
    assert!(!draft.options);
    assert_eq!(draft.acl, vec!["198.51.100.0/24"]);
}

#[test]
fn test_static_submit_never_completes_with_empty_address() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Static", "eu2", TrunkMode::Static);
    wizard.set_endpoint_address(1, "203.0.113.10");
    while wizard.advance() {}
    assert_eq!(wizard.step(), WizardStep::Review);

    // an address cleared after validation is still caught
    let id = wizard.add_static_endpoint();
    let err = wizard.submit().unwrap_err();

    let SubmitError::Incomplete { step, errors } = err;
    assert_eq!(step, WizardStep::Endpoints);
    assert!(errors.contains_key(&FieldKey::Endpoint(id)));
    assert_eq!(wizard.step(), WizardStep::Endpoints);
    assert!(wizard.error(FieldKey::Endpoint(id)).is_some());
}

#[test]
fn test_submit_twice_emits_two_drafts() {
    let mut store = TrunkStore::new();
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Twice", "ap1", TrunkMode::Registered);
    wizard.advance();
    wizard.advance();

    store.add(wizard.submit().unwrap());
    store.add(wizard.submit().unwrap());

    assert_eq!(store.len(), 2);
    let ids: HashSet<&str> = store.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_reset_discards_form() {
    let mut wizard = wizard();
    fill_step_one(&mut wizard, "Reg", "us1", TrunkMode::Registered);
    wizard.advance();

    wizard.reset();
    assert_eq!(wizard.step(), WizardStep::RegionAndMode);
    assert_eq!(wizard.max_reached(), WizardStep::RegionAndMode);
    assert_eq!(wizard.form(), &WizardForm::default());
}
