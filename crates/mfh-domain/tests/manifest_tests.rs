//! Federation manifest validation tests

use mfh_domain::constants::REMOTE_URL_PLACEHOLDER;
use mfh_domain::{FederationManifest, RemoteDefinition, SharedDependency};

#[test]
fn test_default_manifest_is_valid() {
    let manifest = FederationManifest::default();
    manifest
        .validate()
        .expect("should accept the default manifest");

    assert_eq!(manifest.name, "host");
    assert_eq!(manifest.remotes.len(), 1);
    assert_eq!(manifest.remotes[0].placeholder, REMOTE_URL_PLACEHOLDER);
    assert_eq!(manifest.remotes[0].lookup_key, "remote1_url");
}

#[test]
fn test_empty_host_name_is_rejected() {
    let manifest = FederationManifest {
        name: "  ".to_string(),
        ..FederationManifest::default()
    };
    assert!(manifest.validate().is_err(), "blank host name should fail");
}

#[test]
fn test_duplicate_remote_names_are_rejected() {
    let mut manifest = FederationManifest::default();
    manifest.remotes.push(RemoteDefinition {
        placeholder: "__OTHER_PLACEHOLDER__".to_string(),
        ..RemoteDefinition::default()
    });

    let err = manifest
        .validate()
        .expect_err("duplicate remote names should fail");
    assert!(
        err.to_string().contains("duplicate remote name"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_shared_placeholder_is_rejected() {
    let mut manifest = FederationManifest::default();
    manifest.remotes.push(RemoteDefinition {
        name: "remote2".to_string(),
        ..RemoteDefinition::default()
    });

    let err = manifest
        .validate()
        .expect_err("shared placeholder should fail");
    assert!(
        err.to_string().contains("more than one remote"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_singleton_without_version_is_rejected() {
    let mut manifest = FederationManifest::default();
    manifest.shared.push(SharedDependency {
        name: "styled-components".to_string(),
        singleton: true,
        required_version: None,
    });

    let err = manifest
        .validate()
        .expect_err("singleton without version should fail");
    assert!(
        err.to_string().contains("required version"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_manifest_round_trips_through_serde() {
    let manifest = FederationManifest::default();
    let json = serde_json::to_string(&manifest).expect("should serialize");
    let back: FederationManifest = serde_json::from_str(&json).expect("should deserialize");
    assert_eq!(manifest, back);
}
