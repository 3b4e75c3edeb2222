// file: src/assets/mod.rs
// description: parser asset provisioning module exports
// reference: internal module structure

pub mod provisioner;

pub use provisioner::{Asset, AssetProvisioner, AssetStatus, ProvisionReport};
