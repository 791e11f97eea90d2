//! weightfetch_core - Core library for model weight fetching
//!
//! This crate provides:
//! - HuggingFace Hub client and full-repository snapshot downloads
//! - Advisory disk-space precheck
//! - Verification of expected model components

pub mod config;
pub mod hub;
pub mod space;
pub mod verify;

pub use config::Config;
pub use hub::{HuggingFaceHub, SnapshotFetcher, SnapshotInfo};
pub use space::SpaceCheck;
