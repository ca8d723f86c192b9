//! Core business logic for Docvault.
//!
//! This crate implements the upload-initiation workflow: actor identity,
//! the authorization gate, storage credential issuance, and the document
//! metadata/audit write sequence. It has no web or database dependencies;
//! persistence and presigning are reached through injectable ports.

pub mod actor;
pub mod authz;
pub mod document;
pub mod storage;
