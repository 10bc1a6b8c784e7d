//! Cash Audit - petty-cash ledger and physical count reconciliation
//!
//! This library keeps a ledger of cash income and expense entries, records a
//! physical cash count tallied by denomination, and reports whether the cash
//! on hand matches the balance the ledger says it should be.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, denominations, the ledger aggregate)
//! - `storage`: Single-blob JSON persistence behind a backend trait
//! - `services`: Transaction entry and reconciliation arithmetic
//! - `reports`: Derived views such as the cash-flow series
//! - `export`: CSV audit report and JSON snapshot
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `cash-audit` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use cash_audit::config::{AuditPaths, Settings};
//! use cash_audit::storage::open_ledger;
//!
//! let paths = AuditPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut ledger = open_ledger(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{AuditError, AuditResult};
