//! Core data models for Cash Audit
//!
//! Transactions, the persisted ledger aggregate, money and the transient
//! denomination tally used by the physical cash count.

pub mod category;
pub mod denomination;
pub mod ids;
pub mod ledger_state;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use denomination::{DenominationCount, DENOMINATIONS};
pub use ids::TransactionId;
pub use ledger_state::{LedgerState, PhysicalCount};
pub use money::Money;
pub use transaction::{Transaction, TransactionType, EVIDENCE_PLACEHOLDER};
