//! PowerBill Tracker library
//!
//! Appliance usage ledger, cost and savings estimates, and bill trend
//! projection. The text shell in [`shell`] is one front end over it.

pub mod analytics;
pub mod core;
pub mod i18n;
pub mod ledger;
pub mod pricing;
pub mod shell;
