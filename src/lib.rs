//! Amount parsing and formatting, derived charge computation, running ledger
//! balances and photo payload decoding for the stable administration app.
//!
//! Most callers only need [`util::LedgerCoreUtil`]. Store-backed ledgers go
//! through [`usecases::LedgerUsecaseImpl`] with an application-provided
//! [`repositories::LedgerRepository`].

mod r#impl;
pub(crate) use r#impl::data;
pub(crate) use r#impl::domain;
pub use r#impl::exports::*;
pub(crate) use r#impl::presentation;

mod impl_ext;
pub mod ext {
    pub use super::impl_ext::exports::*;
}

pub mod errors;
pub mod util;
