#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    InputWarning, Ledger, LedgerError, Money, PaymentRecord, Person, PersonId, Transfer,
    PERSON_NAME_MAX_LEN,
};
pub use services::{ShareCalculator, TransferConstructor};
