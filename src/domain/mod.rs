pub mod transaction;

pub use transaction::{
    NewTransaction, Transaction, TransactionChannel, TransactionPatch, TransactionStatus,
    TransactionType,
};
