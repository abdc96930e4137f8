pub mod account;
pub mod category;
pub mod common;
pub mod credit_card;
pub mod filters;
pub mod goal;
pub mod member;
pub mod record;
pub mod transaction;

pub use account::{BankAccount, BankAccountPatch};
pub use category::{default_categories, Category};
pub use common::{Collection, Displayable, Entity, Identifiable, NamedEntity};
pub use credit_card::{CardTheme, CreditCard, CreditCardPatch};
pub use filters::{DateRange, GlobalFilters, Period, TypeFilter};
pub use goal::{Goal, GoalPatch};
pub use member::{FamilyMember, FamilyMemberPatch};
pub use record::Record;
pub use transaction::{Transaction, TransactionKind, TransactionPatch, TransactionStatus};

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use rust_decimal;
pub use uuid;
