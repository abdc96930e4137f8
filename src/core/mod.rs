//! Application layer: the store handle handed to presentation code, the form
//! checks, and the services that combine both.

pub mod finance_manager;
pub mod forms;
pub mod services;

pub use finance_manager::{FinanceManager, LoadReport};
pub use forms::{BankAccountForm, CreditCardForm, GoalForm, MemberForm, TransactionForm};
pub use services::{ServiceError, ServiceResult};
