//! Raw form input and the checks run on it before anything reaches the store.
//!
//! Text fields arrive exactly as typed. Each `validate` either produces the
//! entity fields or a [`ServiceError`] naming what is wrong.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{
    BankAccount, CardTheme, CreditCard, FamilyMember, Goal, Transaction, TransactionKind,
    TransactionStatus,
};

/// Collects names of blank required fields.
#[derive(Default)]
struct Required(Vec<&'static str>);

impl Required {
    fn text(mut self, name: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.0.push(name);
        }
        self
    }

    fn some<T>(mut self, name: &'static str, value: &Option<T>) -> Self {
        if value.is_none() {
            self.0.push(name);
        }
        self
    }

    fn check(self) -> ServiceResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::MissingFields(self.0))
        }
    }
}

/// Parses an amount typed as `1234.56` or `1234,56`.
pub fn parse_amount(field: &str, raw: &str) -> ServiceResult<Decimal> {
    let trimmed = raw.trim();
    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    Decimal::from_str(&normalized)
        .map_err(|_| ServiceError::Invalid(format!("{field} must be a number, got `{trimmed}`")))
}

fn parse_day(field: &str, raw: &str) -> ServiceResult<u8> {
    let trimmed = raw.trim();
    match trimmed.parse::<u8>() {
        Ok(day) if (1..=31).contains(&day) => Ok(day),
        _ => Err(ServiceError::Invalid(format!(
            "{field} must be a day between 1 and 31, got `{trimmed}`"
        ))),
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The "new transaction" form.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub kind: TransactionKind,
    pub amount: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    /// `None` files the entry as shared.
    pub member_id: Option<Uuid>,
    pub account_id: Option<Uuid>,
    pub installments: Option<u32>,
    pub current_installment: Option<u32>,
    pub is_recurring: bool,
}

impl TransactionForm {
    /// Blank expense form dated `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount: String::new(),
            description: String::new(),
            category: String::new(),
            date,
            member_id: None,
            account_id: None,
            installments: None,
            current_installment: None,
            is_recurring: false,
        }
    }

    /// Produces a pending, unpaid transaction.
    pub fn validate(&self) -> ServiceResult<Transaction> {
        Required::default()
            .text("amount", &self.amount)
            .text("description", &self.description)
            .text("category", &self.category)
            .some("account", &self.account_id)
            .check()?;

        let amount = parse_amount("amount", &self.amount)?;
        if amount <= Decimal::ZERO {
            return Err(ServiceError::Invalid("amount must be greater than zero".into()));
        }
        let account_id = self
            .account_id
            .ok_or(ServiceError::MissingFields(vec!["account"]))?;

        let transaction = Transaction {
            kind: self.kind,
            amount,
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            date: self.date,
            account_id,
            member_id: self.member_id,
            installments: self.installments,
            current_installment: self.current_installment,
            status: TransactionStatus::Pending,
            is_recurring: self.is_recurring,
            is_paid: false,
        };
        if transaction.installments == Some(0) {
            return Err(ServiceError::Invalid("installments must be at least 1".into()));
        }
        if !transaction.installments_consistent() {
            return Err(ServiceError::Invalid(
                "current installment cannot exceed the number of installments".into(),
            ));
        }
        Ok(transaction)
    }
}

/// The "add credit card" form.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditCardForm {
    pub name: String,
    pub holder_id: Option<Uuid>,
    pub closing_day: String,
    pub due_day: String,
    pub limit: String,
    pub theme: CardTheme,
    pub last_digits: String,
}

impl Default for CreditCardForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            holder_id: None,
            closing_day: CreditCard::DEFAULT_CLOSING_DAY.to_string(),
            due_day: CreditCard::DEFAULT_DUE_DAY.to_string(),
            limit: String::new(),
            theme: CardTheme::default(),
            last_digits: String::new(),
        }
    }
}

impl CreditCardForm {
    /// Produces a card with an empty current bill.
    pub fn validate(&self) -> ServiceResult<CreditCard> {
        Required::default()
            .text("name", &self.name)
            .some("holder", &self.holder_id)
            .text("limit", &self.limit)
            .check()?;

        let holder_id = self
            .holder_id
            .ok_or(ServiceError::MissingFields(vec!["holder"]))?;
        let limit = parse_amount("limit", &self.limit)?;
        if limit < Decimal::ZERO {
            return Err(ServiceError::Invalid("limit cannot be negative".into()));
        }
        let closing_day = parse_day("closing day", &self.closing_day)?;
        let due_day = parse_day("due day", &self.due_day)?;

        let mut card = CreditCard::new(self.name.trim(), holder_id, limit)
            .with_billing_days(closing_day, due_day)
            .with_theme(self.theme);
        if let Some(digits) = optional_text(&self.last_digits) {
            if digits.len() != 4 || !digits.chars().all(|ch| ch.is_ascii_digit()) {
                return Err(ServiceError::Invalid(
                    "last digits must be exactly four digits".into(),
                ));
            }
            card = card.with_last_digits(digits);
        }
        Ok(card)
    }
}

/// The "add bank account" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankAccountForm {
    pub name: String,
    pub holder_id: Option<Uuid>,
    pub balance: String,
}

impl BankAccountForm {
    pub fn validate(&self) -> ServiceResult<BankAccount> {
        Required::default()
            .text("name", &self.name)
            .some("holder", &self.holder_id)
            .text("balance", &self.balance)
            .check()?;
        let holder_id = self
            .holder_id
            .ok_or(ServiceError::MissingFields(vec!["holder"]))?;
        let balance = parse_amount("balance", &self.balance)?;
        Ok(BankAccount::new(self.name.trim(), holder_id, balance))
    }
}

/// The "add member" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberForm {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
    pub monthly_income: String,
}

impl MemberForm {
    pub fn validate(&self) -> ServiceResult<FamilyMember> {
        Required::default()
            .text("name", &self.name)
            .text("role", &self.role)
            .check()?;
        let mut member = FamilyMember::new(self.name.trim(), self.role.trim());
        member.avatar_url = optional_text(&self.avatar_url);
        if let Some(raw) = optional_text(&self.monthly_income) {
            member.monthly_income = Some(parse_amount("monthly income", &raw)?);
        }
        Ok(member)
    }
}

/// The "new goal" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalForm {
    pub title: String,
    pub description: String,
    pub target_amount: String,
    pub current_amount: String,
    pub deadline: Option<NaiveDate>,
    pub member_id: Option<Uuid>,
    pub category: String,
}

impl GoalForm {
    pub fn validate(&self) -> ServiceResult<Goal> {
        Required::default()
            .text("title", &self.title)
            .text("target amount", &self.target_amount)
            .some("deadline", &self.deadline)
            .check()?;
        let deadline = self
            .deadline
            .ok_or(ServiceError::MissingFields(vec!["deadline"]))?;
        let target_amount = parse_amount("target amount", &self.target_amount)?;
        if target_amount <= Decimal::ZERO {
            return Err(ServiceError::Invalid(
                "target amount must be greater than zero".into(),
            ));
        }
        let current_amount = match optional_text(&self.current_amount) {
            Some(raw) => parse_amount("current amount", &raw)?,
            None => Decimal::ZERO,
        };
        Ok(Goal {
            title: self.title.trim().to_string(),
            description: optional_text(&self.description),
            target_amount,
            current_amount,
            deadline,
            member_id: self.member_id,
            category: optional_text(&self.category),
        })
    }
}
