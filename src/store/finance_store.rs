use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::derivations::{
    self, CategorySpending, DailyFlow, MemberLabel, Page, PeriodSummary,
};
use crate::domain::{
    default_categories, BankAccount, BankAccountPatch, Category, CreditCard, CreditCardPatch,
    Entity, FamilyMember, FamilyMemberPatch, GlobalFilters, Goal, GoalPatch, Period, Record,
    Transaction, TransactionPatch,
};

use super::collection::EntityCollection;
use super::snapshot::{FinanceSnapshot, CURRENT_SCHEMA_VERSION};

/// Entity types held by [`FinanceStore`], with access to their collection.
pub trait Stored: Entity {
    fn collection(store: &FinanceStore) -> &EntityCollection<Self>;
    fn collection_mut(store: &mut FinanceStore) -> &mut EntityCollection<Self>;
}

macro_rules! impl_stored {
    ($ty:ty, $field:ident) => {
        impl Stored for $ty {
            fn collection(store: &FinanceStore) -> &EntityCollection<Self> {
                &store.$field
            }

            fn collection_mut(store: &mut FinanceStore) -> &mut EntityCollection<Self> {
                &mut store.$field
            }
        }
    };
}

impl_stored!(Transaction, transactions);
impl_stored!(Goal, goals);
impl_stored!(CreditCard, credit_cards);
impl_stored!(BankAccount, bank_accounts);
impl_stored!(FamilyMember, family_members);

/// In-memory owner of every finance collection plus the global filters.
///
/// Mutations never validate and never fail: unknown identifiers on update or
/// delete are ignored and reported as `false`.
#[derive(Debug, Clone)]
pub struct FinanceStore {
    transactions: EntityCollection<Transaction>,
    goals: EntityCollection<Goal>,
    credit_cards: EntityCollection<CreditCard>,
    bank_accounts: EntityCollection<BankAccount>,
    family_members: EntityCollection<FamilyMember>,
    categories: Vec<Category>,
    filters: GlobalFilters,
    revision: u64,
}

impl Default for FinanceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FinanceStore {
    /// Empty collections, seeded categories, default filters.
    pub fn new() -> Self {
        Self {
            transactions: EntityCollection::new(),
            goals: EntityCollection::new(),
            credit_cards: EntityCollection::new(),
            bank_accounts: EntityCollection::new(),
            family_members: EntityCollection::new(),
            categories: default_categories(),
            filters: GlobalFilters::default(),
            revision: 0,
        }
    }

    pub fn from_snapshot(snapshot: FinanceSnapshot) -> Self {
        Self {
            transactions: EntityCollection::from_records(snapshot.transactions),
            goals: EntityCollection::from_records(snapshot.goals),
            credit_cards: EntityCollection::from_records(snapshot.credit_cards),
            bank_accounts: EntityCollection::from_records(snapshot.bank_accounts),
            family_members: EntityCollection::from_records(snapshot.family_members),
            ..Self::new()
        }
    }

    pub fn snapshot(&self) -> FinanceSnapshot {
        FinanceSnapshot {
            schema_version: CURRENT_SCHEMA_VERSION,
            transactions: self.transactions.as_slice().to_vec(),
            goals: self.goals.as_slice().to_vec(),
            credit_cards: self.credit_cards.as_slice().to_vec(),
            bank_accounts: self.bank_accounts.as_slice().to_vec(),
            family_members: self.family_members.as_slice().to_vec(),
        }
    }

    /// Counter bumped by every effective mutation, including filter changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // Generic write path

    pub fn add<T: Stored>(&mut self, data: T) -> Uuid {
        let id = T::collection_mut(self).insert(data, Utc::now());
        self.revision += 1;
        tracing::debug!(collection = %T::COLLECTION, %id, "record added");
        id
    }

    pub fn update<T: Stored>(&mut self, id: Uuid, patch: T::Patch) -> bool {
        let changed = T::collection_mut(self).update(id, patch, Utc::now());
        if changed {
            self.revision += 1;
            tracing::debug!(collection = %T::COLLECTION, %id, "record updated");
        } else {
            tracing::debug!(collection = %T::COLLECTION, %id, "update ignored: unknown id");
        }
        changed
    }

    pub fn delete<T: Stored>(&mut self, id: Uuid) -> bool {
        let removed = T::collection_mut(self).remove(id).is_some();
        if removed {
            self.revision += 1;
            tracing::debug!(collection = %T::COLLECTION, %id, "record deleted");
        } else {
            tracing::debug!(collection = %T::COLLECTION, %id, "delete ignored: unknown id");
        }
        removed
    }

    pub fn get<T: Stored>(&self, id: Uuid) -> Option<&Record<T>> {
        T::collection(self).get(id)
    }

    pub fn records<T: Stored>(&self) -> &[Record<T>] {
        T::collection(self).as_slice()
    }

    // Transactions

    pub fn transactions(&self) -> &[Record<Transaction>] {
        self.transactions.as_slice()
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Record<Transaction>> {
        self.transactions.get(id)
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        self.add(transaction)
    }

    pub fn update_transaction(&mut self, id: Uuid, patch: TransactionPatch) -> bool {
        self.update::<Transaction>(id, patch)
    }

    pub fn delete_transaction(&mut self, id: Uuid) -> bool {
        self.delete::<Transaction>(id)
    }

    /// Settles a pending expense: paid and completed.
    pub fn mark_transaction_paid(&mut self, id: Uuid) -> bool {
        self.update_transaction(id, TransactionPatch::mark_paid())
    }

    // Goals

    pub fn goals(&self) -> &[Record<Goal>] {
        self.goals.as_slice()
    }

    pub fn goal(&self, id: Uuid) -> Option<&Record<Goal>> {
        self.goals.get(id)
    }

    pub fn add_goal(&mut self, goal: Goal) -> Uuid {
        self.add(goal)
    }

    pub fn update_goal(&mut self, id: Uuid, patch: GoalPatch) -> bool {
        self.update::<Goal>(id, patch)
    }

    pub fn delete_goal(&mut self, id: Uuid) -> bool {
        self.delete::<Goal>(id)
    }

    // Credit cards

    pub fn credit_cards(&self) -> &[Record<CreditCard>] {
        self.credit_cards.as_slice()
    }

    pub fn credit_card(&self, id: Uuid) -> Option<&Record<CreditCard>> {
        self.credit_cards.get(id)
    }

    pub fn add_credit_card(&mut self, card: CreditCard) -> Uuid {
        self.add(card)
    }

    pub fn update_credit_card(&mut self, id: Uuid, patch: CreditCardPatch) -> bool {
        self.update::<CreditCard>(id, patch)
    }

    pub fn delete_credit_card(&mut self, id: Uuid) -> bool {
        self.delete::<CreditCard>(id)
    }

    // Bank accounts

    pub fn bank_accounts(&self) -> &[Record<BankAccount>] {
        self.bank_accounts.as_slice()
    }

    pub fn bank_account(&self, id: Uuid) -> Option<&Record<BankAccount>> {
        self.bank_accounts.get(id)
    }

    pub fn add_bank_account(&mut self, account: BankAccount) -> Uuid {
        self.add(account)
    }

    pub fn update_bank_account(&mut self, id: Uuid, patch: BankAccountPatch) -> bool {
        self.update::<BankAccount>(id, patch)
    }

    /// Removes the account only; its transactions are left in place.
    pub fn delete_bank_account(&mut self, id: Uuid) -> bool {
        self.delete::<BankAccount>(id)
    }

    // Family members

    pub fn family_members(&self) -> &[Record<FamilyMember>] {
        self.family_members.as_slice()
    }

    pub fn family_member(&self, id: Uuid) -> Option<&Record<FamilyMember>> {
        self.family_members.get(id)
    }

    pub fn add_family_member(&mut self, member: FamilyMember) -> Uuid {
        self.add(member)
    }

    pub fn update_family_member(&mut self, id: Uuid, patch: FamilyMemberPatch) -> bool {
        self.update::<FamilyMember>(id, patch)
    }

    pub fn delete_family_member(&mut self, id: Uuid) -> bool {
        self.delete::<FamilyMember>(id)
    }

    // Categories and filters

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filters(&self) -> &GlobalFilters {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: GlobalFilters) {
        self.filters = filters;
        self.revision += 1;
    }

    /// Edits the filters in place, starting from their current value.
    pub fn update_filters<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut GlobalFilters),
    {
        edit(&mut self.filters);
        self.revision += 1;
    }

    // Derived views

    pub fn filtered_transactions(&self) -> Vec<&Record<Transaction>> {
        derivations::filter_transactions(self.transactions(), &self.filters)
    }

    pub fn filtered_page(&self, page: usize, per_page: usize) -> Page<&Record<Transaction>> {
        derivations::paginate(&self.filtered_transactions(), page, per_page)
    }

    pub fn total_balance(&self) -> Decimal {
        derivations::total_balance(self.bank_accounts(), self.credit_cards())
    }

    pub fn income_for_period(&self, period: Period) -> Decimal {
        derivations::income_for_period(self.transactions(), period)
    }

    pub fn expenses_for_period(&self, period: Period) -> Decimal {
        derivations::expenses_for_period(self.transactions(), period)
    }

    pub fn expenses_by_category(&self, period: Period) -> BTreeMap<String, Decimal> {
        derivations::expenses_by_category(self.transactions(), period)
    }

    pub fn period_summary(&self, period: Period) -> PeriodSummary {
        derivations::period_summary(
            self.transactions(),
            self.bank_accounts(),
            self.credit_cards(),
            period,
        )
    }

    pub fn category_spending(&self, period: Period) -> Vec<CategorySpending> {
        derivations::category_spending(self.transactions(), &self.categories, period)
    }

    pub fn daily_flow(&self, period: Period) -> Vec<DailyFlow> {
        derivations::daily_flow(self.transactions(), period)
    }

    pub fn upcoming_expenses(&self, limit: usize) -> Vec<&Record<Transaction>> {
        derivations::upcoming_expenses(self.transactions(), limit)
    }

    pub fn member_label(&self, member_id: Option<Uuid>) -> MemberLabel<'_> {
        derivations::member_label(self.family_members(), member_id)
    }

    /// Period selected in the filters, with open bounds resolved against `today`.
    pub fn active_period(&self, today: NaiveDate) -> Period {
        self.filters.period_or_default(today)
    }
}
