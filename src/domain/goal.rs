use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{merge, Collection, Entity};

/// A savings target, optionally owned by one family member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    pub member_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Goal {
    pub fn new(title: impl Into<String>, target_amount: Decimal, deadline: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: None,
            target_amount,
            current_amount: Decimal::ZERO,
            deadline,
            member_id: None,
            category: None,
        }
    }

    pub fn with_progress(mut self, current_amount: Decimal) -> Self {
        self.current_amount = current_amount;
        self
    }

    pub fn with_member(mut self, member_id: Uuid) -> Self {
        self.member_id = Some(member_id);
        self
    }

    /// Amount still missing, never negative.
    pub fn remaining(&self) -> Decimal {
        (self.target_amount - self.current_amount).max(Decimal::ZERO)
    }

    /// Accumulated share of the target in percent, `None` for a zero target.
    pub fn progress_percent(&self) -> Option<Decimal> {
        if self.target_amount.is_zero() {
            return None;
        }
        Some(self.current_amount * Decimal::ONE_HUNDRED / self.target_amount)
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
    pub member_id: Option<Option<Uuid>>,
    pub category: Option<Option<String>>,
}

impl Entity for Goal {
    type Patch = GoalPatch;

    const COLLECTION: Collection = Collection::Goals;

    fn apply(&mut self, patch: GoalPatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.target_amount, patch.target_amount);
        merge(&mut self.current_amount, patch.current_amount);
        merge(&mut self.deadline, patch.deadline);
        merge(&mut self.member_id, patch.member_id);
        merge(&mut self.category, patch.category);
    }
}
