use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::finance_manager::FinanceManager;
use crate::core::forms::GoalForm;
use crate::domain::{Collection, FamilyMember, Goal, GoalPatch};

use super::{ensure_exists, not_found, ServiceError, ServiceResult};

pub struct GoalService;

impl GoalService {
    pub fn add(manager: &mut FinanceManager, form: &GoalForm) -> ServiceResult<Uuid> {
        let goal = form.validate()?;
        if let Some(member_id) = goal.member_id {
            ensure_exists::<FamilyMember>(manager.store()?, member_id)?;
        }
        Ok(manager.add(goal)?)
    }

    /// Adds `amount` to the goal's accumulated value and returns the new total.
    pub fn contribute(
        manager: &mut FinanceManager,
        id: Uuid,
        amount: Decimal,
    ) -> ServiceResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(ServiceError::Invalid(
                "contribution must be greater than zero".into(),
            ));
        }
        let current = manager
            .store()?
            .get::<Goal>(id)
            .map(|goal| goal.current_amount)
            .ok_or_else(|| not_found(Collection::Goals, id))?;
        let total = current + amount;
        manager.update::<Goal>(
            id,
            GoalPatch {
                current_amount: Some(total),
                ..GoalPatch::default()
            },
        )?;
        Ok(total)
    }

    pub fn remove(manager: &mut FinanceManager, id: Uuid) -> ServiceResult<()> {
        if manager.delete::<Goal>(id)? {
            Ok(())
        } else {
            Err(not_found(Collection::Goals, id))
        }
    }
}
