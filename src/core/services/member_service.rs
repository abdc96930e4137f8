use uuid::Uuid;

use crate::core::finance_manager::FinanceManager;
use crate::core::forms::MemberForm;
use crate::domain::{Collection, FamilyMember, FamilyMemberPatch};

use super::{not_found, ServiceResult};

pub struct MemberService;

impl MemberService {
    pub fn add(manager: &mut FinanceManager, form: &MemberForm) -> ServiceResult<Uuid> {
        let member = form.validate()?;
        Ok(manager.add(member)?)
    }

    /// Replaces every field of the member with the validated form values.
    pub fn edit(manager: &mut FinanceManager, id: Uuid, form: &MemberForm) -> ServiceResult<()> {
        let member = form.validate()?;
        let patch = FamilyMemberPatch {
            name: Some(member.name),
            role: Some(member.role),
            avatar_url: Some(member.avatar_url),
            monthly_income: Some(member.monthly_income),
        };
        if manager.update::<FamilyMember>(id, patch)? {
            Ok(())
        } else {
            Err(not_found(Collection::FamilyMembers, id))
        }
    }

    /// Entries that referenced the member stay in place and are labelled unknown.
    pub fn remove(manager: &mut FinanceManager, id: Uuid) -> ServiceResult<()> {
        if manager.delete::<FamilyMember>(id)? {
            Ok(())
        } else {
            Err(not_found(Collection::FamilyMembers, id))
        }
    }
}
