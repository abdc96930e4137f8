use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::{merge, Collection, Displayable, Entity, NamedEntity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub name: String,
    /// Free text such as "owner", "mãe" or "filho".
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<Decimal>,
}

impl FamilyMember {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            avatar_url: None,
            monthly_income: None,
        }
    }

    pub fn with_income(mut self, monthly_income: Decimal) -> Self {
        self.monthly_income = Some(monthly_income);
        self
    }
}

impl NamedEntity for FamilyMember {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for FamilyMember {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub avatar_url: Option<Option<String>>,
    pub monthly_income: Option<Option<Decimal>>,
}

impl Entity for FamilyMember {
    type Patch = FamilyMemberPatch;

    const COLLECTION: Collection = Collection::FamilyMembers;

    fn apply(&mut self, patch: FamilyMemberPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.role, patch.role);
        merge(&mut self.avatar_url, patch.avatar_url);
        merge(&mut self.monthly_income, patch.monthly_income);
    }
}
