//! Seeded transaction categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, NamedEntity};
use crate::domain::transaction::TransactionKind;

/// A read-only category offered to forms and dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    fn seeded(id: u32, name: &str, kind: TransactionKind, color: &str, icon: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            color: Some(color.to_string()),
            icon: Some(icon.to_string()),
        }
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{icon} {}", self.name),
            None => self.name.clone(),
        }
    }
}

/// The fixed category list every store starts with.
pub fn default_categories() -> Vec<Category> {
    use TransactionKind::{Expense, Income};

    vec![
        Category::seeded(1, "Alimentação", Expense, "#FF6B6B", "🍔"),
        Category::seeded(2, "Transporte", Expense, "#4ECDC4", "🚗"),
        Category::seeded(3, "Moradia", Expense, "#45B7D1", "🏠"),
        Category::seeded(4, "Saúde", Expense, "#96CEB4", "🏥"),
        Category::seeded(5, "Educação", Expense, "#FFEAA7", "📚"),
        Category::seeded(6, "Lazer", Expense, "#DDA15E", "🎮"),
        Category::seeded(7, "Salário", Income, "#6C5CE7", "💰"),
    ]
}

/// Categories matching `kind`, in seed order.
pub fn categories_of_kind(categories: &[Category], kind: TransactionKind) -> Vec<&Category> {
    categories.iter().filter(|category| category.kind == kind).collect()
}
