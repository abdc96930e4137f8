use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{merge, Collection, Displayable, Entity, NamedEntity};

/// Visual theme of a card; cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTheme {
    #[default]
    Black,
    Lime,
    White,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub name: String,
    pub holder_id: Uuid,
    /// Day of month the bill closes, 1..=31.
    pub closing_day: u8,
    /// Day of month the bill is due, 1..=31.
    pub due_day: u8,
    pub limit: Decimal,
    pub current_bill: Decimal,
    #[serde(default)]
    pub theme: CardTheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_digits: Option<String>,
}

impl CreditCard {
    pub const DEFAULT_CLOSING_DAY: u8 = 5;
    pub const DEFAULT_DUE_DAY: u8 = 15;

    /// Creates a card with an empty bill and the default billing days.
    pub fn new(name: impl Into<String>, holder_id: Uuid, limit: Decimal) -> Self {
        Self {
            name: name.into(),
            holder_id,
            closing_day: Self::DEFAULT_CLOSING_DAY,
            due_day: Self::DEFAULT_DUE_DAY,
            limit,
            current_bill: Decimal::ZERO,
            theme: CardTheme::default(),
            last_digits: None,
        }
    }

    pub fn with_billing_days(mut self, closing_day: u8, due_day: u8) -> Self {
        self.closing_day = closing_day;
        self.due_day = due_day;
        self
    }

    pub fn with_bill(mut self, current_bill: Decimal) -> Self {
        self.current_bill = current_bill;
        self
    }

    pub fn with_theme(mut self, theme: CardTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_last_digits(mut self, digits: impl Into<String>) -> Self {
        self.last_digits = Some(digits.into());
        self
    }

    /// Share of the limit consumed by the current bill, in percent.
    pub fn usage_percent(&self) -> Option<Decimal> {
        if self.limit.is_zero() {
            return None;
        }
        Some(self.current_bill * Decimal::ONE_HUNDRED / self.limit)
    }

    pub fn available_credit(&self) -> Decimal {
        self.limit - self.current_bill
    }
}

impl NamedEntity for CreditCard {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for CreditCard {
    fn display_label(&self) -> String {
        match &self.last_digits {
            Some(digits) => format!("{} •••• {}", self.name, digits),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditCardPatch {
    pub name: Option<String>,
    pub holder_id: Option<Uuid>,
    pub closing_day: Option<u8>,
    pub due_day: Option<u8>,
    pub limit: Option<Decimal>,
    pub current_bill: Option<Decimal>,
    pub theme: Option<CardTheme>,
    pub last_digits: Option<Option<String>>,
}

impl Entity for CreditCard {
    type Patch = CreditCardPatch;

    const COLLECTION: Collection = Collection::CreditCards;

    fn apply(&mut self, patch: CreditCardPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.holder_id, patch.holder_id);
        merge(&mut self.closing_day, patch.closing_day);
        merge(&mut self.due_day, patch.due_day);
        merge(&mut self.limit, patch.limit);
        merge(&mut self.current_bill, patch.current_bill);
        merge(&mut self.theme, patch.theme);
        merge(&mut self.last_digits, patch.last_digits);
    }
}
