use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Entity, Identifiable, NamedEntity};

/// A stored entity: its fields plus the identifier and timestamps owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T> Record<T> {
    pub fn new(id: Uuid, data: T, now: DateTime<Utc>) -> Self {
        Self {
            id,
            data,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bumps the update timestamp without ever moving it backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }
}

impl<T: Entity> Record<T> {
    pub fn apply(&mut self, patch: T::Patch, now: DateTime<Utc>) {
        self.data.apply(patch);
        self.touch(now);
    }
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for Record<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

impl<T> Identifiable for Record<T> {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl<T: NamedEntity> NamedEntity for Record<T> {
    fn name(&self) -> &str {
        self.data.name()
    }
}

impl<T: Displayable> Displayable for Record<T> {
    fn display_label(&self) -> String {
        self.data.display_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn touch_never_rewinds_updated_at() {
        let now = Utc::now();
        let mut record = Record::new(Uuid::new_v4(), (), now);
        record.touch(now - Duration::seconds(5));
        assert_eq!(record.updated_at, now);
        record.touch(now + Duration::seconds(5));
        assert!(record.updated_at > record.created_at);
    }
}
