//! Visitor group
//!
//! The ordered, non-empty visitor list of a booking, with the single-head
//! invariant maintained across every mutating operation: exactly one
//! visitor carries the head (invoice contact) flag at all times.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::visitor::{Visitor, VisitorPatch};

/// Ordered, non-empty list of visitors with exactly one head
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VisitorGroup(Vec<Visitor>);

// Deserialization funnels through `new` so that snapshots cannot smuggle
// in an empty list or a stray head flag.
impl<'de> Deserialize<'de> for VisitorGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let visitors = Vec::<Visitor>::deserialize(deserializer)?;
        Self::new(visitors).map_err(serde::de::Error::custom)
    }
}

impl VisitorGroup {
    /// Build a group from an already-collected visitor list.
    ///
    /// Rejects an empty list. The head flag is normalized: the first
    /// flagged visitor wins, any other flags are cleared, and if nobody
    /// is flagged the first visitor is promoted.
    pub fn new(visitors: Vec<Visitor>) -> Result<Self, GroupError> {
        if visitors.is_empty() {
            return Err(GroupError::Empty);
        }
        let mut group = Self(visitors);
        let head = group.0.iter().position(|v| v.is_head).unwrap_or(0);
        for (i, visitor) in group.0.iter_mut().enumerate() {
            visitor.is_head = i == head;
        }
        Ok(group)
    }

    /// Start a group from a single visitor, who becomes the head
    pub fn solo(mut visitor: Visitor) -> Self {
        visitor.is_head = true;
        Self(vec![visitor])
    }

    /// Append a visitor. Newcomers are never auto-promoted to head.
    pub fn add(&mut self, mut visitor: Visitor) {
        visitor.is_head = false;
        self.0.push(visitor);
    }

    /// Remove the visitor at `index`.
    ///
    /// Removing the last remaining visitor is rejected and leaves the
    /// group unchanged. If the removed visitor was the head, the first
    /// remaining visitor is promoted: the one exception to "never
    /// auto-promote", needed to restore the invariant.
    pub fn remove(&mut self, index: usize) -> Result<Visitor, GroupError> {
        if self.0.len() == 1 {
            return Err(GroupError::LastVisitor);
        }
        if index >= self.0.len() {
            return Err(GroupError::OutOfRange {
                index,
                len: self.0.len(),
            });
        }
        let removed = self.0.remove(index);
        if !self.0.iter().any(|v| v.is_head) {
            self.0[0].is_head = true;
        }
        Ok(removed)
    }

    /// Make the visitor at `index` the head, clearing the flag everywhere else
    pub fn set_head(&mut self, index: usize) -> Result<(), GroupError> {
        if index >= self.0.len() {
            return Err(GroupError::OutOfRange {
                index,
                len: self.0.len(),
            });
        }
        for (i, visitor) in self.0.iter_mut().enumerate() {
            visitor.is_head = i == index;
        }
        Ok(())
    }

    /// Merge a partial update into the visitor at `index`, deriving the
    /// age as of `today` when the patch carries a date of birth
    pub fn update(
        &mut self,
        index: usize,
        patch: &VisitorPatch,
        today: NaiveDate,
    ) -> Result<(), GroupError> {
        let len = self.0.len();
        let visitor = self
            .0
            .get_mut(index)
            .ok_or(GroupError::OutOfRange { index, len })?;
        visitor.apply(patch, today);
        Ok(())
    }

    /// The head visitor. Every construction path normalizes the flag, so
    /// the fallback to the first visitor is belt-and-braces only.
    pub fn head(&self) -> &Visitor {
        self.0.iter().find(|v| v.is_head).unwrap_or(&self.0[0])
    }

    /// Number of visitors in the group
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A group is never empty by construction, but callers iterating
    /// arbitrary snapshots may still want the check
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Visitor at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Visitor> {
        self.0.get(index)
    }

    /// Iterate the visitors in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Visitor> {
        self.0.iter()
    }

    /// The visitors as a slice
    pub fn as_slice(&self) -> &[Visitor] {
        &self.0
    }

    /// Validate every visitor's identity fields (head contact included)
    pub fn validate(&self) -> Result<(), super::visitor::VisitorValidationError> {
        for visitor in &self.0 {
            visitor.validate()?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn head_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_head).count()
    }
}

impl<'a> IntoIterator for &'a VisitorGroup {
    type Item = &'a Visitor;
    type IntoIter = std::slice::Iter<'a, Visitor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Invariant errors for the visitor group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    /// A booking must have at least one visitor
    Empty,
    /// Removing the sole remaining visitor is not allowed
    LastVisitor,
    /// Index past the end of the visitor list
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Visitor group cannot be empty"),
            Self::LastVisitor => {
                write!(f, "Cannot remove the last remaining visitor")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "Visitor index {} out of range (group size {})", index, len)
            }
        }
    }
}

impl std::error::Error for GroupError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::visitor::Gender;

    fn visitor(name: &str) -> Visitor {
        Visitor::new(name, format!("ID-{}", name))
    }

    fn head_visitor(name: &str) -> Visitor {
        let mut v = visitor(name);
        v.is_head = true;
        v
    }

    #[test]
    fn test_empty_group_rejected() {
        assert_eq!(VisitorGroup::new(vec![]), Err(GroupError::Empty));
    }

    #[test]
    fn test_new_promotes_first_when_no_head_flagged() {
        let group = VisitorGroup::new(vec![visitor("A"), visitor("B")]).unwrap();
        assert!(group.get(0).unwrap().is_head);
        assert_eq!(group.head_count(), 1);
    }

    #[test]
    fn test_new_keeps_first_flagged_head() {
        let group =
            VisitorGroup::new(vec![visitor("A"), head_visitor("B"), head_visitor("C")]).unwrap();
        assert_eq!(group.head().name, "B");
        assert_eq!(group.head_count(), 1);
    }

    #[test]
    fn test_add_never_auto_promotes() {
        let mut group = VisitorGroup::solo(visitor("A"));
        let mut flagged = visitor("B");
        flagged.is_head = true; // flag is discarded on add
        group.add(flagged);

        assert_eq!(group.len(), 2);
        assert_eq!(group.head().name, "A");
        assert_eq!(group.head_count(), 1);
    }

    #[test]
    fn test_remove_last_visitor_rejected() {
        let mut group = VisitorGroup::solo(visitor("A"));
        assert_eq!(group.remove(0), Err(GroupError::LastVisitor));
        assert_eq!(group.len(), 1);
        assert!(group.get(0).unwrap().is_head);
    }

    #[test]
    fn test_remove_head_promotes_first_remaining() {
        let mut group = VisitorGroup::solo(visitor("A"));
        group.add(visitor("B"));
        group.add(visitor("C"));

        let removed = group.remove(0).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(group.head().name, "B");
        assert_eq!(group.head_count(), 1);
    }

    #[test]
    fn test_remove_non_head_keeps_head() {
        let mut group = VisitorGroup::solo(visitor("A"));
        group.add(visitor("B"));
        group.add(visitor("C"));
        group.set_head(2).unwrap();

        group.remove(1).unwrap();
        assert_eq!(group.head().name, "C");
        assert_eq!(group.head_count(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut group = VisitorGroup::solo(visitor("A"));
        group.add(visitor("B"));
        assert_eq!(
            group.remove(5),
            Err(GroupError::OutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_set_head_is_exclusive() {
        let mut group = VisitorGroup::solo(visitor("A"));
        group.add(visitor("B"));
        group.add(visitor("C"));

        group.set_head(1).unwrap();
        assert_eq!(group.head().name, "B");
        assert_eq!(group.head_count(), 1);

        group.set_head(2).unwrap();
        assert_eq!(group.head().name, "C");
        assert_eq!(group.head_count(), 1);
    }

    #[test]
    fn test_invariant_holds_across_operation_sequences() {
        let mut group = VisitorGroup::solo(visitor("A"));
        group.add(visitor("B"));
        group.set_head(1).unwrap();
        group.add(visitor("C"));
        group.remove(1).unwrap();
        group.set_head(1).unwrap();
        group.add(visitor("D"));
        group.remove(0).unwrap();

        assert_eq!(group.head_count(), 1);
    }

    #[test]
    fn test_update_visitor_in_group() {
        let mut group = VisitorGroup::solo(visitor("A"));
        let patch = VisitorPatch {
            gender: Some(Gender::Female),
            date_of_birth: NaiveDate::from_ymd_opt(1992, 8, 20),
            ..Default::default()
        };
        group
            .update(0, &patch, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
            .unwrap();

        let updated = group.get(0).unwrap();
        assert_eq!(updated.gender, Gender::Female);
        assert_eq!(updated.age, 31);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let group = VisitorGroup::solo(visitor("A"));
        let json = serde_json::to_string(&group).unwrap();
        assert!(json.starts_with('['));

        let deserialized: VisitorGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(group, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_empty_list() {
        let result = serde_json::from_str::<VisitorGroup>("[]");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_normalizes_head_flag() {
        let group = VisitorGroup::new(vec![head_visitor("A"), head_visitor("B")]).unwrap();
        let mut value = serde_json::to_value(&group).unwrap();
        // Corrupt the snapshot so both visitors claim the head flag
        value[1]["is_head"] = serde_json::Value::Bool(true);

        let reloaded: VisitorGroup = serde_json::from_value(value).unwrap();
        assert_eq!(reloaded.head_count(), 1);
        assert_eq!(reloaded.head().name, "A");

        let headless = serde_json::json!([
            serde_json::to_value(visitor("A")).unwrap(),
            serde_json::to_value(visitor("B")).unwrap(),
        ]);
        let reloaded: VisitorGroup = serde_json::from_value(headless).unwrap();
        assert!(reloaded.get(0).unwrap().is_head);
        assert_eq!(reloaded.head_count(), 1);
    }
}
