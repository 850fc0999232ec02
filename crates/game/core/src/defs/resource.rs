use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Identifier of the resource produced by engines to move the train.
pub const PROPULSION_POWER: &str = "PropulsionPower";

/// Stable identifier of a tracked resource.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn propulsion_power() -> Self {
        Self::new(PROPULSION_POWER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ResourceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable resource definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceDef {
    pub id: ResourceId,
    pub label: String,
    /// Short unit shown next to amounts (e.g. "PP").
    #[cfg_attr(feature = "serde", serde(default))]
    pub abbreviation: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl ResourceDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: ResourceId::new(id),
            label: label.into(),
            abbreviation: String::new(),
            description: String::new(),
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = abbreviation.into();
        self
    }
}

/// Signed per-resource amounts; a missing key reads as zero.
///
/// Used both for operating-mode outputs and for aggregated turn projections.
/// Keys are ordered so iteration and equality are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResourceChanges(BTreeMap<ResourceId, i32>);

impl ResourceChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount recorded for `resource`, or zero.
    pub fn get(&self, resource: &str) -> i32 {
        self.0.get(resource).copied().unwrap_or(0)
    }

    /// Adds `amount` to the entry for `resource`, creating it if missing.
    pub fn add(&mut self, resource: ResourceId, amount: i32) {
        *self.0.entry(resource).or_insert(0) += amount;
    }

    /// Adds every entry of `other` into `self`.
    pub fn merge(&mut self, other: &ResourceChanges) {
        for (resource, amount) in other.iter() {
            self.add(resource.clone(), amount);
        }
    }

    pub fn with(mut self, resource: impl Into<String>, amount: i32) -> Self {
        self.add(ResourceId::new(resource), amount);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResourceId, i32)> + '_ {
        self.0.iter().map(|(id, amount)| (id, *amount))
    }

    pub fn resources(&self) -> impl Iterator<Item = &ResourceId> + '_ {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ResourceId, i32)> for ResourceChanges {
    fn from_iter<T: IntoIterator<Item = (ResourceId, i32)>>(iter: T) -> Self {
        let mut changes = ResourceChanges::new();
        for (resource, amount) in iter {
            changes.add(resource, amount);
        }
        changes
    }
}

impl<'a> IntoIterator for &'a ResourceChanges {
    type Item = (&'a ResourceId, &'a i32);
    type IntoIter = btree_map::Iter<'a, ResourceId, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
