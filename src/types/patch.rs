//! Tri-state field for partial updates.

use serde::{Deserialize, Deserializer};

/// Update instruction for a nullable attribute.
///
/// Deserializes from an optional JSON field: an absent field is
/// [`Patch::Unchanged`] (pair it with `#[serde(default)]`), an explicit
/// `null` is [`Patch::Clear`] and a value is [`Patch::Set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Unchanged,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    /// Whether the patch leaves the stored value alone
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }

    /// Resolve the patch against the current value.
    ///
    /// Returns `None` when nothing changes, otherwise the new value.
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            Patch::Unchanged => None,
            Patch::Clear => Some(None),
            Patch::Set(value) => Some(Some(value)),
        }
    }

    /// Apply the patch in place
    pub fn apply_to(self, target: &mut Option<T>) {
        if let Some(value) = self.into_change() {
            *target = value;
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
