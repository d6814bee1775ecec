//! Partial-update merging.
//!
//! A PATCH payload uses the same shape as the stored record with every field
//! optional. Merging overwrites a field on the stored value only when the
//! incoming value is present; absent fields are left untouched.
//!
//! Implement [`Merge`] for an input type with [`merge_fields!`], listing the
//! fields that participate:
//!
//! ```ignore
//! campus_core::merge_fields!(EventInput { latitude, longitude, header });
//! ```

/// Overwrite `slot` with `incoming` when `incoming` is present.
pub fn merge_field<T>(slot: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *slot = incoming;
    }
}

/// Apply a partial update onto an existing value of the same shape.
pub trait Merge {
    fn merge(&mut self, patch: Self);
}

/// Derive [`Merge`] for a struct whose listed fields are all `Option<_>`.
///
/// Fields not listed are never touched by a merge (ids, for example).
#[macro_export]
macro_rules! merge_fields {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::merge::Merge for $ty {
            fn merge(&mut self, patch: Self) {
                $( $crate::merge::merge_field(&mut self.$field, patch.$field); )+
            }
        }
    };
}
