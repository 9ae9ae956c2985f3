// src/resolver/batch.rs

//! Scalar-or-array arguments for the broadcasting operations.

use crate::error::{PdgError, Result};

/// Either one value applied to every element, or one value per element
#[derive(Debug, Clone, Copy)]
pub enum Broadcast<'a, T> {
    Scalar(T),
    Array(&'a [T]),
}

impl<'a, T: Copy> Broadcast<'a, T> {
    /// Element count, None for a scalar
    pub fn len(&self) -> Option<usize> {
        match self {
            Broadcast::Scalar(_) => None,
            Broadcast::Array(values) => Some(values.len()),
        }
    }

    fn get(&self, idx: usize) -> T {
        match self {
            Broadcast::Scalar(value) => *value,
            Broadcast::Array(values) => values[idx],
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty),*) => {
        $(impl<'a> From<$ty> for Broadcast<'a, $ty> {
            fn from(value: $ty) -> Self {
                Broadcast::Scalar(value)
            }
        })*
    };
}

scalar_from!(f64, i64);

impl<'a, T> From<&'a [T]> for Broadcast<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Broadcast::Array(values)
    }
}

impl<'a, T> From<&'a Vec<T>> for Broadcast<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Broadcast::Array(values.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Broadcast<'a, T> {
    fn from(values: &'a [T; N]) -> Self {
        Broadcast::Array(values.as_slice())
    }
}

/// Pair two broadcast arguments element by element.
///
/// Scalar x scalar gives one pair, scalar x array repeats the scalar, and
/// array x array zips (lengths must match).
pub fn zip_broadcast<A: Copy, B: Copy>(
    left: Broadcast<'_, A>,
    right: Broadcast<'_, B>,
) -> Result<Vec<(A, B)>> {
    let len = match (left.len(), right.len()) {
        (None, None) => 1,
        (Some(n), None) | (None, Some(n)) => n,
        (Some(l), Some(r)) if l == r => l,
        (Some(l), Some(r)) => return Err(PdgError::ShapeMismatch { left: l, right: r }),
    };
    Ok((0..len).map(|idx| (left.get(idx), right.get(idx))).collect())
}

/// Keep only the pairs whose mask entry is true
pub fn apply_mask<T>(values: Vec<T>, mask: Option<&[bool]>) -> Result<Vec<T>> {
    let Some(mask) = mask else {
        return Ok(values);
    };
    if mask.len() != values.len() {
        return Err(PdgError::ShapeMismatch { left: values.len(), right: mask.len() });
    }
    Ok(values
        .into_iter()
        .zip(mask)
        .filter_map(|(value, keep)| keep.then_some(value))
        .collect())
}
