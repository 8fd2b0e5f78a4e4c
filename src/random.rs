//! Sample input for trying trees out.

use std::collections::BTreeSet;

use rand::Rng;

use crate::Error;

/// Draws `count` distinct integers from `min..=max` using the thread local RNG and returns
/// them in ascending order.
///
/// # Errors
///
/// See [`random_values_with`].
///
/// # Examples
///
/// ```
/// use balanced_bst::{random, Tree};
///
/// let values = random::random_values(10, 0, 99).unwrap();
/// assert_eq!(values.len(), 10);
///
/// let tree = Tree::from_sorted(values).unwrap();
/// assert!(tree.is_balanced());
/// ```
pub fn random_values(count: usize, min: i64, max: i64) -> Result<Vec<i64>, Error> {
    random_values_with(&mut rand::rng(), count, min, max)
}

/// Draws `count` distinct integers from `min..=max` using `rng` and returns them in
/// ascending order. Pass a seeded RNG for repeatable output.
///
/// # Errors
///
/// [`Error::InvalidRange`] if `min > max` and [`Error::NotEnoughValues`] if the range holds
/// fewer than `count` integers.
pub fn random_values_with<R>(
    rng: &mut R,
    count: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>, Error>
where
    R: Rng + ?Sized,
{
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }
    let available = (i128::from(max) - i128::from(min) + 1).unsigned_abs();
    if count as u128 > available {
        return Err(Error::NotEnoughValues {
            requested: count,
            available,
        });
    }

    let mut values = BTreeSet::new();
    while values.len() < count {
        values.insert(rng.random_range(min..=max));
    }
    log::trace!("drew {} values from {}..={}", count, min, max);
    Ok(values.into_iter().collect())
}
