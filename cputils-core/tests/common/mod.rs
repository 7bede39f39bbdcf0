use std::collections::HashMap;

/// Component sizes with the representatives discarded, in ascending order.
#[must_use]
pub fn sorted_sizes<T>(sizes: HashMap<T, usize>) -> Vec<usize> {
    let mut values: Vec<usize> = sizes.into_values().collect();
    values.sort_unstable();
    values
}
