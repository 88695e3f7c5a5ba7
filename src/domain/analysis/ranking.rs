//! Competition ranking ("1224" ranking) shared by both scorers.

/// Assigns descending competition ranks.
///
/// The rank of a value is 1 + the number of values strictly greater than it,
/// so ties share a rank and the next distinct value skips ahead.
///
/// ```
/// use decision_calculator::domain::analysis::competition_ranks;
///
/// assert_eq!(competition_ranks(&[0.5, 0.9, 0.5, 0.1]), vec![2, 1, 2, 4]);
/// ```
pub fn competition_ranks(values: &[f64]) -> Vec<u32> {
    values
        .iter()
        .map(|v| {
            let above = values.iter().filter(|other| *other > v).count();
            u32::try_from(above).map_or(u32::MAX, |n| n.saturating_add(1))
        })
        .collect()
}

/// Flags every value equal to the maximum.
pub fn best_flags(values: &[f64]) -> Vec<bool> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|v| *v == max).collect()
}
