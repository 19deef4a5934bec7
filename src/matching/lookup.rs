use crate::catalog::Institution;
use crate::types::Category;

/// Institutions whose `category` cutoff lies in `min..=max`, catalog order.
pub fn institutions_by_cutoff_range(
    min: u32,
    max: u32,
    category: Category,
    institutions: &[Institution],
) -> Vec<&Institution> {
    institutions
        .iter()
        .filter(|inst| {
            inst.cutoff_for(category)
                .is_some_and(|cutoff| (min..=max).contains(&cutoff))
        })
        .collect()
}

/// The `limit` most selective institutions in `state` for `category`.
///
/// Institutions without a cutoff for the category sort after all others.
pub fn top_institutions_by_state<'a>(
    state: &str,
    category: Category,
    limit: usize,
    institutions: &'a [Institution],
) -> Vec<&'a Institution> {
    let mut in_state: Vec<&Institution> = institutions
        .iter()
        .filter(|inst| inst.location == state)
        .collect();

    in_state.sort_by(|a, b| {
        let a_key = a.cutoff_for(category).unwrap_or(u32::MAX);
        let b_key = b.cutoff_for(category).unwrap_or(u32::MAX);
        a_key.cmp(&b_key).then_with(|| a.name.cmp(&b.name))
    });

    in_state.truncate(limit);
    in_state
}
