//! Ordered-collection helpers shared by alternatives and factors.

use crate::domain::foundation::DomainError;

/// Moves the item at `from` so it lands at index `to`, shifting the items
/// in between. Splice semantics: the item is removed first, then inserted
/// at `to` in the shortened list.
///
/// Ordering is presentation state only; ids and the score matrix are
/// untouched by a move.
pub(crate) fn splice_move<T>(
    items: &mut Vec<T>,
    from: usize,
    to: usize,
) -> Result<(), DomainError> {
    if from >= items.len() {
        return Err(DomainError::index_out_of_bounds("from", from, items.len()));
    }
    if to >= items.len() {
        return Err(DomainError::index_out_of_bounds("to", to, items.len()));
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}
