use bitcoin::Amount;

/// Whether the remainder of a selection deserves a change output.
///
/// Any positive remainder does, however small; there is no dust floor.
pub fn decide_change(change_value: Amount) -> Option<Amount> {
    (change_value > Amount::ZERO).then_some(change_value)
}
