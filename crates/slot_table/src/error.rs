/// Errors raised while rebuilding the slot array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotTableError {
	/// No shift in `0..MAX_SHIFT` spreads the current keys over distinct slots.
	#[error("cannot find a shift parameter yielding unique indices: keys={keys} slots={slots}")]
	NoUniqueShift { keys: usize, slots: usize },
}
