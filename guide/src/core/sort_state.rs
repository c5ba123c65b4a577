//! Column-header sort selection for the comparison table.

use serde::{Deserialize, Serialize};

use crate::core::types::{SortDirection, SortField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Rating,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// State after clicking the `field` header: the active column flips its
    /// direction, any other column becomes active in descending order.
    pub fn select(self, field: SortField) -> Self {
        if field == self.field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Descending)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_rating_descending() {
        let state = SortState::default();
        assert_eq!(state.field, SortField::Rating);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn selecting_active_field_flips_direction() {
        let state = SortState::default().select(SortField::Rating);
        assert_eq!(state.direction, SortDirection::Ascending);
        let state = state.select(SortField::Rating);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn selecting_new_field_starts_descending() {
        let state = SortState::new(SortField::Rating, SortDirection::Ascending)
            .select(SortField::MinDeposit);
        assert_eq!(
            state,
            SortState::new(SortField::MinDeposit, SortDirection::Descending)
        );
    }
}
