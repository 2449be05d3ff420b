//! Quarter boundaries: first and last action number per period.

use std::collections::BTreeMap;

use oncourt_model::{Action, QuarterBoundary};

/// Single scan over the action log recording, per period, the first and last
/// action sequence number.
pub fn scan(actions: &[Action]) -> BTreeMap<u32, QuarterBoundary> {
    let mut boundaries: BTreeMap<u32, QuarterBoundary> = BTreeMap::new();
    for action in actions {
        boundaries
            .entry(action.period)
            .and_modify(|boundary| {
                boundary.first_action_number =
                    boundary.first_action_number.min(action.action_number);
                boundary.last_action_number =
                    boundary.last_action_number.max(action.action_number);
            })
            .or_insert(QuarterBoundary {
                period: action.period,
                first_action_number: action.action_number,
                last_action_number: action.action_number,
            });
    }
    boundaries
}
