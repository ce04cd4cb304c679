use serde::{Deserialize, Serialize};

use crate::entities::order::OrderStatus;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Approve,
    Dispatch,
    Deliver,
    Cancel,
}

pub struct TransitionRule {
    pub transition: Transition,
    pub valid_from: &'static [OrderStatus],
    pub target: OrderStatus,
}

pub const TRANSITIONS: [TransitionRule; 4] = [
    TransitionRule {
        transition: Transition::Approve,
        valid_from: &[OrderStatus::Pending],
        target: OrderStatus::Processing,
    },
    TransitionRule {
        transition: Transition::Dispatch,
        valid_from: &[OrderStatus::Processing],
        target: OrderStatus::Delivering,
    },
    TransitionRule {
        transition: Transition::Deliver,
        valid_from: &[OrderStatus::Delivering],
        target: OrderStatus::Delivered,
    },
    TransitionRule {
        transition: Transition::Cancel,
        valid_from: &[OrderStatus::Pending, OrderStatus::Processing],
        target: OrderStatus::Canceled,
    },
];

impl Transition {
    pub const ALL: [Transition; 4] = [
        Transition::Approve,
        Transition::Dispatch,
        Transition::Deliver,
        Transition::Cancel,
    ];

    pub fn rule(self) -> &'static TransitionRule {
        let idx = match self {
            Self::Approve => 0,
            Self::Dispatch => 1,
            Self::Deliver => 2,
            Self::Cancel => 3,
        };
        &TRANSITIONS[idx]
    }

    pub fn target(self) -> OrderStatus {
        self.rule().target
    }

    pub fn allowed_from(self, status: OrderStatus) -> bool {
        self.rule().valid_from.contains(&status)
    }

    /// Last path segment of `PATCH /orders/{id}/...`.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Dispatch => "dispatch",
            Self::Deliver => "deliver",
            Self::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

pub fn available_transitions(status: OrderStatus) -> impl Iterator<Item = Transition> {
    Transition::ALL
        .into_iter()
        .filter(move |t| t.allowed_from(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_line_up_with_commands() {
        for t in Transition::ALL {
            assert_eq!(t.rule().transition, t);
        }
    }

    #[test]
    fn forward_path_reaches_delivered() {
        let mut s = OrderStatus::Pending;
        for t in [Transition::Approve, Transition::Dispatch, Transition::Deliver] {
            assert!(t.allowed_from(s), "{t} should be allowed from {s}");
            s = t.target();
        }
        assert_eq!(s, OrderStatus::Delivered);
    }

    #[test]
    fn cancel_only_from_early_states() {
        assert!(Transition::Cancel.allowed_from(OrderStatus::Pending));
        assert!(Transition::Cancel.allowed_from(OrderStatus::Processing));
        assert!(!Transition::Cancel.allowed_from(OrderStatus::Delivering));
        assert!(!Transition::Cancel.allowed_from(OrderStatus::Delivered));
        assert!(!Transition::Cancel.allowed_from(OrderStatus::Canceled));
    }

    #[test]
    fn terminal_states_have_no_commands() {
        assert_eq!(available_transitions(OrderStatus::Delivered).count(), 0);
        assert_eq!(available_transitions(OrderStatus::Canceled).count(), 0);
        let from_pending: Vec<_> = available_transitions(OrderStatus::Pending).collect();
        assert_eq!(from_pending, vec![Transition::Approve, Transition::Cancel]);
    }
}
