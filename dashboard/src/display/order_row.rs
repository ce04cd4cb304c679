use crate::display::currency::format_brl;
use crate::engine::Transition;
use crate::entities::order::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub transition: Transition,
    pub label: &'static str,
    pub enabled: bool,
}

/// One line of the orders table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRowView {
    pub order_id: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub customer_name: String,
    pub total: String,
    /// The forward step for the current status, if there is one.
    pub advance: Option<ActionView>,
    pub cancel: ActionView,
}

fn advance_for(status: OrderStatus) -> Option<(Transition, &'static str)> {
    match status {
        OrderStatus::Pending => Some((Transition::Approve, "Aprovar")),
        OrderStatus::Processing => Some((Transition::Dispatch, "Saiu para entrega")),
        OrderStatus::Delivering => Some((Transition::Deliver, "Entregue")),
        OrderStatus::Delivered | OrderStatus::Canceled => None,
    }
}

impl OrderRowView {
    /// `pending` is the command in flight for this order, if any; every
    /// control is disabled while one is.
    pub fn build(order: &Order, pending: Option<Transition>) -> Self {
        let idle = pending.is_none();
        let advance = advance_for(order.status).map(|(transition, label)| ActionView {
            transition,
            label,
            enabled: idle,
        });
        Self {
            order_id: order.order_id.clone(),
            status: order.status,
            status_label: order.status.label(),
            customer_name: order.customer_name.clone(),
            total: format_brl(order.total),
            advance,
            cancel: ActionView {
                transition: Transition::Cancel,
                label: "Cancelar",
                enabled: idle && Transition::Cancel.allowed_from(order.status),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn order(status: OrderStatus) -> Order {
        Order {
            order_id: "A1".into(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            status,
            customer_name: "Ana".into(),
            total: 123456,
        }
    }

    #[test]
    fn pending_row_offers_approve_and_cancel() {
        let row = OrderRowView::build(&order(OrderStatus::Pending), None);
        assert_eq!(row.status_label, "Pendente");
        assert_eq!(row.total, "R$ 1.234,56");
        let advance = row.advance.unwrap();
        assert_eq!(advance.transition, Transition::Approve);
        assert_eq!(advance.label, "Aprovar");
        assert!(advance.enabled);
        assert!(row.cancel.enabled);
    }

    #[test]
    fn advance_action_follows_status() {
        let dispatch = OrderRowView::build(&order(OrderStatus::Processing), None);
        assert_eq!(dispatch.advance.unwrap().transition, Transition::Dispatch);
        let deliver = OrderRowView::build(&order(OrderStatus::Delivering), None);
        assert_eq!(deliver.advance.unwrap().label, "Entregue");
        assert!(!deliver.cancel.enabled);
        assert!(OrderRowView::build(&order(OrderStatus::Delivered), None)
            .advance
            .is_none());
    }

    #[test]
    fn controls_disabled_while_a_transition_is_pending() {
        let row = OrderRowView::build(&order(OrderStatus::Processing), Some(Transition::Dispatch));
        assert!(!row.advance.unwrap().enabled);
        assert!(!row.cancel.enabled);
    }
}
