use crate::handlers::{health, metrics, orders, restaurant};
use actix_web::web::{self, ServiceConfig};

pub fn config(cfg: &mut ServiceConfig) {
    cfg.route("/health", web::get().to(health::health))
        .route(
            "/managed-restaurant",
            web::get().to(restaurant::get_managed_restaurant),
        )
        .service(
            web::scope("/orders")
                .route("", web::get().to(orders::list_orders))
                .route("/{id}", web::get().to(orders::get_order))
                .route("/{id}/approve", web::patch().to(orders::approve_order))
                .route("/{id}/dispatch", web::patch().to(orders::dispatch_order))
                .route("/{id}/deliver", web::patch().to(orders::deliver_order))
                .route("/{id}/cancel", web::patch().to(orders::cancel_order)),
        )
        .service(
            web::scope("/metrics")
                .route(
                    "/daily-receipt-in-period",
                    web::get().to(metrics::daily_receipt_in_period),
                )
                .route("/month-receipts", web::get().to(metrics::month_receipts))
                .route(
                    "/month-orders-amount",
                    web::get().to(metrics::month_orders_amount),
                )
                .route(
                    "/day-orders-amount",
                    web::get().to(metrics::day_orders_amount),
                )
                .route(
                    "/month-canceled-orders-amount",
                    web::get().to(metrics::month_canceled_orders_amount),
                ),
        );
}
