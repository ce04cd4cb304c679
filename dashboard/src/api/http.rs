use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::api::{MetricsApi, OrderApi, RestaurantApi};
use crate::config::ClientConfig;
use crate::engine::Transition;
use crate::entities::metrics::{
    DailyReceipt, DateRange, DayOrdersAmount, MonthCanceledOrdersAmount, MonthOrdersAmount,
    MonthReceipts,
};
use crate::entities::order::{OrderListKey, OrdersPage};
use crate::entities::restaurant::ManagedRestaurant;
use crate::errors::ApiError;

#[derive(Debug, Serialize)]
struct PeriodQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<NaiveDate>,
}

/// REST client for the restaurant API.
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: Url,
}

impl HttpApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{base_url} cannot be a base")));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(cfg: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(&cfg.api_base_url, cfg.request_timeout)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "api request");
        Ok(self.client.request(method, url))
    }

    async fn get_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let resp = check_status(req.send().await?).await?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_path<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let req = self.request(Method::GET, segments)?;
        self.get_json(req).await
    }
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl OrderApi for HttpApiClient {
    async fn send_transition(
        &self,
        order_id: &str,
        transition: Transition,
    ) -> Result<(), ApiError> {
        let req = self.request(
            Method::PATCH,
            &["orders", order_id, transition.path_segment()],
        )?;
        check_status(req.send().await?).await?;
        Ok(())
    }

    async fn get_orders(&self, key: &OrderListKey) -> Result<OrdersPage, ApiError> {
        let req = self.request(Method::GET, &["orders"])?.query(key);
        self.get_json(req).await
    }
}

#[async_trait]
impl MetricsApi for HttpApiClient {
    async fn daily_receipt_in_period(
        &self,
        range: DateRange,
    ) -> Result<Vec<DailyReceipt>, ApiError> {
        let q = PeriodQuery {
            from: range.from(),
            to: range.to(),
        };
        let req = self
            .request(Method::GET, &["metrics", "daily-receipt-in-period"])?
            .query(&q);
        self.get_json(req).await
    }

    async fn month_receipts(&self) -> Result<MonthReceipts, ApiError> {
        self.get_path(&["metrics", "month-receipts"]).await
    }

    async fn month_orders_amount(&self) -> Result<MonthOrdersAmount, ApiError> {
        self.get_path(&["metrics", "month-orders-amount"]).await
    }

    async fn day_orders_amount(&self) -> Result<DayOrdersAmount, ApiError> {
        self.get_path(&["metrics", "day-orders-amount"]).await
    }

    async fn month_canceled_orders_amount(&self) -> Result<MonthCanceledOrdersAmount, ApiError> {
        self.get_path(&["metrics", "month-canceled-orders-amount"])
            .await
    }
}

#[async_trait]
impl RestaurantApi for HttpApiClient {
    async fn managed_restaurant(&self) -> Result<ManagedRestaurant, ApiError> {
        self.get_path(&["managed-restaurant"]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::order::OrderStatus;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> HttpApiClient {
        HttpApiClient::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn transition_patches_the_command_path() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PATCH", "/orders/A1/approve")
            .with_status(204)
            .create_async()
            .await;

        client_for(&server)
            .send_transition("A1", Transition::Approve)
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn transition_error_status_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PATCH", "/orders/A1/dispatch")
            .with_status(400)
            .with_body(r#"{"error":"bad request"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .send_transition("A1", Transition::Dispatch)
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("bad request"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_orders_sends_filters_as_query() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/orders")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("pageIndex".into(), "1".into()),
                Matcher::UrlEncoded("status".into(), "pending".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"orders":[{"orderId":"A1","createdAt":"2024-05-01T12:00:00Z","status":"pending","customerName":"Ana","total":2500}],
                   "meta":{"pageIndex":1,"perPage":10,"totalCount":11}}"#,
            )
            .create_async()
            .await;

        let key = OrderListKey {
            page_index: 1,
            status: Some(OrderStatus::Pending),
            ..Default::default()
        };
        let page = client_for(&server).get_orders(&key).await.unwrap();
        assert_eq!(page.orders.len(), 1);
        assert_eq!(page.orders[0].order_id, "A1");
        assert_eq!(page.meta.total_count, 11);
    }

    #[tokio::test]
    async fn daily_receipt_sends_iso_dates() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/metrics/daily-receipt-in-period")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("from".into(), "2024-05-01".into()),
                Matcher::UrlEncoded("to".into(), "2024-05-02".into()),
            ]))
            .with_body(r#"[{"date":"01/05","receipt":20000},{"date":"02/05","receipt":5000}]"#)
            .create_async()
            .await;

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 5, 1),
            NaiveDate::from_ymd_opt(2024, 5, 2),
        )
        .unwrap();
        let series = client_for(&server)
            .daily_receipt_in_period(range)
            .await
            .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].receipt, 5000);
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/managed-restaurant")
            .with_body("not json")
            .create_async()
            .await;

        let err = client_for(&server).managed_restaurant().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn rejects_non_base_url() {
        assert!(matches!(
            HttpApiClient::new("mailto:someone@example.com", Duration::from_secs(1)),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn endpoint_encodes_order_id_and_keeps_base_path() {
        let c = HttpApiClient::new("http://localhost:3333/api/", Duration::from_secs(1)).unwrap();
        let url = c.endpoint(&["orders", "a b", "cancel"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/api/orders/a%20b/cancel");
    }
}
