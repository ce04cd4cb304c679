use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use tracing::error;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use restaurant_dashboard::api::http::HttpApiClient;
use restaurant_dashboard::api::RestaurantApi;
use restaurant_dashboard::config::ClientConfig;
use restaurant_dashboard::display::order_row::OrderRowView;
use restaurant_dashboard::display::revenue_chart::{ChartState, RevenueChart};
use restaurant_dashboard::display::summary::load_summary;
use restaurant_dashboard::engine::{OrderStatusEngine, Transition};
use restaurant_dashboard::entities::metrics::DateRange;
use restaurant_dashboard::entities::order::{OrderListKey, OrderStatus, OrdersPage};
use restaurant_dashboard::repositories::in_memory::InMemoryOrderListCache;
use restaurant_dashboard::repositories::OrderListCache;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Restaurant dashboard: metrics and order status", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Restaurant profile and the month/day summary cards
    Summary,
    /// List one page of orders
    Orders {
        #[arg(short, long, default_value_t = 0)]
        page: u32,
        #[arg(short, long, value_enum, ignore_case = true)]
        status: Option<StatusArg>,
        #[arg(short, long)]
        customer: Option<String>,
        #[arg(long)]
        order_id: Option<String>,
    },
    /// Daily revenue for a period (defaults to the last 7 days)
    Revenue {
        /// YYYY-MM-DD
        #[arg(short, long)]
        from: Option<NaiveDate>,
        /// YYYY-MM-DD
        #[arg(short, long)]
        to: Option<NaiveDate>,
    },
    /// pending -> processing
    Approve { order_id: String },
    /// processing -> delivering
    Dispatch { order_id: String },
    /// delivering -> delivered
    Deliver { order_id: String },
    /// pending|processing -> canceled
    Cancel { order_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StatusArg {
    Pending,
    Canceled,
    Processing,
    Delivering,
    Delivered,
}

impl From<StatusArg> for OrderStatus {
    fn from(s: StatusArg) -> Self {
        match s {
            StatusArg::Pending => OrderStatus::Pending,
            StatusArg::Canceled => OrderStatus::Canceled,
            StatusArg::Processing => OrderStatus::Processing,
            StatusArg::Delivering => OrderStatus::Delivering,
            StatusArg::Delivered => OrderStatus::Delivered,
        }
    }
}

type Engine = OrderStatusEngine<HttpApiClient, InMemoryOrderListCache>;

#[tokio::main]
async fn main() {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = ClientConfig::from_env()?;
    let client = HttpApiClient::from_config(&cfg)?;

    match cli.command {
        Commands::Summary => {
            let restaurant = client.managed_restaurant().await?;
            println!("{}", restaurant.name);
            if let Some(d) = &restaurant.description {
                println!("{d}");
            }
            println!();
            for card in load_summary(&client).await? {
                println!("{:<22} {:>14}  {}", card.title, card.value, card.diff);
            }
        }
        Commands::Orders {
            page,
            status,
            customer,
            order_id,
        } => {
            let key = OrderListKey {
                page_index: page,
                order_id,
                customer_name: customer,
                status: status.map(OrderStatus::from),
            };
            let engine = Engine::new(client, InMemoryOrderListCache::default());
            let page = engine.load_orders(key).await?;
            print_page(&engine, &page);
        }
        Commands::Revenue { from, to } => {
            let mut chart = match (from, to) {
                (None, None) => RevenueChart::new(Local::now().date_naive()),
                _ => RevenueChart::with_range(DateRange::new(from, to)?),
            };
            chart.refresh(&client).await?;
            if let ChartState::Ready(points) = chart.state() {
                for p in points {
                    println!("{:>8}  {:>14}", p.date, p.label());
                }
            }
        }
        Commands::Approve { order_id } => transition(client, &order_id, Transition::Approve).await?,
        Commands::Dispatch { order_id } => {
            transition(client, &order_id, Transition::Dispatch).await?
        }
        Commands::Deliver { order_id } => transition(client, &order_id, Transition::Deliver).await?,
        Commands::Cancel { order_id } => transition(client, &order_id, Transition::Cancel).await?,
    }
    Ok(())
}

async fn transition(
    client: HttpApiClient,
    order_id: &str,
    transition: Transition,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new(client, InMemoryOrderListCache::default());
    let key = OrderListKey {
        order_id: Some(order_id.to_string()),
        ..Default::default()
    };
    engine.load_orders(key.clone()).await?;
    let status = engine.apply_transition(order_id, transition).await?;
    println!("{order_id}: {}", status.label());
    if let Some(page) = engine.cache().get(&key).await {
        print_page(&engine, &page);
    }
    Ok(())
}

fn print_page(engine: &Engine, page: &OrdersPage) {
    for order in &page.orders {
        let row = OrderRowView::build(order, engine.pending_transition(&order.order_id));
        let next = row.advance.map(|a| a.label).unwrap_or("-");
        println!(
            "{:<26} {:<12} {:<24} {:>14}  {}",
            row.order_id, row.status_label, row.customer_name, row.total, next
        );
    }
    println!(
        "page {} ({} per page, {} total)",
        page.meta.page_index, page.meta.per_page, page.meta.total_count
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(args: &[&str]) -> Result<Option<StatusArg>, clap::Error> {
        match Cli::try_parse_from(args)?.command {
            Commands::Orders { status, .. } => Ok(status),
            _ => panic!("expected the orders subcommand"),
        }
    }

    #[test]
    fn orders_status_filter_takes_wire_names() {
        assert_eq!(
            status_of(&["dashboard", "orders", "--status", "delivering"]).unwrap(),
            Some(StatusArg::Delivering)
        );
        assert_eq!(
            status_of(&["dashboard", "orders", "-s", "PENDING"]).unwrap(),
            Some(StatusArg::Pending)
        );
        assert_eq!(status_of(&["dashboard", "orders"]).unwrap(), None);
        assert_eq!(OrderStatus::from(StatusArg::Canceled), OrderStatus::Canceled);
    }

    #[test]
    fn unknown_status_is_a_usage_error() {
        let err = status_of(&["dashboard", "orders", "--status", "shipped"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
