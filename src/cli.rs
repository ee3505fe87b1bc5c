use clap::{Parser, Subcommand};
use serde::Serialize;
use shopcart_orders::{
    Order, OrderId, OrderStatus, StatusCatalog, filter_by_label, format_price, notification_list,
    notification_samples,
};
use std::io::Write;
use thiserror::Error;
use tracing::info;

use crate::Env;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(
        "Invalid order status: {value}. Expected one of: pending, processing, shipping, completed, cancelled"
    )]
    InvalidStatus { value: String },
    #[error("Unknown status label: {label}. Run `labels` to list the available tabs")]
    UnknownLabel { label: String },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the full set of fake orders
    Orders {
        /// Only show orders with this lifecycle code (e.g. pending, shipping)
        #[arg(short = 's', long = "status")]
        status: Option<String>,
        /// Only show orders listed under this display tab (e.g. "in transit")
        #[arg(short = 'l', long = "label")]
        label: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Look up one order by id in a freshly generated set
    Order {
        /// Order id (1-40)
        order_id: u32,
        #[arg(long)]
        json: bool,
    },
    /// Print the notification screen entries
    Notifications {
        #[arg(long)]
        json: bool,
    },
    /// Print the notification dialog messages
    Samples,
    /// Print the status tabs and the lifecycle codes listed under each
    Labels,
}

#[derive(Debug, Parser)]
#[command(name = "shopcart-fixtures")]
#[command(about = "Fake orders and notifications for the shopping cart app")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub env: Env,
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse CLI arguments and split them into the environment and the command
    pub fn parse_and_convert() -> anyhow::Result<(Env, Commands)> {
        let cli = Self::parse();
        Ok((cli.env, cli.command))
    }
}

fn validate_status(value: &str) -> Result<OrderStatus, CliError> {
    value
        .trim()
        .to_lowercase()
        .parse::<OrderStatus>()
        .map_err(|_| CliError::InvalidStatus {
            value: value.to_string(),
        })
}

fn validate_label(label: &str) -> Result<&'static str, CliError> {
    let wanted = label.trim().to_lowercase();

    StatusCatalog::ALL
        .into_iter()
        .find(|candidate| *candidate == wanted)
        .ok_or_else(|| CliError::UnknownLabel {
            label: label.to_string(),
        })
}

pub fn run_command(env: &Env, command: Commands) -> anyhow::Result<()> {
    run_command_with_writers(env, command, &mut std::io::stdout())
}

fn run_command_with_writers<W: Write>(
    env: &Env,
    command: Commands,
    stdout: &mut W,
) -> anyhow::Result<()> {
    match command {
        Commands::Orders {
            status,
            label,
            json,
        } => {
            let status = status.as_deref().map(validate_status).transpose()?;
            let label = label.as_deref().map(validate_label).transpose()?;

            let orders = env.build_generator()?.generate_orders();
            let mut selected: Vec<&Order> = match label {
                Some(label) => filter_by_label(&orders, label),
                None => orders.iter().collect(),
            };
            if let Some(status) = status {
                selected.retain(|order| order.status == status);
            }

            info!(
                "Listing {} of {} generated orders: status={status:?}, label={label:?}",
                selected.len(),
                orders.len()
            );

            if json {
                write_json(stdout, &selected)?;
            } else {
                for order in selected {
                    write_order_row(stdout, order)?;
                }
            }
        }
        Commands::Order { order_id, json } => {
            let order_id = OrderId(order_id);
            info!("Looking up order: order_id={order_id}");

            match env.build_generator()?.find_order_by_id(order_id) {
                Some(order) if json => write_json(stdout, &order)?,
                Some(order) => write_order_details(stdout, &order)?,
                None => writeln!(stdout, "Order #{order_id} not found")?,
            }
        }
        Commands::Notifications { json } => {
            let notifications = notification_list();
            if json {
                write_json(stdout, &notifications)?;
            } else {
                for notification in notifications {
                    writeln!(
                        stdout,
                        "[{}] {} - {} ({})",
                        notification.kind,
                        notification.title,
                        notification.description,
                        notification.time
                    )?;
                }
            }
        }
        Commands::Samples => {
            for sample in notification_samples() {
                writeln!(stdout, "{sample}")?;
            }
        }
        Commands::Labels => {
            for label in StatusCatalog::ALL {
                let codes: Vec<&str> = OrderStatus::ALL
                    .into_iter()
                    .filter(|status| StatusCatalog::label_for(*status) == label)
                    .map(OrderStatus::as_str)
                    .collect();
                writeln!(stdout, "{label}: {}", codes.join(", "))?;
            }
        }
    }

    info!("CLI operation completed successfully");
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(stdout: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn write_order_row<W: Write>(stdout: &mut W, order: &Order) -> std::io::Result<()> {
    let id = format!("#{}", order.order_id);
    writeln!(
        stdout,
        "{id:<5} {}  {:<20} {:<22} {:>12}",
        order.order_date,
        order.shop_name,
        order.display_label(),
        format_price(order.total_amount)
    )
}

fn write_order_details<W: Write>(stdout: &mut W, order: &Order) -> std::io::Result<()> {
    writeln!(stdout, "Order #{} from {}", order.order_id, order.shop_name)?;
    writeln!(stdout, "   Placed: {}", order.order_date)?;
    writeln!(
        stdout,
        "   Status: {} ({})",
        order.display_label(),
        order.status
    )?;
    writeln!(stdout, "   Items:")?;
    for item in &order.items {
        writeln!(
            stdout,
            "      {} [{}] {} x {} = {}",
            item.product_name,
            item.variant,
            format_price(item.price),
            item.quantity,
            format_price(item.line_total())
        )?;
    }
    writeln!(stdout, "   Total: {}", format_price(order.total_amount))?;
    writeln!(stdout, "   Shipping:")?;
    for entry in &order.shipping_status_history {
        if entry.note.is_empty() {
            writeln!(stdout, "      {}  {}", entry.time, entry.status)?;
        } else {
            writeln!(stdout, "      {}  {} ({})", entry.time, entry.status, entry.note)?;
        }
    }
    Ok(())
}
