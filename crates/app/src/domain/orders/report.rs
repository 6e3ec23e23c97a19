//! Reporting filters and aggregation over the order ledger.

use std::str::FromStr;

use jiff::{Span, Timestamp, Zoned};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::orders::{models::Order, status::OrderStatus};

/// Date-range bucket for the reporting view, anchored at the server's
/// local clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportPeriod {
    /// Local midnight to now.
    #[serde(rename = "hoje")]
    Today,

    #[serde(rename = "15dias")]
    Last15Days,

    #[serde(rename = "mes")]
    CurrentMonth,

    #[default]
    #[serde(rename = "todos")]
    AllTime,
}

impl ReportPeriod {
    /// Wire label, mirrored back in the report response.
    #[must_use]
    pub fn wire_label(self) -> &'static str {
        match self {
            Self::Today => "hoje",
            Self::Last15Days => "15dias",
            Self::CurrentMonth => "mes",
            Self::AllTime => "todos",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown report period: {0}")]
pub struct UnknownPeriod(String);

impl FromStr for ReportPeriod {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hoje" => Ok(Self::Today),
            "15dias" => Ok(Self::Last15Days),
            "mes" => Ok(Self::CurrentMonth),
            "todos" => Ok(Self::AllTime),
            other => Err(UnknownPeriod(other.to_string())),
        }
    }
}

/// Report query: a period bucket crossed with an optional exact status
/// match (`None` means all statuses).
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFilter {
    pub period: ReportPeriod,
    pub status: Option<OrderStatus>,
}

/// Result of a report query. Revenue is the sum of order totals across the
/// filtered set, at currency precision.
#[derive(Debug, Clone)]
pub struct OrdersReport {
    pub orders: Vec<Order>,
    pub count: usize,
    pub revenue: Decimal,
    pub period: ReportPeriod,
}

/// Inclusive lower bound on creation time for a period, `None` for all
/// time.
pub(crate) fn window_start(
    period: ReportPeriod,
    now: &Zoned,
) -> Result<Option<Timestamp>, jiff::Error> {
    let start = match period {
        ReportPeriod::AllTime => return Ok(None),
        ReportPeriod::Today => now.start_of_day()?,
        ReportPeriod::Last15Days => now.checked_sub(Span::new().days(15))?,
        ReportPeriod::CurrentMonth => now
            .date()
            .first_of_month()
            .to_zoned(now.time_zone().clone())?,
    };

    Ok(Some(start.timestamp()))
}

/// Aggregate the filtered set into a report.
pub(crate) fn aggregate(
    orders: Vec<Order>,
    status: Option<OrderStatus>,
    period: ReportPeriod,
) -> OrdersReport {
    let orders: Vec<Order> = orders
        .into_iter()
        .filter(|order| status.is_none_or(|wanted| order.status == wanted))
        .collect();

    let revenue: Decimal = orders.iter().map(|order| order.total).sum();

    OrdersReport {
        count: orders.len(),
        revenue: revenue.round_dp(2),
        orders,
        period,
    }
}
