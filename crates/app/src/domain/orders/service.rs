//! Orders service: submission, lifecycle transitions, completion and
//! reporting.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{Timestamp, Zoned};
use mockall::automock;
use rust_decimal::Decimal;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{
    carts::store::CartStore,
    notifications::{messages, notifier::Notifier},
    orders::{
        errors::OrdersServiceError,
        ledger::OrderLedger,
        models::{Customer, NewOrder, Order, PaymentMethod, ServiceMode},
        report::{self, OrdersReport, ReportFilter},
        status::{self, OrderStatus},
    },
};

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validate and persist a new order with status [`OrderStatus::Placed`],
    /// then clear the submitting session's cart as a best-effort async
    /// cleanup (submission succeeds even when the clear fails).
    async fn submit_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Active (non-completed) orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Move an order to a new non-terminal status. Reaching
    /// [`OrderStatus::Ready`] dispatches a customer notification
    /// asynchronously; its failure never rolls back the update.
    async fn update_status(
        &self,
        uuid: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;

    /// Archive an order under the terminal status; it leaves the active
    /// ledger view but stays persisted for reporting.
    async fn complete_order(&self, uuid: Uuid) -> Result<(), OrdersServiceError>;

    /// Reporting view over orders of every status, completed included.
    async fn report(&self, filter: ReportFilter) -> Result<OrdersReport, OrdersServiceError>;
}

/// Production orders service over pluggable ledger, cart store and
/// notification backends.
#[derive(Clone)]
pub struct LedgerOrdersService {
    ledger: Arc<dyn OrderLedger>,
    carts: Arc<dyn CartStore>,
    notifier: Arc<dyn Notifier>,
}

impl LedgerOrdersService {
    #[must_use]
    pub fn new(
        ledger: Arc<dyn OrderLedger>,
        carts: Arc<dyn CartStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            ledger,
            carts,
            notifier,
        }
    }

    fn spawn_cart_clear(&self, session_id: String) {
        let carts = Arc::clone(&self.carts);

        tokio::spawn(async move {
            if let Err(source) = carts.clear(&session_id).await {
                error!(%session_id, "failed to clear cart after submission: {source}");
            }
        });
    }

    fn spawn_ready_notification(&self, order: &Order) {
        let notifier = Arc::clone(&self.notifier);
        let contact = order.customer.contact.clone();
        let message = messages::ready_message(order.customer.service_mode);
        let order_uuid = order.uuid;

        tokio::spawn(async move {
            match notifier.send(&contact, message).await {
                Ok(()) => info!(%order_uuid, "notified customer of ready order"),
                Err(source) => {
                    error!(%order_uuid, "failed to notify customer: {source}");
                }
            }
        });
    }
}

#[async_trait]
impl OrdersService for LedgerOrdersService {
    async fn submit_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        validate_submission(&order)?;

        let NewOrder {
            customer,
            lines,
            total,
            created_at,
            session_id,
        } = order;

        let order = Order {
            uuid: Uuid::now_v7(),
            customer: normalize_customer(customer),
            lines,
            total: total.round_dp(2),
            status: OrderStatus::Placed,
            created_at: created_at.unwrap_or_else(Timestamp::now),
        };

        self.ledger.insert(order.clone()).await?;

        info!(order_uuid = %order.uuid, total = %order.total, "order placed");

        if let Some(session_id) = session_id {
            self.spawn_cart_clear(session_id);
        }

        Ok(order)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let orders = self.ledger.list_active().await?;

        Ok(orders)
    }

    async fn update_status(
        &self,
        uuid: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let Some(current) = self.ledger.get(uuid).await? else {
            return Err(OrdersServiceError::NotFound);
        };

        // Completed orders have left the active ledger view.
        if current.status.is_terminal() {
            return Err(OrdersServiceError::NotFound);
        }

        if !status::transition_allowed(current.status, status) {
            return Err(OrdersServiceError::Validation(format!(
                "transição de status inválida: {} para {}",
                current.status, status
            )));
        }

        let Some(updated) = self.ledger.set_status(uuid, status).await? else {
            return Err(OrdersServiceError::NotFound);
        };

        info!(order_uuid = %uuid, status = %status, "order status updated");

        if updated.status == OrderStatus::Ready {
            self.spawn_ready_notification(&updated);
        }

        Ok(updated)
    }

    async fn complete_order(&self, uuid: Uuid) -> Result<(), OrdersServiceError> {
        let completed = self
            .ledger
            .set_status(uuid, OrderStatus::Completed)
            .await?;

        if completed.is_none() {
            return Err(OrdersServiceError::NotFound);
        }

        info!(order_uuid = %uuid, "order completed");

        Ok(())
    }

    async fn report(&self, filter: ReportFilter) -> Result<OrdersReport, OrdersServiceError> {
        let since = report::window_start(filter.period, &Zoned::now())?;
        let orders = self.ledger.list_since(since).await?;

        Ok(report::aggregate(orders, filter.status, filter.period))
    }
}

/// Drop customer fields that do not apply to the chosen service mode or
/// payment method, so a pickup order never stores an address and a card or
/// pix order never stores a change amount.
fn normalize_customer(mut customer: Customer) -> Customer {
    if customer.service_mode == ServiceMode::Pickup {
        customer.address = None;
    }

    if customer.payment != PaymentMethod::Cash {
        customer.change_for = None;
    }

    customer
}

fn validate_submission(order: &NewOrder) -> Result<(), OrdersServiceError> {
    if order.lines.is_empty() {
        return Err(OrdersServiceError::Validation(
            "pedido sem itens".to_string(),
        ));
    }

    if order.lines.iter().any(|line| line.quantity == 0) {
        return Err(OrdersServiceError::Validation(
            "item com quantidade zero".to_string(),
        ));
    }

    if order.customer.name.trim().is_empty() || order.customer.contact.trim().is_empty() {
        return Err(OrdersServiceError::Validation(
            "nome e contato são obrigatórios".to_string(),
        ));
    }

    if order.customer.service_mode == ServiceMode::Delivery
        && order
            .customer
            .address
            .as_deref()
            .is_none_or(|address| address.trim().is_empty())
    {
        return Err(OrdersServiceError::Validation(
            "endereço é obrigatório para entrega".to_string(),
        ));
    }

    if order.customer.payment == PaymentMethod::Cash && order.customer.change_for.is_none() {
        return Err(OrdersServiceError::Validation(
            "troco é obrigatório para pagamento em dinheiro".to_string(),
        ));
    }

    let expected: Decimal = order
        .lines
        .iter()
        .map(|line| line.price * Decimal::from(line.quantity))
        .sum();

    if order.total.round_dp(2) != expected.round_dp(2) {
        return Err(OrdersServiceError::Validation(
            "total não confere com os itens".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, PoisonError};

    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::{
        carts::{
            models::CartLine,
            store::{CartStore, MemoryCartStore},
        },
        notifications::notifier::{NotificationError, Notifier},
        orders::{ledger::MemoryOrderLedger, report::ReportPeriod},
    };

    use super::*;

    /// Captures every dispatched notification for later assertions.
    #[derive(Debug, Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingNotifier {
        fn sent(&self) -> Vec<(String, String)> {
            self.sent
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, to: &str, message: &str) -> Result<(), NotificationError> {
            self.sent
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((to.to_string(), message.to_string()));

            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send(&self, _to: &str, _message: &str) -> Result<(), NotificationError> {
            Err(NotificationError::Rejected("gateway offline".to_string()))
        }
    }

    struct Fixture {
        orders: LedgerOrdersService,
        carts: Arc<MemoryCartStore>,
        notifier: Arc<RecordingNotifier>,
    }

    fn fixture() -> Fixture {
        let carts = Arc::new(MemoryCartStore::new());
        let notifier = Arc::new(RecordingNotifier::default());

        let orders = LedgerOrdersService::new(
            Arc::new(MemoryOrderLedger::new()),
            Arc::clone(&carts) as Arc<dyn CartStore>,
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );

        Fixture {
            orders,
            carts,
            notifier,
        }
    }

    /// Let fire-and-forget tasks spawned by the service run to completion.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn line(item_id: i64, price: Decimal, quantity: u32) -> CartLine {
        CartLine {
            item_id,
            name: format!("item {item_id}"),
            price,
            image: None,
            quantity,
        }
    }

    fn pickup_customer() -> Customer {
        Customer {
            name: "Ana".to_string(),
            contact: "5592999990000".to_string(),
            service_mode: ServiceMode::Pickup,
            address: None,
            payment: PaymentMethod::Cash,
            change_for: Some(Decimal::new(30_00, 2)),
        }
    }

    fn delivery_customer() -> Customer {
        Customer {
            name: "Bruno".to_string(),
            contact: "5592988880000".to_string(),
            service_mode: ServiceMode::Delivery,
            address: Some("Rua das Flores, 10".to_string()),
            payment: PaymentMethod::Card,
            change_for: None,
        }
    }

    fn new_order(customer: Customer, lines: Vec<CartLine>, total: Decimal) -> NewOrder {
        NewOrder {
            customer,
            lines,
            total,
            created_at: None,
            session_id: None,
        }
    }

    #[tokio::test]
    async fn pickup_cash_scenario_end_to_end() -> TestResult {
        let fx = fixture();

        let lines = vec![
            line(1, Decimal::new(10_00, 2), 2),
            line(2, Decimal::new(5_50, 2), 1),
        ];

        let order = fx
            .orders
            .submit_order(new_order(pickup_customer(), lines, Decimal::new(25_50, 2)))
            .await?;

        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.total, Decimal::new(25_50, 2));
        assert_eq!(format!("{:.2}", order.total), "25.50");

        let updated = fx.orders.update_status(order.uuid, OrderStatus::Ready).await?;
        assert_eq!(updated.status, OrderStatus::Ready);

        settle().await;

        let sent = fx.notifier.sent();
        assert_eq!(sent.len(), 1, "expected exactly one notification");
        assert_eq!(sent[0].0, "5592999990000");
        assert!(sent[0].1.contains("retirada"), "expected pickup phrasing");

        Ok(())
    }

    #[tokio::test]
    async fn submission_rejects_empty_cart() {
        let fx = fixture();

        let result = fx
            .orders
            .submit_order(new_order(pickup_customer(), vec![], Decimal::ZERO))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }

    #[tokio::test]
    async fn submission_rejects_total_mismatch() {
        let fx = fixture();
        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let result = fx
            .orders
            .submit_order(new_order(pickup_customer(), lines, Decimal::new(9_99, 2)))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }

    #[tokio::test]
    async fn submission_accepts_total_up_to_rounding() -> TestResult {
        let fx = fixture();

        // 3 × 3.333… rendered as 10.00 by the client.
        let lines = vec![line(1, Decimal::new(3_333, 3), 3)];

        let order = fx
            .orders
            .submit_order(new_order(pickup_customer(), lines, Decimal::new(10_00, 2)))
            .await?;

        assert_eq!(order.total, Decimal::new(10_00, 2).round_dp(2));

        Ok(())
    }

    #[tokio::test]
    async fn submission_rejects_delivery_without_address() {
        let fx = fixture();
        let mut customer = delivery_customer();
        customer.address = None;

        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let result = fx
            .orders
            .submit_order(new_order(customer, lines, Decimal::new(10_00, 2)))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }

    #[tokio::test]
    async fn submission_rejects_cash_without_change_amount() {
        let fx = fixture();
        let mut customer = pickup_customer();
        customer.change_for = None;

        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let result = fx
            .orders
            .submit_order(new_order(customer, lines, Decimal::new(10_00, 2)))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }

    #[tokio::test]
    async fn pickup_submission_drops_the_address() -> TestResult {
        let fx = fixture();
        let mut customer = pickup_customer();
        customer.address = Some("Rua das Flores, 10".to_string());

        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let order = fx
            .orders
            .submit_order(new_order(customer, lines, Decimal::new(10_00, 2)))
            .await?;

        assert!(order.customer.address.is_none(), "pickup keeps no address");

        Ok(())
    }

    #[tokio::test]
    async fn card_submission_drops_the_change_amount() -> TestResult {
        let fx = fixture();
        let mut customer = delivery_customer();
        customer.change_for = Some(Decimal::new(100_00, 2));

        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let order = fx
            .orders
            .submit_order(new_order(customer, lines, Decimal::new(10_00, 2)))
            .await?;

        assert!(
            order.customer.change_for.is_none(),
            "card payment keeps no change amount"
        );

        Ok(())
    }

    #[tokio::test]
    async fn submission_clears_the_session_cart() -> TestResult {
        let fx = fixture();
        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        fx.carts.upsert("s1", lines.clone()).await?;

        let mut order = new_order(pickup_customer(), lines, Decimal::new(10_00, 2));
        order.session_id = Some("s1".to_string());

        fx.orders.submit_order(order).await?;

        settle().await;

        let record = fx.carts.get("s1").await?.expect("cart record should remain");
        assert!(record.lines.is_empty(), "cart should be emptied");

        Ok(())
    }

    #[tokio::test]
    async fn listing_returns_newest_first_without_completed() -> TestResult {
        let fx = fixture();
        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let mut first = new_order(pickup_customer(), lines.clone(), Decimal::new(10_00, 2));
        first.created_at = Some("2026-08-01T10:00:00Z".parse()?);
        let first = fx.orders.submit_order(first).await?;

        let mut second = new_order(pickup_customer(), lines, Decimal::new(10_00, 2));
        second.created_at = Some("2026-08-02T10:00:00Z".parse()?);
        let second = fx.orders.submit_order(second).await?;

        fx.orders.complete_order(first.uuid).await?;

        let listed = fx.orders.list_orders().await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].uuid, second.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn delivery_ready_transition_notifies_on_the_way() -> TestResult {
        let fx = fixture();
        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let order = fx
            .orders
            .submit_order(new_order(delivery_customer(), lines, Decimal::new(10_00, 2)))
            .await?;

        fx.orders.update_status(order.uuid, OrderStatus::Ready).await?;

        settle().await;

        let sent = fx.notifier.sent();
        assert_eq!(sent.len(), 1, "expected exactly one notification");
        assert!(sent[0].1.contains("a caminho"), "expected delivery phrasing");

        Ok(())
    }

    #[tokio::test]
    async fn other_transitions_stay_silent() -> TestResult {
        let fx = fixture();
        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let order = fx
            .orders
            .submit_order(new_order(delivery_customer(), lines, Decimal::new(10_00, 2)))
            .await?;

        fx.orders
            .update_status(order.uuid, OrderStatus::Preparing)
            .await?;
        fx.orders
            .update_status(order.uuid, OrderStatus::Delivered)
            .await?;

        settle().await;

        assert!(fx.notifier.sent().is_empty(), "no notification expected");

        Ok(())
    }

    #[tokio::test]
    async fn admin_can_revert_a_mistaken_status() -> TestResult {
        let fx = fixture();
        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let order = fx
            .orders
            .submit_order(new_order(pickup_customer(), lines, Decimal::new(10_00, 2)))
            .await?;

        fx.orders
            .update_status(order.uuid, OrderStatus::Delivered)
            .await?;
        let reverted = fx
            .orders
            .update_status(order.uuid, OrderStatus::Preparing)
            .await?;

        assert_eq!(reverted.status, OrderStatus::Preparing);

        Ok(())
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_the_update() -> TestResult {
        let carts = Arc::new(MemoryCartStore::new());
        let orders = LedgerOrdersService::new(
            Arc::new(MemoryOrderLedger::new()),
            carts,
            Arc::new(FailingNotifier),
        );

        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];
        let order = orders
            .submit_order(new_order(delivery_customer(), lines, Decimal::new(10_00, 2)))
            .await?;

        let updated = orders.update_status(order.uuid, OrderStatus::Ready).await?;
        assert_eq!(updated.status, OrderStatus::Ready);

        settle().await;

        Ok(())
    }

    #[tokio::test]
    async fn updating_unknown_order_is_not_found() -> TestResult {
        let fx = fixture();

        let result = fx
            .orders
            .update_status(Uuid::now_v7(), OrderStatus::Preparing)
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert!(fx.orders.list_orders().await?.is_empty(), "ledger unchanged");

        Ok(())
    }

    #[tokio::test]
    async fn completed_orders_reject_further_updates() -> TestResult {
        let fx = fixture();
        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let order = fx
            .orders
            .submit_order(new_order(pickup_customer(), lines, Decimal::new(10_00, 2)))
            .await?;

        fx.orders.complete_order(order.uuid).await?;

        let result = fx
            .orders
            .update_status(order.uuid, OrderStatus::Preparing)
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn completing_unknown_order_is_not_found() {
        let fx = fixture();

        let result = fx.orders.complete_order(Uuid::now_v7()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn report_filters_by_status_and_sums_revenue() -> TestResult {
        let fx = fixture();

        for (price, delivered) in [
            (Decimal::new(10_00, 2), false),
            (Decimal::new(20_00, 2), true),
            (Decimal::new(5_00, 2), false),
        ] {
            let order = fx
                .orders
                .submit_order(new_order(
                    pickup_customer(),
                    vec![line(1, price, 1)],
                    price,
                ))
                .await?;

            if delivered {
                fx.orders
                    .update_status(order.uuid, OrderStatus::Delivered)
                    .await?;
            }
        }

        let report = fx
            .orders
            .report(ReportFilter {
                period: ReportPeriod::AllTime,
                status: Some(OrderStatus::Delivered),
            })
            .await?;

        assert_eq!(report.count, 1);
        assert_eq!(format!("{:.2}", report.revenue), "20.00");

        Ok(())
    }

    #[tokio::test]
    async fn report_includes_completed_orders() -> TestResult {
        let fx = fixture();
        let lines = vec![line(1, Decimal::new(10_00, 2), 1)];

        let order = fx
            .orders
            .submit_order(new_order(pickup_customer(), lines, Decimal::new(10_00, 2)))
            .await?;

        fx.orders.complete_order(order.uuid).await?;

        let report = fx.orders.report(ReportFilter::default()).await?;

        assert_eq!(report.count, 1);
        assert_eq!(report.orders[0].status, OrderStatus::Completed);

        Ok(())
    }
}
