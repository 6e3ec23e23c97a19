//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use lanchonete_app::{
    context::AppContext,
    domain::{
        carts::{MockCartsService, models::CartLine},
        menu::MockMenuCatalog,
        orders::{
            MockOrdersService, OrderStatus,
            models::{Customer, Order, PaymentMethod, ServiceMode},
        },
    },
};

use crate::state::State;

fn strict_menu_mock() -> MockMenuCatalog {
    let mut menu = MockMenuCatalog::new();

    menu.expect_list_items().never();

    menu
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_save_cart().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_submit_order().never();
    orders.expect_list_orders().never();
    orders.expect_update_status().never();
    orders.expect_complete_order().never();
    orders.expect_report().never();

    orders
}

fn make_state(
    menu: MockMenuCatalog,
    carts: MockCartsService,
    orders: MockOrdersService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        menu: Arc::new(menu),
        carts: Arc::new(carts),
        orders: Arc::new(orders),
    })
}

pub(crate) fn menu_service(menu: MockMenuCatalog, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(
                menu,
                strict_carts_mock(),
                strict_orders_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(
                strict_menu_mock(),
                carts,
                strict_orders_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(
                strict_menu_mock(),
                strict_carts_mock(),
                orders,
            )))
            .push(route),
    )
}

pub(crate) fn make_line(item_id: i64) -> CartLine {
    CartLine {
        item_id,
        name: "X-Burger".to_string(),
        price: Decimal::new(1050, 2),
        image: None,
        quantity: 1,
    }
}

pub(crate) fn make_customer() -> Customer {
    Customer {
        name: "Maria".to_string(),
        contact: "+5592999990000".to_string(),
        service_mode: ServiceMode::Pickup,
        address: None,
        payment: PaymentMethod::Cash,
        change_for: Some(Decimal::new(5000, 2)),
    }
}

pub(crate) fn make_order(uuid: Uuid) -> Order {
    Order {
        uuid,
        customer: make_customer(),
        lines: vec![make_line(1)],
        total: Decimal::new(1050, 2),
        status: OrderStatus::Placed,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
