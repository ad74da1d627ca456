//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{Router, Service, affix_state::inject};

use pricesense_app::{
    context::AppContext,
    domain::{
        alerts::MockAlertsService,
        products::{
            MockProductsService,
            models::{PriceHistory, PriceHistoryUuid, Product, ProductDetail, ProductUuid},
        },
        updates::MockUpdateService,
    },
};

use crate::state::State;

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        name: "Widget".to_string(),
        url: None,
        current_price: Some(100.0),
        last_checked: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_detail(uuid: ProductUuid) -> ProductDetail {
    ProductDetail {
        product: make_product(uuid),
        history: Vec::new(),
        alerts: Vec::new(),
    }
}

pub(crate) fn make_detail_with_history(uuid: ProductUuid, prices: &[f64]) -> ProductDetail {
    let mut detail = make_detail(uuid);

    detail.history = prices
        .iter()
        .map(|price| PriceHistory {
            uuid: PriceHistoryUuid::new(),
            product_uuid: uuid,
            price: *price,
            recorded_at: Timestamp::UNIX_EPOCH,
        })
        .collect();

    detail
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();
    products.expect_list_history().never();

    products
}

fn strict_alerts_mock() -> MockAlertsService {
    let mut alerts = MockAlertsService::new();

    alerts.expect_list_alerts().never();

    alerts
}

fn strict_updates_mock() -> MockUpdateService {
    let mut updates = MockUpdateService::new();

    updates.expect_run_update_batch().never();

    updates
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    Arc::new(State::new(AppContext::new(
        Arc::new(products),
        Arc::new(strict_alerts_mock()),
        Arc::new(strict_updates_mock()),
    )))
}

pub(crate) fn state_with_alerts(alerts: MockAlertsService) -> Arc<State> {
    Arc::new(State::new(AppContext::new(
        Arc::new(strict_products_mock()),
        Arc::new(alerts),
        Arc::new(strict_updates_mock()),
    )))
}

pub(crate) fn state_with_updates(updates: MockUpdateService) -> Arc<State> {
    Arc::new(State::new(AppContext::new(
        Arc::new(strict_products_mock()),
        Arc::new(strict_alerts_mock()),
        Arc::new(updates),
    )))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

pub(crate) fn alerts_api(alerts: MockAlertsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_alerts(alerts)))
            .push(route),
    )
}

pub(crate) fn updates_api(updates: MockUpdateService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_updates(updates)))
            .push(route),
    )
}
