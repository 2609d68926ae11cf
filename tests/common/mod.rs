use std::sync::Mutex;

use rocketshoes_cart::models::{Notification, Notifier};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Notifier that records everything it is handed, for assertions
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn recorded(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Mount a stock lookup response on the mock catalog server
pub async fn mount_stock(server: &MockServer, product_id: u64, amount: u32) {
    Mock::given(method("GET"))
        .and(path(format!("/stock/{}", product_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": product_id,
            "amount": amount,
        })))
        .mount(server)
        .await;
}

/// Mount a product metadata response on the mock catalog server
pub async fn mount_product(server: &MockServer, product_id: u64, title: &str, price: f64) {
    Mock::given(method("GET"))
        .and(path(format!("/products/{}", product_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": product_id,
            "title": title,
            "price": price,
            "image": format!("{}.jpg", product_id),
        })))
        .mount(server)
        .await;
}
