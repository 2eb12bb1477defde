//! Order and review services.
//!
//! Each service builds its handlers once from the injected ports and exposes
//! one method per operation. The methods only pack arguments into commands
//! and queries; every rule lives in the handlers.

use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

use super::handlers::order::{
    AddItemToOrderCommand, AddItemToOrderHandler, CancelOrderCommand, CancelOrderHandler,
    CreateOrderCommand, CreateOrderHandler, GetOrderHandler, GetOrderQuery,
    ListCustomerOrdersHandler, ListCustomerOrdersQuery, ListOrdersHandler,
    RemoveItemFromOrderCommand, RemoveItemFromOrderHandler, SetOrderStatusCommand,
    SetOrderStatusHandler, UpdateOrderCommand, UpdateOrderHandler,
};
use super::handlers::review::{
    DeleteReviewCommand, DeleteReviewHandler, GetReviewForOrderHandler, GetReviewForOrderQuery,
    GetReviewHandler, GetReviewQuery, ListCustomerReviewsHandler, ListCustomerReviewsQuery,
    SubmitReviewCommand, SubmitReviewHandler, UpdateReviewCommand, UpdateReviewHandler,
};
use super::ServiceError;
use crate::config::OrderRules;
use crate::domain::foundation::{OrderId, OrderItemId, Rating, ReviewId};
use crate::domain::order::{Order, OrderStatus, OrderType};
use crate::domain::review::Review;
use crate::ports::{CustomerRepository, OrderItemRepository, OrderRepository, ReviewRepository};

/// Order management operations.
pub struct OrderService {
    create: CreateOrderHandler,
    update: UpdateOrderHandler,
    add_item: AddItemToOrderHandler,
    remove_item: RemoveItemFromOrderHandler,
    cancel: CancelOrderHandler,
    list_all: ListOrdersHandler,
    list_by_customer: ListCustomerOrdersHandler,
    get: GetOrderHandler,
    set_status: SetOrderStatusHandler,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
        items: Arc<dyn OrderItemRepository>,
        reviews: Arc<dyn ReviewRepository>,
        rules: OrderRules,
    ) -> Self {
        Self {
            create: CreateOrderHandler::new(orders.clone(), customers.clone()),
            update: UpdateOrderHandler::new(orders.clone(), rules.clone()),
            add_item: AddItemToOrderHandler::new(orders.clone(), items.clone()),
            remove_item: RemoveItemFromOrderHandler::new(orders.clone(), items),
            cancel: CancelOrderHandler::new(orders.clone(), reviews),
            list_all: ListOrdersHandler::new(orders.clone()),
            list_by_customer: ListCustomerOrdersHandler::new(orders.clone(), customers),
            get: GetOrderHandler::new(orders.clone()),
            set_status: SetOrderStatusHandler::new(orders, rules),
        }
    }

    pub async fn create_order(
        &self,
        order_type: Option<OrderType>,
        status: Option<OrderStatus>,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        customer_email: &str,
        order_id: OrderId,
    ) -> Result<Order, ServiceError> {
        self.create
            .handle(CreateOrderCommand {
                order_type,
                status,
                date,
                time,
                customer_email: customer_email.to_string(),
                order_id,
            })
            .await
    }

    pub async fn update_order(
        &self,
        order_type: Option<OrderType>,
        status: Option<OrderStatus>,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        order_id: OrderId,
    ) -> Result<Order, ServiceError> {
        self.update
            .handle(UpdateOrderCommand {
                order_id,
                order_type,
                status,
                date,
                time,
            })
            .await
    }

    pub async fn add_item_to_order(
        &self,
        order_id: OrderId,
        item_id: OrderItemId,
    ) -> Result<bool, ServiceError> {
        self.add_item
            .handle(AddItemToOrderCommand { order_id, item_id })
            .await
    }

    pub async fn remove_item_from_order(
        &self,
        order_id: OrderId,
        item_id: OrderItemId,
    ) -> Result<bool, ServiceError> {
        self.remove_item
            .handle(RemoveItemFromOrderCommand { order_id, item_id })
            .await
    }

    pub async fn cancel_order(&self, order_id: OrderId) -> Result<bool, ServiceError> {
        self.cancel.handle(CancelOrderCommand { order_id }).await
    }

    pub async fn get_all_orders(&self) -> Result<Vec<Order>, ServiceError> {
        self.list_all.handle().await
    }

    pub async fn get_orders_by_customer(
        &self,
        customer_email: &str,
    ) -> Result<Vec<Order>, ServiceError> {
        self.list_by_customer
            .handle(ListCustomerOrdersQuery {
                customer_email: customer_email.to_string(),
            })
            .await
    }

    pub async fn get_order_by_id(&self, order_id: Option<OrderId>) -> Result<Order, ServiceError> {
        self.get.handle(GetOrderQuery { order_id }).await
    }

    pub async fn set_order_status(
        &self,
        order_id: OrderId,
        status: Option<OrderStatus>,
    ) -> Result<Order, ServiceError> {
        self.set_status
            .handle(SetOrderStatusCommand { order_id, status })
            .await
    }

    pub fn convert_order_type(text: &str) -> Option<OrderType> {
        OrderType::from_label(text)
    }

    pub fn convert_order_status(text: &str) -> Option<OrderStatus> {
        OrderStatus::from_label(text)
    }
}

/// Review operations.
pub struct ReviewService {
    submit: SubmitReviewHandler,
    update: UpdateReviewHandler,
    delete: DeleteReviewHandler,
    get: GetReviewHandler,
    list_by_customer: ListCustomerReviewsHandler,
    get_for_order: GetReviewForOrderHandler,
}

impl ReviewService {
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
        rules: OrderRules,
    ) -> Self {
        Self {
            submit: SubmitReviewHandler::new(
                reviews.clone(),
                orders.clone(),
                customers.clone(),
                rules,
            ),
            update: UpdateReviewHandler::new(reviews.clone()),
            delete: DeleteReviewHandler::new(reviews.clone()),
            get: GetReviewHandler::new(reviews.clone()),
            list_by_customer: ListCustomerReviewsHandler::new(reviews.clone(), customers.clone()),
            get_for_order: GetReviewForOrderHandler::new(reviews, orders, customers),
        }
    }

    pub async fn submit_review(
        &self,
        review_id: ReviewId,
        rating: Option<Rating>,
        description: &str,
        customer_email: &str,
        order_id: OrderId,
    ) -> Result<Review, ServiceError> {
        self.submit
            .handle(SubmitReviewCommand {
                review_id,
                rating,
                description: description.to_string(),
                customer_email: customer_email.to_string(),
                order_id,
            })
            .await
    }

    pub async fn update_review(
        &self,
        review_id: ReviewId,
        rating: Option<Rating>,
        description: &str,
    ) -> Result<Review, ServiceError> {
        self.update
            .handle(UpdateReviewCommand {
                review_id,
                rating,
                description: description.to_string(),
            })
            .await
    }

    pub async fn delete_review(&self, review_id: ReviewId) -> Result<bool, ServiceError> {
        self.delete.handle(DeleteReviewCommand { review_id }).await
    }

    pub async fn get_review_by_id(&self, review_id: ReviewId) -> Result<Review, ServiceError> {
        self.get.handle(GetReviewQuery { review_id }).await
    }

    pub async fn get_reviews_by_customer(
        &self,
        customer_email: &str,
    ) -> Result<Vec<Review>, ServiceError> {
        self.list_by_customer
            .handle(ListCustomerReviewsQuery {
                customer_email: customer_email.to_string(),
            })
            .await
    }

    pub async fn get_review_for_order(
        &self,
        customer_email: &str,
        order_id: OrderId,
    ) -> Result<Review, ServiceError> {
        self.get_for_order
            .handle(GetReviewForOrderQuery {
                customer_email: customer_email.to_string(),
                order_id,
            })
            .await
    }

    pub fn convert_rating(text: &str) -> Option<Rating> {
        Rating::from_label(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn convert_order_type_accepts_storefront_spellings() {
        assert_eq!(
            OrderService::convert_order_type("Delivery"),
            Some(OrderType::Delivery)
        );
        for text in ["PickUp", "Pick Up", "Pick up"] {
            assert_eq!(OrderService::convert_order_type(text), Some(OrderType::PickUp));
        }
        assert_eq!(OrderService::convert_order_type("delivery"), None);
        assert_eq!(OrderService::convert_order_type(""), None);
    }

    #[test]
    fn convert_order_status_accepts_exact_names() {
        for status in OrderStatus::ALL {
            assert_eq!(
                OrderService::convert_order_status(status.label()),
                Some(status)
            );
        }
        assert_eq!(OrderService::convert_order_status("Shipped"), None);
        assert_eq!(OrderService::convert_order_status("ready"), None);
    }

    #[test]
    fn convert_rating_accepts_both_spellings() {
        assert_eq!(ReviewService::convert_rating("Very Poor"), Some(Rating::VeryPoor));
        assert_eq!(ReviewService::convert_rating("VeryPoor"), Some(Rating::VeryPoor));
        assert_eq!(ReviewService::convert_rating("Okay"), Some(Rating::Okay));
        assert_eq!(ReviewService::convert_rating("VeryGood"), Some(Rating::VeryGood));
        assert_eq!(ReviewService::convert_rating("Excellent"), None);
    }

    proptest! {
        #[test]
        fn lowercase_text_is_never_a_status(text in "[a-z ]{0,12}") {
            prop_assert_eq!(OrderService::convert_order_status(&text), None);
        }

        #[test]
        fn digits_are_never_a_rating(text in "[0-9]{1,3}") {
            prop_assert_eq!(ReviewService::convert_rating(&text), None);
        }
    }
}
