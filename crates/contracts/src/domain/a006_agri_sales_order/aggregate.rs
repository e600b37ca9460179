use serde::{Deserialize, Serialize};

/// Order lifecycle as reported by the backend.
/// PENDING -> ACCEPTED/ASSIGNED -> DISPATCHED -> COMPLETED, or REJECTED/CANCELLED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Assigned,
    Dispatched,
    Completed,
    Rejected,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::Assigned => "ASSIGNED",
            OrderStatus::Dispatched => "DISPATCHED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Assigned => "Assigned",
            OrderStatus::Dispatched => "Dispatched",
            OrderStatus::Completed => "Completed",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge--warning",
            OrderStatus::Accepted | OrderStatus::Assigned => "badge--primary",
            OrderStatus::Dispatched => "badge--info",
            OrderStatus::Completed => "badge--success",
            OrderStatus::Rejected | OrderStatus::Cancelled => "badge--error",
            OrderStatus::Unknown => "badge--neutral",
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Rejected | OrderStatus::Cancelled
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchStatus {
    NotDispatched,
    Dispatched,
    Delivered,
    #[serde(other)]
    Unknown,
}

impl Default for DispatchStatus {
    fn default() -> Self {
        DispatchStatus::NotDispatched
    }
}

impl DispatchStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DispatchStatus::NotDispatched => "Not dispatched",
            DispatchStatus::Dispatched => "Dispatched",
            DispatchStatus::Delivered => "Delivered",
            DispatchStatus::Unknown => "-",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEntry {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub mode_of_payment: String,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub receipt_photos: Vec<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "performedByName")]
    pub performed_by: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub timestamp: Option<String>,
}

/// Agri sales order as returned by the order endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgriSalesOrder {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default, alias = "customerMobileNumber")]
    pub customer_mobile: String,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub taluka: String,
    #[serde(default)]
    pub district: String,
    #[serde(default, alias = "cropName")]
    pub product_name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default)]
    pub balance_amount: f64,
    #[serde(default)]
    pub returned_quantity: f64,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default)]
    pub dispatch_status: DispatchStatus,
    #[serde(default)]
    pub payment: Vec<PaymentEntry>,
    #[serde(default)]
    pub activity_log: Vec<ActivityLogEntry>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Actions offered for an order in its current state.
/// The backend validates every transition; this only decides which buttons show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderAction {
    Accept,
    Reject,
    AddPayment,
    Dispatch,
    Complete,
    SalesReturn,
}

impl OrderAction {
    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::Accept => "Accept",
            OrderAction::Reject => "Reject",
            OrderAction::AddPayment => "Add payment",
            OrderAction::Dispatch => "Dispatch",
            OrderAction::Complete => "Complete",
            OrderAction::SalesReturn => "Sales return",
        }
    }
}

impl AgriSalesOrder {
    pub const ITEMS_KEYS: &'static [&'static str] = &["orders", "items"];

    /// Sum of recorded payments, used when the backend omits `paidAmount`
    pub fn payments_total(&self) -> f64 {
        self.payment.iter().map(|p| p.amount).sum()
    }

    pub fn outstanding(&self) -> f64 {
        if self.balance_amount > 0.0 || self.paid_amount > 0.0 {
            self.balance_amount.max(0.0)
        } else {
            (self.total_amount - self.payments_total()).max(0.0)
        }
    }

    /// Quantity that can still be returned
    pub fn returnable_quantity(&self) -> f64 {
        (self.quantity - self.returned_quantity).max(0.0)
    }

    pub fn available_actions(&self) -> Vec<OrderAction> {
        let mut actions = Vec::new();
        match self.order_status {
            OrderStatus::Pending => {
                actions.push(OrderAction::Accept);
                actions.push(OrderAction::Reject);
            }
            OrderStatus::Accepted | OrderStatus::Assigned => actions.push(OrderAction::Dispatch),
            OrderStatus::Dispatched => {
                actions.push(OrderAction::Complete);
                actions.push(OrderAction::SalesReturn);
            }
            OrderStatus::Completed => actions.push(OrderAction::SalesReturn),
            _ => {}
        }
        let payable = !matches!(
            self.order_status,
            OrderStatus::Rejected | OrderStatus::Cancelled | OrderStatus::Unknown
        );
        if payable && self.outstanding() > 0.0 {
            actions.push(OrderAction::AddPayment);
        }
        if self.returnable_quantity() <= 0.0 {
            actions.retain(|a| *a != OrderAction::SalesReturn);
        }
        actions
    }
}

/// Tabs of the mobile order screen, each mapping to a status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderTab {
    Pending,
    Accepted,
    Dispatched,
    Completed,
    Rejected,
}

impl OrderTab {
    pub fn all() -> [OrderTab; 5] {
        [
            OrderTab::Pending,
            OrderTab::Accepted,
            OrderTab::Dispatched,
            OrderTab::Completed,
            OrderTab::Rejected,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderTab::Pending => "Pending",
            OrderTab::Accepted => "Accepted",
            OrderTab::Dispatched => "Dispatched",
            OrderTab::Completed => "Completed",
            OrderTab::Rejected => "Rejected",
        }
    }

    pub fn statuses(&self) -> &'static [OrderStatus] {
        match self {
            OrderTab::Pending => &[OrderStatus::Pending],
            OrderTab::Accepted => &[OrderStatus::Accepted, OrderStatus::Assigned],
            OrderTab::Dispatched => &[OrderStatus::Dispatched],
            OrderTab::Completed => &[OrderStatus::Completed],
            OrderTab::Rejected => &[OrderStatus::Rejected, OrderStatus::Cancelled],
        }
    }

    /// Value of the `orderStatus` query parameter, comma separated
    pub fn status_filter(&self) -> String {
        self.statuses()
            .iter()
            .map(|s| s.code())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: OrderStatus) -> AgriSalesOrder {
        AgriSalesOrder {
            id: "64b7f0c2a1e4d3b2c1a09f8e".into(),
            quantity: 10.0,
            rate: 100.0,
            total_amount: 1000.0,
            balance_amount: 400.0,
            paid_amount: 600.0,
            order_status: status,
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_order() {
        let raw = r#"{
            "_id": "64b7f0c2a1e4d3b2c1a09f8e",
            "orderNumber": "ASO-0012",
            "customerName": "Ramesh Patil",
            "quantity": 20,
            "rate": 45.5,
            "totalAmount": 910,
            "balanceAmount": 410,
            "orderStatus": "DISPATCHED",
            "dispatchStatus": "DISPATCHED",
            "payment": [{"_id": "p1", "amount": 500, "modeOfPayment": "CASH"}],
            "activityLog": [{"action": "CREATED", "performedBy": "Sales rep"}]
        }"#;
        let o: AgriSalesOrder = serde_json::from_str(raw).unwrap();
        assert_eq!(o.order_status, OrderStatus::Dispatched);
        assert_eq!(o.payment.len(), 1);
        assert_eq!(o.payments_total(), 500.0);
    }

    #[test]
    fn test_unknown_status() {
        let o: AgriSalesOrder = serde_json::from_str(r#"{"orderStatus":"ON_HOLD"}"#).unwrap();
        assert_eq!(o.order_status, OrderStatus::Unknown);
        assert!(o.available_actions().is_empty());
    }

    #[test]
    fn test_actions_by_status() {
        let pending = order(OrderStatus::Pending).available_actions();
        assert!(pending.contains(&OrderAction::Accept));
        assert!(pending.contains(&OrderAction::Reject));
        assert!(pending.contains(&OrderAction::AddPayment));

        let accepted = order(OrderStatus::Assigned).available_actions();
        assert!(accepted.contains(&OrderAction::Dispatch));

        let dispatched = order(OrderStatus::Dispatched).available_actions();
        assert!(dispatched.contains(&OrderAction::Complete));
        assert!(dispatched.contains(&OrderAction::SalesReturn));

        let rejected = order(OrderStatus::Rejected).available_actions();
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_fully_paid_has_no_payment_action() {
        let mut o = order(OrderStatus::Completed);
        o.balance_amount = 0.0;
        o.paid_amount = 1000.0;
        assert!(!o.available_actions().contains(&OrderAction::AddPayment));
    }

    #[test]
    fn test_fully_returned_has_no_return_action() {
        let mut o = order(OrderStatus::Completed);
        o.returned_quantity = 10.0;
        assert!(!o.available_actions().contains(&OrderAction::SalesReturn));
    }

    #[test]
    fn test_outstanding_falls_back_to_payments() {
        let o = AgriSalesOrder {
            total_amount: 1000.0,
            payment: vec![PaymentEntry { amount: 250.0, ..Default::default() }],
            ..Default::default()
        };
        assert_eq!(o.outstanding(), 750.0);
    }

    #[test]
    fn test_tab_status_filter() {
        assert_eq!(OrderTab::Accepted.status_filter(), "ACCEPTED,ASSIGNED");
        assert_eq!(OrderTab::Pending.status_filter(), "PENDING");
    }
}
