use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// New order captured from the mobile form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub customer_name: String,
    pub customer_mobile: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub village: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub taluka: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub district: String,
    pub product_name: String,
    pub quantity: f64,
    pub rate: f64,
    pub total_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateOrderDto {
    pub fn computed_total(&self) -> f64 {
        (self.quantity * self.rate * 100.0).round() / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    Cash,
    Upi,
    Neft,
    Rtgs,
    Cheque,
    BankTransfer,
}

impl PaymentMode {
    pub fn all() -> [PaymentMode; 6] {
        [
            PaymentMode::Cash,
            PaymentMode::Upi,
            PaymentMode::Neft,
            PaymentMode::Rtgs,
            PaymentMode::Cheque,
            PaymentMode::BankTransfer,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "CASH",
            PaymentMode::Upi => "UPI",
            PaymentMode::Neft => "NEFT",
            PaymentMode::Rtgs => "RTGS",
            PaymentMode::Cheque => "CHEQUE",
            PaymentMode::BankTransfer => "BANK_TRANSFER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Upi => "UPI",
            PaymentMode::Neft => "NEFT",
            PaymentMode::Rtgs => "RTGS",
            PaymentMode::Cheque => "Cheque",
            PaymentMode::BankTransfer => "Bank transfer",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        PaymentMode::all()
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(code))
    }

    /// Receipt photo is mandatory for every mode except cash and NEFT
    pub fn requires_receipt(&self) -> bool {
        !matches!(self, PaymentMode::Cash | PaymentMode::Neft)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: f64,
    pub mode_of_payment: PaymentMode,
    pub payment_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub receipt_photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchMode {
    Vehicle,
    Courier,
}

impl DispatchMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            DispatchMode::Vehicle => "Own vehicle",
            DispatchMode::Courier => "Courier",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequest {
    pub order_ids: Vec<String>,
    pub dispatch_mode: DispatchMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier_tracking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_notes: Option<String>,
}

impl DispatchRequest {
    pub fn new(order_ids: Vec<String>, dispatch_mode: DispatchMode) -> Self {
        Self {
            order_ids,
            dispatch_mode,
            vehicle_id: None,
            vehicle_number: None,
            driver_name: None,
            driver_mobile: None,
            courier_name: None,
            courier_tracking_id: None,
            courier_contact: None,
            dispatch_notes: None,
        }
    }

    /// Drop fields that belong to the other dispatch mode
    pub fn scrubbed(mut self) -> Self {
        match self.dispatch_mode {
            DispatchMode::Vehicle => {
                self.courier_name = None;
                self.courier_tracking_id = None;
                self.courier_contact = None;
            }
            DispatchMode::Courier => {
                self.vehicle_id = None;
                self.vehicle_number = None;
                self.driver_name = None;
                self.driver_mobile = None;
            }
        }
        self
    }
}

/// Completion, optionally with returned quantities that go back to stock
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteOrderRequest {
    pub order_ids: Vec<String>,
    #[serde(default)]
    pub return_quantities: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentType {
    Refund,
    CreditNote,
    Deduction,
}

impl AdjustmentType {
    pub fn all() -> [AdjustmentType; 3] {
        [
            AdjustmentType::Refund,
            AdjustmentType::CreditNote,
            AdjustmentType::Deduction,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            AdjustmentType::Refund => "REFUND",
            AdjustmentType::CreditNote => "CREDIT_NOTE",
            AdjustmentType::Deduction => "DEDUCTION",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AdjustmentType::Refund => "Refund",
            AdjustmentType::CreditNote => "Credit note",
            AdjustmentType::Deduction => "Deduction",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        AdjustmentType::all().into_iter().find(|t| t.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAdjustment {
    pub amount: f64,
    pub adjustment_type: AdjustmentType,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Sales return against a dispatched order. Does not touch stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReturnRequest {
    pub return_quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_adjustments: Option<Vec<PaymentAdjustment>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectOrderRequest {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_scrub_and_wire_shape() {
        let mut req = DispatchRequest::new(vec!["o1".into()], DispatchMode::Courier);
        req.courier_name = Some("DTDC".into());
        req.courier_tracking_id = Some("D123".into());
        req.driver_name = Some("left over".into());
        let json = serde_json::to_value(req.scrubbed()).unwrap();
        assert_eq!(json["dispatchMode"], "COURIER");
        assert_eq!(json["orderIds"][0], "o1");
        assert_eq!(json["courierTrackingId"], "D123");
        assert!(json.get("driverName").is_none());
    }

    #[test]
    fn test_payment_mode_receipt_rule() {
        assert!(!PaymentMode::Cash.requires_receipt());
        assert!(!PaymentMode::Neft.requires_receipt());
        assert!(PaymentMode::Upi.requires_receipt());
        assert!(PaymentMode::Cheque.requires_receipt());
        assert_eq!(PaymentMode::from_code("upi"), Some(PaymentMode::Upi));
    }

    #[test]
    fn test_complete_request_keys_by_order_id() {
        let mut req = CompleteOrderRequest {
            order_ids: vec!["o1".into(), "o2".into()],
            ..Default::default()
        };
        req.return_quantities.insert("o1".into(), 2.0);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["returnQuantities"]["o1"], 2.0);
        assert!(json.get("returnReason").is_none());
    }

    #[test]
    fn test_computed_total_rounds_to_paise() {
        let dto = CreateOrderDto {
            quantity: 3.0,
            rate: 33.333,
            ..Default::default()
        };
        assert_eq!(dto.computed_total(), 100.0);
    }
}
