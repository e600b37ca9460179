//! Local validation of the order forms, run before any request is sent.

use super::aggregate::AgriSalesOrder;
use super::requests::{
    CompleteOrderRequest, CreateOrderDto, DispatchMode, DispatchRequest, PaymentMode,
    PaymentRequest, SalesReturnRequest,
};
use crate::shared::phone::is_valid_mobile;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a valid 10-digit mobile number")]
    InvalidMobile(&'static str),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("Amount exceeds the outstanding balance of {balance:.2}")]
    ExceedsBalance { balance: f64 },
    #[error("Return quantity for {order} cannot exceed {max}")]
    ExceedsQuantity { order: String, max: f64 },
    #[error("Upload at least one receipt photo for {0} payments")]
    ReceiptRequired(&'static str),
    #[error("Select at least one order")]
    NoOrders,
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

pub fn validate_create(dto: &CreateOrderDto) -> Result<(), FormError> {
    if dto.customer_name.trim().is_empty() {
        return Err(FormError::Required("Customer name"));
    }
    if !is_valid_mobile(&dto.customer_mobile) {
        return Err(FormError::InvalidMobile("Customer mobile"));
    }
    if dto.product_name.trim().is_empty() {
        return Err(FormError::Required("Product"));
    }
    if dto.quantity <= 0.0 {
        return Err(FormError::NotPositive("Quantity"));
    }
    if dto.rate <= 0.0 {
        return Err(FormError::NotPositive("Rate"));
    }
    if let Some(advance) = dto.advance_amount {
        if advance < 0.0 {
            return Err(FormError::NotPositive("Advance"));
        }
        if advance > dto.computed_total() {
            return Err(FormError::ExceedsBalance {
                balance: dto.computed_total(),
            });
        }
    }
    Ok(())
}

/// Gate for the payment submit button
pub fn payment_can_submit(mode: Option<PaymentMode>, amount: f64, photo_count: usize) -> bool {
    let Some(mode) = mode else {
        return false;
    };
    if amount <= 0.0 {
        return false;
    }
    !mode.requires_receipt() || photo_count > 0
}

pub fn validate_payment(req: &PaymentRequest, balance: f64) -> Result<(), FormError> {
    if req.amount <= 0.0 {
        return Err(FormError::NotPositive("Amount"));
    }
    if balance > 0.0 && req.amount > balance + f64::EPSILON {
        return Err(FormError::ExceedsBalance { balance });
    }
    if req.payment_date.trim().is_empty() {
        return Err(FormError::Required("Payment date"));
    }
    if req.mode_of_payment.requires_receipt() && req.receipt_photos.is_empty() {
        return Err(FormError::ReceiptRequired(req.mode_of_payment.display_name()));
    }
    Ok(())
}

pub fn validate_dispatch(req: &DispatchRequest) -> Result<(), FormError> {
    if req.order_ids.is_empty() {
        return Err(FormError::NoOrders);
    }
    match req.dispatch_mode {
        DispatchMode::Vehicle => {
            if blank(&req.vehicle_number) && blank(&req.vehicle_id) {
                return Err(FormError::Required("Vehicle number"));
            }
            if blank(&req.driver_name) {
                return Err(FormError::Required("Driver name"));
            }
            if blank(&req.driver_mobile) {
                return Err(FormError::Required("Driver mobile"));
            }
            if !is_valid_mobile(req.driver_mobile.as_deref().unwrap_or("")) {
                return Err(FormError::InvalidMobile("Driver mobile"));
            }
        }
        DispatchMode::Courier => {
            if blank(&req.courier_name) {
                return Err(FormError::Required("Courier name"));
            }
            if blank(&req.courier_tracking_id) {
                return Err(FormError::Required("Tracking id"));
            }
            if !blank(&req.courier_contact)
                && !is_valid_mobile(req.courier_contact.as_deref().unwrap_or(""))
            {
                return Err(FormError::InvalidMobile("Courier contact"));
            }
        }
    }
    Ok(())
}

pub fn validate_complete(
    req: &CompleteOrderRequest,
    orders: &[AgriSalesOrder],
) -> Result<(), FormError> {
    if req.order_ids.is_empty() {
        return Err(FormError::NoOrders);
    }
    let mut any_return = false;
    for (order_id, qty) in &req.return_quantities {
        if *qty < 0.0 {
            return Err(FormError::NotPositive("Return quantity"));
        }
        if let Some(order) = orders.iter().find(|o| &o.id == order_id) {
            if *qty > order.quantity {
                return Err(FormError::ExceedsQuantity {
                    order: order.order_number.clone(),
                    max: order.quantity,
                });
            }
        }
        any_return |= *qty > 0.0;
    }
    if any_return && blank(&req.return_reason) {
        return Err(FormError::Required("Return reason"));
    }
    Ok(())
}

pub fn validate_sales_return(
    req: &SalesReturnRequest,
    order: &AgriSalesOrder,
) -> Result<(), FormError> {
    if req.return_quantity <= 0.0 {
        return Err(FormError::NotPositive("Return quantity"));
    }
    let max = order.returnable_quantity();
    if req.return_quantity > max {
        return Err(FormError::ExceedsQuantity {
            order: order.order_number.clone(),
            max,
        });
    }
    if let Some(adjustments) = &req.payment_adjustments {
        for adj in adjustments {
            if adj.amount <= 0.0 {
                return Err(FormError::NotPositive("Adjustment amount"));
            }
            if adj.reason.trim().is_empty() {
                return Err(FormError::Required("Adjustment reason"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::requests::{AdjustmentType, PaymentAdjustment};
    use super::*;

    fn payment(mode: PaymentMode, photos: usize) -> PaymentRequest {
        PaymentRequest {
            amount: 500.0,
            mode_of_payment: mode,
            payment_date: "2026-10-19".into(),
            reference_number: None,
            receipt_photos: (0..photos).map(|i| format!("https://cdn/r{}.jpg", i)).collect(),
            notes: None,
        }
    }

    #[test]
    fn test_upi_gated_on_receipt_photo() {
        assert!(!payment_can_submit(Some(PaymentMode::Upi), 500.0, 0));
        assert!(payment_can_submit(Some(PaymentMode::Upi), 500.0, 1));
    }

    #[test]
    fn test_cash_and_neft_need_no_photo() {
        assert!(payment_can_submit(Some(PaymentMode::Cash), 500.0, 0));
        assert!(payment_can_submit(Some(PaymentMode::Neft), 500.0, 0));
        assert!(!payment_can_submit(None, 500.0, 0));
        assert!(!payment_can_submit(Some(PaymentMode::Cash), 0.0, 0));
    }

    #[test]
    fn test_validate_payment() {
        assert_eq!(
            validate_payment(&payment(PaymentMode::Upi, 0), 1000.0),
            Err(FormError::ReceiptRequired("UPI"))
        );
        assert!(validate_payment(&payment(PaymentMode::Upi, 1), 1000.0).is_ok());
        assert_eq!(
            validate_payment(&payment(PaymentMode::Cash, 0), 100.0),
            Err(FormError::ExceedsBalance { balance: 100.0 })
        );
    }

    #[test]
    fn test_validate_create() {
        let mut dto = CreateOrderDto {
            customer_name: "Ramesh".into(),
            customer_mobile: "98765".into(),
            product_name: "Soybean seed".into(),
            quantity: 2.0,
            rate: 1500.0,
            ..Default::default()
        };
        assert_eq!(
            validate_create(&dto),
            Err(FormError::InvalidMobile("Customer mobile"))
        );
        dto.customer_mobile = "9876543210".into();
        assert!(validate_create(&dto).is_ok());
        dto.advance_amount = Some(5000.0);
        assert!(matches!(validate_create(&dto), Err(FormError::ExceedsBalance { .. })));
    }

    #[test]
    fn test_validate_dispatch_vehicle() {
        let mut req = DispatchRequest::new(vec!["o1".into()], DispatchMode::Vehicle);
        assert_eq!(validate_dispatch(&req), Err(FormError::Required("Vehicle number")));
        req.vehicle_number = Some("MH11 AB 1234".into());
        req.driver_name = Some("Suresh".into());
        req.driver_mobile = Some("12345".into());
        assert_eq!(
            validate_dispatch(&req),
            Err(FormError::InvalidMobile("Driver mobile"))
        );
        req.driver_mobile = Some("9876543210".into());
        assert!(validate_dispatch(&req).is_ok());
    }

    #[test]
    fn test_validate_dispatch_courier() {
        let mut req = DispatchRequest::new(vec!["o1".into()], DispatchMode::Courier);
        req.courier_name = Some("DTDC".into());
        assert_eq!(validate_dispatch(&req), Err(FormError::Required("Tracking id")));
        req.courier_tracking_id = Some("D1".into());
        assert!(validate_dispatch(&req).is_ok());
        assert_eq!(
            validate_dispatch(&DispatchRequest::new(vec![], DispatchMode::Courier)),
            Err(FormError::NoOrders)
        );
    }

    fn dispatched_order() -> AgriSalesOrder {
        AgriSalesOrder {
            id: "o1".into(),
            order_number: "ASO-1".into(),
            quantity: 10.0,
            returned_quantity: 4.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_complete() {
        let orders = vec![dispatched_order()];
        let mut req = CompleteOrderRequest {
            order_ids: vec!["o1".into()],
            ..Default::default()
        };
        assert!(validate_complete(&req, &orders).is_ok());
        req.return_quantities.insert("o1".into(), 2.0);
        assert_eq!(
            validate_complete(&req, &orders),
            Err(FormError::Required("Return reason"))
        );
        req.return_reason = Some("Damaged bags".into());
        assert!(validate_complete(&req, &orders).is_ok());
        req.return_quantities.insert("o1".into(), 11.0);
        assert!(matches!(
            validate_complete(&req, &orders),
            Err(FormError::ExceedsQuantity { .. })
        ));
    }

    #[test]
    fn test_validate_sales_return() {
        let order = dispatched_order();
        let mut req = SalesReturnRequest {
            return_quantity: 7.0,
            ..Default::default()
        };
        assert!(matches!(
            validate_sales_return(&req, &order),
            Err(FormError::ExceedsQuantity { .. })
        ));
        req.return_quantity = 6.0;
        assert!(validate_sales_return(&req, &order).is_ok());
        req.payment_adjustments = Some(vec![PaymentAdjustment {
            amount: 300.0,
            adjustment_type: AdjustmentType::Refund,
            reason: String::new(),
            notes: None,
        }]);
        assert_eq!(
            validate_sales_return(&req, &order),
            Err(FormError::Required("Adjustment reason"))
        );
    }
}
