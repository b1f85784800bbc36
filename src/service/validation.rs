//! Request-body validation: raw JSON in, typed drafts out. Failures carry
//! per-field messages so callers see every broken field at once. Unknown
//! keys are ignored.

use crate::error::{AppError, FieldErrors};
use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Validated Customer fields, ready to persist.
#[derive(Clone, Debug)]
pub struct CustomerDraft {
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Validated Product fields.
#[derive(Clone, Debug)]
pub struct ProductDraft {
    pub product_name: String,
    pub price: f64,
}

/// Validated Order fields. The foreign key is carried explicitly; whether it
/// resolves to a real customer is decided at persistence time.
#[derive(Clone, Debug)]
pub struct OrderDraft {
    pub order_date: NaiveDate,
    pub customer_id: i64,
}

pub fn customer_draft(body: &Value) -> Result<CustomerDraft, AppError> {
    let map = object(body)?;
    let mut errors = FieldErrors::new();
    let name = required_string(map, "name", &mut errors);
    let email = optional_string(map, "email", &mut errors);
    let address = optional_string(map, "address", &mut errors);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(CustomerDraft {
        name: name.unwrap_or_default(),
        email,
        address,
    })
}

pub fn product_draft(body: &Value) -> Result<ProductDraft, AppError> {
    let map = object(body)?;
    let mut errors = FieldErrors::new();
    let product_name = required_string(map, "product_name", &mut errors);
    let price = required_number(map, "price", &mut errors);
    if let Some(p) = price {
        if p < 0.0 {
            push(&mut errors, "price", "price must not be negative");
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(ProductDraft {
        product_name: product_name.unwrap_or_default(),
        price: price.unwrap_or_default(),
    })
}

pub fn order_draft(body: &Value) -> Result<OrderDraft, AppError> {
    let map = object(body)?;
    let mut errors = FieldErrors::new();
    let order_date = required_date(map, "order_date", &mut errors);
    let customer_id = required_integer(map, "customer_id", &mut errors);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(OrderDraft {
        order_date: order_date.unwrap_or_default(),
        customer_id: customer_id.unwrap_or_default(),
    })
}

fn object(body: &Value) -> Result<&Map<String, Value>, AppError> {
    body.as_object()
        .ok_or_else(|| AppError::BadRequest("body must be a JSON object".into()))
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

fn required_string(map: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => {
            push(errors, field, &format!("{} is required", field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            push(errors, field, &format!("{} must be a string", field));
            None
        }
    }
}

/// Absent and null are both "not provided".
fn optional_string(map: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            push(errors, field, &format!("{} must be a string", field));
            None
        }
    }
}

fn required_number(map: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<f64> {
    match map.get(field) {
        None | Some(Value::Null) => {
            push(errors, field, &format!("{} is required", field));
            None
        }
        Some(Value::Number(n)) => n.as_f64().or_else(|| {
            push(errors, field, &format!("{} must be a number", field));
            None
        }),
        Some(_) => {
            push(errors, field, &format!("{} must be a number", field));
            None
        }
    }
}

fn required_integer(map: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<i64> {
    match map.get(field) {
        None | Some(Value::Null) => {
            push(errors, field, &format!("{} is required", field));
            None
        }
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            push(errors, field, &format!("{} must be an integer", field));
            None
        }),
        Some(_) => {
            push(errors, field, &format!("{} must be an integer", field));
            None
        }
    }
}

/// Dates arrive as `YYYY-MM-DD` strings.
fn required_date(map: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<NaiveDate> {
    let raw = required_string(map, field, errors)?;
    match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            push(errors, field, &format!("{} must be a YYYY-MM-DD date", field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_messages(err: AppError, field: &str) -> Vec<String> {
        match err {
            AppError::Validation(map) => map.get(field).cloned().unwrap_or_default(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn customer_full_payload() {
        let draft = customer_draft(&json!({
            "name": "Ann",
            "email": "ann@example.com",
            "address": "1 Main St"
        }))
        .unwrap();
        assert_eq!(draft.name, "Ann");
        assert_eq!(draft.email.as_deref(), Some("ann@example.com"));
        assert_eq!(draft.address.as_deref(), Some("1 Main St"));
    }

    #[test]
    fn customer_optionals_may_be_absent_or_null() {
        let draft = customer_draft(&json!({ "name": "Ann", "email": null })).unwrap();
        assert!(draft.email.is_none());
        assert!(draft.address.is_none());
    }

    #[test]
    fn customer_missing_name() {
        let err = customer_draft(&json!({ "email": "ann@example.com" })).unwrap_err();
        assert_eq!(field_messages(err, "name"), vec!["name is required"]);
    }

    #[test]
    fn customer_wrong_types_reported_per_field() {
        let err = customer_draft(&json!({ "name": 7, "address": [] })).unwrap_err();
        match err {
            AppError::Validation(map) => {
                assert_eq!(map["name"], vec!["name must be a string"]);
                assert_eq!(map["address"], vec!["address must be a string"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn customer_extra_keys_ignored() {
        let draft = customer_draft(&json!({ "name": "Ann", "orders": [1, 2] })).unwrap();
        assert_eq!(draft.name, "Ann");
    }

    #[test]
    fn non_object_body_rejected() {
        let err = customer_draft(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn product_valid() {
        let draft = product_draft(&json!({ "product_name": "Widget", "price": 5.0 })).unwrap();
        assert_eq!(draft.product_name, "Widget");
        assert_eq!(draft.price, 5.0);
    }

    #[test]
    fn product_price_zero_allowed() {
        assert!(product_draft(&json!({ "product_name": "Sample", "price": 0 })).is_ok());
    }

    #[test]
    fn product_negative_price() {
        let err = product_draft(&json!({ "product_name": "W", "price": -1.5 })).unwrap_err();
        assert_eq!(field_messages(err, "price"), vec!["price must not be negative"]);
    }

    #[test]
    fn product_price_not_a_number() {
        let err = product_draft(&json!({ "product_name": "W", "price": "free" })).unwrap_err();
        assert_eq!(field_messages(err, "price"), vec!["price must be a number"]);
    }

    #[test]
    fn product_both_fields_missing() {
        let err = product_draft(&json!({})).unwrap_err();
        match err {
            AppError::Validation(map) => {
                assert_eq!(map.len(), 2);
                assert!(map.contains_key("product_name"));
                assert!(map.contains_key("price"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn order_valid() {
        let draft =
            order_draft(&json!({ "order_date": "2024-01-01", "customer_id": 1 })).unwrap();
        assert_eq!(draft.order_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(draft.customer_id, 1);
    }

    #[test]
    fn order_bad_date() {
        let err =
            order_draft(&json!({ "order_date": "01/01/2024", "customer_id": 1 })).unwrap_err();
        assert_eq!(
            field_messages(err, "order_date"),
            vec!["order_date must be a YYYY-MM-DD date"]
        );
    }

    #[test]
    fn order_fractional_customer_id() {
        let err =
            order_draft(&json!({ "order_date": "2024-01-01", "customer_id": 1.5 })).unwrap_err();
        assert_eq!(
            field_messages(err, "customer_id"),
            vec!["customer_id must be an integer"]
        );
    }

    #[test]
    fn order_product_list_in_payload_is_ignored() {
        let draft = order_draft(&json!({
            "order_date": "2024-01-01",
            "customer_id": 1,
            "products": [1, 2, 3]
        }))
        .unwrap();
        assert_eq!(draft.customer_id, 1);
    }
}
