//! Probing of backend response envelopes.
//!
//! Endpoints do not agree on one envelope: success may be flagged as
//! `status: "Success"`, as `success: true`, or only by the presence of
//! `data`; payloads sit under `data.data`, under `data`, or at the root.
//! Every known variant is accepted here so callers never depend on a single
//! shape.

use super::list_query::Pagination;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// True when any of the known success conventions holds
pub fn is_success(body: &Value) -> bool {
    if let Some(status) = body.get("status").and_then(Value::as_str) {
        if status.eq_ignore_ascii_case("success") {
            return true;
        }
        if status.eq_ignore_ascii_case("error") || status.eq_ignore_ascii_case("failed") {
            return false;
        }
    }
    if let Some(flag) = body.get("success").and_then(Value::as_bool) {
        return flag;
    }
    body.get("data").is_some_and(|d| !d.is_null())
}

/// True only when the body carries an explicit failure flag.
/// Bodies without any flag are not failures.
pub fn is_failure(body: &Value) -> bool {
    let status_failed = body
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|s| s.eq_ignore_ascii_case("error") || s.eq_ignore_ascii_case("failed"));
    let success_false = body.get("success").and_then(Value::as_bool) == Some(false);
    status_failed || success_false
}

/// Innermost payload: `data.data`, then `data`, then the body itself
pub fn payload(body: &Value) -> &Value {
    match body.get("data") {
        Some(data) if !data.is_null() => match data.get("data") {
            Some(inner) if !inner.is_null() => inner,
            _ => data,
        },
        _ => body,
    }
}

/// First array found under one of `keys` in the payload.
/// A payload that is itself an array is returned as is.
pub fn extract_items(body: &Value, keys: &[&str]) -> Vec<Value> {
    let data = payload(body);
    if let Some(arr) = data.as_array() {
        return arr.clone();
    }
    for key in keys {
        if let Some(arr) = data.get(*key).and_then(Value::as_array) {
            return arr.clone();
        }
        if let Some(arr) = body.get(*key).and_then(Value::as_array) {
            return arr.clone();
        }
    }
    Vec::new()
}

fn read_usize(obj: &Value, keys: &[&str]) -> Option<usize> {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_u64))
        .map(|v| v as usize)
}

/// Pagination block in the payload or at the root; when none is present the
/// metadata is derived from the number of items received.
pub fn extract_pagination(body: &Value, page: usize, limit: usize, fallback_len: usize) -> Pagination {
    let block = [payload(body), body]
        .into_iter()
        .find_map(|v| v.get("pagination").filter(|p| p.is_object()));

    let Some(block) = block else {
        let total = read_usize(payload(body), &["total", "totalCount", "count"]).unwrap_or(fallback_len);
        return Pagination::from_total(total, page, limit);
    };

    let total = read_usize(block, &["total", "totalCount", "total_count"]).unwrap_or(fallback_len);
    let derived = Pagination::from_total(total, page, limit);
    let total_pages = read_usize(block, &["totalPages", "total_pages", "pages"])
        .unwrap_or(derived.total_pages)
        .max(1);
    let has_next_page = block
        .get("hasNextPage")
        .or_else(|| block.get("has_next_page"))
        .and_then(Value::as_bool)
        .unwrap_or(page < total_pages);

    Pagination {
        total,
        total_pages,
        has_next_page,
    }
}

/// One page of a list endpoint, typed.
/// Items that fail to deserialize are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T: DeserializeOwned> ListPage<T> {
    pub fn from_body(body: &Value, keys: &[&str], page: usize, limit: usize) -> Self {
        let items: Vec<T> = extract_items(body, keys)
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect();
        let pagination = extract_pagination(body, page, limit, items.len());
        Self { items, pagination }
    }
}

/// Single record from a detail response: the first object under one of
/// `keys` in the payload, otherwise the payload itself
pub fn extract_record<T: DeserializeOwned>(body: &Value, keys: &[&str]) -> Option<T> {
    let data = payload(body);
    let candidate = keys
        .iter()
        .find_map(|k| data.get(*k).filter(|v| v.is_object()))
        .unwrap_or(data);
    serde_json::from_value(candidate.clone()).ok()
}

/// Backend-supplied error text, if any
pub fn error_message(body: &Value) -> Option<String> {
    let candidates = [
        body.get("message"),
        body.get("error"),
        body.get("data").and_then(|d| d.get("message")),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Message shown to the operator: backend text, then transport text, then
/// the caller's fallback
pub fn user_message(body: Option<&Value>, transport: Option<&str>, fallback: &str) -> String {
    body.and_then(error_message)
        .or_else(|| {
            transport
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| fallback.to_string())
}

/// URL of an uploaded file
pub fn extract_media_url(body: &Value) -> Option<String> {
    let candidates = [
        body.get("data").and_then(|d| d.get("data")).and_then(|d| d.get("media_url")),
        body.get("data").and_then(|d| d.get("media_url")),
        body.get("media_url"),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_failure_needs_explicit_flag() {
        assert!(is_failure(&json!({"success": false})));
        assert!(is_failure(&json!({"status": "Error", "message": "x"})));
        assert!(!is_failure(&json!({"message": "done"})));
        assert!(!is_failure(&json!({"status": "Success"})));
    }

    #[test]
    fn test_success_variants() {
        assert!(is_success(&json!({"status": "Success", "data": null})));
        assert!(is_success(&json!({"success": true})));
        assert!(is_success(&json!({"data": {"items": []}})));
        assert!(!is_success(&json!({"success": false, "data": {}})));
        assert!(!is_success(&json!({"status": "Error", "data": {}})));
        assert!(!is_success(&json!({"message": "boom"})));
    }

    #[test]
    fn test_items_from_nested_data() {
        let body = json!({"data": {"data": {"customers": [{"name": "A"}, {"name": "B"}]}}});
        assert_eq!(extract_items(&body, &["customers"]).len(), 2);
    }

    #[test]
    fn test_items_from_single_data_level() {
        let body = json!({"data": {"farmers": [{"name": "A"}]}});
        assert_eq!(extract_items(&body, &["leads", "farmers"]).len(), 1);
    }

    #[test]
    fn test_items_when_payload_is_array() {
        let body = json!({"data": [{"name": "A"}]});
        assert_eq!(extract_items(&body, &["anything"]).len(), 1);
    }

    #[test]
    fn test_items_missing_key() {
        let body = json!({"data": {"other": []}});
        assert!(extract_items(&body, &["leads"]).is_empty());
    }

    #[test]
    fn test_pagination_block() {
        let body = json!({"data": {"farmers": [], "pagination": {"total": 120, "totalPages": 3, "hasNextPage": true}}});
        let p = extract_pagination(&body, 1, 50, 0);
        assert_eq!(p.total, 120);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next_page);
    }

    #[test]
    fn test_pagination_derived_when_missing() {
        let body = json!({"data": {"leads": [1, 2, 3]}});
        let p = extract_pagination(&body, 1, 50, 3);
        assert_eq!(p.total, 3);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next_page);
    }

    #[test]
    fn test_record_wrapped_or_bare() {
        #[derive(serde::Deserialize)]
        struct Named {
            name: String,
        }
        let wrapped = json!({"success": true, "data": {"order": {"name": "A-17"}}});
        let bare = json!({"data": {"name": "A-18"}});
        let named: Named = extract_record(&wrapped, &["order"]).unwrap();
        assert_eq!(named.name, "A-17");
        let named: Named = extract_record(&bare, &["order"]).unwrap();
        assert_eq!(named.name, "A-18");
        assert!(extract_record::<Named>(&json!({"data": {"order": 5}}), &["order"]).is_none());
    }

    #[test]
    fn test_user_message_preference() {
        let body = json!({"message": "Order already dispatched"});
        assert_eq!(
            user_message(Some(&body), Some("HTTP 400"), "Failed"),
            "Order already dispatched"
        );
        assert_eq!(user_message(Some(&json!({})), Some("HTTP 500"), "Failed"), "HTTP 500");
        assert_eq!(user_message(None, None, "Failed"), "Failed");
    }

    #[test]
    fn test_media_url_variants() {
        assert_eq!(
            extract_media_url(&json!({"data": {"data": {"media_url": "a"}}})).as_deref(),
            Some("a")
        );
        assert_eq!(
            extract_media_url(&json!({"data": {"media_url": "b"}})).as_deref(),
            Some("b")
        );
        assert_eq!(extract_media_url(&json!({"data": {}})), None);
    }
}
