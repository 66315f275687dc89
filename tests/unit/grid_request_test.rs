// Grid request validation tests.
//
// Negative offsets and lengths are rejected before the composer runs; the
// composer itself never clamps. The -1 length sentinel ("all rows") is the
// only negative value allowed through.

use actix_web::error::ResponseError;
use shopilent::core::datatable::{DataTableRequest, SearchSpec, LENGTH_ALL};

#[test]
fn negative_start_is_rejected_with_code() {
    let request = DataTableRequest {
        start: -1,
        ..DataTableRequest::default()
    };
    let err = request.validate().unwrap_err();
    assert_eq!(err.code(), Some("Grid.NegativeStart"));
    assert_eq!(err.status_code().as_u16(), 400);
    assert!(err.fields().unwrap().contains_key("start"));
}

#[test]
fn negative_length_is_rejected_with_code() {
    let request = DataTableRequest {
        length: -5,
        ..DataTableRequest::default()
    };
    let err = request.validate().unwrap_err();
    assert_eq!(err.code(), Some("Grid.NegativeLength"));
    assert!(err.fields().unwrap().contains_key("length"));
}

#[test]
fn length_sentinel_is_accepted() {
    let request = DataTableRequest {
        length: LENGTH_ALL,
        ..DataTableRequest::default()
    };
    assert!(request.validate().is_ok());
}

#[test]
fn zero_start_and_zero_length_are_valid() {
    let request = DataTableRequest {
        start: 0,
        length: 0,
        ..DataTableRequest::default()
    };
    assert!(request.validate().is_ok());
}

#[test]
fn search_term_trims_and_drops_empty() {
    let mut request = DataTableRequest::default();
    assert_eq!(request.search_term(), None);

    request.search = SearchSpec {
        value: "  shirt  ".to_string(),
        regex: false,
    };
    assert_eq!(request.search_term(), Some("shirt"));

    request.search.value = "   ".to_string();
    assert_eq!(request.search_term(), None);
}

#[test]
fn request_deserializes_from_datatables_json() {
    let json = r#"{
        "draw": 3,
        "start": 20,
        "length": 10,
        "search": { "value": "usb", "regex": false },
        "columns": [
            { "data": "name", "name": "", "searchable": true, "orderable": true },
            { "data": "basePrice", "name": "", "searchable": false, "orderable": true }
        ],
        "order": [ { "column": 1, "dir": "desc" } ]
    }"#;
    let request: DataTableRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.draw, 3);
    assert_eq!(request.start, 20);
    assert_eq!(request.columns.len(), 2);
    assert_eq!(request.order[0].column, 1);
    assert!(request.validate().is_ok());
}

#[test]
fn missing_fields_take_defaults() {
    let request: DataTableRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(request.draw, 0);
    assert_eq!(request.start, 0);
    assert_eq!(request.length, 10);
    assert!(request.order.is_empty());
    assert!(request.validate().is_ok());
}
