//! Custom assertion macros and utilities
//!
//! Provides assertion macros for the `{"errors": [...]}` response shape.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a result is an error matching a pattern
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $pattern:pat) => {
        match $result {
            Err($pattern) => {}
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => panic!("Expected different error variant, got: {:?}", e),
        }
    };
}

/// Assert a response carries exactly one error entry with the given message
#[macro_export]
macro_rules! assert_single_error {
    ($response:expr, $status:expr, $msg:expr) => {
        pretty_assertions::assert_eq!($response.status, $status);
        pretty_assertions::assert_eq!(
            $response.body,
            serde_json::json!({ "errors": [{ "msg": $msg }] })
        );
    };
}
