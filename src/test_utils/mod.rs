#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{assert_error_body, get_test_server, post_transaction};
