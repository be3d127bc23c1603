//! Integration test suite. Tests run against a live server:
//! cargo test --test integration -- --ignored

mod api_tests;
