//! Tests for user management service

#[cfg(test)]
mod service_tests;
