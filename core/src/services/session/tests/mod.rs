//! Tests for session service

#[cfg(test)]
mod service_tests;
