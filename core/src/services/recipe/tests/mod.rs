//! Tests for the recipe catalogue service

#[cfg(test)]
mod service_tests;
