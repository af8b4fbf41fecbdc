//! HTTP API layer for the Plateful backend
//!
//! Exposes the domain services from `pf_core` over actix-web: route
//! handlers, the authentication middleware stack, request/response DTOs,
//! and the wire-level error contract.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
