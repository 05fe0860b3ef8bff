//! Application services — one use-case struct per aggregate.

pub mod company_service;
