//! Domain layer - checkout flow rules, free of HTTP and vendor concerns.

pub mod checkout;
