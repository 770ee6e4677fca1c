//! Investors module - domain models, services, and traits.

mod investor_model;
mod investor_service;
mod investor_traits;

pub use investor_model::{BrokerLink, Investor, NewInvestor};
pub use investor_service::InvestorService;
pub use investor_traits::{InvestorRepositoryTrait, InvestorServiceTrait};
