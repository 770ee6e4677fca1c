//! Brokers module - domain models, services, and traits.

mod broker_model;
mod broker_service;
mod broker_traits;

pub use broker_model::{Broker, NewBroker};
pub use broker_service::BrokerService;
pub use broker_traits::{BrokerRepositoryTrait, BrokerServiceTrait};
