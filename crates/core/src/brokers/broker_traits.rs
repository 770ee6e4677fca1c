use async_trait::async_trait;

use crate::brokers::broker_model::{Broker, NewBroker};
use crate::errors::Result;

/// Trait for broker repository operations.
#[async_trait]
pub trait BrokerRepositoryTrait: Send + Sync {
    fn get_broker(&self, broker_id: &str) -> Result<Broker>;
    fn get_brokers(&self) -> Result<Vec<Broker>>;
    async fn create_broker(&self, new_broker: NewBroker) -> Result<Broker>;
    async fn update_broker(&self, broker: Broker) -> Result<Broker>;
    async fn deactivate_broker(&self, broker_id: &str) -> Result<Broker>;
}

/// Trait for broker service operations.
#[async_trait]
pub trait BrokerServiceTrait: Send + Sync {
    fn get_brokers(&self) -> Result<Vec<Broker>>;
    async fn register_broker(&self, new_broker: NewBroker) -> Result<Broker>;
    async fn update_broker(&self, broker: Broker) -> Result<Broker>;
    async fn deactivate_broker(&self, broker_id: &str) -> Result<Broker>;
}
