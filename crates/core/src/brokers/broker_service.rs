use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use crate::errors::Result;

use super::broker_model::{Broker, NewBroker};
use super::broker_traits::{BrokerRepositoryTrait, BrokerServiceTrait};

pub struct BrokerService {
    repository: Arc<dyn BrokerRepositoryTrait>,
}

impl BrokerService {
    pub fn new(repository: Arc<dyn BrokerRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BrokerServiceTrait for BrokerService {
    fn get_brokers(&self) -> Result<Vec<Broker>> {
        self.repository.get_brokers()
    }

    async fn register_broker(&self, mut new_broker: NewBroker) -> Result<Broker> {
        new_broker.validate()?;
        if new_broker.id.is_none() {
            new_broker.id = Some(Uuid::new_v4().to_string());
        }
        debug!("Registering broker '{}'", new_broker.name);
        self.repository.create_broker(new_broker).await
    }

    async fn update_broker(&self, broker: Broker) -> Result<Broker> {
        broker.commission_range.validate("commissionRange")?;
        self.repository.update_broker(broker).await
    }

    async fn deactivate_broker(&self, broker_id: &str) -> Result<Broker> {
        debug!("Deactivating broker {}", broker_id);
        self.repository.deactivate_broker(broker_id).await
    }
}
