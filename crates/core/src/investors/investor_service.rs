use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use crate::errors::Result;

use super::investor_model::{Investor, NewInvestor};
use super::investor_traits::{InvestorRepositoryTrait, InvestorServiceTrait};

/// Thin CRUD service over the investor roster: validates input, mints ids,
/// and delegates persistence to the repository.
pub struct InvestorService {
    repository: Arc<dyn InvestorRepositoryTrait>,
}

impl InvestorService {
    pub fn new(repository: Arc<dyn InvestorRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl InvestorServiceTrait for InvestorService {
    fn get_investors(&self) -> Result<Vec<Investor>> {
        self.repository.get_investors()
    }

    async fn register_investor(&self, mut new_investor: NewInvestor) -> Result<Investor> {
        new_investor.validate()?;
        if new_investor.id.is_none() {
            new_investor.id = Some(Uuid::new_v4().to_string());
        }
        debug!(
            "Registering investor '{}' with principal {} USD",
            new_investor.name, new_investor.invested_amount
        );
        self.repository.create_investor(new_investor).await
    }

    async fn update_investor(&self, investor: Investor) -> Result<Investor> {
        let as_input = NewInvestor {
            id: Some(investor.id.clone()),
            name: investor.name.clone(),
            invested_amount: investor.invested_amount,
            aed_conversion_rate: investor.aed_conversion_rate,
            roi_range: investor.roi_range,
            broker_link: investor.broker_link.clone(),
        };
        as_input.validate()?;
        self.repository.update_investor(investor).await
    }

    async fn deactivate_investor(&self, investor_id: &str) -> Result<Investor> {
        debug!("Deactivating investor {}", investor_id);
        self.repository.deactivate_investor(investor_id).await
    }
}
