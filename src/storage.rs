use crate::config::Inventory;
use crate::error::{RegistryError, Result};
use crate::model::{sample_inventory, Car, CarFields};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

const ID_LEN: usize = 8;

#[async_trait]
pub trait CarStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Car>>;
    async fn get(&self, id: &str) -> Result<Car>;
    async fn create(&self, fields: CarFields) -> Result<Car>;
    async fn update(&self, id: &str, fields: CarFields) -> Result<Car>;
    /// Removes the car and returns it.
    async fn delete(&self, id: &str) -> Result<Car>;
    async fn len(&self) -> usize;
}

/// Registry kept in process memory behind a single lock. Every operation
/// holds the lock for its whole duration.
#[derive(Default)]
pub struct MemoryStore {
    cars: Arc<RwLock<Vec<Car>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            cars: Arc::new(RwLock::new(cars)),
        }
    }

    pub fn sample() -> Self {
        Self::with_cars(sample_inventory())
    }
}

fn generate_id(existing: &[Car]) -> String {
    loop {
        let mut id = uuid::Uuid::new_v4().simple().to_string();
        id.truncate(ID_LEN);
        if !existing.iter().any(|car| car.id == id) {
            return id;
        }
    }
}

#[async_trait]
impl CarStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Car>> {
        Ok(self.cars.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Car> {
        self.cars
            .read()
            .await
            .iter()
            .find(|car| car.id == id)
            .cloned()
            .ok_or_else(|| RegistryError::CarNotFound(id.to_string()))
    }

    async fn create(&self, fields: CarFields) -> Result<Car> {
        let mut cars = self.cars.write().await;
        let car = Car::from_fields(generate_id(&cars), fields);
        cars.push(car.clone());
        Ok(car)
    }

    async fn update(&self, id: &str, fields: CarFields) -> Result<Car> {
        let mut cars = self.cars.write().await;
        let car = cars
            .iter_mut()
            .find(|car| car.id == id)
            .ok_or_else(|| RegistryError::CarNotFound(id.to_string()))?;
        car.replace_fields(fields);
        Ok(car.clone())
    }

    async fn delete(&self, id: &str) -> Result<Car> {
        let mut cars = self.cars.write().await;
        match cars.iter().position(|car| car.id == id) {
            Some(index) => Ok(cars.remove(index)),
            None => Err(RegistryError::CarNotFound(id.to_string())),
        }
    }

    async fn len(&self) -> usize {
        self.cars.read().await.len()
    }
}

pub fn create_store(inventory: Inventory) -> Arc<dyn CarStore> {
    match inventory {
        Inventory::Sample => Arc::new(MemoryStore::sample()),
        Inventory::Empty => Arc::new(MemoryStore::new()),
    }
}
