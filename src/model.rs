//! Car records and the payload clients send to create or replace them.

use serde::{Deserialize, Deserializer, Serialize};

/// A vehicle listing as stored and returned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub package: String,
    pub color: String,
    pub year: i32,
    pub category: String,
    pub mileage: u64,
    /// Price in the smallest currency unit.
    pub price: i64,
    pub id: String,
}

/// Client-supplied car fields for create and update.
///
/// Absent fields decode to their zero value. Unknown keys, `id` included, are
/// ignored: ids are always assigned or preserved by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarFields {
    #[serde(deserialize_with = "null_as_default")]
    pub make: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub package: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mileage: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
}

/// Explicit `null` decodes the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Car {
    pub fn from_fields(id: impl Into<String>, fields: CarFields) -> Self {
        Self {
            make: fields.make,
            model: fields.model,
            package: fields.package,
            color: fields.color,
            year: fields.year,
            category: fields.category,
            mileage: fields.mileage,
            price: fields.price,
            id: id.into(),
        }
    }

    /// Overwrites every field except `id`.
    pub fn replace_fields(&mut self, fields: CarFields) {
        let id = std::mem::take(&mut self.id);
        *self = Self::from_fields(id, fields);
    }

    pub fn fields(&self) -> CarFields {
        CarFields {
            make: self.make.clone(),
            model: self.model.clone(),
            package: self.package.clone(),
            color: self.color.clone(),
            year: self.year,
            category: self.category.clone(),
            mileage: self.mileage,
            price: self.price,
        }
    }
}

/// The inventory the service starts with unless configured empty.
pub fn sample_inventory() -> Vec<Car> {
    vec![
        Car {
            make: "Ford".to_string(),
            model: "F10".to_string(),
            package: "Base".to_string(),
            color: "Silver".to_string(),
            year: 2010,
            category: "Truck".to_string(),
            mileage: 120123,
            price: 1999900,
            id: "JHk290Xj".to_string(),
        },
        Car {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            package: "SE".to_string(),
            color: "White".to_string(),
            year: 2019,
            category: "Sedan".to_string(),
            mileage: 3999,
            price: 2899000,
            id: "fWl37la".to_string(),
        },
        Car {
            make: "Toyota".to_string(),
            model: "Rav4".to_string(),
            package: "XSE".to_string(),
            color: "Red".to_string(),
            year: 2018,
            category: "SUV".to_string(),
            mileage: 24001,
            price: 2275000,
            id: "1j3xjRllc".to_string(),
        },
        Car {
            make: "Ford".to_string(),
            model: "Bronco".to_string(),
            package: "Badlands".to_string(),
            color: "Burnt Orange".to_string(),
            year: 2022,
            category: "SUV".to_string(),
            mileage: 1,
            price: 4499000,
            id: "dku43920s".to_string(),
        },
    ]
}
