//! Car domain entity
//!
//! A single vehicle listing. Cars are built once from static data at startup
//! and never change afterwards.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

/// Largest magnitude an `f64` can hold while every integer below it stays exact
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Identifier of a car within its collection
///
/// Fixture data may use either numeric or string ids, so both are accepted
/// and written back in the same form. Any JSON number is a valid id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CarId {
    Number(Number),
    Text(String),
}

impl std::fmt::Display for CarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarId::Number(n) => write!(f, "{}", n),
            CarId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for CarId {
    fn from(id: u64) -> Self {
        Self::Number(Number::from(id))
    }
}

impl From<&str> for CarId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// Listing price
///
/// Whole amounts serialize as JSON integers (`21000`), fractional amounts as
/// JSON floats (`33499.99`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    fn is_whole(&self) -> bool {
        self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_INTEGER
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Self(f64::from(amount))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Price)
    }
}

/// Body style of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarType {
    #[serde(rename = "SUV")]
    Suv,
    Sedan,
    Sports,
    Truck,
    Electric,
}

impl std::fmt::Display for CarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarType::Suv => write!(f, "SUV"),
            CarType::Sedan => write!(f, "Sedan"),
            CarType::Sports => write!(f, "Sports"),
            CarType::Truck => write!(f, "Truck"),
            CarType::Electric => write!(f, "Electric"),
        }
    }
}

impl std::str::FromStr for CarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "suv" => Ok(CarType::Suv),
            "sedan" => Ok(CarType::Sedan),
            "sports" => Ok(CarType::Sports),
            "truck" => Ok(CarType::Truck),
            "electric" => Ok(CarType::Electric),
            _ => Err(format!("Unknown car type: {}", s)),
        }
    }
}

/// A vehicle listing
///
/// `id`, `make`, `model`, `year` and `price` are always present. The
/// descriptive fields are optional in the type, but a loaded data set must
/// use them uniformly (see [`CarShape`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Car {
    pub id: CarId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: Price,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub car_type: Option<CarType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(
        rename = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl Car {
    /// Create a car with only the core fields set
    pub fn new(
        id: impl Into<CarId>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        price: impl Into<Price>,
    ) -> Self {
        Self {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            year,
            price: price.into(),
            car_type: None,
            color: None,
            mileage: None,
            description: None,
            features: None,
            image_url: None,
        }
    }

    /// Which optional fields this record carries
    pub fn shape(&self) -> CarShape {
        CarShape {
            car_type: self.car_type.is_some(),
            color: self.color.is_some(),
            mileage: self.mileage.is_some(),
            description: self.description.is_some(),
            features: self.features.is_some(),
            image_url: self.image_url.is_some(),
        }
    }
}

/// The set of optional descriptive fields a record carries
///
/// Every record in a loaded data set must have the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarShape {
    pub car_type: bool,
    pub color: bool,
    pub mileage: bool,
    pub description: bool,
    pub features: bool,
    pub image_url: bool,
}

impl CarShape {
    /// JSON names of the optional fields present
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            (self.car_type, "type"),
            (self.color, "color"),
            (self.mileage, "mileage"),
            (self.description, "description"),
            (self.features, "features"),
            (self.image_url, "imageUrl"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}

impl std::fmt::Display for CarShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.field_names();
        if names.is_empty() {
            write!(f, "core fields only")
        } else {
            write!(f, "core fields + {}", names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> Car {
        Car::new(1u64, "Toyota", "Corolla", 2022, 21000u32)
    }

    #[test]
    fn core_record_serializes_without_optional_fields() {
        let json = serde_json::to_string(&corolla()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"make":"Toyota","model":"Corolla","year":2022,"price":21000}"#
        );
    }

    #[test]
    fn fractional_price_keeps_cents() {
        let mut car = corolla();
        car.price = Price(33499.99);
        let value = serde_json::to_value(&car).unwrap();
        assert_eq!(value["price"], serde_json::json!(33499.99));
    }

    #[test]
    fn string_ids_round_trip_as_strings() {
        let car: Car = serde_json::from_str(
            r#"{"id":"d-1","make":"Honda","model":"Civic","year":2021,"price":19999.5}"#,
        )
        .unwrap();
        assert_eq!(car.id, CarId::Text("d-1".to_string()));
        assert_eq!(serde_json::to_value(&car).unwrap()["id"], "d-1");
    }

    #[test]
    fn descriptive_fields_use_storefront_names() {
        let car: Car = serde_json::from_str(
            r#"{
                "id": "d-2", "make": "Ford", "model": "Ranger", "year": 2020, "price": 30000,
                "type": "Truck", "color": "Blue", "mileage": 42000,
                "description": "Midsize pickup", "features": ["4x4"],
                "imageUrl": "https://example.com/ranger.jpg"
            }"#,
        )
        .unwrap();

        assert_eq!(car.car_type, Some(CarType::Truck));
        assert_eq!(car.image_url.as_deref(), Some("https://example.com/ranger.jpg"));

        let value = serde_json::to_value(&car).unwrap();
        assert_eq!(value["type"], "Truck");
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Car, _> = serde_json::from_str(
            r#"{"id":1,"make":"Kia","model":"Rio","year":2020,"price":1,"vin":"X"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_core_field_is_rejected() {
        let result: Result<Car, _> =
            serde_json::from_str(r#"{"id":1,"make":"Kia","model":"Rio","year":2020}"#);
        assert!(result.is_err());
    }

    #[test]
    fn suv_uses_uppercase_wire_name() {
        assert_eq!(serde_json::to_value(CarType::Suv).unwrap(), "SUV");
        assert_eq!("suv".parse::<CarType>().unwrap(), CarType::Suv);
        assert!("hatchback".parse::<CarType>().is_err());
    }

    #[test]
    fn any_json_number_is_an_id() {
        for raw in ["-1", "0", "1.5", "18446744073709551615"] {
            let json = format!(
                r#"{{"id":{},"make":"Kia","model":"Rio","year":2020,"price":1}}"#,
                raw
            );
            let car: Car = serde_json::from_str(&json).unwrap();
            assert!(matches!(car.id, CarId::Number(_)));
            assert_eq!(car.id.to_string(), raw);
        }
    }

    #[test]
    fn values_are_kept_as_given() {
        let car: Car = serde_json::from_str(
            r#"{"id":"","make":"","model":" ","year":1885,"price":-5}"#,
        )
        .unwrap();
        assert_eq!(car.year, 1885);
        assert_eq!(
            serde_json::to_string(&car).unwrap(),
            r#"{"id":"","make":"","model":" ","year":1885,"price":-5}"#
        );
    }

    #[test]
    fn shape_lists_present_optional_fields() {
        let mut car = corolla();
        assert_eq!(car.shape(), CarShape::default());
        assert_eq!(car.shape().to_string(), "core fields only");

        car.color = Some("Red".to_string());
        car.image_url = Some("https://example.com/a.jpg".to_string());
        assert_eq!(car.shape().field_names(), vec!["color", "imageUrl"]);
    }
}
