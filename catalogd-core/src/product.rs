//! Product payload types and validation rules
//!
//! Two wire shapes over the same fields: a create payload with required
//! name and price, and a partial update payload where only the fields
//! present in the body are applied.

use serde::Deserialize;

use crate::validation::ValidationError;

/// Maximum length for product names
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length for product descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Payload for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// Defaults to 0 when unspecified.
    #[serde(default)]
    pub quantity: i32,
}

impl CreateProduct {
    /// Check all field constraints.
    ///
    /// # Rules
    /// - `name`: 1..=100 characters
    /// - `description`: at most 500 characters
    /// - `price`: strictly greater than 0
    /// - `quantity`: not negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        validate_price(self.price)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }
}

/// Payload for partially updating a product.
///
/// Absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

impl UpdateProduct {
    /// Check constraints on the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Empty { field: "name" });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description",
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::NotPositive { field: "price" });
    }
    Ok(())
}

fn validate_quantity(quantity: i32) -> Result<(), ValidationError> {
    if quantity < 0 {
        return Err(ValidationError::Negative { field: "quantity" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> CreateProduct {
        CreateProduct {
            name: name.to_owned(),
            description: Some("A high-end laptop".to_owned()),
            price: 1500.0,
            quantity: 10,
        }
    }

    #[test]
    fn valid_create_payload() {
        assert!(draft("Laptop").validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let err = draft("").validate().unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn name_length_boundary() {
        assert!(draft(&"a".repeat(100)).validate().is_ok());

        let err = draft(&"a".repeat(101)).validate().unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, .. }));
    }

    #[test]
    fn description_length_boundary() {
        let mut payload = draft("Laptop");
        payload.description = Some("d".repeat(500));
        assert!(payload.validate().is_ok());

        payload.description = Some("d".repeat(501));
        let err = payload.validate().unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 500, .. }));
    }

    #[test]
    fn missing_description_is_ok() {
        let mut payload = draft("Laptop");
        payload.description = None;
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut payload = draft("Laptop");
        payload.price = 0.0;
        assert!(matches!(
            payload.validate().unwrap_err(),
            ValidationError::NotPositive { field: "price" }
        ));

        payload.price = -1.5;
        assert!(payload.validate().is_err());

        payload.price = f64::NAN;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejects_negative_quantity() {
        let mut payload = draft("Laptop");
        payload.quantity = -1;
        assert!(matches!(
            payload.validate().unwrap_err(),
            ValidationError::Negative { field: "quantity" }
        ));

        payload.quantity = 0;
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn quantity_defaults_to_zero() {
        let payload: CreateProduct =
            serde_json::from_str(r#"{"name": "Laptop", "price": 1500.0}"#).unwrap();
        assert_eq!(payload.quantity, 0);
        assert!(payload.description.is_none());
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(UpdateProduct::default().validate().is_ok());
    }

    #[test]
    fn patch_checks_only_present_fields() {
        let patch = UpdateProduct {
            quantity: Some(5),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());

        let patch = UpdateProduct {
            price: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            patch.validate().unwrap_err(),
            ValidationError::NotPositive { field: "price" }
        ));
    }
}
