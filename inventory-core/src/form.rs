use thiserror::Error;

use crate::money::Money;
use crate::product::Product;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("price is not a valid amount: {0:?}")]
    InvalidPrice(String),
    #[error("value is not a valid amount: {0:?}")]
    InvalidValue(String),
    #[error("quantity must be a whole number: {0:?}")]
    InvalidQuantity(String),
}

/// Editable fields of the product editor, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Price,
    Value,
    Quantity,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Category,
        FormField::Price,
        FormField::Value,
        FormField::Quantity,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FormField::Category => "category",
            FormField::Price => "price",
            FormField::Value => "value",
            FormField::Quantity => "quantity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Category => "Category",
            FormField::Price => "Price",
            FormField::Value => "Value",
            FormField::Quantity => "Quantity",
        }
    }
}

/// Raw text held by the editor inputs. Parsed into typed fields only on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub category: String,
    pub price: String,
    pub value: String,
    pub quantity: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            category: String::new(),
            price: "0".into(),
            value: "0".into(),
            quantity: "0".into(),
        }
    }
}

impl ProductForm {
    /// Seed from the selected product, or the zero-valued default when none.
    pub fn from_product(product: Option<&Product>) -> Self {
        match product {
            Some(p) => Self {
                category: p.category.clone(),
                price: p.price.money().plain(),
                value: p.value.money().plain(),
                quantity: p.quantity.to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Category => &self.category,
            FormField::Price => &self.price,
            FormField::Value => &self.value,
            FormField::Quantity => &self.quantity,
        }
    }

    pub fn set_field(&mut self, field: FormField, text: String) {
        match field {
            FormField::Category => self.category = text,
            FormField::Price => self.price = text,
            FormField::Value => self.value = text,
            FormField::Quantity => self.quantity = text,
        }
    }

    /// Build the replacement record. Identity, name and stock come from `base`.
    /// An amount left unchanged keeps its served text.
    pub fn apply(&self, base: &Product) -> Result<Product, FormError> {
        let price = Money::parse_strict(&self.price)
            .ok_or_else(|| FormError::InvalidPrice(self.price.clone()))?;
        let value = Money::parse_strict(&self.value)
            .ok_or_else(|| FormError::InvalidValue(self.value.clone()))?;
        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidQuantity(self.quantity.clone()))?;

        Ok(Product {
            category: self.category.clone(),
            price: base.price.clone().with_money(price),
            value: base.value.clone().with_money(value),
            quantity,
            ..base.clone()
        })
    }
}
