use std::collections::HashSet;

use crate::money::format_grouped;
use crate::product::Product;

/// Scalar aggregates shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub total_products: usize,
    pub total_value: f64,
    pub out_of_stock: usize,
    pub categories: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl Stats {
    pub fn from_products(products: &[Product]) -> Self {
        let total_value = products.iter().map(|p| p.value.amount()).sum();
        let out_of_stock = products.iter().filter(|p| p.is_out_of_stock()).count();
        // Case-sensitive and untrimmed: "Tools" and "tools " are two categories.
        let categories = products
            .iter()
            .map(|p| p.category.as_str())
            .collect::<HashSet<_>>()
            .len();
        Self {
            total_products: products.len(),
            total_value,
            out_of_stock,
            categories,
        }
    }

    /// Cards in display order.
    pub fn cards(&self) -> [StatCard; 4] {
        [
            StatCard {
                label: "Total Products",
                value: self.total_products.to_string(),
            },
            StatCard {
                label: "Total Store Value",
                value: format_grouped(self.total_value, 3),
            },
            StatCard {
                label: "Out of Stock",
                value: self.out_of_stock.to_string(),
            },
            StatCard {
                label: "No. of Categories",
                value: self.categories.to_string(),
            },
        ]
    }
}
