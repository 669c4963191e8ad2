use serde::{Deserialize, Serialize};

use crate::money::Amount;

/// Synthetic identity assigned when a record enters the in-memory list.
/// Survives edits; a stale id from an earlier fetch never matches a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u64);

/// A product record without identity: what the feed decodes and what the
/// name-keyed operations match against.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Amount,
    pub quantity: u32,
    pub value: Amount,
    /// `None` and `Some(0)` are distinct: only an explicit zero is out of stock.
    pub stock: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Amount,
    pub quantity: u32,
    pub value: Amount,
    pub stock: Option<i64>,
}

impl Product {
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            quantity: draft.quantity,
            value: draft.value,
            stock: draft.stock,
        }
    }

    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price.clone(),
            quantity: self.quantity,
            value: self.value.clone(),
            stock: self.stock,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == Some(0)
    }
}

/// The dashboard's product list. Owned by a single store; every mutation is
/// synchronous and local.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductList {
    items: Vec<Product>,
    next_id: u64,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_drafts(drafts: Vec<ProductDraft>) -> Self {
        let mut list = Self::new();
        list.replace_all(drafts);
        list
    }

    /// Replace the whole list (a successful fetch). Ids keep increasing across
    /// replacements so a stale id can never address a new record.
    pub fn replace_all(&mut self, drafts: Vec<ProductDraft>) {
        let mut items = Vec::with_capacity(drafts.len());
        for draft in drafts {
            items.push(Product::from_draft(ProductId(self.next_id), draft));
            self.next_id += 1;
        }
        self.items = items;
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every record whose name equals `name`, duplicates included.
    /// Returns how many were removed; an unknown name leaves the list untouched.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|p| p.name != name);
        before - self.items.len()
    }

    /// Overwrite every record whose name equals `updated.name`, duplicates
    /// included. Matched records keep their ids. Returns how many were replaced.
    pub fn replace_by_name(&mut self, updated: &ProductDraft) -> usize {
        let mut replaced = 0;
        for slot in self.items.iter_mut().filter(|p| p.name == updated.name) {
            *slot = Product::from_draft(slot.id, updated.clone());
            replaced += 1;
        }
        replaced
    }
}
