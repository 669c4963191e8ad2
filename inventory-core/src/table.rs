use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::product::Product;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Shape of the loading placeholder drawn instead of the grid body.
pub const SKELETON_COLUMNS: usize = 4;
pub const SKELETON_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Name,
    Category,
    Price,
    Quantity,
    Value,
    Actions,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Name,
        Column::Category,
        Column::Price,
        Column::Quantity,
        Column::Value,
        Column::Actions,
    ];

    /// Identifier shown in the column visibility menu.
    pub fn id(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Category => "category",
            Column::Price => "price",
            Column::Quantity => "quantity",
            Column::Value => "value",
            Column::Actions => "actions",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Category => "Category",
            Column::Price => "Price",
            Column::Quantity => "Quantity",
            Column::Value => "Value",
            Column::Actions => "",
        }
    }

    pub fn is_sortable(&self) -> bool {
        !matches!(self, Column::Actions)
    }

    /// Numeric columns are right-aligned and compared by amount.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Price | Column::Quantity | Column::Value)
    }

    /// Cell text for data columns; empty for the actions column.
    pub fn cell_text(&self, product: &Product) -> String {
        match self {
            Column::Name => product.name.clone(),
            Column::Category => product.category.clone(),
            Column::Price => product.price.text().to_string(),
            Column::Quantity => product.quantity.to_string(),
            Column::Value => product.value.text().to_string(),
            Column::Actions => String::new(),
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Column::Name => a.name.cmp(&b.name),
            Column::Category => a.category.cmp(&b.category),
            Column::Price => a
                .price
                .amount()
                .partial_cmp(&b.price.amount())
                .unwrap_or(Ordering::Equal),
            Column::Quantity => a.quantity.cmp(&b.quantity),
            Column::Value => a
                .value
                .amount()
                .partial_cmp(&b.value.amount())
                .unwrap_or(Ordering::Equal),
            Column::Actions => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: Column,
    pub direction: SortDirection,
}

/// Grid view state: sorting, name filter, hidden columns and current page.
/// The product list itself lives elsewhere; `row_model` projects it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    sorting: Vec<SortKey>,
    name_filter: String,
    hidden: BTreeSet<Column>,
    page_index: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sorting: Vec::new(),
            name_filter: String::new(),
            hidden: BTreeSet::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The rows for the current page plus pagination flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowModel {
    pub rows: Vec<Product>,
    pub filtered_count: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

impl TableState {
    pub fn sorting(&self) -> &[SortKey] {
        &self.sorting
    }

    pub fn sort_direction(&self, column: Column) -> Option<SortDirection> {
        self.sorting
            .iter()
            .find(|k| k.column == column)
            .map(|k| k.direction)
    }

    /// Header click: unsorted -> ascending -> descending -> unsorted.
    /// With `multi` the column joins (or cycles within) the existing sort;
    /// without it the column becomes the only sort key.
    pub fn toggle_sort(&mut self, column: Column, multi: bool) {
        if !column.is_sortable() {
            return;
        }
        let existing = self.sorting.iter().position(|k| k.column == column);
        let next = match existing.map(|i| self.sorting[i].direction) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };

        if multi {
            match (existing, next) {
                (Some(i), Some(direction)) => self.sorting[i].direction = direction,
                (Some(i), None) => {
                    self.sorting.remove(i);
                }
                (None, Some(direction)) => self.sorting.push(SortKey { column, direction }),
                (None, None) => {}
            }
        } else {
            self.sorting.clear();
            if let Some(direction) = next {
                self.sorting.push(SortKey { column, direction });
            }
        }
    }

    pub fn clear_sort(&mut self) {
        self.sorting.clear();
    }

    pub fn name_filter(&self) -> &str {
        &self.name_filter
    }

    /// A new filter always starts from the first page.
    pub fn set_name_filter(&mut self, value: impl Into<String>) {
        self.name_filter = value.into();
        self.page_index = 0;
    }

    pub fn is_visible(&self, column: Column) -> bool {
        !self.hidden.contains(&column)
    }

    pub fn set_visible(&mut self, column: Column, visible: bool) {
        if visible {
            self.hidden.remove(&column);
        } else {
            self.hidden.insert(column);
        }
    }

    pub fn toggle_visibility(&mut self, column: Column) {
        let visible = self.is_visible(column);
        self.set_visible(column, !visible);
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .iter()
            .copied()
            .filter(|c| self.is_visible(*c))
            .collect()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 0;
    }

    pub fn page_count(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.page_size)
    }

    /// Page index clamped to the available pages (the list can shrink under us).
    fn effective_page(&self, filtered_count: usize) -> usize {
        self.page_index
            .min(self.page_count(filtered_count).saturating_sub(1))
    }

    pub fn next_page(&mut self, filtered_count: usize) {
        let current = self.effective_page(filtered_count);
        if current + 1 < self.page_count(filtered_count) {
            self.page_index = current + 1;
        } else {
            self.page_index = current;
        }
    }

    pub fn previous_page(&mut self, filtered_count: usize) {
        self.page_index = self.effective_page(filtered_count).saturating_sub(1);
    }

    /// Case-sensitive substring match on the product name.
    pub fn matches_filter(&self, product: &Product) -> bool {
        product.name.contains(self.name_filter.as_str())
    }

    /// Filter, then sort (stable), then slice out the current page.
    pub fn row_model(&self, products: &[Product]) -> RowModel {
        let mut filtered: Vec<&Product> = products
            .iter()
            .filter(|p| self.matches_filter(p))
            .collect();

        if !self.sorting.is_empty() {
            filtered.sort_by(|a, b| {
                self.sorting
                    .iter()
                    .map(|key| {
                        let ord = key.column.compare(a, b);
                        match key.direction {
                            SortDirection::Ascending => ord,
                            SortDirection::Descending => ord.reverse(),
                        }
                    })
                    .find(|ord| *ord != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            });
        }

        let filtered_count = filtered.len();
        let page_count = self.page_count(filtered_count);
        let page_index = self.effective_page(filtered_count);
        let rows = filtered
            .into_iter()
            .skip(page_index * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect();

        RowModel {
            rows,
            filtered_count,
            page_index,
            page_count,
            can_previous: page_index > 0,
            can_next: page_index + 1 < page_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Amount, Money};
    use crate::product::{ProductDraft, ProductList};

    fn products(n: usize) -> ProductList {
        ProductList::from_drafts(
            (0..n)
                .map(|i| ProductDraft {
                    name: format!("item-{i:02}"),
                    category: if i % 2 == 0 { "even".into() } else { "odd".into() },
                    price: Money(i as f64).into(),
                    quantity: (n - i) as u32,
                    value: Money((i * 10) as f64).into(),
                    stock: Some(i as i64),
                })
                .collect(),
        )
    }

    fn names(model: &RowModel) -> Vec<&str> {
        model.rows.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn paginates_in_pages_of_ten() {
        let list = products(23);
        let mut table = TableState::default();
        let model = table.row_model(list.as_slice());
        assert_eq!(model.rows.len(), 10);
        assert_eq!(model.page_count, 3);
        assert!(!model.can_previous);
        assert!(model.can_next);

        table.next_page(model.filtered_count);
        table.next_page(model.filtered_count);
        let last = table.row_model(list.as_slice());
        assert_eq!(last.rows.len(), 3);
        assert!(last.can_previous);
        assert!(!last.can_next);

        // Already on the last page.
        table.next_page(last.filtered_count);
        assert_eq!(table.page_index(), 2);
        table.previous_page(last.filtered_count);
        assert_eq!(table.page_index(), 1);
    }

    #[test]
    fn empty_list_disables_both_directions() {
        let table = TableState::default();
        let model = table.row_model(&[]);
        assert!(model.rows.is_empty());
        assert!(!model.can_previous);
        assert!(!model.can_next);
    }

    #[test]
    fn filter_is_case_sensitive_substring() {
        let list = products(12);
        let mut table = TableState::default();
        table.set_name_filter("item-1");
        let model = table.row_model(list.as_slice());
        assert_eq!(names(&model), vec!["item-10", "item-11"]);

        table.set_name_filter("ITEM");
        assert_eq!(table.row_model(list.as_slice()).filtered_count, 0);

        table.set_name_filter("");
        assert_eq!(table.row_model(list.as_slice()).filtered_count, 12);
    }

    #[test]
    fn filter_resets_page() {
        let list = products(25);
        let mut table = TableState::default();
        table.next_page(25);
        assert_eq!(table.page_index(), 1);
        table.set_name_filter("item");
        assert_eq!(table.page_index(), 0);
        assert_eq!(table.row_model(list.as_slice()).page_index, 0);
    }

    #[test]
    fn page_clamps_when_list_shrinks() {
        let list = products(25);
        let mut table = TableState::default();
        table.next_page(25);
        table.next_page(25);
        assert_eq!(table.page_index(), 2);
        let smaller = products(5);
        let model = table.row_model(smaller.as_slice());
        assert_eq!(model.page_index, 0);
        assert_eq!(model.rows.len(), 5);
        assert_eq!(table.row_model(list.as_slice()).page_index, 2);
    }

    #[test]
    fn sort_cycles_through_directions() {
        let list = products(3);
        let mut table = TableState::default();
        table.toggle_sort(Column::Value, false);
        assert_eq!(table.sort_direction(Column::Value), Some(SortDirection::Ascending));
        table.toggle_sort(Column::Value, false);
        assert_eq!(names(&table.row_model(list.as_slice())), vec!["item-02", "item-01", "item-00"]);
        table.toggle_sort(Column::Value, false);
        assert!(table.sorting().is_empty());
        table.toggle_sort(Column::Actions, false);
        assert!(table.sorting().is_empty());
    }

    #[test]
    fn single_sort_replaces_previous_key() {
        let mut table = TableState::default();
        table.toggle_sort(Column::Name, false);
        table.toggle_sort(Column::Price, false);
        assert_eq!(
            table.sorting(),
            &[SortKey {
                column: Column::Price,
                direction: SortDirection::Ascending
            }]
        );
    }

    #[test]
    fn multi_sort_orders_by_each_key() {
        let list = products(6);
        let mut table = TableState::default();
        table.toggle_sort(Column::Category, false);
        table.toggle_sort(Column::Price, true);
        table.toggle_sort(Column::Price, true);
        let model = table.row_model(list.as_slice());
        assert_eq!(
            names(&model),
            vec!["item-04", "item-02", "item-00", "item-05", "item-03", "item-01"]
        );
        // Third shift-click drops only that key.
        table.toggle_sort(Column::Price, true);
        assert_eq!(table.sorting().len(), 1);
        assert_eq!(table.sorting()[0].column, Column::Category);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let list = products(6);
        let mut table = TableState::default();
        table.toggle_sort(Column::Category, false);
        let model = table.row_model(list.as_slice());
        assert_eq!(
            names(&model),
            vec!["item-00", "item-02", "item-04", "item-01", "item-03", "item-05"]
        );
    }

    #[test]
    fn visibility_toggles() {
        let mut table = TableState::default();
        assert_eq!(table.visible_columns().len(), Column::ALL.len());
        table.toggle_visibility(Column::Price);
        table.set_visible(Column::Actions, false);
        assert!(!table.is_visible(Column::Price));
        assert_eq!(
            table.visible_columns(),
            vec![Column::Name, Column::Category, Column::Quantity, Column::Value]
        );
        table.toggle_visibility(Column::Price);
        assert!(table.is_visible(Column::Price));
    }

    #[test]
    fn amount_cells_show_served_text() {
        let list = ProductList::from_drafts(vec![ProductDraft {
            name: "Kettle".into(),
            price: Amount::from_text("€5"),
            value: Amount::from_text("Call for price"),
            ..ProductDraft::default()
        }]);
        let p = &list.as_slice()[0];
        assert_eq!(Column::Price.cell_text(p), "€5");
        assert_eq!(Column::Value.cell_text(p), "Call for price");
    }

    #[test]
    fn amount_cells_sort_by_parsed_amount() {
        let list = ProductList::from_drafts(
            ["$1,200", "€30", "n/a"]
                .iter()
                .enumerate()
                .map(|(i, price)| ProductDraft {
                    name: format!("p{i}"),
                    price: Amount::from_text(*price),
                    ..ProductDraft::default()
                })
                .collect(),
        );
        let mut table = TableState::default();
        table.toggle_sort(Column::Price, false);
        assert_eq!(names(&table.row_model(list.as_slice())), vec!["p2", "p1", "p0"]);
    }

    #[test]
    fn cell_text_formats_amounts() {
        let list = products(2);
        let p = &list.as_slice()[1];
        assert_eq!(Column::Price.cell_text(p), "$1");
        assert_eq!(Column::Value.cell_text(p), "$10");
        assert_eq!(Column::Quantity.cell_text(p), "1");
        assert_eq!(Column::Actions.cell_text(p), "");
    }
}
