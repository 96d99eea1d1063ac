use tabled::{settings::Style, Table, Tabled};

use crate::item::Item;

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Quantity")]
    quantity: i64,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
        }
    }
}

/// Render the item list as a rounded table; empty list renders nothing.
pub fn items_table(items: &[Item]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let rows: Vec<ItemRow> = items.iter().map(ItemRow::from).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stats_table(stats: &[(&str, &str)]) -> String {
    let mut builder = TableBuilder::new();
    for (label, value) in stats {
        builder.add_row(label, value);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(items_table(&[]), "");
    }

    #[test]
    fn test_table_contains_item_fields() {
        let items = vec![Item {
            id: 1,
            name: "Apples".to_string(),
            quantity: 5,
        }];

        let rendered = items_table(&items);
        assert!(rendered.contains("Apples"));
        assert!(rendered.contains('5'));
    }
}
