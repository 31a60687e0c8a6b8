use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use uniform_shop::pricing;

/// Execute the options command
///
/// Prints the four calculator option sets
pub fn execute() {
    let options = pricing::resolve_options();

    let mut table = new_table(&["Category", "Name", "Base price"]);
    for category in options.categories {
        table.add_row(vec![
            Cell::new(category.id),
            Cell::new(category.name),
            Cell::new(category.base_price),
        ]);
    }
    println!("{table}\n");

    let mut table = new_table(&["Quantity", "Multiplier"]);
    for quantity in options.quantities {
        table.add_row(vec![Cell::new(quantity.range), Cell::new(quantity.multiplier)]);
    }
    println!("{table}\n");

    let mut table = new_table(&["Fabric", "Name", "Multiplier"]);
    for fabric in options.fabrics {
        table.add_row(vec![
            Cell::new(fabric.id),
            Cell::new(fabric.name),
            Cell::new(fabric.multiplier),
        ]);
    }
    println!("{table}\n");

    let mut table = new_table(&["Branding", "Name", "Price"]);
    for branding in options.branding {
        table.add_row(vec![
            Cell::new(branding.id),
            Cell::new(branding.name),
            Cell::new(branding.price),
        ]);
    }
    println!("{table}");
}

pub(crate) fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    table
}
