use anyhow::Result;
use colored::Colorize;
use comfy_table::Cell;
use uniform_shop::pricing::{self, EstimateRequest};

use crate::cli::EstimateArgs;
use crate::commands::options::new_table;

/// Execute the estimate command
pub fn execute(args: &EstimateArgs) -> Result<()> {
    let request = EstimateRequest::new(
        args.category.as_str(),
        args.quantity.as_str(),
        args.fabric.as_str(),
        args.branding.as_str(),
    );

    let result = match pricing::estimate(&request) {
        Ok(result) => result,
        Err(e) => {
            anyhow::bail!("{}: {} = {:?}", e, e.field(), field_value(&request, e.field()));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let breakdown = result.breakdown;
    let mut table = new_table(&["Factor", "Value"]);
    table
        .add_row(vec![Cell::new("Base price"), Cell::new(breakdown.base_price)])
        .add_row(vec![
            Cell::new("Quantity multiplier"),
            Cell::new(breakdown.quantity_multiplier),
        ])
        .add_row(vec![
            Cell::new("Fabric multiplier"),
            Cell::new(breakdown.fabric_multiplier),
        ])
        .add_row(vec![Cell::new("Branding"), Cell::new(breakdown.branding_price)]);

    println!("{table}");
    println!(
        "{} {}",
        "Estimated price:".bold(),
        result.estimated_price.to_string().green().bold()
    );

    Ok(())
}

fn field_value(request: &EstimateRequest, field: pricing::EstimateField) -> &str {
    match field {
        pricing::EstimateField::Category => &request.category,
        pricing::EstimateField::Quantity => &request.quantity,
        pricing::EstimateField::Fabric => &request.fabric,
        pricing::EstimateField::Branding => &request.branding,
    }
}
