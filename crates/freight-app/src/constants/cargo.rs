//! Cargo categories with compatible trailers and example items

use std::sync::LazyLock;

use freight_domain::model::CargoDefinition;

fn define(category: &str, trailers: &[&str], items: &[&str], allows_partial_load: bool) -> CargoDefinition {
    CargoDefinition {
        category: category.to_string(),
        compatible_trailer_types: trailers.iter().map(|t| t.to_string()).collect(),
        example_items: items.iter().map(|i| i.to_string()).collect(),
        allows_partial_load,
    }
}

pub static CARGO_DEFINITIONS: LazyLock<Vec<CargoDefinition>> = LazyLock::new(|| {
    vec![
        define(
            "Dry Goods",
            &["Dry Van", "Curtainsider"],
            &[
                "Packaged Snacks",
                "Paper Rolls",
                "Canned Goods",
                "Textiles",
                "Furniture",
                "Household Appliances",
                "Consumer Electronics",
            ],
            true,
        ),
        define(
            "Frozen Food",
            &["Reefer"],
            &["Frozen Vegetables", "Ice Cream", "Frozen Fish", "Frozen Pizza"],
            false,
        ),
        define(
            "Refrigerated Goods",
            &["Reefer"],
            &["Fresh Produce", "Dairy Products", "Vaccines", "Cut Flowers"],
            true,
        ),
        define(
            "Hazardous Materials",
            &["Dry Van", "Tanker"],
            &["Industrial Solvents", "Gas Cylinders", "Lithium Batteries", "Paint"],
            false,
        ),
        define(
            "Hazardous Bulk",
            &["Tanker", "Dump"],
            &["Fertilizer", "Ammonium Nitrate", "Sulphuric Acid"],
            false,
        ),
        define(
            "Bulk Grain",
            &["Hopper", "Dump"],
            &["Wheat", "Barley", "Corn", "Soybeans"],
            true,
        ),
        define(
            "Construction Materials",
            &["Flatbed", "Curtainsider"],
            &["Steel Beams", "Cement Bags", "Lumber", "Roof Tiles", "Bricks"],
            true,
        ),
        define(
            "Heavy Machinery",
            &["Lowboy"],
            &["Excavator", "Bulldozer", "Wheel Loader", "Tractor"],
            false,
        ),
        define(
            "Heavy Construction Equipment",
            &["Lowboy", "Flatbed"],
            &["Crane Sections", "Concrete Pump", "Pile Driver"],
            false,
        ),
    ]
});
