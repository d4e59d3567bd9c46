use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use bakery_rs::{
    AppState, Outcome,
    category::{CategoryData, CategoryRepository},
    product::{ProductData, ProductRepository},
};

/// A utility for creating a sample database for the bakery REST API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// (category, [(product name, product code, price)])
const CATALOGUE: &[(&str, &[(&str, &str, f64)])] = &[
    (
        "Breads",
        &[("Sourdough Loaf", "srdL", 6.50), ("Rye Bread", "ryeB", 5.25)],
    ),
    (
        "Pastries",
        &[
            ("Cinnamon Raisin Roll", "cnrP", 1.09),
            ("Butter Croissant", "btrC", 2.40),
        ],
    ),
    ("Cakes", &[("Carrot Cake", "crtC", 24.00)]),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'bakery.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let state = AppState::new(Connection::open(output_path)?)?;
    let categories = CategoryRepository::new(state.db_connection.clone());
    let products = ProductRepository::new(state.db_connection);

    for (category_name, catalogue_products) in CATALOGUE {
        let category = match categories.insert(&CategoryData::named(category_name))? {
            Outcome::Accepted(category) => category,
            Outcome::Rejected(reason) => return Err(reason.into()),
        };
        println!("Created category {}", category.name);

        for (name, code, price) in catalogue_products.iter() {
            let data = ProductData::new(name, code, category.id, *price);

            if let Outcome::Rejected(reason) = products.insert(&data)? {
                return Err(reason.into());
            }
            println!("  Created product {name}");
        }
    }

    println!("Success!");

    Ok(())
}
