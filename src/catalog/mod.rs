use include_dir::{include_dir, Dir};
use serde_json::from_str;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::recipe::Recipe;

static CATALOG_DIR: Dir = include_dir!("src/catalog");

/// Seed recipes for the personal library
pub fn seed_library() -> Vec<Recipe> {
    read_recipes_from_file("my_recipes.json").expect("bundled library catalog must parse")
}

/// Seed recipes for the community explore feed
pub fn seed_explore() -> Vec<Recipe> {
    read_recipes_from_file("explore.json").expect("bundled explore catalog must parse")
}

fn read_recipes_from_file(file_name: &str) -> Result<Vec<Recipe>, Box<dyn Error>> {
    let file = CATALOG_DIR
        .get_file(file_name)
        .expect("Catalog file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret catalog file as a string");

    Ok(from_str(file_as_str)?)
}

/// Load extra user recipes from a JSON file on disk (`--recipes`)
pub fn load_recipes_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(from_str(&contents)?)
}
