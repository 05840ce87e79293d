use std::fs;
use std::process;

use preeti_core::PreetiTables;

use super::CliError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Read a table TOML file and build tables from it.
pub fn load_table(path: &str) -> Result<(String, PreetiTables), CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;
    let tables = PreetiTables::from_toml(&content).map_err(|source| CliError::Table {
        path: path.to_string(),
        source,
    })?;
    Ok((content, tables))
}

pub fn summary(tables: &PreetiTables) -> String {
    format!(
        "{} forward mappings, {} reverse mappings, {} consonant keys, {} reorder rules",
        tables.forward().len(),
        tables.reverse().len(),
        tables.legacy_consonant_count(),
        tables.rules().len(),
    )
}

pub fn table_export() {
    print!("{}", preeti_core::table::default_toml());
}

pub fn table_validate(file: &str) {
    let (_, tables) = die!(load_table(file), "Error: {}");
    println!("OK: {}", summary(&tables));
}

/// Make `file` the table behind `PreetiTables::global()`.
pub fn install_table(file: &str) {
    let (content, _) = die!(load_table(file), "Error: {}");
    die!(
        preeti_core::table::init_custom(content),
        "Error installing table {file}: {}"
    );
}
