use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;

use crate::io::ext_repr::{ExtCapacity, ExtProduct};

/// Column separator of the tables
pub const DELIMITER: char = ';';

pub const TABLE_EXTENSION: &str = "csv";

/// Resolves the path of a table: `.csv` is appended if `path` has no extension,
/// any other extension is rejected.
pub fn table_path(path: &Path) -> Result<PathBuf> {
    match path.extension().and_then(|ext| ext.to_str()) {
        None => Ok(path.with_extension(TABLE_EXTENSION)),
        Some(TABLE_EXTENSION) => Ok(path.to_path_buf()),
        Some(_) => bail!("{} is not a .{TABLE_EXTENSION} file", path.display()),
    }
}

/// Parses a product table with (at least) the columns `name`, `weight` and `volume`.
/// `source` is only used in error messages.
pub fn parse_products(text: &str, source: &str) -> Result<Vec<ExtProduct>> {
    parse_table(text, source, &["name", "weight", "volume"])?
        .into_iter()
        .map(|row| {
            Ok(ExtProduct {
                weight: row.number(1)?,
                volume: row.number(2)?,
                name: row.take_name(),
            })
        })
        .collect()
}

/// Parses a capacity table with (at least) the columns `name`, `weight`, `volume` and `price`.
/// `source` is only used in error messages.
pub fn parse_capacities(text: &str, source: &str) -> Result<Vec<ExtCapacity>> {
    parse_table(text, source, &["name", "weight", "volume", "price"])?
        .into_iter()
        .map(|row| {
            Ok(ExtCapacity {
                weight: row.number(1)?,
                volume: row.number(2)?,
                price: row.number(3)?,
                name: row.take_name(),
            })
        })
        .collect()
}

/// A data row, restricted to the requested columns
struct Row<'a> {
    source: &'a str,
    line: usize,
    columns: &'a [&'a str],
    fields: Vec<String>,
}

impl Row<'_> {
    fn number(&self, col: usize) -> Result<f64> {
        let field = &self.fields[col];
        field.parse::<f64>().with_context(|| {
            format!(
                "{}:{}: field {:?} should be a number, got {field:?}",
                self.source, self.line, self.columns[col]
            )
        })
    }

    fn take_name(self) -> String {
        self.fields.into_iter().next().unwrap_or_default()
    }
}

fn parse_table<'a>(text: &str, source: &'a str, columns: &'a [&'a str]) -> Result<Vec<Row<'a>>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let Some((_, header)) = lines.next() else {
        bail!("{source}: table is empty, expected a header with columns {columns:?}");
    };
    let header = header.split(DELIMITER).map(str::trim).collect_vec();
    let indices = columns
        .iter()
        .map(|col| {
            header
                .iter()
                .position(|h| h == col)
                .with_context(|| format!("{source}: missing column {col:?} in header {header:?}"))
        })
        .collect::<Result<Vec<usize>>>()?;

    lines
        .map(|(line, l)| {
            let fields = l.split(DELIMITER).map(str::trim).collect_vec();
            ensure!(
                fields.len() == header.len(),
                "{source}:{line}: expected {} fields, found {}",
                header.len(),
                fields.len()
            );
            Ok(Row {
                source,
                line,
                columns,
                fields: indices.iter().map(|&i| fields[i].to_string()).collect(),
            })
        })
        .collect()
}
