//! Table description loading.
//!
//! The description file is `;`-delimited with `#` comment lines and a header
//! row. Each remaining record carries the column definition in its first
//! field as comma-separated sub-values: name, SQL type, size. The whole row
//! being one field is a quirk of the exporting system, not of this tool.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use anyhow::{Context, Result};
use log::debug;

/// One column from the table description, original casing preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub sql_type: String,
    pub size: String,
}

impl ColumnDescriptor {
    /// Splits a raw record field into name, SQL type, and size. Missing
    /// sub-values stay empty; extra sub-values are ignored.
    pub fn parse(field: &str) -> Self {
        let mut parts = field.split(',');
        ColumnDescriptor {
            name: parts.next().unwrap_or_default().to_string(),
            sql_type: parts.next().unwrap_or_default().to_string(),
            size: parts.next().unwrap_or_default().to_string(),
        }
    }
}

/// Table description keyed by lower-cased column name.
///
/// Duplicate rows are last-write-wins. Backed by a `BTreeMap` so key
/// iteration, and therefore generated output, is name-ordered; the original
/// tool never guaranteed any ordering.
#[derive(Debug, Default, Clone)]
pub struct SchemaTable {
    columns: BTreeMap<String, ColumnDescriptor>,
}

impl SchemaTable {
    pub fn insert(&mut self, descriptor: ColumnDescriptor) {
        self.columns
            .insert(descriptor.name.to_lowercase(), descriptor);
    }

    pub fn get(&self, lower_name: &str) -> Option<&ColumnDescriptor> {
        self.columns.get(lower_name)
    }

    pub fn contains(&self, lower_name: &str) -> bool {
        self.columns.contains_key(lower_name)
    }

    /// The full lower-cased key set, used as the reconciler's left operand.
    pub fn keys(&self) -> BTreeSet<String> {
        self.columns.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Loads a table description file. Open and read failures are fatal;
    /// the header record is discarded unconditionally.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .comment(Some(b'#'))
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Opening table description {path:?}"))?;

        let mut table = SchemaTable::default();
        let mut record = csv::StringRecord::new();
        while reader
            .read_record(&mut record)
            .with_context(|| format!("Reading table description {path:?}"))?
        {
            let Some(field) = record.get(0) else {
                continue;
            };
            let descriptor = ColumnDescriptor::parse(field);
            debug!("Described column: {descriptor:?}");
            table.insert(descriptor);
        }
        debug!("Loaded {} column(s) from {path:?}", table.len());
        Ok(table)
    }
}
