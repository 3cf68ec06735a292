//! Table schema description, as reported across the executor boundary.

/// A single column: display name and type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub type_name: String,
}

/// Ordered column list of a table or query result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the columns in order.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the name of column `index`, if present.
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|c| c.name.as_str())
    }
}

/// Builder for [`TableSchema`].
#[derive(Debug, Default)]
pub struct TableSchemaBuilder {
    columns: Vec<ColumnDef>,
}

impl TableSchemaBuilder {
    /// Appends a column.
    pub fn append_column(mut self, name: &str, type_name: &str) -> Self {
        self.columns.push(ColumnDef {
            name: name.to_string(),
            type_name: type_name.to_string(),
        });
        self
    }

    /// Finishes the schema.
    pub fn build(self) -> TableSchema {
        TableSchema {
            columns: self.columns,
        }
    }
}
