use sea_orm::Value;

/// Builds partial `UPDATE ... OUTPUT INSERTED.* WHERE id = @paramN` statements.
///
/// Only columns explicitly set are written. Column and table names are fixed identifiers
/// chosen by the caller; every value is bound as a positional parameter.
pub struct UpdateBuilder {
    table: &'static str,
    assignments: Vec<String>,
    params: Vec<Value>,
    changed: bool,
}

impl UpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            params: Vec::new(),
            changed: false,
        }
    }

    /// Assigns a bound value to a column
    pub fn set(&mut self, column: &'static str, value: impl Into<Value>) -> &mut Self {
        self.assignments
            .push(format!("{} = @param{}", column, self.params.len()));
        self.params.push(value.into());
        self.changed = true;
        self
    }

    /// Assigns the value if one was supplied
    pub fn set_some<V: Into<Value>>(&mut self, column: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.set(column, value);
        }
        self
    }

    /// Sets a timestamp column to the current time without counting as a change
    pub fn touch(&mut self, column: &'static str) -> &mut Self {
        self.assignments.push(format!("{} = GETDATE()", column));
        self
    }

    /// Whether no column has been assigned a value
    pub fn is_empty(&self) -> bool {
        !self.changed
    }

    /// Finishes the statement for the row with the given id
    pub fn build(mut self, id: i32) -> (String, Vec<Value>) {
        let sql = format!(
            "UPDATE {} SET {} OUTPUT INSERTED.* WHERE id = @param{}",
            self.table,
            self.assignments.join(", "),
            self.params.len()
        );
        self.params.push(id.into());

        (sql, self.params)
    }
}
