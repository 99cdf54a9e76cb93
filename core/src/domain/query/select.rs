use super::condition::Condition;

/// A table addressed by a repository, with the key used for distinct counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub primary_key: &'static str,
}

impl Table {
    pub const fn new(name: &'static str, primary_key: &'static str) -> Self {
        Self { name, primary_key }
    }
}

/// Immutable description of a select: each builder call returns a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    table: Table,
    columns: Vec<String>,
    conditions: Vec<Condition>,
}

impl SelectQuery {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            columns: Vec::new(),
            conditions: Vec::new(),
        }
    }

    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn filters<I>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.conditions.extend(conditions);
        self
    }

    pub fn table(&self) -> Table {
        self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCKS: Table = Table::new("blocks", "id");

    #[test]
    fn builder_does_not_alias() {
        let base = SelectQuery::new(BLOCKS).select(["id", "height"]);
        let filtered = base.clone().filter(Condition::eq("id", "1"));

        assert!(base.conditions().is_empty());
        assert_eq!(filtered.conditions().len(), 1);
        assert_eq!(filtered.columns(), base.columns());
        assert_eq!(filtered.table(), BLOCKS);
    }
}
