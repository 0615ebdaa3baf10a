//! An in-memory tabular record set: named columns over ordered rows of loosely-typed cells.

use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::error::{ColumnNotFound, RaggedRow};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Missing,
    Number(f64),
    Text(String),
}
impl Cell {
    /// Interprets a raw field. Blank fields and `NaN` become [Cell::Missing]; anything that parses
    /// as a float is a [Cell::Number]; the rest is [Cell::Text].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
            Cell::Missing
        } else if let Ok(number) = trimmed.parse::<f64>() {
            Cell::Number(number)
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Applies `f` to a numeric cell; missing and text cells are left as they are.
    #[inline]
    pub fn map_number(&mut self, f: impl FnOnce(f64) -> f64) {
        if let Cell::Number(number) = self {
            *number = f(*number);
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Missing => write!(f, "NaN"),
            Cell::Number(number) => write!(f, "{number}"),
            Cell::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<f64> for Cell {
    fn from(number: f64) -> Self {
        if number.is_nan() {
            Cell::Missing
        } else {
            Cell::Number(number)
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}
impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: vec![],
        }
    }

    pub fn with_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, RaggedRow> {
        let mut table = Self::new(columns);
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), RaggedRow> {
        if row.len() != self.columns.len() {
            return Err(RaggedRow {
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, ColumnNotFound> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| ColumnNotFound(name.to_string()))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Cell>, ColumnNotFound> {
        let col = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[col]))
    }

    /// Applies `f` to every cell in the column at ordinal `col`.
    pub fn apply_column(&mut self, col: usize, mut f: impl FnMut(&mut Cell)) {
        for row in &mut self.rows {
            f(&mut row[col]);
        }
    }

    /// A copy of the first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// A copy of the rows satisfying `predicate`, in their original order.
    pub fn filter(&self, mut predicate: impl FnMut(&[Cell]) -> bool) -> Table {
        Self {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| predicate(row))
                .cloned()
                .collect(),
        }
    }
}

impl Index<(usize, usize)> for Table {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl IndexMut<(usize, usize)> for Table {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}
