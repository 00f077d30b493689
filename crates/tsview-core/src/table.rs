// File: crates/tsview-core/src/table.rs
// Summary: Columnar time-series table (i64 microsecond time column + named f64 value columns) and CSV loading.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ViewerError, ViewerResult};

/// Header names recognised as the time column, in priority order.
const TIME_HEADERS: &[&str] = &["time", "timestamp", "datetime", "date"];

/// One time column plus N equally long value columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeTable {
    time: Vec<i64>,
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl TimeTable {
    /// Build a table, checking that every value column matches the time column length
    /// and that column names are unique. Rows are sorted by time.
    pub fn new(time: Vec<i64>, columns: Vec<(String, Vec<f64>)>) -> ViewerResult<Self> {
        if columns.is_empty() {
            return Err(ViewerError::NoValueColumns);
        }
        let mut names = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());
        for (name, col) in columns {
            if col.len() != time.len() {
                return Err(ViewerError::LengthMismatch { name, len: col.len(), expected: time.len() });
            }
            if names.contains(&name) {
                return Err(ViewerError::DuplicateColumn(name));
            }
            names.push(name);
            values.push(col);
        }
        let mut table = Self { time, names, columns: values };
        table.sort_by_time();
        Ok(table)
    }

    /// Stable sort of all rows by time; no-op for already ascending data.
    pub fn sort_by_time(&mut self) {
        if self.time.windows(2).all(|w| w[0] <= w[1]) {
            return;
        }
        let mut order: Vec<usize> = (0..self.time.len()).collect();
        order.sort_by_key(|&i| self.time[i]);
        self.time = order.iter().map(|&i| self.time[i]).collect();
        for col in &mut self.columns {
            *col = order.iter().map(|&i| col[i]).collect();
        }
    }

    pub fn len(&self) -> usize { self.time.len() }
    pub fn is_empty(&self) -> bool { self.time.is_empty() }
    pub fn time(&self) -> &[i64] { &self.time }
    pub fn names(&self) -> &[String] { &self.names }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.column_index(name).map(|i| self.columns[i].as_slice())
    }

    pub fn column_at(&self, idx: usize) -> &[f64] { &self.columns[idx] }

    /// Map display names to column indices. An empty selection means every column.
    pub fn resolve(&self, selection: &[String]) -> ViewerResult<Vec<usize>> {
        if selection.is_empty() {
            return Ok((0..self.names.len()).collect());
        }
        selection
            .iter()
            .map(|name| {
                self.column_index(name).ok_or_else(|| ViewerError::UnknownColumn {
                    name: name.clone(),
                    available: self.names.join(", "),
                })
            })
            .collect()
    }

    /// First and last timestamp.
    pub fn time_extent(&self) -> Option<(i64, i64)> {
        Some((*self.time.first()?, *self.time.last()?))
    }

    /// Global min/max over the named columns (all columns when `columns` is empty).
    pub fn value_range(&self, columns: &[String]) -> Option<(f64, f64)> {
        let idx = self.resolve(columns).ok()?;
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for i in idx {
            for &v in &self.columns[i] {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
    }

    /// Load a CSV file with a header row.
    pub fn load_csv(path: impl AsRef<Path>) -> ViewerResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let table = Self::from_csv_reader(file)?;
        debug!(path = %path.display(), rows = table.len(), columns = table.names.len(), "loaded table");
        Ok(table)
    }

    /// Parse CSV from any reader. The time column is picked by header name
    /// (`time`, `timestamp`, `datetime`, `date`) or defaults to the first column;
    /// every other column becomes a value column named after its header.
    pub fn from_csv_reader<R: Read>(reader: R) -> ViewerResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
        let i_time = TIME_HEADERS
            .iter()
            .find_map(|want| lower.iter().position(|h| h == want))
            .unwrap_or(0);
        let value_idx: Vec<usize> = (0..headers.len()).filter(|&i| i != i_time).collect();
        if value_idx.is_empty() {
            return Err(ViewerError::NoValueColumns);
        }

        let mut time = Vec::new();
        let mut values: Vec<Vec<f64>> = vec![Vec::new(); value_idx.len()];
        let mut skipped = 0usize;
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let Some(t) = rec.get(i_time).and_then(parse_time) else {
                skipped += 1;
                continue;
            };
            for (slot, &ci) in value_idx.iter().enumerate() {
                let raw = rec.get(ci).unwrap_or("");
                let v = raw.parse::<f64>().map_err(|_| ViewerError::BadValue {
                    row: row + 1,
                    column: headers[ci].clone(),
                    value: raw.to_string(),
                })?;
                values[slot].push(v);
            }
            time.push(t);
        }
        if skipped > 0 {
            warn!(skipped, "skipped rows with unparsable timestamps");
        }
        if time.is_empty() {
            return Err(ViewerError::EmptyTable);
        }
        let columns = value_idx.iter().map(|&ci| headers[ci].clone()).zip(values).collect();
        Self::new(time, columns)
    }
}

fn parse_time(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    let f = s.parse::<f64>().ok()?;
    f.is_finite().then(|| f.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let err = TimeTable::new(vec![0, 1, 2], vec![("a".into(), vec![1.0, 2.0])]).unwrap_err();
        assert!(matches!(err, ViewerError::LengthMismatch { expected: 3, len: 2, .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = TimeTable::new(
            vec![0],
            vec![("a".into(), vec![1.0]), ("a".into(), vec![2.0])],
        )
        .unwrap_err();
        assert!(matches!(err, ViewerError::DuplicateColumn(n) if n == "a"));
    }

    #[test]
    fn sorts_rows_by_time() {
        let t = TimeTable::new(vec![3, 1, 2], vec![("v".into(), vec![30.0, 10.0, 20.0])]).unwrap();
        assert_eq!(t.time(), &[1, 2, 3]);
        assert_eq!(t.column("v").unwrap(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn csv_detects_time_column_by_name() {
        let data = "AAPL,time,GOOG\n1.5,20,7\n2.5,10,8\nx,bad,9\n";
        // the bad time row is skipped before its values are parsed
        let t = TimeTable::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(t.names(), &["AAPL".to_string(), "GOOG".to_string()]);
        assert_eq!(t.time(), &[10, 20]);
        assert_eq!(t.column("AAPL").unwrap(), &[2.5, 1.5]);
    }

    #[test]
    fn csv_reports_bad_value() {
        let data = "time,a\n0,1.0\n1,oops\n";
        let err = TimeTable::from_csv_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ViewerError::BadValue { row: 2, .. }));
    }

    #[test]
    fn resolve_reports_unknown_column() {
        let t = TimeTable::new(vec![0], vec![("a".into(), vec![1.0])]).unwrap();
        assert_eq!(t.resolve(&[]).unwrap(), vec![0]);
        let err = t.resolve(&["b".to_string()]).unwrap_err();
        assert!(matches!(err, ViewerError::UnknownColumn { ref name, .. } if name == "b"));
    }
}
