use super::rank::{pearson, spearman};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Method {
    #[default]
    Spearman,
    Pearson,
}

impl Method {
    pub fn correlate(&self, x: &[f64], y: &[f64]) -> Option<f64> {
        match self {
            Method::Spearman => spearman(x, y),
            Method::Pearson => pearson(x, y),
        }
    }
}

/// Square, symmetric matrix of pairwise correlations between named columns.
///
/// Each pair is computed over the rows where both columns hold a finite
/// value. Entries are `None` where fewer than two such rows exist or one side
/// is constant over them.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
    method: Method,
}

impl CorrelationMatrix {
    pub fn compute(columns: &[(String, Vec<Option<f64>>)], method: Method) -> Self {
        let n = columns.len();
        let mut values = vec![vec![None; n]; n];

        for i in 0..n {
            for j in i..n {
                let (xs, ys): (Vec<f64>, Vec<f64>) = columns[i]
                    .1
                    .iter()
                    .zip(&columns[j].1)
                    .filter_map(|pair| match pair {
                        (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((*x, *y)),
                        _ => None,
                    })
                    .unzip();
                let r = method.correlate(&xs, &ys);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        CorrelationMatrix {
            names: columns.iter().map(|(name, _)| name.clone()).collect(),
            values,
            method,
        }
    }
    pub fn method(&self) -> Method {
        self.method
    }
    pub fn names(&self) -> &[String] {
        &self.names
    }
    pub fn size(&self) -> usize {
        self.names.len()
    }
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.values
    }
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied().flatten()
    }
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
    /// Correlation of every column with `name`, in column order.
    pub fn column(&self, name: &str) -> Option<Vec<(&str, Option<f64>)>> {
        let idx = self.index_of(name)?;
        Some(
            self.names
                .iter()
                .zip(&self.values)
                .map(|(feature, row)| (feature.as_str(), row[idx]))
                .collect(),
        )
    }
    /// Absolute correlation of every column with `name`, undefined entries
    /// dropped. The target itself stays in the list.
    pub fn abs_target(&self, name: &str) -> Option<Vec<(String, f64)>> {
        Some(
            self.column(name)?
                .into_iter()
                .filter_map(|(feature, r)| r.map(|r| (feature.to_string(), r.abs())))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn columns() -> Vec<(String, Vec<Option<f64>>)> {
        vec![
            (
                "kd".to_string(),
                vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), None],
            ),
            (
                "contacts".to_string(),
                vec![Some(40.0), Some(30.0), Some(20.0), Some(10.0), Some(5.0)],
            ),
            (
                "flat".to_string(),
                vec![Some(1.0), Some(1.0), Some(1.0), Some(1.0), Some(1.0)],
            ),
            (
                "sparse".to_string(),
                vec![None, None, Some(f64::NAN), Some(2.0), None],
            ),
        ]
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::from_str("spearman").unwrap(), Method::Spearman);
        assert_eq!(Method::from_str("Pearson").unwrap(), Method::Pearson);
        assert!(Method::from_str("kendall").is_err());
        assert_eq!(Method::default().to_string(), "spearman");
    }

    #[test]
    fn test_matrix_shape_and_symmetry() {
        let m = CorrelationMatrix::compute(&columns(), Method::Spearman);
        assert_eq!(m.size(), 4);
        for i in 0..m.size() {
            for j in 0..m.size() {
                assert_eq!(m.get(i, j), m.get(j, i));
                if let Some(r) = m.get(i, j) {
                    assert!((-1.0..=1.0).contains(&r));
                }
            }
        }
        assert_eq!(m.get(0, 0), Some(1.0));
        assert_eq!(m.get(2, 2), None);
    }

    #[test]
    fn test_pairwise_complete() {
        let m = CorrelationMatrix::compute(&columns(), Method::Pearson);
        // row 5 is dropped for kd, leaving a perfect inverse relationship
        let r = m.get(0, 1).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
        // sparse has a single finite value
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn test_target_views() {
        let m = CorrelationMatrix::compute(&columns(), Method::Spearman);
        let column = m.column("kd").unwrap();
        assert_eq!(column.len(), 4);
        assert_eq!(column[2], ("flat", None));

        let bars = m.abs_target("kd").unwrap();
        let names: Vec<&str> = bars.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["kd", "contacts"]);
        assert!(bars.iter().all(|(_, r)| *r >= 0.0));
        assert!(m.abs_target("missing").is_none());
    }
}
