// src/output.rs
use crate::error::{SdeError, SdeResult};
use std::fs::{self, File};
use std::io::{self, Write};

/// One value per line, printed with round-trip precision
pub fn write_trajectory_to_csv(filename: &str, values: &[f64]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for value in values {
        writeln!(file, "{:?}", value)?;
    }
    Ok(())
}

/// Header `t,<names…>` followed by one row per grid time
pub fn write_paths_to_csv(
    filename: &str,
    times: &[f64],
    columns: &[(&str, &[f64])],
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    let header: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    writeln!(file, "t,{}", header.join(","))?;
    for (i, t) in times.iter().enumerate() {
        let row: Vec<String> = columns
            .iter()
            .map(|(_, values)| values.get(i).map_or_else(String::new, |v| format!("{:?}", v)))
            .collect();
        writeln!(file, "{:?},{}", t, row.join(","))?;
    }
    Ok(())
}

/// Read a single-column numeric table. Blank lines and `#` comments are
/// skipped.
///
/// # Errors
///
/// - `Io` if the file cannot be read
/// - `InvalidArgumentType` on the first field that is not a number
pub fn read_column_csv(filename: &str) -> SdeResult<Vec<f64>> {
    let content = fs::read_to_string(filename).map_err(|e| SdeError::Io {
        path: filename.to_string(),
        reason: e.to_string(),
    })?;
    parse_column(&content, filename)
}

fn parse_column(content: &str, source: &str) -> SdeResult<Vec<f64>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(i, line)| {
            let field = line.split(',').next().unwrap_or(line).trim();
            field.parse::<f64>().map_err(|_| SdeError::InvalidArgumentType {
                argument: format!("{}:{}", source, i + 1),
                expected: "a real number".to_string(),
                found: field.to_string(),
            })
        })
        .collect()
}
