use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::{QuizError, Result};

// Column order of the market sizes table
const COLUMNS: [&str; 11] = [
    "sector",
    "industry",
    "industryName",
    "companies",
    "establishments",
    "employees",
    "revenue",
    "payroll",
    "productivity",
    "averageSalary",
    "averageHrRate",
];

/// One row of the industry statistics table.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryRecord {
    pub sector: String,
    pub industry: u64,
    pub industry_name: String,
    pub companies: u64,
    pub establishments: u64,
    pub employees: u64,
    pub revenue: f64,
    pub payroll: f64,
    pub productivity: String,
    pub average_salary: u64,
    pub average_hr_rate: f64,
}

impl IndustryRecord {
    /// `row` is the 1-based data row number, used only for error reporting.
    fn from_row(row: usize, fields: &csv::StringRecord) -> Result<Self> {
        let cells = Cells { row, fields };
        return Ok(Self {
            sector: cells.text(0)?.to_string(),
            industry: cells.number(1, false)?,
            industry_name: cells.text(2)?.to_string(),
            companies: cells.number(3, true)?,
            establishments: cells.number(4, true)?,
            employees: cells.number(5, true)?,
            revenue: cells.decimal(6, true)?,
            payroll: cells.decimal(7, true)?,
            productivity: cells.text(8)?.to_string(),
            average_salary: cells.number(9, true)?,
            average_hr_rate: cells.decimal(10, false)?,
        });
    }
}

struct Cells<'a> {
    row: usize,
    fields: &'a csv::StringRecord,
}

impl<'a> Cells<'a> {
    fn text(&self, index: usize) -> Result<&'a str> {
        self.fields
            .get(index)
            .ok_or_else(|| QuizError::MissingColumn {
                row: self.row,
                column: COLUMNS[index],
            })
    }

    fn number<T>(&self, index: usize, grouped: bool) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.text(index)?;
        let cleaned = if grouped {
            strip_thousands(raw)
        } else {
            raw.to_string()
        };
        cleaned.trim().parse::<T>().map_err(|e| QuizError::Parse {
            row: self.row,
            column: COLUMNS[index],
            value: raw.to_string(),
            reason: e.to_string(),
        })
    }

    // f64 parsing also accepts "inf", "NaN" and overflowing exponents
    fn decimal(&self, index: usize, grouped: bool) -> Result<f64> {
        let value: f64 = self.number(index, grouped)?;
        if !value.is_finite() {
            return Err(QuizError::Parse {
                row: self.row,
                column: COLUMNS[index],
                value: self.text(index)?.to_string(),
                reason: "not a finite number".to_string(),
            });
        }
        Ok(value)
    }
}

/// Removes thousands separators, e.g. "1,234" becomes "1234".
pub fn strip_thousands(field: &str) -> String {
    field.chars().filter(|c| *c != ',').collect()
}

/// Parses every data row of the table, skipping the header.
/// Fails on the first row that doesn't convert.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<IndustryRecord>> {
    // Columns are positional; short rows fail with MissingColumn and
    // anything after the eleventh column is ignored.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let record = IndustryRecord::from_row(index + 1, &row)?;
        log::debug!("Parsed row {}: {}", index + 1, record.industry_name);
        records.push(record);
    }
    return Ok(records);
}

pub fn load_records(path: &Path) -> Result<Vec<IndustryRecord>> {
    log::info!("Loading industry records from {}", path.display());
    let file = File::open(path)?;
    let records = read_records(file)?;
    log::info!("Loaded {} industry records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Sector,Industry,Industry Name,Companies,Establishments,Employees,Revenue,Payroll,Productivity,Average Salary,Average Hourly Rate\n";

    fn food_row() -> String {
        format!(
            "{}{}",
            HEADER,
            "Manufacturing,3100,Food,\"1,000\",50,\"10,000\",500.5,100.25,12%,\"40,000\",19.5\n"
        )
    }

    #[test]
    fn test_strip_thousands() {
        assert_eq!(strip_thousands("1,234"), "1234");
        assert_eq!(strip_thousands("1,234,567.89"), "1234567.89");
        assert_eq!(strip_thousands("42"), "42");
    }

    #[test]
    fn test_read_single_row() {
        let records = read_records(food_row().as_bytes()).unwrap();
        assert_eq!(records.len(), 1);

        let food = &records[0];
        assert_eq!(food.sector, "Manufacturing");
        assert_eq!(food.industry, 3100);
        assert_eq!(food.industry_name, "Food");
        assert_eq!(food.companies, 1000);
        assert_eq!(food.establishments, 50);
        assert_eq!(food.employees, 10_000);
        assert_eq!(food.revenue, 500.5);
        assert_eq!(food.payroll, 100.25);
        assert_eq!(food.productivity, "12%");
        assert_eq!(food.average_salary, 40_000);
        assert_eq!(food.average_hr_rate, 19.5);
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let records = read_records(HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_rows_keep_input_order() {
        let table = format!(
            "{}{}{}",
            HEADER,
            "Retail,4400,Shoes,1,1,1,1,1,1%,1,1\n",
            "Mining,2100,Coal,2,2,2,2,2,2%,2,2\n"
        );
        let records = read_records(table.as_bytes()).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.industry_name.as_str()).collect();
        assert_eq!(names, vec!["Shoes", "Coal"]);
    }

    #[test]
    fn test_non_numeric_field_is_parse_error() {
        let table = format!("{}{}", HEADER, "Retail,4400,Shoes,lots,1,1,1,1,1%,1,1\n");
        let err = read_records(table.as_bytes()).unwrap_err();
        match err {
            QuizError::Parse { row, column, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "companies");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_industry_code_is_not_ungrouped() {
        let table = format!("{}{}", HEADER, "Retail,\"4,400\",Shoes,1,1,1,1,1,1%,1,1\n");
        let err = read_records(table.as_bytes()).unwrap_err();
        assert!(matches!(err, QuizError::Parse { column: "industry", .. }));
    }

    #[test]
    fn test_short_row_is_missing_column() {
        let table = format!("{}{}", HEADER, "Retail,4400,Shoes,1,1\n");
        let err = read_records(table.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            QuizError::MissingColumn { row: 1, column: "employees" }
        ));
    }

    #[test]
    fn test_trailing_columns_are_ignored() {
        let table = format!("{}{}", HEADER, "Retail,4400,Shoes,1,1,1,1,1,1%,1,1,notes,extra\n");
        let records = read_records(table.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].average_hr_rate, 1.0);
    }

    #[test]
    fn test_non_finite_decimals_are_parse_errors() {
        let cases = [("inf", "1", "1"), ("1", "NaN", "1"), ("1", "1", "1e400")];
        for (revenue, payroll, rate) in cases {
            let table = format!(
                "{}Retail,4400,Shoes,1,1,1,{},{},1%,1,{}\n",
                HEADER, revenue, payroll, rate
            );
            let err = read_records(table.as_bytes()).unwrap_err();
            match err {
                QuizError::Parse { row, value, .. } => {
                    assert_eq!(row, 1);
                    assert!(value == "inf" || value == "NaN" || value == "1e400");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_huge_finite_decimal_is_accepted() {
        let table = format!("{}{}", HEADER, "Manufacturing,3100,Food,1,1,1,1e308,1,12%,1,1\n");
        let records = read_records(table.as_bytes()).unwrap();
        assert_eq!(records[0].revenue, 1e308);
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(food_row().as_bytes()).unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].companies, 1000);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, QuizError::Io(_)));
    }
}
