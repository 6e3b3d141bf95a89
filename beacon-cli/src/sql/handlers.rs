use anyhow::{Context, Result};
use clap::ArgMatches;

use beacon_core::predicate::Value;
use beacon_core::sql::{SqlQuery, render};
use beacon_core::{build, validate};

use crate::args::{config_from_matches, request_from_matches};

/// Validate the request and print the SQL a warehouse executor would run, followed by
/// its parameter bindings.
pub fn run_sql(matches: &ArgMatches) -> Result<()> {
    let config = config_from_matches(matches)?;
    let query = request_from_matches(matches)?.to_query();

    let validated = validate(&query, &config.query).context("validating input")?;
    let predicate = build(&validated);
    let sql = render(&predicate, &config.table);

    print!("{}", format_sql(&sql));
    Ok(())
}

fn format_sql(sql: &SqlQuery) -> String {
    let mut out = format!("{}\n", sql.text);
    for param in &sql.params {
        let (kind, value) = match &param.value {
            Value::Text(text) => ("STRING", format!("{:?}", text)),
            Value::Int(int) => ("INT64", int.to_string()),
        };
        out.push_str(&format!("-- @{} {} = {}\n", param.name, kind, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use beacon_core::sql::QueryParameter;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_format_sql() {
        let sql = SqlQuery {
            text: "SELECT 1".to_string(),
            params: vec![
                QueryParameter {
                    name: "p0".to_string(),
                    value: Value::Text("1".to_string()),
                },
                QueryParameter {
                    name: "p1".to_string(),
                    value: Value::Int(100),
                },
            ],
        };
        assert_eq!(
            format_sql(&sql),
            "SELECT 1\n-- @p0 STRING = \"1\"\n-- @p1 INT64 = 100\n"
        );
    }
}
