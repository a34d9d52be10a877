//! Years command: list the year directories of an export.

use std::io::Write;

use anyhow::Result;
use slh_core::{Source, YearUnit};

pub fn run<W: Write>(writer: &mut W, source: &Source) -> Result<()> {
    let Source::Hierarchy(root) = source else {
        writeln!(writer, "Listing years needs an export directory, not a single file.")?;
        return Ok(());
    };

    let mut years: Vec<i32> = root.years()?.iter().map(YearUnit::year).collect();
    years.sort_unstable();

    if years.is_empty() {
        writeln!(writer, "No years found in {}.", root.path().display())?;
        return Ok(());
    }

    let list: Vec<String> = years.iter().map(ToString::to_string).collect();
    writeln!(writer, "Years found: {}", list.join(", "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use insta::assert_snapshot;
    use tempfile::TempDir;

    fn run_to_string(source: &Source) -> String {
        let mut output = Vec::new();
        run(&mut output, source).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn lists_years_ascending() {
        let temp = TempDir::new().unwrap();
        for name in ["2021", "2019", "Settings"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }
        let source = Source::open(temp.path()).unwrap();

        assert_snapshot!(run_to_string(&source), @"Years found: 2019, 2021");
    }

    #[test]
    fn empty_export() {
        let temp = TempDir::new().unwrap();
        let source = Source::open(temp.path()).unwrap();

        assert!(run_to_string(&source).starts_with("No years found in "));
    }

    #[test]
    fn flat_file_has_no_years() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Timeline.json");
        fs::write(&path, "{}").unwrap();
        let source = Source::open(&path).unwrap();

        assert_snapshot!(
            run_to_string(&source),
            @"Listing years needs an export directory, not a single file."
        );
    }
}
