use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, home::*};

#[cfg(test)]
mod history_command_tests {
    use super::*;

    #[test]
    fn test_history_empty() -> anyhow::Result<()> {
        let home = setup_test_home()?;

        home.command()?
            .arg("history")
            .assert()
            .success()
            .stdout(assertions::empty_history());

        Ok(())
    }

    #[test]
    fn test_history_lists_newest_first() -> anyhow::Result<()> {
        let home = create_home_with_history()?;

        let output = home.command()?.arg("history").output()?;
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout)?;
        let first = stdout.find("Time is a river").unwrap_or(usize::MAX);
        let third = stdout.find("Debt is a tide").unwrap_or(0);
        assert!(first < third, "history out of order:\n{stdout}");

        Ok(())
    }

    #[test]
    fn test_history_shows_index_tone_and_source() -> anyhow::Result<()> {
        let home = create_home_with_history()?;

        home.command()?
            .arg("history")
            .assert()
            .success()
            .stdout(predicate::str::contains("History:"))
            .stdout(assertions::has_entry_index(1))
            .stdout(assertions::has_entry_index(3))
            .stdout(assertions::has_tone("funny"))
            .stdout(predicate::str::contains("from: monday"));

        Ok(())
    }

    #[test]
    fn test_history_corrupt_file_reads_as_empty() -> anyhow::Result<()> {
        let home = setup_test_home()?;
        std::fs::write(home.data_dir().join("metaphorever-history.json"), "{not json")?;

        home.command()?
            .arg("history")
            .assert()
            .success()
            .stdout(assertions::empty_history());

        Ok(())
    }
}
