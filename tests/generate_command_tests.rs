use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, home::*};
use metaphorever::core::library::HISTORY_KEY;

#[cfg(test)]
mod generate_command_tests {
    use super::*;

    #[test]
    fn test_generate_without_api_key() -> anyhow::Result<()> {
        let home = setup_test_home()?;

        home.command()?
            .args(["generate", "time"])
            .assert()
            .failure()
            .stdout(assertions::missing_api_key());

        Ok(())
    }

    #[test]
    fn test_generate_empty_input() -> anyhow::Result<()> {
        let home = setup_test_home()?;

        home.command()?
            .arg("generate")
            .assert()
            .failure()
            .stdout(predicate::str::contains(
                "Please enter some text to generate a metaphor",
            ));

        Ok(())
    }

    #[test]
    fn test_generate_cached_metaphor_goes_to_history() -> anyhow::Result<()> {
        let home = create_home_with_cached_metaphor()?;

        home.command()?
            .args(["generate", "  Time ", "--tone", "poetic"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Time is a river that never looks back",
            ));

        let history = home.read_key(HISTORY_KEY)?;
        assert_eq!(history.as_array().map(Vec::len), Some(1));
        assert_eq!(history[0]["text"], "Time is a river that never looks back");
        assert_eq!(history[0]["tone"], "poetic");
        assert_eq!(history[0]["isFavorite"], false);

        Ok(())
    }

    #[test]
    fn test_generate_cache_is_per_tone() -> anyhow::Result<()> {
        let home = create_home_with_cached_metaphor()?;

        home.command()?
            .args(["generate", "time", "--tone", "funny"])
            .assert()
            .failure()
            .stdout(assertions::missing_api_key());

        Ok(())
    }

    #[test]
    fn test_generate_twice_creates_distinct_entries() -> anyhow::Result<()> {
        let home = create_home_with_cached_metaphor()?;

        home.command()?.args(["generate", "time"]).assert().success();
        home.command()?.args(["generate", "time"]).assert().success();

        let history = home.read_key(HISTORY_KEY)?;
        assert_eq!(history.as_array().map(Vec::len), Some(2));
        assert_ne!(history[0]["id"], history[1]["id"]);

        Ok(())
    }
}
