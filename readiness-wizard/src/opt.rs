use clap::{Parser, ValueEnum};
use readiness::{ChoiceScoring, ScoringConfig, WiscarScoring};

#[derive(Debug, Parser)]
#[command(name = "readiness-wizard", about = "Career readiness self-assessment")]
pub(crate) struct Cli {
    #[arg(long, help = "Plain prompts without colours")]
    pub(crate) plain: bool,

    #[arg(long, help = "Print the result as JSON instead of the text report")]
    pub(crate) json: bool,

    #[arg(long, value_enum, help = "How the WISCAR dimensions are scored")]
    pub(crate) wiscar: Option<WiscarMode>,

    #[arg(long, value_enum, default_value_t = ChoiceMode::Zero)]
    pub(crate) choice_scoring: ChoiceMode,

    #[arg(short, long, action = clap::ArgAction::Count, help = "More log output (-v, -vv)")]
    pub(crate) verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum WiscarMode {
    /// Fixed baseline values
    Fixed,
    /// Derived from the WISCAR answers
    Derived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ChoiceMode {
    /// Choice answers count as zero
    Zero,
    /// Choice answers are left out of the mean
    Exclude,
}

impl Cli {
    pub(crate) fn scoring_config(&self) -> ScoringConfig {
        let wiscar = match self.wiscar {
            None | Some(WiscarMode::Fixed) => WiscarScoring::Baseline,
            Some(WiscarMode::Derived) => WiscarScoring::Derived,
        };
        let choice_scoring = match self.choice_scoring {
            ChoiceMode::Zero => ChoiceScoring::Zero,
            ChoiceMode::Exclude => ChoiceScoring::Exclude,
        };
        ScoringConfig::default()
            .with_wiscar(wiscar)
            .with_choice_scoring(choice_scoring)
    }

    pub(crate) fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_defaults() {
        let cli = Cli::parse_from(["readiness-wizard"]);
        assert!(!cli.plain);
        assert!(!cli.json);
        assert_eq!(cli.scoring_config(), ScoringConfig::default());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn flags_map_onto_scoring_config() {
        let cli = Cli::parse_from([
            "readiness-wizard",
            "--json",
            "--wiscar",
            "derived",
            "--choice-scoring",
            "exclude",
            "-vv",
        ]);
        let config = cli.scoring_config();
        assert_eq!(config.wiscar, WiscarScoring::Derived);
        assert_eq!(config.choice_scoring, ChoiceScoring::Exclude);
        assert_eq!(cli.log_level(), "debug");
    }
}
