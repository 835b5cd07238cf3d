use clap::{Parser, Subcommand};

/// CLI arguments for countrydex
#[derive(Debug, Parser)]
#[command(
    name = "countrydex",
    version,
    about = "Browse, search and page through the world's countries from the terminal"
)]
pub struct CliArgs {
    /// Read countries from a local file instead of the network
    /// (REST Countries `.json` / `.json.gz`, or a `.bin` / `.bin.gz` snapshot)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Cards per page (default: 16, or COUNTRYDEX_PAGE_SIZE)
    #[arg(short = 's', long = "page-size", global = true)]
    pub page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// Print one page of country cards
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Only countries whose name contains this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the detail view for a country, including current weather
    Show {
        /// 3-letter country code (e.g. DEU, usa)
        code: String,

        /// Skip the weather lookup
        #[arg(long)]
        no_weather: bool,
    },

    /// Interactive browser: n/p to page, a number to jump, /text to search,
    /// `open CODE` for details, q to quit
    Browse,

    /// Save the loaded catalog as a binary snapshot for offline use
    Snapshot {
        /// Output path; a `.gz` suffix compresses it
        out: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            CliArgs::try_parse_from(["countrydex", "list", "--search", "land", "-s", "8"]).unwrap();
        assert_eq!(args.page_size, Some(8));
        match args.command {
            Commands::List { page, search } => {
                assert_eq!(page, 1);
                assert_eq!(search.as_deref(), Some("land"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn show_takes_a_code() {
        let args = CliArgs::try_parse_from(["countrydex", "show", "deu", "--no-weather"]).unwrap();
        assert!(matches!(
            args.command,
            Commands::Show { ref code, no_weather: true } if code == "deu"
        ));
        assert!(CliArgs::try_parse_from(["countrydex", "show"]).is_err());
    }
}
