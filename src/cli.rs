use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Look up property records on the Brevard County Property Appraiser site
#[derive(Parser, Debug)]
#[command(name = "property_leads")]
#[command(about = "Look up property records by street address", long_about = None)]
pub struct CliArgs {
    /// Street address to search for, e.g. "1310 CHERRY HILLS RD NE PALM BAY FL 32905"
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Fetch every matching account instead of requiring exactly one
    #[arg(long)]
    pub all: bool,

    /// Maximum number of search results with --all (defaults to BCPAO_SEARCH_LIMIT or 10)
    #[arg(long, value_name = "N", requires = "all")]
    pub limit: Option<NonZeroUsize>,

    /// Also write the results to an XLSX file
    #[arg(long, value_name = "PATH")]
    pub xlsx: Option<PathBuf>,

    /// Print results as JSON instead of debug output
    #[arg(long)]
    pub json: bool,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = CliArgs::try_parse_from([
            "property_leads",
            "100 MAIN ST",
            "--all",
            "--limit",
            "3",
            "--xlsx",
            "out.xlsx",
        ])
        .unwrap();

        assert_eq!(args.address, "100 MAIN ST");
        assert!(args.all);
        assert_eq!(args.limit, NonZeroUsize::new(3));
        assert_eq!(args.xlsx, Some(PathBuf::from("out.xlsx")));
        assert!(!args.json);
    }

    #[test]
    fn limit_must_be_positive() {
        for limit in ["0", "-2"] {
            let parsed =
                CliArgs::try_parse_from(["property_leads", "100 MAIN ST", "--all", "--limit", limit]);
            assert!(parsed.is_err(), "--limit {limit} should be rejected");
        }
    }

    #[test]
    fn limit_only_applies_to_all() {
        let parsed = CliArgs::try_parse_from(["property_leads", "100 MAIN ST", "--limit", "1"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn address_is_required() {
        assert!(CliArgs::try_parse_from(["property_leads"]).is_err());
    }
}
