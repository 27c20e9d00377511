use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("foray")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("foray")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("scan")
                .about(
                    "Probe a host for exposed paths: admin panels, backups, config \
                leftovers. Respects robots.txt and folds in sitemap.xml discoveries.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The base URL to scan")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(-w --"wordlist-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited candidate path list (default: built-in list)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-t --"threads" <NUM_WORKERS>)
                        .required(false)
                        .help("Maximum number of probe requests in flight at once")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("12"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Per-request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save results to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output file format: tsv, json")
                        .value_parser(["tsv", "json"])
                        .default_value("tsv"),
                ),
        )
}
