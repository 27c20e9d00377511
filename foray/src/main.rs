use colored::Colorize;
use commands::command_argument_builder;

mod commands;
mod handlers;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    if !quiet {
        print_banner();
    }

    match chosen_command.subcommand() {
        Some(("scan", primary_command)) => {
            if let Err(e) = handlers::handle_scan(primary_command).await {
                eprintln!("{} Scan failed: {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        }
        None => {
            // No subcommand provided, just show the banner
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

const BANNER: &str = r#"
 _____ ___  ____      _ __   __
|  ___/ _ \|  _ \    / \\ \ / /
| |_ | | | | |_) |  / _ \\ V /
|  _|| |_| |  _ <  / ___ \| |
|_|   \___/|_| \_\/_/   \_\_|
"#;

fn print_banner() {
    println!("{}", BANNER.bright_cyan());
    println!(
        "{}",
        "  exposed-path scanner - use only on hosts you are authorized to test"
            .bright_black()
    );
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
