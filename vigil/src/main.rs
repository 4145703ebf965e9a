use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use vigil_core::discover::{DiscoveryOptions, DiscoveryProgressCallback, execute_discovery};
use vigil_core::print_banner;
use vigil_core::report::{ReportFormat, generate_json_report, generate_text_report, save_report};

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    match chosen_command.subcommand() {
        Some(("scan", sub_matches)) => handle_scan(sub_matches, quiet).await,
        None => {}
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

async fn handle_scan(sub_matches: &ArgMatches, quiet: bool) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let url = sub_matches.get_one::<String>("url").unwrap();
    let max_pages = *sub_matches.get_one::<usize>("max-pages").unwrap_or(&10);
    let strict = sub_matches.get_flag("strict");
    let threads = *sub_matches.get_one::<usize>("threads").unwrap_or(&4);
    let timeout = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let deadline = sub_matches.get_one::<u64>("deadline").copied();
    let output = sub_matches.get_one::<String>("output");
    let format = sub_matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    if !quiet {
        println!("\n  Surveying {}", url.bright_white());
        println!(
            "  Max pages: {}   Workers: {}   Mode: {}\n",
            max_pages,
            threads,
            if strict { "strict" } else { "standard" }
        );
    }

    let spinner = if quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Starting discovery...");
        Some(pb)
    };

    let progress_callback: Option<DiscoveryProgressCallback> = spinner.as_ref().map(|pb| {
        let pb = pb.clone();
        Arc::new(move |msg: String| {
            pb.set_message(msg);
        }) as DiscoveryProgressCallback
    });

    let mut options = DiscoveryOptions::new(url);
    options.max_pages = max_pages;
    options.strict = strict;
    options.workers = threads;
    options.timeout_secs = timeout;
    options.deadline = deadline.map(Duration::from_secs);

    match execute_discovery(options, progress_callback).await {
        Ok(brief) => {
            if let Some(ref pb) = spinner {
                pb.finish_and_clear();
            }
            if !quiet {
                println!(
                    "{} Discovery complete: {} pages analyzed, {} fetch failures\n",
                    "✓".green().bold(),
                    brief.pages.len(),
                    brief.fetch_errors.len()
                );
            }

            let report = match ReportFormat::from_str(format) {
                Some(ReportFormat::Json) => match generate_json_report(&brief) {
                    Ok(json) => json,
                    Err(e) => {
                        eprintln!("{} Failed to serialize report: {}", "✗".red().bold(), e);
                        std::process::exit(1);
                    }
                },
                _ => generate_text_report(&brief),
            };

            if let Some(path) = output {
                let expanded = shellexpand::tilde(path);
                let path = Path::new(expanded.as_ref());
                match save_report(&report, path) {
                    Ok(()) => {
                        println!("{} Report saved to {}", "✓".green().bold(), path.display())
                    }
                    Err(e) => {
                        eprintln!("{} Failed to save report: {}", "✗".red().bold(), e);
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", report);
            }
        }
        Err(e) => {
            if let Some(ref pb) = spinner {
                pb.finish_and_clear();
            }
            eprintln!("{} Scan failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
