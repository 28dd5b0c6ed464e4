use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use scamguard::advice::{escape_html, Advice};
use scamguard::identity_scorer::assess_identity_detailed;
use scamguard::{
    assess_link, assess_text, AssessmentResult, PageScanner, PageSnapshot, ReferenceData,
    ScanReport, Sensitivity, Settings,
};
use serde::Serialize;
use std::process;

fn build_cli() -> Command {
    Command::new("scamguard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Local scam-risk advisor for links, post text and profile identities")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Settings file path")
                .default_value(Settings::default_path()),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("DIR")
                .help("Directory holding blacklist.json, official_accounts.json and scam_phrases.json")
                .default_value("data"),
        )
        .arg(
            Arg::new("sensitivity")
                .short('s')
                .long("sensitivity")
                .value_name("LEVEL")
                .help("Override the configured sensitivity")
                .value_parser(["low", "medium", "high"])
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging of every signal and outcome")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write a default settings file and exit")
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("link")
                .about("Assess an outbound link")
                .arg(Arg::new("url").value_name("URL").required(true))
                .arg(
                    Arg::new("context")
                        .long("context")
                        .value_name("TEXT")
                        .help("Text surrounding the link")
                        .default_value(""),
                ),
        )
        .subcommand(
            Command::new("text")
                .about("Assess a block of post text")
                .arg(Arg::new("text").value_name("TEXT").required(true)),
        )
        .subcommand(
            Command::new("identity")
                .about("Assess a profile name against known public identities")
                .arg(Arg::new("name").value_name("NAME").required(true))
                .arg(
                    Arg::new("verified")
                        .long("verified")
                        .help("The profile shows a verification badge")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("scan")
                .about("Scan a page snapshot (JSON or YAML) the way a page scanner would")
                .arg(Arg::new("snapshot").value_name("FILE").required(true)),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    if let Some(path) = matches.get_one::<String>("generate-config") {
        Settings::default().to_file(path)?;
        println!("Default settings written to: {path}");
        return Ok(());
    }

    let config_path = string_arg(matches, "config", Settings::default_path());
    let mut settings = Settings::load_or_default(config_path)?;
    if let Some(level) = matches.get_one::<String>("sensitivity") {
        settings.sensitivity = Sensitivity::parse_lossy(level);
    }
    log::debug!("Effective settings: {:?}", settings);

    let data = ReferenceData::load_from_dir(string_arg(matches, "data", "data"));
    let json = matches.get_flag("json");

    match matches.subcommand() {
        Some(("link", sub)) => {
            let url = string_arg(sub, "url", "");
            let context = string_arg(sub, "context", "");
            let result = assess_link(url, &context.to_lowercase(), settings.sensitivity, &data);
            let advice = Advice::for_link(&result, &settings);
            if json {
                print_json(&LinkOutput {
                    url,
                    result: &result,
                    advice: &advice,
                })?;
            } else {
                print_result("Link", &result);
                if advice.intercept_navigation {
                    println!("Navigation: blocked ({})", escape_html(url));
                }
            }
        }
        Some(("text", sub)) => {
            let text = string_arg(sub, "text", "");
            let result = assess_text(text, settings.sensitivity, &data);
            if json {
                print_json(&result)?;
            } else {
                print_result("Text", &result);
                if !result.hits.is_empty() {
                    println!("Hits:    {}", result.hits.join(", "));
                }
            }
        }
        Some(("identity", sub)) => {
            let name = string_arg(sub, "name", "");
            let verified = sub.get_flag("verified");
            let detailed = assess_identity_detailed(name, verified, settings.sensitivity, &data);
            if json {
                print_json(&detailed)?;
            } else {
                print_result("Identity", &detailed.result);
            }
        }
        Some(("scan", sub)) => {
            let snapshot = PageSnapshot::load_from_file(string_arg(sub, "snapshot", ""))?;
            let mut scanner = PageScanner::new(&settings, &data);
            let report = scanner.scan(&snapshot);
            if json {
                print_json(&report)?;
            } else {
                print_report(&settings, &report);
            }
        }
        _ => {
            build_cli().print_help()?;
        }
    }

    Ok(())
}

fn string_arg<'a>(matches: &'a ArgMatches, id: &str, default: &'a str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or(default)
}

#[derive(Serialize)]
struct LinkOutput<'a> {
    url: &'a str,
    result: &'a AssessmentResult,
    advice: &'a Advice,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_result(kind: &str, result: &AssessmentResult) {
    println!("{kind}: {} (score {})", result.badge, result.score);
    if !result.message.is_empty() {
        println!("Message: {}", result.message);
    }
}

fn print_report(settings: &Settings, report: &ScanReport) {
    if !settings.enabled {
        println!("Scanning is disabled in settings");
        return;
    }

    println!(
        "Scanned {} links and {} posts (sensitivity: {})",
        report.links_scanned, report.posts_scanned, settings.sensitivity
    );

    for finding in &report.links {
        println!();
        print_result(&format!("Link {}", finding.href), &finding.result);
        if finding.advice.intercept_navigation {
            println!("Navigation: blocked");
        }
    }

    for finding in &report.posts {
        println!();
        print_result(&format!("Post {}", truncate_string(&finding.key, 40)), &finding.result);
    }

    if let Some(profile) = &report.profile {
        println!();
        print_result(&format!("Profile {}", profile.name), &profile.result);
    }

    if report.is_empty() {
        println!("No threats detected");
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
