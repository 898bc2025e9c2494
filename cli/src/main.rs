use log::{debug, error, info, warn, LevelFilter};
use snapmenu::flow::{AppFlow, INVALID_LINK_MESSAGE};
use snapmenu::log_utils;
use snapmenu::MenuDocument;
use snapmenu_sharelink as sharelink;

const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
const VERSION_PARAM_NAME: &str = "version";
const LOG_LEVEL_PARAM_NAME: &str = "log_level";
const LOG_FILE_PARAM_NAME: &str = "log_file";
const MENU_PARAM_NAME: &str = "menu";
const BASE_PARAM_NAME: &str = "base";
const DECODE_PARAM_NAME: &str = "decode";

const DEFAULT_BASE_ADDRESS: &str = "https://snapmenu.app/";

fn main() {
    let args = clap::Command::new("SnapMenu")
        .args(&[
            // Built-in version parameter handling is deficient in that it
            // outputs `<program name> <version>` instead of just
            // `<version>` and also uses `-V` instead of `-v` as the
            // shorthand.
            clap::Arg::new(VERSION_PARAM_NAME)
                .short('v')
                .long("version")
                .action(clap::ArgAction::SetTrue)
                .help("Print the version of this software and exit"),
            clap::Arg::new(LOG_LEVEL_PARAM_NAME)
                .short('l')
                .long("loglvl")
                .action(clap::ArgAction::Set)
                .value_parser(["info", "debug", "trace"])
                .default_value("info")
                .help("Logging level"),
            clap::Arg::new(LOG_FILE_PARAM_NAME)
                .long("logfile")
                .action(clap::ArgAction::Set)
                .help("File path for storing logs. If not specified, the logs are printed to stdout"),
            clap::Arg::new(MENU_PARAM_NAME)
                .action(clap::ArgAction::Set)
                .required_unless_present_any([VERSION_PARAM_NAME, DECODE_PARAM_NAME])
                .help("Path to a menu JSON file to publish as a share address"),
            clap::Arg::new(BASE_PARAM_NAME)
                .short('b')
                .long("base")
                .action(clap::ArgAction::Set)
                .default_value(DEFAULT_BASE_ADDRESS)
                .help("Base address the share link is built on"),
            clap::Arg::new(DECODE_PARAM_NAME)
                .short('d')
                .long("decode")
                .action(clap::ArgAction::Set)
                .conflicts_with(MENU_PARAM_NAME)
                .value_names(["address"])
                .help("Decode a share address (or a bare token) and print the menu as JSON"),
        ])
        .disable_version_flag(true)
        .get_matches();

    if args.get_flag(VERSION_PARAM_NAME) {
        println!("{}", VERSION_STRING);
        return;
    }

    let _guard = log_utils::LogFlushGuard;
    log::set_logger(match args.get_one::<String>(LOG_FILE_PARAM_NAME) {
        None => log_utils::make_stdout_logger(),
        Some(file) => log_utils::make_file_logger(file).expect("Couldn't open the logging file"),
    })
    .expect("Couldn't set logger");

    log::set_max_level(
        match args
            .get_one::<String>(LOG_LEVEL_PARAM_NAME)
            .map(String::as_str)
        {
            None => LevelFilter::Info,
            Some("info") => LevelFilter::Info,
            Some("debug") => LevelFilter::Debug,
            Some("trace") => LevelFilter::Trace,
            Some(x) => panic!("Unexpected log level: {}", x),
        },
    );

    if let Some(input) = args.get_one::<String>(DECODE_PARAM_NAME) {
        run_decode(input);
        return;
    }

    let menu_path = args.get_one::<String>(MENU_PARAM_NAME).unwrap();
    let base = args.get_one::<String>(BASE_PARAM_NAME).unwrap();
    run_encode(menu_path, base);
}

/// Producer path: read a menu document from disk and print the share
/// address it publishes as.
fn run_encode(menu_path: &str, base: &str) {
    let raw = match std::fs::read_to_string(menu_path) {
        Ok(x) => x,
        Err(err) => {
            error!("Couldn't read the menu file: {}", err);
            std::process::exit(1);
        }
    };

    let document: MenuDocument = match serde_json::from_str(&raw) {
        Ok(x) => x,
        Err(err) => {
            error!("Couldn't parse the menu file: {}", err);
            std::process::exit(1);
        }
    };

    let address = match sharelink::build(&document, base) {
        Ok(x) => x,
        Err(err) => {
            error!("Failed to build the share address: {}", err);
            std::process::exit(1);
        }
    };

    info!(
        "Menu '{}': {} categories, {} items",
        document.restaurant_name,
        document.categories.len(),
        document.item_count()
    );
    if address.exceeds_qr_capacity() {
        warn!(
            "Share address is {} characters; dense QR encoding degrades past {}. Consider trimming the menu.",
            address.as_str().len(),
            sharelink::QR_ADVISORY_LIMIT
        );
    }

    println!("{}", address);
}

/// Consumer path: an incoming address (or a bare token) is resolved into
/// a read-only preview of the menu.
fn run_decode(input: &str) {
    // A full address carries the token in its query; accept a bare token
    // pasted directly as well.
    let token = sharelink::extract(input).unwrap_or_else(|| input.to_owned());

    let flow = match sharelink::decode(&token) {
        Ok(document) => AppFlow::for_customer(document),
        Err(err) => {
            debug!("Token rejected: {}", err);
            AppFlow::invalid_link()
        }
    };

    match flow.document() {
        Some(document) => {
            info!(
                "Decoded menu '{}' with {} items",
                document.restaurant_name,
                document.item_count()
            );
            println!(
                "{}",
                serde_json::to_string_pretty(document).expect("Document serialization cannot fail")
            );
        }
        None => {
            error!("{}", flow.error().unwrap_or(INVALID_LINK_MESSAGE));
            std::process::exit(1);
        }
    }
}
