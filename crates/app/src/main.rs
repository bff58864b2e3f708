use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

use feed_core::Clock;
use feed_core::engine::Viewport;
use services::{FeedConfig, HttpPostSource, PostSource};
use ui::{App, UiApp, build_app_context};

// Phone-shaped window; the viewport handed to the story engine matches it.
const WINDOW_WIDTH: f64 = 420.0;
const WINDOW_HEIGHT: f64 = 760.0;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    clock: Clock,
    viewport: Viewport,
    posts: Arc<dyn PostSource>,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn posts(&self) -> Arc<dyn PostSource> {
        Arc::clone(&self.posts)
    }
}

struct Args {
    api_url: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url taken from GLIMPSE_API_URL");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GLIMPSE_API_URL   base url of the posts endpoint");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api_url })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Flag wins over environment; a missing url is a startup error rather
    // than a feed that silently never loads.
    let config = parsed
        .api_url
        .map(|base_url| FeedConfig { base_url })
        .or_else(FeedConfig::from_env);
    let Some(config) = config else {
        eprintln!("GLIMPSE_API_URL is not set and no --api-url was given");
        print_usage();
        return Err(Box::new(ArgsError::MissingValue { flag: "--api-url" }));
    };

    let posts: Arc<dyn PostSource> = Arc::new(HttpPostSource::new(Some(config)));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        clock: Clock::default_clock(),
        viewport: Viewport::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
        posts,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Glimpse")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
