#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::error;

use ladx_ui::{component::text, theme};

use ladx_gui::{
    config,
    dir::LadxDirectory,
    gui::{Config, GUI},
    logger::parse_log_level,
    route::Route,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(LadxDirectory),
    ApiUrl(String),
    Route(Route),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: ladx [OPTIONS]

Options:
    --datadir <PATH>    Path of ladx datadir
    --api-url <URL>     Base url of the LADX api
    --route <PATH>      Screen to open, e.g. /signup or /reset-password?userId=..&token=..
    -v, --version       Display ladx version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| format!("missing arg to {}", arg))
        };
        match arg.as_str() {
            "--datadir" => res.push(Arg::DatadirPath(LadxDirectory::new(PathBuf::from(
                value()?,
            )))),
            "--api-url" => res.push(Arg::ApiUrl(value()?.to_string())),
            "--route" => res.push(Arg::Route(value()?.parse()?)),
            _ => return Err(format!("unknown argument {}", arg).into()),
        }
        i += 2;
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;

    let mut datadir = None;
    let mut api_url = None;
    let mut initial_route = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(path) => datadir = Some(path),
            Arg::ApiUrl(url) => api_url = Some(url),
            Arg::Route(route) => initial_route = Some(route),
        }
    }

    let datadir = match datadir {
        Some(datadir) => datadir,
        None => LadxDirectory::new_default()?,
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let config_path = datadir.config_file();
    let settings = config::Config::load_or_default(&config_path)?;
    if !config_path.exists() {
        if let Err(e) = settings.to_file(&config_path) {
            eprintln!("Failed to write default configuration: {}", e);
        }
    }
    let mut settings = settings.with_env();
    if let Some(url) = api_url {
        settings.api_url = url;
    }

    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => settings.log_level()?,
    };

    let gui_config = Config::new(datadir, settings, initial_route);

    setup_panic_hook();

    let iced_settings = Settings {
        id: Some("LADX".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: ladx_ui::font::REGULAR,
        fonts: Vec::new(),
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 1000.0,
            height: 800.0,
        },
        position: iced::window::Position::Centered,
        min_size: Some(Size {
            width: 600.0,
            height: 500.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "LADX".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .scale_factor(GUI::scale_factor)
        .subscription(GUI::subscription)
        .settings(iced_settings)
        .window(window_settings)
        .run_with(move || GUI::new((gui_config, Some(log_level))))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("ladx")
            .chain(line.split(' ').filter(|a| !a.is_empty()))
            .map(|a| a.to_string())
            .collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(args("")).ok(), Some(Vec::new()));
        assert!(parse_args(args("--meth")).is_err());
        assert!(parse_args(args("--datadir")).is_err());
        assert!(parse_args(args("--route /nowhere")).is_err());
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(LadxDirectory::new(PathBuf::from("hello"))),
                Arg::Route(Route::Kyc),
            ]),
            parse_args(args("--datadir hello --route /kyc")).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::ApiUrl("https://api.ladx.africa/api/v1".to_string()),
                Arg::Route(Route::ResetPassword {
                    user_id: Some("42".to_string()),
                    token: Some("t0k".to_string()),
                }),
            ]),
            parse_args(args(
                "--api-url https://api.ladx.africa/api/v1 --route /reset-password?userId=42&token=t0k"
            ))
            .ok()
        );
    }
}
