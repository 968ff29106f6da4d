// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use iced_reel::config;
use iced_reel::error::{ConfigurationError, Error};
use iced_reel::i18n::fluent::I18n;
use iced_reel::infrastructure::FsDirectoryLister;
use iced_reel::playback::Playlist;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const EXIT_GUI_FAILURE: u8 = 1;
const EXIT_CONFIGURATION: u8 = 2;

const HELP: &str = "\
Usage: iced_reel [FOLDER] [--lang LOCALE] [--config-dir DIR]

Plays every video in FOLDER one after another. FOLDER is remembered, so later
runs without it reopen the same folder.

Keys: Right/Left next/previous, Space play/pause, Enter overlay, F11 fullscreen.
";

struct Args {
    folder: Option<PathBuf>,
    lang: Option<String>,
    config_dir: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let folder = args.opt_free_from_str()?;
    Ok(Some(Args {
        folder,
        lang,
        config_dir,
    }))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_reel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(EXIT_CONFIGURATION);
        }
    };

    let (mut config, config_warning) = config::load_with_override(args.config_dir.clone());
    let from_args = args.folder.is_some();
    let folder = args
        .folder
        .unwrap_or_else(|| config.playback.folder.clone());
    info!(folder = %folder.display(), "listing video folder");

    let lister = FsDirectoryLister::new(config.playback.sort_order);
    let playlist = match Playlist::from_folder(&lister, &folder) {
        Ok(playlist) => playlist,
        Err(err) => {
            error!(error = %err, "cannot start playback");
            let i18n = I18n::new(args.lang, &config);
            eprintln!("{}", startup_message(&i18n, &err, &folder));
            return ExitCode::from(EXIT_CONFIGURATION);
        }
    };

    // An unreadable settings file is left alone rather than overwritten.
    if from_args && config_warning.is_none() {
        match config::remember_folder(&mut config, &folder, args.config_dir) {
            Ok(true) => info!(folder = %folder.display(), "remembered video folder"),
            Ok(false) => {}
            Err(err) => warn!(error = %err, "cannot save settings"),
        }
    }

    let flags = Flags {
        playlist,
        config,
        lang: args.lang,
        config_warning,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "GUI runtime failed");
            ExitCode::from(EXIT_GUI_FAILURE)
        }
    }
}

/// Localized explanation for a startup failure.
fn startup_message(i18n: &I18n, err: &Error, folder: &std::path::Path) -> String {
    match err {
        Error::Configuration(config_err) => {
            let path = match config_err {
                ConfigurationError::UnreadableFolder { path, .. } => path.display().to_string(),
                ConfigurationError::EmptyPlaylist => folder.display().to_string(),
            };
            i18n.tr_with_args(config_err.i18n_key(), &[("path", path.as_str())])
        }
        other => other.to_string(),
    }
}
