// SPDX-License-Identifier: MPL-2.0
use folio_store::app::{describe_warning, paths, App, Flags, USAGE};
use folio_store::logging;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let flags = match Flags::from_args(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if flags.help {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    if let Err(err) = logging::init_logging(&logging::resolve_level(flags.log_level.as_deref())) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let app = match App::new(&flags).await {
        Ok(app) => app,
        Err(err) => {
            log::error!("event=startup status=failed error=\"{err}\"");
            eprintln!("Failed to start: {err}");
            return ExitCode::FAILURE;
        }
    };

    for key in app.warnings() {
        eprintln!("Warning: {}", describe_warning(key));
    }

    if flags.list_languages {
        for language in app.catalog().iter() {
            println!("{}\t{}", language.code, language.label);
        }
        return ExitCode::SUCCESS;
    }

    let report = app.start().await;
    log::debug!("event=session_start report={report:?}");

    let store = app.store();
    let value = match &flags.section {
        Some(name) => match store.section(name) {
            Some(value) => value,
            None => {
                eprintln!("No section named `{name}`");
                return ExitCode::FAILURE;
            }
        },
        None => store.current_document().into_value(),
    };

    match serde_json::to_string_pretty(&value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to render content: {err}");
            ExitCode::FAILURE
        }
    }
}
