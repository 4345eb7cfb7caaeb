use std::process;

use clap::Parser;
use post_core::PostClient;
use post_editor::{
    config::{CliArgs, Command, Settings},
    interactive, render, telemetry, AppError, HttpTransport, PostEditor, CANCEL_REASON,
};
use tokio::io::{self, AsyncWriteExt, BufReader};
use tracing::{dispatcher, error, info, warn, Dispatch, Level};
use tracing_subscriber::fmt as tracing_fmt;

/// Conventional exit status for a process ended by SIGINT.
const INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
    } else {
        let subscriber = tracing_fmt()
            .with_max_level(Level::ERROR)
            .with_writer(std::io::stderr)
            .finish();
        let dispatch = Dispatch::new(subscriber);
        dispatcher::with_default(&dispatch, || {
            error!(error = %error, "application error");
        });
    }
}

async fn run() -> Result<(), AppError> {
    let settings = Settings::from(CliArgs::parse());
    telemetry::init(&settings.logging)?;
    let client = PostClient::new(&settings.base_url);
    info!(base_url = %client.base_url(), "mounting post editor");

    let transport = HttpTransport::new(reqwest::Client::builder().build()?);
    let mut editor = PostEditor::new(client, transport).with_fetch_timeout(settings.fetch_timeout);

    // Ctrl-C cancels the initial fetch while it is pending and ends the
    // process otherwise.
    let handle = editor.cancel_handle();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if handle.cancel(CANCEL_REASON) {
                info!("initial fetch cancelled from the terminal");
                continue;
            }
            warn!("interrupted");
            process::exit(INTERRUPTED);
        }
    });

    let mut stdout = io::stdout();
    if settings.command == Command::Interactive {
        return interactive::run(&mut editor, BufReader::new(io::stdin()), &mut stdout).await;
    }

    editor.load().await;
    if let Some(failure) = editor.state().error() {
        return Err(failure.into());
    }

    match settings.command {
        Command::List | Command::Interactive => {}
        Command::Create { title, body } => {
            editor.set_title(title);
            editor.set_body(body);
            editor.save().await?;
        }
        Command::Update { id, title, body } => {
            if !editor.select_for_update(id) {
                return Err(AppError::UnknownPost(id));
            }
            if let Some(title) = title {
                editor.set_title(title);
            }
            if let Some(body) = body {
                editor.set_body(body);
            }
            editor.save().await?;
        }
        Command::Delete { id } => editor.delete(id).await?,
    }

    stdout.write_all(render(editor.state()).as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
