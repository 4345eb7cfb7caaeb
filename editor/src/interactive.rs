//! Line-oriented editing session.
//!
//! Each input line is one command. While the initial fetch is in flight
//! `cancel` takes effect immediately and every other line waits until the
//! fetch settles. The editor is re-rendered after every change.

use std::collections::VecDeque;

use post_core::PostId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::editor::{PostEditor, CANCEL_REASON};
use crate::error::AppError;
use crate::transport::Transport;
use crate::view::render;

const HELP: &str = "\
commands:
  title <text>   set the title of the edit buffer
  body <text>    set the body of the edit buffer
  edit <id>      load post <id> into the edit buffer
  save           create or update the edit buffer
  delete <id>    delete post <id>
  show           print the editor
  cancel         cancel the initial fetch
  help           print this help
  quit           leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Title(String),
    Body(String),
    Edit(PostId),
    Save,
    Delete(PostId),
    Show,
    Cancel,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Input>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };
    let id = |rest: &str| {
        rest.trim()
            .parse::<PostId>()
            .map_err(|_| format!("expected a post id, got {:?}", rest.trim()))
    };
    let input = match word {
        "" => return Ok(None),
        "title" => Input::Title(rest.to_string()),
        "body" => Input::Body(rest.to_string()),
        "edit" => Input::Edit(id(rest)?),
        "save" => Input::Save,
        "delete" => Input::Delete(id(rest)?),
        "show" => Input::Show,
        "cancel" => Input::Cancel,
        "help" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => return Err(format!("unknown command {other:?}; type `help`")),
    };
    Ok(Some(input))
}

/// Drive `editor` from `input` until `quit` or end of input.
pub async fn run<T, R, W>(editor: &mut PostEditor<T>, input: R, output: &mut W) -> Result<(), AppError>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut input_open = true;

    output.write_all(render(editor.state()).as_bytes()).await?;

    // Lines other than `cancel` typed during the fetch run once it settles.
    let mut queued = VecDeque::new();
    let handle = editor.cancel_handle();
    {
        let load = editor.load();
        tokio::pin!(load);
        loop {
            tokio::select! {
                () = &mut load => break,
                line = lines.next_line(), if input_open => match line? {
                    Some(line) if matches!(parse_line(&line), Ok(Some(Input::Cancel))) => {
                        handle.cancel(CANCEL_REASON);
                    }
                    Some(line) => queued.push_back(line),
                    None => input_open = false,
                },
            }
        }
    }
    output.write_all(render(editor.state()).as_bytes()).await?;
    output.flush().await?;

    loop {
        let line = match queued.pop_front() {
            Some(line) => line,
            None if input_open => match lines.next_line().await? {
                Some(line) => line,
                None => break,
            },
            None => break,
        };
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                output.write_all(format!("{message}\n").as_bytes()).await?;
                continue;
            }
        };
        debug!(?command, "interactive command");

        match command {
            Input::Title(title) => editor.set_title(title),
            Input::Body(body) => editor.set_body(body),
            Input::Edit(id) => {
                if !editor.select_for_update(id) {
                    output.write_all(format!("no post with id {id}\n").as_bytes()).await?;
                    continue;
                }
            }
            // Failures land in the state's error line.
            Input::Save => {
                let _ = editor.save().await;
            }
            Input::Delete(id) => {
                let _ = editor.delete(id).await;
            }
            Input::Show => {}
            Input::Cancel => {
                output.write_all(b"nothing to cancel\n").await?;
                continue;
            }
            Input::Help => {
                output.write_all(HELP.as_bytes()).await?;
                continue;
            }
            Input::Quit => break,
        }
        output.write_all(render(editor.state()).as_bytes()).await?;
        output.flush().await?;
    }

    output.flush().await?;
    Ok(())
}
