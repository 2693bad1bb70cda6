//! Line-oriented console front-end over [`App`].

pub mod command;
pub mod render;

use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::app::{App, Screen};
use crate::form::{FieldError, SubmitError, ValidationErrors};
use crate::route::Route;
use crate::table::ActionError;

pub use command::{Command, HELP, ParseCommandError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Error)]
pub enum UiError {
    #[error("not available on this screen")]
    NotHere,
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl UiError {
    /// Whether the screen already shows this failure, as a notice or as an
    /// inline field error.
    pub fn already_visible(&self) -> bool {
        matches!(
            self,
            UiError::Action(ActionError::Transport(_))
                | UiError::Submit(SubmitError::Transport(_) | SubmitError::Validation(_))
                | UiError::Field(_)
                | UiError::Validation(_)
        )
    }
}

/// Apply one command to the mounted screen.
pub async fn execute(app: &mut App, command: Command) -> Result<Flow, UiError> {
    let route = match (app.screen_mut(), command) {
        (_, Command::Quit) => return Ok(Flow::Quit),
        (_, Command::Help) => None,

        (Screen::Table(table), Command::List) => {
            table.refresh().await;
            None
        }
        (Screen::Table(table), Command::Search(query)) => {
            table.set_search(query);
            None
        }
        (Screen::Table(table), Command::Filter(filter)) => {
            table.set_status_filter(filter);
            None
        }
        (Screen::Table(table), Command::Sort(column)) => {
            table.sort_by(column);
            None
        }
        (Screen::Table(table), Command::Page(page)) => {
            table.set_page(page);
            None
        }
        (Screen::Table(table), Command::Size(size)) => {
            table.set_page_size(size);
            None
        }
        (Screen::Table(_), Command::Add) => Some(Route::EmployeeForm(None)),
        (Screen::Table(table), Command::Edit(id)) => Some(table.edit(id)?),
        (Screen::Table(table), Command::Toggle(id)) => {
            table.request_toggle(id)?;
            None
        }
        (Screen::Table(table), Command::Delete(id)) => {
            table.request_delete(id)?;
            None
        }
        (Screen::Table(table), Command::Yes) => {
            table.confirm().await?;
            None
        }
        (Screen::Table(table), Command::No) => {
            table.cancel();
            None
        }

        (Screen::Form(form), Command::Set(field, value)) => {
            form.set_field(field, &value)?;
            None
        }
        (Screen::Form(form), Command::Next) => {
            form.next()?;
            None
        }
        (Screen::Form(form), Command::Prev) => {
            form.prev();
            None
        }
        (Screen::Form(form), Command::AddId) => {
            form.add_id_proof()?;
            None
        }
        (Screen::Form(form), Command::Submit) => Some(form.submit().await?),
        (Screen::Form(_), Command::Back | Command::List) => Some(Route::EmployeeTable),

        (_, other) => {
            debug!(command = ?other, "Command not available on this screen");
            return Err(UiError::NotHere);
        }
    };

    if let Some(route) = route {
        app.navigate(route).await;
    }
    Ok(Flow::Continue)
}

async fn present<W>(app: &mut App, output: &mut W) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut text = match app.screen() {
        Screen::Table(table) => render::render_table(table),
        Screen::Form(form) => render::render_form(form),
    };
    for notice in app.take_notices() {
        text.push_str(&notice.to_string());
        text.push('\n');
    }
    text.push_str("> ");
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

/// The form will send a request for `submit`; the awaited call holds the
/// controller, so the placeholder has to be written up front.
fn submission_starts(app: &App) -> bool {
    matches!(app.screen(), Screen::Form(form) if form.will_send())
}

/// Read commands line by line until `quit` or end of input.
pub async fn run<R, W>(app: &mut App, input: R, mut output: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    present(app, &mut output).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            output.write_all(b"> ").await?;
            output.flush().await?;
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                output.write_all(format!("! {}\n> ", e).as_bytes()).await?;
                output.flush().await?;
                continue;
            }
        };

        if command == Command::Help {
            output.write_all(format!("{}\n", HELP).as_bytes()).await?;
        }
        if command == Command::Submit && submission_starts(app) {
            output
                .write_all(format!("{}\n", render::PROCESSING).as_bytes())
                .await?;
            output.flush().await?;
        }
        match execute(app, command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) if e.already_visible() => debug!(error = %e, "Command failed"),
            Err(e) => output.write_all(format!("! {}\n", e).as_bytes()).await?,
        }
        present(app, &mut output).await?;
    }

    output.write_all(b"bye\n").await?;
    output.flush().await
}
