//! Terminal shell for NoteApp.
//!
//! # Responsibility
//! - Act as the UI event loop: read one command per line, turn it into a
//!   `UiEvent`, print the resulting frame.
//! - Open the per-user notes database and logging on startup.

use anyhow::{bail, Context, Result};
use log::{info, warn};
use noteapp_core::views::confirm_dialog::DialogEvent;
use noteapp_core::views::editor::EditorField;
use noteapp_core::views::note_list::DELETE_MENU_LABEL;
use noteapp_core::{
    init_logging, AppConfig, AppController, Frame, NoteApp, SqliteNoteStore, UiEvent,
    UserNotifier,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
commands:
  list            show the note list
  new             start a new note
  open <n>        open note number n
  title <text>    set the title
  body <text>     set the body (rich-text markup)
  menu <n>        right-click note number n
  delete          choose Delete in the open menu
  confirm         confirm the open dialog
  cancel          cancel the open dialog
  dismiss         click the dialog overlay
  click           click empty window space
  show            print the whole window
  wait            let a pending auto-save run
  help            this text
  quit            exit";

/// Prints alerts to stderr in place of a modal alert box.
struct TerminalNotifier;

impl UserNotifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

enum Command {
    Event(UiEvent),
    List,
    Show,
    Wait,
    Help,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--version" || arg == "-V") {
        println!("noteapp {}", noteapp_core::core_version());
        return Ok(());
    }

    let config = AppConfig::from_env().context("failed to resolve configuration")?;
    config
        .ensure_data_dir()
        .context("failed to create data directory")?;
    if let Err(err) = init_logging(&config.log_level, config.log_dir()) {
        eprintln!("logging disabled: {err}");
    }

    let db_path = config.db_path();
    info!("event=app_open module=cli status=start db_path={}", db_path.display());
    let store = SqliteNoteStore::open(&db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;
    let controller = AppController::new(Arc::new(store), Arc::new(TerminalNotifier))
        .with_autosave_delay(config.autosave_delay);
    let app = NoteApp::new(controller);
    app.start().await;

    println!("NoteApp {} ({})", noteapp_core::core_version(), db_path.display());
    print_list(&app.render());
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let frame = app.render();
        let command = match parse_command(line.trim(), &frame) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Event(event) => {
                app.handle(event).await;
                print_frame(&app.render());
            }
            Command::List => print_list(&app.render()),
            Command::Show => print_frame(&app.render()),
            Command::Wait => settle(&app).await,
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    settle(&app).await;
    info!("event=app_close module=cli status=ok");
    Ok(())
}

/// Waits until no auto-save is pending, so quitting never drops an edit.
async fn settle(app: &NoteApp<SqliteNoteStore>) {
    let delay = app.controller().autosave_delay();
    if app.controller().autosave_pending() {
        tokio::time::sleep(delay).await;
    }
    // Grace period for a save that already started its store call.
    tokio::time::sleep(Duration::from_millis(100)).await;
    if app.controller().autosave_pending() {
        warn!("event=app_close module=cli status=pending_autosave");
    }
}

fn parse_command(line: &str, frame: &Frame) -> Result<Option<Command>> {
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let command = match verb {
        "list" | "ls" => Command::List,
        "show" => Command::Show,
        "wait" => Command::Wait,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "new" => Command::Event(UiEvent::NewNote),
        "open" => Command::Event(UiEvent::ClickNote(note_at(frame, rest)?)),
        "menu" => Command::Event(UiEvent::RightClickNote {
            note_id: note_at(frame, rest)?,
            x: 0.0,
            y: 0.0,
        }),
        "title" => Command::Event(UiEvent::Input {
            field: EditorField::Title,
            value: rest.to_string(),
        }),
        "body" => Command::Event(UiEvent::Input {
            field: EditorField::Body,
            value: rest.to_string(),
        }),
        "delete" => Command::Event(UiEvent::ClickMenuDelete),
        "confirm" => Command::Event(UiEvent::Dialog(DialogEvent::ClickConfirm)),
        "cancel" => Command::Event(UiEvent::Dialog(DialogEvent::ClickCancel)),
        "dismiss" => Command::Event(UiEvent::Dialog(DialogEvent::ClickOverlay)),
        "click" => Command::Event(UiEvent::ClickWindow),
        other => bail!("unknown command `{other}`; try `help`"),
    };
    Ok(Some(command))
}

fn note_at(frame: &Frame, raw: &str) -> Result<String> {
    let index: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("expected a note number, got `{raw}`"))?;
    index
        .checked_sub(1)
        .and_then(|idx| frame.items.get(idx))
        .map(|item| item.id.clone())
        .with_context(|| format!("no note number {index}"))
}

fn print_list(frame: &Frame) {
    if frame.items.is_empty() {
        println!("  (no notes)");
    }
    for (idx, item) in frame.items.iter().enumerate() {
        let marker = if item.selected { '*' } else { ' ' };
        println!("{marker} {:>3}. {}", idx + 1, item.label);
    }
}

fn print_frame(frame: &Frame) {
    print_list(frame);
    println!("---");
    let title = if frame.editor.title.is_empty() {
        format!("<{}>", frame.editor.placeholder)
    } else {
        frame.editor.title.clone()
    };
    let state = if frame.editor.composing_new { " (new)" } else { "" };
    println!("title{state}: {title}");
    println!("body: {}", frame.editor.content);
    if frame.menu.visible {
        println!("[menu: {DELETE_MENU_LABEL}]");
    }
    if let Some(dialog) = &frame.dialog {
        println!("=== {} ===", dialog.title);
        println!("{}", dialog.message);
        println!(
            "[{}] [{}]",
            dialog.cancel_label.to_lowercase(),
            dialog.confirm_label.to_lowercase()
        );
    }
}
