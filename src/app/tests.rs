use chrono::{TimeZone, Utc};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tempfile::TempDir;

use crate::editor::{Editor, Key};
use crate::store::{Entry, Store};

use super::model::{EditSession, EditTarget, Screen};
use super::{App, Message, Model, NOT_ADDED, StartMode, ToastLevel, editor_key, update};

fn sample_entry(content: &str) -> Entry {
    Entry {
        id: 7,
        created: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        title: "Walk".to_string(),
        content: content.to_string(),
    }
}

fn new_entry_model() -> Model {
    let session = EditSession::new(Editor::open(None), EditTarget::New { title: None });
    Model::new(Screen::Edit(session), (40, 12))
}

fn viewer_model(lines: usize) -> Model {
    let content = (1..=lines)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let mut model = Model::new(Screen::Closed, (40, 12));
    model.open_viewer(sample_entry(&content));
    model
}

fn type_text(mut model: Model, text: &str) -> Model {
    for ch in text.chars() {
        let key = if ch == '\n' { Key::Enter } else { Key::Char(ch) };
        model = update(model, Message::EditorKey(key));
    }
    model
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn test_app(dir: &TempDir) -> App {
    App::new(Store::open(dir.path().join("journal.json")).unwrap())
}

#[test]
fn test_commit_queues_cleaned_content() {
    let model = type_text(new_entry_model(), "hello  \nworld\n\n");
    let model = update(model, Message::EditorKey(Key::Commit));
    let save = model.pending_save.as_ref().unwrap();
    assert_eq!(save.content, "hello\nworld");
    assert_eq!(save.target, EditTarget::New { title: None });
}

#[test]
fn test_empty_commit_of_new_entry_quits_with_message() {
    let model = type_text(new_entry_model(), "   ");
    let model = update(model, Message::EditorKey(Key::Commit));
    assert!(model.pending_save.is_none());
    assert!(model.should_quit);
    assert_eq!(model.exit_message.as_deref(), Some(NOT_ADDED));
}

#[test]
fn test_cancel_new_entry_quits() {
    let model = type_text(new_entry_model(), "draft");
    let model = update(model, Message::EditorKey(Key::Cancel));
    assert!(model.should_quit);
    assert_eq!(model.exit_message.as_deref(), Some(NOT_ADDED));
}

#[test]
fn test_cancel_existing_entry_returns_to_viewer() {
    let mut model = viewer_model(3);
    model = update(model, Message::EditEntry);
    assert!(matches!(model.screen, Screen::Edit(_)));

    model = type_text(model, "changed");
    model = update(model, Message::EditorKey(Key::Cancel));
    let Screen::View(viewer) = &model.screen else {
        panic!("expected viewer");
    };
    assert_eq!(viewer.entry.content, "line 1\nline 2\nline 3");
    assert_eq!(model.active_toast().map(|(_, l)| l), Some(ToastLevel::Info));
    assert!(!model.should_quit);
}

#[test]
fn test_empty_commit_of_existing_entry_keeps_it() {
    let mut model = Model::new(Screen::Closed, (40, 12));
    model.open_editor(sample_entry(""));
    let model = update(model, Message::EditorKey(Key::Commit));
    assert!(model.pending_save.is_none());
    assert!(matches!(model.screen, Screen::View(_)));
    assert_eq!(model.active_toast().map(|(_, l)| l), Some(ToastLevel::Warning));
}

#[test]
fn test_viewer_scrolling_clamps() {
    // 12 rows leave 8 for content
    let model = viewer_model(20);
    let model = update(model, Message::ScrollDown(100));
    let Screen::View(viewer) = &model.screen else {
        panic!("expected viewer");
    };
    assert_eq!(viewer.viewport.offset(), 12);

    let model = update(model, Message::GoToTop);
    let model = update(model, Message::PageDown);
    let Screen::View(viewer) = &model.screen else {
        panic!("expected viewer");
    };
    assert_eq!(viewer.viewport.offset(), 8);
}

#[test]
fn test_resize_updates_viewer_height() {
    let model = update(viewer_model(20), Message::Resize(40, 30));
    let Screen::View(viewer) = &model.screen else {
        panic!("expected viewer");
    };
    assert_eq!(viewer.viewport.height(), 26);
    assert_eq!(model.editor_area(), (40, 28));
}

#[test]
fn test_viewer_scrolls_over_wrapped_rows() {
    // 20 columns, 4 content rows
    let mut model = Model::new(Screen::Closed, (20, 8));
    model.open_viewer(sample_entry("one two three four five six seven eight
last"));
    let Screen::View(viewer) = &model.screen else {
        panic!("expected viewer");
    };
    assert_eq!(viewer.rows.len(), 3);

    let model = update(model, Message::GoToBottom);
    let Screen::View(viewer) = &model.screen else {
        panic!("expected viewer");
    };
    assert_eq!(viewer.viewport.offset(), 0);
    assert_eq!(viewer.visible_rows().len(), 3);
}

#[test]
fn test_resize_rewraps_viewer() {
    let mut model = Model::new(Screen::Closed, (40, 12));
    model.open_viewer(sample_entry("aaaa bbbb cccc dddd eeee ffff"));
    let model = update(model, Message::Resize(10, 12));
    let Screen::View(viewer) = &model.screen else {
        panic!("expected viewer");
    };
    assert_eq!(viewer.rows.len(), 3);
    assert_eq!(viewer.viewport.total_lines(), 3);

    let model = update(model, Message::Resize(40, 12));
    let Screen::View(viewer) = &model.screen else {
        panic!("expected viewer");
    };
    assert_eq!(viewer.rows.len(), 1);
}

#[test]
fn test_quit_from_new_entry_reports_not_added() {
    let model = update(type_text(new_entry_model(), "x"), Message::Quit);
    assert!(model.should_quit);
    assert_eq!(model.exit_message.as_deref(), Some(NOT_ADDED));
}

#[test]
fn test_toast_clears_on_next_message() {
    let mut model = viewer_model(3);
    model.show_toast(ToastLevel::Info, "hi");
    let model = update(model, Message::Resize(50, 20));
    assert!(model.active_toast().is_some());
    let model = update(model, Message::ScrollDown(1));
    assert!(model.active_toast().is_none());
}

#[test]
fn test_editor_key_mapping() {
    assert_eq!(editor_key(ctrl('g')), Key::Commit);
    assert_eq!(editor_key(ctrl('s')), Key::Commit);
    assert_eq!(editor_key(ctrl('x')), Key::Cancel);
    assert_eq!(editor_key(ctrl('c')), Key::Cancel);
    assert_eq!(editor_key(ctrl('a')), Key::Other);
    assert_eq!(editor_key(press(KeyCode::Esc)), Key::Cancel);
    assert_eq!(editor_key(press(KeyCode::Char('a'))), Key::Char('a'));
    assert_eq!(
        editor_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
        Key::Char('A')
    );
    assert_eq!(editor_key(press(KeyCode::Tab)), Key::Tab);
    assert_eq!(editor_key(press(KeyCode::F(1))), Key::Other);
}

#[test]
fn test_key_release_is_ignored() {
    let model = new_entry_model();
    let mut key = press(KeyCode::Char('a'));
    key.kind = KeyEventKind::Release;
    assert_eq!(App::handle_event(&Event::Key(key), &model), None);
}

#[test]
fn test_viewer_keys() {
    let model = viewer_model(3);
    let msg = |code| App::handle_key(press(code), &model);
    assert_eq!(msg(KeyCode::Char('j')), Some(Message::ScrollDown(1)));
    assert_eq!(msg(KeyCode::Char('k')), Some(Message::ScrollUp(1)));
    assert_eq!(msg(KeyCode::Char(' ')), Some(Message::PageDown));
    assert_eq!(msg(KeyCode::Char('G')), Some(Message::GoToBottom));
    assert_eq!(msg(KeyCode::Char('e')), Some(Message::EditEntry));
    assert_eq!(msg(KeyCode::Char('q')), Some(Message::Quit));
    assert_eq!(msg(KeyCode::Char('z')), None);
}

#[test]
fn test_too_small_editor_only_accepts_quit() {
    let session = EditSession::new(Editor::open(None), EditTarget::New { title: None });
    let model = Model::new(Screen::Edit(session), (40, 2));
    assert!(model.editor_has_no_room());
    assert_eq!(App::handle_key(press(KeyCode::Char('a')), &model), None);
    assert_eq!(App::handle_key(ctrl('c'), &model), Some(Message::Quit));
}

#[test]
fn test_commit_saves_new_entry_and_opens_viewer() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(&dir);

    let msg = Message::EditorKey(Key::Commit);
    let model = type_text(new_entry_model(), "# Rainy day\nstayed in");
    let mut model = update(model, msg.clone());
    app.handle_message_side_effects(&mut model, &msg);

    assert!(model.pending_save.is_none());
    let Screen::View(viewer) = &model.screen else {
        panic!("expected viewer");
    };
    assert_eq!(viewer.entry.title, "Rainy day");
    assert_eq!(viewer.lines, ["# Rainy day", "stayed in"]);
    assert_eq!(app.store.entries().len(), 1);
}

#[test]
fn test_commit_uses_given_title() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(&dir);
    let session = EditSession::new(
        Editor::open(None),
        EditTarget::New {
            title: Some("Monday".to_string()),
        },
    );
    let model = type_text(Model::new(Screen::Edit(session), (40, 12)), "body");

    let msg = Message::EditorKey(Key::Commit);
    let mut model = update(model, msg.clone());
    app.handle_message_side_effects(&mut model, &msg);
    assert_eq!(app.store.entries()[0].title, "Monday");
}

#[test]
fn test_commit_updates_existing_entry() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(&dir);
    let id = app.store.add("Old", "before").unwrap();
    let entry = app.store.get(id).unwrap().clone();

    let mut model = Model::new(Screen::Closed, (40, 12));
    model.open_editor(entry);
    let mut model = update(model, Message::EditorKey(Key::End));
    model = type_text(model, " and after");

    let msg = Message::EditorKey(Key::Commit);
    let mut model = update(model, msg.clone());
    app.handle_message_side_effects(&mut model, &msg);

    assert_eq!(app.store.get(id).unwrap().content, "before and after");
    assert!(matches!(model.screen, Screen::View(_)));
}

#[test]
fn test_failed_save_reopens_editor() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(&dir);
    let mut model = Model::new(Screen::Closed, (40, 12));
    // Entry 99 is not in the store.
    model.open_editor(Entry {
        id: 99,
        ..sample_entry("text")
    });

    let msg = Message::EditorKey(Key::Commit);
    let mut model = update(model, msg.clone());
    app.handle_message_side_effects(&mut model, &msg);

    let Screen::Edit(session) = &model.screen else {
        panic!("expected editor");
    };
    assert_eq!(session.editor.buffer().text(), "text");
    assert_eq!(model.active_toast().map(|(_, l)| l), Some(ToastLevel::Error));
}

#[test]
fn test_initial_model_for_missing_entry_fails() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).with_start(StartMode::View(3));
    assert!(app.initial_model((80, 24)).is_err());
}

#[test]
fn test_initial_model_views_entry() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(&dir);
    let id = app.store.add("t", "a\nb").unwrap();
    let app = app.with_start(StartMode::View(id));
    let model = app.initial_model((80, 24)).unwrap();
    let Screen::View(viewer) = &model.screen else {
        panic!("expected viewer");
    };
    assert_eq!(viewer.viewport.height(), 20);
}
