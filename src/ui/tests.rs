use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, PickerUi, UiLabels};
use crate::picker::{PaneRow, Pool, User};

fn users() -> Vec<User> {
	vec![
		User::available("tim.duncan@sse.com"),
		User::available("john@hello.com"),
		User::available("tony.parker@sse.com"),
	]
}

fn app() -> App<'static> {
	PickerUi::new(users()).into_app()
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn press(app: &mut App<'_>, event: KeyEvent) {
	let outcome = app.handle_key(event).expect("key handling succeeds");
	assert!(outcome.is_none(), "{event:?} should not close the picker");
}

fn type_text(app: &mut App<'_>, text: &str) {
	for c in text.chars() {
		press(app, key(KeyCode::Char(c)));
	}
}

fn emails(users: Vec<&User>) -> Vec<&str> {
	users.into_iter().map(|user| user.email.as_str()).collect()
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn render(app: &mut App<'_>, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw succeeds");
	buffer_to_string(terminal.backend().buffer())
}

#[test]
fn typing_filters_the_available_pane() {
	let mut app = app();
	type_text(&mut app, "tim");

	assert_eq!(app.search_input.text(), "tim");
	assert_eq!(app.picker.query(), "tim");
	assert_eq!(emails(app.picker.available()), ["tim.duncan@sse.com"]);
	assert_eq!(app.cursor(Pool::Available), Some(0));
}

#[test]
fn checking_a_group_and_pressing_enter_moves_its_members() {
	let mut app = app();
	assert!(matches!(
		app.current_row(),
		Some(PaneRow::Group {
			domain: "sse.com",
			..
		})
	));

	press(&mut app, key(KeyCode::Char(' ')));
	assert!(app.picker.is_group_checked(Pool::Available, "sse.com"));
	assert_eq!(app.search_input.text(), "", "space toggles instead of typing");

	press(&mut app, key(KeyCode::Enter));
	assert_eq!(
		emails(app.picker.selected()),
		["tim.duncan@sse.com", "tony.parker@sse.com"]
	);
	assert_eq!(emails(app.picker.available()), ["john@hello.com"]);
	assert!(app.picker.checked(Pool::Available).is_empty());
	assert_eq!(app.cursor(Pool::Available), Some(0));
}

#[test]
fn enter_in_selected_pane_removes_checked_rows() {
	let mut app = PickerUi::new(vec![
		User::selected("tim.duncan@sse.com"),
		User::available("john@hello.com"),
		User::selected("boris.diaw@natgeo.com"),
	])
	.into_app();

	press(&mut app, key(KeyCode::Tab));
	assert_eq!(app.focus, Pool::Selected);
	press(&mut app, key(KeyCode::Down));
	press(&mut app, key(KeyCode::Char(' ')));
	assert!(app.picker.is_checked(Pool::Selected, "boris.diaw@natgeo.com"));

	press(&mut app, key(KeyCode::Enter));
	assert_eq!(emails(app.picker.selected()), ["tim.duncan@sse.com"]);
	assert_eq!(
		emails(app.picker.available()),
		["john@hello.com", "boris.diaw@natgeo.com"]
	);
	assert_eq!(app.cursor(Pool::Selected), Some(0));
}

#[test]
fn typing_is_ignored_while_selected_pane_is_focused() {
	let mut app = app();
	press(&mut app, key(KeyCode::Tab));
	type_text(&mut app, "tim");
	assert_eq!(app.search_input.text(), "");
	assert_eq!(app.picker.available().len(), 3);
}

#[test]
fn expanding_and_collapsing_a_group_keeps_cursor_on_header() {
	let mut app = app();
	press(&mut app, key(KeyCode::Right));
	assert!(app.picker.is_expanded(Pool::Available, "sse.com"));
	assert_eq!(app.picker.rows(Pool::Available).len(), 4);

	press(&mut app, key(KeyCode::Down));
	press(&mut app, key(KeyCode::Down));
	assert!(matches!(
		app.current_row(),
		Some(PaneRow::Member { user, nested: true, .. }) if user.email == "tony.parker@sse.com"
	));

	press(&mut app, key(KeyCode::Char(' ')));
	assert!(app.picker.is_checked(Pool::Available, "tony.parker@sse.com"));
	assert!(!app.picker.is_group_checked(Pool::Available, "sse.com"));

	press(&mut app, key(KeyCode::Left));
	assert!(!app.picker.is_expanded(Pool::Available, "sse.com"));
	assert_eq!(app.cursor(Pool::Available), Some(0));
}

#[test]
fn cursor_stops_at_pane_edges() {
	let mut app = app();
	press(&mut app, key(KeyCode::Up));
	assert_eq!(app.cursor(Pool::Available), Some(0));
	for _ in 0..5 {
		press(&mut app, key(KeyCode::Down));
	}
	assert_eq!(app.cursor(Pool::Available), Some(1));

	press(&mut app, key(KeyCode::Tab));
	assert_eq!(app.cursor(Pool::Selected), None);
	press(&mut app, key(KeyCode::Char(' ')));
	press(&mut app, key(KeyCode::Down));
	assert_eq!(app.cursor(Pool::Selected), None);
}

#[test]
fn ctrl_a_toggles_select_all_for_focused_pane() {
	let mut app = app();
	press(&mut app, ctrl('a'));
	assert_eq!(app.picker.checked(Pool::Available).len(), 3);
	press(&mut app, ctrl('a'));
	assert!(app.picker.checked(Pool::Available).is_empty());
}

#[test]
fn ctrl_n_adds_only_new_valid_addresses() {
	let mut app = app();
	type_text(&mut app, "thisisnoonesemail");
	press(&mut app, ctrl('n'));
	assert_eq!(app.picker.users().len(), 3);

	app.set_query("");
	assert_eq!(app.search_input.text(), "");
	type_text(&mut app, "new.user@example.com");
	assert!(app.picker.can_add_query_as_email());
	press(&mut app, ctrl('n'));

	assert_eq!(app.picker.users().len(), 4);
	assert_eq!(emails(app.picker.available()), ["new.user@example.com"]);
	assert!(!app.picker.can_add_query_as_email());
	assert_eq!(app.cursor(Pool::Available), Some(0));
}

#[test]
fn escape_cancels_with_current_query() {
	let mut app = app();
	type_text(&mut app, "jo");
	let outcome = app
		.handle_key(key(KeyCode::Esc))
		.expect("key handling succeeds")
		.expect("escape closes the picker");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "jo");
	assert!(outcome.recipients.is_empty());
}

#[test]
fn ctrl_s_accepts_selected_recipients() {
	let mut app = app();
	press(&mut app, key(KeyCode::Down));
	press(&mut app, key(KeyCode::Char(' ')));
	press(&mut app, key(KeyCode::Enter));

	let outcome = app
		.handle_key(ctrl('s'))
		.expect("key handling succeeds")
		.expect("ctrl+s closes the picker");
	assert!(outcome.accepted);
	assert_eq!(outcome.recipients, vec![User::selected("john@hello.com")]);
}

#[test]
fn builder_applies_query_labels_and_title() {
	let mut labels = UiLabels::default();
	labels.pane_mut(Pool::Selected).title = "Recipients".to_string();
	let mut app = PickerUi::new(users())
		.with_labels(labels)
		.with_input_title("Find")
		.with_initial_query("sse")
		.with_theme_name("light")
		.into_app();

	assert_eq!(app.search_input.text(), "sse");
	assert_eq!(app.picker.available().len(), 2);

	let view = render(&mut app, 80, 12);
	assert!(view.contains("Find > sse"), "{view}");
	assert!(view.contains("Recipients (0)"), "{view}");
}

#[test]
fn render_shows_both_panes_and_groups() {
	let mut app = app();
	let view = render(&mut app, 80, 12);

	assert!(view.contains("Search > "), "{view}");
	assert!(view.contains("Available (3)"), "{view}");
	assert!(view.contains("Selected (0)"), "{view}");
	assert!(view.contains("▸ sse.com (2)"), "{view}");
	assert!(view.contains("john@hello.com"), "{view}");
	assert!(view.contains("No recipients selected"), "{view}");
	assert!(view.contains("0 checked"), "{view}");
	assert!(view.contains("Enter: Add"), "{view}");
	assert!(!view.contains("Ctrl+N"), "{view}");
}

#[test]
fn render_reflects_checks_and_add_email_hint() {
	let mut app = app();
	press(&mut app, key(KeyCode::Right));
	press(&mut app, key(KeyCode::Char(' ')));
	let view = render(&mut app, 80, 12);
	assert!(view.contains("[x] ▾ sse.com (2)"), "{view}");
	assert!(view.contains("[-] Email"), "{view}");
	assert!(view.contains("2 checked"), "{view}");

	type_text(&mut app, "new.user@example.com");
	let view = render(&mut app, 80, 12);
	assert!(view.contains("No matching addresses"), "{view}");
	assert!(view.contains("Ctrl+N: Add Email new.user@example.com"), "{view}");
}

#[test]
fn ctrl_l_toggles_log_panel() {
	crate::logging::initialize(log::LevelFilter::Debug);
	let mut app = app();
	press(&mut app, ctrl('l'));
	assert!(app.show_logs);
	let view = render(&mut app, 80, 20);
	assert!(view.contains(" Log "), "{view}");

	press(&mut app, ctrl('l'));
	assert!(!app.show_logs);
	let view = render(&mut app, 80, 20);
	assert!(!view.contains(" Log "), "{view}");
}
