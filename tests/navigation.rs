// tests/navigation.rs

use menunav::{
    core::navigator::{Flow, Navigator, prompt_menu},
    core::option_parser::{NavigationDecision, parse_option},
    models::{Action, Menu, MenuItem},
    system::console::{Console, ConsoleError, LineConsole},
};
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

type Events = Rc<RefCell<Vec<&'static str>>>;
type TestConsole = LineConsole<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> TestConsole {
    LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn recorder(events: &Events, name: &'static str) -> MenuItem {
    let events = Rc::clone(events);
    Action::from_fn(name, move || events.borrow_mut().push(name))
        .unwrap()
        .into()
}

/// Root: [SubmenuA: [ActionA1, SubmenuB: [ActionB1]], ActionB]
fn scenario_tree(events: &Events) -> Menu {
    let submenu_b = Menu::new("SubmenuB", vec![recorder(events, "ActionB1")]).unwrap();
    let submenu_a = Menu::new(
        "SubmenuA",
        vec![recorder(events, "ActionA1"), submenu_b.into()],
    )
    .unwrap();
    Menu::new("Root", vec![submenu_a.into(), recorder(events, "ActionB")]).unwrap()
}

/// Feeds `inputs` to the navigator one line at a time, applying each decision.
fn drive(navigator: &mut Navigator<'_>, console: &mut TestConsole, inputs: &[&str]) {
    for input in inputs {
        let count = navigator.current().items().len();
        let decision = parse_option(input, count).unwrap();
        assert_eq!(
            navigator.apply(decision, console).unwrap(),
            Flow::Continue,
            "input {:?} ended the session",
            input
        );
    }
}

#[test]
fn selecting_a_root_action_runs_it_and_stays_at_root() {
    // --- Setup ---
    let events = Events::default();
    let root = scenario_tree(&events);
    let mut navigator = Navigator::new(&root);
    let mut console = console("");

    // --- Execute ---
    drive(&mut navigator, &mut console, &["2"]);

    // --- Assert ---
    assert_eq!(*events.borrow(), ["ActionB"]);
    assert_eq!(navigator.breadcrumbs().depth(), 1);
    assert!(std::ptr::eq(navigator.current(), &root));
}

#[test]
fn descending_then_back_returns_to_root() {
    let events = Events::default();
    let root = scenario_tree(&events);
    let mut navigator = Navigator::new(&root);
    let mut console = console("");

    drive(&mut navigator, &mut console, &["1", "<"]);

    assert!(events.borrow().is_empty());
    assert_eq!(navigator.breadcrumbs().depth(), 1);
    assert!(std::ptr::eq(navigator.current(), &root));
}

#[test]
fn action_inside_submenu_returns_to_root_not_submenu() {
    let events = Events::default();
    let root = scenario_tree(&events);
    let mut navigator = Navigator::new(&root);
    let mut console = console("");

    drive(&mut navigator, &mut console, &["1", "1"]);

    assert_eq!(*events.borrow(), ["ActionA1"]);
    assert_eq!(navigator.breadcrumbs().depth(), 1);
    assert_eq!(navigator.current().name(), "Root");
}

#[test]
fn action_at_any_depth_resets_to_root() {
    let events = Events::default();
    let root = scenario_tree(&events);
    let mut navigator = Navigator::new(&root);
    let mut console = console("");

    drive(&mut navigator, &mut console, &["1", "2"]);
    assert_eq!(navigator.breadcrumbs().depth(), 3);

    drive(&mut navigator, &mut console, &["1"]);
    assert_eq!(*events.borrow(), ["ActionB1"]);
    assert_eq!(navigator.breadcrumbs().depth(), 1);
}

#[test]
fn top_from_every_depth_lands_on_root() {
    let events = Events::default();
    let root = scenario_tree(&events);
    let paths: [&[&str]; 3] = [&[], &["1"], &["1", "2"]];

    for path in paths {
        let mut navigator = Navigator::new(&root);
        let mut console = console("");
        drive(&mut navigator, &mut console, path);
        assert_eq!(navigator.breadcrumbs().depth(), path.len() + 1);

        navigator
            .apply(NavigationDecision::Top, &mut console)
            .unwrap();

        assert_eq!(navigator.breadcrumbs().depth(), 1);
        assert!(std::ptr::eq(navigator.current(), &root));
    }
}

#[test]
fn back_from_depth_d_needs_d_minus_one_steps_then_is_a_noop() {
    // --- Setup ---
    let events = Events::default();
    let root = scenario_tree(&events);
    let mut navigator = Navigator::new(&root);
    let mut console = console("");
    drive(&mut navigator, &mut console, &["1", "2"]);
    let depth = navigator.breadcrumbs().depth();

    // --- Execute ---
    for _ in 1..depth {
        navigator
            .apply(NavigationDecision::Back, &mut console)
            .unwrap();
    }
    let at_root_transcript_len = console.output().len();
    navigator
        .apply(NavigationDecision::Back, &mut console)
        .unwrap();

    // --- Assert ---
    assert_eq!(depth, 3);
    assert_eq!(navigator.breadcrumbs().depth(), 1);
    assert!(std::ptr::eq(navigator.current(), &root));
    let extra = String::from_utf8_lossy(&console.output()[at_root_transcript_len..]).into_owned();
    assert_eq!(extra, "Already at main menu.\n");
}

#[test]
fn full_session_transcript() {
    // --- Setup ---
    let events = Events::default();
    let root = scenario_tree(&events);
    let mut console = console("?\n1\n0\nhello\n2\n^\n<\n1\n2\n<\nexit\n");

    // --- Execute ---
    prompt_menu(&root, &mut console).unwrap();

    // --- Assert ---
    let root_menu = "Root >\n1. SubmenuA\n2. ActionB\n";
    let submenu_a = "Root > SubmenuA >\n1. ActionA1\n2. SubmenuB\n";
    let submenu_b = "Root > SubmenuA > SubmenuB >\n1. ActionB1\n";
    let prompt = "Enter choice: ";
    let expected = [
        root_menu,
        prompt,
        "Enter the number of your choice.\n",
        "Enter '<' to go back to the previous menu.\n",
        "Enter '^' to go back to the main menu.\n",
        "Enter '?' to display this help message.\n",
        "Enter 'x' or 'exit' to exit.\n",
        root_menu,
        prompt,
        submenu_a,
        prompt,
        "Choice must be between 1 and 2\n",
        prompt,
        "Invalid input. Please enter a number, or '?' for help.\n",
        prompt,
        submenu_b,
        prompt,
        root_menu,
        prompt,
        "Already at main menu.\n",
        root_menu,
        prompt,
        submenu_a,
        prompt,
        submenu_b,
        prompt,
        submenu_a,
        prompt,
        "Exiting...\n",
    ]
    .concat();
    assert_eq!(String::from_utf8_lossy(console.output()), expected);
    assert!(events.borrow().is_empty());
}

#[test]
fn invalid_menu_definitions_fail_before_navigation() {
    assert!(Menu::new("", vec![]).is_err());
    assert!(Menu::new("Empty", vec![]).is_err());
    assert!(Action::from_fn("  ", || {}).is_err());
}

#[test]
fn bounded_prompt_rejects_inverted_range_without_reading() {
    let mut console = console("1\n");
    let result = console.prompt_int_in_range("x", 5, 3);
    assert!(matches!(result, Err(ConsoleError::InvalidArgument(_))));
    assert!(console.output().is_empty());
}

#[test]
fn bounded_prompt_retries_until_in_range() {
    let mut console = console("abc\n-1\n15\n7\n");
    assert_eq!(console.prompt_int_in_range("n: ", 0, 10).unwrap(), 7);
}
