//! End-to-end navigation scenarios on the scripted console

use std::sync::Arc;

use console_menus::app::{CancelHandler, MenuApplication, MenuApplicationWithQuit, MenuSession};
use console_menus::io::ConsoleIo;
use console_menus::menu::{
    list_fetcher, pop_menu_item, push_menu, quit_item, take_action,
    take_action_and_push, Menu, ScrollingMenu, SingleSelection, StaticMenu,
};
use console_menus::testing::ScriptedConsole;

fn bottom_menu(io: &ConsoleIo, with_shortcuts: bool) -> Arc<dyn Menu> {
    let output = io.output.clone();
    let back_output = io.output.clone();
    StaticMenu::builder()
        .header("bottom")
        .add(take_action(
            "something else",
            with_shortcuts.then_some("s"),
            move || output.print("doing something else\n"),
        ))
        .add(pop_menu_item(
            "Back",
            with_shortcuts.then_some("b"),
            move || back_output.print("backing up\n"),
        ))
        .add(quit_item())
        .build_arc()
}

fn top_menu(io: &ConsoleIo, with_shortcuts: bool) -> Arc<dyn Menu> {
    let output = io.output.clone();
    let bottom = bottom_menu(io, with_shortcuts);
    StaticMenu::builder()
        .header("top")
        .add(take_action_and_push(
            "something",
            with_shortcuts.then_some("s"),
            move || output.print("taking some action\n"),
            move |()| Some(Arc::clone(&bottom)),
        ))
        .add(quit_item())
        .build_arc()
}

#[test]
fn test_push_back_and_quit() {
    let console = ScriptedConsole::with_inputs(["1", "2", "2"]);
    let io = console.io();
    let mut app = MenuApplicationWithQuit::new(top_menu(&io, false), io);
    app.run_application().unwrap();

    assert_eq!(
        console.outputs(),
        vec![
            "top\n 1. something\n 2. Quit (q)\n",
            "Enter selection: ",
            "taking some action\n",
            "bottom\n 1. something else\n 2. Back\n 3. Quit (q)\n",
            "Enter selection: ",
            "backing up\n",
            "top\n 1. something\n 2. Quit (q)\n",
            "Enter selection: ",
            "\nQuitting\n\n",
        ]
    );
    assert!(console.remaining_inputs().is_empty());
}

#[test]
fn test_push_back_and_quit_with_shortcuts() {
    let console = ScriptedConsole::with_inputs(["s", "b", "q"]);
    let io = console.io();
    let mut app = MenuApplicationWithQuit::new(top_menu(&io, true), io);
    app.run_application().unwrap();

    assert_eq!(
        console.outputs(),
        vec![
            "top\n 1. something (s)\n 2. Quit (q)\n",
            "Enter selection: ",
            "taking some action\n",
            "bottom\n 1. something else (s)\n 2. Back (b)\n 3. Quit (q)\n",
            "Enter selection: ",
            "backing up\n",
            "top\n 1. something (s)\n 2. Quit (q)\n",
            "Enter selection: ",
            "\nQuitting\n\n",
        ]
    );
    assert!(console.remaining_inputs().is_empty());
}

#[test]
fn test_pop_menus_handler_depths() {
    let top = StaticMenu::builder().header("top").build_arc();
    let other = StaticMenu::builder().header("other").build_arc();

    let mut shallow = MenuSession::new(Arc::clone(&top));
    CancelHandler::PopMenus(2).apply(&mut shallow);
    assert_eq!(shallow.depth(), 0);

    let mut one = MenuSession::new(Arc::clone(&top));
    one.push(Arc::clone(&other));
    CancelHandler::PopMenus(2).apply(&mut one);
    assert_eq!(one.depth(), 0);

    let mut deep = MenuSession::new(top);
    for _ in 0..3 {
        deep.push(Arc::clone(&other));
    }
    CancelHandler::PopMenus(2).apply(&mut deep);
    assert_eq!(deep.depth(), 1);
}

#[test]
fn test_scrolling_pages_cover_every_item_once() {
    let values: Vec<u32> = (1..=7).collect();
    let mut menu = ScrollingMenu::new(
        3,
        list_fetcher(values.clone()),
        SingleSelection::new(|_, _: &u32| Ok(())),
    );
    let mut seen = Vec::new();
    loop {
        let labels: Vec<String> = menu.items().iter().map(|item| item.label()).collect();
        let has_next = labels.iter().any(|label| label == "Next Items");
        let has_previous = labels.iter().any(|label| label == "Previous Items");
        assert_eq!(has_previous, menu.offset_value() > 0);
        seen.extend(
            labels
                .iter()
                .filter_map(|label| label.parse::<u32>().ok()),
        );
        if !has_next {
            break;
        }
        menu = menu.next_page();
    }
    assert_eq!(seen, values);
}

#[test]
fn test_scrolling_menu_in_application() {
    let console = ScriptedConsole::with_inputs(["l", "n", "2", "q"]);
    let io = console.io();
    let output = io.output.clone();
    let letters: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let picker = ScrollingMenu::new(
        2,
        list_fetcher(letters),
        SingleSelection::new(move |_, letter: &String| output.print(&format!("picked {letter}\n")))
            .header("letters"),
    );
    let top = StaticMenu::builder()
        .header("top")
        .add(push_menu("letters", Some("l"), move || Arc::new(picker.clone())))
        .add(quit_item())
        .build_arc();
    let mut app = MenuApplicationWithQuit::new(top, io);
    app.run_application().unwrap();

    let outputs = console.outputs();
    assert!(outputs.contains(
        &"letters\n 1. c\n 2. d\n 3. Next Items (n)\n 4. Previous Items (p)\n 5. Back (b)\n 6. Quit (q)\n"
            .to_string()
    ));
    assert!(outputs.contains(&"picked d\n".to_string()));
    assert!(console.remaining_inputs().is_empty());
}
