//! Demo application showing every kind of menu and prompt

use std::sync::Arc;

use chrono::{Local, Timelike};

use crate::app::{MenuApplication, MenuApplicationWithQuit};
use crate::core::config::Config;
use crate::error::{MenuError, Result};
use crate::inputs::timestamp::{DEFAULT_DATE_QUERY, DEFAULT_TIMESTAMP_QUERY};
use crate::inputs::{
    date_from_user, timestamp_from_user, CurrencyAmount, Email, Positive, Prompt,
    PromptWithDefault, SelectionPrompt, SimplePrompt,
};
use crate::io::ConsoleIo;
use crate::menu::{
    back_item, list_fetcher, push_menu, quit_item_with, take_action, Menu, MultiSelection,
    ScrollingMenu, SingleSelection, StaticMenu,
};

const COLOURS: [&str; 7] = ["red", "orange", "yellow", "green", "blue", "indigo", "violet"];

/// Run the demo on `io` until the user quits
pub fn run_demo(config: &Config, io: ConsoleIo) -> Result<()> {
    let menu = demo_menu(config, &io);
    let mut app = MenuApplicationWithQuit::new(menu, io).with_config(config);
    let outcome = app.run_application();
    app.close();
    outcome
}

/// Top-level menu of the demo
pub fn demo_menu(config: &Config, io: &ConsoleIo) -> Arc<dyn Menu> {
    StaticMenu::builder()
        .header("Console Menus Demo")
        .add(push_menu("Pick a number", None, {
            let config = config.clone();
            let io = io.clone();
            move || number_menu(&config, &io)
        }))
        .add(push_menu("Choose colours", None, {
            let config = config.clone();
            let io = io.clone();
            move || colour_menu(&config, &io)
        }))
        .add(take_action("Enter an email address", None, {
            let io = io.clone();
            move || {
                if let Some(email) = SimplePrompt::new("Email address: ", io.clone())
                    .validator(Email)
                    .get_result()?
                {
                    io.output.print(&format!("Email: {email}\n"))?;
                }
                Ok(())
            }
        }))
        .add(take_action("Enter an amount", None, {
            let io = io.clone();
            move || {
                let default = CurrencyAmount::from_cents(1000);
                let prompt = PromptWithDefault::with_transformer(
                    format!("Amount [{default}]: "),
                    default,
                    io.clone(),
                    |input| {
                        CurrencyAmount::parse(input.trim())
                            .ok_or_else(|| "Must enter an amount like 12.34".to_string())
                    },
                )
                .additional_validation(Positive);
                if let Some(amount) = prompt.get_result()? {
                    io.output.print(&format!("Amount: {amount}\n"))?;
                }
                Ok(())
            }
        }))
        .add(take_action("Enter a timestamp", None, {
            let io = io.clone();
            move || {
                let now = Local::now().naive_local();
                let now = now.with_nanosecond(0).unwrap_or(now);
                let timestamp = timestamp_from_user(&io, DEFAULT_TIMESTAMP_QUERY, now)?;
                io.output
                    .print(&format!("Timestamp: {}\n", timestamp.format("%Y-%m-%d %H:%M:%S")))
            }
        }))
        .add(take_action("Enter a date", None, {
            let io = io.clone();
            move || {
                let date = date_from_user(&io, DEFAULT_DATE_QUERY, Local::now().date_naive())?;
                io.output.print(&format!("Date: {}\n", date.format("%Y-%m-%d")))
            }
        }))
        .add(take_action("Pick a size", None, {
            let io = io.clone();
            move || {
                let sizes = vec!["small", "medium", "large"];
                if let Some(size) =
                    SelectionPrompt::new(Some("Sizes".to_string()), sizes, io.clone()).get_result()?
                {
                    io.output.print(&format!("Size: {size}\n"))?;
                }
                Ok(())
            }
        }))
        .add(push_menu("Nested menus", None, nested_menu))
        .add(quit_item_with(config.quit_message.clone()))
        .build_arc()
}

fn number_menu(config: &Config, io: &ConsoleIo) -> Arc<dyn Menu> {
    let output = io.output.clone();
    let pick = SingleSelection::new(move |session, number: &u32| {
        output.print(&format!("You picked {number}\n"))?;
        session.pop();
        Ok(())
    })
    .header("Pick a number");
    Arc::new(
        ScrollingMenu::new(config.page_size, list_fetcher((1..=100).collect()), pick)
            .quit_message(config.quit_message.clone()),
    )
}

fn colour_menu(config: &Config, io: &ConsoleIo) -> Arc<dyn Menu> {
    let output = io.output.clone();
    let colours = COLOURS.iter().map(|c| c.to_string()).collect();
    let menu = MultiSelection::new(list_fetcher(colours), move |session, chosen: Vec<String>| {
        output.print(&format!("Chosen: {}\n", chosen.join(", ")))?;
        session.pop();
        Ok(())
    })
    .action_label("Use Selection")
    .into_menu(config.page_size)
    .quit_message(config.quit_message.clone());
    Arc::new(menu)
}

fn nested_menu() -> Arc<dyn Menu> {
    StaticMenu::builder()
        .header("Nested")
        .add(push_menu("Go deeper", None, || {
            StaticMenu::builder()
                .header("Deeper")
                .add(take_action("Cancel to the top", None, || {
                    Err(MenuError::pop_menus(2, "Returning to the top menu"))
                }))
                .add(back_item())
                .build_arc()
        }))
        .add(back_item())
        .build_arc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConsole;

    fn run(inputs: &[&str]) -> String {
        let console = ScriptedConsole::with_inputs(inputs.iter().copied());
        run_demo(&Config::default(), console.io()).unwrap();
        assert!(console.remaining_inputs().is_empty());
        console.transcript()
    }

    #[test]
    fn test_pick_a_number() {
        let transcript = run(&["1", "3", "q"]);
        assert!(transcript.contains("Pick a number\n 1. 1\n"));
        assert!(transcript.contains("You picked 3\n"));
        assert!(transcript.ends_with("\nQuitting\n\n"));
    }

    #[test]
    fn test_choose_colours() {
        // 1-7 colours, 8 Use Selection, 9 Select All, 10 Deselect All
        let transcript = run(&["2", "5", "1", "8", "q"]);
        assert!(transcript.contains("Chosen: blue, red\n"));
    }

    #[test]
    fn test_nested_cancel_returns_to_top() {
        let transcript = run(&["8", "1", "1", "q"]);
        assert!(transcript.contains("\nReturning to the top menu\n\nConsole Menus Demo\n"));
    }

    #[test]
    fn test_amount_default() {
        let transcript = run(&["4", "", "q"]);
        assert!(transcript.contains("Amount [10.00]: Amount: 10.00\n"));
    }

    #[test]
    fn test_quit_message_from_config() {
        let console = ScriptedConsole::with_inputs(["q"]);
        let config = Config {
            quit_message: "Bye".to_string(),
            ..Config::default()
        };
        run_demo(&config, console.io()).unwrap();
        assert!(console.transcript().ends_with("\nBye\n\n"));
    }

    #[test]
    fn test_quit_message_from_config_in_paged_menus() {
        let config = Config {
            quit_message: "Bye".to_string(),
            ..Config::default()
        };
        for first in ["1", "2"] {
            let console = ScriptedConsole::with_inputs([first, "q"]);
            run_demo(&config, console.io()).unwrap();
            let transcript = console.transcript();
            assert!(transcript.ends_with("\nBye\n\n"), "{transcript}");
            assert!(!transcript.contains("Quitting"));
        }
    }
}
