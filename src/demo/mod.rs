// src/demo/mod.rs

//! The menu tree the `menunav` binary navigates: a catalog placeholder section
//! and a counter that shows actions sharing mutable state.

/// The shared tally the counter actions update.
pub mod counter;

use crate::{
    models::{Action, Menu, MenuItem, MenuResult},
    system::console::Console,
};
use counter::Counter;
use std::{cell::RefCell, rc::Rc};

/// Prompt used by the "Other..." increment action.
pub const INCREMENT_PROMPT: &str = "Enter increment value: ";

/// Builds the demo menu. Every counter action shares the same `counter`.
pub fn build_main_menu(counter: &Rc<RefCell<Counter>>) -> MenuResult<Menu> {
    let add_items = Menu::new(
        "Add Items",
        vec![
            placeholder("Add Book")?,
            placeholder("Add Magazine")?,
            placeholder("Add DiscMag")?,
            placeholder("Add Ticket")?,
        ],
    )?;

    Menu::new(
        "Main Menu",
        vec![
            add_items.into(),
            placeholder("Edit Items")?,
            placeholder("Delete Items")?,
            placeholder("Sell Item(s)")?,
            build_counter_menu(counter)?.into(),
        ],
    )
}

/// Counter > [Show count, Increment by... > [1, 10, 100, Other...], Reset]
fn build_counter_menu(counter: &Rc<RefCell<Counter>>) -> MenuResult<Menu> {
    let show = {
        let counter = Rc::clone(counter);
        Action::new("Show count", move |console: &mut dyn Console| {
            console.write_line(&format!("Current count: {}", counter.borrow().count()))?;
            Ok(())
        })?
    };

    let increment_one = {
        let counter = Rc::clone(counter);
        Action::from_fn("1", move || counter.borrow_mut().increment())?
    };

    let other = {
        let counter = Rc::clone(counter);
        Action::new("Other...", move |console: &mut dyn Console| {
            let n = console.prompt_int_in_range(INCREMENT_PROMPT, 0, i64::from(i32::MAX))?;
            counter.borrow_mut().increment_by(n)?;
            Ok(())
        })?
    };

    let increment_by = Menu::new(
        "Increment by...",
        vec![
            increment_one.into(),
            increment_action(counter, 10)?,
            increment_action(counter, 100)?,
            other.into(),
        ],
    )?;

    let reset = {
        let counter = Rc::clone(counter);
        Action::from_fn("Reset", move || counter.borrow_mut().reset())?
    };

    Menu::new(
        "Counter",
        vec![show.into(), increment_by.into(), reset.into()],
    )
}

/// An action labelled with `amount` that adds it to the counter.
fn increment_action(counter: &Rc<RefCell<Counter>>, amount: i64) -> MenuResult<MenuItem> {
    let counter = Rc::clone(counter);
    let action = Action::new(amount.to_string(), move |_: &mut dyn Console| {
        counter.borrow_mut().increment_by(amount)?;
        Ok(())
    })?;
    Ok(action.into())
}

/// A catalog entry that only announces itself.
fn placeholder(name: &'static str) -> MenuResult<MenuItem> {
    let action = Action::new(name, move |console: &mut dyn Console| {
        console.write_line(&format!("TODO: {}", name))?;
        Ok(())
    })?;
    Ok(action.into())
}
