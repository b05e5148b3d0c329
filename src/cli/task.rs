//! Interactive task operations
//!
//! Every prompt loops until it gets usable input. Bad input prints a fixed
//! diagnostic and asks again; only console failures escape as errors.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::cli::display::{render_table, SwatchStyle};
use crate::cli::ui::Console;
use crate::error::InputError;
use crate::models::{parse_date, parse_time, Priority, Task, TaskList};

pub const PRIORITY_PROMPT: &str = "Input the task priority (C, H, N, L):";
pub const DATE_PROMPT: &str = "Input the date (yyyy-mm-dd):";
pub const TIME_PROMPT: &str = "Input the time (hh:mm):";
pub const CONTENT_PROMPT: &str = "Input a new task (enter a blank line to end):";
pub const FIELD_PROMPT: &str = "Input a field to edit (priority, date, time, task):";

/// Editable task fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Priority,
    Date,
    Time,
    Task,
}

impl Field {
    pub fn parse(input: &str) -> Result<Self, InputError> {
        match input {
            "priority" => Ok(Self::Priority),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "task" => Ok(Self::Task),
            _ => Err(InputError::InvalidField),
        }
    }
}

/// Ask until the answer is one of the priority letters
pub fn prompt_priority<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Priority> {
    loop {
        let input = console.prompt(PRIORITY_PROMPT)?;
        if let Some(priority) = Priority::parse(&input) {
            return Ok(priority);
        }
        debug!("rejected priority {:?}", input);
    }
}

pub fn prompt_date<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<NaiveDate> {
    loop {
        let input = console.prompt(DATE_PROMPT)?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => {
                debug!("rejected date {:?}", input);
                console.line(&e.to_string())?;
            }
        }
    }
}

pub fn prompt_time<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<NaiveTime> {
    loop {
        let input = console.prompt(TIME_PROMPT)?;
        match parse_time(&input) {
            Ok(time) => return Ok(time),
            Err(e) => {
                debug!("rejected time {:?}", input);
                console.line(&e.to_string())?;
            }
        }
    }
}

/// Read content lines up to the first blank one.
///
/// Prints `The task is blank` when nothing was entered; the caller decides
/// what an empty result means.
pub fn read_content<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let line = console.read_line()?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    if lines.is_empty() {
        console.line("The task is blank")?;
    }
    Ok(lines)
}

/// Build a task from prompts and append it unless its content is blank
pub fn add_task<R: BufRead, W: Write>(console: &mut Console<R, W>, tasks: &mut TaskList) -> Result<()> {
    let priority = prompt_priority(console)?;
    let date = prompt_date(console)?;
    let time = prompt_time(console)?;

    let mut task = Task::new(priority, date.and_time(time));
    console.line(CONTENT_PROMPT)?;
    task.replace_content(read_content(console)?);

    if tasks.add(task) {
        debug!("task {} added with {} priority", tasks.len(), priority.as_str());
    } else {
        debug!("blank task discarded");
    }
    Ok(())
}

/// Print the header and every task with its current number
pub fn print_tasks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: &TaskList,
    today: NaiveDate,
    style: SwatchStyle,
) -> Result<()> {
    console.lines(&render_table(tasks, today, style))
}

/// Ask for a task number until it names an existing task; returns its index
pub fn prompt_task_number<R: BufRead, W: Write>(console: &mut Console<R, W>, tasks: &TaskList) -> Result<usize> {
    let message = format!("Input the task number (1-{}):", tasks.len());
    loop {
        let input = console.prompt(&message)?;
        match tasks.parse_number(&input) {
            Ok(idx) => return Ok(idx),
            Err(e) => {
                debug!("rejected task number {:?}", input);
                console.line(&e.to_string())?;
            }
        }
    }
}

pub fn delete_task<R: BufRead, W: Write>(console: &mut Console<R, W>, tasks: &mut TaskList) -> Result<()> {
    let idx = prompt_task_number(console, tasks)?;
    if tasks.remove(idx).is_some() {
        debug!("task {} deleted", idx + 1);
        console.line("The task is deleted")?;
    }
    Ok(())
}

pub fn edit_task<R: BufRead, W: Write>(console: &mut Console<R, W>, tasks: &mut TaskList) -> Result<()> {
    let idx = prompt_task_number(console, tasks)?;
    if let Some(task) = tasks.get_mut(idx) {
        edit_fields(console, task)?;
    }
    if let Some(task) = tasks.get(idx) {
        debug!(
            "task {} now {} priority, due {} {}",
            idx + 1,
            task.priority.as_str(),
            task.date_label(),
            task.time_label()
        );
    }
    Ok(())
}

/// Ask which field to change, then prompt for its new value
pub fn edit_fields<R: BufRead, W: Write>(console: &mut Console<R, W>, task: &mut Task) -> Result<()> {
    let field = loop {
        let input = console.prompt(FIELD_PROMPT)?;
        match Field::parse(&input) {
            Ok(field) => break field,
            Err(e) => {
                debug!("rejected field {:?}", input);
                console.line(&e.to_string())?;
            }
        }
    };

    let changed = match field {
        Field::Priority => {
            task.set_priority(prompt_priority(console)?);
            true
        }
        Field::Date => {
            task.set_date(prompt_date(console)?);
            true
        }
        Field::Time => {
            task.set_time(prompt_time(console)?);
            true
        }
        Field::Task => {
            console.line(CONTENT_PROMPT)?;
            let lines = read_content(console)?;
            // Blank replacement would leave an empty task in the list
            if lines.is_empty() {
                warn!("blank content ignored, keeping {} line(s)", task.content().len());
                false
            } else {
                task.replace_content(lines);
                true
            }
        }
    };

    if changed {
        console.line("The task is changed")?;
    }
    Ok(())
}
