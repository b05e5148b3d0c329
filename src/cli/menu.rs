//! Main action loop for tasklist

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, info};

use crate::cli::display::SwatchStyle;
use crate::cli::task::{add_task, delete_task, edit_task, print_tasks};
use crate::cli::ui::Console;
use crate::error::InputError;
use crate::models::TaskList;

pub const ACTION_PROMPT: &str = "Input an action (add, print, edit, delete, end):";

/// Exit status for `end`. Nonzero even though ending is the normal path.
pub const END_EXIT_STATUS: u8 = 1;

/// Actions accepted at the main prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

impl Action {
    const ALL: &'static [Action] = &[Action::Add, Action::Print, Action::Edit, Action::Delete, Action::End];

    fn label(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Print => "print",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::End => "end",
        }
    }

    fn from_label(s: &str) -> Result<Action, InputError> {
        Action::ALL
            .iter()
            .find(|action| action.label() == s)
            .copied()
            .ok_or(InputError::InvalidAction)
    }
}

/// What the loop does after one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Current date at UTC+0
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// One interactive run: the console, the task list and how to draw it
pub struct Session<R, W> {
    console: Console<R, W>,
    tasks: TaskList,
    style: SwatchStyle,
    clock: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, style: SwatchStyle) -> Self {
        Self {
            console,
            tasks: TaskList::new(),
            style,
            clock: utc_today,
        }
    }

    /// Replace the source of "today" used for urgency tags
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Loop until `end`
    pub fn run(&mut self) -> Result<ExitCode> {
        info!("session started");
        loop {
            if self.step()? == Flow::Exit {
                info!("session ended with {} task(s)", self.tasks.len());
                return Ok(ExitCode::from(END_EXIT_STATUS));
            }
        }
    }

    /// Prompt for one action and carry it out
    pub fn step(&mut self) -> Result<Flow> {
        let input = self.console.prompt(ACTION_PROMPT)?;
        let action = match Action::from_label(&input) {
            Ok(action) => action,
            Err(e) => {
                debug!("rejected action {:?}", input);
                self.console.line(&e.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        match action {
            Action::Add => add_task(&mut self.console, &mut self.tasks)?,
            Action::Print => {
                if self.require_tasks()? {
                    self.print()?;
                }
            }
            Action::Edit => {
                if self.require_tasks()? {
                    self.print()?;
                    edit_task(&mut self.console, &mut self.tasks)?;
                }
            }
            Action::Delete => {
                if self.require_tasks()? {
                    self.print()?;
                    delete_task(&mut self.console, &mut self.tasks)?;
                }
            }
            Action::End => {
                self.console.line("Tasklist exiting!")?;
                self.console.flush()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// False (after telling the user) when there is nothing to show
    fn require_tasks(&mut self) -> Result<bool> {
        if self.tasks.is_empty() {
            self.console.line("No tasks have been input")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn print(&mut self) -> Result<()> {
        let today = (self.clock)();
        print_tasks(&mut self.console, &self.tasks, today, self.style)
    }
}

/// Run the interactive loop on stdin/stdout
pub fn run_menu(style: SwatchStyle) -> Result<ExitCode> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    Session::new(console, style).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::display::{TABLE_HEADER, TABLE_RULE};
    use crate::cli::task::{CONTENT_PROMPT, DATE_PROMPT, PRIORITY_PROMPT, TIME_PROMPT};
    use std::io::Cursor;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn session(script: &str, style: SwatchStyle) -> TestSession {
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        Session::new(console, style).with_clock(june_15)
    }

    fn written(session: &TestSession) -> String {
        String::from_utf8(session.console().output().clone()).unwrap()
    }

    #[test]
    fn test_action_labels_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_label(action.label()), Ok(*action));
        }
        assert_eq!(Action::from_label("Add"), Err(InputError::InvalidAction));
        assert_eq!(Action::from_label("quit"), Err(InputError::InvalidAction));
    }

    #[test]
    fn test_add_then_print() {
        let mut s = session(
            "add\nh\n2024-01-01\n09:00\nBuy milk\n\nprint\nend\n",
            SwatchStyle::Ansi,
        );
        assert!(s.run().is_ok());

        let expected_row = format!(
            "| 1  | 2024-01-01 | 09:00 | \x1b[103m \x1b[0m | \x1b[101m \x1b[0m |Buy milk{}|",
            " ".repeat(36)
        );
        let expected = [
            ACTION_PROMPT,
            PRIORITY_PROMPT,
            DATE_PROMPT,
            TIME_PROMPT,
            CONTENT_PROMPT,
            ACTION_PROMPT,
            TABLE_RULE,
            TABLE_HEADER,
            TABLE_RULE,
            expected_row.as_str(),
            TABLE_RULE,
            ACTION_PROMPT,
            "Tasklist exiting!",
        ]
        .join("\n")
            + "\n";
        assert_eq!(written(&s), expected);
        assert_eq!(s.tasks().len(), 1);
    }

    #[test]
    fn test_blank_task_not_added() {
        let mut s = session("add\nc\n2024-06-15\n10:00\n\nprint\nend\n", SwatchStyle::Ansi);
        s.run().unwrap();

        assert!(s.tasks().is_empty());
        let out = written(&s);
        assert_eq!(out.matches("The task is blank").count(), 1);
        assert!(out.contains("No tasks have been input"));
    }

    #[test]
    fn test_delete_on_empty_list_does_not_prompt() {
        let mut s = session("delete\nend\n", SwatchStyle::Ansi);
        s.run().unwrap();

        let out = written(&s);
        assert!(out.contains("No tasks have been input"));
        assert!(!out.contains("Input the task number"));
        assert!(!out.contains(TABLE_HEADER));
    }

    #[test]
    fn test_edit_on_empty_list_does_not_prompt() {
        let mut s = session("edit\nend\n", SwatchStyle::Ansi);
        s.run().unwrap();
        assert!(written(&s).contains("No tasks have been input"));
        assert!(!written(&s).contains("Input the task number"));
    }

    #[test]
    fn test_delete_prints_table_first() {
        let mut s = session(
            "add\nl\n2024-06-20\n12:00\nfirst\n\nadd\nn\n2024-06-01\n12:00\nsecond\n\ndelete\n1\nprint\nend\n",
            SwatchStyle::Letter,
        );
        s.run().unwrap();

        assert_eq!(s.tasks().len(), 1);
        assert_eq!(s.tasks().get(0).unwrap().content()[0], "second");

        let out = written(&s);
        let table_pos = out.find(TABLE_HEADER).unwrap();
        let number_pos = out.find("Input the task number (1-2):").unwrap();
        assert!(table_pos < number_pos);
        assert!(out.contains("| 1  | 2024-06-20 | 12:00 | L | I |first"));
        assert!(out.contains("The task is deleted"));
        // After deletion the remaining task moves up to number 1
        assert!(out.contains("| 1  | 2024-06-01 | 12:00 | N | O |second"));
    }

    #[test]
    fn test_edit_flow() {
        let mut s = session(
            "add\nn\n2024-06-15\n08:00\nold\n\nedit\n1\ntask\nnew text\n\nend\n",
            SwatchStyle::Letter,
        );
        s.run().unwrap();

        assert_eq!(s.tasks().get(0).unwrap().content()[0], "new text");
        let out = written(&s);
        assert!(out.contains("| 1  | 2024-06-15 | 08:00 | N | T |old"));
        assert!(out.contains("The task is changed"));
    }

    #[test]
    fn test_invalid_action_returns_to_prompt() {
        let mut s = session("list\nend\n", SwatchStyle::Ansi);
        assert_eq!(s.step().unwrap(), Flow::Continue);
        assert_eq!(s.step().unwrap(), Flow::Exit);

        assert_eq!(
            written(&s),
            format!(
                "{a}\nThe input action is invalid\n{a}\nTasklist exiting!\n",
                a = ACTION_PROMPT
            )
        );
    }

    #[test]
    fn test_non_utf8_content_keeps_session_alive() {
        let mut script = b"add\nn\n2024-06-15\n08:00\nfirst\n\nadd\nn\n2024-06-15\n09:00\ncaf".to_vec();
        script.extend_from_slice(b"\xe9\n\nprint\nend\n");
        let console = Console::new(Cursor::new(script), Vec::new());
        let mut s = Session::new(console, SwatchStyle::Letter).with_clock(june_15);

        assert!(s.run().is_ok());
        assert_eq!(s.tasks().len(), 2);
        assert_eq!(s.tasks().iter().nth(1).unwrap().content()[0], "caf\u{FFFD}");
        assert!(written(&s).contains("| 2  | 2024-06-15 | 09:00 | N | T |caf\u{FFFD}"));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut s = session("add\nh\n", SwatchStyle::Ansi);
        assert!(s.run().is_err());
    }

    #[test]
    fn test_exit_status_is_one() {
        assert_eq!(END_EXIT_STATUS, 1);
    }
}
