use chrono::NaiveDate;

use crate::models::{Priority, Task, TaskList, UrgencyTag, CHUNK_WIDTH};

pub const TABLE_RULE: &str =
    "+----+------------+-------+---+---+--------------------------------------------+";
pub const TABLE_HEADER: &str =
    "| N  |    Date    | Time  | P | D |                   Task                     |";

/// Left columns of a continuation line, up to the task column
const BLANK_COLUMNS: &str = "|    |            |       |   |   |";

// Bright background codes
const RED: u8 = 101;
const GREEN: u8 = 102;
const YELLOW: u8 = 103;
const BLUE: u8 = 104;

/// How the P and D cells are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwatchStyle {
    /// One space on an ANSI background color
    #[default]
    Ansi,
    /// Uncolored letter, for terminals and pipes without color
    Letter,
}

impl SwatchStyle {
    pub fn priority(self, priority: Priority) -> String {
        match self {
            Self::Ansi => ansi_swatch(priority_color(priority)),
            Self::Letter => priority.letter().to_string(),
        }
    }

    pub fn urgency(self, urgency: UrgencyTag) -> String {
        match self {
            Self::Ansi => ansi_swatch(urgency_color(urgency)),
            Self::Letter => urgency.letter().to_string(),
        }
    }
}

fn priority_color(priority: Priority) -> u8 {
    match priority {
        Priority::Critical => RED,
        Priority::High => YELLOW,
        Priority::Normal => GREEN,
        Priority::Low => BLUE,
    }
}

fn urgency_color(urgency: UrgencyTag) -> u8 {
    match urgency {
        UrgencyTag::Incoming => GREEN,
        UrgencyTag::Today => YELLOW,
        UrgencyTag::Overdue => RED,
    }
}

fn ansi_swatch(code: u8) -> String {
    format!("\x1b[{}m \x1b[0m", code)
}

/// Render one task as its table rows, closing rule included.
///
/// `number` is the 1-based position shown in the N column. Urgency is
/// computed against `today` on every call.
pub fn render_task(task: &Task, number: usize, today: NaiveDate, style: SwatchStyle) -> Vec<String> {
    let mut chunks = task.content_chunks().into_iter();
    let first = chunks.next().unwrap_or_else(|| " ".repeat(CHUNK_WIDTH));

    let mut rows = vec![format!(
        "| {}  | {} | {} | {} | {} |{}|",
        number,
        task.date_label(),
        task.time_label(),
        style.priority(task.priority),
        style.urgency(task.urgency(today)),
        first
    )];
    rows.extend(chunks.map(|chunk| format!("{}{}|", BLANK_COLUMNS, chunk)));
    rows.push(TABLE_RULE.to_string());
    rows
}

/// Header plus every task in list order
pub fn render_table(tasks: &TaskList, today: NaiveDate, style: SwatchStyle) -> Vec<String> {
    let mut rows = vec![
        TABLE_RULE.to_string(),
        TABLE_HEADER.to_string(),
        TABLE_RULE.to_string(),
    ];
    for (idx, task) in tasks.iter().enumerate() {
        rows.extend(render_task(task, idx + 1, today, style));
    }
    rows
}
