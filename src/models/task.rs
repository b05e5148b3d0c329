use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::cmp::Ordering;

use crate::error::InputError;

/// Width of one content chunk in the task table
pub const CHUNK_WIDTH: usize = 44;

/// Task priority, entered as a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Critical,
    High,
    Normal,
    Low,
}

impl Priority {
    const ALL: &'static [Priority] = &[Priority::Critical, Priority::High, Priority::Normal, Priority::Low];

    /// Parse a priority letter (`c`, `h`, `n`, `l`), ignoring case
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.to_lowercase();
        let mut chars = input.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return None;
        };
        Self::ALL
            .iter()
            .find(|priority| priority.letter().to_ascii_lowercase() == letter)
            .copied()
    }

    pub fn letter(self) -> char {
        match self {
            Self::Critical => 'C',
            Self::High => 'H',
            Self::Normal => 'N',
            Self::Low => 'L',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

/// How the due date relates to today. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyTag {
    /// Due today
    Today,
    /// Due on a later date
    Incoming,
    /// Due date has passed
    Overdue,
}

impl UrgencyTag {
    pub fn between(today: NaiveDate, due: NaiveDate) -> Self {
        match due.cmp(&today) {
            Ordering::Equal => Self::Today,
            Ordering::Greater => Self::Incoming,
            Ordering::Less => Self::Overdue,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Today => 'T',
            Self::Incoming => 'I',
            Self::Overdue => 'O',
        }
    }
}

/// A single entry of the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub priority: Priority,
    pub due_at: NaiveDateTime,
    content: Vec<String>,
}

impl Task {
    /// Create a task with no content yet. It stays empty until lines are added.
    pub fn new(priority: Priority, due_at: NaiveDateTime) -> Self {
        Self {
            priority,
            due_at,
            content: Vec::new(),
        }
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// A task without content lines is empty and never belongs in a list
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Append a content line. Blank lines are ignored; returns whether the line was kept.
    pub fn push_line(&mut self, line: impl Into<String>) -> bool {
        let line = line.into();
        if line.trim().is_empty() {
            return false;
        }
        self.content.push(line);
        true
    }

    /// Replace the whole content. Blank lines in `lines` are dropped.
    pub fn replace_content(&mut self, lines: Vec<String>) {
        self.content.clear();
        for line in lines {
            self.push_line(line);
        }
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Move the task to a new date. The time of day resets to 00:00.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.due_at = date.and_time(NaiveTime::MIN);
    }

    /// Change the time of day, keeping the date
    pub fn set_time(&mut self, time: NaiveTime) {
        self.due_at = self.due_at.date().and_time(time);
    }

    pub fn urgency(&self, today: NaiveDate) -> UrgencyTag {
        UrgencyTag::between(today, self.due_at.date())
    }

    /// `yyyy-mm-dd` with the year right-aligned in four columns
    pub fn date_label(&self) -> String {
        let date = self.due_at.date();
        format!("{:>4}-{:02}-{:02}", date.year(), date.month(), date.day())
    }

    /// `hh:mm`, zero-padded
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.due_at.hour(), self.due_at.minute())
    }

    /// All content lines joined, cut into fixed-width table chunks
    pub fn content_chunks(&self) -> Vec<String> {
        chunk_text(&self.content.concat(), CHUNK_WIDTH)
    }
}

/// Cut `text` into consecutive `width`-character pieces, space-padding the last.
///
/// Splits on characters, not words. Empty text yields no chunks.
pub fn chunk_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|piece| {
            let piece: String = piece.iter().collect();
            format!("{:<width$}", piece, width = width)
        })
        .collect()
}

/// Parse `yyyy-mm-dd` into a calendar date.
///
/// Every `-` separated component must be an integer. Components after the
/// third are ignored.
pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    let parts = parse_components(input, '-').ok_or(InputError::InvalidDate)?;
    let [year, month, day] = match parts.as_slice() {
        [y, m, d, ..] => [*y, *m, *d],
        _ => return Err(InputError::InvalidDate),
    };
    let month = u32::try_from(month).map_err(|_| InputError::InvalidDate)?;
    let day = u32::try_from(day).map_err(|_| InputError::InvalidDate)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(InputError::InvalidDate)
}

/// Parse `hh:mm` into a time of day (hour 0-23, minute 0-59).
pub fn parse_time(input: &str) -> Result<NaiveTime, InputError> {
    let parts = parse_components(input, ':').ok_or(InputError::InvalidTime)?;
    let [hour, minute] = match parts.as_slice() {
        [h, m, ..] => [*h, *m],
        _ => return Err(InputError::InvalidTime),
    };
    let hour = u32::try_from(hour).map_err(|_| InputError::InvalidTime)?;
    let minute = u32::try_from(minute).map_err(|_| InputError::InvalidTime)?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(InputError::InvalidTime)
}

fn parse_components(input: &str, separator: char) -> Option<Vec<i32>> {
    input
        .to_lowercase()
        .split(separator)
        .map(|part| part.parse::<i32>().ok())
        .collect()
}
