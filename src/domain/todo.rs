//! TODO state and priority cycling for outliner lines
//!
//! A line is read as `indent + [state] + [priority] + content`, where
//! `indent` is the leading whitespace plus an optional bullet marker
//! (`-`, `+` or a run of `*`) and the whitespace after it. Both operations are
//! pure functions of the line text; lines they don't understand come back
//! unchanged.

/// Lifecycle state of a task line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Todo,
    Doing,
    Done,
}

impl TaskState {
    /// States in cycling order
    pub const ALL: [TaskState; 3] = [TaskState::Todo, TaskState::Doing, TaskState::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Todo => "TODO",
            TaskState::Doing => "DOING",
            TaskState::Done => "DONE",
        }
    }

    /// Next state in the cycle, wrapping from DONE back to TODO
    pub fn next(self) -> TaskState {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Priority tag of a task line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    A,
    B,
    C,
}

impl Priority {
    /// Priorities in cycling order
    pub const ALL: [Priority; 3] = [Priority::A, Priority::B, Priority::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::A => "[#A]",
            Priority::B => "[#B]",
            Priority::C => "[#C]",
        }
    }

    /// Step through `none -> A -> B -> C -> none`
    pub fn cycle(current: Option<Priority>) -> Option<Priority> {
        match current {
            None => Some(Priority::A),
            Some(p) => {
                let idx = Self::ALL.iter().position(|q| *q == p).unwrap_or(0);
                Self::ALL.get(idx + 1).copied()
            }
        }
    }
}

/// A line split into its task parts. All slices borrow from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine<'a> {
    pub indent: &'a str,
    pub state: Option<TaskState>,
    pub priority: Option<Priority>,
    /// Text after the last recognized tag. When a tag is present this keeps
    /// its separating space (` rest of line`); otherwise it is the whole body.
    pub tail: &'a str,
}

impl<'a> TaskLine<'a> {
    /// Split a line into its parts. Returns `None` for blank lines.
    pub fn parse(line: &'a str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        let split = indent_len(line);
        let indent = &line[..split];
        let body = &line[split..];

        let Some((state, after_state)) = parse_state(body) else {
            return Some(TaskLine {
                indent,
                state: None,
                priority: None,
                tail: body,
            });
        };

        let (priority, tail) = match parse_priority(after_state) {
            Some((p, rest)) => (Some(p), rest),
            None => (None, after_state),
        };

        Some(TaskLine {
            indent,
            state: Some(state),
            priority,
            tail,
        })
    }

    /// Reassemble the line
    pub fn render(&self) -> String {
        let mut out = String::from(self.indent);
        match self.state {
            None => out.push_str(self.tail),
            Some(state) => {
                out.push_str(state.as_str());
                if let Some(priority) = self.priority {
                    out.push(' ');
                    out.push_str(priority.as_str());
                }
                out.push_str(self.tail);
            }
        }
        out
    }
}

/// Length of leading whitespace, bullet marker and the whitespace after it.
fn indent_len(line: &str) -> usize {
    let ws = line.len() - line.trim_start().len();
    let rest = &line[ws..];

    let marker_len = if rest.starts_with('*') {
        rest.len() - rest.trim_start_matches('*').len()
    } else if rest.starts_with('-') || rest.starts_with('+') {
        1
    } else {
        0
    };

    let after_marker = &rest[marker_len..];
    if marker_len == 0 || !after_marker.starts_with([' ', '\t']) {
        return ws;
    }

    let gap = after_marker.len() - after_marker.trim_start().len();
    ws + marker_len + gap
}

/// Match a state word followed by a space. The returned rest keeps the space.
fn parse_state(body: &str) -> Option<(TaskState, &str)> {
    TaskState::ALL.iter().find_map(|state| {
        let rest = body.strip_prefix(state.as_str())?;
        rest.starts_with(' ').then_some((*state, rest))
    })
}

/// Match ` [#X]` directly after a state, followed by whitespace or end of line.
fn parse_priority(after_state: &str) -> Option<(Priority, &str)> {
    let candidate = after_state.strip_prefix(' ')?;
    Priority::ALL.iter().find_map(|priority| {
        let rest = candidate.strip_prefix(priority.as_str())?;
        (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some((*priority, rest))
    })
}

/// Advance the TODO state of a line: none -> TODO -> DOING -> DONE -> TODO.
///
/// Blank lines are returned unchanged.
pub fn cycle_state(line: &str) -> String {
    let Some(mut task) = TaskLine::parse(line) else {
        return line.to_string();
    };

    match task.state {
        Some(state) => {
            task.state = Some(state.next());
            task.render()
        }
        None => format!("{}{} {}", task.indent, TaskState::Todo.as_str(), task.tail),
    }
}

/// Advance the priority of a task line: none -> [#A] -> [#B] -> [#C] -> none.
///
/// Lines without a state word are returned unchanged.
pub fn cycle_priority(line: &str) -> String {
    let Some(mut task) = TaskLine::parse(line) else {
        return line.to_string();
    };
    if task.state.is_none() {
        return line.to_string();
    }

    task.priority = Priority::cycle(task.priority);
    match task.state {
        // Dropping `[#C]` must keep the space that marks the state word
        Some(state) if task.priority.is_none() && !task.tail.starts_with(' ') => {
            format!("{}{} {}", task.indent, state.as_str(), task.tail)
        }
        _ => task.render(),
    }
}
