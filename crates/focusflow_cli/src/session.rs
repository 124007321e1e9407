use crate::render;
use focusflow_core::config::{Config, Palette};
use focusflow_core::error::AppError;
use focusflow_core::task_list::TaskList;
use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Toggle,
    Delete,
    ClearCompleted,
    Quit,
    Unknown,
}

impl Command {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "1" | "a" | "add" => Self::Add,
            "2" | "t" | "toggle" => Self::Toggle,
            "3" | "d" | "delete" => Self::Delete,
            "4" | "c" | "clear" => Self::ClearCompleted,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Removal,
    Warning,
    Error,
}

/// Outcome of the last command, shown on the next frame only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub message: String,
}

impl Notice {
    pub fn new<M: Into<String>>(tone: Tone, message: M) -> Self {
        Self {
            tone,
            message: message.into(),
        }
    }

    pub fn success<M: Into<String>>(message: M) -> Self {
        Self::new(Tone::Success, message)
    }

    pub fn info<M: Into<String>>(message: M) -> Self {
        Self::new(Tone::Info, message)
    }

    pub fn removal<M: Into<String>>(message: M) -> Self {
        Self::new(Tone::Removal, message)
    }

    pub fn warning<M: Into<String>>(message: M) -> Self {
        Self::new(Tone::Warning, message)
    }

    pub fn error<M: Into<String>>(message: M) -> Self {
        Self::new(Tone::Error, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(Option<Notice>),
    Quit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    tasks: TaskList,
    title_width: usize,
    palette: Palette,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            tasks: TaskList::new(),
            title_width: config.title_width,
            palette: config.palette(),
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user quits. Failing to read the menu choice ends the session with an error.
    pub fn run(&mut self) -> Result<(), AppError> {
        info!("session started");
        let mut notice: Option<Notice> = None;

        loop {
            render::screen(
                &mut self.output,
                &self.palette,
                self.tasks.tasks(),
                self.title_width,
                notice.as_ref(),
            )?;
            render::prompt(&mut self.output, &self.palette, "Choose an option: ")?;

            let line = match self.read_line() {
                Ok(line) => line,
                Err(err) => {
                    error!(error = %err, "could not read menu choice");
                    render::input_failure(&mut self.output, &self.palette, err.message())?;
                    return Err(err);
                }
            };

            let command = Command::parse(&line);
            debug!(?command, tasks = self.tasks.len(), "dispatching command");

            match self.step(command)? {
                Flow::Continue(next) => notice = next,
                Flow::Quit => {
                    render::farewell(&mut self.output, &self.palette)?;
                    info!(tasks = self.tasks.len(), "session ended");
                    return Ok(());
                }
            }
        }
    }

    /// Executes one command. Only output failures are returned as errors.
    pub fn step(&mut self, command: Command) -> Result<Flow, AppError> {
        let notice = match command {
            Command::Add => self.add()?,
            Command::Toggle => self.toggle()?,
            Command::Delete => self.delete()?,
            Command::ClearCompleted => self.clear_completed(),
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown => Notice::warning("Unknown option. Try again."),
        };
        Ok(Flow::Continue(Some(notice)))
    }

    fn add(&mut self) -> Result<Notice, AppError> {
        self.prompt("Task title: ")?;
        let title = match self.read_line() {
            Ok(title) => title,
            Err(err) => {
                warn!(error = %err, "could not read task title");
                return Ok(Notice::error("Could not read the task title."));
            }
        };

        Ok(match self.tasks.add(&title) {
            Ok(task) => Notice::success(format!("Added \"{}\"", task.title)),
            Err(_) => Notice::warning("Empty task discarded."),
        })
    }

    fn toggle(&mut self) -> Result<Notice, AppError> {
        if self.tasks.is_empty() {
            return Ok(Notice::warning("Nothing to toggle yet."));
        }

        self.prompt("Toggle task #: ")?;
        let toggled = match self.read_index().and_then(|index| self.tasks.toggle(index)) {
            Ok(toggled) => toggled,
            Err(err) => return Ok(Notice::error(err.message())),
        };

        Ok(if toggled.completed {
            Notice::success(format!("Completed \"{}\"", toggled.title))
        } else {
            Notice::info(format!("Marked \"{}\" as pending", toggled.title))
        })
    }

    fn delete(&mut self) -> Result<Notice, AppError> {
        if self.tasks.is_empty() {
            return Ok(Notice::warning("Nothing to delete yet."));
        }

        self.prompt("Delete task #: ")?;
        let removed = match self.read_index().and_then(|index| self.tasks.delete(index)) {
            Ok(removed) => removed,
            Err(err) => return Ok(Notice::error(err.message())),
        };

        Ok(Notice::removal(format!("Deleted \"{}\"", removed.title)))
    }

    fn clear_completed(&mut self) -> Notice {
        if self.tasks.is_empty() {
            return Notice::warning("List already empty.");
        }

        match self.tasks.clear_completed() {
            0 => Notice::warning("No completed tasks to clear."),
            removed => Notice::removal(format!("Cleared {removed} completed task(s).")),
        }
    }

    fn read_index(&mut self) -> Result<usize, AppError> {
        let raw = self.read_line().map_err(|err| {
            warn!(error = %err, "could not read task number");
            AppError::invalid_input("could not read the number")
        })?;
        self.tasks.parse_index(&raw)
    }

    fn prompt(&mut self, label: &str) -> Result<(), AppError> {
        render::prompt(&mut self.output, &self.palette, label)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, AppError> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(AppError::io("end of input"));
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, Flow, Notice, Session, Tone};
    use focusflow_core::config::{Config, Theme};
    use std::io::Cursor;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn session(input: &str) -> TestSession {
        let config = Config::new(Theme::Plain, 42).unwrap();
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), &config)
    }

    fn state(session: &TestSession) -> Vec<(String, bool)> {
        session
            .tasks()
            .tasks()
            .iter()
            .map(|task| (task.title.clone(), task.is_completed()))
            .collect()
    }

    fn owned(expected: &[(&str, bool)]) -> Vec<(String, bool)> {
        expected
            .iter()
            .map(|(title, done)| (title.to_string(), *done))
            .collect()
    }

    fn notice(flow: Flow) -> Notice {
        match flow {
            Flow::Continue(Some(notice)) => notice,
            other => panic!("unexpected flow: {other:?}"),
        }
    }

    #[test]
    fn command_parse_accepts_shortcuts_and_words() {
        let cases = [
            ("1", Command::Add),
            ("a", Command::Add),
            (" ADD ", Command::Add),
            ("2", Command::Toggle),
            ("t", Command::Toggle),
            ("Toggle", Command::Toggle),
            ("3", Command::Delete),
            ("d", Command::Delete),
            ("delete", Command::Delete),
            ("4", Command::ClearCompleted),
            ("c", Command::ClearCompleted),
            ("clear", Command::ClearCompleted),
            ("q", Command::Quit),
            ("QUIT", Command::Quit),
            ("exit", Command::Quit),
            ("5", Command::Unknown),
            ("", Command::Unknown),
            ("add task", Command::Unknown),
        ];

        for (raw, expected) in cases {
            assert_eq!(Command::parse(raw), expected, "input {raw:?}");
        }
    }

    #[test]
    fn walkthrough_steps_through_every_command() {
        let mut session = session("Write spec\nReview PR\n1\n1\n");

        let added = notice(session.step(Command::Add).unwrap());
        assert_eq!(added, Notice::success("Added \"Write spec\""));
        session.step(Command::Add).unwrap();
        assert_eq!(
            state(&session),
            owned(&[("Write spec", false), ("Review PR", false)])
        );

        let toggled = notice(session.step(Command::Toggle).unwrap());
        assert_eq!(toggled, Notice::success("Completed \"Write spec\""));
        assert_eq!(
            state(&session),
            owned(&[("Write spec", true), ("Review PR", false)])
        );

        let cleared = notice(session.step(Command::ClearCompleted).unwrap());
        assert_eq!(cleared, Notice::removal("Cleared 1 completed task(s)."));
        assert_eq!(state(&session), owned(&[("Review PR", false)]));

        let deleted = notice(session.step(Command::Delete).unwrap());
        assert_eq!(deleted, Notice::removal("Deleted \"Review PR\""));
        assert!(session.tasks().is_empty());

        assert_eq!(session.step(Command::Quit).unwrap(), Flow::Quit);
    }

    #[test]
    fn blank_title_is_discarded() {
        let mut session = session("   \n");

        let discarded = notice(session.step(Command::Add).unwrap());
        assert_eq!(discarded.tone, Tone::Warning);
        assert_eq!(discarded.message, "Empty task discarded.");
        assert!(session.tasks().is_empty());
    }

    #[test]
    fn toggling_twice_reports_pending() {
        let mut session = session("demo\n1\n1\n");
        session.step(Command::Add).unwrap();
        session.step(Command::Toggle).unwrap();

        let pending = notice(session.step(Command::Toggle).unwrap());
        assert_eq!(pending, Notice::info("Marked \"demo\" as pending"));
        assert_eq!(session.tasks().tasks()[0].completed_at(), None);
    }

    #[test]
    fn empty_list_commands_do_not_prompt() {
        let mut session = session("");

        let toggle = notice(session.step(Command::Toggle).unwrap());
        assert_eq!(toggle, Notice::warning("Nothing to toggle yet."));
        let delete = notice(session.step(Command::Delete).unwrap());
        assert_eq!(delete, Notice::warning("Nothing to delete yet."));
        let clear = notice(session.step(Command::ClearCompleted).unwrap());
        assert_eq!(clear, Notice::warning("List already empty."));

        assert!(session.into_output().is_empty());
    }

    #[test]
    fn clear_without_completed_tasks_warns() {
        let mut session = session("demo\n");
        session.step(Command::Add).unwrap();

        let clear = notice(session.step(Command::ClearCompleted).unwrap());
        assert_eq!(clear, Notice::warning("No completed tasks to clear."));
        assert_eq!(session.tasks().len(), 1);
    }

    #[test]
    fn bad_indices_leave_list_unchanged() {
        let mut session = session("a\nb\n0\n-1\nnope\n3\n");
        session.step(Command::Add).unwrap();
        session.step(Command::Add).unwrap();

        let expected = [
            (Command::Toggle, "pick between 1 and 2"),
            (Command::Delete, "pick between 1 and 2"),
            (Command::Toggle, "please type a valid number"),
            (Command::Delete, "pick between 1 and 2"),
            (Command::Delete, "could not read the number"),
        ];
        for (command, message) in expected {
            assert_eq!(notice(session.step(command).unwrap()), Notice::error(message));
        }

        assert_eq!(state(&session), owned(&[("a", false), ("b", false)]));
    }

    #[test]
    fn unreadable_title_sets_error_notice() {
        let mut session = session("");

        let failed = notice(session.step(Command::Add).unwrap());
        assert_eq!(failed, Notice::error("Could not read the task title."));
    }

    #[test]
    fn run_quits_successfully() {
        let mut session = session("1\nWrite spec\nq\n");

        session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();

        assert!(output.contains("Choose an option: "));
        assert!(output.contains("Task title: "));
        assert!(output.contains("Added \"Write spec\""));
        assert!(output.ends_with("Bye! Go crush those goals.\n"));
    }

    #[test]
    fn run_shows_each_notice_for_one_frame() {
        let mut session = session("zzz\n1\n\nexit\n");

        session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();

        assert_eq!(output.matches("Unknown option. Try again.").count(), 1);
        assert_eq!(output.matches("Empty task discarded.").count(), 1);
    }

    #[test]
    fn run_fails_when_input_ends() {
        let mut session = session("1\nkeep me\n");

        let err = session.run().unwrap_err();
        assert_eq!(err.code(), "io_error");
        assert_eq!(session.tasks().len(), 1);

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("Failed to read input: end of input"));
    }

    #[test]
    fn run_shows_sub_prompt_failure_before_exiting() {
        let mut session = session("1\n");

        assert!(session.run().is_err());
        let output = String::from_utf8(session.into_output()).unwrap();

        assert!(output.contains("Could not read the task title."));
        assert!(output.contains("Failed to read input"));
    }
}
