use crate::session::{Notice, Tone};
use focusflow_core::config::Palette;
use focusflow_core::model::{Task, TaskStatus};
use focusflow_core::text::truncate;
use std::io::{self, Write};
use tabled::builder::Builder;
use tabled::settings::Style;
use time::macros::format_description;

const BANNER_WIDTH: usize = 60;
const BANNER_TEXT: &str = "  ✨  FocusFlow CLI: manage tasks at the speed of thought";
const EMPTY_TEXT: &str = "No todos yet. Add your first one!";
const FAREWELL_TEXT: &str = "Bye! Go crush those goals.";

/// Draws one full frame: banner, task table, the pending notice and the menu.
pub fn screen<W: Write>(
    out: &mut W,
    palette: &Palette,
    tasks: &[Task],
    title_width: usize,
    notice: Option<&Notice>,
) -> io::Result<()> {
    write!(out, "{}", palette.clear_screen)?;
    banner(out, palette)?;

    writeln!(out)?;
    if tasks.is_empty() {
        writeln!(out, "{}", palette.paint(palette.gray, EMPTY_TEXT))?;
    } else {
        writeln!(out, "{}", task_table(palette, tasks, title_width))?;
    }
    writeln!(out)?;

    if let Some(notice) = notice {
        writeln!(out, "{}", palette.paint(tone_color(palette, notice.tone), &notice.message))?;
    }

    menu(out, palette)
}

pub fn prompt<W: Write>(out: &mut W, palette: &Palette, label: &str) -> io::Result<()> {
    write!(out, "{}", palette.paint(palette.cyan, label))?;
    out.flush()
}

pub fn farewell<W: Write>(out: &mut W, palette: &Palette) -> io::Result<()> {
    write!(out, "{}", palette.clear_screen)?;
    writeln!(out, "{}", palette.paint(palette.green, FAREWELL_TEXT))?;
    out.flush()
}

pub fn input_failure<W: Write>(out: &mut W, palette: &Palette, reason: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        palette.paint(palette.red, &format!("Failed to read input: {reason}"))
    )?;
    out.flush()
}

fn banner<W: Write>(out: &mut W, palette: &Palette) -> io::Result<()> {
    let rule = "═".repeat(BANNER_WIDTH);
    writeln!(out, "{}", palette.paint(palette.magenta, &rule))?;
    writeln!(
        out,
        "{}{}",
        palette.bold,
        palette.paint(palette.magenta, BANNER_TEXT)
    )?;
    writeln!(out, "{}", palette.paint(palette.magenta, &rule))
}

fn menu<W: Write>(out: &mut W, palette: &Palette) -> io::Result<()> {
    let rule = "-".repeat(BANNER_WIDTH);
    writeln!(out, "{}", palette.paint(palette.gray, &rule))?;
    writeln!(
        out,
        "{} Add    {} Toggle    {} Delete    {} Clear Completed    {} Quit",
        palette.paint(palette.magenta, "[1]"),
        palette.paint(palette.blue, "[2]"),
        palette.paint(palette.red, "[3]"),
        palette.paint(palette.green, "[4]"),
        palette.paint(palette.yellow, "[Q]"),
    )?;
    writeln!(out, "{}", palette.paint(palette.gray, &rule))
}

fn task_table(palette: &Palette, tasks: &[Task], title_width: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record(
        ["#", "Status", "Task", "Created"].map(|header| palette.paint(palette.bold, header)),
    );

    for (idx, task) in tasks.iter().enumerate() {
        let number = palette.paint(palette.blue, &format!("{:>2}", idx + 1));
        let title = truncate(&task.title, title_width);
        let row = match task.status {
            TaskStatus::Pending => [
                number,
                palette.paint(palette.yellow, "[ ]"),
                title,
                created_label(task),
            ],
            TaskStatus::Completed { .. } => [
                number,
                palette.paint(palette.green, "[✔]"),
                palette.paint(palette.faint, &title),
                completed_label(task),
            ],
        };
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}

fn created_label(task: &Task) -> String {
    task.created_at
        .format(format_description!("[month repr:short] [day] [hour]:[minute]"))
        .unwrap_or_else(|_| "-".to_string())
}

fn completed_label(task: &Task) -> String {
    task.completed_at()
        .and_then(|at| at.format(format_description!("Done [hour]:[minute]")).ok())
        .unwrap_or_else(|| "Done".to_string())
}

fn tone_color(palette: &Palette, tone: Tone) -> &'static str {
    match tone {
        Tone::Success => palette.green,
        Tone::Info => palette.blue,
        Tone::Removal => palette.magenta,
        Tone::Warning => palette.yellow,
        Tone::Error => palette.red,
    }
}
