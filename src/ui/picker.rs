//! Pick one entry from a short list.
//!
//! In a terminal the list is drawn in place and driven by arrow keys. When
//! stdin or stderr is redirected a numbered prompt is read from stdin
//! instead.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use super::settings;

/// Returns the chosen index, or `None` when the user cancels.
pub fn pick_from_list(color: bool, title: &str, options: &[String]) -> io::Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        return pick_from_list_fallback(title, options);
    }
    pick_from_list_interactive(color, title, options)
}

fn pick_from_list_fallback(title: &str, options: &[String]) -> io::Result<Option<usize>> {
    eprintln!("{} {title}", settings::GLYPH_SECTION_BULLET);
    for (idx, option) in options.iter().enumerate() {
        eprintln!("{}{}. {option}", settings::INDENT_1, idx + 1);
    }
    eprint!("{}{}", settings::INDENT_1, settings::PICKER_FALLBACK_PROMPT);
    io::stderr().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        eprintln!();
        return Ok(None);
    }
    Ok(parse_selection(&line, options.len()))
}

/// Parse a 1-based menu answer into a 0-based index.
pub(crate) fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let index = input.trim().parse::<usize>().ok()?;
    (1..=len).contains(&index).then(|| index - 1)
}

fn pick_from_list_interactive(
    color: bool,
    title: &str,
    options: &[String],
) -> io::Result<Option<usize>> {
    let _guard = RawModeGuard::acquire()?;
    let mut stderr = io::stderr();
    let mut selected = 0usize;
    let mut previous_rows = 0usize;

    loop {
        previous_rows = render_picker(&mut stderr, color, title, options, selected, previous_rows)?;

        if !event::poll(Duration::from_millis(settings::PICKER_EVENT_POLL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                selected = selected.checked_sub(1).unwrap_or(options.len() - 1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                selected = (selected + 1) % options.len();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(idx) = parse_selection(&c.to_string(), options.len()) {
                    selected = idx;
                }
            }
            KeyCode::Enter => {
                clear_surface(&mut stderr, previous_rows)?;
                return Ok(Some(selected));
            }
            KeyCode::Esc => {
                clear_surface(&mut stderr, previous_rows)?;
                return Ok(None);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                clear_surface(&mut stderr, previous_rows)?;
                return Ok(None);
            }
            _ => {}
        }
    }
}

/// Draw the picker and return the index of the last row drawn.
fn render_picker(
    stderr: &mut io::Stderr,
    color: bool,
    title: &str,
    options: &[String],
    selected: usize,
    previous_rows: usize,
) -> io::Result<usize> {
    rewind(stderr, previous_rows)?;

    let cols = terminal_columns();
    let title_plain = format!("{} {title}", settings::GLYPH_SECTION_BULLET);
    let help_plain = format!("{}{}", settings::INDENT_1, settings::PICKER_HELP);
    let mut total_rows = wrapped_rows(&title_plain, cols) + wrapped_rows(&help_plain, cols);

    if color {
        stderr.queue(PrintStyledContent(
            settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
        ))?;
        stderr.queue(Print(" "))?;
        stderr.queue(PrintStyledContent(
            title.with(settings::COLOR_SECTION_TITLE).bold(),
        ))?;
        stderr.queue(Print("\r\n"))?;
        stderr.queue(PrintStyledContent(
            help_plain.as_str().with(settings::COLOR_FIELD_KEY),
        ))?;
    } else {
        stderr.queue(Print(&title_plain))?;
        stderr.queue(Print("\r\n"))?;
        stderr.queue(Print(&help_plain))?;
    }

    for (idx, option) in options.iter().enumerate() {
        let active = idx == selected;
        let marker = if active {
            settings::PICKER_SELECTED
        } else {
            settings::PICKER_UNSELECTED
        };
        let line_plain = format!("{}{marker} {option}", settings::INDENT_1);
        total_rows += wrapped_rows(&line_plain, cols);
        stderr.queue(Print("\r\n"))?;
        if color {
            let tint = if active {
                settings::COLOR_PICKER_SELECTED
            } else {
                settings::COLOR_PICKER_UNSELECTED
            };
            stderr.queue(Print(settings::INDENT_1))?;
            stderr.queue(PrintStyledContent(marker.with(tint)))?;
            stderr.queue(Print(" "))?;
            stderr.queue(PrintStyledContent(option.as_str().with(tint)))?;
        } else {
            stderr.queue(Print(&line_plain))?;
        }
    }

    stderr.flush()?;
    Ok(total_rows.saturating_sub(1))
}

fn clear_surface(stderr: &mut io::Stderr, previous_rows: usize) -> io::Result<()> {
    rewind(stderr, previous_rows)?;
    stderr.flush()
}

/// Move back to the picker's first row and clear everything below it.
fn rewind(stderr: &mut io::Stderr, previous_rows: usize) -> io::Result<()> {
    if previous_rows > 0 {
        let rows = u16::try_from(previous_rows).unwrap_or(u16::MAX);
        stderr.queue(MoveUp(rows))?;
    }
    stderr.queue(MoveToColumn(0))?;
    stderr.queue(Clear(ClearType::FromCursorDown))?;
    Ok(())
}

fn terminal_columns() -> usize {
    terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
        .unwrap_or(settings::FALLBACK_COLUMNS)
}

/// Rows `text` occupies when soft-wrapped at `cols`.
fn wrapped_rows(text: &str, cols: usize) -> usize {
    let width = text.chars().count();
    if cols == 0 || width == 0 {
        return 1;
    }
    width.div_ceil(cols)
}

/// Restores cooked mode on every return path.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
