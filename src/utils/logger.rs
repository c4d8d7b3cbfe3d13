use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Success,
    Error,
    #[allow(dead_code)]
    Info,
    Warning,
}

impl LogLevel {
    // Errors and warnings belong on stderr so scripted callers can keep
    // stdout for the outcome itself.
    fn uses_stderr(self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Warning)
    }
}

#[derive(Debug, Clone)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }

    pub fn log_message(&self, level: LogLevel, message: &str) {
        let line = format!(
            "{} {} {}",
            self.tool_signature(),
            self.format_status(level),
            message
        );
        if level.uses_stderr() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn log_message_with_trace(&self, level: LogLevel, message: &str, trace: Vec<&str>) {
        self.log_message(level, message);
        for t in trace {
            if level.uses_stderr() {
                eprintln!("     ↳ {}", t);
            } else {
                println!("     ↳ {}", t);
            }
        }
    }

    fn tool_signature(&self) -> String {
        let mut s = String::new();

        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap_or_default();
        s.push('[');

        write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 255,
                g: 184,
                b: 77,
            })
        )
        .unwrap_or_default();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap_or_default();
        s.push_str("jsonbump");
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap_or_default();

        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap_or_default();
        s.push(']');
        write!(&mut s, "{}", ResetColor).unwrap_or_default();

        s
    }

    fn format_status(&self, level: LogLevel) -> String {
        let mut s = String::new();

        let color = match level {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
        };

        let status = match level {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
        };

        s.push('[');
        write!(&mut s, "{}", SetForegroundColor(color)).unwrap_or_default();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap_or_default();
        s.push_str(status);
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap_or_default();
        s.push(']');
        write!(&mut s, "{}", ResetColor).unwrap_or_default();

        s
    }
}
