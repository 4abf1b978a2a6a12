//! Toast-style feedback sink
//!
//! Game controllers report validation failures and successes through a
//! `Notifier`; how they are shown is up to the front end.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub text: String,
}

pub trait Notifier {
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Collects notifications in order; handy for tests and for front ends that
/// render a message list
impl Notifier for Vec<Notification> {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.push(Notification {
            severity,
            text: message.to_string(),
        });
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, severity: Severity, message: &str) {
        (**self).notify(severity, message);
    }
}
