// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Console output - shared writer handles and the console notifier

use crate::error::TariffError;
use crate::registry::{Notifier, TracingNotifier};
use crate::tariff::Tariff;
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tracing::debug;

/// Cloneable handle to one writer
///
/// The shell and the registry's notifier both print to the session output;
/// cloning the handle keeps their lines in a single ordered stream.
pub struct SharedWriter<W>(Rc<RefCell<W>>);

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<W: Write> SharedWriter<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self(Rc::new(RefCell::new(writer)))
    }

    /// Inspect the underlying writer
    pub fn with_inner<T>(&self, f: impl FnOnce(&W) -> T) -> T {
        f(&self.0.borrow())
    }
}

impl SharedWriter<Vec<u8>> {
    /// Everything written so far, as text
    #[must_use]
    pub fn contents(&self) -> String {
        self.with_inner(|buf| String::from_utf8_lossy(buf).into_owned())
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

/// Prints confirmations to `out` and rejections to `err`
pub struct ConsoleNotifier<O, E> {
    out: O,
    err: E,
    color: bool,
}

impl ConsoleNotifier<io::Stdout, io::Stderr> {
    /// Notifier over the process stdout/stderr
    #[must_use]
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), color)
    }
}

impl<O: Write, E: Write> ConsoleNotifier<O, E> {
    /// Notifier over arbitrary writers
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    fn confirmation(&self, tariff: &Tariff) -> String {
        let mark = if self.color { "✓".green().to_string() } else { "✓".to_string() };
        match tariff.discount_percent() {
            Some(percent) => format!(
                "{} Discounted tariff added: {} - {} rub. ({}% discount)",
                mark,
                tariff.destination(),
                tariff.base_price(),
                percent
            ),
            None => format!(
                "{} Tariff added: {} - {} rub.",
                mark,
                tariff.destination(),
                tariff.base_price()
            ),
        }
    }
}

impl<O: Write, E: Write> Notifier for ConsoleNotifier<O, E> {
    fn added(&mut self, tariff: &Tariff) {
        TracingNotifier.added(tariff);
        let line = self.confirmation(tariff);
        if let Err(e) = writeln!(self.out, "{line}") {
            debug!(error = %e, "failed to print confirmation");
        }
    }

    fn rejected(&mut self, destination: &str, error: &TariffError) {
        TracingNotifier.rejected(destination, error);
        let label = "Failed to add tariff:";
        let written = if self.color {
            writeln!(self.err, "{} {}", label.red(), error)
        } else {
            writeln!(self.err, "{label} {error}")
        };
        if let Err(e) = written {
            debug!(error = %e, "failed to print rejection");
        }
    }
}
