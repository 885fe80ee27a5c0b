pub mod color;
pub mod console;
pub mod message;

use std::fmt::Display;
use std::io::{self, StdoutLock, Write};

use crate::errors::Exit;
use crate::platform::{self, BlockingToggle};
use color::{ColorSupport, ColorTag};
use console::WriteOutcome;

/// Prints colored, leveled messages to a writer.
///
/// The free functions in this module build one over stdout for every call;
/// construct one directly to report into any other writer.
pub struct Reporter<W: Write> {
    out: W,
    colors: &'static dyn ColorSupport,
    toggle: Option<Box<dyn BlockingToggle>>,
}

impl Reporter<StdoutLock<'static>> {
    /// Locks stdout for the lifetime of the reporter, so the blocking-mode
    /// toggle cannot race with other writers in this process.
    pub fn stdout() -> Self {
        Self {
            out: io::stdout().lock(),
            colors: color::support(),
            toggle: platform::stdout_toggle(),
        }
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, colors: &'static dyn ColorSupport) -> Self {
        Self {
            out,
            colors,
            toggle: None,
        }
    }

    /// Enables the would-block workaround through `toggle`.
    pub fn with_toggle(mut self, toggle: Box<dyn BlockingToggle>) -> Self {
        self.toggle = Some(toggle);
        self
    }

    /// Renders `args`, wraps them in the color for `tag` and writes the line.
    pub fn print_color(&mut self, args: &[&dyn Display], tag: ColorTag) -> io::Result<WriteOutcome> {
        let text = self.colors.wrap(&message::render(args), tag);
        console::write_with_blocking_retry(&mut self.out, self.toggle.as_deref(), &text)
    }

    pub fn success(&mut self, args: &[&dyn Display]) {
        let _ = self.print_color(args, ColorTag::Success);
    }

    pub fn info(&mut self, args: &[&dyn Display]) {
        let _ = self.print_color(args, ColorTag::Info);
    }

    pub fn warning(&mut self, args: &[&dyn Display]) {
        let _ = self.print_color(args, ColorTag::Warning);
    }

    pub fn error(&mut self, args: &[&dyn Display]) {
        let _ = self.print_color(args, ColorTag::Error);
    }

    /// Prints `message` at error level and returns the exit request for the
    /// caller to act on.
    pub fn error_and_exit(&mut self, message: &str, exit_code: i32) -> Exit {
        self.error(&[&message]);
        Exit::new(exit_code)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Print arguments to stdout in `tag`'s color. Write failures are dropped.
pub fn print_color(args: &[&dyn Display], tag: ColorTag) {
    let _ = Reporter::stdout().print_color(args, tag);
}

/// Print a success message in green to stdout.
pub fn print_success(args: &[&dyn Display]) {
    print_color(args, ColorTag::Success);
}

/// Print an info message in blue to stdout.
pub fn print_info(args: &[&dyn Display]) {
    print_color(args, ColorTag::Info);
}

/// Print a warning message in yellow to stdout.
pub fn print_warning(args: &[&dyn Display]) {
    print_color(args, ColorTag::Warning);
}

/// Print an error message in red to stdout.
pub fn print_error(args: &[&dyn Display]) {
    print_color(args, ColorTag::Error);
}

/// Print an error message and exit the process with `exit_code`.
///
/// Entry points that want to intercept termination should use
/// [`Reporter::error_and_exit`] instead.
pub fn print_error_and_exit(message: &str, exit_code: i32) -> ! {
    let exit = Reporter::stdout().error_and_exit(message, exit_code);
    exit.terminate()
}

/// [`print_error_and_exit`] with the conventional failure code 1.
pub fn print_fatal(message: &str) -> ! {
    print_error_and_exit(message, Exit::FAILURE.code())
}

/// Print any number of `Display` values in green, separated by spaces.
#[macro_export]
macro_rules! print_success {
    ($($arg:expr),* $(,)?) => {
        $crate::output::print_success(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Print any number of `Display` values in blue, separated by spaces.
#[macro_export]
macro_rules! print_info {
    ($($arg:expr),* $(,)?) => {
        $crate::output::print_info(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Print any number of `Display` values in yellow, separated by spaces.
#[macro_export]
macro_rules! print_warning {
    ($($arg:expr),* $(,)?) => {
        $crate::output::print_warning(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Print any number of `Display` values in red, separated by spaces.
#[macro_export]
macro_rules! print_error {
    ($($arg:expr),* $(,)?) => {
        $crate::output::print_error(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
