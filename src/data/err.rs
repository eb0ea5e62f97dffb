use std::fmt::Display;

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

/// Trait for terminating a command-line driver on error with a status code
/// provided by [`GetCode`], instead of panicking via
/// [`expect()`](std::result::Result::expect).
pub trait OrFail<T> {
    /// Print the error to stderr and exit.
    fn unwrap_or_fail(self) -> T;

    /// Print `msg` followed by the error to stderr and exit.
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        self.unwrap_or_else(|e| exit_with(None, &e))
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        self.unwrap_or_else(|e| exit_with(Some(msg), &e))
    }
}

fn exit_with<E: GetCode + Display>(msg: Option<&str>, e: &E) -> ! {
    match msg {
        Some(msg) => eprintln!("Error: {msg}\n\n{e}"),
        None => eprintln!("Error: {e}"),
    }
    std::process::exit(e.get_code())
}
