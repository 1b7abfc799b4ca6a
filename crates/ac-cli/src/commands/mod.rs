pub mod config_ops;
pub mod repl_ops;
pub mod search_ops;

/// Unwrap or print the error and exit with status 1.
#[macro_export]
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
