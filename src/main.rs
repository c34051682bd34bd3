//! punchclock main entrypoint.

use punchclock::run;
use punchclock::ui::messages::{error, warning};

fn main() {
    if let Err(e) = run() {
        // state conflicts are the user's cue, not a failure
        if e.is_user_correctable() {
            warning(e);
            return;
        }
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
