//! timeclock main entrypoint.

use timeclock::run;
use timeclock::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
