//! tzglance main entrypoint.

use tzglance::run;
use tzglance::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
