//! The notifications screen.

use aiventory_app::notifications::NotificationCenter;

use super::CommandError;
use super::inventory::print_json;

/// List the seeded notifications, or clear them all.
pub fn run(clear: bool, json: bool) -> Result<(), CommandError> {
    let mut center = NotificationCenter::seeded();

    if clear {
        center.clear_all();
        print_line(&format!("Notifications cleared ({} remaining)", center.len()));
        return Ok(());
    }

    if json {
        print_json(&center.records())?;
        return Ok(());
    }

    print_line("Notifications");
    for record in center.records() {
        print_line(&format!(
            "  [{}] {} - {} ({})",
            record.kind, record.title, record.message, record.time_label
        ));
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}
