//! List rules command implementation.

use eclint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<28} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<28} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nA rule only runs on files whose .editorconfig sets its property.");
    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  eclint check --rules indent-style,end-of-line");
    println!("  eclint check --rules EC001,EC003");
}
