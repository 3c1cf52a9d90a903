//! List rules command implementation.

use style_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<22} {:<10} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        println!(
            "{:<10} {:<22} {:<10} {}",
            rule.code(),
            rule.name(),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - TS001-TS005 at default severities (default)");
    println!("  strict       - TS001-TS005, all at error");
    println!("  minimal      - TS001 only (for gradual adoption)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  style-lint check --rules naming-case,import-order");
    println!("  style-lint check --rules TS001,TS004");
}
