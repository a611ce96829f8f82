//! Signal listing command implementation.

use ewmom_signals::registry::{SignalCategory, signals_by_category};

/// List available signals grouped by category.
pub(crate) fn list_signals(verbose: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Available Signals                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let categories = [
        (SignalCategory::Price, "Price"),
        (SignalCategory::Volume, "Volume"),
    ];

    for (cat, cat_name) in categories {
        let signals = signals_by_category(&cat);
        if signals.is_empty() {
            continue;
        }

        println!("{cat_name}: {}", cat.description());
        println!("{}", "-".repeat(60));

        for info in signals {
            if verbose {
                println!(
                    "  {:32} - {} (column: {}, min periods: {})",
                    info.name, info.description, info.input_column, info.min_periods
                );
                println!("  {:32}   aliases: {}", "", info.aliases.join(", "));
            } else {
                println!("  {}", info.name);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for detailed signal descriptions.\n");
    }
}
