use crate::pass::{CharacterTypeSet, Password, charset};
use crate::rand::entropy_source;
use crate::terminal::{
    box_bottom, box_line, box_line_center, box_opt, box_top, calculate_entropy, entropy_strength,
};

pub fn print_banner() {
    box_top("");
    box_line_center("=== Password Generator ===");
    box_bottom();
    println!();
}

pub fn print_help() {
    box_top("Passgen");
    box_line_center("Secure password generator");
    box_line("");
    box_line("Run with no arguments for interactive prompts, or");
    box_line("pass flags to generate one password directly.");
    box_line("Every enabled character type appears at least once.");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters in the password (default: 16)");
    box_opt("      --no-numbers", "Exclude digits 0-9");
    box_opt("      --no-upper", "Exclude uppercase A-Z");
    box_opt("      --no-lower", "Exclude lowercase a-z");
    box_opt("      --no-special", "Exclude punctuation symbols");
    box_opt("  -b, --board", "Also copy the password to the clipboard");
    box_opt("  -s, --saved", "Start from saved settings");
    box_opt("      --save", "Save the resulting settings as defaults");
    box_opt("  -i, --interactive", "Prompt for every option");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_line("");
    box_line("ENVIRONMENT:");
    box_opt("  PASSGEN_LOG", "Log filter, e.g. debug (default: warn)");
    box_bottom();
}

/// Entropy estimate and source for a generated password. Never prints the
/// password itself.
pub fn print_summary(password: &Password, types: &CharacterTypeSet) {
    let chars = charset::size(types);
    let bits = calculate_entropy(password.len(), chars);
    let classes: Vec<&str> = types.enabled().map(|c| c.name()).collect();

    box_top("Entropy");
    box_line(&format!("{:.1} bits ({})", bits, entropy_strength(bits)));
    box_line(&format!("Source: {} \u{2022} Charset: {} chars", entropy_source(), chars));
    box_line(&format!("Types: {}", classes.join(", ")));
    box_bottom();
}

pub fn print_cancelled() {
    println!();
    box_top("Cancelled");
    box_line("No password generated");
    box_bottom();
}
