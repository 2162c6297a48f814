/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rtl-config --example print_config

fn main() {
    // Load configuration from rtl.toml
    let config = rtl_config::RtlConfig::load();

    println!("=== RTL Fix Configuration ===\n");

    println!("Fix Settings:");
    println!("  Farsi: {}", config.fix.farsi);
    println!("  Fix Text Tags: {}", config.fix.fix_text_tags);
    println!("  Preserve Numbers: {}", config.fix.preserve_numbers);
    println!("  Pair Search Limit: {:?}", config.fix.pair_search_limit);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
