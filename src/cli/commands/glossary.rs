//! Glossary command handler

use shotlog::core::glossary::{field_entries, Field, GLOSSARY};

/// Print the glossary, or the options of one field.
pub fn run(field: Option<&str>) {
    let Some(name) = field else {
        println!("\n=== Golf Glossary ===\n");
        for term in GLOSSARY {
            println!("{}", term.term);
            println!("  {}\n", term.definition);
        }
        return;
    };

    let field: Field = match name.parse() {
        Ok(field) => field,
        Err(e) => {
            eprintln!("✗ {e}");
            let names: Vec<&str> = Field::ALL.iter().map(|f| f.label()).collect();
            eprintln!("  Known fields: {}", names.join(", "));
            std::process::exit(2);
        }
    };

    println!("\n=== {field} ===\n");
    for (label, description) in field_entries(field) {
        println!("  {label:<18} {description}");
    }
}
