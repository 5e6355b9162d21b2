//! Demonstrates loading the bundled drum-kit ontology and serializing it.
//!
//! Run with: `cargo run --example dump_ontology -p entity-decl`

use entity_decl::serializer::{jsonld, turtle};
use entity_decl::Ontology;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ontology = Ontology::drums().map_err(|e| e.to_string())?;

    println!(
        "{} v{}: {} entities under {}",
        ontology.label().unwrap_or("(unlabelled)"),
        ontology.version().unwrap_or("-"),
        ontology.len(),
        ontology.base_iri()
    );
    println!();

    // List every entity with its ancestry.
    for decl in ontology.declarations() {
        let chain = ontology.ancestors(&decl.name).join(" < ");
        let flag = if decl.annotations.is_deprecated() {
            "  [deprecated]"
        } else {
            ""
        };
        println!("  {:14} < {chain}{flag}", decl.name);
        if let Some(expr) = &decl.annotations.equivalent_to {
            println!("  {:14}   ≡ {expr}", "");
        }
    }

    println!();

    let json_str = serde_json::to_string_pretty(&jsonld::to_json_ld(ontology))?;
    println!("JSON-LD output ({} bytes)", json_str.len());

    println!();
    print!("{}", turtle::to_turtle(ontology));
    Ok(())
}
