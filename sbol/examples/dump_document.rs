//! Builds a one-sequence document and prints it in every serialization.
//!
//! Run with: `cargo run --example dump_document -p igem-sbol`

use igem_sbol::identity::{display_id_of, make_identity};
use igem_sbol::serializer::{jsonld, ntriples, turtle};
use igem_sbol::{ontology, Document, Sequence};

fn main() -> Result<(), igem_sbol::SbolError> {
    let mut doc = Document::with_namespace("https://github.com/Gonza10V");
    let identity = make_identity(doc.namespace.as_deref(), "j23101_seq")?;
    doc.add(Sequence {
        display_id: display_id_of(&identity).to_owned(),
        namespace: "https://github.com/Gonza10V".to_owned(),
        identity,
        name: Some("J23101".to_owned()),
        description: None,
        elements: "tttacagctagctcagtcctaggtattatgctagc".to_owned(),
        encoding: ontology::IUPAC_DNA_ENCODING.to_owned(),
    })?;

    println!("Document: {} objects", doc.len());
    println!();
    println!("{}", turtle::to_turtle(&doc));
    println!("{}", ntriples::to_ntriples(&doc));

    let json_ld = jsonld::to_json_ld(&doc);
    let json_str =
        serde_json::to_string_pretty(&json_ld).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("{json_str}");
    Ok(())
}
