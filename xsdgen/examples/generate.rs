//! Generates two related classes and prints the structured artifacts.
//!
//! Run with: cargo run --example generate

use xsdgen::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    // A simple type with length restrictions, extending a string wrapper.
    let mut texto = ClassSpec::new("StTexto4Type")
        .with_namespace("Example")
        .with_extends(ClassRef::new("anyType").with_value_property(
            PropertySpec::new(VALUE_PROPERTY).with_type(TypeRef::Native(NativeType::String)),
        ));
    texto.checks.add(VALUE_PROPERTY, CheckKind::MinLength, "1");
    texto.checks.add(VALUE_PROPERTY, CheckKind::MaxLength, "4");

    // A structural type with a required repeated element.
    let transacao = ClassSpec::new("CabecalhoTransacaoType")
        .with_namespace("Example")
        .with_property(
            PropertySpec::new("identificacaoTransacao")
                .with_type(TypeRef::Native(NativeType::String))
                .with_occurs(1, Some(1)),
        )
        .with_property(
            PropertySpec::new("procedimentosRealizados").with_type(TypeRef::collection(
                PropertySpec::new("procedimentoRealizado")
                    .with_type(TypeRef::Native(NativeType::String))
                    .with_occurs(1, None),
            )),
        );

    let generator = Generator::new();
    for spec in [&texto, &transacao] {
        match generator.generate(spec) {
            Ok(Some(class)) => {
                let methods: Vec<&str> =
                    class.methods.iter().map(|m| m.name.as_str()).collect();
                println!("{}: {} methods {:?}", class.name, methods.len(), methods);
                match serde_json::to_string_pretty(&class) {
                    Ok(json) => println!("{json}"),
                    Err(e) => eprintln!("serialization failed: {e}"),
                }
            }
            Ok(None) => println!("{}: suppressed (bare value wrapper)", spec.name),
            Err(e) => eprintln!("{}: generation failed: {e}", spec.name),
        }
    }
}
