//! The `names/entities` fixture schema shared by the integration tests.

#![allow(dead_code)]

use protoname_ir::{GraphBuilder, GraphError, SchemaGraph};

pub const PACKAGE: &str = ".names.entities";

/// Build the fixture graph.
///
/// Equivalent to a single `entities.proto` in package `names.entities`
/// declaring one entity per casing style for every entity kind.
pub fn entities() -> SchemaGraph {
    build().expect("fixture graph is well-formed")
}

/// Look up an entity relative to the fixture package.
pub fn lookup(graph: &SchemaGraph, path: &str) -> protoname_ir::EntityId {
    graph
        .lookup(&format!("{PACKAGE}.{path}"))
        .unwrap_or_else(|| panic!("could not locate entity '{path}'"))
}

fn build() -> Result<SchemaGraph, GraphError> {
    let mut b = GraphBuilder::new();
    let pkg = b.package("names.entities")?;
    let file = b.file("entities.proto", pkg)?;

    for name in [
        "UpperCamelCaseMessage",
        "lowerCamelCaseMessage",
        "SCREAMING_SNAKE_CASE",
        "Upper_Snake_Case",
        "lower_snake_case",
        "lowercase",
        "UPPERCASE",
        "_underscore",
        "__DoubleUnderscore",
        "String",
    ] {
        b.message(file, name)?;
    }

    let nested = b.message(file, "Nested")?;
    let nested_message = b.message(nested, "Message")?;
    b.message(nested_message, "Message")?;
    let inner_enum = b.enumeration(nested_message, "Enum")?;
    b.enum_value(inner_enum, "VALUE")?;
    b.message(nested, "_underscore")?;
    b.message(nested, "String")?;
    let nested_enum = b.enumeration(nested, "Enum")?;
    b.enum_value(nested_enum, "VALUE")?;

    let upper_camel = b.enumeration(file, "UpperCamelCaseEnum")?;
    for value in [
        "SCREAMING_SNAKE_CASE_ENUM_VALUE",
        "lower_snake_case_enum_value",
        "Upper_Snake_Case_Enum_Value",
        "UpperCamelCaseEnumValue",
        "lowerCamelCaseEnumValue",
    ] {
        b.enum_value(upper_camel, value)?;
    }
    for (name, value) in [
        ("lowerCamelCaseEnum", "LCC_Value"),
        ("SCREAMING_SNAKE_ENUM", "SS_Value"),
        ("lower_snake_enum", "LS_Value"),
        ("Upper_Snake_Enum", "US_Value"),
    ] {
        let en = b.enumeration(file, name)?;
        b.enum_value(en, value)?;
    }

    let fields = b.message(file, "Fields")?;
    for name in [
        "lower_snake_case",
        "Upper_Snake_Case",
        "SCREAMING_SNAKE_CASE",
        "lowerCamelCase",
        "UpperCamelCase",
        "string",
    ] {
        b.field(fields, name)?;
    }

    let oneofs = b.message(file, "Oneofs")?;
    for (group, field) in [
        ("lower_snake_case", "LS"),
        ("Upper_Snake_Case", "US"),
        ("SCREAMING_SNAKE_CASE", "SS"),
        ("lowerCamelCase", "LC"),
        ("UpperCamelCase", "UC"),
        ("string", "S"),
    ] {
        let group = b.oneof(oneofs, group)?;
        b.oneof_field(group, field)?;
    }
    let group = b.oneof(oneofs, "oneof")?;
    for field in [
        "lower_snake_case_o",
        "Upper_Snake_Case_O",
        "SCREAMING_SNAKE_CASE_O",
        "lowerCamelCaseO",
        "UpperCamelCaseO",
        "reset",
    ] {
        b.oneof_field(group, field)?;
    }

    for name in [
        "UpperCamelService",
        "lowerCamelService",
        "lower_snake_service",
        "Upper_Snake_Service",
        "SCREAMING_SNAKE_SERVICE",
        "reset",
    ] {
        b.service(file, name)?;
    }
    let service = b.service(file, "Service")?;
    for method in [
        "UpperCamel",
        "lowerCamel",
        "lower_snake",
        "Upper_Snake",
        "SCREAMING_SNAKE",
        "Reset",
    ] {
        b.method(service, method)?;
    }

    Ok(b.build())
}
