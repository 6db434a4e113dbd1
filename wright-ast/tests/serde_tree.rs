//! JSON form of syntax trees.

use swiftwright_ast::{
    Call, Conforming, Decorated, Enum, EnumCase, Function, Node, Property, Renderer, SourceFile,
    Struct,
};

fn sample_file() -> SourceFile {
    SourceFile::new()
        .header("Generated")
        .import("Foundation")
        .node(
            Enum::new("Mode")
                .public()
                .inherits("String")
                .cases(|c| {
                    c.push(EnumCase::new("fast").equals("fast"));
                    c.push(EnumCase::new("safe").equals("safe"));
                }),
        )
        .node(Node::blank())
        .node(Struct::new("Config").members(|m| {
            m.push(Property::var_("mode").ty("Mode").value(EnumCase::new("safe")));
            m.push(Function::new("apply").body(|b| {
                b.push(Call::named("configure").labeled("mode", Node::reference("mode")));
            }));
        }))
}

#[test]
fn test_tree_survives_json() {
    let file = sample_file();
    let json = serde_json::to_string_pretty(&file).unwrap();
    let back: SourceFile = serde_json::from_str(&json).unwrap();

    assert_eq!(back, file);
    assert_eq!(
        Renderer::default().render_file(&back),
        Renderer::default().render_file(&file)
    );
}

#[test]
fn test_adjacent_tagging() {
    let node = Node::from(Struct::new("Empty"));
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["kind"], "struct");
    assert_eq!(json["value"]["name"], "Empty");
}

#[test]
fn test_hand_written_json() {
    let json = r#"[
        {"kind": "struct", "value": {"name": "Point", "members": [
            {"kind": "property", "value": {"name": "x", "binding": "let", "ty": {"kind": "named", "value": "Double"}}}
        ]}}
    ]"#;
    let nodes: Vec<Node> = serde_json::from_str(json).unwrap();
    assert_eq!(
        Renderer::default().render(&nodes),
        "struct Point {\n    let x: Double\n}\n"
    );
}
