//! End-to-end rendering of representative trees.
//!
//! Inline snapshots; run `cargo insta review` after intentional format changes.

use swiftwright_ast::{
    AssignmentMode, Call, Capture, Closure, Condition, Conforming, Decorated, Effectful, Enum,
    EnumCase, ForIn, Function, If, Infix, Literal, Member, Node, NodeList, Param, Pattern,
    Property, Renderer, Return, Struct, Switch, SwitchCase, TupleAssignment, render,
};

fn expression(node: impl Into<Node>) -> String {
    Renderer::default().render_expression(&node.into())
}

#[test]
fn test_http_status_enum() {
    let status = Enum::new("HTTPStatus")
        .inherits("Int")
        .inherits("CaseIterable")
        .cases(|c| {
            c.push(EnumCase::new("ok").equals(200));
            c.push(EnumCase::new("notFound").equals(404));
            c.push(EnumCase::new("serverError").equals(500));
        });

    insta::assert_snapshot!(render(&[status.into()]), @r"
    enum HTTPStatus: Int, CaseIterable {
        case ok = 200
        case notFound = 404
        case serverError = 500
    }
    ");
}

#[test]
fn test_struct_field_then_method() {
    let greeter = Struct::new("Greeter").members(|m| {
        m.push(Property::let_("name").ty("String"));
        m.push(Function::new("greet").body(|b| {
            b.push(Call::named("print").arg("Hello,\t\"friend\"\n"));
        }));
    });

    insta::assert_snapshot!(render(&[greeter.into()]), @r#"
    struct Greeter {
        let name: String
        func greet() {
            print("Hello,\t\"friend\"\n")
        }
    }
    "#);
}

#[test]
fn test_closure_with_only_return_type() {
    let closure = Closure::new().returns("Int").body(|b| {
        b.push(Return::value(Node::reference("x")));
    });

    let text = expression(closure);
    assert_eq!(text, "{ () -> Int in\n    return x\n}");
    assert!(!text.contains("[]"));
}

#[test]
fn test_construction_order_is_preserved() {
    let names = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let nodes = NodeList::build(|b| {
        b.each(names, |b, name| {
            b.push(Property::let_(name).value(0));
        });
        b.when(true, |b| {
            b.push(Property::let_("zeta").value(1));
        });
        b.either(
            false,
            |b| {
                b.push(Property::let_("never").value(2));
            },
            |b| {
                b.push(Property::let_("eta").value(3));
            },
        );
    });

    let text = render(&nodes);
    let order: Vec<&str> = text
        .lines()
        .map(|l| l.split_whitespace().nth(1).unwrap_or_default())
        .collect();
    assert_eq!(
        order,
        ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta"]
    );
}

#[test]
fn test_enum_case_dual_rendering() {
    let failure = EnumCase::new("failure")
        .associated_value("code", "Int")
        .associated_value("message", "String");
    let ok = EnumCase::new("ok").equals(200);

    let decl = render(&[failure.clone().into(), ok.clone().into()]);
    assert_eq!(
        decl,
        "case failure(code: Int, message: String)\ncase ok = 200\n"
    );
    assert_eq!(expression(failure), ".failure(code, message)");
    assert_eq!(expression(ok), ".ok");
}

#[test]
fn test_effect_order_is_fixed() {
    let typed = Function::new("decode").throws_typed("DecodingError").async_();
    let rethrowing = Function::new("each").async_().rethrows();
    let text = render(&[typed.into(), rethrowing.into()]);

    assert!(text.contains("func decode() async throws(DecodingError) {"));
    assert!(text.contains("func each() async rethrows {"));
    assert!(!text.contains("throws ("));
}

#[test]
fn test_tuple_assignment_prefixes_are_distinct() {
    let modes = [
        AssignmentMode::Sync,
        AssignmentMode::Async,
        AssignmentMode::Throwing,
        AssignmentMode::AsyncThrowing,
        AssignmentMode::Concurrent,
    ];
    let lines: Vec<String> = modes
        .into_iter()
        .map(|mode| {
            let value = Literal::tuple([Call::named("first"), Call::named("second")]);
            render(&[TupleAssignment::new(["a", "b"], value).mode(mode).into()])
        })
        .collect();

    for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(lines[4], "async let (a, b) = (first(), second())\n");
    assert_eq!(lines[1], "let (a, b) = await (first(), second())\n");
}

#[test]
fn test_repeated_conformance_is_kept() {
    let s = Struct::new("Twice").inherits("Codable").inherits("Codable");
    assert_eq!(render(&[s.into()]), "struct Twice: Codable, Codable {\n}\n");
}

#[test]
fn test_deep_nesting() {
    let view_model = Struct::new("Loader")
        .public()
        .inherits("Sendable")
        .member(
            Function::new("load")
                .param(Param::new("ids", "[Int]"))
                .async_()
                .throws()
                .returns("[Item]")
                .body(|b| {
                    b.push(Property::var_("items").ty("[Item]").value(Literal::array(Vec::<Node>::new())));
                    b.push(ForIn::binding("id", Node::reference("ids")).body(|b| {
                        b.push(
                            Switch::new(Call::named("lookup").arg(Node::reference("id")))
                                .case(SwitchCase::new(Pattern::case("hit", ["item"])).body(|b| {
                                    b.push(If::when(Condition::expr(Member::new(
                                        Node::reference("item"),
                                        "isValid",
                                    )))
                                    .then(|b| {
                                        b.push(Call::new(Member::new(Node::reference("items"), "append"))
                                            .arg(Node::reference("item")));
                                    }));
                                }))
                                .case(SwitchCase::new(EnumCase::new("miss"))),
                        );
                    }));
                    b.push(Return::value(Call::named("refine").arg(Node::reference("items")).trailing(
                        Closure::new().capture(Capture::weak("self")).param("item").body(|b| {
                            b.push(Return::value(Infix::new(
                                Node::reference("item.score"),
                                ">",
                                0,
                            )));
                        }),
                    )));
                }),
        );

    insta::assert_snapshot!(render(&[view_model.into()]), @r"
    public struct Loader: Sendable {
        func load(ids: [Int]) async throws -> [Item] {
            var items: [Item] = []
            for id in ids {
                switch lookup(id) {
                case .hit(let item):
                    if item.isValid {
                        items.append(item)
                    }
                case .miss:
                    break
                }
            }
            return refine(items) { [weak self] item in
                return item.score > 0
            }
        }
    }
    ");
}

#[test]
fn test_mismatched_child_degrades_to_placeholder() {
    let call = Call::named("use").arg(Struct::new("NotAnExpression")).arg(1);
    assert_eq!(expression(call), "use(, 1)");
}
