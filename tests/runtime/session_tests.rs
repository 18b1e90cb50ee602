//! Session parsing and rendering tests.

use xreflect_foundation::DeclarationKind;
use xreflect_parser::Declaration;
use xreflect_runtime::{Config, OutputFormat, Session};

fn bukkit() -> Session {
    let config = Config::from_json(
        r#"{
            "imports": { "Player": "org.bukkit.entity.Player", "World": "org.bukkit.World" },
            "aliases": [["nms", "net.minecraft.server.v1_8_R3"]],
            "classes": ["org.bukkit.entity.Player", "org.bukkit.World"]
        }"#,
    )
    .unwrap();
    Session::from_config(&config).unwrap()
}

#[test]
fn render_text_for_every_kind() {
    let session = bukkit();
    let cases = [
        (
            DeclarationKind::Class,
            "package nms; public class EntityPlayer",
            "class nms.EntityPlayer",
        ),
        (
            DeclarationKind::Class,
            "package nms.entity; public class EntityPlayer",
            "class net.minecraft.server.v1_8_R3.entity.EntityPlayer",
        ),
        (
            DeclarationKind::Field,
            "private static World world;",
            "(accessible) static org.bukkit.World world",
        ),
        (
            DeclarationKind::Method,
            "public Player[] online(World w);",
            "org.bukkit.entity.Player[] online(org.bukkit.World)",
        ),
        (
            DeclarationKind::Constructor,
            "private Player Player(World w, String name);",
            "(accessible) <init>(org.bukkit.World, java.lang.String)",
        ),
    ];

    for (kind, input, expected) in cases {
        assert_eq!(
            session.render(kind, input, OutputFormat::Text).unwrap(),
            expected,
            "{input}"
        );
    }
}

#[test]
fn json_round_trips_through_declaration() {
    let session = bukkit();
    let json = session
        .render(
            DeclarationKind::Method,
            "protected static long count(Player p);",
            OutputFormat::Json,
        )
        .unwrap();

    let decoded: Declaration = serde_json::from_str(&json).unwrap();
    assert_eq!(
        decoded,
        session
            .parse(DeclarationKind::Method, "protected static long count(Player p);")
            .unwrap()
    );
}

#[test]
fn later_imports_do_not_affect_earlier_results() {
    let mut session = bukkit();
    let before = session.parse(DeclarationKind::Field, "Player p;").unwrap();

    session.import("Player", "org.bukkit.World").unwrap();
    let after = session.parse(DeclarationKind::Field, "Player p;").unwrap();

    assert_ne!(before, after);
}

#[test]
fn render_reports_parse_errors() {
    let err = bukkit()
        .render(DeclarationKind::Field, "Entity e;", OutputFormat::Text)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown type 'Entity'"));
    assert!(message.contains("Player=org.bukkit.entity.Player"));
}
