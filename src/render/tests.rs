#[cfg(test)]
mod tests {
    use super::super::engine::{default_template_dir, UnitRenderer};
    use super::super::error::RenderError;
    use crate::unit::models::{Unit, UnitLiteral};
    use std::fs;
    use tempfile::tempdir;

    fn meter(literals: Vec<UnitLiteral>) -> Unit {
        Unit {
            name: "Meter".to_string(),
            namespace: "length".to_string(),
            unit_id: 1,
            literals,
            export_macro: String::new(),
            out_dir: None,
        }
    }

    fn km() -> UnitLiteral {
        UnitLiteral {
            name: "km".to_string(),
            multiplier: 1000.0,
            offset: 0.0,
        }
    }

    fn shipped_renderer() -> UnitRenderer {
        UnitRenderer::from_directory(default_template_dir()).unwrap()
    }

    #[test]
    fn test_render_header_basic() {
        let renderer = shipped_renderer();
        let header = renderer.render_header(&meter(Vec::new())).unwrap();

        assert!(header.contains("namespace length"));
        assert!(header.contains("class Meter"));
        assert!(header.contains("unit_id = 1"));
    }

    #[test]
    fn test_no_literals_no_literal_block() {
        let renderer = shipped_renderer();
        let unit = meter(Vec::new());

        let header = renderer.render_header(&unit).unwrap();
        let source = renderer.render_source(&unit).unwrap();

        assert!(!header.contains("inline namespace literals"));
        assert!(!source.contains("inline namespace literals"));
    }

    #[test]
    fn test_literals_rendered_with_multiplier_and_offset() {
        let renderer = shipped_renderer();
        let unit = meter(vec![km()]);

        let header = renderer.render_header(&unit).unwrap();
        let source = renderer.render_source(&unit).unwrap();

        assert!(header.contains("inline namespace literals"));
        assert!(header.contains(r#"operator "" _km"#));

        // The definition carries the exact multiplier and offset
        assert!(source.contains(r#"operator "" _km"#));
        assert!(source.contains("1000.0, 0.0"));
    }

    #[test]
    fn test_literal_offset_rendered() {
        let renderer = shipped_renderer();
        let mut unit = meter(vec![UnitLiteral {
            name: "degF".to_string(),
            multiplier: 0.5556,
            offset: 255.37,
        }]);
        unit.name = "Temperature".to_string();
        unit.namespace = "common".to_string();

        let source = renderer.render_source(&unit).unwrap();
        assert!(source.contains(r#"operator "" _degF"#));
        assert!(source.contains("0.5556, 255.37"));
    }

    #[test]
    fn test_export_macro_token() {
        let renderer = shipped_renderer();

        let mut unit = meter(vec![km()]);
        unit.export_macro = "UNIT_SYSTEM_EXPORT_MACRO ".to_string();

        let header = renderer.render_header(&unit).unwrap();
        let source = renderer.render_source(&unit).unwrap();
        assert!(header.contains("class UNIT_SYSTEM_EXPORT_MACRO Meter"));
        assert!(header.contains("UNIT_SYSTEM_EXPORT_MACRO Meter operator \"\" _km"));
        assert!(source.contains("UNIT_SYSTEM_EXPORT_MACRO Meter unit_cast"));
        assert!(source.contains("#include \"Meter.hpp\""));

        // Without the flag the token must not show up anywhere
        let plain_unit = meter(vec![km()]);
        assert!(!renderer
            .render_header(&plain_unit)
            .unwrap()
            .contains("UNIT_SYSTEM_EXPORT_MACRO"));
        assert!(!renderer
            .render_source(&plain_unit)
            .unwrap()
            .contains("UNIT_SYSTEM_EXPORT_MACRO"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let renderer = shipped_renderer();
        let unit = meter(vec![km()]);

        let first = renderer.render_header(&unit).unwrap();
        let second = renderer.render_header(&unit).unwrap();
        assert_eq!(first, second);

        let other = shipped_renderer();
        assert_eq!(first, other.render_header(&unit).unwrap());
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let empty = tempdir().unwrap();

        match UnitRenderer::from_directory(empty.path()) {
            Err(RenderError::TemplateLoad(msg)) => {
                assert!(msg.contains("header.template"));
            }
            other => panic!("Expected TemplateLoad error, got: {:?}", other.err()),
        }
    }

    #[test]
    fn test_bad_template_syntax_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("header.template"), "{{#if create_literals}}").unwrap();
        fs::write(dir.path().join("source.template"), "ok").unwrap();

        match UnitRenderer::from_directory(dir.path()) {
            Err(RenderError::TemplateSyntax(_)) => {}
            other => panic!("Expected TemplateSyntax error, got: {:?}", other.err()),
        }
    }

    #[test]
    fn test_custom_template_dir() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("header.template"),
            "{{unit_namespace}}::{{unit_name}} id={{unit_id}}",
        )
        .unwrap();
        fs::write(
            dir.path().join("source.template"),
            "{{#each literals}}{{name}}={{multiplier}}+{{offset}};{{/each}}",
        )
        .unwrap();

        let renderer = UnitRenderer::from_directory(dir.path()).unwrap();
        let unit = meter(vec![km()]);

        assert_eq!(renderer.render_header(&unit).unwrap(), "length::Meter id=1");
        assert_eq!(renderer.render_source(&unit).unwrap(), "km=1000.0+0.0;");
    }
}
