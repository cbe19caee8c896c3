#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

#[cfg(test)]
mod printer_tests {
    use xmlwalk::test_utils::*;

    #[test]
    fn test_tree_samples() -> Result<()> {
        for (xml, expected) in TREE_SAMPLES {
            assert_eq!(dump_str(xml)?, expected, "Unexpected tree for {}", xml);
        }
        Ok(())
    }

    // Leaf and Branch Tests
    #[test]
    fn test_flat_document_has_one_level_of_indentation() -> Result<()> {
        let xml = r#"<list><item n="1">a</item><item>b</item><item/></list>"#;
        let out = dump_str(xml)?;
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines, vec!["list", "\titem: a", "\t\tn: 1", "\titem: b", "\titem: "]);
        Ok(())
    }

    #[test]
    fn test_root_only_document_has_no_tabs() -> Result<()> {
        let out = dump_str(r#"<solo a="1" b="2">text</solo>"#)?;
        assert_eq!(out, "solo: text\n\ta: 1\n\tb: 2\n");
        assert!(!out.lines().next().unwrap_or_default().starts_with('\t'));
        Ok(())
    }

    #[test]
    fn test_nesting_depth_matches_tab_count() -> Result<()> {
        let out = dump_str("<l0><l1><l2><l3>bottom</l3></l2></l1></l0>")?;
        for (depth, line) in out.lines().enumerate() {
            let tabs = line.chars().take_while(|c| *c == '\t').count();
            assert_eq!(tabs, depth, "Wrong indentation on line {:?}", line);
        }
        assert_eq!(out.lines().last(), Some("\t\t\tl3: bottom"));
        Ok(())
    }

    #[test]
    fn test_branch_text_is_never_printed() -> Result<()> {
        let out = dump_str("<a>visible?<b/>still hidden</a>")?;
        assert!(!out.contains("visible?"));
        assert!(!out.contains("still hidden"));
        assert_eq!(out, "a\n\tb: \n");
        Ok(())
    }

    #[test]
    fn test_whitespace_between_children_is_ignored() -> Result<()> {
        let xml = "<a>\n  <b>x</b>\n  <c>y</c>\n</a>\n";
        assert_eq!(dump_str(xml)?, "a\n\tb: x\n\tc: y\n");
        Ok(())
    }

    #[test]
    fn test_leaf_with_only_whitespace_keeps_it() -> Result<()> {
        assert_eq!(dump_str("<a>\n  </a>")?, "a: \n  \n");
        Ok(())
    }

    // Attribute Tests
    #[test]
    fn test_attributes_keep_document_order() -> Result<()> {
        let out = dump_str(r#"<a z="1" y="2" x="3"/>"#)?;
        assert_eq!(out, "a: \n\tz: 1\n\ty: 2\n\tx: 3\n");
        Ok(())
    }

    #[test]
    fn test_attributes_come_before_children() -> Result<()> {
        let out = dump_str(r#"<a k="v"><b j="w">t</b></a>"#)?;
        assert_eq!(out, "a\n\tk: v\n\tb: t\n\t\tj: w\n");
        Ok(())
    }

    #[test]
    fn test_attribute_entities_are_expanded() -> Result<()> {
        let out = dump_str(r#"<a q="&quot;x&quot; &amp; y"/>"#)?;
        assert_eq!(out, "a: \n\tq: \"x\" & y\n");
        Ok(())
    }

    // Namespace Tests
    #[test]
    fn test_namespace_declarations_are_printed() -> Result<()> {
        let xml = r#"<doc xmlns="urn:d" xmlns:x="urn:x"><x:item x:id="1">v</x:item></doc>"#;
        let out = dump_str(xml)?;
        assert_eq!(
            out,
            "doc\n\txmlns: urn:d\n\txmlns:x: urn:x\n\tx:item: v\n\t\tx:id: 1\n"
        );
        Ok(())
    }

    #[test]
    fn test_written_prefix_is_kept_when_uris_repeat() -> Result<()> {
        let xml = r#"<r xmlns:a="urn:same" xmlns:b="urn:same"><b:c a:k="1" b:k2="2"/></r>"#;
        let doc = parse_str(xml, &ParserConfig::default())?;
        let c = doc.root_element().first_element_child().unwrap();

        assert_eq!(qualified_name(c), "b:c");
        assert_eq!(attribute_pairs(c), vec![("a:k", "1"), ("b:k2", "2")]);
        Ok(())
    }

    // Helper Tests
    #[test]
    fn test_helpers() -> Result<()> {
        let doc = parse_str("<a>t<b>u</b><!--c--></a>", &ParserConfig::default())?;
        let root = doc.root_element();

        assert!(has_element_children(root));
        assert_eq!(text_content(root), "tu");
        assert_eq!(qualified_name(root), "a");

        let b = root.first_element_child().unwrap();
        assert!(!has_element_children(b));
        assert_eq!(text_content(b), "u");
        Ok(())
    }

    #[test]
    fn test_formatter_writes_to_any_writer() -> Result<()> {
        let doc = parse_str("<a><b/></a>", &ParserConfig::default())?;
        let mut out = Vec::new();
        TreeFormatter::default()
            .write(&mut out, doc.root_element())
            .map_err(Error::from_write)?;
        assert_eq!(String::from_utf8_lossy(&out), "a\n\tb: \n");
        Ok(())
    }
}
